// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::models::{PasswordGenerationOptions, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

pub const STORAGE_FILE_NAME: &str = "kairos.json";

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub data_dir: Option<PathBuf>,
    pub storage_quota_bytes: Option<usize>,

    // Password Generation
    pub default_password_length: usize,
    pub default_password_exclude_similar: bool,

    // Interface
    pub notification_duration: Duration,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Storage
            data_dir: None, // Resolved from the platform data dir when unset
            storage_quota_bytes: None,

            // Password Generation
            default_password_length: 16,
            default_password_exclude_similar: false,

            // Interface
            notification_duration: Duration::from_secs(2),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Storage
        if let Some(dir) = lookup("KAIROS_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Some(val) = lookup("STORAGE_QUOTA_BYTES") {
            match val.parse::<usize>() {
                Ok(0) => config.storage_quota_bytes = None,
                Ok(quota) => config.storage_quota_bytes = Some(quota),
                Err(_) => config.ignore("STORAGE_QUOTA_BYTES", &val),
            }
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse::<usize>() {
                Ok(length) if (MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) => {
                    config.default_password_length = length;
                }
                _ => config.ignore("DEFAULT_PASSWORD_LENGTH", &val),
            }
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_EXCLUDE_SIMILAR") {
            match val.parse() {
                Ok(exclude) => config.default_password_exclude_similar = exclude,
                Err(_) => config.ignore("DEFAULT_PASSWORD_EXCLUDE_SIMILAR", &val),
            }
        }

        // Interface
        if let Some(val) = lookup("NOTIFICATION_SECONDS") {
            match val.parse::<u64>() {
                Ok(seconds) => config.notification_duration = Duration::from_secs(seconds),
                Err(_) => config.ignore("NOTIFICATION_SECONDS", &val),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config.ignore("LOG_LEVEL", &level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    fn ignore(&mut self, key: &str, value: &str) {
        self.warnings.push(format!("Ignoring invalid {} '{}'", key, value));
    }

    // Generation options used when nothing has been saved yet
    pub fn default_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.default_password_length,
            exclude_similar: self.default_password_exclude_similar,
            ..PasswordGenerationOptions::default()
        }
    }

    pub fn storage_path(&self) -> Option<PathBuf> {
        self.data_dir
            .clone()
            .or_else(crate::utils::get_app_data_dir)
            .map(|dir| dir.join(STORAGE_FILE_NAME))
    }
}
