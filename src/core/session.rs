// src/core/session.rs
use std::time::Duration;

use crate::clipboard::{ClipboardChain, ClipboardError, CopyMethod};
use crate::core::config::Config;
use crate::core::history::History;
use crate::core::notification::Notification;
use crate::generators::{validate_options, GenerationError, PasswordGenerator};
use crate::models::{HistoryEntry, PasswordGenerationOptions, ThemeMode};
use crate::storage::{self, KeyValueStore, HISTORY_KEY, SETTINGS_KEY, THEME_KEY};
use crate::strength::{self, Strength};
use crate::utils::local_timestamp;

/// What the password display currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutput {
    Empty,
    Password { password: String, strength: Strength },
    Error(GenerationError),
}

impl GenerationOutput {
    // Only a real password may be copied
    pub fn password(&self) -> Option<&str> {
        match self {
            GenerationOutput::Password { password, .. } => Some(password.as_str()),
            _ => None,
        }
    }

    pub fn strength(&self) -> Strength {
        match self {
            GenerationOutput::Password { strength, .. } => *strength,
            _ => Strength::Unscored,
        }
    }
}

/// State of one run of the generator: settings, history and theme loaded
/// from the store, plus whatever is currently on screen.
pub struct Session {
    store: Box<dyn KeyValueStore>,
    generator: PasswordGenerator,
    options: PasswordGenerationOptions,
    history: History,
    theme: ThemeMode,
    output: GenerationOutput,
    notification: Option<Notification>,
    notification_duration: Duration,
}

impl Session {
    pub fn load(store: Box<dyn KeyValueStore>, generator: PasswordGenerator, config: &Config) -> Self {
        let options = match storage::load_record::<Option<PasswordGenerationOptions>>(store.as_ref(), SETTINGS_KEY) {
            Some(saved) => match validate_options(&saved) {
                Ok(()) => saved,
                Err(e) => {
                    log::warn!("Ignoring saved generator settings ({}), using defaults", e);
                    config.default_options()
                }
            },
            None => config.default_options(),
        };
        let history = History::from_entries(storage::load_record::<Vec<HistoryEntry>>(store.as_ref(), HISTORY_KEY));
        let theme = storage::load_record::<ThemeMode>(store.as_ref(), THEME_KEY);

        log::debug!("Session loaded with {} history entries, {} theme", history.len(), theme);

        Self {
            store,
            generator,
            options,
            history,
            theme,
            output: GenerationOutput::Empty,
            notification: None,
            notification_duration: config.notification_duration,
        }
    }

    pub fn options(&self) -> &PasswordGenerationOptions {
        &self.options
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn output(&self) -> &GenerationOutput {
        &self.output
    }

    pub fn is_secure(&self) -> bool {
        self.generator.is_secure()
    }

    /// Replace the generation settings and save them.
    ///
    /// Invalid settings are rejected: the error is shown in place of the
    /// password and the previous settings stay in effect and on disk.
    pub fn update_options(&mut self, options: PasswordGenerationOptions) -> Result<(), GenerationError> {
        if let Err(e) = validate_options(&options) {
            log::warn!("Rejected generator settings: {}", e);
            self.output = GenerationOutput::Error(e.clone());
            return Err(e);
        }

        self.options = options;
        if let Err(e) = storage::save_record(self.store.as_mut(), SETTINGS_KEY, &self.options) {
            log::error!("Failed to save generator settings: {}", e);
        }
        Ok(())
    }

    /// Generate a password from the current settings.
    ///
    /// On success the password is scored and recorded in the history. On
    /// failure the error replaces the displayed password and the history is
    /// left alone.
    pub fn generate(&mut self) -> &GenerationOutput {
        self.output = match self.generator.generate_password(&self.options) {
            Ok(password) => {
                let strength = strength::analyze_password_strength(&password);
                self.history.record(&password, local_timestamp());
                if let Err(e) = self.history.persist(self.store.as_mut()) {
                    log::error!("Failed to save password history: {}", e);
                }
                if let Err(e) = storage::save_record(self.store.as_mut(), SETTINGS_KEY, &self.options) {
                    log::error!("Failed to save generator settings: {}", e);
                }
                GenerationOutput::Password { password, strength }
            }
            Err(e) => {
                log::warn!("Password generation failed: {}", e);
                GenerationOutput::Error(e)
            }
        };
        &self.output
    }

    /// Clear the history. Does nothing unless the caller confirmed.
    pub fn clear_history(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }
        self.history.clear();
        if let Err(e) = self.store.remove(HISTORY_KEY) {
            log::error!("Failed to remove password history: {}", e);
        }
        self.notify("History cleared");
        true
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        if let Err(e) = storage::save_record(self.store.as_mut(), THEME_KEY, &self.theme) {
            log::error!("Failed to save theme: {}", e);
        }
        self.theme
    }

    /// Copy the displayed password. Returns `None` when there is nothing to copy.
    pub fn copy_current(&mut self, clipboard: &mut ClipboardChain) -> Result<Option<CopyMethod>, ClipboardError> {
        let password = match self.output.password() {
            Some(password) => password.to_string(),
            None => return Ok(None),
        };
        self.copy_text(&password, clipboard).map(Some)
    }

    pub fn copy_history_entry(
        &mut self,
        index: usize,
        clipboard: &mut ClipboardChain,
    ) -> Result<Option<CopyMethod>, ClipboardError> {
        let password = match self.history.get(index) {
            Some(entry) => entry.password.clone(),
            None => return Ok(None),
        };
        self.copy_text(&password, clipboard).map(Some)
    }

    fn copy_text(&mut self, text: &str, clipboard: &mut ClipboardChain) -> Result<CopyMethod, ClipboardError> {
        let method = clipboard.copy(text)?;
        self.notify("Password copied!");
        Ok(method)
    }

    pub fn notify(&mut self, message: &str) {
        self.notification = Some(Notification::new(message, self.notification_duration));
    }

    // Active notification, dropping it once expired
    pub fn notification(&mut self) -> Option<&Notification> {
        if self.notification.as_ref().map_or(false, Notification::is_expired) {
            self.notification = None;
        }
        self.notification.as_ref()
    }
}
