// src/models.rs
use serde::{Serialize, Deserialize};

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 32;

// Password generation options, also persisted as the last-used settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
        }
    }
}

impl PasswordGenerationOptions {
    pub fn includes(&self, category: CharCategory) -> bool {
        match category {
            CharCategory::Uppercase => self.include_uppercase,
            CharCategory::Lowercase => self.include_lowercase,
            CharCategory::Number => self.include_numbers,
            CharCategory::Symbol => self.include_symbols,
        }
    }

    /// Enabled categories in pool order.
    pub fn enabled_categories(&self) -> Vec<CharCategory> {
        CharCategory::ALL
            .into_iter()
            .filter(|category| self.includes(*category))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharCategory {
    Uppercase,
    Lowercase,
    Number,
    Symbol,
}

impl CharCategory {
    pub const ALL: [CharCategory; 4] = [
        CharCategory::Uppercase,
        CharCategory::Lowercase,
        CharCategory::Number,
        CharCategory::Symbol,
    ];
}

impl std::fmt::Display for CharCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharCategory::Uppercase => write!(f, "uppercase"),
            CharCategory::Lowercase => write!(f, "lowercase"),
            CharCategory::Number => write!(f, "numbers"),
            CharCategory::Symbol => write!(f, "symbols"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub password: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Light => write!(f, "light"),
        }
    }
}
