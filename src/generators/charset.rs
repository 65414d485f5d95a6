// src/generators/charset.rs
use crate::models::{CharCategory, PasswordGenerationOptions};
use super::{GenerationError, Result};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const UPPERCASE_NO_SIMILAR: &str = "ABCDEFGHJKMNPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const LOWERCASE_NO_SIMILAR: &str = "abcdefghjkmnpqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const DIGITS_NO_SIMILAR: &str = "23456789";
// Never filtered, so any enabled symbol category keeps the pool non-empty
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to confuse with one another on screen.
#[cfg(test)]
pub const SIMILAR_CHARACTERS: &str = "il1Lo0IO";

impl CharCategory {
    pub fn alphabet(self, exclude_similar: bool) -> &'static str {
        match (self, exclude_similar) {
            (CharCategory::Uppercase, false) => UPPERCASE,
            (CharCategory::Uppercase, true) => UPPERCASE_NO_SIMILAR,
            (CharCategory::Lowercase, false) => LOWERCASE,
            (CharCategory::Lowercase, true) => LOWERCASE_NO_SIMILAR,
            (CharCategory::Number, false) => DIGITS,
            (CharCategory::Number, true) => DIGITS_NO_SIMILAR,
            (CharCategory::Symbol, _) => SYMBOLS,
        }
    }

    pub fn contains(self, c: char, exclude_similar: bool) -> bool {
        self.alphabet(exclude_similar).contains(c)
    }
}

/// Ordered set of characters a password is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn build(options: &PasswordGenerationOptions) -> Result<Self> {
        let categories = options.enabled_categories();
        if categories.is_empty() {
            return Err(GenerationError::NoCategorySelected);
        }

        let chars: Vec<char> = categories
            .iter()
            .flat_map(|category| category.alphabet(options.exclude_similar).chars())
            .collect();

        let pool = Self { chars };
        if pool.is_empty() {
            return Err(GenerationError::EmptyPool);
        }
        Ok(pool)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}
