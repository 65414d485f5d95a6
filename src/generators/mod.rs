// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod coverage;
pub mod password;
pub mod random;

pub use charset::CharacterPool;
pub use password::{validate_options, PasswordGenerator};
pub use random::RandomSource;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Password length must be between 6 and 32 characters (got {0})")]
    InvalidLength(usize),

    #[error("Select at least one character type")]
    NoCategorySelected,

    #[error("The selected character types leave no usable characters")]
    EmptyPool,
}

pub type Result<T> = std::result::Result<T, GenerationError>;
