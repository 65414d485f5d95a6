// src/core/mod.rs
pub mod config;
pub mod history;
pub mod notification;
pub mod session;

pub use session::{GenerationOutput, Session};
