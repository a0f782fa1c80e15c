//! Prompta - a personal prompt-library manager
//!
//! Create, list, edit, and execute reusable text templates with
//! `{{name}}` substitution parameters, stored locally and copied to
//! the clipboard when rendered.

pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod store;
pub mod template;
pub mod utils;

// Re-export core types for easier use
pub use models::{Parameter, Prompt, PromptCollection};
pub use store::Store;
pub use template::{extract_parameters, render_template};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
