pub mod clipboard;
pub mod editor;
pub mod error;
pub mod interactive;
pub mod output;
pub mod time_format;

pub use clipboard::*;
pub use interactive::*;
pub use output::*;
