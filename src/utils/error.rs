use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("System error: {0}")]
    System(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for the configuration layer
pub type AppResult<T> = Result<T, AppError>;

/// Outcomes of an interactive flow that are notifications, not errors
pub enum FlowResult {
    EmptyList { item_type: String },
    Cancelled(String),
}

pub fn handle_flow(flow: FlowResult) {
    match flow {
        FlowResult::EmptyList { item_type } => {
            let msg = format!("No {item_type} found. Create one with the create command.");
            println!("{}", OutputStyle::muted(&msg));
        }
        FlowResult::Cancelled(msg) => {
            println!("{}", OutputStyle::muted(&msg));
        }
    }
}
