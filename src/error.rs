use thiserror::Error;

/// Custom error types for party-planner
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid config file {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid history file: {0}")]
    InvalidHistory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Ai(#[from] crate::ai::AiError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
