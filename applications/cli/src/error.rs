/// CLI error types
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] tonearm_core::TonearmError),
}

pub type Result<T> = std::result::Result<T, CliError>;
