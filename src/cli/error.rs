//! CLI-level errors (wraps builder and domain errors)

use thiserror::Error;

use crate::builder::BuildError;
use crate::domain::NodeError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Node(#[from] NodeError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Build(BuildError::DirectoryNotFound(_))
            | CliError::Build(BuildError::NotADirectory(_)) => crate::exitcode::NOINPUT,
            CliError::Build(_) => crate::exitcode::IOERR,
            CliError::Node(_) | CliError::Serialize(_) => crate::exitcode::SOFTWARE,
            CliError::Config(_) => crate::exitcode::CONFIG,
        }
    }
}
