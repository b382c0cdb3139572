//! Errors specific to the Gradle host and its configuration sources.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradleError {
    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid appConfig extension: {message}")]
    InvalidExtension { message: String },

    #[error("Task '{name}' is already registered")]
    DuplicateTask { name: String },

    #[error(transparent)]
    Core(#[from] depset_core::DepsetError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GradleError>;

impl From<GradleError> for depset_core::DepsetError {
    fn from(err: GradleError) -> Self {
        match err {
            GradleError::ParseError { message } => Self::ParseError {
                file_type: "configuration".into(),
                message,
            },
            GradleError::InvalidExtension { message } => Self::ParseError {
                file_type: "appConfig".into(),
                message,
            },
            GradleError::DuplicateTask { name } => Self::ParseError {
                file_type: "task graph".into(),
                message: format!("task '{name}' is already registered"),
            },
            GradleError::Core(e) => e,
            GradleError::Io(e) => Self::Io(e),
        }
    }
}

impl From<toml_edit::TomlError> for GradleError {
    fn from(err: toml_edit::TomlError) -> Self {
        Self::ParseError {
            message: err.to_string(),
        }
    }
}
