//! Errors raised while resolving and applying dependency sets.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepsetError {
    #[error("Invalid dependency coordinate '{coordinate}': expected 'group:artifact[:version]'")]
    InvalidCoordinate { coordinate: String },

    #[error("Unsupported code version '{version}': no JavaVersion constant VERSION_{version}")]
    InvalidCodeVersion { version: String },

    #[error("Failed to parse {file_type}: {message}")]
    ParseError { file_type: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DepsetError>;
