//! @ai:module:intent Define error types for enum extraction and value model building
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use crate::model::BaseType;
use crate::value::LiteralError;
use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all enumgen operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("ENUM declaration of `{type_name}` has a dangling '(' ({depth} left open)")]
    UnbalancedBlock { type_name: String, depth: usize },

    #[error("Failed parsing the value `{literal}` of `{member}` in `{type_name}` as {base}: {source}")]
    InvalidNumericLiteral {
        type_name: String,
        member: String,
        literal: String,
        base: BaseType,
        #[source]
        source: LiteralError,
    },

    #[error("Value of `{member}` in `{type_name}` overflows the 64-bit counter")]
    CounterOverflow { type_name: String, member: String },

    #[error("Invalid alias entry `{0}`, must be in the format \"key:value\"")]
    InvalidAlias(String),

    #[error("Failed to parse config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// @ai:intent Short diagnostic code for per-declaration failures
    /// @ai:effects pure
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnbalancedBlock { .. } => "E001",
            Error::InvalidNumericLiteral { .. } => "E002",
            Error::CounterOverflow { .. } => "E003",
            _ => "E000",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
