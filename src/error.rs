//! @ai:module:intent Define error types for the TODO checker
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all checker operations
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

    #[error("Failed to read standard input: {0}")]
    StdinRead(#[source] std::io::Error),

    #[error("Tokenize error at line {row}: {message}")]
    Tokenize { row: usize, message: String },

    #[error("Duplicate codes for rules: T00{0} registered twice")]
    DuplicateRuleCode(u32),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid tag pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    /// @ai:intent Tell whether the error means the input itself could not be read
    /// @ai:effects pure
    pub fn is_unreadable_input(&self) -> bool {
        matches!(
            self,
            Error::FileRead { .. } | Error::StdinRead(_) | Error::Io(_) | Error::Walk(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
