use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SieveError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SieveError {
    /// Short, stable name of the error variant.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::UnknownLanguage(_) => "UnknownLanguage",
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, SieveError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
