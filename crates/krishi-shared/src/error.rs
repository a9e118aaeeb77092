//! Error types for the Krishi router.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KrishiError {
    #[error("Invalid query: text is empty")]
    InvalidQuery,

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Refiner error: {0}")]
    Refiner(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KrishiError {
    pub fn code(&self) -> i32 {
        match self {
            KrishiError::InvalidQuery => -32602,
            KrishiError::UnknownDomain(_) => -32001,
            KrishiError::Config(_) => -32002,
            KrishiError::Refiner(_) => -32003,
            KrishiError::Io(_) => -32004,
            KrishiError::TomlParse(_) | KrishiError::TomlWrite(_) => -32005,
            KrishiError::Json(_) => -32700,
        }
    }
}
