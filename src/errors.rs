use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhoisError {
    #[error("Empty whois response")]
    EmptyInput,

    #[error("Response too large: {size} bytes (limit {limit})")]
    InputTooLarge { size: usize, limit: usize },

    #[error("Invalid key path: {0}")]
    InvalidKeyPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
