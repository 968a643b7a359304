use thiserror::Error;

#[derive(Error, Debug)]
pub enum CadastroError {
    #[error("identifier must have 11 digits (CPF) or 14 digits (CNPJ), got {digits}")]
    InvalidLength { digits: usize },

    #[error("identifier is a repeated-digit sequence")]
    InvalidIdentifier,

    #[error("identifier check digits do not match")]
    ChecksumMismatch,

    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    #[error("completion service unavailable: {message}")]
    CompletionUnavailable { message: String },

    #[error("invalid {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("{field} already registered: {value}")]
    Duplicate { field: String, value: String },

    #[error("customer not found: {id}")]
    NotFound { id: u64 },

    #[error("customer notification failed: {message}")]
    NotificationFailed { message: String },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CadastroError>;
