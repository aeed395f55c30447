#[derive(Debug, thiserror::Error)]
pub enum RespiteError {
    /// No API credential is configured. Expected and silent: callers pick a
    /// degrade path instead of retrying.
    #[error("no API credential configured")]
    NoCredential,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("schema violation: {0}")]
    Schema(String),

    #[error("model returned an empty result")]
    EmptyResult,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RespiteError>;
