use thiserror::Error;

pub type FeatchatResult<T> = Result<T, FeatchatError>;

#[derive(Debug, Error)]
pub enum FeatchatError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FeatchatError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        FeatchatError::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        FeatchatError::Config(msg.into())
    }
}
