use strokesense_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("model returned an invalid record: {0}")]
    InvalidRecord(#[from] CoreError),

    #[error("configuration error: {0}")]
    Config(String),
}
