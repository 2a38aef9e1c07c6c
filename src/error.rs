use thiserror::Error;

/// Errors raised while inspecting the embedded health schema.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to decode file descriptor set: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("file not found in descriptor set: {0}")]
    MissingFile(String),
    #[error("service not found in descriptor set: {0}")]
    MissingService(String),
    #[error("enum not found in descriptor set: {0}")]
    MissingEnum(String),
}

pub type Result<T> = std::result::Result<T, Error>;
