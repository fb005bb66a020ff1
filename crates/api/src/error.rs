#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Tag record has no name")]
    MissingName,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
