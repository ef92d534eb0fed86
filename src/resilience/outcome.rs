use crate::data::error::FetchError;

/// Result of one fetch as seen by the application state.
#[derive(Debug, Clone)]
pub enum FetchOutcome<T> {
    Success(T),
    NetworkError(String),
    DecodeError(String),
}

impl<T> FetchOutcome<T> {
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::NetworkError(msg) | Self::DecodeError(msg) => Some(msg),
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchOutcome<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) if err.is_decode() => Self::DecodeError(err.to_string()),
            Err(err) => Self::NetworkError(err.to_string()),
        }
    }
}
