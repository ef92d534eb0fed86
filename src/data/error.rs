use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{endpoint} request failed: {source}")]
    Network {
        endpoint: &'static str,
        source: reqwest::Error,
    },
    #[error("{endpoint} request returned HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("failed to decode {endpoint} payload: {source}")]
    Decode {
        endpoint: &'static str,
        source: serde_json::Error,
    },
}

impl FetchError {
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
