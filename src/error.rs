//! Error taxonomy for backend calls

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request never produced a response (connect, timeout, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Non-OK status with a JSON body
    #[error("HTTP {status}{}", fmt_detail(.detail))]
    Protocol { status: u16, detail: Option<String> },
    /// Body did not have the expected shape
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

fn fmt_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    /// Server-provided detail, if the failure carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Protocol { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}
