//! Error Types

use thiserror::Error;

/// Result type alias for webinar operations
pub type Result<T> = std::result::Result<T, WebinarError>;

#[derive(Error, Debug)]
pub enum WebinarError {
    /// The (simulated or remote) fetch failed
    #[error("Fetch failed: {0}")]
    FetchFailure(String),

    /// A record carried a timestamp that is not ISO-8601
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_display() {
        let err = WebinarError::FetchFailure("timeout".into());
        assert_eq!(err.to_string(), "Fetch failed: timeout");
    }

    #[test]
    fn test_decode_error_converts() {
        let err: WebinarError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, WebinarError::Serialization(_)));
    }
}
