//! Mock Webinar Source
//!
//! Answers instantly. Used by tests and anywhere the artificial delay is unwanted.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use super::WebinarSource;
use crate::error::{Result, WebinarError};
use crate::model::{Webinar, catalog};

/// Instant source with scriptable failures
pub struct MockWebinarSource {
    records: Vec<Webinar>,
    /// Number of upcoming fetches that fail; `u32::MAX` means always
    failures_left: AtomicU32,
    calls: AtomicU32,
}

impl Default for MockWebinarSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWebinarSource {
    /// Serves the full catalog
    pub fn new() -> Self {
        Self::with_records(catalog())
    }

    pub fn with_records(records: Vec<Webinar>) -> Self {
        Self {
            records,
            failures_left: AtomicU32::new(0),
            calls: AtomicU32::new(0),
        }
    }

    /// Serves no records at all
    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }

    /// Every fetch fails
    pub fn failing() -> Self {
        Self::failing_times(u32::MAX)
    }

    /// The first `n` fetches fail, later ones serve the catalog
    pub fn failing_times(n: u32) -> Self {
        let source = Self::new();
        source.failures_left.store(n, Ordering::SeqCst);
        source
    }

    /// How many times `fetch` ran
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl WebinarSource for MockWebinarSource {
    async fn fetch(&self) -> Result<Vec<Webinar>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let left = self.failures_left.load(Ordering::SeqCst);
        if left > 0 {
            if left != u32::MAX {
                self.failures_left.store(left - 1, Ordering::SeqCst);
            }
            return Err(WebinarError::FetchFailure("mock failure".into()));
        }

        Ok(self.records.clone())
    }

    fn name(&self) -> &str {
        "MockWebinarSource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_serves_catalog() {
        let source = MockWebinarSource::new();
        let webinars = source.fetch().await.unwrap();
        assert_eq!(webinars.len(), 6);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_failing_times_recovers() {
        let source = MockWebinarSource::failing_times(2);
        assert!(source.fetch().await.is_err());
        assert!(source.fetch().await.is_err());
        assert_eq!(source.fetch().await.unwrap().len(), 6);
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn test_failing_never_recovers() {
        let source = MockWebinarSource::failing();
        for _ in 0..5 {
            assert!(source.fetch().await.is_err());
        }
    }

    #[tokio::test]
    async fn test_empty() {
        assert!(MockWebinarSource::empty().fetch().await.unwrap().is_empty());
    }
}
