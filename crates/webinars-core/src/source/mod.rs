//! Webinar Sources
//!
//! Where the listing page gets its records from.

mod mock;

pub use mock::MockWebinarSource;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Webinar;

/// Fetch capability behind the listing page (Strategy pattern)
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait WebinarSource {
    /// Fetch every webinar to list
    async fn fetch(&self) -> Result<Vec<Webinar>>;

    /// Source name, for logs
    fn name(&self) -> &str;
}
