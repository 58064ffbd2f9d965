//! Listing Lifecycle
//!
//! State owned by the listing page: one fetch at a time, and exactly one of
//! loading, error or loaded at any moment.

use crate::error::Result;
use crate::model::Webinar;
use crate::source::WebinarSource;

/// Message shown in the error panel for any failed fetch
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load webinars. Please try again later.";

/// What the listing page currently shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListingState {
    #[default]
    Loading,
    Error(String),
    /// May be empty, which renders the "no webinars" panel
    Loaded(Vec<Webinar>),
}

impl ListingState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded with zero records
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Loaded(webinars) if webinars.is_empty())
    }

    pub fn webinars(&self) -> &[Webinar] {
        match self {
            Self::Loaded(webinars) => webinars,
            _ => &[],
        }
    }

    /// Settle a fetch outcome. Failures show [`FETCH_ERROR_MESSAGE`]; the cause is only logged.
    pub fn from_fetch(result: Result<Vec<Webinar>>) -> Self {
        match result {
            Ok(webinars) => Self::Loaded(webinars),
            Err(e) => {
                tracing::error!("Error fetching webinars: {}", e);
                Self::Error(FETCH_ERROR_MESSAGE.into())
            }
        }
    }
}

/// Listing page controller
///
/// `begin` and `complete` are split so a UI can hold the controller in a
/// reactive cell and await the fetch outside of it. `load` does both.
#[derive(Clone, Debug, Default)]
pub struct Listing {
    state: ListingState,
    in_flight: bool,
}

impl Listing {
    /// Starts out loading, as the page fetches on mount
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> &ListingState {
        &self.state
    }

    pub const fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Enter `Loading`. Returns false if a fetch is already running.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            tracing::debug!("Fetch already in flight, ignoring");
            return false;
        }
        self.in_flight = true;
        self.state = ListingState::Loading;
        true
    }

    /// Settle the running fetch. Never leaves the listing in `Loading`.
    pub fn complete(&mut self, result: Result<Vec<Webinar>>) {
        self.in_flight = false;
        self.state = ListingState::from_fetch(result);
        if let ListingState::Loaded(webinars) = &self.state {
            tracing::debug!("Loaded {} webinars", webinars.len());
        }
    }

    /// Fetch from `source` and settle
    pub async fn load<S>(&mut self, source: &S) -> &ListingState
    where
        S: WebinarSource + ?Sized,
    {
        if self.begin() {
            tracing::debug!("Fetching webinars from {}", source.name());
            let result = source.fetch().await;
            self.complete(result);
        }
        &self.state
    }

    /// Re-run the fetch after an error
    pub async fn retry<S>(&mut self, source: &S) -> &ListingState
    where
        S: WebinarSource + ?Sized,
    {
        self.load(source).await
    }
}

/// Placeholder for the card's "view details" action
pub fn view_details(id: &str) {
    tracing::info!("Viewing details for webinar ID: {}", id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WebinarError;
    use crate::model::catalog;
    use crate::source::MockWebinarSource;

    #[test]
    fn test_new_listing_is_loading() {
        let listing = Listing::new();
        assert!(listing.state().is_loading());
        assert!(!listing.in_flight());
    }

    #[tokio::test]
    async fn test_load_success() {
        let mut listing = Listing::new();
        let state = listing.load(&MockWebinarSource::new()).await;
        assert_eq!(state, &ListingState::Loaded(catalog()));
        assert!(!listing.in_flight());
    }

    #[tokio::test]
    async fn test_load_failure_shows_static_message() {
        let mut listing = Listing::new();
        let state = listing.load(&MockWebinarSource::failing()).await;
        assert_eq!(state, &ListingState::Error(FETCH_ERROR_MESSAGE.into()));
        assert!(!listing.in_flight());
    }

    #[tokio::test]
    async fn test_retry_recovers_with_same_records() {
        let source = MockWebinarSource::failing_times(1);
        let mut listing = Listing::new();

        assert!(matches!(listing.load(&source).await, ListingState::Error(_)));

        let state = listing.retry(&source).await;
        assert_eq!(state, &ListingState::Loaded(catalog()));
        assert!(!listing.in_flight());
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn test_every_failure_shows_static_message() {
        for err in [
            WebinarError::FetchFailure("boom".into()),
            WebinarError::InvalidDate("someday".into()),
            serde_json::from_str::<Vec<u8>>("{").unwrap_err().into(),
        ] {
            assert_eq!(
                ListingState::from_fetch(Err(err)),
                ListingState::Error(FETCH_ERROR_MESSAGE.into())
            );
        }
    }

    #[tokio::test]
    async fn test_repeated_loads_are_idempotent() {
        let source = MockWebinarSource::new();
        let mut listing = Listing::new();
        let first = listing.load(&source).await.clone();
        let second = listing.load(&source).await.clone();
        assert_eq!(first, second);
        assert_eq!(source.calls(), 2);
    }

    #[test]
    fn test_begin_refuses_second_fetch() {
        let mut listing = Listing::new();
        assert!(listing.begin());
        assert!(!listing.begin());
        listing.complete(Err(WebinarError::FetchFailure("boom".into())));
        assert!(listing.begin());
    }

    #[test]
    fn test_complete_never_leaves_loading() {
        for result in [
            Ok(catalog()),
            Ok(Vec::new()),
            Err(WebinarError::FetchFailure("boom".into())),
        ] {
            let mut listing = Listing::new();
            listing.begin();
            listing.complete(result);
            assert!(!listing.state().is_loading());
        }
    }

    #[tokio::test]
    async fn test_empty_is_distinct_from_error() {
        let mut listing = Listing::new();
        let state = listing.load(&MockWebinarSource::empty()).await;
        assert!(state.is_empty());
        assert!(!matches!(state, ListingState::Error(_)));
        assert!(state.webinars().is_empty());
    }

    #[test]
    fn test_error_state_is_not_empty() {
        assert!(!ListingState::Error("x".into()).is_empty());
        assert!(!ListingState::Loading.is_empty());
    }
}
