//! Webinar sources for the browser

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use webinars_core::{ListingConfig, Result, Webinar, WebinarError, WebinarSource, catalog};

/// Shared handle to whichever source the listing page uses
pub type SharedSource = Arc<dyn WebinarSource + Send + Sync>;

/// Settings baked in at build time from `WEBINARS_*` variables
pub fn config() -> ListingConfig {
    ListingConfig::from_lookup(|key| {
        let value = match key {
            "WEBINARS_LATENCY_MS" => option_env!("WEBINARS_LATENCY_MS"),
            "WEBINARS_API_URL" => option_env!("WEBINARS_API_URL"),
            "WEBINARS_UTC_OFFSET_MINUTES" => option_env!("WEBINARS_UTC_OFFSET_MINUTES"),
            _ => None,
        };
        value.map(String::from)
    })
}

/// Pick the HTTP source when an API URL is configured, the simulated one otherwise
pub fn source_for(config: &ListingConfig) -> SharedSource {
    match &config.api_url {
        Some(url) => Arc::new(HttpSource::new(url.clone())),
        None => Arc::new(SimulatedSource::new(config.latency())),
    }
}

/// Serves the built-in catalog after an artificial network delay
pub struct SimulatedSource {
    latency: Duration,
}

impl SimulatedSource {
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait(?Send)]
impl WebinarSource for SimulatedSource {
    async fn fetch(&self) -> Result<Vec<Webinar>> {
        let millis = u32::try_from(self.latency.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis).await;
        Ok(catalog())
    }

    fn name(&self) -> &str {
        "SimulatedSource"
    }
}

/// Fetches a JSON array of webinars
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub const fn new(url: String) -> Self {
        Self { url }
    }
}

#[async_trait(?Send)]
impl WebinarSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<Webinar>> {
        let client = reqwest::Client::new();

        let response = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| WebinarError::FetchFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebinarError::FetchFailure(format!(
                "{} returned {}",
                self.url, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WebinarError::FetchFailure(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn name(&self) -> &str {
        "HttpSource"
    }
}
