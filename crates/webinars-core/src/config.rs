//! Listing configuration
//!
//! Settings come from `WEBINARS_*` keys, which the browser build bakes in at
//! compile time, or from a JSON document.

use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_LATENCY_MS: u64 = 1500;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Artificial delay of the simulated fetch
    pub latency_ms: u64,

    /// Fetch records from this URL instead of the built-in catalog
    pub api_url: Option<String>,

    /// Render dates at this UTC offset instead of the viewer's timezone
    pub utc_offset_minutes: Option<i32>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
            api_url: None,
            utc_offset_minutes: None,
        }
    }
}

impl ListingConfig {
    /// Build from a key lookup, falling back to defaults for missing or bad values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let latency_ms = parse_or(&lookup, "WEBINARS_LATENCY_MS", defaults.latency_ms);
        let api_url = lookup("WEBINARS_API_URL").filter(|url| !url.trim().is_empty());
        let utc_offset_minutes = lookup("WEBINARS_UTC_OFFSET_MINUTES").and_then(|raw| {
            raw.trim()
                .parse()
                .inspect_err(|_| tracing::warn!("Ignoring WEBINARS_UTC_OFFSET_MINUTES={}", raw))
                .ok()
        });

        Self {
            latency_ms,
            api_url,
            utc_offset_minutes,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

fn parse_or<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring {}={}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ListingConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ListingConfig::default());
        assert_eq!(config.latency(), Duration::from_millis(1500));
    }

    #[test]
    fn test_from_lookup() {
        let config = ListingConfig::from_lookup(lookup(&[
            ("WEBINARS_LATENCY_MS", "250"),
            ("WEBINARS_API_URL", "https://example.test/webinars.json"),
            ("WEBINARS_UTC_OFFSET_MINUTES", "-300"),
        ]));
        assert_eq!(config.latency_ms, 250);
        assert_eq!(config.api_url.as_deref(), Some("https://example.test/webinars.json"));
        assert_eq!(config.utc_offset_minutes, Some(-300));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = ListingConfig::from_lookup(lookup(&[
            ("WEBINARS_LATENCY_MS", "soon"),
            ("WEBINARS_API_URL", "  "),
            ("WEBINARS_UTC_OFFSET_MINUTES", "east"),
        ]));
        assert_eq!(config, ListingConfig::default());
    }

    #[test]
    fn test_from_json_partial() {
        let config = ListingConfig::from_json(r#"{"latency_ms": 0}"#).unwrap();
        assert_eq!(config.latency_ms, 0);
        assert_eq!(config.api_url, None);
        assert!(ListingConfig::from_json("not json").is_err());
    }
}
