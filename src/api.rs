use crate::config::Config;
use crate::error::HeroError;
use crate::json::heroes_from_value;
use crate::model::Hero;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use std::time::Duration;

pub const HERO_STATS_PATH: &str = "/api/heroStats";

/// Something that can GET a path and hand back parsed JSON.
pub trait Transport {
    fn get_json(&self, path: &str) -> Result<Value, HeroError>;
}

/// Blocking HTTP transport against a single API host.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HeroError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| HeroError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, HeroError> {
        Self::new(&config.api_base_url, config.timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, path: &str) -> Result<Value, HeroError> {
        let url = self.url(path);
        log::debug!("curl -X GET '{}' -H 'Content-Type: application/json'", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| get_error(path, e))?;
        log::debug!("GET {} -> {}", path, response.status());

        let response = response.error_for_status().map_err(|e| get_error(path, e))?;
        response.json::<Value>().map_err(|e| get_error(path, e))
    }
}

fn get_error(path: &str, e: impl std::fmt::Display) -> HeroError {
    HeroError::Request {
        method: "GET",
        path: path.to_string(),
        message: e.to_string(),
    }
}

/// Read-only access to the hero stats endpoint.
pub struct HeroStatsApi<T: Transport> {
    transport: T,
}

impl<T: Transport> HeroStatsApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch every hero once, in the order the API returns them.
    pub fn get_hero_stats(&self) -> Result<Vec<Hero>, HeroError> {
        let payload = self.transport.get_json(HERO_STATS_PATH)?;
        let heroes = heroes_from_value(&payload)?;
        log::debug!("mapped {} heroes from {}", heroes.len(), HERO_STATS_PATH);
        Ok(heroes)
    }
}

impl HeroStatsApi<HttpTransport> {
    pub fn from_config(config: &Config) -> Result<Self, HeroError> {
        Ok(Self::new(HttpTransport::from_config(config)?))
    }
}
