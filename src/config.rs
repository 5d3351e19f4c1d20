use crate::error::HeroError;
use std::time::Duration;

/// Default OpenDota API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api.opendota.com";

/// Default host that hero portraits and icons are served from.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://cdn.cloudflare.steamstatic.com";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub const ENV_API_BASE_URL: &str = "DOTA_API_BASE_URL";
pub const ENV_IMAGE_BASE_URL: &str = "DOTA_IMAGE_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "DOTA_API_TIMEOUT_SECS";

/// Static endpoints and limits for talking to the stats API.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub image_base_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Defaults overridden by `DOTA_API_BASE_URL`, `DOTA_IMAGE_BASE_URL` and
    /// `DOTA_API_TIMEOUT_SECS` when they are set.
    pub fn from_env() -> Result<Self, HeroError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HeroError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_API_BASE_URL) {
            config.api_base_url = url;
        }
        if let Some(url) = lookup(ENV_IMAGE_BASE_URL) {
            config.image_base_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout = parse_timeout(&secs)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HeroError> {
        if self.api_base_url.trim().is_empty() {
            return Err(HeroError::Config("API base URL is empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(HeroError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}

pub fn parse_timeout(secs: &str) -> Result<Duration, HeroError> {
    secs.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| HeroError::Config(format!("invalid timeout seconds: {:?}", secs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_base_url, "https://api.opendota.com");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_BASE_URL, "http://localhost:8080"),
            (ENV_IMAGE_BASE_URL, "http://img.local"),
            (ENV_TIMEOUT_SECS, " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.image_base_url, "http://img.local");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")])),
            Err(HeroError::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "0")])),
            Err(HeroError::Config(_))
        ));
        assert!(matches!(
            Config::from_lookup(lookup_from(&[(ENV_API_BASE_URL, "  ")])),
            Err(HeroError::Config(_))
        ));
    }
}
