use std::env;

use url::Url;

use seekho_core::model::TrackId;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8002";
pub const DEFAULT_TRACK: &str = "solar-technician";

/// Where the remote curriculum and tutor services live, and which track the
/// app presents.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: Url,
    pub track: TrackId,
}

impl ApiConfig {
    /// Build a config from explicit values, validating the base URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if `base_url` does not parse.
    pub fn from_parts(base_url: &str, track: TrackId) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { base_url, track })
    }

    /// Build a config from `SEEKHO_API_BASE_URL` / `SEEKHO_TRACK`, falling
    /// back to the local development defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the env-provided URL does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("SEEKHO_API_BASE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.into());
        let track = env::var("SEEKHO_TRACK")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| TrackId::new(DEFAULT_TRACK), TrackId::new);
        Self::from_parts(&base_url, track)
    }

    /// Base URL without a trailing slash, ready for endpoint formatting.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}
