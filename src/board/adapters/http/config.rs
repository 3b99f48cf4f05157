//! Connection settings for [`super::HttpTaskStore`].

use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Environment variable holding the store's base URL.
pub const STORE_URL_ENV: &str = "TASKBOARD_STORE_URL";

/// Environment variable holding an optional request timeout in seconds.
pub const STORE_TIMEOUT_ENV: &str = "TASKBOARD_STORE_TIMEOUT_SECS";

/// Errors raised while building an HTTP store configuration.
#[derive(Debug, Error)]
pub enum HttpTaskStoreConfigError {
    /// The base URL variable is not set.
    #[error("TASKBOARD_STORE_URL is not set")]
    MissingBaseUrl,

    /// The base URL does not parse.
    #[error("invalid task store URL '{value}': {source}")]
    InvalidBaseUrl {
        /// Raw value that failed to parse.
        value: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("task store URL '{0}' cannot be used as a base")]
    NotABase(String),

    /// The timeout is not a whole number of seconds.
    #[error("invalid TASKBOARD_STORE_TIMEOUT_SECS value '{0}'")]
    InvalidTimeout(String),
}

/// Settings for the HTTP task store client.
///
/// Requests carry no timeout unless one is configured; a hung call leaves
/// the caller waiting until the transport gives up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTaskStoreConfig {
    /// Base URL under which the `tasks` resource lives.
    pub base_url: Url,
    /// Optional per-request timeout.
    pub timeout: Option<Duration>,
}

impl HttpTaskStoreConfig {
    /// Creates a configuration for `base_url` without a timeout.
    ///
    /// # Errors
    ///
    /// Returns [`HttpTaskStoreConfigError::InvalidBaseUrl`] when the value
    /// does not parse, or [`HttpTaskStoreConfigError::NotABase`] when it
    /// cannot carry path segments.
    pub fn new(base_url: &str) -> Result<Self, HttpTaskStoreConfigError> {
        let url = Url::parse(base_url).map_err(|source| HttpTaskStoreConfigError::InvalidBaseUrl {
            value: base_url.to_owned(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(HttpTaskStoreConfigError::NotABase(base_url.to_owned()));
        }
        Ok(Self {
            base_url: url,
            timeout: None,
        })
    }

    /// Sets a per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`HttpTaskStoreConfigError`] when the URL is missing or
    /// malformed, or the timeout is not a number of seconds.
    pub fn from_env() -> Result<Self, HttpTaskStoreConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`HttpTaskStoreConfig::from_env`].
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, HttpTaskStoreConfigError> {
        let base_url = lookup(STORE_URL_ENV).ok_or(HttpTaskStoreConfigError::MissingBaseUrl)?;
        let config = Self::new(&base_url)?;
        match lookup(STORE_TIMEOUT_ENV) {
            None => Ok(config),
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| HttpTaskStoreConfigError::InvalidTimeout(raw.clone()))?;
                Ok(config.with_timeout(Duration::from_secs(secs)))
            }
        }
    }
}
