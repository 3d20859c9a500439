//!
//! ## Configuration for akismet-client
//!
//! The `Config` struct holds an Akismet API key and the registered site URL it
//! belongs to, plus the request timeout. It can be built explicitly or
//! discovered from the environment with [`Config::discover`].
//!

use std::env;

use typed_builder::TypedBuilder;

use crate::error::AkismetError;

/// Environment variable holding the Akismet API key.
pub const KEY_ENV_VAR: &str = "AKISMET_API_KEY";

/// Environment variable holding the registered site URL.
pub const URL_ENV_VAR: &str = "AKISMET_BLOG_URL";

/// Environment variable holding an optional request timeout override, in
/// seconds (integer or decimal).
pub const TIMEOUT_ENV_VAR: &str = "AKISMET_TIMEOUT";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT: f64 = 1.0;

/// Root URL of the Akismet web service.
pub const API_URL: &str = "https://rest.akismet.com";

/// Configuration for the Akismet client.
///
/// Two `Config` values with equal key and URL are interchangeable; the client
/// facade takes ownership of its `Config` and never mutates it.
#[derive(TypedBuilder, Debug, Clone, PartialEq)]
pub struct Config {
    /// Akismet API key
    pub api_key: String,

    /// Site URL registered for the API key, including the leading
    /// `http://` or `https://`
    pub site_url: String,

    /// Timeout duration for requests, in seconds
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: f64,

    /// Base URL of the Akismet service; overridable for test harnesses
    #[builder(default = API_URL.to_string())]
    pub api_url: String,
}

impl Config {
    /// Discover a configuration from the environment.
    ///
    /// Reads the API key from [`KEY_ENV_VAR`], the site URL from
    /// [`URL_ENV_VAR`], and an optional timeout from [`TIMEOUT_ENV_VAR`]
    /// (defaulting to [`DEFAULT_TIMEOUT`]).
    pub fn discover() -> Result<Config, AkismetError> {
        let key = env::var(KEY_ENV_VAR).ok().filter(|v| !v.is_empty());
        let url = env::var(URL_ENV_VAR).ok().filter(|v| !v.is_empty());
        let (key, url) = match (key, url) {
            (Some(key), Some(url)) => (key, url),
            (key, url) => {
                return Err(AkismetError::Configuration(format!(
                    "Could not find full Akismet configuration. Found API key: {:?}, found blog URL: {:?}",
                    key, url
                )));
            }
        };
        let timeout = match env::var(TIMEOUT_ENV_VAR) {
            Ok(raw) => raw.parse::<f64>().map_err(|_| {
                AkismetError::Configuration(format!(
                    "Invalid Akismet timeout specified: {:?}",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT,
        };
        let config = Config::builder()
            .api_key(key)
            .site_url(url)
            .timeout(timeout)
            .build();
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for shape: non-empty key, and a site URL
    /// carrying an explicit `http://` or `https://` scheme.
    pub(crate) fn validate(&self) -> Result<(), AkismetError> {
        if self.api_key.is_empty() {
            return Err(AkismetError::Configuration(
                "Empty Akismet API key specified".to_string(),
            ));
        }
        if !site_url_has_scheme(&self.site_url) {
            return Err(AkismetError::Configuration(format!(
                "Invalid Akismet site URL specified: {}. Akismet requires the full URL including the leading 'http://' or 'https://'.",
                self.site_url
            )));
        }
        Ok(())
    }
}

/// Akismet requires the full site URL including the scheme.
pub(crate) fn site_url_has_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    // Environment mutations are process-wide, so every test touching the
    // AKISMET_* variables must hold this lock.
    fn env_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(Mutex::default)
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn clear_env() {
        env::remove_var(KEY_ENV_VAR);
        env::remove_var(URL_ENV_VAR);
        env::remove_var(TIMEOUT_ENV_VAR);
    }

    #[test]
    fn builder_defaults() {
        let config = Config::builder()
            .api_key("abc123".to_string())
            .site_url("http://example.com".to_string())
            .build();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.api_url, API_URL);
    }

    #[test]
    fn equality_is_by_value() {
        let a = Config::builder()
            .api_key("abc123".to_string())
            .site_url("http://example.com".to_string())
            .build();
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn discover_round_trips() {
        let _guard = env_lock();
        clear_env();
        env::set_var(KEY_ENV_VAR, "abc123");
        env::set_var(URL_ENV_VAR, "http://example.com");
        env::set_var(TIMEOUT_ENV_VAR, "2.5");
        let config = Config::discover().unwrap();
        assert_eq!(
            config,
            Config::builder()
                .api_key("abc123".to_string())
                .site_url("http://example.com".to_string())
                .timeout(2.5)
                .build()
        );
        clear_env();
    }

    #[test]
    fn discover_requires_both_values() {
        let _guard = env_lock();
        clear_env();
        env::set_var(KEY_ENV_VAR, "abc123");
        let err = Config::discover().unwrap_err();
        assert!(matches!(err, AkismetError::Configuration(_)));
        assert!(err.is_configuration());
        clear_env();
    }

    #[test]
    fn discover_rejects_schemeless_url() {
        let _guard = env_lock();
        clear_env();
        env::set_var(KEY_ENV_VAR, "abc123");
        env::set_var(URL_ENV_VAR, "example.com");
        let err = Config::discover().unwrap_err();
        assert!(matches!(err, AkismetError::Configuration(_)));
        clear_env();
    }

    #[test]
    fn discover_rejects_unparseable_timeout() {
        let _guard = env_lock();
        clear_env();
        env::set_var(KEY_ENV_VAR, "abc123");
        env::set_var(URL_ENV_VAR, "http://example.com");
        env::set_var(TIMEOUT_ENV_VAR, "not-a-number");
        let err = Config::discover().unwrap_err();
        assert!(matches!(err, AkismetError::Configuration(_)));
        clear_env();
    }
}
