//! Error handling for the Akismet API client.

use thiserror::Error;

/// All failure modes of the Akismet client, as one root enum so callers can
/// match broadly or narrowly.
///
/// `ApiKey` is a refinement of `Configuration`: it is raised when the key/URL
/// pair is rejected by the verify-key operation, or when any other operation
/// replies `invalid` because the client was constructed with stale
/// credentials. `Configuration` covers missing or malformed configuration.
/// Use [`AkismetError::is_configuration`] to catch both at once.
#[derive(Error, Debug)]
pub enum AkismetError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Akismet API key and/or site URL are invalid: {0}")]
    ApiKey(String),

    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("Unexpected response from Akismet {operation}: {body:?} (debug help: {help:?})")]
    Protocol {
        /// Akismet operation name, e.g. `comment-check`.
        operation: &'static str,
        /// Raw response body as received.
        body: String,
        /// Value of the `X-akismet-debug-help` header, when present.
        help: Option<String>,
    },

    #[error("Unknown argument(s) for Akismet operation: {}", .0.join(", "))]
    UnknownArguments(Vec<String>),

    #[error("URL parsing error: {0}")]
    Parse(#[from] url::ParseError),

    #[error("UTF8 process error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl AkismetError {
    /// True for configuration-class errors, including the invalid-key case.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AkismetError::Configuration(_) | AkismetError::ApiKey(_)
        )
    }
}
