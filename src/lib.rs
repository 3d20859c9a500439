//!# Akismet Client for Rust
//!
//! This crate provides an HTTP client for the [Akismet](https://akismet.com)
//! spam-detection web service. It supports both synchronous and asynchronous
//! operation using the `attohttpc` and `reqwest` libraries, respectively,
//! with the full protocol logic shared between the two: the clients behave
//! identically except for their concurrency model.
//!
//! ## Features
//!
//! - **Sync**: Synchronous client using `attohttpc`.
//! - **Async**: Asynchronous client using `reqwest`.
//! - All operations of the Akismet 1.1 and 1.2 web APIs: key verification,
//!   content checking, spam/ham submission, and usage statistics.
//! - Configuration discovery from the environment (`AKISMET_API_KEY`,
//!   `AKISMET_BLOG_URL`, and optionally `AKISMET_TIMEOUT`).
//! - Client-side validation of optional arguments before any request is
//!   made.
//!
//! Use of this client requires an Akismet API key and a registered site URL;
//! see <https://akismet.com> for instructions on obtaining one. The
//! recommended construction path is `validated_client()`, which discovers the
//! configuration from the environment and verifies the key before returning
//! a client. A client constructed directly with an invalid key will fail
//! with [`error::AkismetError::ApiKey`] on its first real operation instead.

// Ensure async and sync features are mutually exclusive
#[cfg(all(feature = "async", feature = "sync"))]
compile_error!("Features 'async' and 'sync' are mutually exclusive. Please enable only one.");

#[cfg(not(any(feature = "async", feature = "sync")))]
compile_error!("Either 'async' or 'sync' feature must be enabled.");

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod protocol;

/// Identifying user-agent sent with every request by the default transports,
/// derived from the library version. Computed once at compile time; never
/// mutated.
pub const USER_AGENT: &str = concat!("akismet-client.rs/", env!("CARGO_PKG_VERSION"));

pub use client::Client;
pub use config::Config;
pub use error::AkismetError;
pub use protocol::{
    CheckResponse, CommentData, KeySitesFilter, KeySitesReply, SiteActivity, UsageLimit,
};

#[cfg(feature = "sync")]
pub use backend::sync_client::{sync_client, SyncClient};
/// ### Synchronous Client
///
/// This example demonstrates how to check a comment using the synchronous
/// client.
///
/// ```rust,no_run
/// use akismet_client::{sync_client, CommentData, Config};
///
/// let config = Config::builder()
///     .api_key("your-api-key".to_string())
///     .site_url("https://your.site".to_string())
///     .build();
/// let client = sync_client(config).unwrap();
///
/// let comment = CommentData::builder()
///     .comment_content("Buy cheap pills now!!!".to_string())
///     .comment_author("spammer".to_string())
///     .build();
///
/// match client.comment_check("203.0.113.4", comment) {
///     Ok(result) => println!("Classified as: {:?}", result),
///     Err(e) => eprintln!("Error checking comment: {}", e),
/// }
/// ```
#[cfg(feature = "sync")]
pub use backend::sync_client::validated_client;

#[cfg(feature = "async")]
pub use backend::async_client::{async_client, AsyncClient};
/// ### Asynchronous Client
///
/// This example demonstrates how to check a comment using the asynchronous
/// client.
///
/// ```rust,no_run
/// use akismet_client::{async_client, CommentData, Config};
/// # use tokio;
///
/// # #[tokio::main]
/// # async fn main() {
/// let config = Config::builder()
///     .api_key("your-api-key".to_string())
///     .site_url("https://your.site".to_string())
///     .build();
/// let client = async_client(config).unwrap();
///
/// let comment = CommentData::builder()
///     .comment_content("Buy cheap pills now!!!".to_string())
///     .comment_author("spammer".to_string())
///     .build();
///
/// match client.comment_check("203.0.113.4", comment).await {
///     Ok(result) => println!("Classified as: {:?}", result),
///     Err(e) => eprintln!("Error checking comment: {}", e),
/// }
/// # }
/// ```
#[cfg(feature = "async")]
pub use backend::async_client::validated_client;
