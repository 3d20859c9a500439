//! The Akismet client facade.
//!
//! [`Client`] is generic over the [`Transport`] that executes its HTTP
//! requests, and is compiled either blocking or suspending depending on the
//! selected cargo feature. Both concrete clients ([`crate::SyncClient`] and
//! [`crate::AsyncClient`]) are this one type over different transports, so
//! request construction, argument validation, and response interpretation
//! behave identically in both.

use tracing::debug;

use crate::backend::traits::{ResponseData, Transport};
use crate::config::{self, Config};
use crate::error::AkismetError;
use crate::protocol::commands::{AkismetCommand, AkismetEndpoint};
use crate::protocol::interpret;
use crate::protocol::{CheckResponse, CommentData, KeySitesFilter, KeySitesReply, UsageLimit};

/// An Akismet API client bound to one configuration and one transport.
///
/// A client constructed with [`Client::new`] is not validated: if the key or
/// URL is wrong, every operation except [`Client::verify_key`] will fail with
/// [`AkismetError::ApiKey`] at call time. Prefer [`Client::validated`] (or
/// the `validated_client` constructors in [`crate::backend`]), which verifies
/// the key before handing the client back.
#[derive(Debug)]
pub struct Client<T> {
    config: Config,
    transport: T,
}

#[maybe_async::maybe_async]
impl<T: Transport> Client<T> {
    /// Construct a client without verifying the key against the service.
    ///
    /// The configuration is still checked for shape (non-empty key, site URL
    /// with an `http://` or `https://` scheme).
    pub fn new(config: Config, transport: T) -> Result<Client<T>, AkismetError> {
        config.validate()?;
        Ok(Client { config, transport })
    }

    /// Construct a client and immediately verify its key.
    ///
    /// Returns [`AkismetError::ApiKey`] instead of a client when the service
    /// rejects the key/URL pair, so a client obtained this way is never in an
    /// unvalidated state.
    pub async fn validated(config: Config, transport: T) -> Result<Client<T>, AkismetError> {
        let client = Client::new(config, transport)?;
        if !client
            .verify_key(&client.config.api_key, &client.config.site_url)
            .await?
        {
            return Err(AkismetError::ApiKey(format!(
                "Found API key: {}, found blog URL: {}",
                client.config.api_key, client.config.site_url
            )));
        }
        Ok(client)
    }

    /// The configuration this client was constructed with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Issue one request and apply the response rules shared by every
    /// operation: non-2xx statuses are request errors, and an `invalid` body
    /// on anything other than verify-key means the credentials are bad.
    async fn request(
        &self,
        command: AkismetCommand,
        fields: Vec<(String, String)>,
    ) -> Result<ResponseData, AkismetError> {
        let endpoint = AkismetEndpoint::from_command(command);
        let url = endpoint.url(&self.config.api_url)?;
        debug!(operation = endpoint.operation, %url, "dispatching Akismet request");
        let response = self.transport.execute(endpoint.method, url, &fields).await?;
        if !response.is_success() {
            return Err(AkismetError::Request(format!(
                "Akismet responded with error status: {}",
                response.status_code()
            )));
        }
        if command != AkismetCommand::VerifyKey && response.as_str().ok() == Some("invalid") {
            return Err(AkismetError::ApiKey(
                "Akismet API key and/or site URL are invalid.".to_string(),
            ));
        }
        Ok(response)
    }

    /// Build and send a content-carrying POST (comment-check and the two
    /// submissions). Unknown optional arguments abort before any request is
    /// made.
    async fn post_content(
        &self,
        command: AkismetCommand,
        user_ip: &str,
        comment: CommentData,
    ) -> Result<ResponseData, AkismetError> {
        let unknown = comment.unknown_arguments();
        if !unknown.is_empty() {
            return Err(AkismetError::UnknownArguments(unknown));
        }
        let mut fields = vec![
            ("api_key".to_string(), self.config.api_key.clone()),
            ("blog".to_string(), self.config.site_url.clone()),
            ("user_ip".to_string(), user_ip.to_string()),
        ];
        fields.extend(comment);
        self.request(command, fields).await
    }

    /// Verify an Akismet API key and URL.
    ///
    /// Returns `true` if the pair is valid, `false` otherwise. This operation
    /// takes the key and URL explicitly and does not depend on the client's
    /// own credentials being valid.
    pub async fn verify_key(&self, key: &str, url: &str) -> Result<bool, AkismetError> {
        if !config::site_url_has_scheme(url) {
            return Err(AkismetError::Configuration(format!(
                "Invalid Akismet site URL specified: {}. Akismet requires the full URL including the leading 'http://' or 'https://'.",
                url
            )));
        }
        let fields = vec![
            ("key".to_string(), key.to_string()),
            ("blog".to_string(), url.to_string()),
        ];
        let response = self.request(AkismetCommand::VerifyKey, fields).await?;
        interpret::verify_key(&response)
    }

    /// Check a piece of user-submitted content to determine whether it is
    /// spam.
    ///
    /// The submitter's IP address is required; everything else travels in
    /// `comment`. The result distinguishes ham, spam, and "blatant" spam
    /// flagged by the service for automatic discarding; see
    /// [`CheckResponse`].
    pub async fn comment_check(
        &self,
        user_ip: &str,
        comment: CommentData,
    ) -> Result<CheckResponse, AkismetError> {
        let response = self
            .post_content(AkismetCommand::CommentCheck, user_ip, comment)
            .await?;
        interpret::comment_check(&response)
    }

    /// Inform Akismet that a piece of content it let through was spam.
    ///
    /// Returns `true` on success, the only expected response.
    pub async fn submit_spam(
        &self,
        user_ip: &str,
        comment: CommentData,
    ) -> Result<bool, AkismetError> {
        let response = self
            .post_content(AkismetCommand::SubmitSpam, user_ip, comment)
            .await?;
        interpret::submission("submit-spam", &response)
    }

    /// Inform Akismet that a piece of content it classified as spam was
    /// legitimate (ham).
    ///
    /// Returns `true` on success, the only expected response.
    pub async fn submit_ham(
        &self,
        user_ip: &str,
        comment: CommentData,
    ) -> Result<bool, AkismetError> {
        let response = self
            .post_content(AkismetCommand::SubmitHam, user_ip, comment)
            .await?;
        interpret::submission("submit-ham", &response)
    }

    /// Return API usage statistics keyed by site.
    pub async fn key_sites(&self, filter: KeySitesFilter) -> Result<KeySitesReply, AkismetError> {
        let response = self
            .request(AkismetCommand::KeySites, self.key_sites_params(filter))
            .await?;
        interpret::key_sites(&response)
    }

    /// Return API usage statistics keyed by site, as CSV text.
    pub async fn key_sites_csv(&self, filter: KeySitesFilter) -> Result<String, AkismetError> {
        let mut params = self.key_sites_params(filter);
        params.push(("format".to_string(), "csv".to_string()));
        let response = self.request(AkismetCommand::KeySites, params).await?;
        interpret::key_sites_csv(&response)
    }

    fn key_sites_params(&self, filter: KeySitesFilter) -> Vec<(String, String)> {
        let mut params = vec![("api_key".to_string(), self.config.api_key.clone())];
        params.extend(filter);
        params
    }

    /// Return API usage statistics for the current month.
    pub async fn usage_limit(&self) -> Result<UsageLimit, AkismetError> {
        let params = vec![("api_key".to_string(), self.config.api_key.clone())];
        let response = self.request(AkismetCommand::UsageLimit, params).await?;
        interpret::usage_limit(&response)
    }
}
