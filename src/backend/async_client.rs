use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client as HttpClient;
use url::Url;

use crate::backend::traits::{ResponseData, Transport};
use crate::client::Client;
use crate::config::Config;
use crate::error::AkismetError;
use crate::protocol::commands::HttpMethod;
use crate::USER_AGENT;

/// Transport executing requests through a shared `reqwest` client.
///
/// The underlying client is created once per [`AsyncClient`] and reused for
/// every call on that instance; concurrent use inherits reqwest's own
/// guarantees.
pub struct ReqwestTransport {
    inner: HttpClient,
}

impl ReqwestTransport {
    /// Build the default transport: identifying user-agent and the
    /// configured timeout.
    pub fn new(config: &Config) -> Result<ReqwestTransport, AkismetError> {
        let inner = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs_f64(config.timeout))
            .build()
            .map_err(|e| AkismetError::Request(e.to_string()))?;
        Ok(ReqwestTransport { inner })
    }

    /// Wrap a caller-supplied `reqwest` client, for proxy support or other
    /// customized HTTP behavior. The caller is then responsible for setting
    /// an appropriate user-agent (see [`crate::USER_AGENT`]) and timeout.
    pub fn with_client(inner: HttpClient) -> ReqwestTransport {
        ReqwestTransport { inner }
    }
}

#[maybe_async::maybe_async]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        method: HttpMethod,
        url: Url,
        fields: &[(String, String)],
    ) -> Result<ResponseData, AkismetError> {
        let req = match method {
            HttpMethod::Post => self.inner.post(url).form(fields),
            HttpMethod::Get => self.inner.get(url).query(fields),
        };
        let response = req
            .send()
            .await
            .map_err(|e| AkismetError::Request(e.to_string()))?;
        let status_code = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.to_string(),
                    v.to_str()
                        .unwrap_or("could-not-decode-header-value")
                        .to_string(),
                )
            })
            .collect::<HashMap<String, String>>();
        let body = response
            .bytes()
            .await
            .map_err(|e| AkismetError::Request(e.to_string()))?;
        Ok(ResponseData::new(body, status_code, headers))
    }
}

/// Asynchronous Akismet client over the default `reqwest` transport.
pub type AsyncClient = Client<ReqwestTransport>;

/// Construct an asynchronous client without verifying the key.
pub fn async_client(config: Config) -> Result<AsyncClient, AkismetError> {
    let transport = ReqwestTransport::new(&config)?;
    Client::new(config, transport)
}

/// Discover the configuration from the environment, construct an
/// asynchronous client, and verify its key before returning it.
///
/// This is the recommended construction path; a client obtained here is
/// guaranteed to hold valid credentials.
pub async fn validated_client() -> Result<AsyncClient, AkismetError> {
    let config = Config::discover()?;
    let transport = ReqwestTransport::new(&config)?;
    Client::validated(config, transport).await
}
