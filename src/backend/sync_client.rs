use std::collections::HashMap;
use std::time::Duration;

use attohttpc::Session;
use bytes::Bytes;
use url::Url;

use crate::backend::traits::{ResponseData, Transport};
use crate::client::Client;
use crate::config::Config;
use crate::error::AkismetError;
use crate::protocol::commands::HttpMethod;
use crate::USER_AGENT;

/// Transport executing requests through a shared `attohttpc` session.
///
/// The session is created once per [`SyncClient`] and reused for every call
/// on that instance.
pub struct AttoTransport {
    inner: Session,
}

impl AttoTransport {
    /// Build the default transport: identifying user-agent and the
    /// configured timeout.
    pub fn new(config: &Config) -> AttoTransport {
        let mut session = Session::new();
        session.header("User-Agent", USER_AGENT);
        session.timeout(Duration::from_secs_f64(config.timeout));
        AttoTransport { inner: session }
    }

    /// Wrap a caller-supplied `attohttpc` session, for proxy support or
    /// other customized HTTP behavior. The caller is then responsible for
    /// setting an appropriate user-agent (see [`crate::USER_AGENT`]) and
    /// timeout.
    pub fn with_session(inner: Session) -> AttoTransport {
        AttoTransport { inner }
    }
}

impl Transport for AttoTransport {
    fn execute(
        &self,
        method: HttpMethod,
        url: Url,
        fields: &[(String, String)],
    ) -> Result<ResponseData, AkismetError> {
        let response = match method {
            HttpMethod::Post => self
                .inner
                .post(url)
                .form(&fields)
                .map_err(|e| AkismetError::Request(e.to_string()))?
                .send(),
            HttpMethod::Get => self
                .inner
                .get(url)
                .params(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                .send(),
        }
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
            .map_err(|e| AkismetError::Request(e.to_string()))?;
        Ok(ResponseData::new(Bytes::from(body), status_code, headers))
    }
}

/// Synchronous Akismet client over the default `attohttpc` transport.
pub type SyncClient = Client<AttoTransport>;

/// Construct a synchronous client without verifying the key.
pub fn sync_client(config: Config) -> Result<SyncClient, AkismetError> {
    let transport = AttoTransport::new(&config);
    Client::new(config, transport)
}

/// Discover the configuration from the environment, construct a synchronous
/// client, and verify its key before returning it.
///
/// This is the recommended construction path; a client obtained here is
/// guaranteed to hold valid credentials.
pub fn validated_client() -> Result<SyncClient, AkismetError> {
    let config = Config::discover()?;
    let transport = AttoTransport::new(&config);
    Client::validated(config, transport)
}
