use std::collections::HashMap;
use std::fmt;

use bytes::Bytes;
use url::Url;

use crate::error::AkismetError;
use crate::protocol::commands::HttpMethod;

/// Raw response data
///
/// The minimal view of an HTTP response the protocol interpreter needs:
/// status code, body bytes, and case-insensitive header lookup.
#[derive(Debug)]
pub struct ResponseData {
    bytes: Bytes,
    status_code: u16,
    headers: HashMap<String, String>,
}

impl ResponseData {
    pub fn new(
        bytes: Bytes,
        status_code: u16,
        headers: HashMap<String, String>,
    ) -> ResponseData {
        // Header names are case-insensitive on the wire; normalize once here
        // so lookups don't have to care.
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        ResponseData {
            bytes,
            status_code,
            headers,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(self.as_slice())
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Look up a response header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

impl fmt::Display for ResponseData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Status code: {}\n Data: {}",
            self.status_code(),
            self.as_str()
                .unwrap_or("Data could not be cast to UTF string")
        )
    }
}

/// A pluggable HTTP request executor.
///
/// Exactly one implementation exists per concurrency model (reqwest for the
/// asynchronous client, attohttpc for the synchronous one); everything above
/// this trait is shared between the two. Test suites substitute their own
/// implementations to exercise the clients without a network.
///
/// `Post` requests send `fields` form-encoded in the body; `Get` requests
/// send them as query parameters. Network-layer failures map to
/// [`AkismetError::Request`] and are never retried here.
#[maybe_async::maybe_async]
pub trait Transport {
    async fn execute(
        &self,
        method: HttpMethod,
        url: Url,
        fields: &[(String, String)],
    ) -> Result<ResponseData, AkismetError>;
}
