//! Operations that can be invoked against the Akismet service

use url::Url;

use crate::error::AkismetError;

/// HTTP request method for an Akismet operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Operations of the Akismet 1.1 and 1.2 web APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AkismetCommand {
    VerifyKey,
    CommentCheck,
    SubmitSpam,
    SubmitHam,
    KeySites,
    UsageLimit,
}

/// Ephemeral endpoint representation
pub struct AkismetEndpoint {
    /// Operation name as it appears in the request path
    pub operation: &'static str,
    /// Akismet API version segment
    pub version: &'static str,
    pub method: HttpMethod,
    pub command: AkismetCommand,
}

impl AkismetEndpoint {
    /// Create a new endpoint from a command
    pub fn from_command(command: AkismetCommand) -> AkismetEndpoint {
        match command {
            AkismetCommand::VerifyKey => Self {
                operation: "verify-key",
                version: "1.1",
                method: HttpMethod::Post,
                command,
            },
            AkismetCommand::CommentCheck => Self {
                operation: "comment-check",
                version: "1.1",
                method: HttpMethod::Post,
                command,
            },
            AkismetCommand::SubmitSpam => Self {
                operation: "submit-spam",
                version: "1.1",
                method: HttpMethod::Post,
                command,
            },
            AkismetCommand::SubmitHam => Self {
                operation: "submit-ham",
                version: "1.1",
                method: HttpMethod::Post,
                command,
            },
            AkismetCommand::KeySites => Self {
                operation: "key-sites",
                version: "1.2",
                method: HttpMethod::Get,
                command,
            },
            AkismetCommand::UsageLimit => Self {
                operation: "usage-limit",
                version: "1.2",
                method: HttpMethod::Get,
                command,
            },
        }
    }

    /// Full request URL for this endpoint under the given service root.
    pub fn url(&self, api_url: &str) -> Result<Url, AkismetError> {
        let mut url = Url::parse(api_url)?;
        url.set_path(&format!("{}/{}", self.version, self.operation));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_mapping() {
        let endpoint = AkismetEndpoint::from_command(AkismetCommand::CommentCheck);
        assert_eq!(endpoint.operation, "comment-check");
        assert_eq!(endpoint.version, "1.1");
        assert_eq!(endpoint.method, HttpMethod::Post);

        let endpoint = AkismetEndpoint::from_command(AkismetCommand::UsageLimit);
        assert_eq!(endpoint.operation, "usage-limit");
        assert_eq!(endpoint.version, "1.2");
        assert_eq!(endpoint.method, HttpMethod::Get);
    }

    #[test]
    fn endpoint_url() {
        let endpoint = AkismetEndpoint::from_command(AkismetCommand::VerifyKey);
        let url = endpoint.url("https://rest.akismet.com").unwrap();
        assert_eq!(url.as_str(), "https://rest.akismet.com/1.1/verify-key");
    }
}
