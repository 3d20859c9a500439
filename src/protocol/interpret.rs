//! Interpretation of raw Akismet responses into typed results.
//!
//! Everything in this module is a pure function of (operation, response), and
//! is shared verbatim by the synchronous and asynchronous clients: parity
//! between the two concurrency models is guaranteed by there being exactly one
//! copy of these rules.

use crate::backend::traits::ResponseData;
use crate::error::AkismetError;
use crate::protocol::usage::{KeySitesReply, UsageLimit};

/// Response header carrying the "discard" marker for blatant spam.
pub const PRO_TIP_HEADER: &str = "x-akismet-pro-tip";

/// Response header carrying debugging hints for malformed requests.
pub const DEBUG_HELP_HEADER: &str = "x-akismet-debug-help";

/// The only acknowledgement body Akismet sends for submit-spam/submit-ham.
pub const SUBMISSION_RESPONSE: &str = "Thanks for making the web a better place.";

/// Outcome of an Akismet content check.
///
/// The variants are ordered `Ham < Spam < Discard`, and the type carries an
/// explicit truthiness mapping for boolean-style checks: `Ham` is the only
/// non-spam value, so [`CheckResponse::is_spam`] is `false` for `Ham` and
/// `true` for the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckResponse {
    /// Content classified as not spam
    Ham = 0,
    /// Content classified as spam
    Spam = 1,
    /// Content classified as "blatant" spam, suitable for automatic
    /// rejection without human review
    Discard = 2,
}

impl CheckResponse {
    /// Whether the content was classified as spam of any severity.
    pub fn is_spam(self) -> bool {
        self != CheckResponse::Ham
    }
}

impl From<CheckResponse> for bool {
    fn from(response: CheckResponse) -> bool {
        response.is_spam()
    }
}

/// Build the error for an unexpected or non-standard response.
fn protocol_error(operation: &'static str, response: &ResponseData) -> AkismetError {
    AkismetError::Protocol {
        operation,
        body: String::from_utf8_lossy(response.as_slice()).into_owned(),
        help: response.header(DEBUG_HELP_HEADER).map(str::to_string),
    }
}

/// Interpret a verify-key response: `valid` or `invalid`, nothing else.
pub fn verify_key(response: &ResponseData) -> Result<bool, AkismetError> {
    match response.as_str()? {
        "valid" => Ok(true),
        "invalid" => Ok(false),
        _ => Err(protocol_error("verify-key", response)),
    }
}

/// Interpret a comment-check response.
///
/// The body must be exactly `true` or `false`; a `true` body is upgraded to
/// [`CheckResponse::Discard`] when the pro-tip header carries the discard
/// marker.
pub fn comment_check(response: &ResponseData) -> Result<CheckResponse, AkismetError> {
    match response.as_str()? {
        "true" => {
            if response.header(PRO_TIP_HEADER) == Some("discard") {
                Ok(CheckResponse::Discard)
            } else {
                Ok(CheckResponse::Spam)
            }
        }
        "false" => Ok(CheckResponse::Ham),
        _ => Err(protocol_error("comment-check", response)),
    }
}

/// Interpret a submit-spam or submit-ham response.
///
/// The acknowledgement literal is the only expected body.
pub fn submission(
    operation: &'static str,
    response: &ResponseData,
) -> Result<bool, AkismetError> {
    if response.as_str()? == SUBMISSION_RESPONSE {
        Ok(true)
    } else {
        Err(protocol_error(operation, response))
    }
}

/// Decode a key-sites JSON response.
pub fn key_sites(response: &ResponseData) -> Result<KeySitesReply, AkismetError> {
    serde_json::from_slice::<KeySitesReply>(response.as_slice())
        .map_err(|_| protocol_error("key-sites", response))
}

/// Return a CSV-formatted key-sites response as text.
pub fn key_sites_csv(response: &ResponseData) -> Result<String, AkismetError> {
    Ok(response.as_str()?.to_string())
}

/// Decode a usage-limit JSON response.
pub fn usage_limit(response: &ResponseData) -> Result<UsageLimit, AkismetError> {
    serde_json::from_slice::<UsageLimit>(response.as_slice())
        .map_err(|_| protocol_error("usage-limit", response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(body: &str, headers: &[(&str, &str)]) -> ResponseData {
        ResponseData::new(
            bytes::Bytes::copy_from_slice(body.as_bytes()),
            200,
            headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<String, String>>(),
        )
    }

    #[test]
    fn verify_key_literals() {
        assert!(verify_key(&response("valid", &[])).unwrap());
        assert!(!verify_key(&response("invalid", &[])).unwrap());
    }

    #[test]
    fn verify_key_rejects_anything_else() {
        for body in ["Valid", " valid", "valid\n", "yes", ""] {
            let err = verify_key(&response(body, &[])).unwrap_err();
            assert!(
                matches!(err, AkismetError::Protocol { operation: "verify-key", .. }),
                "body {:?} should be a protocol error",
                body
            );
        }
    }

    #[test]
    fn comment_check_false_is_ham() {
        assert_eq!(
            comment_check(&response("false", &[])).unwrap(),
            CheckResponse::Ham
        );
    }

    #[test]
    fn comment_check_true_is_spam() {
        assert_eq!(
            comment_check(&response("true", &[])).unwrap(),
            CheckResponse::Spam
        );
    }

    #[test]
    fn comment_check_discard_marker() {
        assert_eq!(
            comment_check(&response("true", &[("x-akismet-pro-tip", "discard")])).unwrap(),
            CheckResponse::Discard
        );
        // Any other pro-tip value is plain spam.
        assert_eq!(
            comment_check(&response("true", &[("x-akismet-pro-tip", "other")])).unwrap(),
            CheckResponse::Spam
        );
    }

    #[test]
    fn comment_check_rejects_non_boolean_body() {
        let err = comment_check(&response("maybe", &[("x-akismet-debug-help", "blog is required")]))
            .unwrap_err();
        match err {
            AkismetError::Protocol { operation, body, help } => {
                assert_eq!(operation, "comment-check");
                assert_eq!(body, "maybe");
                assert_eq!(help.as_deref(), Some("blog is required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn check_response_ordering_and_truthiness() {
        assert!(CheckResponse::Ham < CheckResponse::Spam);
        assert!(CheckResponse::Spam < CheckResponse::Discard);
        assert!(!CheckResponse::Ham.is_spam());
        assert!(CheckResponse::Spam.is_spam());
        assert!(CheckResponse::Discard.is_spam());
        assert!(!bool::from(CheckResponse::Ham));
        assert!(bool::from(CheckResponse::Discard));
    }

    #[test]
    fn submission_acknowledgement() {
        assert!(submission("submit-spam", &response(SUBMISSION_RESPONSE, &[])).unwrap());
        let err = submission("submit-ham", &response("No thanks.", &[])).unwrap_err();
        assert!(matches!(
            err,
            AkismetError::Protocol { operation: "submit-ham", .. }
        ));
    }

    #[test]
    fn usage_limit_decodes_json() {
        let body = r#"{"limit":350000,"usage":7463,"percentage":"2.13","throttled":false}"#;
        let usage = usage_limit(&response(body, &[])).unwrap();
        assert_eq!(usage.limit, 350000);
        assert_eq!(usage.usage, 7463);
        assert_eq!(usage.percentage, "2.13");
        assert!(!usage.throttled);
    }

    #[test]
    fn usage_limit_rejects_malformed_body() {
        let err = usage_limit(&response("<html>oops</html>", &[])).unwrap_err();
        assert!(matches!(
            err,
            AkismetError::Protocol { operation: "usage-limit", .. }
        ));
    }

    #[test]
    fn key_sites_decodes_json() {
        let body = r#"{
            "2024-09": [
                {"site": "example.com", "api_calls": "2072", "spam": "2069",
                 "ham": "3", "missed_spam": "0", "false_positives": "4",
                 "is_revoked": false}
            ],
            "limit": 10,
            "offset": 0,
            "total": 1
        }"#;
        let reply = key_sites(&response(body, &[])).unwrap();
        assert_eq!(reply.total, 1);
        let sites = reply.months.get("2024-09").unwrap();
        assert_eq!(sites[0].site, "example.com");
        assert_eq!(sites[0].spam, "2069");
        assert!(!sites[0].is_revoked);
    }
}
