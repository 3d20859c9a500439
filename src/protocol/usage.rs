use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use typed_builder::TypedBuilder;

/// Monthly API usage statistics for the configured key.
#[derive(Debug, Serialize, Deserialize)]
pub struct UsageLimit {
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub usage: i64,
    #[serde(default)]
    pub percentage: String,
    #[serde(default)]
    pub throttled: bool,
}

/// Per-site activity figures within a [`KeySitesReply`].
#[derive(Debug, Serialize, Deserialize)]
pub struct SiteActivity {
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub api_calls: String,
    #[serde(default)]
    pub spam: String,
    #[serde(default)]
    pub ham: String,
    #[serde(default)]
    pub missed_spam: String,
    #[serde(default)]
    pub false_positives: String,
    #[serde(default)]
    pub is_revoked: bool,
}

/// Usage statistics keyed by site, grouped under `YYYY-MM` month keys.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeySitesReply {
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub total: i64,
    #[serde(flatten)]
    pub months: HashMap<String, Vec<SiteActivity>>,
}

/// Optional filters for the key-sites operation.
///
/// Every field is optional; Akismet applies its own defaults for anything
/// left unset.
#[derive(TypedBuilder, Debug, PartialEq, Default)]
pub struct KeySitesFilter {
    /// Month to retrieve statistics for, in `YYYY-MM` format
    #[builder(default, setter(strip_option))]
    pub month: Option<String>,

    /// Full or partial site URL to filter results by
    #[builder(default, setter(strip_option))]
    pub filter: Option<String>,

    /// Column to sort by, for CSV-formatted results
    #[builder(default, setter(strip_option))]
    pub order: Option<String>,

    /// Maximum number of results to return
    #[builder(default, setter(strip_option))]
    pub limit: Option<u32>,

    /// Offset from which to begin result reporting
    #[builder(default, setter(strip_option))]
    pub offset: Option<u32>,
}

impl IntoIterator for KeySitesFilter {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    /// Convert the filter into query-parameter pairs
    fn into_iter(self) -> Self::IntoIter {
        let mut params = Vec::new();
        if let Some(month) = self.month {
            params.push(("month".to_string(), month));
        }
        if let Some(filter) = self.filter {
            params.push(("filter".to_string(), filter));
        }
        if let Some(order) = self.order {
            params.push(("order".to_string(), order));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        params.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_no_params() {
        assert_eq!(KeySitesFilter::default().into_iter().count(), 0);
    }

    #[test]
    fn filter_params() {
        let filter = KeySitesFilter::builder()
            .month("2024-09".to_string())
            .limit(25)
            .build();
        let params = filter.into_iter().collect::<Vec<(String, String)>>();
        assert_eq!(
            params,
            vec![
                ("month".to_string(), "2024-09".to_string()),
                ("limit".to_string(), "25".to_string()),
            ]
        );
    }
}
