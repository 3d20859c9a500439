//! Request parameters for the content-oriented Akismet operations
//! (comment-check, submit-spam, submit-ham).

use std::collections::HashMap;
use std::iter::IntoIterator;

use typed_builder::TypedBuilder;

/// Optional argument names recognized by the Akismet content operations.
///
/// Any name outside this list supplied through
/// [`CommentData::additional`] is rejected client-side before a request is
/// made.
pub const OPTIONAL_KEYS: [&str; 17] = [
    "blog_charset",
    "blog_lang",
    "comment_author",
    "comment_author_email",
    "comment_author_url",
    "comment_content",
    "comment_context",
    "comment_date_gmt",
    "comment_post_modified_gmt",
    "comment_type",
    "honeypot_field_name",
    "is_test",
    "permalink",
    "recheck_reason",
    "referrer",
    "user_agent",
    "user_role",
];

/// Content and submitter metadata for a comment-check or spam/ham submission.
///
/// Akismet recommends supplying at least `comment_content`, `comment_type`,
/// and `comment_author` and/or `comment_author_email`. Less common arguments
/// go in `additional`, keyed by the names Akismet documents.
#[derive(TypedBuilder, Debug, PartialEq, Default)]
pub struct CommentData {
    /// The content the user submitted
    #[builder(default, setter(strip_option))]
    pub comment_content: Option<String>,

    /// Type of content, e.g. `comment`, `forum-post`, `contact-form`, `signup`
    #[builder(default, setter(strip_option))]
    pub comment_type: Option<String>,

    /// Name (such as username) of the content's submitter
    #[builder(default, setter(strip_option))]
    pub comment_author: Option<String>,

    /// Email address of the content's submitter
    #[builder(default, setter(strip_option))]
    pub comment_author_email: Option<String>,

    /// URL supplied by the content's submitter
    #[builder(default, setter(strip_option))]
    pub comment_author_url: Option<String>,

    /// Permalink of the page the content was posted to
    #[builder(default, setter(strip_option))]
    pub permalink: Option<String>,

    /// Referrer header sent by the submitter's browser
    #[builder(default, setter(strip_option))]
    pub referrer: Option<String>,

    /// User-Agent header sent by the submitter's browser
    #[builder(default, setter(strip_option))]
    pub user_agent: Option<String>,

    /// Marks the request as a test, keeping it out of the Akismet training
    /// corpus
    #[builder(default)]
    pub is_test: bool,

    /// Additional optional arguments, keyed by the names Akismet documents
    #[builder(default)]
    pub additional: HashMap<String, String>,
}

impl CommentData {
    /// Names in `additional` that Akismet does not recognize, sorted.
    pub fn unknown_arguments(&self) -> Vec<String> {
        let mut unknown = self
            .additional
            .keys()
            .filter(|k| !OPTIONAL_KEYS.contains(&k.as_str()))
            .cloned()
            .collect::<Vec<String>>();
        unknown.sort();
        unknown
    }
}

impl IntoIterator for CommentData {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    /// Convert the CommentData struct into form-field pairs
    fn into_iter(mut self) -> Self::IntoIter {
        // We add all options to the additional arguments
        if let Some(content) = self.comment_content {
            self.additional.insert("comment_content".to_string(), content);
        }
        if let Some(comment_type) = self.comment_type {
            self.additional.insert("comment_type".to_string(), comment_type);
        }
        if let Some(author) = self.comment_author {
            self.additional.insert("comment_author".to_string(), author);
        }
        if let Some(email) = self.comment_author_email {
            self.additional
                .insert("comment_author_email".to_string(), email);
        }
        if let Some(author_url) = self.comment_author_url {
            self.additional
                .insert("comment_author_url".to_string(), author_url);
        }
        if let Some(permalink) = self.permalink {
            self.additional.insert("permalink".to_string(), permalink);
        }
        if let Some(referrer) = self.referrer {
            self.additional.insert("referrer".to_string(), referrer);
        }
        if let Some(user_agent) = self.user_agent {
            self.additional.insert("user_agent".to_string(), user_agent);
        }
        if self.is_test {
            self.additional.insert("is_test".to_string(), "1".to_string());
        }
        self.additional.into_iter()
    }
}
