//! Akismet wire-protocol definitions shared by both client backends.

pub mod commands;
pub mod comment;
pub mod interpret;
pub mod usage;

pub use comment::{CommentData, OPTIONAL_KEYS};
pub use interpret::CheckResponse;
pub use usage::{KeySitesFilter, KeySitesReply, SiteActivity, UsageLimit};
