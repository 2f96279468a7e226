//! Helper functions for templates
//!
//! Formatting, date, URL and list helpers shared by page templates and the
//! CLI. Everything here is a pure function of its inputs and the site config.

mod date;
mod format;
mod list;
mod url;

pub use date::*;
pub use format::*;
pub use list::*;
pub use url::*;

use chrono::{DateTime, TimeZone};

use crate::config::SiteConfig;
use crate::content::Post;

/// Helpers bound to one site configuration
pub struct Helpers<'a> {
    config: &'a SiteConfig,
}

impl<'a> Helpers<'a> {
    /// Create a new helpers instance
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Get full_url_for helper
    pub fn full_url_for(&self, path: &str) -> String {
        full_url_for(self.config, path)
    }

    /// Absolute URL of a post page
    pub fn post_url(&self, post: &Post) -> String {
        self.full_url_for(&post_path(&post.id))
    }

    /// Format a date for display
    pub fn date<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format_japanese_date(date)
    }

    /// Get list_archives helper
    pub fn list_archives(&self, posts: &[Post], kind: ArchiveKind, show_count: bool) -> String {
        list_archives(self.config, posts, kind, show_count, self.sidebar_limit())
    }

    /// Get list_tags helper
    pub fn list_tags(&self, posts: &[Post]) -> String {
        list_tags(self.config, posts, true)
    }

    /// Sidebar year limit from the config; 0 means unlimited
    pub fn sidebar_limit(&self) -> Option<usize> {
        match self.config.archive.sidebar_years {
            0 => None,
            n => Some(n),
        }
    }
}
