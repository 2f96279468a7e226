//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::format::to_absolute_url;
use crate::config::SiteConfig;

/// Characters left as-is in tag path segments
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Generate a site-rooted URL
///
/// # Examples
/// ```ignore
/// url_for("blog/first-post/") // -> "/blog/first-post/"
/// ```
pub fn url_for(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about/") // -> "https://abta.hachian.com/about/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    to_absolute_url(&url_for(path), &config.url)
}

/// Path of a post page
pub fn post_path(id: &str) -> String {
    url_for(&format!("blog/{}/", id))
}

/// Path of a yearly archive page, e.g. `/archive/2024/`
pub fn archive_year_path(config: &SiteConfig, year: i32) -> String {
    url_for(&format!("{}/{}/", config.archive_dir, year))
}

/// Path of a monthly archive page, e.g. `/archive/2024/01/`
pub fn archive_month_path(config: &SiteConfig, year: i32, month: u32) -> String {
    url_for(&format!("{}/{}/{:02}/", config.archive_dir, year, month))
}

/// Path of a tag page, with the tag percent-encoded
pub fn tag_path(config: &SiteConfig, tag: &str) -> String {
    url_for(&format!(
        "{}/{}/",
        config.tag_dir,
        utf8_percent_encode(tag, SEGMENT)
    ))
}
