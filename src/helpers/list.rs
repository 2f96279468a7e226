//! List helper functions for archive lists, tag lists and post lists

use std::collections::HashMap;

use super::date::{format_japanese_year, format_japanese_year_month};
use super::format::{format_post_count, html_escape};
use super::url::{archive_month_path, archive_year_path, post_path, tag_path};
use crate::archive::{self, MonthlyBucket};
use crate::config::SiteConfig;
use crate::content::Post;

/// Archive list layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// One entry per year, each with a nested list of its months
    Yearly,
    /// One flat entry per month
    Monthly,
}

/// Generate a list of archives as HTML
///
/// `limit` caps the number of top-level entries (years or months) after
/// grouping; `None` shows everything.
pub fn list_archives(
    config: &SiteConfig,
    posts: &[Post],
    kind: ArchiveKind,
    show_count: bool,
    limit: Option<usize>,
) -> String {
    if posts.is_empty() {
        return String::new();
    }

    let limit = limit.unwrap_or(usize::MAX);
    let mut html = r#"<ul class="archive-list">"#.to_string();

    match kind {
        ArchiveKind::Yearly => {
            for year in archive::group_by_year(posts).iter().take(limit) {
                push_item(
                    &mut html,
                    &archive_year_path(config, year.year),
                    &format_japanese_year(year.year),
                    show_count.then_some(year.post_count),
                    false,
                );
                html.push_str(r#"<ul class="archive-list-child">"#);
                for month in &year.monthly_breakdown {
                    push_month(&mut html, config, month, show_count);
                }
                html.push_str("</ul></li>");
            }
        }
        ArchiveKind::Monthly => {
            for month in archive::group_by_month(posts).iter().take(limit) {
                push_month(&mut html, config, month, show_count);
            }
        }
    }

    html.push_str("</ul>");
    html
}

fn push_month(html: &mut String, config: &SiteConfig, month: &MonthlyBucket, show_count: bool) {
    push_item(
        html,
        &archive_month_path(config, month.year, month.month),
        &format_japanese_year_month(month.year, month.month),
        show_count.then_some(month.post_count),
        true,
    );
}

fn push_item(html: &mut String, url: &str, label: &str, count: Option<usize>, close: bool) {
    html.push_str(&format!(
        r#"<li class="archive-list-item"><a class="archive-list-link" href="{}">{}</a>"#,
        html_escape(url),
        html_escape(label)
    ));

    if let Some(count) = count {
        html.push_str(&format!(
            r#"<span class="archive-list-count">{}</span>"#,
            format_post_count(count)
        ));
    }

    if close {
        html.push_str("</li>");
    }
}

/// Generate a list of tags as HTML, sorted by name
///
/// Empty when tags are disabled in the site features.
pub fn list_tags(config: &SiteConfig, posts: &[Post], show_count: bool) -> String {
    if !config.features.tags_enabled {
        return String::new();
    }

    let mut tags: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            *tags.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    if tags.is_empty() {
        return String::new();
    }

    let mut html = r#"<ul class="tag-list">"#.to_string();

    let mut sorted: Vec<_> = tags.into_iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    for (name, count) in sorted {
        html.push_str(&format!(
            r#"<li class="tag-list-item"><a class="tag-list-link" href="{}">{}</a>"#,
            html_escape(&tag_path(config, name)),
            html_escape(name)
        ));

        if show_count {
            html.push_str(&format!(
                r#"<span class="tag-list-count">{}</span>"#,
                format_post_count(count)
            ));
        }

        html.push_str("</li>");
    }

    html.push_str("</ul>");
    html
}

/// Generate a list of posts, at most `amount` entries
pub fn list_posts<'a, I>(posts: I, amount: usize) -> String
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut html = r#"<ul class="post-list">"#.to_string();

    for post in posts.into_iter().take(amount) {
        html.push_str(&format!(
            r#"<li class="post-list-item"><a class="post-list-link" href="{}">{}</a></li>"#,
            html_escape(&post_path(&post.id)),
            html_escape(&post.title)
        ));
    }

    html.push_str("</ul>");
    html
}
