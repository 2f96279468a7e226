//! List site content

use anyhow::Result;
use std::collections::HashMap;
use std::fmt::Write;

use crate::archive;
use crate::content::Post;
use crate::helpers::{
    format_japanese_date, format_japanese_year, format_japanese_year_month, format_post_count,
    format_tag_count, join_with_comma,
};
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let posts = site.load_posts()?;
    print!("{}", render(site, &posts, content_type)?);
    Ok(())
}

/// Text listing of `posts` for one content type
pub fn render(site: &Site, posts: &[Post], content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            writeln!(out, "Posts ({}):", posts.len())?;
            for post in posts {
                write!(
                    out,
                    "  {} - {} [{}]",
                    format_japanese_date(&post.pub_date),
                    post.title,
                    post.id
                )?;
                if !post.tags.is_empty() {
                    write!(out, " ({})", join_with_comma(&post.tags))?;
                }
                writeln!(out)?;
            }
        }
        "tag" | "tags" => {
            if !site.config.features.tags_enabled {
                anyhow::bail!("Tags are disabled in {}", crate::CONFIG_FILE);
            }
            let mut tags: HashMap<&str, usize> = HashMap::new();
            for post in posts {
                for tag in &post.tags {
                    *tags.entry(tag.as_str()).or_insert(0) += 1;
                }
            }
            writeln!(out, "Tags ({}):", format_tag_count(tags.len()))?;
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            for (tag, count) in tags {
                writeln!(out, "  {} ({})", tag, format_post_count(count))?;
            }
        }
        "year" | "years" => {
            let years = archive::group_by_year(posts);
            writeln!(out, "Years ({}):", years.len())?;
            for year in years {
                writeln!(
                    out,
                    "  {} ({})",
                    format_japanese_year(year.year),
                    format_post_count(year.post_count)
                )?;
            }
        }
        "month" | "months" => {
            let months = archive::group_by_month(posts);
            writeln!(out, "Months ({}):", months.len())?;
            for month in months {
                writeln!(
                    out,
                    "  {} ({})",
                    format_japanese_year_month(month.year, month.month),
                    format_post_count(month.post_count)
                )?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, tag, year, month",
                content_type
            );
        }
    }

    Ok(out)
}
