//! Print JSON-LD structured data

use anyhow::{Context, Result};

use crate::content::Post;
use crate::helpers::{full_url_for, format_post_count_with_label};
use crate::schema::{to_json_ld, BlogPostSchema, CollectionPageSchema, WebSiteSchema};
use crate::Site;

/// Print the JSON-LD for the site, the archive page or one post
pub fn run(site: &Site, target: &str, id: Option<&str>) -> Result<()> {
    let posts = site.load_posts()?;
    println!("{}", render(site, &posts, target, id)?);
    Ok(())
}

/// JSON-LD string for one schema target
pub fn render(site: &Site, posts: &[Post], target: &str, id: Option<&str>) -> Result<String> {
    let config = &site.config;

    let json = match target {
        "site" => to_json_ld(&WebSiteSchema::from_config(config))?,
        "archive" => {
            let page_url = full_url_for(config, &format!("{}/", config.archive_dir));
            let schema = CollectionPageSchema::new(
                "アーカイブ",
                format_post_count_with_label(posts.len()),
                page_url,
                &config.url,
            )
            .site_name(&config.title)
            .number_of_items(posts.len());
            to_json_ld(&schema)?
        }
        "post" => {
            let id = id.context("The post target needs a post id")?;
            let post = posts
                .iter()
                .find(|p| p.id == id)
                .with_context(|| format!("No post with id {:?}", id))?;
            to_json_ld(&BlogPostSchema::from_post(config, post))?
        }
        _ => anyhow::bail!("Unknown schema target: {}. Available: site, archive, post", target),
    };

    Ok(json)
}
