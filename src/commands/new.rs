//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::helpers::create_slug;
use crate::Site;

/// Create a new post file and return its path
///
/// The file name is the slug of `title` unless `slug` is given.
pub fn create_post(site: &Site, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => create_slug(s),
        None => create_slug(title),
    };
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from {:?}, pass --slug", title);
    }

    fs::create_dir_all(&site.content_dir)?;
    let file_path = site.content_dir.join(format!("{}.md", slug));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let now = chrono::Local::now();
    let content = format!(
        "---\ntitle: '{}'\ndescription: ''\npubDate: {}\ntags: []\n---\n",
        title.replace('\'', "''"),
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created post {:?}", file_path);

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_is_loadable() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        let path = create_post(&site, "Rust で 'ブログ'", None).unwrap();
        assert_eq!(path, site.content_dir.join("rust-で-ブログ.md"));

        let posts = site.load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Rust で 'ブログ'");
        assert_eq!(posts[0].description, "");
        assert!(posts[0].tags.is_empty());
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();

        create_post(&site, "Hello", None).unwrap();
        assert!(create_post(&site, "hello", None).is_err());
        assert!(create_post(&site, "Other title", Some("hello")).is_err());
    }

    #[test]
    fn test_create_post_needs_a_slug() {
        let tmp = tempfile::tempdir().unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert!(create_post(&site, "!!!", None).is_err());
        assert!(create_post(&site, "!!!", Some("bang")).is_ok());
    }
}
