//! abta: a Japanese-first blog template toolkit
//!
//! This crate loads a markdown blog collection with a validated front-matter
//! schema, groups posts into date archives, and provides the formatting and
//! structured-data helpers page templates need.

pub mod archive;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod schema;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::loader::ContentLoader;
use content::Post;

/// Config file name, relative to the site base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A blog site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration, read once at startup
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Blog collection directory
    pub content_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        let content_dir = config.content_path(&base_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Load the blog collection, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        ContentLoader::new(self).load_posts()
    }
}
