//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,

    // Directory
    pub content_dir: String,
    pub tag_dir: String,
    pub archive_dir: String,

    // Layout
    #[serde(default)]
    pub blog_image: ImageConfig,
    #[serde(default)]
    pub grid: GridConfig,

    // Feature flags
    #[serde(default)]
    pub features: FeaturesConfig,

    // Archive sidebar
    #[serde(default)]
    pub archive: ArchiveConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "ABTA".to_string(),
            description: "日本語に最適化されたAstroブログテンプレート".to_string(),
            author: "ABTA".to_string(),
            language: "ja".to_string(),

            url: "https://abta.hachian.com".to_string(),

            content_dir: "src/content/blog".to_string(),
            tag_dir: "tags".to_string(),
            archive_dir: "archive".to_string(),

            blog_image: ImageConfig::default(),
            grid: GridConfig::default(),
            features: FeaturesConfig::default(),
            archive: ArchiveConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Directory holding the blog collection, resolved against `base_dir`
    pub fn content_path<P: AsRef<Path>>(&self, base_dir: P) -> PathBuf {
        base_dir.as_ref().join(&self.content_dir)
    }
}

/// Hero image dimensions for blog cards and posts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            width: 720,
            height: 360,
        }
    }
}

/// Card grid settings, in px
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub min_width: u32,
    pub card_max_width_desktop: u32,
    pub card_max_width_tablet: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_width: 350,
            card_max_width_desktop: 400,
            card_max_width_tablet: 500,
        }
    }
}

/// Feature toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub tags_enabled: bool,
    pub archive_enabled: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            tags_enabled: true,
            archive_enabled: true,
        }
    }
}

/// Archive display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// How many years the sidebar list shows; 0 shows all
    pub sidebar_years: usize,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self { sidebar_years: 5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "ABTA");
        assert_eq!(config.language, "ja");
        assert_eq!(config.blog_image.width, 720);
        assert_eq!(config.blog_image.height, 360);
        assert!(config.features.archive_enabled);
        assert_eq!(config.archive.sidebar_years, 5);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
features:
  tags_enabled: false
grid:
  min_width: 300
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert!(!config.features.tags_enabled);
        assert!(config.features.archive_enabled);
        assert_eq!(config.grid.min_width, 300);
        assert_eq!(config.grid.card_max_width_tablet, 500);
        assert_eq!(config.content_dir, "src/content/blog");
    }

    #[test]
    fn test_unknown_keys_kept_in_extra() {
        let yaml = "title: X\ngoogle_analytics: G-123\n";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.extra.contains_key("google_analytics"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "url: https://example.com\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.url, "https://example.com");
        assert_eq!(
            config.content_path(dir.path()),
            dir.path().join("src/content/blog")
        );
    }
}
