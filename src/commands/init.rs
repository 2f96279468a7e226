//! Initialize a new blog site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# Site
title: ABTA
description: 日本語に最適化されたAstroブログテンプレート
author: ABTA
language: ja

# URL
url: https://abta.hachian.com

# Directory
content_dir: src/content/blog
tag_dir: tags
archive_dir: archive

# Images (px)
blog_image:
  width: 720
  height: 360

# Grid (px)
grid:
  min_width: 350
  card_max_width_desktop: 400
  card_max_width_tablet: 500

# Features
features:
  tags_enabled: true
  archive_enabled: true

# Archive sidebar (0 shows every year)
archive:
  sidebar_years: 5
"#;

const WELCOME_POST: &str = r#"---
title: 'ようこそ'
description: 'ブログテンプレートの最初の記事です'
pubDate: {{ date }}
tags: ['お知らせ']
---

最初の記事です。
"#;

/// Initialize a new site in the given directory
///
/// Existing files are left untouched.
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)?;
        tracing::debug!("Created {:?}", config_path);
    }

    let config = SiteConfig::load(&config_path)?;
    let content_dir = config.content_path(target_dir);
    fs::create_dir_all(&content_dir)?;

    let welcome = content_dir.join("welcome.md");
    if !welcome.exists() {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        fs::write(&welcome, WELCOME_POST.replace("{{ date }}", &today))?;
        tracing::debug!("Created {:?}", welcome);
    }

    Ok(())
}
