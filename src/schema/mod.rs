//! Structured data (schema.org JSON-LD) for pages
//!
//! Each schema type serializes to the JSON-LD object search engines expect.
//! Optional fields are left out of the output when unset.

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{iso_string, to_absolute_url, Helpers};

const CONTEXT: &str = "https://schema.org";
const LANGUAGE: &str = "ja";
const DEFAULT_NAME: &str = "ABTA";

/// A nested `{"@type": ..., "name": ...}` reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Entity {
    fn organization(name: impl Into<String>) -> Self {
        Self {
            kind: "Organization",
            name: name.into(),
            url: None,
        }
    }

    fn person(name: impl Into<String>) -> Self {
        Self {
            kind: "Person",
            name: name.into(),
            url: None,
        }
    }

    fn website(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: "WebSite",
            name: name.into(),
            url: Some(url.into()),
        }
    }
}

/// `WebSite` schema for the home page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSiteSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    pub url: String,
    pub description: String,
    pub publisher: Entity,
    pub in_language: &'static str,
}

impl WebSiteSchema {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            context: CONTEXT,
            kind: "WebSite",
            name: name.into(),
            alternate_name: None,
            url: site_url.into(),
            description: description.into(),
            publisher: Entity::organization(DEFAULT_NAME),
            in_language: LANGUAGE,
        }
    }

    /// Site-wide schema from the configuration
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.title, &config.description, &config.url).publisher(&config.author)
    }

    pub fn alternate_name(mut self, name: impl Into<String>) -> Self {
        self.alternate_name = Some(name.into());
        self
    }

    pub fn publisher(mut self, name: impl Into<String>) -> Self {
        self.publisher = Entity::organization(name);
        self
    }
}

/// `CollectionPage` schema for list pages such as archives and tags
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPageSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub in_language: &'static str,
    pub is_part_of: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_items: Option<usize>,
}

impl CollectionPageSchema {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        page_url: impl Into<String>,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            context: CONTEXT,
            kind: "CollectionPage",
            name: name.into(),
            description: description.into(),
            url: page_url.into(),
            in_language: LANGUAGE,
            is_part_of: Entity::website(DEFAULT_NAME, site_url),
            number_of_items: None,
        }
    }

    pub fn site_name(mut self, name: impl Into<String>) -> Self {
        self.is_part_of.name = name.into();
        self
    }

    pub fn number_of_items(mut self, count: usize) -> Self {
        self.number_of_items = Some(count);
        self
    }
}

/// `BlogPosting` schema for a single post
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub headline: String,
    pub description: String,
    pub url: String,
    pub author: Entity,
    pub publisher: Entity,
    pub date_published: String,
    pub date_modified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub in_language: &'static str,
}

impl BlogPostSchema {
    pub fn new<Tz: TimeZone>(
        title: impl Into<String>,
        description: impl Into<String>,
        page_url: impl Into<String>,
        published: &DateTime<Tz>,
        modified: &DateTime<Tz>,
    ) -> Self {
        let title = title.into();
        Self {
            context: CONTEXT,
            kind: "BlogPosting",
            headline: title.clone(),
            name: title,
            description: description.into(),
            url: page_url.into(),
            author: Entity::person(DEFAULT_NAME),
            publisher: Entity::organization(DEFAULT_NAME),
            date_published: iso_string(published),
            date_modified: iso_string(modified),
            keywords: None,
            image: None,
            in_language: LANGUAGE,
        }
    }

    /// Schema for a loaded post; a missing update date falls back to publication
    pub fn from_post(config: &SiteConfig, post: &Post) -> Self {
        let helpers = Helpers::new(config);
        let mut schema = Self::new(
            &post.title,
            &post.description,
            helpers.post_url(post),
            &post.pub_date,
            post.display_date(),
        )
        .author(&post.author)
        .publisher(&config.title);

        if !post.tags.is_empty() {
            schema = schema.keywords(post.tags.clone());
        }
        if let Some(image) = &post.hero_image {
            schema = schema.image(to_absolute_url(image, &config.url));
        }
        schema
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.author = Entity::person(name);
        self
    }

    pub fn publisher(mut self, name: impl Into<String>) -> Self {
        self.publisher = Entity::organization(name);
        self
    }

    pub fn keywords(mut self, tags: Vec<String>) -> Self {
        self.keywords = Some(tags);
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }
}

/// Serialize a schema to a JSON-LD string
pub fn to_json_ld<T: Serialize>(schema: &T) -> serde_json::Result<String> {
    serde_json::to_string(schema)
}

/// Wrap a schema in a `<script type="application/ld+json">` tag
pub fn json_ld_script<T: Serialize>(schema: &T) -> serde_json::Result<String> {
    // "</" would close the script element early
    let json = to_json_ld(schema)?.replace("</", "<\\/");
    Ok(format!(
        r#"<script type="application/ld+json">{}</script>"#,
        json
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone, Utc};
    use serde_json::{json, Value};

    fn parse(s: &str) -> Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn test_website_schema() {
        let schema = WebSiteSchema::new("ABTA", "テンプレート", "https://example.com")
            .alternate_name("Astro Blog");
        let value = parse(&to_json_ld(&schema).unwrap());
        assert_eq!(
            value,
            json!({
                "@context": "https://schema.org",
                "@type": "WebSite",
                "name": "ABTA",
                "alternateName": "Astro Blog",
                "url": "https://example.com",
                "description": "テンプレート",
                "publisher": { "@type": "Organization", "name": "ABTA" },
                "inLanguage": "ja"
            })
        );
    }

    #[test]
    fn test_website_schema_omits_alternate_name() {
        let json = to_json_ld(&WebSiteSchema::from_config(&SiteConfig::default())).unwrap();
        assert!(!json.contains("alternateName"));
        assert!(json.contains(r#""url":"https://abta.hachian.com""#));
    }

    #[test]
    fn test_collection_page_schema() {
        let schema = CollectionPageSchema::new(
            "アーカイブ",
            "記事一覧",
            "https://example.com/archive/",
            "https://example.com",
        )
        .number_of_items(12);
        let value = parse(&to_json_ld(&schema).unwrap());
        assert_eq!(value["@type"], "CollectionPage");
        assert_eq!(value["numberOfItems"], 12);
        assert_eq!(
            value["isPartOf"],
            json!({ "@type": "WebSite", "name": "ABTA", "url": "https://example.com" })
        );

        let schema = CollectionPageSchema::new("n", "d", "u", "s").site_name("My Site");
        let value = parse(&to_json_ld(&schema).unwrap());
        assert!(value.get("numberOfItems").is_none());
        assert_eq!(value["isPartOf"]["name"], "My Site");
    }

    #[test]
    fn test_blog_post_schema() {
        let published = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let schema =
            BlogPostSchema::new("記事", "説明", "https://e.com/blog/x/", &published, &published)
                .keywords(vec!["rust".to_string()]);
        let value = parse(&to_json_ld(&schema).unwrap());
        assert_eq!(value["headline"], "記事");
        assert_eq!(value["name"], "記事");
        assert_eq!(value["datePublished"], "2024-01-15T10:30:00.000Z");
        assert_eq!(value["author"], json!({ "@type": "Person", "name": "ABTA" }));
        assert_eq!(value["keywords"], json!(["rust"]));
        assert!(value.get("image").is_none());
    }

    #[test]
    fn test_blog_post_schema_from_post() {
        let config = SiteConfig::default();
        let date = Local.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        let mut post = Post::new("hello", "Hello", date);
        post.author = "山田".to_string();
        post.hero_image = Some("/images/hero.jpg".to_string());

        let schema = BlogPostSchema::from_post(&config, &post);
        assert_eq!(schema.url, "https://abta.hachian.com/blog/hello/");
        assert_eq!(schema.author.name, "山田");
        assert_eq!(schema.date_published, schema.date_modified);
        assert_eq!(schema.keywords, None);
        assert_eq!(
            schema.image.as_deref(),
            Some("https://abta.hachian.com/images/hero.jpg")
        );
    }

    #[test]
    fn test_json_ld_script_escapes_closing_tags() {
        let schema = WebSiteSchema::new("</script>", "d", "https://e.com");
        let html = json_ld_script(&schema).unwrap();
        assert!(html.starts_with(r#"<script type="application/ld+json">"#));
        assert!(html.contains(r#"<\/script>"#));
        assert_eq!(html.matches("</script>").count(), 1);
    }
}
