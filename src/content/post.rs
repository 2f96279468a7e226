//! Blog post model

use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::HashMap;

use super::{ContentError, FrontMatter};

/// A validated entry of the blog collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Collection-relative path without extension, e.g. `2024/first-post`
    pub id: String,

    /// Post title
    pub title: String,

    /// Summary used for cards and meta tags
    pub description: String,

    /// Publication date
    pub pub_date: DateTime<Local>,

    /// Last updated date
    pub updated_date: Option<DateTime<Local>>,

    /// Hero image path or URL
    pub hero_image: Option<String>,

    /// Post tags
    pub tags: Vec<String>,

    pub author: String,

    /// Raw markdown body
    pub body: String,

    /// Source file path (relative to the site)
    pub source: String,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, pub_date: DateTime<Local>) -> Self {
        let id = id.into();
        Self {
            source: format!("{}.md", id),
            id,
            title: title.into(),
            description: String::new(),
            pub_date,
            updated_date: None,
            hero_image: None,
            tags: Vec::new(),
            author: String::new(),
            body: String::new(),
            extra: HashMap::new(),
        }
    }

    /// Validate front-matter into a post
    ///
    /// `default_author` fills in posts that do not name one.
    pub fn from_front_matter(
        id: impl Into<String>,
        fm: FrontMatter,
        body: &str,
        default_author: &str,
    ) -> Result<Self, ContentError> {
        let pub_date = fm.parse_pub_date()?;
        let updated_date = fm.parse_updated_date()?;

        let title = fm.title.ok_or(ContentError::MissingField("title"))?;
        let description = fm
            .description
            .ok_or(ContentError::MissingField("description"))?;

        let mut post = Post::new(id, title, pub_date);
        post.description = description;
        post.updated_date = updated_date;
        post.hero_image = fm.hero_image;
        post.tags = fm.tags;
        post.author = fm.author.unwrap_or_else(|| default_author.to_string());
        post.body = body.to_string();
        post.extra = fm.extra;
        Ok(post)
    }

    /// The date shown to readers: last update if any, else publication
    pub fn display_date(&self) -> &DateTime<Local> {
        self.updated_date.as_ref().unwrap_or(&self.pub_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn front_matter(yaml: &str) -> (FrontMatter, String) {
        let (fm, body) = FrontMatter::parse(yaml).unwrap();
        (fm, body.to_string())
    }

    #[test]
    fn test_from_front_matter() {
        let (fm, body) = front_matter(
            "---\ntitle: 記事\ndescription: 説明\npubDate: 2024-03-05\ntags: [a, b]\n---\n本文\n",
        );
        let post = Post::from_front_matter("first", fm, &body, "ABTA").unwrap();
        assert_eq!(post.id, "first");
        assert_eq!(post.title, "記事");
        assert_eq!(post.author, "ABTA");
        assert_eq!(post.tags, vec!["a", "b"]);
        assert_eq!(post.body, "本文\n");
        assert_eq!(post.pub_date.format("%Y-%m-%d").to_string(), "2024-03-05");
    }

    #[test]
    fn test_explicit_author_wins() {
        let (fm, body) = front_matter(
            "---\ntitle: t\ndescription: d\npubDate: 2024-03-05\nauthor: 山田\n---\n",
        );
        let post = Post::from_front_matter("x", fm, &body, "ABTA").unwrap();
        assert_eq!(post.author, "山田");
    }

    #[test]
    fn test_required_fields() {
        let (fm, body) = front_matter("---\ndescription: d\npubDate: 2024-03-05\n---\n");
        let err = Post::from_front_matter("x", fm, &body, "ABTA").unwrap_err();
        assert!(matches!(err, ContentError::MissingField("title")));

        let (fm, body) = front_matter("---\ntitle: t\npubDate: 2024-03-05\n---\n");
        let err = Post::from_front_matter("x", fm, &body, "ABTA").unwrap_err();
        assert!(matches!(err, ContentError::MissingField("description")));

        let (fm, body) = front_matter("---\ntitle: t\ndescription: d\n---\n");
        let err = Post::from_front_matter("x", fm, &body, "ABTA").unwrap_err();
        assert!(matches!(err, ContentError::MissingField("pubDate")));
    }

    #[test]
    fn test_display_date() {
        let published = Local.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let updated = Local.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();

        let mut post = Post::new("p", "P", published);
        assert_eq!(post.display_date(), &published);

        post.updated_date = Some(updated);
        assert_eq!(post.display_date(), &updated);
    }
}
