//! Front-matter parsing for the blog collection

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use super::ContentError;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Raw front-matter of a blog post, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub pub_date: Option<String>,
    pub updated_date: Option<String>,
    pub hero_image: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    pub author: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        // Both fences must be a line of exactly `---`
        let mut offset = 0;
        let mut yaml_start = None;
        for line in content.split_inclusive('\n') {
            let next = offset + line.len();
            if line.trim() == "---" {
                match yaml_start {
                    None => yaml_start = Some(next),
                    Some(start) => {
                        let remaining = content[next..].trim_start_matches(['\n', '\r']);
                        return Ok((Self::from_yaml(&content[start..offset])?, remaining));
                    }
                }
            } else if yaml_start.is_none() {
                return Err(ContentError::MissingFrontMatter);
            }
            offset = next;
        }

        Err(ContentError::MissingFrontMatter)
    }

    fn from_yaml(yaml: &str) -> Result<Self, ContentError> {
        if yaml.trim().is_empty() {
            return Ok(FrontMatter::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse `pubDate`; absent and unparseable are both errors
    pub fn parse_pub_date(&self) -> Result<DateTime<Local>, ContentError> {
        let raw = self
            .pub_date
            .as_deref()
            .ok_or(ContentError::MissingField("pubDate"))?;
        parse_date_string(raw).ok_or_else(|| ContentError::InvalidDate {
            field: "pubDate",
            value: raw.to_string(),
        })
    }

    /// Parse `updatedDate`; absent is fine, unparseable is an error
    pub fn parse_updated_date(&self) -> Result<Option<DateTime<Local>>, ContentError> {
        match self.updated_date.as_deref() {
            None => Ok(None),
            Some(raw) => parse_date_string(raw)
                .map(Some)
                .ok_or_else(|| ContentError::InvalidDate {
                    field: "updatedDate",
                    value: raw.to_string(),
                }),
        }
    }
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim().trim_matches(|c| c == '\'' || c == '"');

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    // Date only, e.g. "2024-01-15" or "Jul 08 2022"
    let date_formats = ["%Y-%m-%d", "%Y/%m/%d", "%b %d %Y", "%B %d %Y", "%b %d, %Y"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    None
}
