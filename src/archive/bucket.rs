//! Archive bucket types

use chrono::Datelike;
use serde::Serialize;
use std::fmt;

use crate::content::Post;

/// Composite `(year, month)` key; orders by year, then month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Key of a post's publication date
    pub fn of(post: &Post) -> Self {
        // chrono's month() is already 1-based
        Self::new(post.pub_date.year(), post.pub_date.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Posts published in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket<'a> {
    pub year: i32,
    pub month: u32,
    #[serde(rename = "count")]
    pub post_count: usize,
    pub posts: Vec<&'a Post>,
}

impl<'a> MonthlyBucket<'a> {
    pub(crate) fn new(key: YearMonth, posts: Vec<&'a Post>) -> Self {
        Self {
            year: key.year,
            month: key.month,
            post_count: posts.len(),
            posts,
        }
    }

    pub fn key(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }
}

/// Posts published in one year, with their per-month rollup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyBucket<'a> {
    pub year: i32,
    #[serde(rename = "count")]
    pub post_count: usize,
    pub posts: Vec<&'a Post>,
    /// Newest month first
    pub monthly_breakdown: Vec<MonthlyBucket<'a>>,
}

impl<'a> YearlyBucket<'a> {
    pub(crate) fn new(
        year: i32,
        posts: Vec<&'a Post>,
        monthly_breakdown: Vec<MonthlyBucket<'a>>,
    ) -> Self {
        Self {
            year,
            post_count: posts.len(),
            posts,
            monthly_breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month_ordering() {
        assert!(YearMonth::new(2024, 1) > YearMonth::new(2023, 12));
        assert!(YearMonth::new(2024, 3) > YearMonth::new(2024, 1));
        assert_eq!(YearMonth::new(2024, 3).to_string(), "2024-03");
    }
}
