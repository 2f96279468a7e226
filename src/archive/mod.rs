//! Date-based archive grouping
//!
//! Groups a post collection by calendar month and by calendar year, newest
//! first. Every function here is pure: buckets borrow the input posts and
//! are rebuilt on each call. Display limits such as "latest N years" are the
//! caller's business; nothing is truncated here.

mod bucket;

use chrono::Datelike;
use std::collections::HashMap;

pub use bucket::{MonthlyBucket, YearMonth, YearlyBucket};

use crate::content::Post;

/// Group posts by publication `(year, month)`, newest month first
///
/// Posts keep their input order inside each bucket.
pub fn group_by_month(posts: &[Post]) -> Vec<MonthlyBucket<'_>> {
    group_refs_by_month(posts)
}

fn group_refs_by_month<'a, I>(posts: I) -> Vec<MonthlyBucket<'a>>
where
    I: IntoIterator<Item = &'a Post>,
{
    let mut months: HashMap<YearMonth, Vec<&'a Post>> = HashMap::new();
    for post in posts {
        months.entry(YearMonth::of(post)).or_default().push(post);
    }

    let mut buckets: Vec<_> = months
        .into_iter()
        .map(|(key, posts)| MonthlyBucket::new(key, posts))
        .collect();
    buckets.sort_unstable_by(|a, b| b.key().cmp(&a.key()));
    buckets
}

/// Group posts by publication year, newest year first
///
/// Each bucket carries the month grouping of its own posts.
pub fn group_by_year(posts: &[Post]) -> Vec<YearlyBucket<'_>> {
    let mut years: HashMap<i32, Vec<&Post>> = HashMap::new();
    for post in posts {
        years.entry(post.pub_date.year()).or_default().push(post);
    }

    let mut buckets: Vec<_> = years
        .into_iter()
        .map(|(year, posts)| {
            let breakdown = group_refs_by_month(posts.iter().copied());
            YearlyBucket::new(year, posts, breakdown)
        })
        .collect();
    buckets.sort_unstable_by(|a, b| b.year.cmp(&a.year));

    tracing::debug!("Grouped {} posts into {} years", posts.len(), buckets.len());
    buckets
}

/// Posts published in the given year and month (1-based), in input order
pub fn filter_by_year_month(posts: &[Post], year: i32, month: u32) -> Vec<&Post> {
    let key = YearMonth::new(year, month);
    posts.iter().filter(|p| YearMonth::of(p) == key).collect()
}

/// Posts published in the given year, in input order
pub fn filter_by_year(posts: &[Post], year: i32) -> Vec<&Post> {
    posts
        .iter()
        .filter(|p| p.pub_date.year() == year)
        .collect()
}

/// Distinct publication years, newest first
pub fn available_years(posts: &[Post]) -> Vec<i32> {
    let mut years: Vec<i32> = posts.iter().map(|p| p.pub_date.year()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Distinct publication `(year, month)` pairs, newest first
pub fn available_year_months(posts: &[Post]) -> Vec<YearMonth> {
    let mut keys: Vec<YearMonth> = posts.iter().map(YearMonth::of).collect();
    keys.sort_unstable_by(|a, b| b.cmp(a));
    keys.dedup();
    keys
}
