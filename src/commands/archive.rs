//! Print the date archive

use anyhow::Result;
use std::fmt::Write;

use crate::archive::{self, MonthlyBucket};
use crate::content::Post;
use crate::helpers::{
    format_japanese_date, format_japanese_year, format_japanese_year_month, format_post_count,
    ArchiveKind, Helpers,
};
use crate::Site;

/// Print the archive as text or as the sidebar HTML list
pub fn run(site: &Site, kind: ArchiveKind, limit: Option<usize>, html: bool) -> Result<()> {
    if !site.config.features.archive_enabled {
        anyhow::bail!("The archive is disabled in {}", crate::CONFIG_FILE);
    }

    let posts = site.load_posts()?;

    if html {
        let helpers = Helpers::new(&site.config);
        let limit = limit.or_else(|| helpers.sidebar_limit());
        println!(
            "{}",
            crate::helpers::list_archives(&site.config, &posts, kind, true, limit)
        );
    } else {
        print!("{}", render(&posts, kind, limit)?);
    }

    Ok(())
}

/// Text tree of the archive, newest first
///
/// `limit` caps the number of top-level entries after grouping.
pub fn render(posts: &[Post], kind: ArchiveKind, limit: Option<usize>) -> Result<String> {
    let limit = limit.unwrap_or(usize::MAX);
    let mut out = String::new();

    match kind {
        ArchiveKind::Yearly => {
            for year in archive::group_by_year(posts).iter().take(limit) {
                writeln!(
                    out,
                    "{} ({})",
                    format_japanese_year(year.year),
                    format_post_count(year.post_count)
                )?;
                for month in &year.monthly_breakdown {
                    write_month(&mut out, month, "  ")?;
                }
            }
        }
        ArchiveKind::Monthly => {
            for month in archive::group_by_month(posts).iter().take(limit) {
                write_month(&mut out, month, "")?;
            }
        }
    }

    Ok(out)
}

fn write_month(out: &mut String, month: &MonthlyBucket, indent: &str) -> std::fmt::Result {
    writeln!(
        out,
        "{}{} ({})",
        indent,
        format_japanese_year_month(month.year, month.month),
        format_post_count(month.post_count)
    )?;
    for post in &month.posts {
        writeln!(
            out,
            "{}  - {} {}",
            indent,
            format_japanese_date(&post.pub_date),
            post.title
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn post(title: &str, year: i32, month: u32, day: u32) -> Post {
        let date = Local.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap();
        Post::new(title.to_lowercase(), title, date)
    }

    fn sample() -> Vec<Post> {
        vec![
            post("A", 2024, 1, 10),
            post("B", 2024, 1, 20),
            post("C", 2024, 3, 5),
            post("D", 2023, 12, 1),
        ]
    }

    #[test]
    fn test_render_yearly() {
        let out = render(&sample(), ArchiveKind::Yearly, None).unwrap();
        let expected = "\
2024年 (3記事)
  2024年3月 (1記事)
    - 2024/3/5 C
  2024年1月 (2記事)
    - 2024/1/10 A
    - 2024/1/20 B
2023年 (1記事)
  2023年12月 (1記事)
    - 2023/12/1 D
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_monthly_with_limit() {
        let out = render(&sample(), ArchiveKind::Monthly, Some(1)).unwrap();
        assert_eq!(out, "2024年3月 (1記事)\n  - 2024/3/5 C\n");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], ArchiveKind::Yearly, None).unwrap(), "");
    }

    #[test]
    fn test_disabled_archive() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join(crate::CONFIG_FILE),
            "features:\n  archive_enabled: false\n",
        )
        .unwrap();
        let site = Site::new(tmp.path()).unwrap();
        assert!(run(&site, ArchiveKind::Yearly, None, false).is_err());
    }
}
