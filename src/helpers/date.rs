//! Date helper functions

use chrono::{DateTime, TimeZone, Utc};

/// Japanese year-month label
///
/// # Examples
/// ```ignore
/// format_japanese_year_month(2024, 1) // -> "2024年1月"
/// ```
pub fn format_japanese_year_month(year: i32, month: u32) -> String {
    format!("{}年{}月", year, month)
}

/// Japanese year label, e.g. `2024年`
pub fn format_japanese_year(year: i32) -> String {
    format!("{}年", year)
}

/// Japanese numeric date, e.g. `2024/1/15`
pub fn format_japanese_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y/%-m/%-d").to_string()
}

/// UTC timestamp with millisecond precision, e.g. `2024-01-15T10:30:00.000Z`
pub fn iso_string<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

/// Generate a <time> HTML element with a Japanese label
pub fn time_tag<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        r#"<time datetime="{}">{}</time>"#,
        iso_string(date),
        format_japanese_date(date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_japanese_labels() {
        assert_eq!(format_japanese_year_month(2024, 1), "2024年1月");
        assert_eq!(format_japanese_year_month(2023, 12), "2023年12月");
        assert_eq!(format_japanese_year(2024), "2024年");
    }

    #[test]
    fn test_format_japanese_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(format_japanese_date(&date), "2024/1/5");
    }

    #[test]
    fn test_iso_string_converts_to_utc() {
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        let date = jst.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        assert_eq!(iso_string(&date), "2024-01-15T00:00:00.000Z");
    }

    #[test]
    fn test_time_tag() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(
            time_tag(&date),
            r#"<time datetime="2024-03-05T00:00:00.000Z">2024/3/5</time>"#
        );
    }
}
