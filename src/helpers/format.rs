//! Text and number formatting helpers

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref SLUG_SPACE: Regex = Regex::new(r"[\s\x{3000}]+").unwrap();
    // ASCII word characters, hiragana, katakana, CJK ideographs and hyphen
    static ref SLUG_DISALLOWED: Regex =
        Regex::new(r"[^A-Za-z0-9_\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FAF}-]").unwrap();
    static ref SLUG_HYPHENS: Regex = Regex::new(r"-{2,}").unwrap();
    static ref SLUG_EDGES: Regex = Regex::new(r"^-|-$").unwrap();
    static ref HEX_COLOR: Regex = Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").unwrap();
    static ref RGB_COLOR: Regex =
        Regex::new(r"^rgb\(\s*[0-9]{1,3}\s*,\s*[0-9]{1,3}\s*,\s*[0-9]{1,3}\s*\)$").unwrap();
    static ref OKLCH_COLOR: Regex = Regex::new(r"^oklch\(.+\)$").unwrap();
}

/// Post count label, e.g. `5記事`
pub fn format_post_count(count: usize) -> String {
    format!("{}記事", count)
}

/// Post count with a label, e.g. `記事数: 5`
pub fn format_post_count_with_label(count: usize) -> String {
    format!("記事数: {}", count)
}

/// Tag count label, e.g. `3タグ`
pub fn format_tag_count(count: usize) -> String {
    format!("{}タグ", count)
}

/// Truncate to `max_length` characters, ending with `…` when cut
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let mut result: String = text.chars().take(max_length.saturating_sub(1)).collect();
    result.push('…');
    result
}

/// Remove anything that looks like an HTML tag
pub fn strip_html_tags(html: &str) -> String {
    HTML_TAG.replace_all(html, "").to_string()
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// URL slug that keeps Japanese text readable
///
/// # Examples
/// ```ignore
/// create_slug("Astro で ブログ") // -> "astro-で-ブログ"
/// ```
pub fn create_slug(text: &str) -> String {
    let lower = text.to_lowercase();
    let slug = SLUG_SPACE.replace_all(&lower, "-");
    let slug = SLUG_DISALLOWED.replace_all(&slug, "");
    let slug = SLUG_HYPHENS.replace_all(&slug, "-");
    SLUG_EDGES.replace_all(&slug, "").to_string()
}

/// Resolve a site-relative URL against `base_url`; absolute URLs pass through
pub fn to_absolute_url(relative_url: &str, base_url: &str) -> String {
    if relative_url.starts_with("http://") || relative_url.starts_with("https://") {
        return relative_url.to_string();
    }

    let base = base_url.trim_end_matches('/');
    let relative = relative_url.strip_prefix('/').unwrap_or(relative_url);
    format!("{}/{}", base, relative)
}

/// Lowercased extension after the last dot, or empty
pub fn file_extension(filename: &str) -> String {
    match filename.rfind('.') {
        Some(pos) => filename[pos + 1..].to_lowercase(),
        None => String::new(),
    }
}

/// Filename with the last extension removed
pub fn remove_file_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) => &filename[..pos],
        None => filename,
    }
}

/// Human-readable size, e.g. `1.5 KB`
pub fn format_bytes(bytes: u64, decimals: i32) -> String {
    const SIZES: [&str; 6] = ["Bytes", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let decimals = decimals.max(0) as usize;
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZES.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    // Round, then drop trailing zeros
    let rounded: f64 = format!("{:.*}", decimals, value).parse().unwrap_or(value);
    format!("{} {}", rounded, SIZES[unit])
}

/// Join with the Japanese comma `、`
pub fn join_with_comma<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("、")
}

/// Join as a Japanese list, e.g. `A、BとC`
pub fn join_with_japanese_and<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => format!("{}と{}", join_with_comma(init), last.as_ref()),
    }
}

/// Thousands-separated integer, e.g. `1,234,567`
pub fn format_number(num: i64) -> String {
    let digits = num.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if num < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Percentage of `value` in `total`, `0%` when total is zero
pub fn format_percentage(value: f64, total: f64, decimals: usize) -> String {
    if total == 0.0 {
        return "0%".to_string();
    }
    let percentage = value / total * 100.0;
    format!("{:.*}%", decimals, percentage)
}

/// CSS custom property reference, e.g. `var(--accent)`
pub fn create_css_variable(name: &str) -> String {
    format!("var(--{})", name)
}

/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `oklch(...)`
pub fn is_valid_color(color: &str) -> bool {
    HEX_COLOR.is_match(color) || RGB_COLOR.is_match(color) || OKLCH_COLOR.is_match(color)
}
