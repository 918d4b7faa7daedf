//! Date resolution: parse from feed fields, element attributes, nearby nodes,
//! title text, and URL paths; validate against the freshness window; supply a
//! source-type-dependent default when everything misses.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use policyradar_common::{DateSource, SourceType};

/// Articles older than this are rejected outright.
pub const FRESHNESS_WINDOW_DAYS: i64 = 90;

/// Major news portals publish machine-readable dates nearly always; when one
/// is missing the item is at most a few hours old.
const MAJOR_NEWS_MARKERS: &[&str] = &[
    "the hindu", "indian express", "economic times", "mint", "livemint", "times of india",
    "hindustan times", "ndtv", "bbc", "reuters", "business standard",
];

static TITLE_DATE_RES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").expect("valid regex"), "dmy"),
        (Regex::new(r"\b(\d{4})/(\d{1,2})/(\d{1,2})\b").expect("valid regex"), "ymd"),
        (
            Regex::new(r"\b(\d{1,2})\s+(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+(\d{4})\b")
                .expect("valid regex"),
            "d-mon-y",
        ),
        (
            Regex::new(r"\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+(\d{1,2}),?\s+(\d{4})\b")
                .expect("valid regex"),
            "mon-d-y",
        ),
    ]
});

static URL_DATE_RES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"/(\d{4})/(\d{1,2})/(\d{1,2})/").expect("valid regex"), "ymd"),
        (Regex::new(r"date=(\d{4})-(\d{2})-(\d{2})").expect("valid regex"), "ymd"),
        (Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").expect("valid regex"), "ymd"),
        (Regex::new(r"/(\d{4})(\d{2})(\d{2})\b").expect("valid regex"), "ymd"),
    ]
});

static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(updated|posted|published):?\s*").expect("valid regex"));

/// Normalize an aware datetime to naive local time.
pub fn to_naive_local(dt: DateTime<Utc>) -> NaiveDateTime {
    dt.with_timezone(&Local).naive_local()
}

/// Parse a free-form date string in the formats feeds and article pages
/// actually use. Returns naive local time.
pub fn parse_flexible(text: &str) -> Option<NaiveDateTime> {
    let cleaned = PREFIX_RE.replace_all(text.trim(), "").trim().to_string();
    if cleaned.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(&cleaned) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(&cleaned) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%d %b %Y %H:%M:%S", "%d %B %Y %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&cleaned, fmt) {
            return Some(dt);
        }
    }
    for fmt in ["%Y-%m-%d", "%d %b %Y", "%d %B %Y", "%B %d, %Y", "%b %d, %Y", "%d/%m/%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(&cleaned, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    // Date may be embedded in longer text ("Published on 14 May 2025 by ...")
    date_from_text(&cleaned)
}

fn build_date(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn month_number(name: &str) -> u32 {
    match &name.to_lowercase()[..3] {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        _ => 12,
    }
}

/// Regex the patterns used in headlines out of arbitrary text.
pub fn date_from_text(text: &str) -> Option<NaiveDateTime> {
    for (re, order) in TITLE_DATE_RES.iter() {
        if let Some(caps) = re.captures(text) {
            let parsed = match *order {
                "dmy" => build_date(caps[3].parse().ok()?, caps[2].parse().ok()?, caps[1].parse().ok()?),
                "ymd" => build_date(caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?),
                "d-mon-y" => build_date(caps[3].parse().ok()?, month_number(&caps[2]), caps[1].parse().ok()?),
                "mon-d-y" => build_date(caps[3].parse().ok()?, month_number(&caps[1]), caps[2].parse().ok()?),
                _ => None,
            };
            if parsed.is_some() {
                return parsed;
            }
        }
    }
    None
}

/// Regex a date out of a URL path (`/2025/05/14/`, `date=2025-05-14`,
/// `20250514`, `2025-05-14`).
pub fn date_from_url(url: &str) -> Option<NaiveDateTime> {
    for (re, _) in URL_DATE_RES.iter() {
        if let Some(caps) = re.captures(url) {
            let year: i32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;
            // A path segment like /2024/12/31/ is a date; /1234/56/78/ is not
            if (2000..=2100).contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day)
            {
                return build_date(year, month, day);
            }
        }
    }
    None
}

/// Accept only dates inside `[now − 90 days, now]`.
pub fn within_window(date: NaiveDateTime, now: NaiveDateTime) -> bool {
    let floor = now - Duration::days(FRESHNESS_WINDOW_DAYS);
    date >= floor && date <= now
}

fn is_major_news(source: &str) -> bool {
    let s = source.to_lowercase();
    MAJOR_NEWS_MARKERS.iter().any(|m| s.contains(m))
}

/// Default applied when no valid date is extracted. Government portals often
/// omit machine-readable dates while publishing same-day; news portals rarely
/// do; everything else is uncertain.
pub fn default_date(source_type: SourceType, source: &str, now: NaiveDateTime) -> NaiveDateTime {
    if source_type.is_government() {
        now - Duration::hours(12)
    } else if is_major_news(source) {
        now - Duration::hours(6)
    } else {
        now - Duration::days(7)
    }
}

/// Outcome of running the date pipeline over one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDecision {
    /// Date present (extracted or defaulted) and within the window.
    Accept,
    /// An extracted date fell outside the window; reject the article.
    RejectStale,
}

/// Finalize an article's date: validate any extracted date against the
/// freshness window, fall back to title/URL extraction, then to the
/// source-type default.
pub fn finalize(article: &mut policyradar_common::Article, now: NaiveDateTime) -> DateDecision {
    if let Some(date) = article.published_date {
        if within_window(date, now) {
            article.metadata.date_valid = true;
            return DateDecision::Accept;
        }
        article.metadata.date_valid = false;
        return DateDecision::RejectStale;
    }

    if let Some(date) = date_from_text(&article.title) {
        if !within_window(date, now) {
            return DateDecision::RejectStale;
        }
        article.published_date = Some(date);
        article.metadata.date_source = DateSource::Title;
        article.metadata.date_valid = true;
        return DateDecision::Accept;
    }

    if let Some(date) = date_from_url(&article.url) {
        if !within_window(date, now) {
            return DateDecision::RejectStale;
        }
        article.published_date = Some(date);
        article.metadata.date_source = DateSource::Url;
        article.metadata.date_valid = true;
        return DateDecision::Accept;
    }

    article.published_date =
        Some(default_date(article.metadata.source_type, &article.source, now));
    article.metadata.date_source = DateSource::Default;
    article.metadata.date_valid = true;
    DateDecision::Accept
}

#[cfg(test)]
mod tests {
    use super::*;
    use policyradar_common::Article;

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    #[test]
    fn parses_rfc2822_feed_dates() {
        let parsed = parse_flexible("Wed, 14 May 2025 09:30:00 +0530").unwrap();
        assert_eq!(parsed.date().format("%Y-%m-%d").to_string().len(), 10);
    }

    #[test]
    fn parses_plain_dates_with_prefixes() {
        let parsed = parse_flexible("Published: 14 May 2025").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 5, 14).unwrap());
    }

    #[test]
    fn extracts_date_from_title() {
        let parsed = date_from_text("Cabinet meeting outcomes 12/03/2025 briefing").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 3, 12).unwrap());
        let parsed = date_from_text("Notification May 14, 2025").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 5, 14).unwrap());
    }

    #[test]
    fn extracts_date_from_url_path() {
        let parsed = date_from_url("https://example.com/2025/05/14/cabinet-decision/").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 5, 14).unwrap());
        assert_eq!(
            date_from_url("https://example.com/news?date=2025-04-01").unwrap().date(),
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
        );
    }

    #[test]
    fn url_without_date_yields_none() {
        assert!(date_from_url("https://example.com/news/cabinet-decision").is_none());
    }

    #[test]
    fn window_rejects_old_and_future_dates() {
        let now = now();
        assert!(within_window(now - Duration::days(10), now));
        assert!(!within_window(now - Duration::days(120), now));
        assert!(!within_window(now + Duration::days(1), now));
    }

    #[test]
    fn government_default_is_twelve_hours() {
        let now = now();
        let d = default_date(SourceType::Government, "Press Information Bureau", now);
        assert_eq!(now - d, Duration::hours(12));
    }

    #[test]
    fn major_news_default_is_six_hours() {
        let now = now();
        let d = default_date(SourceType::NewsMedia, "The Hindu National", now);
        assert_eq!(now - d, Duration::hours(6));
    }

    #[test]
    fn other_default_is_seven_days() {
        let now = now();
        let d = default_date(SourceType::Other, "Some Blog", now);
        assert_eq!(now - d, Duration::days(7));
    }

    #[test]
    fn finalize_rejects_stale_article() {
        let mut article = Article::new("Old item", "https://example.com/a", "Mint", "Economic Policy");
        let now = now();
        article.published_date = Some(now - Duration::days(200));
        assert_eq!(finalize(&mut article, now), DateDecision::RejectStale);
    }

    #[test]
    fn finalize_defaults_undated_government_article() {
        let mut article = Article::new(
            "New welfare scheme announced",
            "https://pib.gov.in/AllReleasem.aspx",
            "Press Information Bureau",
            "Governance & Administration",
        );
        let now = now();
        assert_eq!(finalize(&mut article, now), DateDecision::Accept);
        assert_eq!(article.metadata.date_source, DateSource::Default);
        assert_eq!(article.published_date.unwrap(), now - Duration::hours(12));
    }
}
