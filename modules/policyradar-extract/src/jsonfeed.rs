//! JSON feed parsing. Accepts the loose shapes seen in the wild: an object
//! with an `items`/`articles`/`posts`/`entries` array, or a bare array.

use serde_json::Value;
use tracing::info;

use policyradar_common::text::strip_html;
use policyradar_common::{Article, DateSource};

use crate::dates::parse_flexible;
use crate::filters::is_entertainment_url;
use crate::MAX_PER_FEED;

const MIN_TITLE_LEN: usize = 10;

fn items_array(root: &Value) -> Option<&Vec<Value>> {
    if let Value::Array(items) = root {
        return Some(items);
    }
    for key in ["items", "articles", "posts", "entries"] {
        if let Some(Value::Array(items)) = root.get(key) {
            return Some(items);
        }
    }
    None
}

fn first_string<'a>(item: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|k| item.get(*k).and_then(Value::as_str)).filter(|s| !s.is_empty())
}

pub fn parse_json_feed(body: &str, source: &str, category: &str) -> Vec<Article> {
    let root: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };

    let items = match items_array(&root) {
        Some(items) => items,
        None => return Vec::new(),
    };

    let mut articles = Vec::new();
    for item in items.iter().take(MAX_PER_FEED) {
        let title = match first_string(item, &["title"]) {
            Some(t) if t.trim().len() >= MIN_TITLE_LEN => t.trim().to_string(),
            _ => continue,
        };
        let url = match first_string(item, &["url", "link", "href"]) {
            Some(u) if u.starts_with("http") => u.to_string(),
            _ => continue,
        };
        if is_entertainment_url(&url) {
            continue;
        }

        let summary = first_string(item, &["summary", "description", "excerpt"])
            .map(strip_html)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("Policy news from {source}"));

        let mut article = Article::new(title, url, source, category).with_summary(summary);
        if let Some(date) =
            first_string(item, &["published", "pubDate", "date", "date_published"]).and_then(parse_flexible)
        {
            article.published_date = Some(date);
            article.metadata.date_source = DateSource::Feed;
        }
        articles.push(article);
    }

    info!(source, count = articles.len(), "Parsed JSON feed items");
    articles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_object() {
        let body = r#"{"items": [
            {"title": "Ministry issues new data rules", "url": "https://example.gov.in/1",
             "summary": "Rules notified.", "published": "2025-05-14"},
            {"title": "x", "url": "https://example.gov.in/2"}
        ]}"#;
        let articles = parse_json_feed(body, "MeitY", "Technology Policy");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].summary, "Rules notified.");
        assert!(articles[0].published_date.is_some());
    }

    #[test]
    fn parses_bare_array_with_link_field() {
        let body = r#"[{"title": "Regulator updates tariff order", "link": "https://example.com/a"}]"#;
        let articles = parse_json_feed(body, "TRAI", "Technology Policy");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].url, "https://example.com/a");
    }

    #[test]
    fn accepts_posts_key_and_href() {
        let body = r#"{"posts": [{"title": "Commission hearing scheduled", "href": "https://example.com/h"}]}"#;
        assert_eq!(parse_json_feed(body, "CCI", "Economic Policy").len(), 1);
    }

    #[test]
    fn invalid_json_yields_empty() {
        assert!(parse_json_feed("{not json", "X", "Policy News").is_empty());
        assert!(parse_json_feed(r#"{"meta": {}}"#, "X", "Policy News").is_empty());
    }
}
