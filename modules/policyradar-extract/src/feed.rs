//! Tolerant RSS/Atom parsing. Real-world Indian feeds ship broken XML
//! declarations and stray control characters; scrub and re-parse before
//! giving up.

use std::sync::LazyLock;

use feed_rs::model::Feed;
use regex::Regex;
use tracing::{debug, info};

use policyradar_common::text::strip_html;
use policyradar_common::{Article, DateSource};

use crate::dates::to_naive_local;
use crate::filters::is_entertainment_url;
use crate::MAX_PER_FEED;

const MIN_TITLE_LEN: usize = 10;

static CONTROL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x08\x0B-\x0C\x0E-\x1F]").expect("valid regex"));
static XML_DECL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\?xml[^>]*\?>").expect("valid regex"));

/// Strip invalid control characters and normalize the XML declaration.
pub fn scrub_xml(content: &str) -> String {
    let scrubbed = CONTROL_RE.replace_all(content, "");
    XML_DECL_RE
        .replace(&scrubbed, r#"<?xml version="1.0" encoding="UTF-8"?>"#)
        .to_string()
}

fn try_parse(content: &str) -> Option<Feed> {
    feed_rs::parser::parse(content.as_bytes()).ok()
}

/// Parse a feed body into candidate articles, scrubbing and re-parsing on
/// malformed input. Returns an empty vec when the body is not a usable feed;
/// the caller falls through to HTML scraping.
pub fn parse_feed(body: &str, source: &str, category: &str) -> Vec<Article> {
    let feed = match try_parse(body) {
        Some(feed) => feed,
        None => {
            debug!(source, "Feed parse failed, scrubbing and retrying");
            match try_parse(&scrub_xml(body)) {
                Some(feed) => feed,
                None => return Vec::new(),
            }
        }
    };

    let mut articles = Vec::new();

    for entry in feed.entries.into_iter().take(MAX_PER_FEED) {
        let title = match entry.title.as_ref() {
            Some(t) if t.content.trim().len() >= MIN_TITLE_LEN => t.content.trim().to_string(),
            _ => continue,
        };

        // Prefer the alternate link on Atom entries, fall back to the first
        // link, then to an http(s) entry id.
        let link = entry
            .links
            .iter()
            .find(|l| l.rel.as_deref() == Some("alternate"))
            .or_else(|| entry.links.first())
            .map(|l| l.href.clone())
            .or_else(|| entry.id.starts_with("http").then(|| entry.id.clone()));
        let link = match link {
            Some(l) if l.starts_with("http") => l,
            _ => continue,
        };

        if is_entertainment_url(&link) {
            continue;
        }

        let published = entry.published.or(entry.updated).map(to_naive_local);

        let summary = entry
            .summary
            .as_ref()
            .map(|s| strip_html(&s.content))
            .filter(|s| !s.is_empty())
            .or_else(|| {
                entry.content.as_ref().and_then(|c| c.body.as_deref()).map(strip_html)
            })
            .unwrap_or_else(|| format!("Policy news from {source}"));

        let content = entry
            .content
            .as_ref()
            .and_then(|c| c.body.as_deref())
            .map(strip_html)
            .filter(|c| !c.is_empty());

        let mut article = Article::new(title, link, source, category).with_summary(summary);
        article.content = content;
        if published.is_some() {
            article.published_date = published;
            article.metadata.date_source = DateSource::Feed;
        }
        articles.push(article);
    }

    info!(source, count = articles.len(), "Parsed feed entries");
    articles
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS_FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>PIB Releases</title>
    <item>
      <title>Cabinet approves new Data Protection Rules</title>
      <link>https://pib.gov.in/PressReleasePage.aspx?PRID=1234567</link>
      <pubDate>Wed, 14 May 2025 09:30:00 +0530</pubDate>
      <description>&lt;p&gt;The Union Cabinet today approved the rules.&lt;/p&gt;</description>
    </item>
    <item>
      <title>Short</title>
      <link>https://pib.gov.in/x</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_rss_items_and_drops_short_titles() {
        let articles = parse_feed(RSS_FIXTURE, "Press Information Bureau", "Governance & Administration");
        assert_eq!(articles.len(), 1);
        let a = &articles[0];
        assert_eq!(a.title, "Cabinet approves new Data Protection Rules");
        assert!(a.published_date.is_some());
        assert_eq!(a.metadata.date_source, DateSource::Feed);
        assert_eq!(a.summary, "The Union Cabinet today approved the rules.");
    }

    #[test]
    fn scrubs_control_characters_and_reparses() {
        let dirty = RSS_FIXTURE.replace("Cabinet approves", "Cabinet\u{0003} approves");
        let articles = parse_feed(&dirty, "Press Information Bureau", "Governance & Administration");
        assert_eq!(articles.len(), 1);
    }

    #[test]
    fn atom_alternate_link_preferred() {
        let atom = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Ministry feed</title>
  <id>urn:feed:1</id>
  <updated>2025-05-14T09:30:00Z</updated>
  <entry>
    <title>Ministry notifies amendment to telecom rules</title>
    <id>urn:entry:1</id>
    <updated>2025-05-14T09:30:00Z</updated>
    <link rel="self" href="https://example.gov.in/self/1"/>
    <link rel="alternate" href="https://example.gov.in/articles/1"/>
    <summary>Amendment notified.</summary>
  </entry>
</feed>"#;
        let articles = parse_feed(atom, "Ministry of Communications", "Technology Policy");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].url, "https://example.gov.in/articles/1");
    }

    #[test]
    fn garbage_body_yields_empty() {
        assert!(parse_feed("not xml at all", "X", "Policy News").is_empty());
    }

    #[test]
    fn entry_cap_is_enforced() {
        let mut body = String::from(r#"<?xml version="1.0"?><rss version="2.0"><channel><title>T</title>"#);
        for i in 0..40 {
            body.push_str(&format!(
                "<item><title>Policy announcement number {i:02} here</title><link>https://example.com/{i}</link></item>"
            ));
        }
        body.push_str("</channel></rss>");
        let articles = parse_feed(&body, "X", "Policy News");
        assert_eq!(articles.len(), MAX_PER_FEED);
    }
}
