//! End-to-end pipeline scenarios over inline fixtures: extraction through
//! scoring, dedup, and persistence, without any network.

use std::sync::Arc;

use chrono::{Duration, Local, Utc};
use tokio::sync::Mutex;

use policyradar_classify::MIN_RELEVANCE;
use policyradar_common::{Config, DateSource, RunStatistics};
use policyradar_extract::extract;
use policyradar_harvest::pipeline::{PipelineContext, Rejection};
use policyradar_store::{ArticleStore, Deduplicator};

fn rfc2822_hours_ago(hours: i64) -> String {
    let when = Utc::now() - Duration::hours(hours);
    when.to_rfc2822()
}

async fn context_with_store() -> PipelineContext {
    PipelineContext {
        config: Arc::new(Config::default()),
        store: Some(ArticleStore::connect_in_memory().await.unwrap()),
        dedup: Arc::new(Mutex::new(Deduplicator::new())),
        stats: Arc::new(Mutex::new(RunStatistics::new())),
    }
}

fn pib_rss(pub_date: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel><title>PIB</title>
<item>
  <title>Cabinet approves new Data Protection Rules</title>
  <link>https://pib.gov.in/PressReleasePage.aspx?PRID=1234567</link>
  <pubDate>{pub_date}</pubDate>
  <description>The Union Cabinet of India approved the new rules; the ministry will issue a notification and guidelines for compliance.</description>
</item>
</channel></rss>"#
    )
}

#[tokio::test]
async fn rss_happy_path_scores_and_recategorizes() {
    let ctx = context_with_store().await;
    let now = Local::now().naive_local();

    let body = pib_rss(&rfc2822_hours_ago(6));
    let candidates = extract(
        &body,
        Some("application/rss+xml"),
        "Press Information Bureau",
        "Policy News",
        "https://pib.gov.in/RssMain.aspx",
    );
    assert_eq!(candidates.len(), 1);

    let article = ctx.process(candidates.into_iter().next().unwrap(), MIN_RELEVANCE, now)
        .await
        .expect("article should be accepted");

    assert_eq!(article.category, "Technology Policy", "generic category reassigned");
    assert!(
        article.relevance_scores.overall >= 0.8,
        "overall = {}",
        article.relevance_scores.overall
    );
    assert!(
        article.tags.contains(&"Regulatory Changes".to_string())
            || article.tags.contains(&"Government Initiatives".to_string()),
        "tags = {:?}",
        article.tags
    );

    // Round-trip through the store by storage hash
    let store = ctx.store.as_ref().unwrap();
    let loaded = store.article_by_hash(&article.storage_hash()).await.unwrap();
    assert_eq!(loaded.title, article.title);
    assert_eq!(loaded.tags, article.tags);
}

#[tokio::test]
async fn organizational_link_on_ministry_site_yields_nothing() {
    let body = r#"<html><body>
        <footer><a href="/about-us">About Us</a><a href="/contact-us">Contact Us</a></footer>
    </body></html>"#;
    let candidates = extract(
        body,
        Some("text/html"),
        "Ministry of Electronics & IT",
        "Technology Policy",
        "https://www.meity.gov.in/",
    );
    assert!(candidates.is_empty(), "got {candidates:?}");
}

#[tokio::test]
async fn foreign_context_item_is_filtered() {
    let ctx = context_with_store().await;
    let now = Local::now().naive_local();

    let body = format!(
        r#"<?xml version="1.0"?><rss version="2.0"><channel><title>World</title>
<item>
  <title>U.S. Senate passes AI Bill</title>
  <link>https://example.com/us-senate-ai</link>
  <pubDate>{}</pubDate>
  <description>Washington lawmakers advanced the American measure.</description>
</item></channel></rss>"#,
        rfc2822_hours_ago(3)
    );
    let candidates =
        extract(&body, None, "Reuters India", "Policy News", "https://example.com/feed");
    assert_eq!(candidates.len(), 1);

    let rejection =
        ctx.process(candidates.into_iter().next().unwrap(), MIN_RELEVANCE, now).await.unwrap_err();
    assert_eq!(rejection, Rejection::LowRelevance);
    assert_eq!(ctx.stats.lock().await.low_relevance_articles, 1);
}

#[tokio::test]
async fn same_item_in_two_feeds_emitted_once() {
    let ctx = context_with_store().await;
    let now = Local::now().naive_local();
    let body = pib_rss(&rfc2822_hours_ago(5));

    let first = extract(
        &body,
        None,
        "Press Information Bureau",
        "Policy News",
        "https://pib.gov.in/RssMain.aspx",
    );
    let second = extract(
        &body,
        None,
        "Press Information Bureau",
        "Policy News",
        "https://pib.gov.in/OtherFeed.aspx",
    );

    let accepted_first = ctx.process_batch(first, MIN_RELEVANCE, now).await;
    let accepted_second = ctx.process_batch(second, MIN_RELEVANCE, now).await;

    assert_eq!(accepted_first.len(), 1);
    assert!(accepted_second.is_empty());
    let stats = ctx.stats.lock().await;
    assert_eq!(stats.duplicate_articles, 1);
    assert_eq!(stats.total_articles, 1);
}

#[tokio::test]
async fn stale_item_rejected_and_counted() {
    let ctx = context_with_store().await;
    let now = Local::now().naive_local();

    let body = pib_rss(&rfc2822_hours_ago(200 * 24));
    let candidates = extract(
        &body,
        None,
        "Press Information Bureau",
        "Policy News",
        "https://pib.gov.in/RssMain.aspx",
    );
    assert_eq!(candidates.len(), 1);

    let rejection =
        ctx.process(candidates.into_iter().next().unwrap(), MIN_RELEVANCE, now).await.unwrap_err();
    assert_eq!(rejection, Rejection::Stale);
    assert_eq!(ctx.stats.lock().await.filtered_articles, 1);
}

#[tokio::test]
async fn government_page_without_date_gets_default_and_scores() {
    let ctx = context_with_store().await;
    let now = Local::now().naive_local();

    let body = r#"<html><body><table class="listing">
        <tr><td><a href="/PressReleasePage.aspx?PRID=2001">Cabinet approves production linked incentive scheme for electronics</a></td></tr>
    </table></body></html>"#;
    let candidates = extract(
        body,
        Some("text/html"),
        "Press Information Bureau",
        "Governance & Administration",
        "https://pib.gov.in/AllReleasem.aspx",
    );
    assert_eq!(candidates.len(), 1);

    let article = ctx
        .process(candidates.into_iter().next().unwrap(), MIN_RELEVANCE, now)
        .await
        .expect("accepted");

    assert_eq!(article.metadata.date_source, DateSource::Default);
    let published = article.published_date.unwrap();
    let offset = now - published;
    assert!(
        (offset - Duration::hours(12)).num_minutes().abs() <= 1,
        "default should be ~12h ago, got {offset:?}"
    );
    assert!(
        article.relevance_scores.overall >= 0.7,
        "overall = {}",
        article.relevance_scores.overall
    );
}

#[tokio::test]
async fn every_emitted_article_is_fresh_and_in_range() {
    let ctx = context_with_store().await;
    let now = Local::now().naive_local();

    let mut body = String::from(r#"<?xml version="1.0"?><rss version="2.0"><channel><title>M</title>"#);
    for (i, hours) in [2i64, 80, 150 * 24, 10].iter().enumerate() {
        body.push_str(&format!(
            "<item><title>Ministry notification number {i} on policy compliance rules</title>\
             <link>https://example.gov.in/{i}</link><pubDate>{}</pubDate>\
             <description>Notification under the act for India.</description></item>",
            rfc2822_hours_ago(*hours)
        ));
    }
    body.push_str("</channel></rss>");

    let candidates = extract(
        &body,
        None,
        "Ministry of Finance",
        "Economic Policy",
        "https://example.gov.in/feed",
    );
    let accepted = ctx.process_batch(candidates, MIN_RELEVANCE, now).await;

    assert_eq!(accepted.len(), 3, "the 150-day-old item is rejected");
    for article in &accepted {
        let published = article.published_date.expect("date always set after pipeline");
        assert!(published <= now);
        assert!(published >= now - Duration::days(90));
        let s = article.relevance_scores;
        for v in [s.policy_relevance, s.source_reliability, s.recency, s.sector_specificity, s.overall] {
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
