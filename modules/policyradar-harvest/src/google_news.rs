//! Google News augmentor: a curated query set run against the news-feed
//! endpoint, funnelled through the same extraction and pipeline contract as
//! any other feed.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use rand::Rng;
use tracing::{info, warn};

use policyradar_common::Article;
use policyradar_extract::feed::parse_feed;
use policyradar_fetch::FetchClient;

use crate::pipeline::PipelineContext;

/// Acceptance gate on the overall score for augmentor results.
const GOOGLE_NEWS_MIN_RELEVANCE: f64 = 0.2;
/// Entries taken per query.
const PER_QUERY_CAP: usize = 15;
/// Global cap across all queries.
pub const DEFAULT_MAX_ARTICLES: usize = 150;

/// (query, category) pairs: general policy, sector-specific, site-targeted,
/// and conflict coverage.
#[rustfmt::skip]
const QUERIES: &[(&str, &str)] = &[
    // General policy
    ("India policy government", "Policy News"),
    ("India legislation law regulation", "Policy News"),
    ("India policy reform", "Policy News"),
    ("India cabinet decision", "Policy News"),
    ("India ministry notification", "Policy News"),
    ("India supreme court judgement policy", "Constitutional & Legal"),
    ("India parliamentary proceedings", "Constitutional & Legal"),
    ("India budget policy fiscal", "Economic Policy"),
    // Sector-specific
    ("India technology policy digital", "Technology Policy"),
    ("India economic policy financial", "Economic Policy"),
    ("India education policy", "Education Policy"),
    ("India health policy healthcare", "Healthcare Policy"),
    ("India environment policy climate", "Environmental Policy"),
    ("India agriculture policy farm", "Agricultural Policy"),
    ("India energy policy renewable", "Renewable Energy Policy"),
    ("India foreign policy diplomatic", "Foreign Policy"),
    ("India defence policy security", "Defence & Security"),
    ("India labour policy employment", "Social Policy"),
    // Site-targeted at preferred domains
    ("site:thehindu.com India policy", "Policy News"),
    ("site:indianexpress.com India policy", "Policy News"),
    ("site:livemint.com policy regulation", "Economic Policy"),
    ("site:pib.gov.in policy", "Governance & Administration"),
    ("site:prsindia.org policy legislation", "Constitutional & Legal"),
    ("site:orfonline.org policy analysis", "Policy Analysis"),
    ("site:livelaw.in policy legal", "Constitutional & Legal"),
    ("site:medianama.com technology policy", "Technology Policy"),
    // Conflict coverage
    ("India Pakistan border recent", "Defence & Security"),
    ("India Pakistan ceasefire violation", "Defence & Security"),
    ("India Pakistan conflict latest", "Defence & Security"),
];

fn query_url(query: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("https://news.google.com/rss/search?q={encoded}&hl=en-IN&gl=IN&ceid=IN:en")
}

/// Google News titles carry the publisher as a " - Publisher" suffix; split
/// it back out so reliability and tiering see the real source.
fn split_publisher(title: &str) -> (String, Option<String>) {
    match title.rsplit_once(" - ") {
        Some((headline, publisher)) if headline.len() >= 10 && publisher.len() < 60 => {
            (headline.trim().to_string(), Some(publisher.trim().to_string()))
        }
        _ => (title.to_string(), None),
    }
}

pub struct GoogleNewsAugmentor {
    ctx: PipelineContext,
    client: Arc<FetchClient>,
    max_articles: usize,
}

impl GoogleNewsAugmentor {
    pub fn new(ctx: PipelineContext, client: Arc<FetchClient>, max_articles: usize) -> Self {
        Self { ctx, client, max_articles }
    }

    /// Run every query, stopping once the global cap is reached.
    pub async fn run(&self) -> Vec<Article> {
        let now = Local::now().naive_local();
        let mut accepted: Vec<Article> = Vec::new();

        info!(queries = QUERIES.len(), "Starting Google News augmentation");

        for (query, category) in QUERIES {
            if accepted.len() >= self.max_articles {
                break;
            }

            let url = query_url(query);
            let body = match self.client.fetch(&url).await {
                Ok(outcome) if outcome.is_success() => outcome.body,
                Ok(outcome) => {
                    warn!(query, status = outcome.status, "Google News query failed");
                    continue;
                }
                Err(e) => {
                    warn!(query, error = %e, "Google News query errored");
                    continue;
                }
            };

            let mut candidates = parse_feed(&body, "Google News", category);
            candidates.truncate(PER_QUERY_CAP);

            // Re-attribute each entry to its real publisher
            for candidate in &mut candidates {
                let (headline, publisher) = split_publisher(&candidate.title);
                candidate.title = headline;
                if let Some(publisher) = publisher {
                    candidate.source = publisher;
                }
                candidate.finalize_metadata();
            }

            let survivors =
                self.ctx.process_batch(candidates, GOOGLE_NEWS_MIN_RELEVANCE, now).await;
            accepted.extend(survivors);

            let pause_ms = rand::rng().random_range(500..1000);
            tokio::time::sleep(Duration::from_millis(pause_ms)).await;
        }

        accepted.truncate(self.max_articles);
        self.ctx.stats.lock().await.google_news_articles = accepted.len();
        info!(count = accepted.len(), "Google News augmentation complete");
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_url_encodes_and_pins_locale() {
        let url = query_url("India policy government");
        assert!(url.starts_with("https://news.google.com/rss/search?q=India+policy+government"));
        assert!(url.ends_with("&hl=en-IN&gl=IN&ceid=IN:en"));
    }

    #[test]
    fn publisher_suffix_split_from_headline() {
        let (headline, publisher) =
            split_publisher("Cabinet approves data rules - The Hindu");
        assert_eq!(headline, "Cabinet approves data rules");
        assert_eq!(publisher.as_deref(), Some("The Hindu"));
    }

    #[test]
    fn headline_without_suffix_untouched() {
        let (headline, publisher) = split_publisher("Cabinet approves data rules");
        assert_eq!(headline, "Cabinet approves data rules");
        assert!(publisher.is_none());
    }

    #[test]
    fn query_table_covers_the_strategies() {
        assert!(QUERIES.len() >= 25);
        assert!(QUERIES.iter().any(|(q, _)| q.starts_with("site:")));
        assert!(QUERIES.iter().any(|(_, c)| *c == "Defence & Security"));
    }
}
