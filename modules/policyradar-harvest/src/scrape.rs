//! Direct HTML scraping of a shortlist of reliable policy pages, used to top
//! up a thin run. The only path with the cross-run near-duplicate check.

use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use policyradar_common::Article;
use policyradar_extract::html::extract_from_html;
use policyradar_fetch::{DomainGate, FetchClient};
use policyradar_store::dedup::{is_near_duplicate, NEAR_DUP_WINDOW_DAYS};

use crate::pipeline::{default_threshold, PipelineContext};

const PER_SOURCE_CAP: usize = 15;

/// Listing pages with strong policy density, scraped with the site-specific
/// selector table.
#[rustfmt::skip]
const SCRAPE_TARGETS: &[(&str, &str, &str)] = &[
    ("PRS Legislative Research", "https://prsindia.org/billtrack/recent", "Constitutional & Legal"),
    ("Ministry of Electronics & IT", "https://www.meity.gov.in/whatsnew", "Technology Policy"),
    ("PIB - Press Release", "https://pib.gov.in/AllReleasem.aspx", "Governance & Administration"),
    ("TRAI Regulations", "https://www.trai.gov.in/notifications/regulation", "Technology Policy"),
    ("Centre for Policy Research", "https://cprindia.org/", "Policy Analysis"),
    ("Observer Research Foundation", "https://www.orfonline.org/research/", "Policy Analysis"),
    ("The Hindu - Policy & Issues", "https://www.thehindu.com/news/national/", "Governance & Administration"),
    ("Indian Express - Governance", "https://indianexpress.com/section/india/politics/", "Governance & Administration"),
    ("Economic Times Policy", "https://economictimes.indiatimes.com/news/economy/policy", "Economic Policy"),
    ("LiveMint Economy", "https://www.livemint.com/economy", "Economic Policy"),
    ("MediaNama", "https://www.medianama.com/category/policy/", "Technology Policy"),
    ("Internet Freedom Foundation", "https://internetfreedom.in/", "Technology Policy"),
    ("Economic Times Healthcare", "https://health.economictimes.indiatimes.com/news/policy", "Healthcare Policy"),
    ("Down To Earth", "https://www.downtoearth.org.in/news", "Environmental Policy"),
    ("LiveLaw Top Stories", "https://www.livelaw.in/top-stories", "Constitutional & Legal"),
    ("Bar and Bench", "https://www.barandbench.com/news", "Constitutional & Legal"),
];

pub struct DirectScraper {
    ctx: PipelineContext,
    client: Arc<FetchClient>,
    gate: Arc<DomainGate>,
}

impl DirectScraper {
    pub fn new(ctx: PipelineContext, client: Arc<FetchClient>) -> Self {
        Self { ctx, client, gate: Arc::new(DomainGate::new()) }
    }

    pub async fn run(&self) -> Vec<Article> {
        let now = Local::now().naive_local();
        info!(targets = SCRAPE_TARGETS.len(), "Direct scraping shortlist");

        // Recently stored rows back the near-duplicate suppression
        let recent = match &self.ctx.store {
            Some(store) => store.recent_url_title_pairs(NEAR_DUP_WINDOW_DAYS).await,
            None => Vec::new(),
        };

        let mut accepted = Vec::new();
        for (name, url, category) in SCRAPE_TARGETS {
            let body = {
                let _permit = self.gate.acquire(url).await;
                match self.client.fetch(url).await {
                    Ok(outcome) if outcome.is_success() => outcome.body,
                    Ok(outcome) => {
                        warn!(source = name, status = outcome.status, "Direct scrape failed");
                        continue;
                    }
                    Err(e) => {
                        warn!(source = name, error = %e, "Direct scrape errored");
                        continue;
                    }
                }
            };

            let mut candidates = extract_from_html(&body, url, name, category);
            candidates.truncate(PER_SOURCE_CAP);
            candidates.retain(|c| !is_near_duplicate(c, &recent));

            let survivors = self.ctx.process_batch(candidates, default_threshold(), now).await;
            if !survivors.is_empty() {
                info!(source = name, count = survivors.len(), "Direct scrape yielded articles");
            }
            accepted.extend(survivors);
        }

        self.ctx.stats.lock().await.direct_scrape_articles = accepted.len();
        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortlist_targets_are_well_formed() {
        assert!(SCRAPE_TARGETS.len() >= 10);
        for (name, url, category) in SCRAPE_TARGETS {
            assert!(!name.is_empty());
            assert!(url.starts_with("https://"));
            assert!(!category.is_empty());
        }
    }
}
