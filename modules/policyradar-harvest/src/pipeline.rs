//! The per-candidate pipeline every extraction path funnels through:
//! blacklist, date validation, organizational filter, scoring, threshold,
//! dedup, persistence. Shared state is mutex-guarded; all writes are O(1).

use std::sync::Arc;

use chrono::NaiveDateTime;
use tokio::sync::Mutex;
use tracing::debug;

use policyradar_classify::{
    assign_tags, is_crisis_content, is_organizational_content, score_article,
    CRISIS_MIN_RELEVANCE, MIN_RELEVANCE,
};
use policyradar_common::text::extract_keywords;
use policyradar_common::{Article, Config, RunStatistics};
use policyradar_extract::dates::{self, DateDecision};
use policyradar_sources::registry::is_blacklisted;
use policyradar_store::{ArticleStore, Deduplicator};

/// Why a candidate did not survive the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Blacklisted,
    Stale,
    Organizational,
    LowRelevance,
    Duplicate,
}

/// Shared pipeline state handed to every worker.
#[derive(Clone)]
pub struct PipelineContext {
    pub config: Arc<Config>,
    pub store: Option<ArticleStore>,
    pub dedup: Arc<Mutex<Deduplicator>>,
    pub stats: Arc<Mutex<RunStatistics>>,
}

impl PipelineContext {
    /// Run one candidate through the full per-article pipeline. Returns the
    /// finished article, or the rejection reason after bumping the matching
    /// counter.
    pub async fn process(
        &self,
        mut article: Article,
        min_relevance: f64,
        now: NaiveDateTime,
    ) -> Result<Article, Rejection> {
        if is_blacklisted(&article.source) {
            return Err(Rejection::Blacklisted);
        }

        if dates::finalize(&mut article, now) == DateDecision::RejectStale {
            self.stats.lock().await.filtered_articles += 1;
            return Err(Rejection::Stale);
        }

        // Boilerplate links on government portals never become articles
        if article.metadata.source_type.is_government()
            && is_organizational_content(&article.title)
        {
            self.stats.lock().await.filtered_articles += 1;
            return Err(Rejection::Organizational);
        }

        score_article(&mut article, now);
        article.tags = assign_tags(&article.title, &article.summary);
        article.keywords = extract_keywords(&article.analysis_text(), 10);

        let threshold = if is_crisis_content(&article.title, &article.summary) {
            CRISIS_MIN_RELEVANCE.min(min_relevance)
        } else {
            min_relevance
        };
        if article.relevance_scores.overall < threshold {
            debug!(title = %article.title, overall = article.relevance_scores.overall, "Below relevance threshold");
            self.stats.lock().await.low_relevance_articles += 1;
            return Err(Rejection::LowRelevance);
        }

        if !self.config.fresh && !self.dedup.lock().await.check_and_insert(&article) {
            self.stats.lock().await.duplicate_articles += 1;
            return Err(Rejection::Duplicate);
        }

        if let Some(store) = &self.store {
            // A failed write is logged inside the store; the article still
            // feeds the current render
            store.insert_article(&article).await;
        }

        self.stats.lock().await.total_articles += 1;
        Ok(article)
    }

    /// Process a batch from one source, returning the survivors.
    pub async fn process_batch(
        &self,
        candidates: Vec<Article>,
        min_relevance: f64,
        now: NaiveDateTime,
    ) -> Vec<Article> {
        let mut accepted = Vec::new();
        for candidate in candidates {
            if let Ok(article) = self.process(candidate, min_relevance, now).await {
                accepted.push(article);
            }
        }
        accepted
    }
}

/// Default acceptance threshold re-exported for the fetch paths.
pub fn default_threshold() -> f64 {
    MIN_RELEVANCE
}
