//! Concurrent fetch scheduler. A bounded pool of workers drains the source
//! list; government hosts additionally pass through a stricter semaphore and
//! the per-domain politeness gate. A global wall-clock budget cancels pending
//! work and lets collected articles proceed to ranking.

use std::sync::Arc;

use chrono::Local;
use tokio::sync::{Mutex, Semaphore};
use tokio::task::JoinSet;
use tracing::{info, warn};

use policyradar_common::{Article, FeedSource};
use policyradar_extract as extract;
use policyradar_fetch::{requires_browser, BrowserFetcher, DomainGate, FetchClient};
use policyradar_sources::gov::is_government_url;
use policyradar_sources::profiles::fallback_urls;
use policyradar_sources::registry::{is_blacklisted, list_sources};
use policyradar_store::FeedHealthMonitor;

use crate::pipeline::{default_threshold, PipelineContext};

/// Outcome of harvesting one source, reported back for bookkeeping.
struct HarvestOutcome {
    source: FeedSource,
    articles: Vec<Article>,
    /// Error label for feed health; None on success.
    error_type: Option<String>,
    used_fallback: bool,
}

pub struct Scheduler {
    ctx: PipelineContext,
    client: Arc<FetchClient>,
    gate: Arc<DomainGate>,
    browser: Arc<BrowserFetcher>,
    health: Arc<Mutex<FeedHealthMonitor>>,
}

impl Scheduler {
    pub fn new(
        ctx: PipelineContext,
        client: Arc<FetchClient>,
        health: Arc<Mutex<FeedHealthMonitor>>,
    ) -> Self {
        Self {
            ctx,
            client,
            gate: Arc::new(DomainGate::new()),
            browser: Arc::new(BrowserFetcher::new()),
            health,
        }
    }

    /// Fetch every eligible source within the run budget and return the
    /// accepted articles.
    pub async fn run(&self) -> Vec<Article> {
        let sources = self.eligible_sources().await;
        self.run_sources(sources).await
    }

    /// The registry after the blacklist, the health gate, and the feed cap.
    async fn eligible_sources(&self) -> Vec<FeedSource> {
        let now = Local::now().naive_local();
        let mut sources = list_sources();
        sources.retain(|s| !is_blacklisted(s.name));
        let mut sources = self
            .health
            .lock()
            .await
            .active_feeds(sources, self.ctx.config.retry_after_hours, now);
        if let Some(cap) = self.ctx.config.max_feeds {
            sources.truncate(cap);
        }
        sources
    }

    /// Drive a fixed source list through the worker pool under the budget.
    pub async fn run_sources(&self, sources: Vec<FeedSource>) -> Vec<Article> {
        self.ctx.stats.lock().await.total_feeds = sources.len();
        info!(feeds = sources.len(), workers = self.ctx.config.workers, "Starting feed fetch");

        let collected: Arc<Mutex<Vec<Article>>> = Arc::new(Mutex::new(Vec::new()));
        let main_semaphore = Arc::new(Semaphore::new(self.ctx.config.workers.max(1)));
        let gov_semaphore = Arc::new(Semaphore::new(self.ctx.config.gov_workers.max(1)));

        let mut tasks: JoinSet<HarvestOutcome> = JoinSet::new();
        for source in sources {
            let this = self.clone_refs();
            let main_semaphore = main_semaphore.clone();
            let gov_semaphore = gov_semaphore.clone();
            tasks.spawn(async move {
                let _main = main_semaphore.acquire_owned().await.expect("semaphore open");
                // Government sources also hold the stricter permit
                let _gov = if is_government_url(source.url) {
                    Some(gov_semaphore.acquire_owned().await.expect("semaphore open"))
                } else {
                    None
                };
                this.harvest_source(source).await
            });
        }

        let drain = async {
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok(outcome) => self.record_outcome(outcome, &collected).await,
                    Err(e) if e.is_cancelled() => {}
                    Err(e) => warn!(error = %e, "Feed task panicked"),
                }
            }
        };

        if tokio::time::timeout(self.ctx.config.run_budget, drain).await.is_err() {
            warn!(
                budget_secs = self.ctx.config.run_budget.as_secs(),
                "Run budget expired, cancelling remaining feeds"
            );
            tasks.abort_all();
            while let Some(joined) = tasks.join_next().await {
                if let Ok(outcome) = joined {
                    self.record_outcome(outcome, &collected).await;
                }
            }
        }

        let articles = std::mem::take(&mut *collected.lock().await);
        info!(articles = articles.len(), "Feed fetch complete");
        articles
    }

    fn clone_refs(&self) -> SchedulerRefs {
        SchedulerRefs {
            ctx: self.ctx.clone(),
            client: self.client.clone(),
            gate: self.gate.clone(),
            browser: self.browser.clone(),
        }
    }

    /// Health, history, and statistics bookkeeping for one finished source.
    async fn record_outcome(&self, outcome: HarvestOutcome, collected: &Arc<Mutex<Vec<Article>>>) {
        let now = Local::now().naive_local();
        let success = outcome.error_type.is_none() && !outcome.articles.is_empty();

        {
            let mut health = self.health.lock().await;
            health.update(outcome.source.url, success, outcome.error_type.as_deref(), now);
        }
        if let Some(store) = &self.ctx.store {
            store
                .record_feed_outcome(outcome.source.url, success, outcome.error_type.as_deref())
                .await;
        }

        let mut stats = self.ctx.stats.lock().await;
        if success {
            stats.successful_feeds += 1;
            if outcome.used_fallback {
                stats.fallback_successes += 1;
            }
            stats.record_source_success(outcome.source.name, outcome.articles.len(), "ok");
        } else {
            stats.failed_feeds += 1;
            stats.record_source_failure(
                outcome.source.name,
                outcome.error_type.as_deref().unwrap_or("no articles"),
            );
        }
        drop(stats);

        collected.lock().await.extend(outcome.articles);
    }
}

/// The subset of scheduler state that travels into worker tasks.
#[derive(Clone)]
struct SchedulerRefs {
    ctx: PipelineContext,
    client: Arc<FetchClient>,
    gate: Arc<DomainGate>,
    browser: Arc<BrowserFetcher>,
}

impl SchedulerRefs {
    /// Fetch one source, with fallback URLs and the headless-browser path,
    /// and run its candidates through the pipeline.
    async fn harvest_source(&self, source: FeedSource) -> HarvestOutcome {
        let now = Local::now().naive_local();
        let mut error_type: Option<String> = None;
        let mut used_fallback = false;

        let mut candidates = match self.fetch_and_extract(source, source.url).await {
            Ok(candidates) => candidates,
            Err(label) => {
                error_type = Some(label);
                Vec::new()
            }
        };

        // A feed that yields nothing tries its registered alternates before
        // being marked failed
        if candidates.is_empty() {
            for alternate in fallback_urls(source.url).iter().copied() {
                info!(source = source.name, alternate, "Trying fallback URL");
                if let Ok(found) = self.fetch_and_extract(source, alternate).await {
                    if !found.is_empty() {
                        candidates = found;
                        used_fallback = true;
                        error_type = None;
                        break;
                    }
                }
            }
        }

        // Last resort for hosts that never serve plain clients
        if candidates.is_empty() && requires_browser(source.url) {
            match self.browser.fetch_rendered(source.url).await {
                Ok(html) if !html.is_empty() => {
                    candidates = extract::html::extract_from_html(
                        &html,
                        source.url,
                        source.name,
                        source.category,
                    );
                    if !candidates.is_empty() {
                        error_type = None;
                    }
                }
                Ok(_) => {}
                Err(e) => warn!(source = source.name, error = %e, "Browser fallback failed"),
            }
        }

        let articles = self.ctx.process_batch(candidates, default_threshold(), now).await;
        HarvestOutcome { source, articles, error_type, used_fallback }
    }

    async fn fetch_and_extract(
        &self,
        source: FeedSource,
        url: &str,
    ) -> Result<Vec<Article>, String> {
        let _permit = self.gate.acquire(url).await;
        match self.client.fetch(url).await {
            Ok(outcome) if outcome.is_success() => Ok(extract::extract(
                &outcome.body,
                outcome.content_type.as_deref(),
                source.name,
                source.category,
                &outcome.final_url,
            )),
            Ok(outcome) => Err(format!("http_{}", outcome.status)),
            Err(e) => Err(e.kind().to_string()),
        }
    }
}
