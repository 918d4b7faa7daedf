//! Top-level orchestrator: harvest, augment, fall back, rank, render.
//! The site always renders; every degraded mode still produces output.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use policyradar_classify::rank;
use policyradar_common::{Article, Config, RunStatistics};
use policyradar_fetch::FetchClient;
use policyradar_common::SourceType;
use policyradar_sources::registry::list_sources;
use policyradar_sources::tiers::reliability_rating;
use policyradar_store::{
    load_cached_articles, write_article_cache, ArticleStore, Deduplicator, FeedHealthMonitor,
    SourceRow,
};

use crate::google_news::{GoogleNewsAugmentor, DEFAULT_MAX_ARTICLES};
use crate::pipeline::PipelineContext;
use crate::render;
use crate::report::write_debug_report;
use crate::scheduler::Scheduler;
use crate::scrape::DirectScraper;

pub struct PolicyRadar {
    config: Arc<Config>,
    ctx: PipelineContext,
    client: Arc<FetchClient>,
    health: Arc<Mutex<FeedHealthMonitor>>,
}

impl PolicyRadar {
    /// Wire up the run: open the store (degrading to memory-only on failure),
    /// seed the dedup set from recent history, load feed health.
    pub async fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let store = match ArticleStore::connect(&config.db_path).await {
            Ok(store) => Some(store),
            Err(e) => {
                error!(error = %e, "Database unavailable, continuing in-memory");
                None
            }
        };

        if let Some(store) = &store {
            let rows: Vec<SourceRow> = list_sources()
                .iter()
                .map(|s| SourceRow {
                    name: s.name.to_string(),
                    url: s.url.to_string(),
                    category: s.category.to_string(),
                    source_type: SourceType::infer(s.name, s.url).as_str().to_string(),
                    reliability: reliability_rating(s.name),
                })
                .collect();
            store.sync_sources(&rows).await;
        }

        let mut dedup = Deduplicator::new();
        if !config.fresh {
            if let Some(store) = &store {
                dedup.seed_hashes(store.load_recent_hashes(config.dedup_days).await);
                info!(seeded = dedup.len(), "Seeded dedup set from recent history");
            }
        }

        let health = match &store {
            Some(store) => FeedHealthMonitor::from_records(store.load_health_records().await),
            None => FeedHealthMonitor::new(),
        };

        let client = Arc::new(FetchClient::new(config.request_timeout)?);

        let ctx = PipelineContext {
            config: config.clone(),
            store,
            dedup: Arc::new(Mutex::new(dedup)),
            stats: Arc::new(Mutex::new(RunStatistics::new())),
        };

        Ok(Self { config, ctx, client, health: Arc::new(Mutex::new(health)) })
    }

    /// The full pipeline. Returns the path of the rendered index.
    pub async fn run(&self, category_filter: Option<&str>) -> Result<PathBuf> {
        info!("Starting PolicyRadar aggregation");

        let scheduler = Scheduler::new(self.ctx.clone(), self.client.clone(), self.health.clone());
        let mut articles = scheduler.run().await;

        // Top up from Google News, which also serves as the sole source when
        // every primary feed came back empty
        if articles.len() < self.config.max_articles {
            let budget = (self.config.max_articles - articles.len()).min(DEFAULT_MAX_ARTICLES);
            let augmentor =
                GoogleNewsAugmentor::new(self.ctx.clone(), self.client.clone(), budget);
            articles.extend(augmentor.run().await);
        }

        // Then the direct-scrape shortlist
        if articles.len() < self.config.max_articles {
            let scraper = DirectScraper::new(self.ctx.clone(), self.client.clone());
            articles.extend(scraper.run().await);
        }

        // Then the last successful article set from disk
        if articles.is_empty() {
            warn!("All live sources empty, falling back to cached articles");
            articles = load_cached_articles(&self.config.cache_dir);
        }

        self.ctx.stats.lock().await.finish();

        if articles.is_empty() {
            warn!("No articles from any source, emitting minimal page");
            return self.emit_minimal_page(
                "PolicyRadar Service Notice",
                "No articles could be collected this run. All sources and fallbacks were \
                 unavailable. The previous edition remains available via the archive.",
            );
        }

        let mut ranked = rank(articles, Local::now().naive_local());
        ranked.truncate(self.config.max_articles);

        let stats = self.ctx.stats.lock().await.clone();
        info!(%stats, "Aggregation complete");

        // Emit artifacts
        let index_html = render::render_index(&ranked, &stats, category_filter);
        std::fs::write(&self.config.output, index_html)
            .with_context(|| format!("writing {}", self.config.output.display()))?;

        let report = self.health.lock().await.report();
        let health_html = render::render_health(&report, &stats);
        std::fs::write(self.config.docs_dir.join("health.html"), health_html)
            .context("writing health.html")?;

        std::fs::write(self.config.docs_dir.join("about.html"), render::render_about())
            .context("writing about.html")?;

        if self.config.export {
            std::fs::write(
                self.config.docs_dir.join("api_data.json"),
                render::export_json(&ranked),
            )
            .context("writing api_data.json")?;
        }

        write_article_cache(&self.config.cache_dir, &self.config.backup_dir, &ranked);
        self.persist_health().await;
        write_debug_report(&self.config.logs_dir, &stats, self.ctx.store.as_ref()).await;

        Ok(self.config.output.clone())
    }

    /// Render the single-notice page used when everything failed. Exit is
    /// still success so downstream publishing proceeds.
    pub fn emit_minimal_page(&self, title: &str, message: &str) -> Result<PathBuf> {
        let notice = Article::new(title, "#", "PolicyRadar System", "System Notice")
            .with_summary(message);
        std::fs::write(&self.config.output, render::render_minimal(&notice))
            .with_context(|| format!("writing {}", self.config.output.display()))?;
        Ok(self.config.output.clone())
    }

    async fn persist_health(&self) {
        let Some(store) = &self.ctx.store else { return };
        let health = self.health.lock().await;
        for record in health.records() {
            store.save_health_record(record).await;
        }
    }

    /// `--search`: print the top stored matches, no HTML generation.
    pub async fn search(&self, query: &str) {
        let Some(store) = &self.ctx.store else {
            println!("No database available.");
            return;
        };
        let hits = store.search_articles(query, 10).await;
        println!("\nFound {} articles matching '{query}':", hits.len());
        for article in hits {
            println!("- {}", article.title);
            println!("  Source: {}", article.source);
            println!("  Relevance: {:.0}%", article.relevance_scores.overall * 100.0);
            println!("  URL: {}\n", article.url);
        }
    }

    /// `--clear-cache`: drop the in-memory hash set and prune old rows.
    pub async fn clear_cache(&self) {
        self.ctx.dedup.lock().await.clear();
        info!("Cleared in-memory article hash set");
        if let Some(store) = &self.ctx.store {
            store.prune_older_than(self.config.dedup_days).await;
        }
    }

    /// `--test`: fetch a single hard-coded feed and print what it yields.
    pub async fn test_single_feed(&self) {
        let source = policyradar_common::FeedSource {
            name: "The Hindu National",
            url: "https://www.thehindu.com/news/national/feeder/default.rss",
            category: "Governance & Administration",
        };
        println!("Testing feed: {} ({})", source.name, source.url);
        match self.client.fetch(source.url).await {
            Ok(outcome) if outcome.is_success() => {
                let candidates = policyradar_extract::extract(
                    &outcome.body,
                    outcome.content_type.as_deref(),
                    source.name,
                    source.category,
                    &outcome.final_url,
                );
                let articles = self
                    .ctx
                    .process_batch(
                        candidates,
                        crate::pipeline::default_threshold(),
                        Local::now().naive_local(),
                    )
                    .await;
                println!("Test found {} articles", articles.len());
                for article in articles.iter().take(5) {
                    println!("\nTitle: {}", article.title);
                    println!("Category: {}", article.category);
                    println!("Overall relevance: {:.2}", article.relevance_scores.overall);
                }
            }
            Ok(outcome) => println!("Fetch failed with status {}", outcome.status),
            Err(e) => println!("Fetch errored: {e}"),
        }
    }

    pub fn stats_handle(&self) -> Arc<Mutex<RunStatistics>> {
        self.ctx.stats.clone()
    }
}
