//! SQLite persistence. Writes log-and-continue rather than aborting the
//! pipeline; the in-memory article set still feeds the current render when a
//! write fails.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use chrono::{Duration, Local, NaiveDateTime};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use tracing::{error, info, warn};

use policyradar_common::error::{RadarError, Result};
use policyradar_common::{Article, ArticleMetadata, RelevanceScores};

use crate::health::FeedHealthRecord;

const SCHEMA_VERSION: i32 = 1;

/// One row of the registry mirror.
#[derive(Debug, Clone)]
pub struct SourceRow {
    pub name: String,
    pub url: String,
    pub category: String,
    pub source_type: String,
    pub reliability: Option<f64>,
}

#[derive(Clone)]
pub struct ArticleStore {
    pool: SqlitePool,
}

impl ArticleStore {
    /// Open (creating if missing) the database file and run migrations.
    pub async fn connect(path: &Path) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite://{}", path.display()))
            .map_err(|e| RadarError::Database(format!("bad database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| RadarError::Database(format!("failed to open database: {e}")))?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// In-memory store for tests. Pinned to a single connection: every
    /// `:memory:` connection is its own empty database, so a wider pool would
    /// hand out connections that never saw the migration.
    pub async fn connect_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| RadarError::Database(e.to_string()))?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Schema creation gated on `PRAGMA user_version`.
    async fn migrate(&self) -> Result<()> {
        let version: i32 = sqlx::query_scalar("PRAGMA user_version")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RadarError::Database(e.to_string()))?;

        if version >= SCHEMA_VERSION {
            return Ok(());
        }

        info!("Creating database schema");
        let statements = [
            "CREATE TABLE IF NOT EXISTS schema_version (
                version TEXT,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            "CREATE TABLE IF NOT EXISTS sources (
                id TEXT PRIMARY KEY,
                name TEXT,
                url TEXT,
                category TEXT,
                type TEXT,
                reliability FLOAT,
                active BOOLEAN DEFAULT 1,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            "CREATE TABLE IF NOT EXISTS feed_history (
                feed_url TEXT PRIMARY KEY,
                last_success TIMESTAMP,
                last_error TEXT,
                error_count INTEGER DEFAULT 0,
                success_count INTEGER DEFAULT 0
            )",
            "CREATE TABLE IF NOT EXISTS feed_health_v2 (
                feed_url TEXT PRIMARY KEY,
                total_attempts INTEGER DEFAULT 0,
                successful_attempts INTEGER DEFAULT 0,
                consecutive_failures INTEGER DEFAULT 0,
                last_success TIMESTAMP,
                last_failure TIMESTAMP,
                last_error_type TEXT,
                is_active BOOLEAN DEFAULT 1
            )",
            "CREATE TABLE IF NOT EXISTS articles (
                hash TEXT PRIMARY KEY,
                content_hash TEXT,
                title TEXT,
                url TEXT,
                source TEXT,
                category TEXT,
                published_date TIMESTAMP,
                summary TEXT,
                content TEXT,
                tags TEXT,
                keywords TEXT,
                policy_relevance FLOAT DEFAULT 0,
                source_reliability FLOAT DEFAULT 0,
                recency FLOAT DEFAULT 0,
                sector_specificity FLOAT DEFAULT 0,
                overall_relevance FLOAT DEFAULT 0,
                metadata TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            "CREATE TABLE IF NOT EXISTS user_preferences (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                categories TEXT,
                sources TEXT,
                tags TEXT,
                min_relevance FLOAT DEFAULT 0,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            "CREATE TABLE IF NOT EXISTS article_interactions (
                article_hash TEXT,
                interaction_type TEXT,
                timestamp TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                PRIMARY KEY (article_hash, interaction_type)
            )",
            "CREATE INDEX IF NOT EXISTS idx_articles_created_at ON articles(created_at)",
            "CREATE INDEX IF NOT EXISTS idx_articles_category ON articles(category)",
            "CREATE INDEX IF NOT EXISTS idx_articles_overall_relevance ON articles(overall_relevance)",
            "CREATE INDEX IF NOT EXISTS idx_articles_published_date ON articles(published_date)",
            "CREATE INDEX IF NOT EXISTS idx_articles_content_hash ON articles(content_hash)",
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| RadarError::Database(e.to_string()))?;
        }

        sqlx::query(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
            .execute(&self.pool)
            .await
            .map_err(|e| RadarError::Database(e.to_string()))?;
        sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
            .bind(SCHEMA_VERSION.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RadarError::Database(e.to_string()))?;

        Ok(())
    }

    /// Mirror the curated registry into the sources table, keyed by URL.
    pub async fn sync_sources(&self, rows: &[SourceRow]) {
        for row in rows {
            let result = sqlx::query(
                "REPLACE INTO sources (id, name, url, category, type, reliability, active)
                 VALUES (?, ?, ?, ?, ?, ?, 1)",
            )
            .bind(&row.url)
            .bind(&row.name)
            .bind(&row.url)
            .bind(&row.category)
            .bind(&row.source_type)
            .bind(row.reliability)
            .execute(&self.pool)
            .await;

            if let Err(e) = result {
                warn!(url = %row.url, error = %e, "Failed to mirror source");
            }
        }
        info!(count = rows.len(), "Source registry mirrored");
    }

    /// Number of rows in the sources mirror.
    pub async fn source_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM sources")
            .fetch_one(&self.pool)
            .await
            .unwrap_or(0)
    }

    /// Insert or replace one article. Returns false (and logs) on failure so
    /// the caller keeps going.
    pub async fn insert_article(&self, article: &Article) -> bool {
        let result = sqlx::query(
            "REPLACE INTO articles
                (hash, content_hash, title, url, source, category, published_date, summary,
                 content, tags, keywords, policy_relevance, source_reliability,
                 recency, sector_specificity, overall_relevance, metadata)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(article.storage_hash())
        .bind(article.content_hash())
        .bind(&article.title)
        .bind(&article.url)
        .bind(&article.source)
        .bind(&article.category)
        .bind(article.published_date)
        .bind(&article.summary)
        .bind(&article.content)
        .bind(serde_json::to_string(&article.tags).unwrap_or_default())
        .bind(serde_json::to_string(&article.keywords).unwrap_or_default())
        .bind(article.relevance_scores.policy_relevance)
        .bind(article.relevance_scores.source_reliability)
        .bind(article.relevance_scores.recency)
        .bind(article.relevance_scores.sector_specificity)
        .bind(article.relevance_scores.overall)
        .bind(serde_json::to_string(&article.metadata).unwrap_or_default())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => true,
            Err(e) => {
                warn!(url = %article.url, error = %e, "Failed to persist article");
                false
            }
        }
    }

    /// Content hashes of articles stored within the lookback window. Seeds
    /// the in-run dedup set for cross-run suppression.
    pub async fn load_recent_hashes(&self, days: i64) -> HashSet<String> {
        let cutoff = Local::now().naive_local() - Duration::days(days);
        let result = sqlx::query("SELECT content_hash FROM articles WHERE published_date >= ?")
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await;

        match result {
            Ok(rows) => rows
                .into_iter()
                .filter_map(|r| r.try_get::<Option<String>, _>("content_hash").ok().flatten())
                .collect(),
            Err(e) => {
                error!(error = %e, "Failed to load recent hashes");
                HashSet::new()
            }
        }
    }

    /// (url, title) pairs from the last `days` days, for the near-duplicate
    /// check on the direct-scrape path.
    pub async fn recent_url_title_pairs(&self, days: i64) -> Vec<(String, String)> {
        let cutoff = Local::now().naive_local() - Duration::days(days);
        let result = sqlx::query("SELECT url, title FROM articles WHERE created_at >= ?")
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await;

        match result {
            Ok(rows) => rows
                .into_iter()
                .filter_map(|r| {
                    let url: Option<String> = r.try_get("url").ok();
                    let title: Option<String> = r.try_get("title").ok();
                    Some((url?, title?))
                })
                .collect(),
            Err(e) => {
                error!(error = %e, "Failed to load recent url/title pairs");
                Vec::new()
            }
        }
    }

    fn row_to_article(row: &sqlx::sqlite::SqliteRow) -> Option<Article> {
        let mut article = Article::new(
            row.try_get::<String, _>("title").ok()?,
            row.try_get::<String, _>("url").ok()?,
            row.try_get::<String, _>("source").ok()?,
            row.try_get::<String, _>("category").ok()?,
        );
        article.published_date = row.try_get::<Option<NaiveDateTime>, _>("published_date").ok()?;
        article.summary = row.try_get::<Option<String>, _>("summary").ok()?.unwrap_or_default();
        article.content = row.try_get::<Option<String>, _>("content").ok()?;
        article.tags = row
            .try_get::<Option<String>, _>("tags")
            .ok()?
            .and_then(|t| serde_json::from_str(&t).ok())
            .unwrap_or_default();
        article.keywords = row
            .try_get::<Option<String>, _>("keywords")
            .ok()?
            .and_then(|k| serde_json::from_str(&k).ok())
            .unwrap_or_default();
        article.relevance_scores = RelevanceScores {
            policy_relevance: row.try_get("policy_relevance").unwrap_or(0.0),
            source_reliability: row.try_get("source_reliability").unwrap_or(0.0),
            recency: row.try_get("recency").unwrap_or(0.0),
            sector_specificity: row.try_get("sector_specificity").unwrap_or(0.0),
            overall: row.try_get("overall_relevance").unwrap_or(0.0),
        };
        if let Ok(Some(metadata)) = row.try_get::<Option<String>, _>("metadata") {
            if let Ok(parsed) = serde_json::from_str::<ArticleMetadata>(&metadata) {
                article.metadata = parsed;
            }
        }
        Some(article)
    }

    /// Read back one article by its storage hash.
    pub async fn article_by_hash(&self, storage_hash: &str) -> Option<Article> {
        let row = sqlx::query("SELECT * FROM articles WHERE hash = ?")
            .bind(storage_hash)
            .fetch_optional(&self.pool)
            .await
            .ok()??;
        Self::row_to_article(&row)
    }

    /// Filtered query over stored articles, newest first.
    pub async fn query_articles(
        &self,
        days: i64,
        limit: i64,
        category: Option<&str>,
        min_relevance: f64,
    ) -> Vec<Article> {
        let cutoff = Local::now().naive_local() - Duration::days(days);
        let mut sql = String::from(
            "SELECT * FROM articles WHERE published_date >= ? AND overall_relevance >= ?",
        );
        if category.is_some() {
            sql.push_str(" AND category = ?");
        }
        sql.push_str(" ORDER BY published_date DESC LIMIT ?");

        let mut query = sqlx::query(&sql).bind(cutoff).bind(min_relevance);
        if let Some(category) = category {
            query = query.bind(category);
        }
        query = query.bind(limit);

        match query.fetch_all(&self.pool).await {
            Ok(rows) => rows.iter().filter_map(Self::row_to_article).collect(),
            Err(e) => {
                error!(error = %e, "Failed to query articles");
                Vec::new()
            }
        }
    }

    /// Case-insensitive title/summary search, newest first.
    pub async fn search_articles(&self, term: &str, limit: i64) -> Vec<Article> {
        let pattern = format!("%{}%", term.to_lowercase());
        let result = sqlx::query(
            "SELECT * FROM articles
             WHERE lower(title) LIKE ? OR lower(summary) LIKE ?
             ORDER BY overall_relevance DESC LIMIT ?",
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await;

        match result {
            Ok(rows) => rows.iter().filter_map(Self::row_to_article).collect(),
            Err(e) => {
                error!(error = %e, "Search query failed");
                Vec::new()
            }
        }
    }

    /// Delete articles older than the retention window. Returns rows removed.
    pub async fn prune_older_than(&self, days: i64) -> u64 {
        let cutoff = Local::now().naive_local() - Duration::days(days);
        match sqlx::query("DELETE FROM articles WHERE published_date < ?")
            .bind(cutoff)
            .execute(&self.pool)
            .await
        {
            Ok(result) => {
                info!(removed = result.rows_affected(), "Pruned old articles");
                result.rows_affected()
            }
            Err(e) => {
                error!(error = %e, "Failed to prune old articles");
                0
            }
        }
    }

    /// Per-run bookkeeping on the legacy feed_history table.
    pub async fn record_feed_outcome(&self, feed_url: &str, success: bool, error: Option<&str>) {
        let result = if success {
            sqlx::query(
                "INSERT INTO feed_history (feed_url, last_success, success_count)
                 VALUES (?, CURRENT_TIMESTAMP, 1)
                 ON CONFLICT(feed_url) DO UPDATE SET
                     last_success = CURRENT_TIMESTAMP,
                     last_error = NULL,
                     error_count = 0,
                     success_count = success_count + 1",
            )
            .bind(feed_url)
            .execute(&self.pool)
            .await
        } else {
            sqlx::query(
                "INSERT INTO feed_history (feed_url, last_error, error_count)
                 VALUES (?, ?, 1)
                 ON CONFLICT(feed_url) DO UPDATE SET
                     last_error = excluded.last_error,
                     error_count = error_count + 1",
            )
            .bind(feed_url)
            .bind(error.unwrap_or("unknown"))
            .execute(&self.pool)
            .await
        };

        if let Err(e) = result {
            warn!(feed_url, error = %e, "Failed to record feed outcome");
        }
    }

    /// Upsert one feed-health record.
    pub async fn save_health_record(&self, record: &FeedHealthRecord) {
        let result = sqlx::query(
            "REPLACE INTO feed_health_v2
                (feed_url, total_attempts, successful_attempts, consecutive_failures,
                 last_success, last_failure, last_error_type, is_active)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.url)
        .bind(record.total_attempts as i64)
        .bind(record.successful_attempts as i64)
        .bind(record.consecutive_failures as i64)
        .bind(record.last_success)
        .bind(record.last_failure)
        .bind(&record.last_error_type)
        .bind(record.is_active)
        .execute(&self.pool)
        .await;

        if let Err(e) = result {
            warn!(feed_url = %record.url, error = %e, "Failed to save health record");
        }
    }

    /// All persisted feed-health records.
    pub async fn load_health_records(&self) -> Vec<FeedHealthRecord> {
        let result = sqlx::query("SELECT * FROM feed_health_v2").fetch_all(&self.pool).await;
        match result {
            Ok(rows) => rows
                .iter()
                .filter_map(|r| {
                    Some(FeedHealthRecord {
                        url: r.try_get("feed_url").ok()?,
                        total_attempts: r.try_get::<i64, _>("total_attempts").ok()? as u32,
                        successful_attempts: r.try_get::<i64, _>("successful_attempts").ok()?
                            as u32,
                        consecutive_failures: r.try_get::<i64, _>("consecutive_failures").ok()?
                            as u32,
                        last_success: r.try_get("last_success").ok()?,
                        last_failure: r.try_get("last_failure").ok()?,
                        last_error_type: r.try_get("last_error_type").ok()?,
                        is_active: r.try_get("is_active").ok()?,
                    })
                })
                .collect(),
            Err(e) => {
                error!(error = %e, "Failed to load health records");
                Vec::new()
            }
        }
    }

    /// Aggregates for the debug report: total rows, per-category counts, and
    /// the ten busiest sources.
    pub async fn debug_aggregates(&self) -> (i64, Vec<(String, i64)>, Vec<(String, i64)>) {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await
            .unwrap_or(0);

        let by_category = sqlx::query(
            "SELECT category, COUNT(*) AS n FROM articles GROUP BY category ORDER BY n DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map(|rows| {
            rows.iter()
                .filter_map(|r| Some((r.try_get("category").ok()?, r.try_get("n").ok()?)))
                .collect()
        })
        .unwrap_or_default();

        let by_source = sqlx::query(
            "SELECT source, COUNT(*) AS n FROM articles GROUP BY source ORDER BY n DESC LIMIT 10",
        )
        .fetch_all(&self.pool)
        .await
        .map(|rows| {
            rows.iter()
                .filter_map(|r| Some((r.try_get("source").ok()?, r.try_get("n").ok()?)))
                .collect()
        })
        .unwrap_or_default();

        (total, by_category, by_source)
    }
}
