//! Plain-text per-run debug report under logs/.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{info, warn};

use policyradar_common::RunStatistics;
use policyradar_store::ArticleStore;

/// Write the diagnostics file and return its path.
pub async fn write_debug_report(
    logs_dir: &Path,
    stats: &RunStatistics,
    store: Option<&ArticleStore>,
) -> Option<PathBuf> {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = logs_dir.join(format!("debug_report_{stamp}.txt"));

    let mut out = String::new();
    let _ = writeln!(out, "===== POLICYRADAR DEBUG REPORT =====\n");
    let _ = writeln!(out, "Run date: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    let _ = writeln!(out, "\n=== STATISTICS ===");
    let _ = writeln!(out, "total_feeds: {}", stats.total_feeds);
    let _ = writeln!(out, "successful_feeds: {}", stats.successful_feeds);
    let _ = writeln!(out, "failed_feeds: {}", stats.failed_feeds);
    let _ = writeln!(out, "total_articles: {}", stats.total_articles);
    let _ = writeln!(out, "duplicate_articles: {}", stats.duplicate_articles);
    let _ = writeln!(out, "filtered_articles: {}", stats.filtered_articles);
    let _ = writeln!(out, "low_relevance_articles: {}", stats.low_relevance_articles);
    let _ = writeln!(out, "fallback_successes: {}", stats.fallback_successes);
    let _ = writeln!(out, "direct_scrape_articles: {}", stats.direct_scrape_articles);
    let _ = writeln!(out, "google_news_articles: {}", stats.google_news_articles);
    let _ = writeln!(out, "runtime_seconds: {}", stats.runtime_seconds());

    let _ = writeln!(out, "\n=== SOURCE STATUS ===");
    let mut sources: Vec<_> = stats.per_source.iter().collect();
    sources.sort_by_key(|(name, _)| name.as_str());
    for (name, stat) in sources {
        let _ = writeln!(
            out,
            "{name}: {} articles, last status {}",
            stat.articles_emitted,
            stat.last_status.as_deref().unwrap_or("n/a")
        );
    }

    if let Some(store) = store {
        let (total, by_category, by_source) = store.debug_aggregates().await;
        let _ = writeln!(out, "\n=== DATABASE ===");
        let _ = writeln!(out, "Total articles in database: {total}");
        let _ = writeln!(out, "\nArticles by category:");
        for (category, count) in by_category {
            let _ = writeln!(out, "  {category}: {count}");
        }
        let _ = writeln!(out, "\nTop 10 sources:");
        for (source, count) in by_source {
            let _ = writeln!(out, "  {source}: {count}");
        }
    }

    match std::fs::write(&path, out) {
        Ok(()) => {
            info!(path = %path.display(), "Debug report written");
            Some(path)
        }
        Err(e) => {
            warn!(error = %e, "Failed to write debug report");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn report_written_with_statistics() {
        let dir = TempDir::new().unwrap();
        let mut stats = RunStatistics::new();
        stats.total_feeds = 12;
        stats.successful_feeds = 10;
        stats.record_source_success("The Hindu National", 8, "ok");

        let path = write_debug_report(dir.path(), &stats, None).await.unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.contains("total_feeds: 12"));
        assert!(text.contains("The Hindu National: 8 articles"));
    }
}
