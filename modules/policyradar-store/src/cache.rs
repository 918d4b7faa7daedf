//! JSON article cache: the most recent successful article set, used as the
//! first fallback when every feed fails. The previous cache is copied into
//! backup/ before each overwrite.

use std::fs;
use std::path::Path;

use chrono::Local;
use tracing::{error, info, warn};

use policyradar_common::Article;

const CACHE_FILE: &str = "articles_cache.json";

/// Write the article set to `cache/articles_cache.json`, backing up the
/// previous cache first. Failures are logged, never fatal.
pub fn write_article_cache(cache_dir: &Path, backup_dir: &Path, articles: &[Article]) {
    let cache_path = cache_dir.join(CACHE_FILE);

    if cache_path.exists() {
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let backup_path = backup_dir.join(format!("articles_cache_{stamp}.json"));
        if let Err(e) = fs::copy(&cache_path, &backup_path) {
            warn!(error = %e, "Failed to back up previous article cache");
        }
    }

    match serde_json::to_string_pretty(articles) {
        Ok(json) => {
            if let Err(e) = fs::write(&cache_path, json) {
                error!(error = %e, "Failed to write article cache");
            } else {
                info!(count = articles.len(), path = %cache_path.display(), "Cached articles");
            }
        }
        Err(e) => error!(error = %e, "Failed to serialize article cache"),
    }
}

/// Load the cached article set, empty on any failure.
pub fn load_cached_articles(cache_dir: &Path) -> Vec<Article> {
    let cache_path = cache_dir.join(CACHE_FILE);
    let json = match fs::read_to_string(&cache_path) {
        Ok(json) => json,
        Err(_) => return Vec::new(),
    };
    match serde_json::from_str::<Vec<Article>>(&json) {
        Ok(articles) => {
            info!(count = articles.len(), "Loaded articles from cache");
            articles
        }
        Err(e) => {
            warn!(error = %e, "Article cache unreadable, ignoring");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Article> {
        vec![Article::new(
            "Cabinet approves new rules",
            "https://pib.gov.in/a",
            "Press Information Bureau",
            "Governance & Administration",
        )
        .with_summary("Approved today.")]
    }

    #[test]
    fn cache_round_trips() {
        let dir = TempDir::new().unwrap();
        write_article_cache(dir.path(), dir.path(), &sample());
        let loaded = load_cached_articles(dir.path());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Cabinet approves new rules");
    }

    #[test]
    fn second_write_creates_a_backup() {
        let dir = TempDir::new().unwrap();
        write_article_cache(dir.path(), dir.path(), &sample());
        write_article_cache(dir.path(), dir.path(), &sample());
        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().starts_with("articles_cache_2"))
            .count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn missing_cache_loads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_cached_articles(dir.path()).is_empty());
    }

    #[test]
    fn corrupt_cache_loads_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CACHE_FILE), "{broken").unwrap();
        assert!(load_cached_articles(dir.path()).is_empty());
    }
}
