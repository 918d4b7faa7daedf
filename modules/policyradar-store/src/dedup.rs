//! Duplicate suppression. In-run: a triple key over content hash, normalized
//! URL, and normalized title. Cross-run (direct-scrape path only): URL match
//! or title Jaccard similarity against the last two days of stored rows.

use std::collections::HashSet;

use policyradar_common::text::title_jaccard;
use policyradar_common::Article;

/// Jaccard similarity above this marks a near-duplicate title.
pub const NEAR_DUP_JACCARD: f64 = 0.8;
/// Days of stored rows consulted by the cross-run check.
pub const NEAR_DUP_WINDOW_DAYS: i64 = 2;

/// Run-local dedup state. Owned by the scheduler and shared across workers
/// under a mutex; all operations are O(1) set probes.
#[derive(Debug, Default)]
pub struct Deduplicator {
    hashes: HashSet<String>,
    urls: HashSet<String>,
    titles: HashSet<String>,
}

/// Strip fragments, tracking parameters, and trailing slashes so syndicated
/// copies of one URL collide.
pub fn normalize_url(url: &str) -> String {
    let mut u = url.trim().to_string();
    if let Some(pos) = u.find('#') {
        u.truncate(pos);
    }
    if let Some(pos) = u.find('?') {
        let (base, query) = u.split_at(pos);
        let kept: Vec<&str> = query[1..]
            .split('&')
            .filter(|p| {
                let key = p.split('=').next().unwrap_or("");
                !key.starts_with("utm_") && key != "ref" && key != "fbclid" && key != "gclid"
            })
            .collect();
        u = if kept.is_empty() { base.to_string() } else { format!("{base}?{}", kept.join("&")) };
    }
    let u = u.trim_end_matches('/');
    u.to_lowercase()
}

fn normalize_title(title: &str) -> String {
    title.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the hash set with fingerprints from previous runs.
    pub fn seed_hashes(&mut self, hashes: impl IntoIterator<Item = String>) {
        self.hashes.extend(hashes);
    }

    /// Accept the article iff none of its three keys has been seen; inserting
    /// all three on acceptance.
    pub fn check_and_insert(&mut self, article: &Article) -> bool {
        let hash = article.content_hash();
        let url = normalize_url(&article.url);
        let title = normalize_title(&article.title);

        if self.hashes.contains(&hash) || self.urls.contains(&url) || self.titles.contains(&title) {
            return false;
        }
        self.hashes.insert(hash);
        self.urls.insert(url);
        self.titles.insert(title);
        true
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn clear(&mut self) {
        self.hashes.clear();
        self.urls.clear();
        self.titles.clear();
    }
}

/// Cross-run near-duplicate check against recently stored (url, title) pairs.
pub fn is_near_duplicate(article: &Article, recent: &[(String, String)]) -> bool {
    let url = normalize_url(&article.url);
    recent.iter().any(|(stored_url, stored_title)| {
        normalize_url(stored_url) == url
            || title_jaccard(stored_title, &article.title) > NEAR_DUP_JACCARD
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, url: &str) -> Article {
        Article::new(title, url, "The Hindu", "Policy News")
    }

    #[test]
    fn accepts_then_rejects_same_article() {
        let mut dedup = Deduplicator::new();
        let a = article("Cabinet approves data rules", "https://example.com/a");
        assert!(dedup.check_and_insert(&a));
        assert!(!dedup.check_and_insert(&a));
    }

    #[test]
    fn output_hashes_are_unique() {
        let mut dedup = Deduplicator::new();
        let input = vec![
            article("Cabinet approves data rules", "https://example.com/a"),
            article("Cabinet approves data rules", "https://example.com/a"),
            article("Parliament passes finance bill", "https://example.com/b"),
        ];
        let accepted: Vec<&Article> = input.iter().filter(|a| dedup.check_and_insert(a)).collect();
        let hashes: HashSet<String> = accepted.iter().map(|a| a.content_hash()).collect();
        assert_eq!(hashes.len(), accepted.len());
        assert_eq!(accepted.len(), 2);
    }

    #[test]
    fn same_title_different_url_rejected_by_title_key() {
        let mut dedup = Deduplicator::new();
        assert!(dedup.check_and_insert(&article("Cabinet approves data rules", "https://one.example/a")));
        assert!(!dedup.check_and_insert(&article("Cabinet Approves Data Rules", "https://two.example/b")));
    }

    #[test]
    fn url_normalization_strips_tracking_noise() {
        assert_eq!(
            normalize_url("https://Example.com/story/?utm_source=rss&utm_medium=feed#top"),
            "https://example.com/story"
        );
        assert_eq!(
            normalize_url("https://example.com/story?id=5&utm_source=x"),
            "https://example.com/story?id=5"
        );
    }

    #[test]
    fn seeded_hashes_suppress_cross_run_repeats() {
        let a = article("Cabinet approves data rules", "https://example.com/a");
        let mut dedup = Deduplicator::new();
        dedup.seed_hashes([a.content_hash()]);
        assert!(!dedup.check_and_insert(&a));
    }

    #[test]
    fn near_duplicate_by_jaccard_or_url() {
        let stored = vec![(
            "https://example.com/story".to_string(),
            "Cabinet approves new data protection rules today".to_string(),
        )];
        let same_url = article("Different headline entirely", "https://example.com/story/");
        assert!(is_near_duplicate(&same_url, &stored));

        let similar_title =
            article("Cabinet approves new data protection rules", "https://other.example/x");
        assert!(is_near_duplicate(&similar_title, &stored));

        let unrelated = article("Monsoon forecast revised for the west coast", "https://other.example/y");
        assert!(!is_near_duplicate(&unrelated, &stored));
    }
}
