//! Per-feed health bookkeeping: success/failure counters, a rolling health
//! score, deactivation after consecutive failures, and reactivation after a
//! retry-after window.

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};
use tracing::{info, warn};

use policyradar_common::FeedSource;

/// Feeds are deactivated after this many consecutive failures.
pub const DEACTIVATION_THRESHOLD: u32 = 5;

#[derive(Debug, Clone)]
pub struct FeedHealthRecord {
    pub url: String,
    pub total_attempts: u32,
    pub successful_attempts: u32,
    pub consecutive_failures: u32,
    pub last_success: Option<NaiveDateTime>,
    pub last_failure: Option<NaiveDateTime>,
    pub last_error_type: Option<String>,
    pub is_active: bool,
}

impl FeedHealthRecord {
    fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            total_attempts: 0,
            successful_attempts: 0,
            consecutive_failures: 0,
            last_success: None,
            last_failure: None,
            last_error_type: None,
            is_active: true,
        }
    }

    /// Rolling success ratio in [0, 1].
    pub fn health_score(&self) -> f64 {
        self.successful_attempts as f64 / (self.total_attempts.max(1)) as f64
    }
}

/// Summary handed to the health dashboard.
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub total: usize,
    pub active: usize,
    pub healthy: usize,
    pub unhealthy: usize,
    pub avg_score: f64,
    /// The twenty worst (url, score) pairs, worst first.
    pub worst: Vec<(String, f64)>,
}

/// In-memory health table, loaded from and persisted to the store around a
/// run. Keyed by feed URL.
#[derive(Debug, Default)]
pub struct FeedHealthMonitor {
    records: HashMap<String, FeedHealthRecord>,
}

impl FeedHealthMonitor {
    pub fn new() -> Self {
        Self { records: HashMap::new() }
    }

    pub fn from_records(records: Vec<FeedHealthRecord>) -> Self {
        Self { records: records.into_iter().map(|r| (r.url.clone(), r)).collect() }
    }

    pub fn records(&self) -> impl Iterator<Item = &FeedHealthRecord> {
        self.records.values()
    }

    /// Record one fetch outcome. Success resets the failure streak and
    /// reactivates; five consecutive failures deactivate.
    pub fn update(&mut self, url: &str, success: bool, error_type: Option<&str>, now: NaiveDateTime) {
        let record = self.records.entry(url.to_string()).or_insert_with(|| FeedHealthRecord::new(url));
        record.total_attempts += 1;

        if success {
            record.successful_attempts += 1;
            record.consecutive_failures = 0;
            record.last_success = Some(now);
            record.is_active = true;
        } else {
            record.consecutive_failures += 1;
            record.last_failure = Some(now);
            record.last_error_type = error_type.map(str::to_string);
            if record.consecutive_failures >= DEACTIVATION_THRESHOLD && record.is_active {
                warn!(url, failures = record.consecutive_failures, "Deactivating unhealthy feed");
                record.is_active = false;
            }
        }
    }

    /// The health gate: drop sources whose record is inactive and whose last
    /// failure is younger than the retry-after window. Unknown sources pass.
    pub fn active_feeds(
        &self,
        sources: Vec<FeedSource>,
        retry_after_hours: i64,
        now: NaiveDateTime,
    ) -> Vec<FeedSource> {
        let before = sources.len();
        let kept: Vec<FeedSource> = sources
            .into_iter()
            .filter(|s| match self.records.get(s.url) {
                Some(record) if !record.is_active => match record.last_failure {
                    Some(failed_at) => now - failed_at >= Duration::hours(retry_after_hours),
                    None => true,
                },
                _ => true,
            })
            .collect();
        if kept.len() < before {
            info!(skipped = before - kept.len(), "Health gate skipped inactive feeds");
        }
        kept
    }

    pub fn health_score(&self, url: &str) -> Option<f64> {
        self.records.get(url).map(|r| r.health_score())
    }

    /// Dashboard summary: totals, healthy (≥0.8), unhealthy (<0.3), average,
    /// and the worst twenty feeds.
    pub fn report(&self) -> HealthReport {
        let total = self.records.len();
        let active = self.records.values().filter(|r| r.is_active).count();
        let healthy = self.records.values().filter(|r| r.health_score() >= 0.8).count();
        let unhealthy = self.records.values().filter(|r| r.health_score() < 0.3).count();
        let avg_score = if total == 0 {
            1.0
        } else {
            self.records.values().map(|r| r.health_score()).sum::<f64>() / total as f64
        };

        let mut worst: Vec<(String, f64)> =
            self.records.values().map(|r| (r.url.clone(), r.health_score())).collect();
        worst.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        worst.truncate(20);

        HealthReport { total, active, healthy, unhealthy, avg_score, worst }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn source(url: &'static str) -> FeedSource {
        FeedSource { name: "Test", url, category: "Policy News" }
    }

    #[test]
    fn score_monotone_under_outcomes() {
        let mut monitor = FeedHealthMonitor::new();
        let url = "https://example.com/feed";
        monitor.update(url, true, None, now());
        let after_success = monitor.health_score(url).unwrap();
        monitor.update(url, false, Some("timeout"), now());
        let after_failure = monitor.health_score(url).unwrap();
        assert!(after_failure < after_success);
        monitor.update(url, true, None, now());
        assert!(monitor.health_score(url).unwrap() >= after_failure);
    }

    #[test]
    fn five_consecutive_failures_deactivate() {
        let mut monitor = FeedHealthMonitor::new();
        let url = "https://example.com/feed";
        for _ in 0..4 {
            monitor.update(url, false, Some("http"), now());
        }
        assert!(monitor.records.get(url).unwrap().is_active);
        monitor.update(url, false, Some("http"), now());
        assert!(!monitor.records.get(url).unwrap().is_active);
    }

    #[test]
    fn success_resets_failure_streak_and_reactivates() {
        let mut monitor = FeedHealthMonitor::new();
        let url = "https://example.com/feed";
        for _ in 0..5 {
            monitor.update(url, false, Some("http"), now());
        }
        monitor.update(url, true, None, now());
        let record = monitor.records.get(url).unwrap();
        assert!(record.is_active);
        assert_eq!(record.consecutive_failures, 0);
    }

    #[test]
    fn gate_drops_recently_failed_inactive_feeds() {
        let mut monitor = FeedHealthMonitor::new();
        let url = "https://example.com/feed";
        for _ in 0..5 {
            monitor.update(url, false, Some("http"), now());
        }

        let kept = monitor.active_feeds(vec![source("https://example.com/feed")], 24, now());
        assert!(kept.is_empty());

        // After the retry-after window the feed is eligible again
        let later = now() + Duration::hours(25);
        let kept = monitor.active_feeds(vec![source("https://example.com/feed")], 24, later);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn unknown_sources_pass_the_gate() {
        let monitor = FeedHealthMonitor::new();
        let kept = monitor.active_feeds(vec![source("https://fresh.example/feed")], 24, now());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn report_buckets_by_score() {
        let mut monitor = FeedHealthMonitor::new();
        for _ in 0..9 {
            monitor.update("https://good.example/feed", true, None, now());
        }
        monitor.update("https://good.example/feed", false, None, now());
        for _ in 0..5 {
            monitor.update("https://bad.example/feed", false, Some("http"), now());
        }

        let report = monitor.report();
        assert_eq!(report.total, 2);
        assert_eq!(report.healthy, 1);
        assert_eq!(report.unhealthy, 1);
        assert_eq!(report.worst[0].0, "https://bad.example/feed");
    }
}
