use std::collections::HashMap;
use std::fmt;

use chrono::{Local, NaiveDateTime};

/// Per-source outcome recorded during a run.
#[derive(Debug, Clone, Default)]
pub struct SourceStat {
    pub articles_emitted: usize,
    pub last_success_time: Option<NaiveDateTime>,
    pub last_status: Option<String>,
}

/// Aggregate counters for one run. Owned by the scheduler, written by worker
/// tasks under a mutex.
#[derive(Debug, Clone)]
pub struct RunStatistics {
    pub total_feeds: usize,
    pub successful_feeds: usize,
    pub failed_feeds: usize,
    pub total_articles: usize,
    pub duplicate_articles: usize,
    pub filtered_articles: usize,
    pub low_relevance_articles: usize,
    pub fallback_successes: usize,
    pub direct_scrape_articles: usize,
    pub google_news_articles: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub per_source: HashMap<String, SourceStat>,
}

impl RunStatistics {
    pub fn new() -> Self {
        Self {
            total_feeds: 0,
            successful_feeds: 0,
            failed_feeds: 0,
            total_articles: 0,
            duplicate_articles: 0,
            filtered_articles: 0,
            low_relevance_articles: 0,
            fallback_successes: 0,
            direct_scrape_articles: 0,
            google_news_articles: 0,
            start_time: Local::now().naive_local(),
            end_time: None,
            per_source: HashMap::new(),
        }
    }

    pub fn record_source_success(&mut self, source: &str, count: usize, status: &str) {
        let stat = self.per_source.entry(source.to_string()).or_default();
        stat.articles_emitted += count;
        stat.last_success_time = Some(Local::now().naive_local());
        stat.last_status = Some(status.to_string());
    }

    pub fn record_source_failure(&mut self, source: &str, status: &str) {
        let stat = self.per_source.entry(source.to_string()).or_default();
        stat.last_status = Some(status.to_string());
    }

    /// Feed success rate in percent. 100 when nothing was attempted.
    pub fn success_rate(&self) -> f64 {
        if self.total_feeds == 0 {
            return 100.0;
        }
        self.successful_feeds as f64 / self.total_feeds as f64 * 100.0
    }

    pub fn finish(&mut self) {
        self.end_time = Some(Local::now().naive_local());
    }

    pub fn runtime_seconds(&self) -> i64 {
        match self.end_time {
            Some(end) => (end - self.start_time).num_seconds(),
            None => (Local::now().naive_local() - self.start_time).num_seconds(),
        }
    }
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "feeds {}/{} ok, {} articles ({} dup, {} filtered, {} low-relevance) in {}s",
            self.successful_feeds,
            self.total_feeds,
            self.total_articles,
            self.duplicate_articles,
            self.filtered_articles,
            self.low_relevance_articles,
            self.runtime_seconds()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_rate_full_when_idle() {
        let stats = RunStatistics::new();
        assert_eq!(stats.success_rate(), 100.0);
    }

    #[test]
    fn success_rate_reflects_failures() {
        let mut stats = RunStatistics::new();
        stats.total_feeds = 10;
        stats.successful_feeds = 4;
        assert!((stats.success_rate() - 40.0).abs() < f64::EPSILON);
    }
}
