use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Run configuration, built once from CLI flags plus an environment probe.
/// Passed explicitly to the orchestrator; there are no module globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Worker pool size for the non-government fetch path.
    pub workers: usize,
    /// Concurrent request cap for government hosts.
    pub gov_workers: usize,
    /// Output HTML path.
    pub output: PathBuf,
    /// Verbose logging.
    pub debug: bool,
    /// Also emit the JSON API dump.
    pub export: bool,
    /// Disable duplicate suppression for this run.
    pub fresh: bool,
    /// Cap on the number of feeds processed.
    pub max_feeds: Option<usize>,
    /// Cap on the number of articles collected.
    pub max_articles: usize,
    /// Global wall-clock budget for the fetch phase.
    pub run_budget: Duration,
    /// Default per-request timeout.
    pub request_timeout: Duration,
    /// Hours a deactivated feed stays gated before retry.
    pub retry_after_hours: i64,
    /// Days to look back when loading known hashes for dedup.
    pub dedup_days: i64,
    /// Reduced-footprint mode, selected by `GITHUB_ACTIONS=true`.
    pub ci_mode: bool,

    pub db_path: PathBuf,
    pub cache_dir: PathBuf,
    pub backup_dir: PathBuf,
    pub docs_dir: PathBuf,
    pub logs_dir: PathBuf,
    pub exports_dir: PathBuf,
}

impl Config {
    /// Build a config from the parsed CLI values, deriving CI mode from the
    /// environment at construction time.
    pub fn new(
        workers: usize,
        output: PathBuf,
        debug: bool,
        export: bool,
        fresh: bool,
        max_feeds: Option<usize>,
        max_articles: usize,
    ) -> Self {
        let ci_mode = env::var("GITHUB_ACTIONS").map(|v| v == "true").unwrap_or(false);

        Self {
            workers: if ci_mode { workers.min(10) } else { workers },
            gov_workers: 3,
            output,
            debug,
            export,
            fresh,
            max_feeds,
            max_articles,
            run_budget: if ci_mode {
                Duration::from_secs(180)
            } else {
                Duration::from_secs(300)
            },
            request_timeout: if ci_mode {
                Duration::from_secs(30)
            } else {
                Duration::from_secs(60)
            },
            retry_after_hours: 24,
            dedup_days: 7,
            ci_mode,
            db_path: PathBuf::from("data/policyradar.db"),
            cache_dir: PathBuf::from("cache"),
            backup_dir: PathBuf::from("backup"),
            docs_dir: PathBuf::from("docs"),
            logs_dir: PathBuf::from("logs"),
            exports_dir: PathBuf::from("exports"),
        }
    }

    /// Create the working directories if missing. Must run before logging
    /// setup since the log file lives under `logs/`.
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        for dir in [
            self.logs_dir.as_path(),
            self.cache_dir.as_path(),
            Path::new("data"),
            self.docs_dir.as_path(),
            self.backup_dir.as_path(),
            self.exports_dir.as_path(),
        ] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(6, PathBuf::from("docs/index.html"), false, false, false, None, 200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_is_five_minutes_outside_ci() {
        // The probe reads the live environment; only assert when not under CI.
        if env::var("GITHUB_ACTIONS").map(|v| v == "true").unwrap_or(false) {
            return;
        }
        let config = Config::default();
        assert_eq!(config.run_budget, Duration::from_secs(300));
        assert_eq!(config.workers, 6);
    }
}
