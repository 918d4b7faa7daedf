//! Headless-browser fallback for sites that block simple clients entirely.
//! Contract: URL in, rendered HTML out. Uses Chromium's --dump-dom so the
//! page's own scripts populate the DOM before we read it.

use anyhow::{Context, Result};
use tracing::{info, warn};

use policyradar_common::extract_host;

/// Hosts that never serve article listings to a plain HTTP client.
const BROWSER_REQUIRED_HOSTS: &[&str] = &[
    "ptinews.com",
    "reuters.com",
    "apnews.com",
    "edition.cnn.com",
    "ndtv.com",
];

pub fn requires_browser(url: &str) -> bool {
    let host = extract_host(url);
    BROWSER_REQUIRED_HOSTS.iter().any(|m| host.contains(m))
}

pub struct BrowserFetcher;

impl BrowserFetcher {
    pub fn new() -> Self {
        Self
    }

    /// Render a URL in headless Chromium and return the final DOM as HTML.
    /// Returns an empty string on renderer failure so the caller can treat it
    /// like an empty feed rather than an error.
    pub async fn fetch_rendered(&self, url: &str) -> Result<String> {
        info!(url, fetcher = "chromium", "Rendering URL in headless browser");

        let chrome_bin = std::env::var("CHROME_BIN").unwrap_or_else(|_| "chromium".to_string());

        let output = tokio::process::Command::new(&chrome_bin)
            .args([
                "--headless",
                "--no-sandbox",
                "--disable-gpu",
                "--disable-dev-shm-usage",
                "--disable-notifications",
                "--disable-blink-features=AutomationControlled",
                "--virtual-time-budget=3000",
                "--dump-dom",
                url,
            ])
            .output()
            .await
            .context(format!("Failed to run Chromium for {url}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(url, fetcher = "chromium", stderr = %stderr, "Chromium exited with error");
            return Ok(String::new());
        }

        let html = String::from_utf8_lossy(&output.stdout).to_string();
        if html.trim().is_empty() {
            warn!(url, fetcher = "chromium", "Empty DOM output");
            return Ok(String::new());
        }

        info!(url, fetcher = "chromium", bytes = html.len(), "Rendered successfully");
        Ok(html)
    }
}

impl Default for BrowserFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_required_only_for_listed_hosts() {
        assert!(requires_browser("https://www.ptinews.com/home"));
        assert!(requires_browser("https://www.reuters.com/world/india/"));
        assert!(!requires_browser("https://www.thehindu.com/news/national/"));
    }
}
