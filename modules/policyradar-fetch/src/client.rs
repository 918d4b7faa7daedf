//! Resilient request execution: retries with jittered backoff, permissive TLS
//! for legacy government stacks, user-agent rotation, and cookie-jar warming.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use policyradar_common::error::{RadarError, Result};
use policyradar_common::extract_host;
use policyradar_sources::profiles::SiteProfile;

use crate::handlers::RequestPlan;

const MAX_ATTEMPTS: u32 = 5;
const RETRY_BASE_DELAY_SECS: f64 = 1.5;
const RETRY_STATUS_CODES: &[u16] = &[403, 429, 500, 502, 503, 504];

const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:124.0) Gecko/20100101 Firefox/124.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36 Edg/123.0.0.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Linux; Android 14; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Mobile Safari/537.36",
    "Feedly/1.0 (+http://www.feedly.com/fetcher.html; like FeedFetcher-Google)",
    "Mozilla/5.0 (compatible; Inoreader/1.0; https://www.inoreader.com)",
];

const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"),
    ("Accept-Language", "en-US,en;q=0.9,hi;q=0.8"),
    ("Cache-Control", "no-cache"),
    ("Upgrade-Insecure-Requests", "1"),
    ("Sec-Fetch-Dest", "document"),
    ("Sec-Fetch-Mode", "navigate"),
    ("Sec-Fetch-Site", "none"),
    ("Sec-Fetch-User", "?1"),
];

/// The terminal result of a fetch: last status and body, even after retry
/// exhaustion on a retryable status. Callers inspect `status`.
#[derive(Debug)]
pub struct FetchOutcome {
    pub status: u16,
    pub body: String,
    pub content_type: Option<String>,
    /// The URL that produced the body, after handler rewrites and redirects.
    pub final_url: String,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Shared HTTP client. TLS verification is off deliberately: the target
/// ecosystem ships weak DH parameters and expired intermediate chains, and
/// content correctness is validated downstream. GET-only.
pub struct FetchClient {
    client: reqwest::Client,
    default_timeout: Duration,
}

impl FetchClient {
    pub fn new(default_timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true)
            .gzip(true)
            .redirect(reqwest::redirect::Policy::limited(5))
            .pool_max_idle_per_host(2)
            .connect_timeout(Duration::from_secs(20))
            .timeout(default_timeout)
            .build()
            .map_err(|e| RadarError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, default_timeout })
    }

    fn random_user_agent() -> &'static str {
        let idx = rand::rng().random_range(0..USER_AGENTS.len());
        USER_AGENTS[idx]
    }

    /// Warm the cookie jar by visiting the site root, then pause 2–4 s so the
    /// follow-up looks like a navigation rather than a scrape.
    async fn warm_cookies(&self, url: &str) {
        let host = extract_host(url);
        if host.is_empty() {
            return;
        }
        let root = format!("https://{host}/");
        debug!(host, "Warming cookie jar from site root");

        let result = self
            .client
            .get(&root)
            .header("User-Agent", Self::random_user_agent())
            .send()
            .await;
        if let Err(e) = result {
            debug!(host, error = %e, "Cookie warming failed, continuing anyway");
        }

        let pause_ms = rand::rng().random_range(2000..4000);
        tokio::time::sleep(Duration::from_millis(pause_ms)).await;
    }

    /// Execute a GET with the full retry and shaping policy.
    pub async fn fetch(&self, url: &str) -> Result<FetchOutcome> {
        let plan = RequestPlan::for_url(url);
        let profile = SiteProfile::for_url(&plan.url);
        let timeout = profile.timeout_override.unwrap_or(self.default_timeout);

        if profile.warm_cookies {
            self.warm_cookies(&plan.url).await;
        }

        let mut last: Option<FetchOutcome> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                let delay = RETRY_BASE_DELAY_SECS * 1.5_f64.powi(attempt as i32)
                    + rand::rng().random_range(0.0..1.0);
                debug!(url = %plan.url, attempt, delay_secs = delay, "Retrying after backoff");
                tokio::time::sleep(Duration::from_secs_f64(delay)).await;
            }

            let mut request = self
                .client
                .get(&plan.url)
                .timeout(timeout)
                .header("User-Agent", Self::random_user_agent())
                .header("Connection", "keep-alive");

            for (key, value) in BROWSER_HEADERS {
                request = request.header(*key, *value);
            }
            for (key, value) in &profile.headers {
                request = request.header(*key, *value);
            }
            for (key, value) in &plan.headers {
                request = request.header(key.as_str(), value.as_str());
            }
            if attempt > 0 {
                // Rotated UA already applied; add a search referrer on retries
                request = request.header("Referer", "https://www.google.com/search?q=news");
            }

            let cookie_header = profile
                .cookies
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .chain(plan.cookies.iter().map(|(k, v)| format!("{k}={v}")))
                .collect::<Vec<_>>()
                .join("; ");
            if !cookie_header.is_empty() {
                request = request.header("Cookie", cookie_header);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) if e.is_timeout() => {
                    warn!(url = %plan.url, attempt, "Request timed out");
                    if attempt + 1 == MAX_ATTEMPTS {
                        return Err(RadarError::Timeout(plan.url.clone()));
                    }
                    continue;
                }
                Err(e) => {
                    warn!(url = %plan.url, attempt, error = %e, "Request failed");
                    if attempt + 1 == MAX_ATTEMPTS {
                        return Err(RadarError::Http(format!("{}: {e}", plan.url)));
                    }
                    continue;
                }
            };

            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string());
            let final_url = response.url().to_string();
            let body = response.text().await.unwrap_or_default();

            let outcome = FetchOutcome { status, body, content_type, final_url };

            if RETRY_STATUS_CODES.contains(&status) && attempt + 1 < MAX_ATTEMPTS {
                warn!(url = %plan.url, status, attempt, "Retryable status");
                last = Some(outcome);
                continue;
            }

            if outcome.is_success() {
                info!(url = %plan.url, status, bytes = outcome.body.len(), "Fetched");
            } else {
                warn!(url = %plan.url, status, "Non-success status after retries");
            }
            return Ok(outcome);
        }

        // Retries exhausted on a retryable status: hand back the last response
        last.ok_or_else(|| RadarError::Http(format!("retries exhausted for {}", plan.url)))
    }
}
