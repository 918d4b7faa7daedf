//! Per-domain politeness: an in-flight cap of two requests per host plus a
//! sampled inter-request delay whose range depends on the host's class.
//! This is the keyed token bucket the scheduler leans on — workers may pull
//! many sources from one host, but the host never sees more than the cap.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};
use tokio::time::Instant;
use tracing::debug;

use policyradar_common::extract_host;
use policyradar_sources::gov::DelayClass;

const PER_HOST_CAP: usize = 2;

struct HostState {
    semaphore: Arc<Semaphore>,
    /// The moment the next request to this host may start.
    next_slot: Instant,
}

/// Keyed gate shared by all workers.
pub struct DomainGate {
    hosts: Mutex<HashMap<String, HostState>>,
}

/// Held for the duration of one request; releasing it frees a host slot.
pub struct HostPermit {
    _permit: OwnedSemaphorePermit,
}

impl DomainGate {
    pub fn new() -> Self {
        Self { hosts: Mutex::new(HashMap::new()) }
    }

    /// Wait for a slot on the URL's host: acquire the per-host permit, then
    /// sleep out the host's sampled inter-request delay.
    pub async fn acquire(&self, url: &str) -> HostPermit {
        let host = extract_host(url);
        let class = DelayClass::for_url(url);

        let semaphore = {
            let mut hosts = self.hosts.lock().await;
            let state = hosts.entry(host.clone()).or_insert_with(|| HostState {
                semaphore: Arc::new(Semaphore::new(PER_HOST_CAP)),
                next_slot: Instant::now(),
            });
            state.semaphore.clone()
        };

        let permit = semaphore.acquire_owned().await.expect("gate semaphore never closed");

        // Reserve the next slot before sleeping so concurrent holders of the
        // two permits still space their requests out.
        let wait = {
            let (lo, hi) = class.range_ms();
            let delay = Duration::from_millis(rand::rng().random_range(lo..=hi));
            let now = Instant::now();
            let mut hosts = self.hosts.lock().await;
            let state = hosts.get_mut(&host).expect("host state exists after insert");
            let start = state.next_slot.max(now);
            state.next_slot = start + delay;
            start.saturating_duration_since(now)
        };

        if !wait.is_zero() {
            debug!(host, wait_ms = wait.as_millis() as u64, "Politeness delay");
            tokio::time::sleep(wait).await;
        }

        HostPermit { _permit: permit }
    }
}

impl Default for DomainGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn permits_cap_concurrency_per_host() {
        let gate = Arc::new(DomainGate::new());

        let p1 = gate.acquire("https://example.com/a").await;
        let _p2 = gate.acquire("https://example.com/b").await;

        // Third acquire on the same host must block until a permit drops
        let gate2 = gate.clone();
        let third = tokio::spawn(async move {
            let _p = gate2.acquire("https://example.com/c").await;
        });
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!third.is_finished(), "third request should be gated");

        drop(p1);
        tokio::time::timeout(Duration::from_secs(10), third)
            .await
            .expect("third request should proceed after a slot frees")
            .unwrap();
    }

    #[tokio::test]
    async fn different_hosts_do_not_contend() {
        let gate = DomainGate::new();
        let _a = gate.acquire("https://one.example/").await;
        let _b = gate.acquire("https://two.example/").await;
        let _c = gate.acquire("https://three.example/").await;
        // Three different hosts acquired without blocking on each other
    }
}
