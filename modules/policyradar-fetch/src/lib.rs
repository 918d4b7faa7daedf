pub mod browser;
pub mod client;
pub mod handlers;
pub mod politeness;

pub use browser::{requires_browser, BrowserFetcher};
pub use client::{FetchClient, FetchOutcome};
pub use handlers::RequestPlan;
pub use politeness::DomainGate;
