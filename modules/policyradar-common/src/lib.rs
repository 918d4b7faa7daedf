pub mod config;
pub mod error;
pub mod hash;
pub mod stats;
pub mod text;
pub mod types;

pub use config::Config;
pub use error::RadarError;
pub use hash::{content_hash, storage_hash};
pub use stats::RunStatistics;
pub use types::{
    Article, ArticleMetadata, ContentType, DateSource, FeedSource, RelevanceScores, SourceType,
};

/// Extract the host portion of a URL, lowercased. Empty string if unparseable.
pub fn extract_host(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
        .unwrap_or_default()
}
