pub mod cache;
pub mod db;
pub mod dedup;
pub mod health;

pub use cache::{load_cached_articles, write_article_cache};
pub use db::{ArticleStore, SourceRow};
pub use dedup::Deduplicator;
pub use health::{FeedHealthMonitor, FeedHealthRecord, HealthReport};
