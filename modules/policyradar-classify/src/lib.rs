pub mod keywords;
pub mod rank;
pub mod relevance;
pub mod tags;

pub use rank::{rank, ranking_score};
pub use relevance::{is_organizational_content, score_article};
pub use tags::{assign_tags, is_crisis_content};

/// Default per-article acceptance threshold on the overall score.
pub const MIN_RELEVANCE: f64 = 0.15;
/// Lower threshold applied to crisis-tagged items.
pub const CRISIS_MIN_RELEVANCE: f64 = 0.10;
