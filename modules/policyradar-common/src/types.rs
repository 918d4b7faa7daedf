use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::hash::{content_hash, storage_hash};

/// A registry entry: one feed endpoint belonging to one publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSource {
    pub name: &'static str,
    pub url: &'static str,
    pub category: &'static str,
}

/// Publisher classification, inferred from the source name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Government,
    Legal,
    ThinkTank,
    Academic,
    Business,
    NewsMedia,
    Other,
}

impl SourceType {
    pub fn from_source_name(source: &str) -> Self {
        let s = source.to_lowercase();
        const GOV: &[&str] = &[
            "ministry", "government", "pib", "press information bureau", "rbi", "sebi", "trai",
            "gazette", "niti aayog", "lok sabha", "rajya sabha", "department of",
        ];
        const LEGAL: &[&str] = &["court", "judiciary", "livelaw", "bar and bench"];
        const THINK: &[&str] = &["research", "institute", "foundation", "orf", "cpr", "takshashila"];
        const ACADEMIC: &[&str] = &["university", "college", "academic"];
        const BIZ: &[&str] = &["business", "economic", "financial", "economy"];
        const MEDIA: &[&str] = &["times", "express", "hindu", "mint", "ndtv", "news"];

        if GOV.iter().any(|k| s.contains(k)) {
            SourceType::Government
        } else if LEGAL.iter().any(|k| s.contains(k)) {
            SourceType::Legal
        } else if THINK.iter().any(|k| s.contains(k)) {
            SourceType::ThinkTank
        } else if ACADEMIC.iter().any(|k| s.contains(k)) {
            SourceType::Academic
        } else if BIZ.iter().any(|k| s.contains(k)) {
            SourceType::Business
        } else if MEDIA.iter().any(|k| s.contains(k)) {
            SourceType::NewsMedia
        } else {
            SourceType::Other
        }
    }

    /// Classify from both the source name and the feed URL: a `.gov.in` or
    /// `.nic.in` endpoint is government regardless of how the name reads.
    pub fn infer(source: &str, url: &str) -> Self {
        const GOV_URL_MARKERS: &[&str] = &[".gov.in", ".nic.in", "rbi.org.in", "pfrda.org.in"];
        let url_lower = url.to_lowercase();
        if GOV_URL_MARKERS.iter().any(|m| url_lower.contains(m)) {
            return SourceType::Government;
        }
        Self::from_source_name(source)
    }

    pub fn is_government(self) -> bool {
        matches!(self, SourceType::Government)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Government => "government",
            SourceType::Legal => "legal",
            SourceType::ThinkTank => "think_tank",
            SourceType::Academic => "academic",
            SourceType::Business => "business",
            SourceType::NewsMedia => "news_media",
            SourceType::Other => "other",
        }
    }
}

/// Rough shape of the item, inferred from title and summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Analysis,
    Notification,
    Legal,
    Legislation,
    Policy,
    Report,
    Interview,
    News,
}

impl ContentType {
    pub fn infer(title: &str, summary: &str) -> Self {
        let text = format!("{} {}", title, summary).to_lowercase();
        let any = |terms: &[&str]| terms.iter().any(|t| text.contains(t));

        if any(&["analysis", "opinion", "perspective", "view", "column"]) {
            ContentType::Analysis
        } else if any(&["notification", "circular", "notice"]) {
            ContentType::Notification
        } else if any(&["judgment", "verdict", "ruling", "case"]) {
            ContentType::Legal
        } else if any(&["bill", "legislation", "parliament", "amendment", "act"]) {
            ContentType::Legislation
        } else if any(&["policy", "regulation", "regulatory", "framework", "guidelines"]) {
            ContentType::Policy
        } else if any(&["report", "study", "survey", "research", "findings"]) {
            ContentType::Report
        } else if any(&["interview", "q&a", "speaking", "conversation"]) {
            ContentType::Interview
        } else {
            ContentType::News
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Analysis => "analysis",
            ContentType::Notification => "notification",
            ContentType::Legal => "legal",
            ContentType::Legislation => "legislation",
            ContentType::Policy => "policy",
            ContentType::Report => "report",
            ContentType::Interview => "interview",
            ContentType::News => "news",
        }
    }
}

/// Which extraction strategy produced the published date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSource {
    Feed,
    Attribute,
    Ancestor,
    Sibling,
    Title,
    Url,
    Default,
    Unknown,
}

impl DateSource {
    pub fn as_str(self) -> &'static str {
        match self {
            DateSource::Feed => "feed",
            DateSource::Attribute => "attribute",
            DateSource::Ancestor => "ancestor",
            DateSource::Sibling => "sibling",
            DateSource::Title => "title",
            DateSource::Url => "url",
            DateSource::Default => "default",
            DateSource::Unknown => "unknown",
        }
    }
}

/// The five sub-scores plus overall, all in [0, 1].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RelevanceScores {
    pub policy_relevance: f64,
    pub source_reliability: f64,
    pub recency: f64,
    pub sector_specificity: f64,
    pub overall: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleMetadata {
    pub source_type: SourceType,
    pub content_type: ContentType,
    pub word_count: usize,
    pub date_source: DateSource,
    pub date_valid: bool,
}

/// The unit of work. Created by the extractor, dated by the date resolver,
/// scored by the classifier, persisted by the store. Not mutated after insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub source: String,
    pub category: String,
    pub published_date: Option<NaiveDateTime>,
    pub summary: String,
    pub content: Option<String>,
    pub tags: Vec<String>,
    pub keywords: Vec<String>,
    pub relevance_scores: RelevanceScores,
    pub metadata: ArticleMetadata,
}

impl Article {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        source: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let url = url.into();
        let source = source.into();
        let source_type = SourceType::infer(&source, &url);
        Self {
            metadata: ArticleMetadata {
                source_type,
                content_type: ContentType::News,
                word_count: 0,
                date_source: DateSource::Unknown,
                date_valid: false,
            },
            title,
            url,
            source,
            category: category.into(),
            published_date: None,
            summary: String::new(),
            content: None,
            tags: Vec::new(),
            keywords: Vec::new(),
            relevance_scores: RelevanceScores::default(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self.finalize_metadata();
        self
    }

    /// Recompute the derived metadata fields after title/summary changes.
    pub fn finalize_metadata(&mut self) {
        self.metadata.content_type = ContentType::infer(&self.title, &self.summary);
        self.metadata.word_count =
            self.title.split_whitespace().count() + self.summary.split_whitespace().count();
    }

    /// Stable fingerprint over lowercased title and URL. Identical across runs.
    pub fn content_hash(&self) -> String {
        content_hash(&self.title, &self.url)
    }

    /// Primary key in the store: fingerprint plus the ISO date, so multiple
    /// snapshots of the same logical article may coexist across runs.
    pub fn storage_hash(&self) -> String {
        let date = self
            .published_date
            .map(|d| d.format("%Y-%m-%dT%H:%M:%S").to_string())
            .unwrap_or_default();
        storage_hash(&self.content_hash(), &date)
    }

    /// Combined lowercase text used by the relevance engine.
    pub fn analysis_text(&self) -> String {
        let mut text = format!("{} {}", self.title, self.summary);
        if let Some(content) = &self.content {
            text.push(' ');
            text.push_str(content);
        }
        text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_hash_stable_across_case() {
        let a = Article::new("Cabinet Approves Rules", "https://pib.gov.in/x", "PIB", "Policy News");
        let b = Article::new("cabinet approves rules", "HTTPS://PIB.GOV.IN/x", "PIB", "Policy News");
        // URL case matters only through lowercasing, which both hit
        assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn content_hash_differs_for_different_articles() {
        let a = Article::new("Cabinet approves rules", "https://pib.gov.in/1", "PIB", "Policy News");
        let b = Article::new("Cabinet approves rules", "https://pib.gov.in/2", "PIB", "Policy News");
        assert_ne!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn storage_hash_varies_with_date() {
        let mut a = Article::new("Title", "https://example.com/a", "Mint", "Economic Policy");
        let undated = a.storage_hash();
        a.published_date =
            Some(chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(9, 0, 0).unwrap());
        assert_ne!(undated, a.storage_hash());
    }

    #[test]
    fn source_type_from_name() {
        assert_eq!(
            SourceType::from_source_name("Ministry of Electronics & IT"),
            SourceType::Government
        );
        assert_eq!(SourceType::from_source_name("LiveLaw"), SourceType::Legal);
        assert_eq!(
            SourceType::from_source_name("Observer Research Foundation"),
            SourceType::ThinkTank
        );
        assert_eq!(SourceType::from_source_name("The Hindu"), SourceType::NewsMedia);
        assert_eq!(SourceType::from_source_name("MediaNama"), SourceType::Other);
    }

    #[test]
    fn content_type_inferred_from_text() {
        assert_eq!(ContentType::infer("Draft bill tabled in parliament", ""), ContentType::Legislation);
        assert_eq!(ContentType::infer("RBI circular on lending", ""), ContentType::Notification);
        assert_eq!(ContentType::infer("Market wrap", "shares closed higher"), ContentType::News);
    }
}
