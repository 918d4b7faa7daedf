//! The relevance engine: five sub-scores and an overall, plus sector
//! re-categorization. Two-pass by design — sector specificity is computed and
//! the category reassigned before the overall is derived, so scoring never
//! reads a category it also writes.

use chrono::NaiveDateTime;
use tracing::debug;

use policyradar_common::{Article, SourceType};
use policyradar_sources::tiers::reliability_rating;

use crate::keywords::*;

fn count_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

fn any_hit(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(*k))
}

/// Geographic multiplier: 0.1 for clearly-foreign items, 0.8 when no
/// geographic signal is present, 1.0 for India-context items.
pub fn geographic_multiplier(text: &str) -> f64 {
    let india = any_hit(text, INDIA_KEYWORDS);
    let mut foreign = any_hit(text, FOREIGN_KEYWORDS);

    // "congress" alone usually means the Indian party; with US context and no
    // India signal it means the legislature
    if !india && !foreign && text.contains("congress") && any_hit(text, US_CONGRESS_CONTEXT) {
        foreign = true;
    }

    if foreign && !india {
        0.1
    } else if !foreign && !india {
        0.8
    } else {
        1.0
    }
}

/// Organizational boilerplate: the title equals or starts with a boilerplate
/// phrase, and whatever follows the phrase carries no policy indicator.
/// ("Privacy Policy" is boilerplate; "Privacy Policy Amendment Bill" is not.)
pub fn is_organizational_content(title: &str) -> bool {
    let t = title.trim().to_lowercase();
    let Some(phrase) = ORGANIZATIONAL_PHRASES.iter().find(|p| t == **p || t.starts_with(*p))
    else {
        return false;
    };
    let remainder = &t[phrase.len()..];
    !any_hit(remainder, POLICY_INDICATORS)
}

/// Two or more high-impact keyword hits.
pub fn is_high_impact(text: &str) -> bool {
    count_hits(text, HIGH_IMPACT_KEYWORDS) >= 2
}

/// Weighted exclusion score in [0, 1].
fn exclusion_score(text: &str) -> f64 {
    let sum: f64 = EXCLUSION_CATEGORIES
        .iter()
        .map(|cat| {
            let matches = count_hits(text, cat.keywords) as f64;
            if matches == 0.0 {
                return 0.0;
            }
            (matches / cat.keywords.len() as f64 * cat.weight * 1.5).min(1.0)
        })
        .sum();
    (sum / 3.0).min(1.0)
}

/// Protection tier in {0.9, 0.7, 0.5, 0.1}; the highest satisfied tier wins.
fn policy_protection(text: &str) -> f64 {
    let context = count_hits(text, CONTEXT_INDICATORS);
    let exceptions = count_hits(text, EXCEPTION_KEYWORDS);
    let validation = count_hits(text, VALIDATION_KEYWORDS);
    let business = count_hits(text, BUSINESS_POLICY_KEYWORDS);

    if context >= 2 || exceptions >= 1 {
        0.9
    } else if context >= 1 && validation >= 1 {
        0.7
    } else if validation >= 1 || business >= 1 {
        0.5
    } else {
        0.1
    }
}

/// Policy relevance in [0, 1], before the geographic multiplier.
fn policy_relevance(text: &str, title: &str, source_type: SourceType) -> f64 {
    if source_type.is_government() {
        if is_organizational_content(title) {
            return 0.1;
        }
        if is_high_impact(text) {
            return 0.85;
        }
        return 0.70;
    }

    let exclusion = exclusion_score(text);
    let protection = policy_protection(text);
    let effective_exclusion = exclusion * (1.0 - protection);
    if effective_exclusion > 0.6 {
        return 0.0;
    }

    let mut score: f64 = 0.15;
    if any_hit(text, CONTEXT_INDICATORS)
        || any_hit(text, BUSINESS_POLICY_KEYWORDS)
        || any_hit(text, DEFENCE_INDICATORS)
    {
        score = 0.5;
    }
    score += (count_hits(text, HIGH_RELEVANCE_KEYWORDS) as f64 * 0.1).min(0.3);
    score += (count_hits(text, MEDIUM_RELEVANCE_KEYWORDS) as f64 * 0.05).min(0.2);
    score.clamp(0.0, 1.0)
}

/// 1.0 for government sources, curated rating / 5 otherwise, 0.5 default.
fn source_reliability(source: &str, source_type: SourceType) -> f64 {
    if source_type.is_government() {
        return 1.0;
    }
    reliability_rating(source).map(|r| r / 5.0).unwrap_or(0.5)
}

/// Recency ladder over age in hours; source-type default when undated.
fn recency_score(
    published: Option<NaiveDateTime>,
    source_type: SourceType,
    now: NaiveDateTime,
) -> f64 {
    match published {
        Some(date) => {
            let hours = (now - date).num_minutes() as f64 / 60.0;
            if hours <= 24.0 {
                1.0
            } else if hours <= 72.0 {
                0.9
            } else if hours <= 168.0 {
                0.7
            } else {
                0.5
            }
        }
        None => {
            if source_type.is_government() {
                0.8
            } else {
                0.4
            }
        }
    }
}

/// Best (sector, score) pair, or None when no core policy trigger is present.
pub fn sector_specificity(text: &str) -> Option<(&'static str, f64)> {
    if !any_hit(text, CORE_POLICY_TRIGGERS) {
        return None;
    }

    let mut best: Option<(&'static str, f64)> = None;
    for sector in SECTORS {
        let matches = count_hits(text, sector.keywords);
        if matches == 0 {
            continue;
        }
        let density = matches as f64 / sector.keywords.len() as f64;
        let mut score = (density * 2.5 + matches as f64 * 0.1).min(0.8);
        if sector.name == "Defence & Security" && any_hit(text, DEFENCE_SECTOR_BOOST_TOKENS) {
            score = (score * 1.5).min(1.0);
        }
        if best.map(|(_, s)| score > s).unwrap_or(true) {
            best = Some((sector.name, score));
        }
    }
    best
}

/// Compute all scores for an article and reassign its category when a sector
/// match beats a generic default. The article-side method; the canonical one.
pub fn score_article(article: &mut Article, now: NaiveDateTime) {
    let text = article.analysis_text();
    let source_type = article.metadata.source_type;

    let g = geographic_multiplier(&text);

    // First pass: sector, and the category rewrite it may warrant
    let sector = sector_specificity(&text);
    let sector_score = sector.map(|(_, s)| s).unwrap_or(0.0);
    if let Some((name, score)) = sector {
        if score > 0.2 && GENERIC_CATEGORIES.contains(&article.category.as_str()) {
            debug!(title = %article.title, sector = name, "Reassigning generic category");
            article.category = name.to_string();
        }
    }

    // Second pass: the remaining sub-scores and the overall
    let policy = (policy_relevance(&text, &article.title, source_type) * g).clamp(0.0, 1.0);
    let reliability = source_reliability(&article.source, source_type);
    let recency = recency_score(article.published_date, source_type, now);

    let mut overall = if source_type.is_government() {
        let base = 0.6 * policy + 0.3 * reliability + 0.1 * recency;
        if is_high_impact(&text) {
            base.max(0.8)
        } else {
            base
        }
    } else {
        0.5 * policy + 0.3 * reliability + 0.15 * recency + 0.05 * sector_score
    };

    // Clearly-foreign items are attenuated on the overall as well
    if g < 0.2 {
        overall *= g;
    }

    article.relevance_scores = policyradar_common::RelevanceScores {
        policy_relevance: policy,
        source_reliability: reliability,
        recency,
        sector_specificity: sector_score,
        overall: overall.clamp(0.0, 1.0),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn scored(title: &str, summary: &str, source: &str, category: &str) -> Article {
        let mut article = Article::new(title, "https://example.com/a", source, category)
            .with_summary(summary);
        article.published_date = Some(now() - Duration::hours(6));
        score_article(&mut article, now());
        article
    }

    #[test]
    fn government_article_scores_high() {
        let article = scored(
            "Cabinet approves new Data Protection Rules",
            "The Union Cabinet approved rules under India's data protection law.",
            "Press Information Bureau",
            "Policy News",
        );
        assert!(article.relevance_scores.overall >= 0.8, "overall = {}", article.relevance_scores.overall);
        assert_eq!(article.category, "Technology Policy");
    }

    #[test]
    fn all_scores_in_unit_interval() {
        for (title, summary) in [
            ("Cabinet approves new Data Protection Rules", "Rules under the act."),
            ("Cricket final tonight in Mumbai stadium", "Match report and scores."),
            ("About Us", ""),
            ("U.S. Senate passes AI Bill", "Washington lawmakers act."),
        ] {
            let article = scored(title, summary, "The Hindu", "Policy News");
            let s = article.relevance_scores;
            for v in [s.policy_relevance, s.source_reliability, s.recency, s.sector_specificity, s.overall] {
                assert!((0.0..=1.0).contains(&v), "{title}: {v}");
            }
        }
    }

    #[test]
    fn government_relaxation_floor() {
        let article = scored(
            "Ministry notifies revised guidelines for state schemes in India",
            "The ministry issued the notification today.",
            "Ministry of Finance",
            "Economic Policy",
        );
        assert!(article.relevance_scores.overall >= 0.4, "overall = {}", article.relevance_scores.overall);
    }

    #[test]
    fn high_impact_government_article_floors_at_point_eight() {
        let article = scored(
            "Parliament passes ordinance; cabinet sets nationwide compliance deadline",
            "A constitutional amendment for India is cleared.",
            "Press Information Bureau",
            "Policy News",
        );
        assert!(article.relevance_scores.overall >= 0.8);
    }

    #[test]
    fn foreign_context_attenuated_to_a_tenth() {
        let foreign = scored(
            "U.S. Senate passes AI Bill",
            "Washington moves on American technology regulation.",
            "Reuters India",
            "Policy News",
        );
        assert!(
            foreign.relevance_scores.overall <= 0.15,
            "overall = {}",
            foreign.relevance_scores.overall
        );

        let domestic = scored(
            "Parliament of India passes AI Bill",
            "New Delhi moves on technology regulation.",
            "Reuters India",
            "Policy News",
        );
        assert!(
            foreign.relevance_scores.overall <= 0.1 * domestic.relevance_scores.overall + 1e-9,
            "foreign {} vs domestic {}",
            foreign.relevance_scores.overall,
            domestic.relevance_scores.overall
        );
    }

    #[test]
    fn congress_disambiguation() {
        let g = geographic_multiplier("congress leaders meet in washington over u.s. spending");
        assert_eq!(g, 0.1);
        let g = geographic_multiplier("congress leaders meet in delhi over india alliance");
        assert_eq!(g, 1.0);
        // Bare "congress" with no geography stays ambiguous, not foreign
        let g = geographic_multiplier("congress spokesperson issues statement on the bill");
        assert_eq!(g, 0.8);
    }

    #[test]
    fn organizational_titles_filtered_unless_policy_indicator() {
        assert!(is_organizational_content("About Us"));
        assert!(is_organizational_content("Privacy Policy"));
        assert!(!is_organizational_content("Privacy Policy Amendment Bill introduced"));
        assert!(!is_organizational_content("Cabinet approves rules"));
    }

    #[test]
    fn organizational_government_item_scores_low_policy() {
        let article = scored(
            "Disclaimer",
            "",
            "Ministry of Finance",
            "Economic Policy",
        );
        assert!(article.relevance_scores.policy_relevance <= 0.1 + 1e-9);
    }

    #[test]
    fn entertainment_text_excluded_for_non_government() {
        let article = scored(
            "Bollywood actor spotted at box office event with celebrity friends",
            "Trailer, red carpet, gossip and paparazzi coverage of the film.",
            "Some Portal",
            "General News",
        );
        assert!(
            article.relevance_scores.policy_relevance < 0.15,
            "policy = {}",
            article.relevance_scores.policy_relevance
        );
    }

    #[test]
    fn exception_keywords_protect_policy_stories_in_noisy_sections() {
        let article = scored(
            "GST ruling on cricket match tickets: court order changes taxation",
            "The tournament organisers must comply with the government order on gst.",
            "Economic Times",
            "Policy News",
        );
        assert!(article.relevance_scores.policy_relevance > 0.3);
    }

    #[test]
    fn sector_reassignment_requires_generic_category() {
        let mut article = Article::new(
            "Ministry notifies data protection and cybersecurity rules",
            "https://example.com/a",
            "MeitY",
            "Healthcare Policy",
        )
        .with_summary("Digital privacy regulation for the internet sector in India.");
        article.published_date = Some(now() - Duration::hours(2));
        score_article(&mut article, now());
        // Non-generic category is preserved even with a strong sector signal
        assert_eq!(article.category, "Healthcare Policy");
        assert!(article.relevance_scores.sector_specificity > 0.2);
    }

    #[test]
    fn no_core_trigger_means_zero_sector_score() {
        assert!(sector_specificity("sunny weather expected across the region today").is_none());
    }

    #[test]
    fn recency_ladder() {
        let now = now();
        assert_eq!(recency_score(Some(now - Duration::hours(5)), SourceType::Other, now), 1.0);
        assert_eq!(recency_score(Some(now - Duration::hours(48)), SourceType::Other, now), 0.9);
        assert_eq!(recency_score(Some(now - Duration::hours(150)), SourceType::Other, now), 0.7);
        assert_eq!(recency_score(Some(now - Duration::days(30)), SourceType::Other, now), 0.5);
        assert_eq!(recency_score(None, SourceType::Government, now), 0.8);
        assert_eq!(recency_score(None, SourceType::Other, now), 0.4);
    }
}
