//! Final ordering: importance, timeliness, and a source-tier bonus combined
//! into one ranking score, sorted descending.

use chrono::NaiveDateTime;

use policyradar_common::Article;
use policyradar_sources::tiers::source_tier;

/// Weighted combination of the sub-scores that outlive a single run.
pub fn importance(article: &Article) -> f64 {
    let s = &article.relevance_scores;
    0.4 * s.policy_relevance + 0.3 * s.source_reliability + 0.3 * s.sector_specificity
}

/// Decay ladder over article age; zero when undated.
pub fn timeliness(article: &Article, now: NaiveDateTime) -> f64 {
    let Some(published) = article.published_date else {
        return 0.0;
    };
    let hours = (now - published).num_minutes() as f64 / 60.0;
    if hours <= 6.0 {
        1.0
    } else if hours <= 24.0 {
        0.8
    } else if hours <= 72.0 {
        0.6
    } else if hours <= 168.0 {
        0.4
    } else if hours <= 336.0 {
        0.2
    } else {
        0.1
    }
}

/// Tier 1 (official) through 4 (other) mapped onto a [0.25, 1.0] bonus.
pub fn tier_bonus(article: &Article) -> f64 {
    let tier = source_tier(&article.source);
    (5.0 - tier as f64) / 4.0
}

/// The final relevance score used for ordering.
pub fn ranking_score(article: &Article, now: NaiveDateTime) -> f64 {
    0.6 * importance(article) + 0.3 * timeliness(article, now) + 0.1 * tier_bonus(article)
}

/// Sort survivors by ranking score, highest first.
pub fn rank(mut articles: Vec<Article>, now: NaiveDateTime) -> Vec<Article> {
    articles.sort_by(|a, b| {
        ranking_score(b, now)
            .partial_cmp(&ranking_score(a, now))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use policyradar_common::RelevanceScores;

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn article(source: &str, policy: f64, age_hours: i64) -> Article {
        let mut a = Article::new(
            format!("Article from {source}"),
            format!("https://example.com/{policy}"),
            source,
            "Policy News",
        );
        a.published_date = Some(now() - Duration::hours(age_hours));
        a.relevance_scores = RelevanceScores {
            policy_relevance: policy,
            source_reliability: 0.8,
            recency: 1.0,
            sector_specificity: 0.5,
            overall: policy,
        };
        a
    }

    #[test]
    fn output_sorted_non_increasing() {
        let articles = vec![
            article("Blog A", 0.2, 100),
            article("Press Information Bureau", 0.9, 2),
            article("The Hindu", 0.6, 20),
            article("LiveLaw", 0.7, 50),
        ];
        let ranked = rank(articles, now());
        let scores: Vec<f64> = ranked.iter().map(|a| ranking_score(a, now())).collect();
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1] - 1e-9, "not sorted: {scores:?}");
        }
        assert_eq!(ranked[0].source, "Press Information Bureau");
    }

    #[test]
    fn timeliness_ladder() {
        let fresh = article("X", 0.5, 2);
        let day_old = article("X", 0.5, 20);
        let week_old = article("X", 0.5, 150);
        let ancient = article("X", 0.5, 400);
        let now = now();
        assert_eq!(timeliness(&fresh, now), 1.0);
        assert_eq!(timeliness(&day_old, now), 0.8);
        assert_eq!(timeliness(&week_old, now), 0.4);
        assert_eq!(timeliness(&ancient, now), 0.1);
    }

    #[test]
    fn undated_article_has_zero_timeliness() {
        let mut a = article("X", 0.5, 2);
        a.published_date = None;
        assert_eq!(timeliness(&a, now()), 0.0);
    }

    #[test]
    fn tier_bonus_rewards_official_sources() {
        let official = article("Press Information Bureau", 0.5, 2);
        let other = article("Unknown Blog", 0.5, 2);
        assert_eq!(tier_bonus(&official), 1.0);
        assert_eq!(tier_bonus(&other), 0.25);
    }
}
