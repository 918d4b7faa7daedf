//! Source quality tiers and reliability ratings, matched by name substring.

/// Curated reliability ratings on a 1–5 scale. Matched case-insensitively by
/// substring; the classifier divides by 5 and defaults to 0.5 when unmatched.
const RELIABILITY: &[(&str, f64)] = &[
    // Government sources
    ("press information bureau", 5.0),
    ("pib", 5.0),
    ("reserve bank of india", 5.0),
    ("rbi", 5.0),
    ("supreme court of india", 5.0),
    ("ministry of", 5.0),
    ("department of", 5.0),
    ("trai", 5.0),
    ("sebi", 5.0),
    ("gazette of india", 5.0),
    ("lok sabha", 5.0),
    ("rajya sabha", 5.0),
    ("niti aayog", 5.0),
    // Think tanks and research organizations
    ("prs legislative research", 4.5),
    ("observer research foundation", 4.5),
    ("orf", 4.5),
    ("centre for policy research", 4.5),
    ("cpr india", 4.5),
    ("takshashila", 4.5),
    ("idfc institute", 4.5),
    ("carnegie india", 4.5),
    ("gateway house", 4.5),
    // Legal reporting
    ("livelaw", 4.5),
    ("bar and bench", 4.5),
    ("scc online", 4.5),
    // Tech policy specialists
    ("internet freedom foundation", 4.5),
    ("iff", 4.5),
    ("medianama", 4.0),
    ("entrackr", 3.5),
    // Policy-focused media
    ("the hindu", 4.0),
    ("indian express", 4.0),
    ("mint", 4.0),
    ("livemint", 4.0),
    ("business standard", 4.0),
    ("economic times", 4.0),
    ("financial express", 4.0),
    ("hindu business line", 4.0),
    ("the print", 4.0),
    ("the wire", 4.0),
    ("scroll", 4.0),
    ("down to earth", 4.0),
    // Industry associations
    ("nasscom", 4.0),
    ("ficci", 4.0),
    ("cii", 4.0),
    ("iamai", 4.0),
    ("assocham", 4.0),
    // General news
    ("times of india", 3.5),
    ("ndtv", 3.5),
    ("india today", 3.5),
    ("hindustan times", 3.5),
    ("news18", 3.5),
    ("the news minute", 3.5),
    ("firstpost", 3.5),
    // Aggregator
    ("google news", 3.0),
];

/// Rating on the 1–5 scale, or None when no table entry matches.
pub fn reliability_rating(source_name: &str) -> Option<f64> {
    let name = source_name.to_lowercase();
    RELIABILITY.iter().find(|(marker, _)| name.contains(marker)).map(|(_, r)| *r)
}

const TIER1: &[&str] = &[
    "pib", "press information bureau", "meity", "rbi", "reserve bank", "supreme court", "sebi",
    "ministry", "trai", "niti aayog",
];
const TIER2: &[&str] = &["prs", "medianama", "livelaw", "bar and bench", "iff", "orf", "internet freedom"];
const TIER3: &[&str] = &["the hindu", "indian express", "economic times", "livemint", "mint", "business standard"];

/// Source quality tier 1..=4 by name substring; 4 when nothing matches.
pub fn source_tier(source_name: &str) -> u8 {
    let name = source_name.to_lowercase();
    if TIER1.iter().any(|m| name.contains(m)) {
        1
    } else if TIER2.iter().any(|m| name.contains(m)) {
        2
    } else if TIER3.iter().any(|m| name.contains(m)) {
        3
    } else {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn government_sources_rate_five() {
        assert_eq!(reliability_rating("Press Information Bureau"), Some(5.0));
        assert_eq!(reliability_rating("Ministry of Electronics & IT"), Some(5.0));
    }

    #[test]
    fn unknown_source_has_no_rating() {
        assert_eq!(reliability_rating("Some Local Blog"), None);
    }

    #[test]
    fn tier_ordering() {
        assert_eq!(source_tier("Press Information Bureau"), 1);
        assert_eq!(source_tier("LiveLaw"), 2);
        assert_eq!(source_tier("The Hindu National"), 3);
        assert_eq!(source_tier("Some Local Blog"), 4);
    }
}
