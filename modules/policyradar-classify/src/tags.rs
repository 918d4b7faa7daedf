//! Tag assignment, independent of scoring. First-wins semantics, deduplicated,
//! capped at four tags.

const MAX_TAGS: usize = 4;

/// Short-circuit: items about household money get a single tag and no policy
/// tag scan.
const PERSONAL_FINANCE_INDICATORS: &[&str] = &[
    "personal finance",
    "mutual fund",
    "fixed deposit",
    "credit card",
    "home loan",
    "emi",
    "income tax return",
    "itr filing",
    "retirement planning",
    "sip ",
];

/// At least one of these must appear or the item is tagged General News.
const POLICY_CONTEXT_INDICATORS: &[&str] = &[
    "policy",
    "government",
    "ministry",
    "regulation",
    "regulatory",
    "parliament",
    "court",
    "official",
    "bill",
    "act",
    "scheme",
    "notification",
];

/// Strong indicators of India-Pakistan conflict coverage.
const CONFLICT_KEYWORDS: &[&str] = &[
    "operation sindoor",
    "india-pakistan",
    "indo-pak",
    "pakistan conflict",
    "pakistan tension",
    "pakistan ceasefire",
    "pakistan border",
    "pakistan military",
    "pakistan war",
];

/// "pakistan" plus any of these also marks conflict coverage.
const CONFLICT_CONTEXT: &[&str] = &[
    "border", "military", "attack", "conflict", "tension", "war", "ceasefire", "diplomatic",
    "security", "threat", "defense", "defence",
];

struct TagRule {
    tag: &'static str,
    keywords: &'static [&'static str],
}

#[rustfmt::skip]
const TAG_RULES: &[TagRule] = &[
    TagRule { tag: "Policy Analysis", keywords: &[
        "analysis", "study", "report", "research", "survey", "findings",
        "impact assessment", "evaluation", "review", "recommends", "proposes", "examines",
    ]},
    TagRule { tag: "Legislative Updates", keywords: &[
        "bill", "act", "parliament", "amendment", "legislation",
        "rajya sabha", "lok sabha", "ordinance", "passed", "enacted", "introduced", "tabled",
    ]},
    TagRule { tag: "Regulatory Changes", keywords: &[
        "regulation", "rules", "guidelines", "notification", "circular",
        "compliance", "enforcement", "regulatory", "mandate", "mandatory", "standards",
    ]},
    TagRule { tag: "Court Rulings", keywords: &[
        "court", "supreme", "judicial", "judgment", "verdict", "tribunal",
        "hearing", "petition", "bench", "justice", "litigation", "plea", "writ",
    ]},
    TagRule { tag: "Government Initiatives", keywords: &[
        "scheme", "program", "initiative", "launch", "implementation",
        "mission", "flagship", "campaign", "yojana", "announced", "inaugurated", "ministry",
    ]},
    TagRule { tag: "International Relations", keywords: &[
        "bilateral", "diplomatic", "foreign", "international", "treaty",
        "agreement", "pact", "partnership", "strategic", "dialogue", "summit", "delegation",
    ]},
];

/// True when the text reads as India-Pakistan conflict coverage. Crisis items
/// get the lower acceptance threshold.
pub fn is_crisis_content(title: &str, summary: &str) -> bool {
    let text = format!("{} {}", title, summary).to_lowercase();
    if CONFLICT_KEYWORDS.iter().any(|k| text.contains(k)) {
        return true;
    }
    text.contains("pakistan") && CONFLICT_CONTEXT.iter().any(|k| text.contains(k))
}

/// Assign up to four tags, first occurrence wins.
pub fn assign_tags(title: &str, summary: &str) -> Vec<String> {
    let text = format!("{} {}", title, summary).to_lowercase();

    if PERSONAL_FINANCE_INDICATORS.iter().any(|k| text.contains(k)) {
        return vec!["Personal Finance".to_string()];
    }

    if !POLICY_CONTEXT_INDICATORS.iter().any(|k| text.contains(k)) {
        return vec!["General News".to_string()];
    }

    let mut tags: Vec<String> = Vec::new();

    if is_crisis_content(title, summary) {
        tags.push("India-Pakistan Conflict".to_string());
    }

    // Two substring hits, or a whole-word match on one of the rule's five
    // strongest keywords, qualify the tag
    let padded = format!(" {} ", text);
    for rule in TAG_RULES {
        let matches = rule.keywords.iter().filter(|k| text.contains(*k)).count();
        let strong_match = rule
            .keywords
            .iter()
            .take(5)
            .any(|k| padded.contains(&format!(" {k} ")));
        if matches >= 2 || strong_match {
            tags.push(rule.tag.to_string());
        }
    }

    if tags.is_empty() {
        tags.push("Policy Development".to_string());
    }

    // First-wins dedupe, capped
    let mut seen = std::collections::HashSet::new();
    tags.retain(|t| seen.insert(t.clone()));
    tags.truncate(MAX_TAGS);
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_finance_short_circuits() {
        let tags = assign_tags("Best mutual fund strategies under the new tax regulation", "");
        assert_eq!(tags, vec!["Personal Finance"]);
    }

    #[test]
    fn no_policy_context_means_general_news() {
        let tags = assign_tags("City braces for heavy weekend rainfall", "Traffic advisories issued.");
        assert_eq!(tags, vec!["General News"]);
    }

    #[test]
    fn legislative_and_regulatory_tags_stack() {
        let tags = assign_tags(
            "Parliament passes amendment bill; new rules and compliance guidelines notified",
            "The legislation was tabled and enacted this session.",
        );
        assert!(tags.contains(&"Legislative Updates".to_string()));
        assert!(tags.contains(&"Regulatory Changes".to_string()));
        assert!(tags.len() <= 4);
    }

    #[test]
    fn default_tag_when_rules_miss() {
        // "ministry" supplies policy context but no rule reaches two hits and
        // no strong keyword appears as a whole word
        let tags = assign_tags("Ministry convenes weekly coordination meeting", "");
        assert_eq!(tags, vec!["Policy Development"]);
    }

    #[test]
    fn single_strong_keyword_qualifies_tag() {
        // One whole-word hit on a rule's strongest keywords is enough
        let tags = assign_tags("High court stays GST notification on event tickets", "");
        assert!(tags.contains(&"Court Rulings".to_string()), "tags = {tags:?}");
        assert!(tags.contains(&"Regulatory Changes".to_string()), "tags = {tags:?}");
    }

    #[test]
    fn crisis_tag_comes_first() {
        let tags = assign_tags(
            "India-Pakistan ceasefire violation reported at the border",
            "The government issued an official statement on the military situation.",
        );
        assert_eq!(tags[0], "India-Pakistan Conflict");
    }

    #[test]
    fn crisis_detection_needs_context() {
        assert!(is_crisis_content("Pakistan border tension rises", ""));
        assert!(!is_crisis_content("Pakistan cricket team arrives for series", ""));
    }

    #[test]
    fn tags_are_deduplicated_and_capped() {
        let tags = assign_tags(
            "Parliament bill act amendment legislation court supreme judgment verdict scheme \
             program initiative launch regulation rules guidelines notification bilateral \
             diplomatic foreign treaty analysis study report research",
            "",
        );
        assert!(tags.len() <= 4);
        let unique: std::collections::HashSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
    }
}
