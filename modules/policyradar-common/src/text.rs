use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b").expect("valid regex"));

/// Trailing boilerplate that feed summaries drag along from article footers.
static BOILERPLATE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(Follow|Like|Share on|View on) (Twitter|Facebook|LinkedIn|Instagram|YouTube).*",
        r"(?i)For all the latest.*",
        r"(?i)Click here to read.*",
        r"(?i)Download the app.*",
        r"(?i)Subscribe to our newsletter.*",
        r"(?i)Read more at.*",
        r"(?i)Read the full story.*",
        r"(?i)This article first appeared.*",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

const STOPWORDS: &[&str] = &[
    "about", "after", "against", "also", "been", "before", "being", "below", "between", "both",
    "could", "down", "during", "from", "have", "india", "indian", "into", "more", "most", "other",
    "over", "said", "says", "some", "such", "than", "that", "their", "them", "then", "there",
    "these", "they", "this", "those", "through", "under", "until", "were", "what", "when", "where",
    "which", "while", "will", "with", "would", "your",
];

/// Strip markup from a feed summary or description down to plain text.
/// Removes tags, collapses whitespace, and trims common footer boilerplate.
pub fn strip_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }
    let text = TAG_RE.replace_all(html, " ");
    let mut text = WS_RE.replace_all(&text, " ").trim().to_string();
    for re in BOILERPLATE_RES.iter() {
        text = re.replace_all(&text, "").to_string();
    }
    text.trim().to_string()
}

/// Frequency-ranked lowercase keywords, alphabetic tokens of 4+ chars,
/// stopword-filtered, capped at `max`.
pub fn extract_keywords(text: &str, max: usize) -> Vec<String> {
    let stopwords: HashSet<&str> = STOPWORDS.iter().copied().collect();
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for m in WORD_RE.find_iter(&lowered) {
        let word = m.as_str();
        if stopwords.contains(word) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    // Stable ordering: by frequency descending, first occurrence breaking ties
    let mut ranked: Vec<&str> = order;
    ranked.sort_by_key(|w| std::cmp::Reverse(counts[w]));
    ranked.into_iter().take(max).map(|w| w.to_string()).collect()
}

/// Jaccard similarity over lowercase word sets. Used for cross-run
/// near-duplicate suppression.
pub fn title_jaccard(a: &str, b: &str) -> f64 {
    let set_a: HashSet<String> = a.to_lowercase().split_whitespace().map(String::from).collect();
    let set_b: HashSet<String> = b.to_lowercase().split_whitespace().map(String::from).collect();
    if set_a.is_empty() || set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count() as f64;
    let union = set_a.union(&set_b).count() as f64;
    intersection / union
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        let html = "<p>Cabinet  approves <b>new</b>\n rules</p>";
        assert_eq!(strip_html(html), "Cabinet approves new rules");
    }

    #[test]
    fn strips_footer_boilerplate() {
        let html = "<p>RBI issues circular. For all the latest business news, download our app.</p>";
        assert_eq!(strip_html(html), "RBI issues circular.");
    }

    #[test]
    fn keywords_ranked_by_frequency() {
        let text = "policy policy policy regulation regulation cabinet";
        let kw = extract_keywords(text, 10);
        assert_eq!(kw, vec!["policy", "regulation", "cabinet"]);
    }

    #[test]
    fn keywords_respect_cap_and_stopwords() {
        let text = "which ministry will notify rules about spectrum allocation this year";
        let kw = extract_keywords(text, 3);
        assert_eq!(kw.len(), 3);
        assert!(!kw.contains(&"which".to_string()));
        assert!(!kw.contains(&"about".to_string()));
    }

    #[test]
    fn jaccard_identical_titles() {
        assert!((title_jaccard("Cabinet approves data rules", "cabinet approves data rules") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn jaccard_disjoint_titles() {
        assert_eq!(title_jaccard("monsoon update", "spectrum auction"), 0.0);
    }
}
