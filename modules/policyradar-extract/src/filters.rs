//! URL-level filters applied before an HTML candidate is worth scoring.

/// Consumer-tech, lifestyle, gaming, sports, and celebrity sections. Items
/// under these paths never survive classification, so drop them early.
const ENTERTAINMENT_URL_MARKERS: &[&str] = &[
    "/wearables/news/",
    "gadgets360.com",
    "/htcity/",
    "pokemon-",
    "/entertainment/",
    "/bollywood/",
    "/celebrity",
    "/lifestyle/",
    "/gaming/",
    "/games/",
    "/sports/",
    "/cricket/",
    "/ipl/",
    "/astrology/",
    "/horoscope",
    "/recipes/",
    "/food-wine/",
    "/travel-tourism/",
    "/web-series/",
    "/movie-review",
    "/box-office",
    "/viral-",
    "/trending/viral",
    "/auto/reviews/",
    "/mobiles/review",
];

/// True when the host or path marks a consumer/entertainment section.
pub fn is_entertainment_url(url: &str) -> bool {
    let lowered = url.to_lowercase();
    ENTERTAINMENT_URL_MARKERS.iter().any(|m| lowered.contains(m))
}

/// Anchor keywords that identify article links on pure-text listing pages.
pub const LINK_KEYWORDS: &[&str] =
    &["press", "release", "news", "notification", "circular", "update", "announcement"];

pub fn has_link_keyword(text: &str) -> bool {
    let lowered = text.to_lowercase();
    LINK_KEYWORDS.iter().any(|k| lowered.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entertainment_paths_rejected() {
        assert!(is_entertainment_url("https://www.hindustantimes.com/htcity/cinema/x"));
        assert!(is_entertainment_url("https://www.gadgets360.com/wearables/news/y"));
        assert!(is_entertainment_url("https://example.com/sports/cricket-final"));
    }

    #[test]
    fn policy_paths_pass() {
        assert!(!is_entertainment_url("https://pib.gov.in/PressReleasePage.aspx?PRID=1"));
        assert!(!is_entertainment_url("https://www.thehindu.com/news/national/article1.ece"));
    }

    #[test]
    fn link_keywords_match() {
        assert!(has_link_keyword("/press-releases/2025"));
        assert!(has_link_keyword("Latest Circular"));
        assert!(!has_link_keyword("/about-the-minister"));
    }
}
