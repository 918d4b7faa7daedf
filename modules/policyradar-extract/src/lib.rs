pub mod dates;
pub mod detect;
pub mod feed;
pub mod filters;
pub mod html;
pub mod jsonfeed;

pub use detect::BodyFormat;

use policyradar_common::Article;
use tracing::debug;

/// Per-feed candidate cap.
pub const MAX_PER_FEED: usize = 20;
/// Per-HTML-page candidate cap.
pub const MAX_PER_PAGE: usize = 30;

/// Format-detect a fetched body and extract candidate articles. The HTML path
/// is also the fallback when a declared feed turns out to parse empty.
pub fn extract(
    body: &str,
    content_type: Option<&str>,
    source: &str,
    category: &str,
    page_url: &str,
) -> Vec<Article> {
    match BodyFormat::detect(body, content_type) {
        BodyFormat::Feed => {
            let articles = feed::parse_feed(body, source, category);
            if articles.is_empty() {
                debug!(source, "Feed parsed empty, falling through to HTML scraping");
                html::extract_from_html(body, page_url, source, category)
            } else {
                articles
            }
        }
        BodyFormat::Json => jsonfeed::parse_json_feed(body, source, category),
        BodyFormat::Html => html::extract_from_html(body, page_url, source, category),
    }
}
