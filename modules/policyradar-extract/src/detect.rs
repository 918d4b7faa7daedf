/// Shape of a fetched body, decided from its leading bytes and the declared
/// content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    Feed,
    Json,
    Html,
}

impl BodyFormat {
    pub fn detect(body: &str, content_type: Option<&str>) -> Self {
        let head = body.trim_start();
        let ct = content_type.unwrap_or("").to_lowercase();

        if head.starts_with("<?xml") || head.starts_with("<rss") || head.starts_with("<feed") {
            return BodyFormat::Feed;
        }
        if ct.contains("xml") || ct.contains("rss") || ct.contains("atom") {
            return BodyFormat::Feed;
        }
        if head.starts_with('{') || head.starts_with('[') || ct.contains("json") {
            return BodyFormat::Json;
        }
        BodyFormat::Html
    }
}
