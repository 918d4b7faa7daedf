//! HTML extraction cascade: site-specific selectors, then generic patterns,
//! then heading-anchored links, then keyword links on pure-text pages.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};
use url::Url;

use policyradar_common::{Article, DateSource};

use crate::dates::parse_flexible;
use crate::filters::{has_link_keyword, is_entertainment_url};
use crate::MAX_PER_PAGE;

const MIN_TITLE_LEN: usize = 10;
const MIN_HEADING_TITLE_LEN: usize = 15;

/// One site-specific extraction rule. Data, not code, so the table can be
/// tested and extended without touching the cascade.
#[derive(Debug, Clone, Copy)]
pub struct SiteSelectors {
    /// Matched against the page host and the source name, lowercased.
    pub pattern: &'static str,
    pub container: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub link: &'static str,
}

#[rustfmt::skip]
pub const SITE_SELECTORS: &[SiteSelectors] = &[
    SiteSelectors { pattern: "pib.gov.in", container: ".content-area article, .listing tr, .release-content li", title: "h3, a", summary: "p", link: "a" },
    SiteSelectors { pattern: "meity.gov.in", container: ".view-content .views-row", title: "a", summary: "p", link: "a" },
    SiteSelectors { pattern: "cci.gov.in", container: "table tr, .press-release-item", title: "td a, h3", summary: "td:nth-child(2), p", link: "a" },
    SiteSelectors { pattern: "trai.gov.in", container: "table tr", title: "td a", summary: "td", link: "td a" },
    SiteSelectors { pattern: "prsindia.org", container: ".view-content .views-row, .bill-listing-item", title: "h2, h3, .field-content a", summary: ".listing-desc, .field-content p", link: "a" },
    SiteSelectors { pattern: "livelaw", container: ".post, article, .post-box", title: "h3, h2, .title, a", summary: ".post-content p, .summary, .excerpt", link: "a" },
    SiteSelectors { pattern: "barandbench", container: "article, .post, .card", title: "h2, h3, .title", summary: "p, .excerpt", link: "a" },
    SiteSelectors { pattern: "thehindu", container: ".story-card, .story-card-33, article", title: "h2, h3, .title, a.story-card-33-heading", summary: "p, .story-card-33-info, .summary", link: "a" },
    SiteSelectors { pattern: "indianexpress", container: "article, .articles > div, .ie-first-story", title: "h2, h3, .title, .heading", summary: "p, .synopsis, .excerpt", link: "a" },
    SiteSelectors { pattern: "economictimes", container: ".eachStory, .story-card, article", title: "h3, .title, .story-title", summary: ".desc, p, .summary", link: "a" },
    SiteSelectors { pattern: "livemint", container: ".cardHolder, .story-list, article", title: "h2, .headline, .title", summary: ".synopsis, p, .summary", link: "a" },
    SiteSelectors { pattern: "medianama", container: "article, .post, .grid-post", title: "h2, h3, .title", summary: "p, .excerpt", link: "a" },
    SiteSelectors { pattern: "internetfreedom", container: "article, .post, .blog-post", title: "h2, h3, .title", summary: "p, .excerpt", link: "a" },
];

/// Generic patterns tried in decreasing specificity. Each anchor is one
/// candidate.
const GENERIC_SELECTORS: &[&str] = &[
    "article a[href]",
    ".news-item a[href]",
    ".article-title a[href]",
    ".story-card a[href]",
    "h2 a[href]",
    "h3 a[href]",
];

static DATE_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)date|time|published|created").expect("valid regex"));

fn sel(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid selector")
}

fn element_text(el: ElementRef) -> String {
    el.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve a possibly-relative href against the page URL.
fn resolve_url(href: &str, page_url: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    Url::parse(page_url).ok()?.join(href).ok().map(|u| u.to_string())
}

fn has_date_class(el: ElementRef) -> bool {
    el.value().classes().any(|c| DATE_CLASS_RE.is_match(c))
}

fn date_from_attrs(el: ElementRef) -> Option<chrono::NaiveDateTime> {
    for attr in ["datetime", "data-date", "data-time", "data-published"] {
        if let Some(value) = el.value().attr(attr) {
            if let Some(date) = parse_flexible(value) {
                return Some(date);
            }
        }
    }
    None
}

/// Element-level date strategies: attributes on the element or a descendant,
/// then up to three ancestors with a date-like class, then siblings.
fn date_near_element(el: ElementRef) -> Option<(chrono::NaiveDateTime, DateSource)> {
    static ATTR_SEL: LazyLock<Selector> = LazyLock::new(|| {
        sel("[datetime], [data-date], [data-time], [data-published], time")
    });

    if let Some(date) = date_from_attrs(el) {
        return Some((date, DateSource::Attribute));
    }
    for child in el.select(&ATTR_SEL) {
        if let Some(date) = date_from_attrs(child).or_else(|| parse_flexible(&element_text(child))) {
            return Some((date, DateSource::Attribute));
        }
    }

    for ancestor in el.ancestors().take(3) {
        let Some(ancestor_el) = ElementRef::wrap(ancestor) else { continue };
        if has_date_class(ancestor_el) {
            if let Some(date) =
                date_from_attrs(ancestor_el).or_else(|| parse_flexible(&element_text(ancestor_el)))
            {
                return Some((date, DateSource::Ancestor));
            }
        }
    }

    let siblings = el.prev_siblings().chain(el.next_siblings());
    for sibling in siblings {
        let Some(sibling_el) = ElementRef::wrap(sibling) else { continue };
        if has_date_class(sibling_el) {
            if let Some(date) =
                date_from_attrs(sibling_el).or_else(|| parse_flexible(&element_text(sibling_el)))
            {
                return Some((date, DateSource::Sibling));
            }
        }
    }

    None
}

struct Candidate {
    title: String,
    href: String,
    summary: String,
    date: Option<(chrono::NaiveDateTime, DateSource)>,
}

fn site_specific(doc: &Html, host: &str, source: &str) -> Vec<Candidate> {
    let source_lower = source.to_lowercase();
    let Some(site) = SITE_SELECTORS
        .iter()
        .find(|s| host.contains(s.pattern) || source_lower.contains(s.pattern))
    else {
        return Vec::new();
    };

    let container_sel = sel(site.container);
    let title_sel = sel(site.title);
    let summary_sel = sel(site.summary);
    let link_sel = sel(site.link);

    let mut out = Vec::new();
    for container in doc.select(&container_sel) {
        let Some(title_el) = container.select(&title_sel).next() else { continue };
        let title = element_text(title_el);

        // A title element that is itself the anchor carries the href
        let href = title_el
            .value()
            .attr("href")
            .map(str::to_string)
            .or_else(|| {
                container
                    .select(&link_sel)
                    .find_map(|a| a.value().attr("href").map(str::to_string))
            });
        let Some(href) = href else { continue };

        let summary = container
            .select(&summary_sel)
            .map(element_text)
            .find(|s| !s.is_empty() && *s != title)
            .unwrap_or_default();

        let date = date_near_element(container);
        out.push(Candidate { title, href, summary, date });
    }
    out
}

fn generic(doc: &Html) -> Vec<Candidate> {
    for selector in GENERIC_SELECTORS {
        let anchors: Vec<_> = doc.select(&sel(selector)).collect();
        if anchors.len() < 2 {
            continue;
        }
        debug!(selector, count = anchors.len(), "Generic selector matched");
        return anchors
            .into_iter()
            .filter_map(|a| {
                let href = a.value().attr("href")?.to_string();
                Some(Candidate {
                    title: element_text(a),
                    href,
                    summary: String::new(),
                    date: date_near_element(a),
                })
            })
            .collect();
    }
    Vec::new()
}

fn heading_anchored(doc: &Html) -> Vec<Candidate> {
    let heading_sel = sel("h1, h2, h3");
    let anchor_sel = sel("a[href]");

    doc.select(&heading_sel)
        .filter_map(|heading| {
            let anchor = heading.select(&anchor_sel).next()?;
            let title = element_text(heading);
            if title.len() < MIN_HEADING_TITLE_LEN {
                return None;
            }
            Some(Candidate {
                title,
                href: anchor.value().attr("href")?.to_string(),
                summary: String::new(),
                date: date_near_element(heading),
            })
        })
        .collect()
}

fn keyword_links(doc: &Html) -> Vec<Candidate> {
    let anchor_sel = sel("a[href]");
    doc.select(&anchor_sel)
        .filter_map(|a| {
            let href = a.value().attr("href")?;
            let text = element_text(a);
            if !has_link_keyword(href) && !has_link_keyword(&text) {
                return None;
            }
            if text.len() < MIN_HEADING_TITLE_LEN {
                return None;
            }
            Some(Candidate {
                title: text,
                href: href.to_string(),
                summary: String::new(),
                date: date_near_element(a),
            })
        })
        .collect()
}

/// Run the cascade over an HTML page and emit candidate articles.
pub fn extract_from_html(body: &str, page_url: &str, source: &str, category: &str) -> Vec<Article> {
    let doc = Html::parse_document(body);
    let host = policyradar_common::extract_host(page_url);

    let mut candidates = site_specific(&doc, &host, source);
    let mut stage = "site-specific";
    if candidates.is_empty() {
        candidates = generic(&doc);
        stage = "generic";
    }
    if candidates.is_empty() {
        candidates = heading_anchored(&doc);
        stage = "heading";
    }
    if candidates.is_empty() {
        candidates = keyword_links(&doc);
        stage = "keyword";
    }

    let mut articles = Vec::new();
    for candidate in candidates {
        if articles.len() >= MAX_PER_PAGE {
            break;
        }
        let title = candidate.title.trim().to_string();
        if title.len() < MIN_TITLE_LEN {
            continue;
        }
        let Some(link) = resolve_url(&candidate.href, page_url) else { continue };
        if !link.starts_with("http") || is_entertainment_url(&link) {
            continue;
        }

        let summary = if candidate.summary.trim().len() >= 20 {
            candidate.summary.trim().to_string()
        } else {
            format!("Policy news from {source}")
        };

        let mut article = Article::new(title, link, source, category).with_summary(summary);
        if let Some((date, date_source)) = candidate.date {
            article.published_date = Some(date);
            article.metadata.date_source = date_source;
        }
        articles.push(article);
    }

    info!(source, stage, count = articles.len(), "HTML extraction complete");
    articles
}
