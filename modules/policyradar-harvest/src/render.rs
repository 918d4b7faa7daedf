//! Static-site rendering: index, health dashboard, about page, minimal
//! degraded page, and the JSON API dump.

use chrono::Local;
use serde_json::json;

use policyradar_common::{Article, RunStatistics};
use policyradar_store::HealthReport;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Technology Policy" => "💻",
        "Economic Policy" => "📊",
        "Healthcare Policy" => "🏥",
        "Environmental Policy" => "🌱",
        "Climate Policy" => "🌡️",
        "Renewable Energy Policy" => "⚡",
        "Conservation Policy" => "🦚",
        "Education Policy" => "🎓",
        "Agricultural Policy" => "🌾",
        "Foreign Policy" => "🌐",
        "Constitutional & Legal" => "⚖️",
        "Defence & Security" => "🛡️",
        "Social Policy" => "🤝",
        "Governance & Administration" => "🏛️",
        "Policy Analysis" => "📋",
        "Policy News" => "📑",
        "System Notice" => "⚠️",
        _ => "📄",
    }
}

/// Shared page shell: head, styles, header, footer.
fn build_page(title: &str, content: &str) -> String {
    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} — PolicyRadar</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#1a1a1a;background:#fafafa;line-height:1.5;}}
.header{{background:#1a2a4a;color:#fff;padding:14px 24px;display:flex;align-items:center;justify-content:space-between;}}
.header h1{{font-size:20px;font-weight:600;}}
.header nav a{{color:#cdd6e8;text-decoration:none;margin-left:20px;font-size:14px;}}
.header nav a:hover{{color:#fff;}}
.container{{max-width:1080px;margin:0 auto;padding:24px;}}
.system-notice{{background:#fff8e1;border:1px solid #ffd54f;border-radius:8px;padding:12px 16px;margin-bottom:20px;}}
.category{{margin-bottom:28px;}}
.category h2{{font-size:17px;margin-bottom:10px;border-bottom:1px solid #e0e0e0;padding-bottom:6px;}}
.article-card{{background:#fff;border:1px solid #e0e0e0;border-radius:8px;padding:14px 16px;margin-bottom:10px;}}
.article-card:hover{{border-color:#999;}}
.article-card h3{{font-size:15px;margin-bottom:4px;}}
.article-card h3 a{{color:#1a1a1a;text-decoration:none;}}
.article-card h3 a:hover{{color:#0b5cad;}}
.article-card .meta{{color:#777;font-size:12px;margin-bottom:6px;}}
.article-card .summary{{color:#444;font-size:13px;}}
.tag{{display:inline-block;background:#eef2f8;color:#1a2a4a;border-radius:10px;padding:1px 8px;font-size:11px;margin-right:6px;}}
table{{border-collapse:collapse;width:100%;background:#fff;}}
th,td{{border:1px solid #e0e0e0;padding:8px 10px;font-size:13px;text-align:left;}}
th{{background:#f2f4f8;}}
.score-good{{color:#2e7d32;}}
.score-bad{{color:#c62828;}}
footer{{margin:32px 0 16px;color:#888;font-size:12px;text-align:center;}}
</style>
</head>
<body>
<div class="header">
  <h1>🛰️ PolicyRadar</h1>
  <nav><a href="index.html">Headlines</a><a href="health.html">Feed Health</a><a href="about.html">About</a></nav>
</div>
<div class="container">
{content}
</div>
<footer>&copy; PolicyRadar | Indian policy news, aggregated | Last updated: {stamp}</footer>
</body>
</html>"#
    )
}

/// Degraded-mode banner, selected by feed success rate.
pub fn system_notice(stats: &RunStatistics) -> String {
    if stats.total_feeds == 0 {
        return String::new();
    }
    let rate = stats.success_rate();
    if rate >= 80.0 {
        String::new()
    } else if rate >= 40.0 {
        r#"<div class="system-notice"><p>⚠️ <strong>System Notice:</strong> Some news sources are currently unavailable. We're working to restore full service.</p></div>"#.to_string()
    } else {
        r#"<div class="system-notice"><p>⚠️ <strong>System Notice:</strong> Feed aggregation is experiencing significant issues. Most sources may be temporarily unavailable.</p></div>"#.to_string()
    }
}

fn article_card(article: &Article) -> String {
    let date = article
        .published_date
        .map(|d| d.format("%d %b %Y %H:%M").to_string())
        .unwrap_or_else(|| "recently".to_string());
    let tags: String = article
        .tags
        .iter()
        .map(|t| format!(r#"<span class="tag">{}</span>"#, escape(t)))
        .collect();
    format!(
        r#"<div class="article-card">
<h3><a href="{url}" target="_blank" rel="noopener">{title}</a></h3>
<div class="meta">{source} · {date} · relevance {relevance:.0}%</div>
<div class="summary">{summary}</div>
<div>{tags}</div>
</div>"#,
        url = escape(&article.url),
        title = escape(&article.title),
        source = escape(&article.source),
        relevance = article.relevance_scores.overall * 100.0,
        summary = escape(&article.summary),
    )
}

/// The index page: ranked articles grouped by category, optionally filtered
/// to one category.
pub fn render_index(
    articles: &[Article],
    stats: &RunStatistics,
    category_filter: Option<&str>,
) -> String {
    let mut content = system_notice(stats);

    // Group in rank order: categories appear in order of their best article
    let mut categories: Vec<&str> = Vec::new();
    for article in articles {
        if category_filter.map(|f| f != article.category).unwrap_or(false) {
            continue;
        }
        if !categories.contains(&article.category.as_str()) {
            categories.push(&article.category);
        }
    }

    for category in categories {
        content.push_str(&format!(
            r#"<div class="category"><h2>{} {}</h2>"#,
            category_icon(category),
            escape(category)
        ));
        for article in articles.iter().filter(|a| a.category == category) {
            content.push_str(&article_card(article));
        }
        content.push_str("</div>");
    }

    if content.trim().is_empty() {
        content.push_str("<p>No articles collected in this run. Please check back later.</p>");
    }

    build_page("Indian Policy Headlines", &content)
}

/// The feed-health dashboard.
pub fn render_health(report: &HealthReport, stats: &RunStatistics) -> String {
    let mut rows = String::new();
    for (url, score) in &report.worst {
        let class = if *score >= 0.8 { "score-good" } else { "score-bad" };
        rows.push_str(&format!(
            r#"<tr><td>{}</td><td class="{class}">{:.0}%</td></tr>"#,
            escape(url),
            score * 100.0
        ));
    }

    let content = format!(
        r#"<div class="category"><h2>📡 Feed Health</h2>
<p>Feeds tracked: {total} · active: {active} · healthy (≥80%): {healthy} · unhealthy (&lt;30%): {unhealthy} · average score: {avg:.0}%</p>
<p>This run: {ok}/{attempted} feeds succeeded, {articles} articles collected in {secs}s.</p>
</div>
<div class="category"><h2>Worst-performing feeds</h2>
<table><tr><th>Feed URL</th><th>Health score</th></tr>{rows}</table>
</div>"#,
        total = report.total,
        active = report.active,
        healthy = report.healthy,
        unhealthy = report.unhealthy,
        avg = report.avg_score * 100.0,
        ok = stats.successful_feeds,
        attempted = stats.total_feeds,
        articles = stats.total_articles,
        secs = stats.runtime_seconds(),
    );
    build_page("Feed Health", &content)
}

pub fn render_about() -> String {
    let content = r#"<div class="category"><h2>About PolicyRadar</h2>
<p>PolicyRadar continuously harvests Indian public-policy news from around two hundred
sources: government portals, regulators, legal news sites, think tanks, and mainstream
media. Every item is classified by policy sector, scored for relevance, reliability,
and recency, deduplicated, and ranked.</p>
<p>Classification is rule-based: curated keyword tables decide sector, tags, and
relevance. No machine learning is involved, so every decision is auditable.</p>
<p>Sources that fail repeatedly are rested automatically and retried later; the
<a href="health.html">feed health dashboard</a> shows the current state.</p>
</div>"#;
    build_page("About", content)
}

/// Single-notice page for total-failure mode. The site always renders.
pub fn render_minimal(notice: &Article) -> String {
    let content = format!(
        r#"<div class="system-notice"><h2>{} {}</h2><p>{}</p></div>
<p>Please check back later. We apologise for the inconvenience.</p>"#,
        category_icon(&notice.category),
        escape(&notice.title),
        escape(&notice.summary),
    );
    build_page("System Notice", &content)
}

/// The JSON API dump.
pub fn export_json(articles: &[Article]) -> String {
    let mut categories: Vec<&str> = articles.iter().map(|a| a.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();
    let mut sources: Vec<&str> = articles.iter().map(|a| a.source.as_str()).collect();
    sources.sort_unstable();
    sources.dedup();

    let payload = json!({
        "generated": Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        "total_articles": articles.len(),
        "articles": articles,
        "categories": categories,
        "sources": sources,
    });
    serde_json::to_string_pretty(&payload).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use policyradar_common::RelevanceScores;

    fn article(category: &str) -> Article {
        let mut a = Article::new(
            "Cabinet approves <new> rules",
            "https://pib.gov.in/a?x=1&y=2",
            "Press Information Bureau",
            category,
        )
        .with_summary("Approved today.");
        a.published_date = Some(Local::now().naive_local());
        a.tags = vec!["Regulatory Changes".to_string()];
        a.relevance_scores = RelevanceScores { overall: 0.82, ..Default::default() };
        a
    }

    #[test]
    fn index_escapes_html_and_groups_by_category() {
        let articles = vec![article("Technology Policy"), article("Economic Policy")];
        let html = render_index(&articles, &RunStatistics::new(), None);
        assert!(html.contains("Cabinet approves &lt;new&gt; rules"));
        assert!(html.contains("💻 Technology Policy"));
        assert!(html.contains("📊 Economic Policy"));
        assert!(!html.contains("<new>"));
    }

    #[test]
    fn category_filter_restricts_output() {
        let articles = vec![article("Technology Policy"), article("Economic Policy")];
        let html = render_index(&articles, &RunStatistics::new(), Some("Economic Policy"));
        assert!(html.contains("Economic Policy"));
        assert!(!html.contains("💻 Technology Policy"));
    }

    #[test]
    fn banner_tracks_success_rate() {
        let mut stats = RunStatistics::new();
        stats.total_feeds = 10;
        stats.successful_feeds = 9;
        assert!(system_notice(&stats).is_empty());
        stats.successful_feeds = 5;
        assert!(system_notice(&stats).contains("Some news sources"));
        stats.successful_feeds = 2;
        assert!(system_notice(&stats).contains("significant issues"));
    }

    #[test]
    fn minimal_page_renders_notice() {
        let notice = Article::new(
            "PolicyRadar System Error",
            "#",
            "PolicyRadar System",
            "System Notice",
        )
        .with_summary("Our aggregation system encountered an error.");
        let html = render_minimal(&notice);
        assert!(html.contains("System Error"));
        assert!(html.contains("⚠️"));
    }

    #[test]
    fn json_export_carries_schema_fields() {
        let articles = vec![article("Technology Policy")];
        let json_text = export_json(&articles);
        let value: serde_json::Value = serde_json::from_str(&json_text).unwrap();
        assert_eq!(value["total_articles"], 1);
        assert!(value["generated"].is_string());
        assert_eq!(value["categories"][0], "Technology Policy");
        assert_eq!(value["sources"][0], "Press Information Bureau");
        assert_eq!(value["articles"][0]["relevance_scores"]["overall"], 0.82);
    }
}
