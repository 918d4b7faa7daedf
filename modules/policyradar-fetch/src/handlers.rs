//! Per-domain request shapers for government sites. Each handler shapes
//! headers, injects site cookies, and may rewrite the URL before dispatch.

use chrono::{Datelike, Utc};
use rand::Rng;

use policyradar_common::extract_host;

/// The shaped request: possibly-rewritten URL plus extra headers and cookies.
#[derive(Debug, Clone, Default)]
pub struct RequestPlan {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub cookies: Vec<(String, String)>,
}

impl RequestPlan {
    /// Dispatch on the URL host. Falls through to the generic government
    /// handler for any `.gov.in`/`.nic.in`/parliament host, then to a plain
    /// pass-through.
    pub fn for_url(url: &str) -> Self {
        let host = extract_host(url);

        if host.contains("pib.gov.in") {
            pib(url)
        } else if host.contains("meity.gov.in") {
            meity(url)
        } else if host.contains("trai.gov.in") {
            trai(url)
        } else if host.contains("rbi.org.in") {
            rbi(url)
        } else if host.contains("sebi.gov.in") {
            sebi(url)
        } else if host.contains("cci.gov.in") {
            asp_net_site(url, "https://www.cci.gov.in/")
        } else if host.contains("loksabha") || host.contains("rajyasabha") || host.contains("sansad")
        {
            parliament(url)
        } else if host.ends_with(".gov.in") || host.ends_with(".nic.in") {
            generic_gov(url, &host)
        } else {
            Self { url: url.to_string(), ..Default::default() }
        }
    }
}

/// PIB serves article permalinks through an ASP.NET page that rejects bare
/// clients; collapse them to the index page, which lists the same releases.
fn pib(url: &str) -> RequestPlan {
    let rewritten = if url.contains("PressReleasePage.aspx") || url.contains("PRID=") {
        "https://pib.gov.in/AllReleasem.aspx".to_string()
    } else {
        url.to_string()
    };

    RequestPlan {
        url: rewritten,
        headers: vec![
            ("Referer".into(), "https://pib.gov.in/indexm.aspx".into()),
            ("X-Requested-With".into(), "XMLHttpRequest".into()),
            ("Accept-Language".into(), "en-IN,en;q=0.9,hi;q=0.8".into()),
        ],
        cookies: vec![("ASP.NET_SessionId".into(), synthetic_session_id())],
    }
}

fn meity(url: &str) -> RequestPlan {
    RequestPlan {
        url: url.to_string(),
        headers: vec![("Referer".into(), "https://www.meity.gov.in/".into())],
        // Drupal bot-check cookie
        cookies: vec![("has_js".into(), "1".into())],
    }
}

/// TRAI archive pages are year-scoped; pin the current year so the listing
/// is never empty in January.
fn trai(url: &str) -> RequestPlan {
    let rewritten = if url.contains("/release-publication") && !url.contains("year=") {
        let sep = if url.contains('?') { '&' } else { '?' };
        format!("{url}{sep}year={}", Utc::now().year())
    } else {
        url.to_string()
    };

    RequestPlan {
        url: rewritten,
        headers: vec![("Referer".into(), "https://www.trai.gov.in/".into())],
        cookies: vec![("has_js".into(), "1".into())],
    }
}

fn rbi(url: &str) -> RequestPlan {
    RequestPlan {
        url: url.to_string(),
        headers: vec![
            ("Referer".into(), "https://rbi.org.in/".into()),
            ("Accept".into(), "application/rss+xml, application/xml, text/xml, */*;q=0.1".into()),
        ],
        cookies: Vec::new(),
    }
}

fn sebi(url: &str) -> RequestPlan {
    asp_net_site(url, "https://www.sebi.gov.in/")
}

fn parliament(url: &str) -> RequestPlan {
    RequestPlan {
        url: url.to_string(),
        headers: vec![
            ("Referer".into(), "https://sansad.in/".into()),
            ("Accept-Language".into(), "en-IN,en;q=0.9,hi;q=0.8".into()),
        ],
        cookies: Vec::new(),
    }
}

fn asp_net_site(url: &str, referer: &str) -> RequestPlan {
    RequestPlan {
        url: url.to_string(),
        headers: vec![("Referer".into(), referer.to_string())],
        cookies: vec![("ASP.NET_SessionId".into(), synthetic_session_id())],
    }
}

fn generic_gov(url: &str, host: &str) -> RequestPlan {
    RequestPlan {
        url: url.to_string(),
        headers: vec![
            ("Referer".into(), format!("https://{host}/")),
            ("Accept-Language".into(), "en-IN,en;q=0.9,hi;q=0.8".into()),
        ],
        cookies: vec![("has_js".into(), "1".into())],
    }
}

/// ASP.NET session IDs are 24 chars from a restricted alphabet.
fn synthetic_session_id() -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz012345";
    let mut rng = rand::rng();
    (0..24).map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pib_permalink_collapses_to_index() {
        let plan = RequestPlan::for_url("https://pib.gov.in/PressReleasePage.aspx?PRID=1234567");
        assert_eq!(plan.url, "https://pib.gov.in/AllReleasem.aspx");
        assert!(plan.cookies.iter().any(|(k, _)| k == "ASP.NET_SessionId"));
    }

    #[test]
    fn pib_index_passes_through() {
        let plan = RequestPlan::for_url("https://pib.gov.in/AllReleasem.aspx");
        assert_eq!(plan.url, "https://pib.gov.in/AllReleasem.aspx");
    }

    #[test]
    fn trai_archive_gets_current_year() {
        let plan = RequestPlan::for_url("https://www.trai.gov.in/release-publication/releases");
        assert!(plan.url.contains(&format!("year={}", Utc::now().year())));
    }

    #[test]
    fn meity_carries_drupal_cookie() {
        let plan = RequestPlan::for_url("https://www.meity.gov.in/whatsnew");
        assert!(plan.cookies.contains(&("has_js".to_string(), "1".to_string())));
    }

    #[test]
    fn generic_gov_host_gets_same_origin_referer() {
        let plan = RequestPlan::for_url("https://agricoop.gov.in/en/whatsnew");
        let referer = plan.headers.iter().find(|(k, _)| k == "Referer").map(|(_, v)| v.clone());
        assert_eq!(referer.as_deref(), Some("https://agricoop.gov.in/"));
    }

    #[test]
    fn non_government_url_is_untouched() {
        let plan = RequestPlan::for_url("https://www.livemint.com/rss/economy");
        assert_eq!(plan.url, "https://www.livemint.com/rss/economy");
        assert!(plan.headers.is_empty());
        assert!(plan.cookies.is_empty());
    }

    #[test]
    fn session_ids_have_aspnet_shape() {
        let id = synthetic_session_id();
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
