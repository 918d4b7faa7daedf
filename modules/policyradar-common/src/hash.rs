use md5::{Digest, Md5};

/// Deterministic fingerprint over lowercased title and URL.
pub fn content_hash(title: &str, url: &str) -> String {
    let input = format!("{}{}", title.to_lowercase(), url.to_lowercase());
    hex_md5(input.as_bytes())
}

/// Store primary key: the content fingerprint concatenated with the ISO date,
/// so re-observations of the same article on later runs get their own row.
pub fn storage_hash(content_hash: &str, iso_date: &str) -> String {
    let input = format!("{content_hash}{iso_date}");
    hex_md5(input.as_bytes())
}

fn hex_md5(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_case_insensitive() {
        assert_eq!(
            content_hash("Cabinet Approves", "https://pib.gov.in/A"),
            content_hash("cabinet approves", "https://pib.gov.in/a")
        );
    }

    #[test]
    fn fingerprint_is_md5_hex() {
        let h = content_hash("t", "u");
        assert_eq!(h.len(), 32);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn storage_hash_incorporates_date() {
        let base = content_hash("t", "u");
        assert_ne!(storage_hash(&base, "2025-06-01T09:00:00"), storage_hash(&base, ""));
    }
}
