//! Student profile links: authors write `github.com/me` as often as a full URL.

use super::text::trim_text;

const SCHEMES: [&str; 2] = ["http://", "https://"];

/// Normalize an author-supplied link into something safe to use as an `href`.
/// Empty after trimming means "no link". Only guarantees a scheme; the URL is not checked further.
pub fn normalize_link_url(link: Option<&str>) -> String {
    let trimmed = link.map(trim_text).unwrap_or_default();
    if trimmed.is_empty() {
        return String::new();
    }

    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

pub fn has_http_scheme(link: &str) -> bool {
    SCHEMES.iter().any(|scheme| {
        link.as_bytes()
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme.as_bytes()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_absent_links_render_nothing() {
        assert_eq!(normalize_link_url(None), "");
        assert_eq!(normalize_link_url(Some("")), "");
        assert_eq!(normalize_link_url(Some("   \t")), "");
    }

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(
            normalize_link_url(Some("example.com")),
            "https://example.com"
        );
        assert_eq!(
            normalize_link_url(Some("  github.com/alice  ")),
            "https://github.com/alice"
        );
    }

    #[test]
    fn existing_scheme_is_kept_case_insensitively() {
        assert_eq!(
            normalize_link_url(Some("http://example.com")),
            "http://example.com"
        );
        assert_eq!(normalize_link_url(Some("HTTPS://X.com")), "HTTPS://X.com");
    }

    #[test]
    fn other_schemes_are_prefixed() {
        assert_eq!(
            normalize_link_url(Some("ftp://host")),
            "https://ftp://host"
        );
        assert_eq!(normalize_link_url(Some("é")), "https://é");
    }
}
