/// Trim the way author-facing JSON is trimmed everywhere else on the site: Unicode whitespace
/// plus the byte-order mark, which `str::trim` keeps.
pub fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
