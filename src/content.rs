//! Classification and cleanup of raw user content.

use url::Url;

/// Interprets `input` as a web address, if it looks like one.
///
/// Accepts absolute `http`/`https` URLs as well as bare host names with a
/// dot (`example.com/page`, `example.com:8080`), which get an `http://`
/// prefix. A host followed by a port parses as a URL whose scheme is the
/// host, so any non-web scheme gets a second look as a bare host. Anything
/// with inner whitespace is treated as text.
#[must_use]
pub fn as_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return None;
    }

    if let Ok(url) = Url::parse(trimmed) {
        if matches!(url.scheme(), "http" | "https") {
            return url.host_str().is_some().then(|| trimmed.to_string());
        }
    }

    let candidate = format!("http://{trimmed}");
    let url = Url::parse(&candidate).ok()?;
    // `mailto:a@b.org` would otherwise read as credentials on host `b.org`.
    if !url.username().is_empty() || url.password().is_some() {
        return None;
    }
    let host = url.host_str()?;
    let tld_ok = host
        .rsplit('.')
        .next()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));
    (host.contains('.') && tld_ok).then_some(candidate)
}

/// Canonical form of a URL used for deduplication.
///
/// Unparsable input is only trimmed.
#[must_use]
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    Url::parse(trimmed).map_or_else(|_| trimmed.to_string(), String::from)
}

/// Turns plain text into a minimal HTML fragment.
#[must_use]
pub fn text_to_html(text: &str) -> String {
    let mut html = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => html.push_str("&amp;"),
            '<' => html.push_str("&lt;"),
            '>' => html.push_str("&gt;"),
            '"' => html.push_str("&quot;"),
            '\n' => html.push_str("<br>"),
            '\r' => {}
            _ => html.push(c),
        }
    }
    html
}

/// Removes embedded NUL characters, which some clipboards put into HTML.
#[must_use]
pub fn strip_nul(html: &str) -> String {
    html.replace('\0', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_are_recognized() {
        assert_eq!(as_url("https://example.com").as_deref(), Some("https://example.com"));
        assert_eq!(as_url("  http://a.org/x?y=1 ").as_deref(), Some("http://a.org/x?y=1"));
    }

    #[test]
    fn bare_hosts_get_a_scheme() {
        assert_eq!(as_url("rwweb.org").as_deref(), Some("http://rwweb.org"));
        assert_eq!(as_url("www.w3.org/History").as_deref(), Some("http://www.w3.org/History"));
    }

    #[test]
    fn bare_hosts_with_a_port_get_a_scheme() {
        assert_eq!(as_url("example.com:8080").as_deref(), Some("http://example.com:8080"));
        assert_eq!(as_url("rwweb.org:8080/page").as_deref(), Some("http://rwweb.org:8080/page"));
        assert_eq!(
            as_url("www.w3.org:443/History").as_deref(),
            Some("http://www.w3.org:443/History")
        );
    }

    #[test]
    fn scheme_like_text_stays_text() {
        assert_eq!(as_url("todo:buy.milk"), None);
        assert_eq!(as_url("note:hello"), None);
        assert_eq!(as_url("ftp://example.com/file"), None);
    }

    #[test]
    fn text_is_not_a_url() {
        assert_eq!(as_url("hello world"), None);
        assert_eq!(as_url("hello"), None);
        assert_eq!(as_url("v1.2"), None);
        assert_eq!(as_url("mailto:someone@example.com"), None);
        assert_eq!(as_url(""), None);
        assert_eq!(as_url("   "), None);
    }

    #[test]
    fn normalization_is_stable() {
        assert_eq!(normalize_url("https://Example.com"), "https://example.com/");
        assert_eq!(normalize_url("https://example.com/"), "https://example.com/");
        assert_eq!(normalize_url(" not a url "), "not a url");
    }

    #[test]
    fn text_to_html_escapes_and_breaks_lines() {
        assert_eq!(text_to_html("a < b & c\r\nd"), "a &lt; b &amp; c<br>d");
    }

    #[test]
    fn strip_nul_removes_every_nul() {
        assert_eq!(strip_nul("<b>\0x\0</b>"), "<b>x</b>");
    }
}
