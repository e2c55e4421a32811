//! URL validation and display helpers for bookmark entries.

use url::Url;

/// Returns `true` when `input` (after trimming) is an absolute `http` or
/// `https` URL with a non-empty host. Reachability is not checked.
pub fn validate_url(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }
    match Url::parse(trimmed) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().map_or(false, |h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Strips a leading `scheme://` for display. The stored value keeps it.
pub fn url_without_protocol(url: &str) -> &str {
    match url.find("://") {
        Some(idx) if is_scheme(&url[..idx]) => &url[idx + 3..],
        _ => url,
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
