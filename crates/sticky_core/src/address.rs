use url::Url;

pub const DEFAULT_URL: &str = "http://localhost:8000";

/// Trim and add an `http://` scheme when none is present.
///
/// Blank input yields an empty string; callers treat that as "nothing to open".
pub fn normalize_url(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

/// Whether a normalized address is something the browser host can load.
pub fn is_navigable(url: &str) -> bool {
    !url.is_empty() && Url::parse(url).is_ok()
}

/// Host-reported URLs are compared case-insensitively, like the address bar.
///
/// Both sides are parsed first when possible, so `http://a.com` and the
/// host's `http://a.com/` count as the same page.
pub fn same_address(current: &str, target: &str) -> bool {
    if current.is_empty() {
        return false;
    }
    match (Url::parse(current), Url::parse(target)) {
        (Ok(current), Ok(target)) => current.as_str().eq_ignore_ascii_case(target.as_str()),
        _ => current.eq_ignore_ascii_case(target),
    }
}
