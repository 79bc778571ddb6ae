use sticky_logging::{sticky_info, sticky_warn};

/// Hand `url` to the operating system's default handler.
///
/// Only web and mail schemes are forwarded, so a page cannot launch local
/// files or arbitrary protocol handlers. Failures are logged and ignored.
pub fn open_external(url: &str) -> bool {
    if !is_external_scheme(url) {
        sticky_warn!(
            "Not opening {:?}: only http, https and mailto links go to the OS handler",
            url
        );
        return false;
    }
    match open::that_detached(url) {
        Ok(()) => {
            sticky_info!("Opened {} in the default handler", url);
            true
        }
        Err(err) => {
            sticky_warn!("Failed to open {} externally: {}", url, err);
            false
        }
    }
}

pub fn is_external_scheme(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}
