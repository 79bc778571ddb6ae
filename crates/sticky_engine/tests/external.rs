use sticky_engine::is_external_scheme;

#[test]
fn only_web_and_mail_schemes_leave_the_app() {
    for url in [
        "http://example.com",
        "HTTPS://example.com/a?b=c",
        "  https://example.com",
        "mailto:someone@example.com",
    ] {
        assert!(is_external_scheme(url), "{url} should open");
    }
    for url in [
        "file:///etc/passwd",
        "javascript:alert(1)",
        "ms-settings:privacy",
        "example.com",
        "",
    ] {
        assert!(!is_external_scheme(url), "{url} should be refused");
    }
}
