use pretty_assertions::assert_eq;
use sticky_core::{
    parse_settings, render_settings, HexColor, PersistedSettings, DEFAULT_INTERVAL_SECS,
};

fn init_logging() {
    sticky_logging::initialize_for_tests();
}

fn either<T>(keep: bool, stored: T, fallback: T) -> T {
    if keep {
        stored
    } else {
        fallback
    }
}

fn sample() -> PersistedSettings {
    PersistedSettings {
        url: "https://status.example.com/board".to_string(),
        width: 512.5,
        height: 300.0,
        auto_refresh_enabled: true,
        auto_refresh_interval_secs: 45,
        background: HexColor::rgb(0x12, 0xAB, 0xEF),
        content_hidden: true,
    }
}

#[test]
fn render_then_parse_preserves_every_field() {
    init_logging();
    let settings = sample();
    let text = render_settings(&settings);

    assert_eq!(
        text,
        "https://status.example.com/board\n512.5\n300\n1\n45\n12ABEF\n1"
    );
    assert_eq!(parse_settings(&text), settings);
}

#[test]
fn empty_file_yields_documented_defaults() {
    init_logging();
    let settings = parse_settings("");

    assert_eq!(settings.url, "http://localhost:8000");
    assert_eq!(settings.width, 320.0);
    assert_eq!(settings.height, 420.0);
    assert!(!settings.auto_refresh_enabled);
    assert_eq!(settings.auto_refresh_interval_secs, 30);
    assert_eq!(settings.background, HexColor::WHITE);
    assert!(!settings.content_hidden);
}

#[test]
fn short_files_fall_back_for_the_missing_tail_only() {
    init_logging();
    let full = render_settings(&sample());
    let lines: Vec<&str> = full.lines().collect();
    let defaults = PersistedSettings::default();

    for kept in 0..=6 {
        let text = lines[..kept].join("\n");
        let parsed = parse_settings(&text);
        let expected = sample();

        let pick = |index: usize| kept > index;
        let url = either(pick(0), &expected.url, &defaults.url);
        assert_eq!(&parsed.url, url, "url with {kept} lines");
        assert_eq!(parsed.width, either(pick(1), expected.width, defaults.width));
        assert_eq!(parsed.height, either(pick(2), expected.height, defaults.height));
        assert_eq!(
            parsed.auto_refresh_enabled,
            either(
                pick(3),
                expected.auto_refresh_enabled,
                defaults.auto_refresh_enabled
            )
        );
        assert_eq!(
            parsed.auto_refresh_interval_secs,
            either(
                pick(4),
                expected.auto_refresh_interval_secs,
                defaults.auto_refresh_interval_secs
            )
        );
        assert_eq!(
            parsed.background,
            either(pick(5), expected.background, defaults.background)
        );
        assert!(!parsed.content_hidden, "seventh field missing with {kept} lines");
    }
}

#[test]
fn interval_below_minimum_loads_as_default() {
    init_logging();
    for stored in ["4", "0", "-10", "abc", ""] {
        let text = format!("http://a.example\n320\n420\n1\n{stored}\nFFFFFF");
        assert_eq!(
            parse_settings(&text).auto_refresh_interval_secs,
            DEFAULT_INTERVAL_SECS,
            "stored interval {stored:?}"
        );
    }
    let text = "http://a.example\n320\n420\n1\n5\nFFFFFF";
    assert_eq!(parse_settings(text).auto_refresh_interval_secs, 5);
}

#[test]
fn malformed_fields_are_replaced_individually() {
    init_logging();
    let text = "  example.com  \n1,5\nwide\nyes\n60\n#00ff0\n0";
    let settings = parse_settings(text);

    assert_eq!(settings.url, "http://example.com");
    assert_eq!(settings.width, 320.0);
    assert_eq!(settings.height, 420.0);
    assert!(!settings.auto_refresh_enabled);
    assert_eq!(settings.auto_refresh_interval_secs, 60);
    assert_eq!(settings.background, HexColor::WHITE);
}

#[test]
fn windows_line_endings_and_hash_prefixed_colors_are_accepted() {
    init_logging();
    let text = "https://x.com\r\n640\r\n480\r\n1\r\n10\r\n#00ff00\r\n1\r\n";
    let settings = parse_settings(text);

    assert_eq!(settings.url, "https://x.com");
    assert_eq!(settings.width, 640.0);
    assert_eq!(settings.height, 480.0);
    assert!(settings.auto_refresh_enabled);
    assert_eq!(settings.auto_refresh_interval_secs, 10);
    assert_eq!(settings.background, HexColor::rgb(0, 0xFF, 0));
    assert!(settings.content_hidden);
}

#[test]
fn blank_url_line_keeps_default_url() {
    init_logging();
    let settings = parse_settings("   \n400\n500");
    assert_eq!(settings.url, "http://localhost:8000");
    assert_eq!(settings.width, 400.0);
    assert_eq!(settings.height, 500.0);
}
