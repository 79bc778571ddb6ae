//! Page-side typing probe and the host-side decoder for what it posts.

use serde::Deserialize;
use sticky_logging::sticky_debug;

pub const TYPING_STATE_MESSAGE_TYPE: &str = "typing-state";

/// `<input>` types that take focus without accepting typed text.
pub const NON_TYPING_INPUT_TYPES: [&str; 8] = [
    "button", "submit", "reset", "checkbox", "radio", "range", "color", "file",
];

const FOCUS_EVENTS: [&str; 7] = [
    "focus",
    "blur",
    "input",
    "keydown",
    "keyup",
    "compositionstart",
    "compositionend",
];

/// Script injected on every document creation.
///
/// Reports only transitions of "is the active element editable" through the
/// one-way `window.ipc` channel.
pub fn typing_probe_script() -> String {
    let non_typing = quoted_list(&NON_TYPING_INPUT_TYPES);
    let listeners: String = FOCUS_EVENTS
        .iter()
        .map(|event| format!("    document.addEventListener('{event}', report, true);\n"))
        .collect();

    format!(
        r#"(function () {{
    if (!window.ipc || typeof window.ipc.postMessage !== 'function') {{
        return;
    }}
    const nonTypingTypes = [{non_typing}];
    let lastValue = null;
    const isTypingElement = (el) => {{
        if (!el) {{
            return false;
        }}
        if (el.isContentEditable) {{
            return true;
        }}
        if (!el.tagName) {{
            return false;
        }}
        if (el.tagName === 'TEXTAREA') {{
            return true;
        }}
        if (el.tagName !== 'INPUT') {{
            return false;
        }}
        return !nonTypingTypes.includes((el.type || '').toLowerCase());
    }};
    const report = () => {{
        const typing = isTypingElement(document.activeElement);
        if (typing !== lastValue) {{
            lastValue = typing;
            window.ipc.postMessage(JSON.stringify({{ type: '{tag}', isTyping: typing }}));
        }}
    }};
{listeners}    report();
}})();
"#,
        tag = TYPING_STATE_MESSAGE_TYPE,
    )
}

fn quoted_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PageMessage {
    TypingState {
        #[serde(rename = "isTyping")]
        is_typing: bool,
    },
}

/// Decode a message posted by page script. Anything unrecognized is `None`.
pub fn decode_page_message(raw: &str) -> Option<PageMessage> {
    if raw.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<PageMessage>(raw) {
        Ok(message) => Some(message),
        Err(err) => {
            sticky_debug!("Ignoring page message ({}): {:.120}", err, raw);
            None
        }
    }
}
