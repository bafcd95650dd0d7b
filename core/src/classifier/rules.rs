//! Message extraction from heterogeneous backend error bodies.
//!
//! The backend is not consistent about where it puts a failure message.
//! Extraction runs an ordered list of rules over the parsed body; the first
//! rule that yields a non-blank string wins.

use serde_json::Value;
use sm_shared::{message, Language, MessageKey};

/// Raw bodies at or above this many characters are never shown to the user
pub const MAX_RAW_MESSAGE_CHARS: usize = 200;

/// Named extraction rule over a parsed body
pub type MessageRule = (&'static str, fn(&Value) -> Option<String>);

/// Extraction rules in priority order
pub const MESSAGE_RULES: [MessageRule; 3] = [
    ("nested_error_message", nested_error_message),
    ("top_level_message", top_level_message),
    ("error_string", error_string),
];

fn nested_error_message(body: &Value) -> Option<String> {
    body.get("error")?
        .as_object()?
        .get("message")
        .and_then(non_blank_str)
}

fn top_level_message(body: &Value) -> Option<String> {
    body.get("message").and_then(non_blank_str)
}

fn error_string(body: &Value) -> Option<String> {
    body.get("error").and_then(non_blank_str)
}

pub(crate) fn non_blank_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

/// Run the rules over an already parsed body
pub fn extract_from_value(body: &Value) -> Option<String> {
    MESSAGE_RULES.iter().find_map(|(_, rule)| rule(body))
}

/// User-facing message for a failed exchange.
///
/// Falls back to the raw body when it is short enough to be a plain-text
/// message, otherwise to the localized generic error.
pub fn extract_message(raw: &str, lang: Language) -> String {
    if let Ok(body) = serde_json::from_str::<Value>(raw) {
        if let Some(found) = extract_from_value(&body) {
            return found;
        }
    }
    raw_fallback(raw, lang)
}

fn raw_fallback(raw: &str, lang: Language) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || raw.chars().count() >= MAX_RAW_MESSAGE_CHARS {
        message(MessageKey::GenericError, lang)
    } else {
        raw.to_string()
    }
}
