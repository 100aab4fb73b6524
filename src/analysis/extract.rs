use serde_json::{Map, Value};
use crate::models::ClassificationResult;

pub const NO_RESPONSE: &str = "No response";
pub const INVALID_JSON: &str = "Invalid JSON returned by model";
pub const RETRY_ADVICE: &str = "Try again";

/// What was recovered from a model's text.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The model's JSON object, exactly as parsed. Field values are not checked.
    Model(Map<String, Value>),
    /// A locally produced Error result.
    Fallback(ClassificationResult),
}

impl Extraction {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Extraction::Fallback(_))
    }

    pub fn into_value(self) -> Value {
        match self {
            Extraction::Model(obj) => Value::Object(obj),
            Extraction::Fallback(result) => {
                serde_json::to_value(result).unwrap_or_else(|_| Value::Object(Map::new()))
            }
        }
    }
}

/// Error result for a call that yielded no text.
pub fn no_response_result(upstream_message: Option<&str>) -> ClassificationResult {
    ClassificationResult::error(upstream_message.unwrap_or(NO_RESPONSE), RETRY_ADVICE)
}

pub fn invalid_json_result() -> ClassificationResult {
    ClassificationResult::error(INVALID_JSON, RETRY_ADVICE)
}

/// Recover a result object from raw model text.
///
/// Takes everything from the first `{` to the last `}` and parses it as one
/// JSON object. Two separate objects in the text therefore form a single
/// invalid span. Never fails: absent text and unparseable spans become
/// Error results.
pub fn extract(text: Option<&str>) -> Extraction {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return Extraction::Fallback(no_response_result(None)),
    };

    let span = match brace_span(text) {
        Some(span) => span,
        None => return Extraction::Fallback(invalid_json_result()),
    };

    match parse_object(span) {
        Some(obj) => Extraction::Model(obj),
        None => Extraction::Fallback(invalid_json_result()),
    }
}

/// Parse a span as one JSON object. Models sometimes split an emoji and emit
/// a lone `\uD8xx` escape, which serde_json rejects; such escapes are retried
/// as U+FFFD.
fn parse_object(span: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Map<String, Value>>(span) {
        Ok(obj) => Some(obj),
        Err(_) => {
            let repaired = replace_lone_surrogates(span)?;
            serde_json::from_str(&repaired).ok()
        }
    }
}

/// Rewrite unpaired surrogate escapes to `\ufffd`. Returns `None` when the
/// span has none.
fn replace_lone_surrogates(span: &str) -> Option<String> {
    let bytes = span.as_bytes();
    let mut out = String::with_capacity(span.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'\\' {
            i += 1;
            continue;
        }
        match unicode_escape(bytes, i) {
            Some(0xD800..=0xDBFF) if matches!(unicode_escape(bytes, i + 6), Some(0xDC00..=0xDFFF)) => {
                i += 12;
            }
            Some(0xD800..=0xDFFF) => {
                out.push_str(&span[copied..i]);
                out.push_str("\\ufffd");
                i += 6;
                copied = i;
            }
            Some(_) => i += 6,
            // Any other escape: skip the escaped character too.
            None => i += 2,
        }
    }

    if copied == 0 {
        return None;
    }
    out.push_str(&span[copied..]);
    Some(out)
}

fn unicode_escape(bytes: &[u8], at: usize) -> Option<u32> {
    if bytes.get(at) != Some(&b'\\') || bytes.get(at + 1) != Some(&b'u') {
        return None;
    }
    let hex = bytes.get(at + 2..at + 6)?;
    if !hex.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    u32::from_str_radix(std::str::from_utf8(hex).ok()?, 16).ok()
}

fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
