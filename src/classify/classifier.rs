//! Response classification
//!
//! Checks run in order and the first match wins:
//! 1. Markup body (leading `<`) - the request hit a web page, not the data endpoint
//! 2. Non-2xx status
//! 3. Body is not JSON
//! 4. No `data` array in the envelope
//! 5. Records decoded from `data`

use super::types::PageResult;
use crate::types::Record;
use serde_json::{Map, Value};

/// Characters of body kept in diagnostics
pub const PREVIEW_CHARS: usize = 100;

/// Message used when the envelope has no records list and no message of its own
pub const MISSING_RECORDS_MESSAGE: &str =
    "Invalid response format: 'data' field is missing or not an array.";

/// Classify a raw response into a page outcome
pub fn classify(status: u16, body: &str) -> PageResult {
    if is_markup(body) {
        return PageResult::MalformedPayload {
            reason: format!(
                "expected JSON but received a markup document ({}); \
                 check the API path and the proxy configuration",
                preview(body, 40)
            ),
            markup: true,
        };
    }

    if !(200..300).contains(&status) {
        return PageResult::TransportError {
            status_code: status,
            body_preview: preview(body, PREVIEW_CHARS),
        };
    }

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            return PageResult::MalformedPayload {
                reason: format!(
                    "response is not valid JSON ({e}): {}",
                    preview(body, PREVIEW_CHARS)
                ),
                markup: false,
            }
        }
    };

    classify_envelope(value)
}

/// Whether the body looks like an HTML/XML document
pub fn is_markup(body: &str) -> bool {
    body.trim_start().starts_with('<')
}

/// First `max_chars` characters of the body, trimmed, with an ellipsis when cut
pub fn preview(body: &str, max_chars: usize) -> String {
    let body = body.trim();
    let mut chars = body.char_indices();
    match chars.nth(max_chars) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

fn classify_envelope(value: Value) -> PageResult {
    let Value::Object(mut envelope) = value else {
        return PageResult::ServerReportedError {
            message: MISSING_RECORDS_MESSAGE.to_string(),
            code: None,
        };
    };

    match envelope.remove("data") {
        Some(Value::Array(items)) => decode_records(items),
        _ => PageResult::ServerReportedError {
            message: server_message(&envelope)
                .unwrap_or_else(|| MISSING_RECORDS_MESSAGE.to_string()),
            code: envelope.get("code").and_then(code_value),
        },
    }
}

fn decode_records(items: Vec<Value>) -> PageResult {
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<Record>(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                return PageResult::MalformedPayload {
                    reason: format!("record {index} has an unexpected shape: {e}"),
                    markup: false,
                }
            }
        }
    }
    PageResult::success(records)
}

fn server_message(envelope: &Map<String, Value>) -> Option<String> {
    ["msg", "message"]
        .iter()
        .filter_map(|key| envelope.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(ToString::to_string)
}

fn code_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
