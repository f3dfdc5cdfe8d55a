//! Human-readable rendering of headers and JSON bodies for log lines.

use std::fmt::Write;

use serde_json::Value;

use crate::http::Headers;

/// Render one `name: value` line per header, in key order.
pub fn format_headers(headers: &Headers) -> String {
    headers.iter().fold(String::new(), |mut out, (name, value)| {
        let _ = writeln!(out, "{name}: {value}");
        out
    })
}

/// Re-render a JSON object payload with indentation.
///
/// Returns `None` when `bytes` is not JSON or its top level is not an object.
pub fn pretty_json(bytes: &[u8]) -> Option<String> {
    match serde_json::from_slice::<Value>(bytes).ok()? {
        object @ Value::Object(_) => serde_json::to_string_pretty(&object).ok(),
        _ => None,
    }
}
