//! Progress events carried by the NDJSON response stream.
//!
//! Each line is one JSON object tagged by its `type` field:
//!
//! ```text
//! {"type":"progress","text":"Researching the topic..."}
//! {"type":"error","text":"rate limited"}
//! {"type":"result","text":"<html>...</html>"}
//! ```

use serde_json::{Map, Value};

/// A single event decoded from one stream line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Status update to show the user
    Progress { text: String },
    /// Backend failure; ends the stream
    Error { text: String },
    /// Final course content; ends the stream
    Result { text: String },
    /// Any tag this client does not recognize
    Unknown { kind: String },
}

impl ProgressEvent {
    /// Returns the wire tag of the event.
    pub fn kind(&self) -> &str {
        match self {
            ProgressEvent::Progress { .. } => "progress",
            ProgressEvent::Error { .. } => "error",
            ProgressEvent::Result { .. } => "result",
            ProgressEvent::Unknown { kind } => kind,
        }
    }
}

/// How events with an unrecognized `type` are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownEventPolicy {
    /// Log and keep reading
    #[default]
    Ignore,
    /// Abort the stream
    Fail,
}

/// Errors from decoding a single line.
#[derive(Debug)]
pub enum LineParseError {
    /// The line is not valid JSON
    InvalidJson(serde_json::Error),
    /// The line is valid JSON but not an object
    NotAnObject,
    /// A known event type without a string `text` field
    MissingText { kind: String },
}

impl std::fmt::Display for LineParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineParseError::InvalidJson(e) => write!(f, "Invalid JSON: {}", e),
            LineParseError::NotAnObject => write!(f, "Event line is not a JSON object"),
            LineParseError::MissingText { kind } => {
                write!(f, "Missing 'text' for event type: {}", kind)
            }
        }
    }
}

impl std::error::Error for LineParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LineParseError::InvalidJson(e) => Some(e),
            LineParseError::NotAnObject | LineParseError::MissingText { .. } => None,
        }
    }
}

/// Parse one NDJSON line into a [`ProgressEvent`].
///
/// Only JSON objects are events. Fields other than `type` and `text` are
/// ignored, and `text` is only checked for the known types. A missing or
/// non-string `type` is reported as an unknown event with an empty kind.
pub fn parse_event_line(line: &str) -> Result<ProgressEvent, LineParseError> {
    let value: Value = serde_json::from_str(line).map_err(LineParseError::InvalidJson)?;
    let Value::Object(mut fields) = value else {
        return Err(LineParseError::NotAnObject);
    };

    let kind = fields
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let build: fn(String) -> ProgressEvent = match kind.as_str() {
        "progress" => |text| ProgressEvent::Progress { text },
        "error" => |text| ProgressEvent::Error { text },
        "result" => |text| ProgressEvent::Result { text },
        _ => return Ok(ProgressEvent::Unknown { kind }),
    };

    match take_text(&mut fields) {
        Some(text) => Ok(build(text)),
        None => Err(LineParseError::MissingText { kind }),
    }
}

fn take_text(fields: &mut Map<String, Value>) -> Option<String> {
    match fields.remove("text") {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}
