//! NDJSON progress stream handling
//!
//! The response body is a sequence of byte chunks carrying one JSON object
//! per line. Processing is split into:
//! - `decoder` - incremental UTF-8 decoding across chunk boundaries
//! - `line_reader` - newline segmentation with a retained partial line
//! - `events` - the tagged event union parsed from each line
//! - `phase` - keyword-based phase detection for progress text

mod decoder;
mod events;
mod line_reader;
mod phase;

pub use decoder::Utf8Decoder;
pub use events::{parse_event_line, LineParseError, ProgressEvent, UnknownEventPolicy};
pub use line_reader::{read_lines, LineReader, TrailingLinePolicy};
pub use phase::{detect_phase, Phase};
