//! Common test utilities for integration tests.
//!
//! This module provides fixtures for building NDJSON bodies and flows wired
//! to in-memory collaborators.
//!
//! # Example
//!
//! ```ignore
//! let mut flow = common::mock_flow(common::ndjson_response(&[common::result_line("<p/>")]));
//! assert!(flow.submit("Rust").await.is_success());
//! ```

#![allow(dead_code)]

use coursegen::adapters::mock::{
    InMemoryStore, MockHttpClient, MockResponse, RecordingNavigator, RecordingStatus,
};
use coursegen::client::CourseClient;
use coursegen::flow::CourseFlow;
use coursegen::session::SessionId;

/// Base URL used by mock-backed flows.
pub const TEST_BASE_URL: &str = "http://localhost:8080";

/// Session id attached to every test request.
pub const TEST_SESSION: &str = "session-integration";

pub type MockFlow = CourseFlow<MockHttpClient, RecordingStatus, InMemoryStore, RecordingNavigator>;

/// A `progress` event line.
pub fn progress_line(text: &str) -> String {
    serde_json::json!({"type": "progress", "text": text}).to_string()
}

/// An `error` event line.
pub fn error_line(text: &str) -> String {
    serde_json::json!({"type": "error", "text": text}).to_string()
}

/// A `result` event line.
pub fn result_line(text: &str) -> String {
    serde_json::json!({"type": "result", "text": text}).to_string()
}

/// Join lines into an NDJSON body, each line newline-terminated.
pub fn ndjson_body<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| format!("{}\n", line.as_ref()))
        .collect()
}

/// A single-chunk mock response carrying `lines`.
pub fn ndjson_response<S: AsRef<str>>(lines: &[S]) -> MockResponse {
    MockResponse::chunks([ndjson_body(lines)])
}

/// Split `body` into chunks of `size` bytes, ignoring character boundaries.
pub fn byte_chunks(body: &str, size: usize) -> MockResponse {
    MockResponse::chunks(
        body.as_bytes()
            .chunks(size)
            .map(|chunk| chunk.to_vec())
            .collect::<Vec<_>>(),
    )
}

/// A flow whose backend answers every request with `response`.
pub fn mock_flow(response: MockResponse) -> MockFlow {
    let client = CourseClient::with_http(TEST_BASE_URL, MockHttpClient::with_default(response));
    CourseFlow::new(
        client,
        RecordingStatus::new(),
        InMemoryStore::new(),
        RecordingNavigator::new(),
    )
    .with_session(SessionId::from_string(TEST_SESSION))
}
