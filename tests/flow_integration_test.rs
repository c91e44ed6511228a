//! End-to-end submission tests against scripted backends.
//!
//! These tests drive `CourseFlow` through `MockHttpClient` and the recording
//! adapters, covering chunking, dispatch and every way a submission ends.

mod common;

use common::*;
use coursegen::adapters::mock::{
    InMemoryStore, MockHttpClient, MockResponse, RecordingNavigator, RecordingStatus,
};
use coursegen::client::CourseClient;
use coursegen::config::ClientConfig;
use coursegen::flow::{CourseFlow, FlowOutcome, FlowState};
use coursegen::stream::{Phase, TrailingLinePolicy, UnknownEventPolicy};

fn configured_flow(config: &ClientConfig, response: MockResponse) -> MockFlow {
    let client = CourseClient::from_config(config, MockHttpClient::with_default(response));
    CourseFlow::new(
        client,
        RecordingStatus::new(),
        InMemoryStore::new(),
        RecordingNavigator::new(),
    )
    .with_config(config)
}

#[tokio::test]
async fn test_full_run_reaches_every_phase() {
    let body = ndjson_body(&[
        progress_line("Researching the history of jazz"),
        progress_line("The judge is evaluating the draft"),
        progress_line("Writing module 1"),
        result_line("<html><h1>Jazz</h1></html>"),
    ]);
    let mut flow = mock_flow(byte_chunks(&body, 7));

    let outcome = flow.submit("Jazz").await;

    assert_eq!(
        outcome,
        FlowOutcome::Completed {
            result_key: "currentCourse".to_string(),
            target: format!("{}/course.html", TEST_BASE_URL),
        }
    );
    assert_eq!(
        flow.display().statuses(),
        vec![
            "Researching the history of jazz",
            "The judge is evaluating the draft",
            "Writing module 1"
        ]
    );
    assert_eq!(flow.display().current_phase(), Some(Phase::Build));
    assert_eq!(
        flow.store().get("currentCourse").as_deref(),
        Some("<html><h1>Jazz</h1></html>")
    );
    assert_eq!(flow.state(), FlowState::CompletedWithResult);
}

#[tokio::test]
async fn test_multibyte_text_split_at_every_boundary() {
    let text = "Écrire un résumé 日本語 🎵";
    let body = ndjson_body(&[progress_line(text), result_line("ok")]);

    for size in 1..=8 {
        let mut flow = mock_flow(byte_chunks(&body, size));
        assert!(flow.submit("Langues").await.is_success(), "chunk size {}", size);
        assert_eq!(flow.display().statuses(), vec![text], "chunk size {}", size);
    }
}

#[tokio::test]
async fn test_trailing_line_dropped_by_default() {
    let body = format!(
        "{}{}",
        ndjson_body(&[progress_line("one"), progress_line("two")]),
        result_line("unterminated")
    );
    let mut flow = mock_flow(MockResponse::chunks([body]));

    let outcome = flow.submit("Rust").await;

    assert!(matches!(outcome, FlowOutcome::Aborted { .. }));
    assert_eq!(flow.display().statuses(), vec!["one", "two"]);
    assert!(flow.store().is_empty());
}

#[tokio::test]
async fn test_trailing_line_emitted_when_configured() {
    let body = format!(
        "{}{}",
        ndjson_body(&[progress_line("one"), progress_line("two")]),
        result_line("unterminated")
    );
    let config = ClientConfig::new()
        .with_base_url(TEST_BASE_URL)
        .with_trailing_line(TrailingLinePolicy::Emit);
    let mut flow = configured_flow(&config, MockResponse::chunks([body]));

    let outcome = flow.submit("Rust").await;

    assert!(outcome.is_success());
    assert_eq!(flow.store().get("currentCourse").as_deref(), Some("unterminated"));
}

#[tokio::test]
async fn test_error_event_is_final() {
    let mut flow = mock_flow(MockResponse::chunks([
        ndjson_body(&[progress_line("Researching"), error_line("rate limited")]),
        ndjson_body(&[result_line("never")]),
    ]));

    let outcome = flow.submit("Rust").await;

    assert_eq!(
        outcome,
        FlowOutcome::Failed {
            message: "rate limited".to_string()
        }
    );
    assert_eq!(flow.display().current_text(), Some("rate limited"));
    assert_eq!(flow.client().http().chunks_read(), 1);
    assert!(flow.navigator().visits().is_empty());
}

#[tokio::test]
async fn test_truncated_line_is_skipped() {
    let mut flow = mock_flow(ndjson_response(&[
        r#"{"type":"progress""#.to_string(),
        progress_line("Writing"),
        result_line("done"),
    ]));

    assert!(flow.submit("Rust").await.is_success());
    assert_eq!(flow.display().statuses(), vec!["Writing"]);
}

#[tokio::test]
async fn test_crlf_lines_are_accepted() {
    let body = format!("{}\r\n{}\r\n", progress_line("Building"), result_line("ok"));
    let mut flow = mock_flow(MockResponse::chunks([body]));

    assert!(flow.submit("Rust").await.is_success());
    assert_eq!(flow.display().statuses(), vec!["Building"]);
}

#[tokio::test]
async fn test_strict_events_from_config() {
    let config = ClientConfig::new()
        .with_base_url(TEST_BASE_URL)
        .with_unknown_events(UnknownEventPolicy::Fail);
    let mut flow = configured_flow(
        &config,
        ndjson_response(&[r#"{"type":"ping","text":"x"}"#.to_string(), result_line("ok")]),
    );

    let outcome = flow.submit("Rust").await;

    assert!(matches!(outcome, FlowOutcome::Aborted { .. }));
    assert_eq!(flow.state(), FlowState::Aborted);
}

#[tokio::test]
async fn test_second_submission_reuses_session() {
    let mut flow = mock_flow(ndjson_response(&[result_line("ok")]));

    flow.submit("First").await;
    flow.submit("Second").await;

    let requests = flow.client().http().get_requests();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert_eq!(request.json().unwrap()["session_id"], TEST_SESSION);
    }
    assert_eq!(
        requests[1].json().unwrap()["message"],
        "Create a comprehensive course on: Second"
    );
}
