//! File result store tests.
//!
//! These tests verify that `FileResultStore` persists results on disk and
//! that a full submission leaves the course where `--last` will find it.

mod common;

use common::*;
use coursegen::adapters::mock::{MockHttpClient, RecordingNavigator, RecordingStatus};
use coursegen::adapters::FileResultStore;
use coursegen::cli::show_last;
use coursegen::client::CourseClient;
use coursegen::flow::CourseFlow;
use coursegen::traits::ResultStore;
use tempfile::TempDir;

#[tokio::test]
async fn test_save_creates_directory_and_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("nested").join("coursegen");
    let store = FileResultStore::new(&dir);

    store.save("currentCourse", "<p>Course</p>").await.unwrap();

    let contents = std::fs::read_to_string(dir.join("currentCourse.html")).unwrap();
    assert_eq!(contents, "<p>Course</p>");
}

#[tokio::test]
async fn test_save_overwrites_and_leaves_no_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileResultStore::new(temp_dir.path());

    store.save("currentCourse", "first").await.unwrap();
    store.save("currentCourse", "second").await.unwrap();

    assert_eq!(
        store.load("currentCourse").await.unwrap().as_deref(),
        Some("second")
    );
    let names: Vec<String> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["currentCourse.html"]);
}

#[tokio::test]
async fn test_load_missing_key() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileResultStore::new(temp_dir.path());

    assert_eq!(store.load("currentCourse").await.unwrap(), None);
}

#[tokio::test]
async fn test_save_rejects_invalid_key() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileResultStore::new(temp_dir.path());

    assert!(store.save("../escape", "x").await.is_err());
    assert!(std::fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn test_submission_result_is_readable_with_show_last() {
    let temp_dir = TempDir::new().unwrap();
    let client = CourseClient::with_http(
        TEST_BASE_URL,
        MockHttpClient::with_default(ndjson_response(&[
            progress_line("Building"),
            result_line("<html>Stored</html>"),
        ])),
    );
    let mut flow = CourseFlow::new(
        client,
        RecordingStatus::new(),
        FileResultStore::new(temp_dir.path()),
        RecordingNavigator::new(),
    );

    assert!(flow.submit("Storage").await.is_success());

    let mut out = Vec::new();
    let found = show_last(flow.store(), "currentCourse", &mut out).await.unwrap();
    assert!(found);
    assert_eq!(String::from_utf8(out).unwrap(), "<html>Stored</html>\n");
}
