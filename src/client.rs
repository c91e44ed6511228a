//! Course backend client.
//!
//! This module provides the client for the course-building backend: it sends
//! the chat request and exposes the NDJSON response as a lazy stream of
//! lines.

use futures_util::stream::Stream;
use futures_util::StreamExt;
use std::pin::Pin;

use crate::adapters::ReqwestHttpClient;
use crate::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_CHAT_PATH, DEFAULT_RESULTS_PATH};
use crate::error::{extract_detail, CourseError, CourseResult, NetworkError, StreamError};
use crate::models::ChatStreamRequest;
use crate::stream::{read_lines, TrailingLinePolicy};
use crate::traits::{Headers, HttpClient, HttpError};

/// Lines of the response body, without their terminators.
pub type LineStream = Pin<Box<dyn Stream<Item = CourseResult<String>> + Send>>;

/// Client for the course-building backend.
pub struct CourseClient<H: HttpClient = ReqwestHttpClient> {
    /// Base URL of the backend
    pub base_url: String,
    chat_path: String,
    results_path: String,
    trailing_line: TrailingLinePolicy,
    http: H,
}

impl CourseClient<ReqwestHttpClient> {
    /// Create a client for `base_url` using reqwest.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, ReqwestHttpClient::new())
    }
}

impl Default for CourseClient<ReqwestHttpClient> {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl<H: HttpClient> CourseClient<H> {
    /// Create a client for `base_url` using a custom HTTP client.
    pub fn with_http(base_url: impl Into<String>, http: H) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            results_path: DEFAULT_RESULTS_PATH.to_string(),
            trailing_line: TrailingLinePolicy::default(),
            http,
        }
    }

    /// Create a client from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig, http: H) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            chat_path: config.chat_path.clone(),
            results_path: config.results_path.clone(),
            trailing_line: config.trailing_line,
            http,
        }
    }

    /// Set how an unterminated final line is handled.
    pub fn with_trailing_line(mut self, policy: TrailingLinePolicy) -> Self {
        self.trailing_line = policy;
        self
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &H {
        &self.http
    }

    /// URL of the streaming chat endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}/{}", self.base_url, self.chat_path.trim_start_matches('/'))
    }

    /// URL of the results page.
    pub fn results_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url,
            self.results_path.trim_start_matches('/')
        )
    }

    /// Send `request` and stream the response body line by line.
    ///
    /// A non-success status is reported before any line is produced, with
    /// the server's `detail` text when the body carried one. Read failures
    /// after that surface as a single `Err` item that ends the stream.
    pub async fn stream_lines(&self, request: &ChatStreamRequest) -> CourseResult<LineStream> {
        let url = self.chat_url();
        let body = serde_json::to_string(request)?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/x-ndjson".to_string());

        tracing::debug!(url = %url, session_id = %request.session_id, "Sending chat request");

        let chunks = self
            .http
            .post_stream(&url, &body, &headers)
            .await
            .map_err(|e| classify_request_error(&url, e))?;

        let lines = read_lines(chunks, self.trailing_line).map(|item| {
            item.map_err(|e| {
                CourseError::Stream(StreamError::ReadFailed {
                    message: e.to_string(),
                })
            })
        });

        Ok(Box::pin(lines))
    }
}

/// Map a failure to open the stream onto a [`NetworkError`].
fn classify_request_error(url: &str, err: HttpError) -> CourseError {
    let err = match err {
        HttpError::ServerError { status, message } => NetworkError::HttpStatus {
            status,
            detail: extract_detail(&message),
        },
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
            url: url.to_string(),
            message,
        },
        HttpError::Timeout(message) => NetworkError::Timeout { message },
        HttpError::Io(message) | HttpError::InvalidUrl(message) | HttpError::Other(message) => {
            NetworkError::Other { message }
        }
    };
    CourseError::Network(err)
}
