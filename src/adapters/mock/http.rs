//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that replays scripted chunk
//! streams or errors, and records every request it receives.

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt as _;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{ByteStream, Headers, HttpClient, HttpError};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body
    pub body: String,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Fail before streaming begins
    Error(HttpError),
    /// Stream these chunks, then end
    Stream(Vec<Bytes>),
    /// Stream these chunks, then fail the read
    StreamThenError(Vec<Bytes>, HttpError),
}

impl MockResponse {
    /// Stream the given chunks verbatim.
    pub fn chunks<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Bytes>,
    {
        MockResponse::Stream(chunks.into_iter().map(Into::into).collect())
    }

    /// A non-success response with the given body.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        MockResponse::Error(HttpError::ServerError {
            status,
            message: body.into(),
        })
    }
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use coursegen::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://localhost:8080/api/chat_stream",
///     MockResponse::chunks(["{\"type\":\"progress\",\"text\":\"hi\"}\n"]),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// Number of chunks handed out across all streams
    chunks_read: Arc<Mutex<usize>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
            chunks_read: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a client that answers every URL with `response`.
    pub fn with_default(response: MockResponse) -> Self {
        let client = Self::new();
        client.set_default_response(response);
        client
    }

    /// Set a response for a specific URL (exact or prefix match).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of body chunks consumers have pulled so far.
    pub fn chunks_read(&self) -> usize {
        *self.chunks_read.lock().unwrap()
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: &str) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body: body.to_string(),
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    fn counted_stream(&self, items: Vec<Result<Bytes, HttpError>>) -> ByteStream {
        let counter = self.chunks_read.clone();
        let stream = futures::stream::iter(items).inspect(move |_| {
            *counter.lock().unwrap() += 1;
        });
        Box::pin(stream)
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn post_stream(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<ByteStream, HttpError> {
        self.record_request("POST", url, headers, body);

        match self.get_response(url) {
            Some(MockResponse::Stream(chunks)) => {
                Ok(self.counted_stream(chunks.into_iter().map(Ok).collect()))
            }
            Some(MockResponse::StreamThenError(chunks, err)) => {
                let mut items: Vec<_> = chunks.into_iter().map(Ok).collect();
                items.push(Err(err));
                Ok(self.counted_stream(items))
            }
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}
