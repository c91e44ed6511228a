//! The course submission flow.
//!
//! [`CourseFlow`] drives one submission end to end: it sends the topic,
//! reads the NDJSON progress stream, keeps the status display and phase
//! strip current, and on a `result` event stores the course and moves on
//! to the results page.
//!
//! ```text
//! Idle ──submit──▶ Submitting ──headers ok──▶ Streaming ──result──▶ CompletedWithResult
//!                      │                          │
//!                      │                          ├──error event──▶ CompletedWithError
//!                      └──────────────────────────┴──failure──────▶ Aborted
//! ```

use futures_util::StreamExt;

use crate::client::CourseClient;
use crate::config::{ClientConfig, DEFAULT_RESULT_KEY};
use crate::error::{CourseError, StreamError};
use crate::models::ChatStreamRequest;
use crate::session::SessionId;
use crate::stream::{detect_phase, parse_event_line, ProgressEvent, UnknownEventPolicy};
use crate::traits::{HttpClient, Navigator, ResultStore, StatusDisplay};

/// Storage key under which the finished course is kept.
pub const RESULT_KEY: &str = DEFAULT_RESULT_KEY;

/// Where a submission currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    /// Request sent, waiting for response headers
    Submitting,
    /// Reading progress lines
    Streaming,
    /// A result was stored
    CompletedWithResult,
    /// The backend sent an error event
    CompletedWithError,
    /// The request or stream failed
    Aborted,
}

impl FlowState {
    /// Whether the flow has finished.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FlowState::CompletedWithResult | FlowState::CompletedWithError | FlowState::Aborted
        )
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The course was stored under `result_key`; `target` is the results page
    Completed { result_key: String, target: String },
    /// The backend reported an error event
    Failed { message: String },
    /// The request or the stream failed
    Aborted { message: String },
    /// The topic was empty, so nothing was sent
    Skipped,
}

impl FlowOutcome {
    /// Whether a course was produced.
    pub fn is_success(&self) -> bool {
        matches!(self, FlowOutcome::Completed { .. })
    }

    /// The message shown to the user for a failed submission.
    pub fn message(&self) -> Option<&str> {
        match self {
            FlowOutcome::Failed { message } | FlowOutcome::Aborted { message } => Some(message),
            FlowOutcome::Completed { .. } | FlowOutcome::Skipped => None,
        }
    }
}

/// Drives course submissions against one backend.
pub struct CourseFlow<H, D, S, N>
where
    H: HttpClient,
    D: StatusDisplay,
    S: ResultStore,
    N: Navigator,
{
    client: CourseClient<H>,
    display: D,
    store: S,
    navigator: N,
    session: SessionId,
    result_key: String,
    unknown_events: UnknownEventPolicy,
    state: FlowState,
}

impl<H, D, S, N> CourseFlow<H, D, S, N>
where
    H: HttpClient,
    D: StatusDisplay,
    S: ResultStore,
    N: Navigator,
{
    /// Create a flow with a fresh session and default policies.
    pub fn new(client: CourseClient<H>, display: D, store: S, navigator: N) -> Self {
        Self {
            client,
            display,
            store,
            navigator,
            session: SessionId::generate(),
            result_key: RESULT_KEY.to_string(),
            unknown_events: UnknownEventPolicy::default(),
            state: FlowState::Idle,
        }
    }

    /// Apply the result key and event policy from `config`.
    pub fn with_config(mut self, config: &ClientConfig) -> Self {
        self.result_key = config.result_key.clone();
        self.unknown_events = config.unknown_events;
        self
    }

    /// Use an existing session instead of a generated one.
    pub fn with_session(mut self, session: SessionId) -> Self {
        self.session = session;
        self
    }

    /// Set how unrecognized event types are handled.
    pub fn with_unknown_events(mut self, policy: UnknownEventPolicy) -> Self {
        self.unknown_events = policy;
        self
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn client(&self) -> &CourseClient<H> {
        &self.client
    }

    /// Submit `topic` and process the response until it ends.
    ///
    /// Every failure has already been shown on the display by the time this
    /// returns; the outcome only tells the caller how things ended.
    pub async fn submit(&mut self, topic: &str) -> FlowOutcome {
        let topic = topic.trim();
        if topic.is_empty() {
            tracing::debug!("Empty topic, nothing to submit");
            return FlowOutcome::Skipped;
        }

        self.state = FlowState::Submitting;
        self.display.show_progress();
        tracing::info!(topic, session_id = %self.session, "Submitting course request");

        let request = ChatStreamRequest::for_topic(topic, &self.session);
        let mut lines = match self.client.stream_lines(&request).await {
            Ok(lines) => lines,
            Err(e) => return self.abort(e),
        };
        self.state = FlowState::Streaming;

        while let Some(line) = lines.next().await {
            let line = match line {
                Ok(line) => line,
                Err(e) => return self.abort(e),
            };
            if line.trim().is_empty() {
                continue;
            }
            tracing::debug!(line = %line, "Received line");

            let event = match parse_event_line(&line) {
                Ok(event) => event,
                Err(e) => {
                    let err = StreamError::MalformedLine {
                        line: line.clone(),
                        message: e.to_string(),
                    };
                    tracing::warn!(code = err.error_code(), "{}", err);
                    continue;
                }
            };

            match event {
                ProgressEvent::Progress { text } => {
                    self.display.update_status(&text);
                    self.display.set_phase(detect_phase(&text));
                }
                ProgressEvent::Error { text } => {
                    let err = StreamError::BackendError {
                        message: text.clone(),
                    };
                    tracing::warn!(code = err.error_code(), "{}", err);
                    self.display.set_phase(detect_phase(&text));
                    self.display.show_error(&text);
                    self.state = FlowState::CompletedWithError;
                    return FlowOutcome::Failed { message: text };
                }
                ProgressEvent::Result { text } => return self.complete(&text).await,
                ProgressEvent::Unknown { kind } => match self.unknown_events {
                    UnknownEventPolicy::Ignore => {
                        tracing::debug!(event_type = %kind, "Ignoring unknown event type");
                    }
                    UnknownEventPolicy::Fail => {
                        let err = StreamError::UnknownEventType { event_type: kind };
                        return self.abort(err.into());
                    }
                },
            }
        }

        self.abort(StreamError::Incomplete.into())
    }

    async fn complete(&mut self, course: &str) -> FlowOutcome {
        if let Err(e) = self.store.save(&self.result_key, course).await {
            return self.abort(e.into());
        }

        let target = self.client.results_url();
        tracing::info!(key = %self.result_key, bytes = course.len(), "Course stored");

        if let Err(e) = self.navigator.navigate(&target) {
            tracing::warn!(url = %target, error = %e, "Could not open results page");
        }

        self.display.show_complete(&target);
        self.state = FlowState::CompletedWithResult;
        FlowOutcome::Completed {
            result_key: self.result_key.clone(),
            target,
        }
    }

    fn abort(&mut self, err: CourseError) -> FlowOutcome {
        tracing::error!(code = err.error_code(), "Submission aborted: {}", err);
        let message = err.user_message();
        self.display.show_error(&message);
        self.state = FlowState::Aborted;
        FlowOutcome::Aborted { message }
    }
}
