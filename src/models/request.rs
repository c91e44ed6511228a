//! Request body for the chat stream endpoint.

use serde::{Deserialize, Serialize};

use crate::session::SessionId;

/// Build the prompt sent for a topic.
pub fn course_prompt(topic: &str) -> String {
    format!("Create a comprehensive course on: {}", topic)
}

/// Body of `POST /api/chat_stream`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatStreamRequest {
    /// Prompt text
    pub message: String,
    /// Session token of the submitting client
    pub session_id: String,
}

impl ChatStreamRequest {
    /// Create a request with an explicit message.
    pub fn new(message: impl Into<String>, session: &SessionId) -> Self {
        Self {
            message: message.into(),
            session_id: session.as_str().to_string(),
        }
    }

    /// Create the course-building request for `topic`.
    pub fn for_topic(topic: &str, session: &SessionId) -> Self {
        Self::new(course_prompt(topic), session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_prompt() {
        assert_eq!(
            course_prompt("Rust ownership"),
            "Create a comprehensive course on: Rust ownership"
        );
    }

    #[test]
    fn test_for_topic_serializes_expected_fields() {
        let session = SessionId::from_string("session-abc");
        let request = ChatStreamRequest::for_topic("Jazz", &session);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Create a comprehensive course on: Jazz",
                "session_id": "session-abc"
            })
        );
    }
}
