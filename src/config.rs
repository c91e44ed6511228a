//! Client configuration.
//!
//! Defaults match the backend's standard deployment; environment variables
//! and command-line flags override them.

use std::path::PathBuf;

use crate::stream::{TrailingLinePolicy, UnknownEventPolicy};

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
/// Path of the streaming chat endpoint.
pub const DEFAULT_CHAT_PATH: &str = "/api/chat_stream";
/// Path of the results page.
pub const DEFAULT_RESULTS_PATH: &str = "/course.html";
/// Storage key for the finished course.
pub const DEFAULT_RESULT_KEY: &str = "currentCourse";

/// Environment variable overriding the base URL.
pub const ENV_URL: &str = "COURSEGEN_URL";
/// Environment variable overriding the storage directory.
pub const ENV_DATA_DIR: &str = "COURSEGEN_DATA_DIR";
/// Environment variable that keeps an unterminated final line when set.
pub const ENV_KEEP_TRAILING_LINE: &str = "COURSEGEN_KEEP_TRAILING_LINE";

/// Configuration for a coursegen run.
///
/// Use the builder methods to customize it.
///
/// # Example
///
/// ```ignore
/// use coursegen::config::ClientConfig;
///
/// let config = ClientConfig::from_env()
///     .with_base_url("http://localhost:9000")
///     .with_open_browser(false);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL (no trailing slash)
    pub base_url: String,
    /// Path of the streaming chat endpoint
    pub chat_path: String,
    /// Path of the results page
    pub results_path: String,
    /// Storage key for the final result
    pub result_key: String,
    /// Storage directory; `None` means the platform data dir
    pub storage_dir: Option<PathBuf>,
    /// Handling of an unterminated final line
    pub trailing_line: TrailingLinePolicy,
    /// Handling of unrecognized event types
    pub unknown_events: UnknownEventPolicy,
    /// Open the results page in a browser on success
    pub open_browser: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            results_path: DEFAULT_RESULTS_PATH.to_string(),
            result_key: DEFAULT_RESULT_KEY.to_string(),
            storage_dir: None,
            trailing_line: TrailingLinePolicy::Drop,
            unknown_events: UnknownEventPolicy::Ignore,
            open_browser: true,
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. A trailing slash is removed.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the chat endpoint path.
    pub fn with_chat_path(mut self, path: impl Into<String>) -> Self {
        self.chat_path = path.into();
        self
    }

    /// Set the results page path.
    pub fn with_results_path(mut self, path: impl Into<String>) -> Self {
        self.results_path = path.into();
        self
    }

    /// Set the storage key for the final result.
    pub fn with_result_key(mut self, key: impl Into<String>) -> Self {
        self.result_key = key.into();
        self
    }

    /// Set the storage directory.
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Set the trailing-line policy.
    pub fn with_trailing_line(mut self, policy: TrailingLinePolicy) -> Self {
        self.trailing_line = policy;
        self
    }

    /// Set the unknown-event policy.
    pub fn with_unknown_events(mut self, policy: UnknownEventPolicy) -> Self {
        self.unknown_events = policy;
        self
    }

    /// Set whether to open the results page in a browser.
    pub fn with_open_browser(mut self, open: bool) -> Self {
        self.open_browser = open;
        self
    }

    /// Create config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            config = config.with_storage_dir(dir);
        }
        if lookup(ENV_KEEP_TRAILING_LINE).is_some_and(|v| is_truthy(&v)) {
            config = config.with_trailing_line(TrailingLinePolicy::Emit);
        }

        config
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
