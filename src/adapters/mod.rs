//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`TerminalStatus`] - Line-based status display for the terminal
//! - [`FileResultStore`] - File-based result storage
//! - [`BrowserNavigator`] / [`PrintNavigator`] - Results page navigation
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles for all adapters.

pub mod browser;
pub mod file_store;
pub mod mock;
pub mod reqwest_http;
pub mod terminal_status;

pub use browser::{BrowserNavigator, PrintNavigator};
pub use file_store::FileResultStore;
pub use mock::{InMemoryStore, MockHttpClient, MockResponse, RecordingNavigator, RecordingStatus};
pub use reqwest_http::ReqwestHttpClient;
pub use terminal_status::TerminalStatus;
