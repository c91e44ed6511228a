//! Mock implementations for testing.
//!
//! This module provides doubles for every collaborator trait, enabling the
//! submission flow to be tested without network access, a terminal, or the
//! file system.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - Scripted chunk streams and recorded requests
//! - [`RecordingStatus`] - Records every status display update
//! - [`InMemoryStore`] - In-memory result storage
//! - [`RecordingNavigator`] - Records navigation targets

pub mod http;
pub mod navigator;
pub mod status;
pub mod store;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use navigator::RecordingNavigator;
pub use status::{RecordingStatus, StatusUpdate};
pub use store::InMemoryStore;
