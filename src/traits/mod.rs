//! Trait abstractions for dependency injection and testability.
//!
//! The submission flow talks to the outside world only through these
//! traits, so it can be driven entirely by in-memory doubles in tests.
//!
//! # Traits
//!
//! - [`HttpClient`] - The streaming POST to the chat endpoint
//! - [`StatusDisplay`] - Status text, phase strip and error rendering
//! - [`ResultStore`] - Durable storage for the final result
//! - [`Navigator`] - Moving on to the results page

pub mod http;
pub mod navigator;
pub mod status;
pub mod store;

pub use http::{ByteStream, Headers, HttpClient, HttpError};
pub use navigator::Navigator;
pub use status::StatusDisplay;
pub use store::ResultStore;
