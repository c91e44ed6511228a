//! coursegen - build a course on a topic and follow its progress
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod logging;
pub mod models;
pub mod session;
pub mod stream;
pub mod traits;
