//! Wire models sent to the backend.

pub mod request;

pub use request::{course_prompt, ChatStreamRequest};
