//! Line segmentation over a chunked byte stream.
//!
//! Chunks are decoded with [`Utf8Decoder`] and appended to a buffer. The
//! buffer is split on `\n`; every fragment but the last is a complete line.
//! The last fragment (possibly empty) stays buffered until more data arrives.

use std::collections::VecDeque;

use futures_util::stream::{self, Stream};
use futures_util::StreamExt;

use super::decoder::Utf8Decoder;

/// What to do with buffered text that never saw a terminating newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingLinePolicy {
    /// Discard the unterminated tail at end of stream
    #[default]
    Drop,
    /// Yield the unterminated tail as a final line
    Emit,
}

/// Stateful line splitter.
///
/// The buffer never contains a `\n` between calls: it holds at most one
/// incomplete trailing line.
#[derive(Debug, Default)]
pub struct LineReader {
    decoder: Utf8Decoder,
    buffer: String,
    policy: TrailingLinePolicy,
}

impl LineReader {
    /// Create a reader with the given end-of-stream policy.
    pub fn new(policy: TrailingLinePolicy) -> Self {
        Self {
            decoder: Utf8Decoder::new(),
            buffer: String::new(),
            policy,
        }
    }

    /// Feed a chunk and return the lines it completed, in order.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let text = self.decoder.decode(chunk);
        self.buffer.push_str(&text);
        self.drain_complete_lines()
    }

    /// Signal end of stream.
    ///
    /// Returns the unterminated tail only under [`TrailingLinePolicy::Emit`]
    /// and only if it is non-empty.
    pub fn finish(&mut self) -> Option<String> {
        let flushed = self.decoder.finish();
        self.buffer.push_str(&flushed);
        let remainder = std::mem::take(&mut self.buffer);

        if remainder.is_empty() {
            return None;
        }

        match self.policy {
            TrailingLinePolicy::Drop => {
                tracing::debug!(
                    bytes = remainder.len(),
                    "Dropping unterminated line at end of stream"
                );
                None
            }
            TrailingLinePolicy::Emit => Some(remainder),
        }
    }

    /// The currently buffered, not yet complete, text.
    pub fn buffered(&self) -> &str {
        &self.buffer
    }

    fn drain_complete_lines(&mut self) -> Vec<String> {
        let Some(last_newline) = self.buffer.rfind('\n') else {
            return Vec::new();
        };

        let tail = self.buffer.split_off(last_newline + 1);
        let mut complete = std::mem::replace(&mut self.buffer, tail);
        complete.pop(); // the final '\n'

        complete.split('\n').map(str::to_owned).collect()
    }
}

struct ReadState<S> {
    chunks: S,
    reader: LineReader,
    ready: VecDeque<String>,
    done: bool,
}

/// Turn a stream of byte chunks into a lazy stream of complete lines.
///
/// Only one chunk is read at a time, and only when every line from the
/// previous chunk has been consumed, so a consumer that stops early never
/// causes further reads. A chunk error is yielded once and ends the stream.
pub fn read_lines<S, B, E>(
    chunks: S,
    policy: TrailingLinePolicy,
) -> impl Stream<Item = Result<String, E>>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
{
    let state = ReadState {
        chunks,
        reader: LineReader::new(policy),
        ready: VecDeque::new(),
        done: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(line) = state.ready.pop_front() {
                return Some((Ok(line), state));
            }
            if state.done {
                return None;
            }

            match state.chunks.next().await {
                Some(Ok(chunk)) => {
                    let chunk = chunk.as_ref();
                    tracing::debug!(bytes = chunk.len(), "Received chunk");
                    let lines = state.reader.push(chunk);
                    state.ready.extend(lines);
                }
                Some(Err(e)) => {
                    state.done = true;
                    return Some((Err(e), state));
                }
                None => {
                    state.done = true;
                    if let Some(line) = state.reader.finish() {
                        state.ready.push_back(line);
                    }
                }
            }
        }
    })
}
