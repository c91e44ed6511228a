//! Incremental UTF-8 decoding for chunked byte streams.
//!
//! Network chunks can end in the middle of a multi-byte character. The
//! decoder holds the incomplete tail until the next chunk supplies the rest,
//! so a split character is never turned into a replacement character.

use std::char::REPLACEMENT_CHARACTER;

/// Stateful UTF-8 decoder that carries partial sequences between chunks.
///
/// Invalid byte sequences decode to U+FFFD instead of failing, the same way
/// a non-fatal text decoder behaves.
#[derive(Debug, Default, Clone)]
pub struct Utf8Decoder {
    /// Bytes of an incomplete trailing sequence (at most 3)
    pending: Vec<u8>,
}

impl Utf8Decoder {
    /// Create a decoder with no pending state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next chunk, prefixing any bytes held back from the last call.
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(chunk);

        let mut out = String::with_capacity(bytes.len());
        let mut input: &[u8] = &bytes;

        loop {
            match std::str::from_utf8(input) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(err) => {
                    let (valid, rest) = input.split_at(err.valid_up_to());
                    out.push_str(&String::from_utf8_lossy(valid));

                    match err.error_len() {
                        Some(len) => {
                            out.push(REPLACEMENT_CHARACTER);
                            input = &rest[len..];
                        }
                        None => {
                            // Incomplete sequence at the end of the input
                            self.pending = rest.to_vec();
                            break;
                        }
                    }
                }
            }
        }

        out
    }

    /// Flush the decoder at end of stream.
    ///
    /// Returns a replacement character if an incomplete sequence was still
    /// pending, otherwise an empty string.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            String::new()
        } else {
            self.pending.clear();
            REPLACEMENT_CHARACTER.to_string()
        }
    }

    /// Whether bytes of an incomplete sequence are being held back.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
