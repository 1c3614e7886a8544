//! Accumulation buffer for expansion output.
//!
//! Literal text is staged in a fixed inline chunk and moved into the
//! growable result whenever the chunk fills, before each substituted value,
//! and when the scan finishes. Growth of the result is fallible so that
//! running out of memory surfaces as an error instead of truncated output.

use smallvec::SmallVec;

use crate::error::ExpandError;

/// Bytes of literal text staged before a flush.
pub const CHUNK_CAPACITY: usize = 100;

#[derive(Debug, Default)]
pub struct OutputBuffer {
    chunk: SmallVec<[u8; CHUNK_CAPACITY]>,
    result: String,
    flushes: usize,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with room for `capacity` bytes of output.
    pub fn with_capacity(capacity: usize) -> Result<Self, ExpandError> {
        let mut buffer = Self::new();
        buffer.result.try_reserve(capacity)?;
        Ok(buffer)
    }

    /// Stage literal input text.
    ///
    /// `text` is split across flushes as the chunk fills. Splits only
    /// happen on character boundaries, so the chunk always holds whole
    /// characters.
    pub fn push_literal(&mut self, mut text: &str) -> Result<(), ExpandError> {
        while !text.is_empty() {
            let mut take = (CHUNK_CAPACITY - self.chunk.len()).min(text.len());
            while !text.is_char_boundary(take) {
                take -= 1;
            }
            if take == 0 {
                // Next character does not fit in what is left of the chunk.
                self.flush()?;
                continue;
            }

            let (head, tail) = text.split_at(take);
            self.chunk.extend_from_slice(head.as_bytes());
            text = tail;

            if self.chunk.len() == CHUNK_CAPACITY {
                self.flush()?;
            }
        }
        Ok(())
    }

    /// Append a substituted value after everything staged so far.
    pub fn push_value(&mut self, value: &str) -> Result<(), ExpandError> {
        self.flush()?;
        self.result.try_reserve(value.len())?;
        self.result.push_str(value);
        Ok(())
    }

    /// Move staged bytes into the result.
    pub fn flush(&mut self) -> Result<(), ExpandError> {
        if self.chunk.is_empty() {
            return Ok(());
        }
        self.result.try_reserve(self.chunk.len())?;
        // Only whole characters are staged, so nothing is ever replaced here.
        self.result.push_str(&String::from_utf8_lossy(&self.chunk));
        self.chunk.clear();
        self.flushes += 1;
        Ok(())
    }

    /// Number of chunk flushes performed so far.
    pub fn flushes(&self) -> usize {
        self.flushes
    }

    /// Flush what remains and hand over the result.
    pub fn finish(mut self) -> Result<String, ExpandError> {
        self.flush()?;
        Ok(self.result)
    }
}
