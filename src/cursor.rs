//! A borrowing cursor for sequential reads from a stored diff.

use crate::error::{Result, StemDiffError};

/// Read-only cursor over a byte slice.
///
/// Diffs are parsed strictly front to back: header code units first, then the
/// varint-framed literal fragments, then whatever literal tail remains. Every
/// read checks bounds so a truncated diff surfaces as an error instead of a
/// panic.
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Reads a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        if self.pos >= self.data.len() {
            return Err(StemDiffError::UnexpectedEndOfData);
        }
        let value = self.data[self.pos];
        self.pos += 1;
        Ok(value)
    }

    /// Reads exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(StemDiffError::UnexpectedEndOfData);
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.data[start..self.pos])
    }

    /// Consumes the cursor, returning all unread bytes.
    pub fn rest(self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}
