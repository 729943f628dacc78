//! Forward-only, bounds-checked view over the raw buffer

use crate::error::DecodeError;
use winnow::{
    Parser,
    binary::{le_u16, le_u32},
    error::ContextError,
    token::take,
};

/// Reads little-endian integers at absolute offsets of a borrowed buffer.
///
/// Reads never move the cursor; only [`ByteCursor::advance`] does, and only forwards.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn at(data: &'a [u8], offset: usize) -> Self {
        Self { data, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    pub fn advance(&mut self, by: usize) {
        self.offset = self.offset.saturating_add(by);
    }

    /// The stream from `offset` to the end of the buffer, for winnow parsers to consume.
    pub fn input_at(&self, offset: usize) -> Result<&'a [u8], DecodeError> {
        self.data
            .get(offset..)
            .ok_or_else(|| self.out_of_bounds(offset, 0))
    }

    pub fn u16_le_at(&self, offset: usize) -> Result<u16, DecodeError> {
        let mut input = self.input_at(offset)?;
        let value: Result<u16, ContextError> = le_u16.parse_next(&mut input);
        value.map_err(|_| self.out_of_bounds(offset, 2))
    }

    pub fn u32_le_at(&self, offset: usize) -> Result<u32, DecodeError> {
        let mut input = self.input_at(offset)?;
        let value: Result<u32, ContextError> = le_u32.parse_next(&mut input);
        value.map_err(|_| self.out_of_bounds(offset, 4))
    }

    /// Borrow exactly `len` bytes starting at `offset`.
    pub fn bytes_at(&self, offset: usize, len: usize) -> Result<&'a [u8], DecodeError> {
        let mut input = self.input_at(offset)?;
        let bytes: Result<&'a [u8], ContextError> = take(len).parse_next(&mut input);
        bytes.map_err(|_| self.out_of_bounds(offset, len))
    }

    fn out_of_bounds(&self, offset: usize, needed: usize) -> DecodeError {
        DecodeError::OutOfBounds {
            offset,
            needed,
            available: self.data.len().saturating_sub(offset),
        }
    }
}
