// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Byte buffer (writer) and cursor (reader) for AMQP network-order encoding.

use crate::config::CodecLimits;
use crate::error::{CodecError, Result};

/// Generate big-endian write methods for primitive types.
///
/// The buffer grows on demand, so writes cannot fail.
macro_rules! impl_write_be {
    ($name:ident, $type:ty) => {
        pub fn $name(&mut self, value: $type) {
            self.data.extend_from_slice(&value.to_be_bytes());
        }
    };
}

/// Generate big-endian read methods for primitive types.
///
/// Each generated method checks bounds (returns `CodecError::UnexpectedEof`),
/// converts via `from_be_bytes()` and advances the offset.
macro_rules! impl_read_be {
    ($name:ident, $type:ty, $size:expr) => {
        pub fn $name(&mut self) -> Result<$type> {
            let mut bytes = [0u8; $size];
            bytes.copy_from_slice(self.read_bytes($size)?);
            Ok(<$type>::from_be_bytes(bytes))
        }
    };
}

/// Growable output buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn write_u8(&mut self, value: u8) {
        self.data.push(value);
    }

    impl_write_be!(write_u16_be, u16);
    impl_write_be!(write_u32_be, u32);
    impl_write_be!(write_u64_be, u64);
    impl_write_be!(write_i8, i8);
    impl_write_be!(write_i32_be, i32);
    impl_write_be!(write_i64_be, i64);

    pub fn write_bytes(&mut self, data: &[u8]) {
        self.data.extend_from_slice(data);
    }
}

/// Bounds-checked reader over an encoded frame (zero-copy).
///
/// Carries the `CodecLimits` that decoders consult for wire-supplied lengths.
pub struct Cursor<'a> {
    buffer: &'a [u8],
    offset: usize,
    limits: CodecLimits,
}

impl<'a> Cursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self::with_limits(buffer, CodecLimits::default())
    }

    pub fn with_limits(buffer: &'a [u8], limits: CodecLimits) -> Self {
        Self {
            buffer,
            offset: 0,
            limits,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.buffer.len()
    }

    pub fn limits(&self) -> &CodecLimits {
        &self.limits
    }

    /// Fail unless `len` more bytes are available.
    pub fn ensure(&self, len: usize) -> Result<()> {
        if len > self.remaining() {
            return Err(CodecError::UnexpectedEof {
                offset: self.offset,
                needed: len - self.remaining(),
            });
        }
        Ok(())
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.buffer[self.offset])
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let value = self.peek_u8()?;
        self.offset += 1;
        Ok(value)
    }

    impl_read_be!(read_u16_be, u16, 2);
    impl_read_be!(read_u32_be, u32, 4);
    impl_read_be!(read_u64_be, u64, 8);
    impl_read_be!(read_i8, i8, 1);
    impl_read_be!(read_i32_be, i32, 4);
    impl_read_be!(read_i64_be, i64, 8);

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.ensure(len)?;
        let slice = &self.buffer[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    /// Skip `len` bytes.
    pub fn advance(&mut self, len: usize) -> Result<()> {
        self.ensure(len)?;
        self.offset += len;
        Ok(())
    }

    /// Bytes between `start` and the current offset.
    pub(crate) fn consumed_since(&self, start: usize) -> &'a [u8] {
        let buffer: &'a [u8] = self.buffer;
        &buffer[start.min(self.offset)..self.offset]
    }
}
