// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for AMQP wire encoding/decoding.

use std::fmt;

/// Result type for codec operations.
pub type Result<T> = core::result::Result<T, CodecError>;

/// Decode (and configuration) failures.
///
/// Encoding a well-formed in-memory value never fails, so every variant except
/// `Config` originates from a decoder reading untrusted bytes. The cursor
/// position after an error is unspecified; callers discard the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input ended before `needed` more bytes could be read at `offset`.
    UnexpectedEof { offset: usize, needed: usize },
    /// The format code at `offset` is not valid for the value being read.
    InvalidFormatCode {
        offset: usize,
        code: u8,
        expected: &'static str,
    },
    /// A described value carried a different descriptor than the target type.
    DescriptorMismatch {
        expected: &'static str,
        found: String,
    },
    /// No known type is registered for the descriptor.
    UnknownDescriptor { found: String },
    /// The list header size disagrees with the bytes its fields occupied.
    InvalidListSize {
        offset: usize,
        declared: usize,
        consumed: usize,
    },
    /// String or symbol bytes are not valid UTF-8.
    InvalidUtf8 { offset: usize },
    /// A decode limit from `CodecLimits` was exceeded.
    LimitExceeded {
        what: &'static str,
        value: usize,
        limit: usize,
    },
    /// Limits configuration could not be parsed.
    Config { reason: String },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnexpectedEof { offset, needed } => write!(
                f,
                "unexpected end of buffer at offset {}: {} more byte(s) needed",
                offset, needed
            ),
            CodecError::InvalidFormatCode {
                offset,
                code,
                expected,
            } => write!(
                f,
                "invalid format code 0x{:02x} at offset {} (expected {})",
                code, offset, expected
            ),
            CodecError::DescriptorMismatch { expected, found } => {
                write!(f, "descriptor mismatch: expected {}, found {}", expected, found)
            }
            CodecError::UnknownDescriptor { found } => write!(f, "unknown descriptor {}", found),
            CodecError::InvalidListSize {
                offset,
                declared,
                consumed,
            } => write!(
                f,
                "list at offset {} declares {} byte(s) but fields consumed {}",
                offset, declared, consumed
            ),
            CodecError::InvalidUtf8 { offset } => {
                write!(f, "invalid utf-8 in string at offset {}", offset)
            }
            CodecError::LimitExceeded { what, value, limit } => {
                write!(f, "{} {} exceeds limit {}", what, value, limit)
            }
            CodecError::Config { reason } => write!(f, "invalid codec configuration: {}", reason),
        }
    }
}

impl std::error::Error for CodecError {}
