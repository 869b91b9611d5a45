// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Null-aware scalar encoding (AMQP 1.0 Part 1 Sec.1.6).
//!
//! Every field of a described list is an `Option<T>`. `None` is written as the
//! one-byte `null` constructor (0x40), so an absent field that precedes a set
//! field always costs exactly one byte. Encoders pick the most compact
//! constructor for the value; decoders accept every constructor of the type.

use super::buffer::{ByteBuffer, Cursor};
use super::format_code::*;
use super::skip::skip_value;
use super::types::{Binary, RawValue, Symbol};
use crate::config::CodecLimits;
use crate::error::{CodecError, Result};

/// Encoding contract for one field slot.
pub trait Scalar: Sized {
    /// Encoded size of `value`, constructor included (1 for `None`).
    fn encode_size(value: Option<&Self>) -> usize;

    /// Append `value` (or `null`) to `buf`.
    fn encode(value: Option<&Self>, buf: &mut ByteBuffer);

    /// Read one value; `Ok(None)` when the wire holds `null`.
    fn decode(cursor: &mut Cursor<'_>) -> Result<Option<Self>>;
}

/// Read a format code. Returns `None` (code consumed) for `null`, otherwise
/// the code and the offset it was read from.
pub(crate) fn read_constructor(cursor: &mut Cursor<'_>) -> Result<Option<(usize, u8)>> {
    let offset = cursor.offset();
    let code = cursor.read_u8()?;
    if code == NULL {
        return Ok(None);
    }
    Ok(Some((offset, code)))
}

pub(crate) fn invalid(offset: usize, code: u8, expected: &'static str) -> CodecError {
    CodecError::InvalidFormatCode {
        offset,
        code,
        expected,
    }
}

impl Scalar for bool {
    fn encode_size(_value: Option<&Self>) -> usize {
        1
    }

    fn encode(value: Option<&Self>, buf: &mut ByteBuffer) {
        buf.write_u8(match value {
            None => NULL,
            Some(true) => BOOLEAN_TRUE,
            Some(false) => BOOLEAN_FALSE,
        });
    }

    fn decode(cursor: &mut Cursor<'_>) -> Result<Option<Self>> {
        let Some((offset, code)) = read_constructor(cursor)? else {
            return Ok(None);
        };
        match code {
            BOOLEAN_TRUE => Ok(Some(true)),
            BOOLEAN_FALSE => Ok(Some(false)),
            BOOLEAN => match cursor.read_u8()? {
                0x00 => Ok(Some(false)),
                0x01 => Ok(Some(true)),
                _ => Err(invalid(offset, code, "boolean")),
            },
            _ => Err(invalid(offset, code, "boolean")),
        }
    }
}

impl Scalar for u8 {
    fn encode_size(value: Option<&Self>) -> usize {
        if value.is_some() {
            2
        } else {
            1
        }
    }

    fn encode(value: Option<&Self>, buf: &mut ByteBuffer) {
        match value {
            None => buf.write_u8(NULL),
            Some(v) => {
                buf.write_u8(UBYTE);
                buf.write_u8(*v);
            }
        }
    }

    fn decode(cursor: &mut Cursor<'_>) -> Result<Option<Self>> {
        let Some((offset, code)) = read_constructor(cursor)? else {
            return Ok(None);
        };
        match code {
            UBYTE => cursor.read_u8().map(Some),
            _ => Err(invalid(offset, code, "ubyte")),
        }
    }
}

impl Scalar for u16 {
    fn encode_size(value: Option<&Self>) -> usize {
        if value.is_some() {
            3
        } else {
            1
        }
    }

    fn encode(value: Option<&Self>, buf: &mut ByteBuffer) {
        match value {
            None => buf.write_u8(NULL),
            Some(v) => {
                buf.write_u8(USHORT);
                buf.write_u16_be(*v);
            }
        }
    }

    fn decode(cursor: &mut Cursor<'_>) -> Result<Option<Self>> {
        let Some((offset, code)) = read_constructor(cursor)? else {
            return Ok(None);
        };
        match code {
            USHORT => cursor.read_u16_be().map(Some),
            _ => Err(invalid(offset, code, "ushort")),
        }
    }
}

impl Scalar for u32 {
    fn encode_size(value: Option<&Self>) -> usize {
        match value.copied() {
            None | Some(0) => 1,
            Some(v) if v <= u32::from(u8::MAX) => 2,
            Some(_) => 5,
        }
    }

    fn encode(value: Option<&Self>, buf: &mut ByteBuffer) {
        match value.copied() {
            None => buf.write_u8(NULL),
            Some(0) => buf.write_u8(UINT0),
            Some(v) if v <= u32::from(u8::MAX) => {
                buf.write_u8(SMALL_UINT);
                buf.write_u8(v as u8);
            }
            Some(v) => {
                buf.write_u8(UINT);
                buf.write_u32_be(v);
            }
        }
    }

    fn decode(cursor: &mut Cursor<'_>) -> Result<Option<Self>> {
        let Some((offset, code)) = read_constructor(cursor)? else {
            return Ok(None);
        };
        match code {
            UINT0 => Ok(Some(0)),
            SMALL_UINT => Ok(Some(u32::from(cursor.read_u8()?))),
            UINT => cursor.read_u32_be().map(Some),
            _ => Err(invalid(offset, code, "uint")),
        }
    }
}

impl Scalar for u64 {
    fn encode_size(value: Option<&Self>) -> usize {
        match value.copied() {
            None | Some(0) => 1,
            Some(v) if v <= u64::from(u8::MAX) => 2,
            Some(_) => 9,
        }
    }

    fn encode(value: Option<&Self>, buf: &mut ByteBuffer) {
        match value.copied() {
            None => buf.write_u8(NULL),
            Some(0) => buf.write_u8(ULONG0),
            Some(v) if v <= u64::from(u8::MAX) => {
                buf.write_u8(SMALL_ULONG);
                buf.write_u8(v as u8);
            }
            Some(v) => {
                buf.write_u8(ULONG);
                buf.write_u64_be(v);
            }
        }
    }

    fn decode(cursor: &mut Cursor<'_>) -> Result<Option<Self>> {
        let Some((offset, code)) = read_constructor(cursor)? else {
            return Ok(None);
        };
        match code {
            ULONG0 => Ok(Some(0)),
            SMALL_ULONG => Ok(Some(u64::from(cursor.read_u8()?))),
            ULONG => cursor.read_u64_be().map(Some),
            _ => Err(invalid(offset, code, "ulong")),
        }
    }
}

impl Scalar for i32 {
    fn encode_size(value: Option<&Self>) -> usize {
        match value.copied() {
            None => 1,
            Some(v) if i8::try_from(v).is_ok() => 2,
            Some(_) => 5,
        }
    }

    fn encode(value: Option<&Self>, buf: &mut ByteBuffer) {
        let Some(v) = value.copied() else {
            buf.write_u8(NULL);
            return;
        };
        match i8::try_from(v) {
            Ok(small) => {
                buf.write_u8(SMALL_INT);
                buf.write_i8(small);
            }
            Err(_) => {
                buf.write_u8(INT);
                buf.write_i32_be(v);
            }
        }
    }

    fn decode(cursor: &mut Cursor<'_>) -> Result<Option<Self>> {
        let Some((offset, code)) = read_constructor(cursor)? else {
            return Ok(None);
        };
        match code {
            SMALL_INT => Ok(Some(i32::from(cursor.read_i8()?))),
            INT => cursor.read_i32_be().map(Some),
            _ => Err(invalid(offset, code, "int")),
        }
    }
}

impl Scalar for i64 {
    fn encode_size(value: Option<&Self>) -> usize {
        match value.copied() {
            None => 1,
            Some(v) if i8::try_from(v).is_ok() => 2,
            Some(_) => 9,
        }
    }

    fn encode(value: Option<&Self>, buf: &mut ByteBuffer) {
        let Some(v) = value.copied() else {
            buf.write_u8(NULL);
            return;
        };
        match i8::try_from(v) {
            Ok(small) => {
                buf.write_u8(SMALL_LONG);
                buf.write_i8(small);
            }
            Err(_) => {
                buf.write_u8(LONG);
                buf.write_i64_be(v);
            }
        }
    }

    fn decode(cursor: &mut Cursor<'_>) -> Result<Option<Self>> {
        let Some((offset, code)) = read_constructor(cursor)? else {
            return Ok(None);
        };
        match code {
            SMALL_LONG => Ok(Some(i64::from(cursor.read_i8()?))),
            LONG => cursor.read_i64_be().map(Some),
            _ => Err(invalid(offset, code, "long")),
        }
    }
}

// ============================================================================
// Variable-width types (str8/str32, sym8/sym32, vbin8/vbin32)
// ============================================================================

/// Constructor pair for a variable-width type.
struct VariableCodes {
    short: u8,
    long: u8,
    expected: &'static str,
}

const STRING_CODES: VariableCodes = VariableCodes {
    short: STRING8_UTF8,
    long: STRING32_UTF8,
    expected: "string",
};

const SYMBOL_CODES: VariableCodes = VariableCodes {
    short: SYMBOL8,
    long: SYMBOL32,
    expected: "symbol",
};

const BINARY_CODES: VariableCodes = VariableCodes {
    short: BINARY8,
    long: BINARY32,
    expected: "binary",
};

fn variable_size(len: usize) -> usize {
    if len <= usize::from(u8::MAX) {
        2 + len
    } else {
        5 + len
    }
}

fn encode_variable(codes: &VariableCodes, bytes: &[u8], buf: &mut ByteBuffer) {
    match u8::try_from(bytes.len()) {
        Ok(len) => {
            buf.write_u8(codes.short);
            buf.write_u8(len);
        }
        Err(_) => {
            buf.write_u8(codes.long);
            // Lengths above u32::MAX cannot be represented; AMQP frames are
            // bounded well below that by the transport.
            buf.write_u32_be(bytes.len() as u32);
        }
    }
    buf.write_bytes(bytes);
}

fn decode_variable<'a>(
    codes: &VariableCodes,
    offset: usize,
    code: u8,
    cursor: &mut Cursor<'a>,
) -> Result<&'a [u8]> {
    let len = if code == codes.short {
        usize::from(cursor.read_u8()?)
    } else if code == codes.long {
        cursor.read_u32_be()? as usize
    } else {
        return Err(invalid(offset, code, codes.expected));
    };
    CodecLimits::check(
        "variable-width length",
        len,
        cursor.limits().max_variable_size,
    )?;
    cursor.read_bytes(len)
}

fn decode_utf8(
    codes: &VariableCodes,
    cursor: &mut Cursor<'_>,
) -> Result<Option<String>> {
    let Some((offset, code)) = read_constructor(cursor)? else {
        return Ok(None);
    };
    let bytes = decode_variable(codes, offset, code, cursor)?;
    let text = std::str::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8 { offset })?;
    Ok(Some(text.to_owned()))
}

impl Scalar for String {
    fn encode_size(value: Option<&Self>) -> usize {
        value.map_or(1, |v| variable_size(v.len()))
    }

    fn encode(value: Option<&Self>, buf: &mut ByteBuffer) {
        match value {
            None => buf.write_u8(NULL),
            Some(v) => encode_variable(&STRING_CODES, v.as_bytes(), buf),
        }
    }

    fn decode(cursor: &mut Cursor<'_>) -> Result<Option<Self>> {
        decode_utf8(&STRING_CODES, cursor)
    }
}

impl Scalar for Symbol {
    fn encode_size(value: Option<&Self>) -> usize {
        value.map_or(1, |v| variable_size(v.0.len()))
    }

    fn encode(value: Option<&Self>, buf: &mut ByteBuffer) {
        match value {
            None => buf.write_u8(NULL),
            Some(v) => encode_variable(&SYMBOL_CODES, v.0.as_bytes(), buf),
        }
    }

    fn decode(cursor: &mut Cursor<'_>) -> Result<Option<Self>> {
        Ok(decode_utf8(&SYMBOL_CODES, cursor)?.map(Symbol))
    }
}

impl Scalar for Binary {
    fn encode_size(value: Option<&Self>) -> usize {
        value.map_or(1, |v| variable_size(v.0.len()))
    }

    fn encode(value: Option<&Self>, buf: &mut ByteBuffer) {
        match value {
            None => buf.write_u8(NULL),
            Some(v) => encode_variable(&BINARY_CODES, &v.0, buf),
        }
    }

    fn decode(cursor: &mut Cursor<'_>) -> Result<Option<Self>> {
        let Some((offset, code)) = read_constructor(cursor)? else {
            return Ok(None);
        };
        let bytes = decode_variable(&BINARY_CODES, offset, code, cursor)?;
        Ok(Some(Binary(bytes.to_vec())))
    }
}

impl Scalar for RawValue {
    fn encode_size(value: Option<&Self>) -> usize {
        value.map_or(1, |v| v.0.len())
    }

    fn encode(value: Option<&Self>, buf: &mut ByteBuffer) {
        match value {
            None => buf.write_u8(NULL),
            Some(v) => buf.write_bytes(&v.0),
        }
    }

    fn decode(cursor: &mut Cursor<'_>) -> Result<Option<Self>> {
        if cursor.peek_u8()? == NULL {
            cursor.advance(1)?;
            return Ok(None);
        }
        let start = cursor.offset();
        skip_value(cursor)?;
        Ok(Some(RawValue(cursor.consumed_since(start).to_vec())))
    }
}
