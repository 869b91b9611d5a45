// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! List header encoding: `list0`, `list8`, `list32`.
//!
//! Layout after the format code: `[size][count][fields...]`, where `size`
//! counts the bytes of `count` plus the fields, and both `size` and `count`
//! are one byte wide (`list8`) or four bytes wide (`list32`). `list0` has no
//! size, no count and no fields.

use crate::codec::format_code::{LIST0, LIST32, LIST8};
use crate::codec::scalar::invalid;
use crate::codec::{ByteBuffer, Cursor};
use crate::config::CodecLimits;
use crate::error::{CodecError, Result};

/// Decoded list header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListHeader {
    /// Offset of the list format code.
    pub offset: usize,
    /// Declared size (count field + fields).
    pub size: usize,
    /// Number of fields on the wire.
    pub count: usize,
    /// Width of the count field (0, 1 or 4).
    pub count_width: usize,
}

impl ListHeader {
    /// Bytes occupied by the fields alone.
    pub fn payload_len(&self) -> usize {
        self.size - self.count_width
    }
}

/// `true` when `payload` bytes and `count` fields fit the one-byte form.
fn is_compact(payload: usize, count: usize) -> bool {
    payload < usize::from(u8::MAX) && count <= usize::from(u8::MAX)
}

/// Size of the header (format code included) for a list of `count` fields
/// occupying `payload` bytes.
pub fn header_size(payload: usize, count: usize) -> usize {
    if count == 0 {
        1
    } else if is_compact(payload, count) {
        3
    } else {
        9
    }
}

pub fn encode_header(payload: usize, count: usize, buf: &mut ByteBuffer) {
    if count == 0 {
        buf.write_u8(LIST0);
    } else if is_compact(payload, count) {
        buf.write_u8(LIST8);
        buf.write_u8((payload + 1) as u8);
        buf.write_u8(count as u8);
    } else {
        buf.write_u8(LIST32);
        buf.write_u32_be((payload + 4) as u32);
        buf.write_u32_be(count as u32);
    }
}

/// Read a list header and check it against the input and the cursor limits.
pub fn decode_header(cursor: &mut Cursor<'_>) -> Result<ListHeader> {
    let offset = cursor.offset();
    let code = cursor.read_u8()?;
    let (size, count, count_width) = match code {
        LIST0 => (0, 0, 0),
        LIST8 => {
            let size = usize::from(cursor.read_u8()?);
            if size < 1 {
                return Err(CodecError::InvalidListSize {
                    offset,
                    declared: size,
                    consumed: 1,
                });
            }
            (size, usize::from(cursor.read_u8()?), 1)
        }
        LIST32 => {
            let size = cursor.read_u32_be()? as usize;
            if size < 4 {
                return Err(CodecError::InvalidListSize {
                    offset,
                    declared: size,
                    consumed: 4,
                });
            }
            (size, cursor.read_u32_be()? as usize, 4)
        }
        _ => return Err(invalid(offset, code, "list")),
    };

    let header = ListHeader {
        offset,
        size,
        count,
        count_width,
    };
    cursor.ensure(header.payload_len())?;
    CodecLimits::check("list count", count, cursor.limits().max_list_count)?;
    Ok(header)
}
