// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Skip one encoded value without materializing it.
//!
//! Lists from newer peers may carry trailing fields this crate does not know.
//! They still have to be consumed so the enclosing frame parser stays aligned.

use super::buffer::Cursor;
use super::format_code::{width, Width};
use super::scalar::invalid;
use crate::config::CodecLimits;
use crate::error::Result;

/// Consume exactly one encoded value (any type, `null` included).
pub fn skip_value(cursor: &mut Cursor<'_>) -> Result<()> {
    skip_at_depth(cursor, 0)
}

fn skip_at_depth(cursor: &mut Cursor<'_>, depth: usize) -> Result<()> {
    CodecLimits::check(
        "described nesting depth",
        depth,
        cursor.limits().max_nesting_depth,
    )?;

    let offset = cursor.offset();
    let code = cursor.read_u8()?;
    match width(code) {
        Some(Width::Described) => {
            skip_at_depth(cursor, depth + 1)?;
            skip_at_depth(cursor, depth + 1)
        }
        Some(Width::Fixed(len)) => cursor.advance(len),
        Some(Width::Sized(1)) => {
            let len = usize::from(cursor.read_u8()?);
            cursor.advance(len)
        }
        Some(Width::Sized(_)) => {
            let len = cursor.read_u32_be()? as usize;
            cursor.advance(len)
        }
        None => Err(invalid(offset, code, "AMQP constructor")),
    }
}
