// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `received` delivery state (AMQP 1.0 Part 3 Sec.3.4.1).
//!
//! Reports how much of a partially transferred message the receiver holds,
//! so a resumed link can restart from that point.
//!
//! Wire layout: `amqp:received:list` (0x23)
//!
//! | slot | field | type |
//! |------|-------|------|
//! | 0 | section-number | uint |
//! | 1 | section-offset | ulong |

use std::fmt;

use crate::codec::{ByteBuffer, Cursor, Scalar};
use crate::described::{DescribedList, Descriptor, FieldFormatter};
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Received {
    /// Index of the first message section not yet completely received.
    pub section_number: Option<u32>,
    /// Byte offset inside that section of the first byte not yet received.
    pub section_offset: Option<u64>,
}

impl Received {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_section_number(mut self, value: u32) -> Self {
        self.section_number = Some(value);
        self
    }

    #[must_use]
    pub fn with_section_offset(mut self, value: u64) -> Self {
        self.section_offset = Some(value);
        self
    }
}

impl DescribedList for Received {
    const DESCRIPTOR: Descriptor = Descriptor::new("amqp:received:list", 0x0000_0000_0000_0023);
    const FIELD_COUNT: usize = 2;

    fn is_field_set(&self, index: usize) -> bool {
        match index {
            0 => self.section_number.is_some(),
            1 => self.section_offset.is_some(),
            _ => false,
        }
    }

    fn field_size(&self, index: usize) -> usize {
        match index {
            0 => u32::encode_size(self.section_number.as_ref()),
            1 => u64::encode_size(self.section_offset.as_ref()),
            _ => 0,
        }
    }

    fn encode_field(&self, index: usize, buf: &mut ByteBuffer) {
        match index {
            0 => u32::encode(self.section_number.as_ref(), buf),
            1 => u64::encode(self.section_offset.as_ref(), buf),
            _ => {}
        }
    }

    fn decode_field(&mut self, index: usize, cursor: &mut Cursor<'_>) -> Result<()> {
        match index {
            0 => self.section_number = u32::decode(cursor)?,
            1 => self.section_offset = u64::decode(cursor)?,
            _ => {}
        }
        Ok(())
    }
}

impl fmt::Display for Received {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = FieldFormatter::new(f, "received")?;
        out.field("section-number", self.section_number.as_ref())?;
        out.field("section-offset", self.section_offset.as_ref())?;
        out.finish()
    }
}
