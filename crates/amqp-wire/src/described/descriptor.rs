// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Descriptors identifying composite types on the wire.
//!
//! A described value starts with `0x00`, followed by the descriptor (a
//! `ulong` code or a `symbol` name) and then the value itself. Both forms
//! are accepted on decode; the numeric code is always written.

use std::fmt;

use crate::codec::format_code::{
    DESCRIBED, SMALL_ULONG, SYMBOL32, SYMBOL8, ULONG, ULONG0,
};
use crate::codec::scalar::invalid;
use crate::codec::{ByteBuffer, Cursor, Scalar, Symbol};
use crate::error::Result;

/// Name/code pair of a composite type (e.g. `amqp:received:list` / 0x23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    pub name: &'static str,
    pub code: u64,
}

impl Descriptor {
    pub const fn new(name: &'static str, code: u64) -> Self {
        Self { name, code }
    }

    /// Middle segment of the name: `amqp:received:list` -> `received`.
    pub fn short_name(&self) -> &'static str {
        let name: &'static str = self.name;
        name.split(':').nth(1).unwrap_or(name)
    }

    /// Encoded size of the `0x00` prefix plus the numeric code.
    pub fn encode_size(&self) -> usize {
        1 + u64::encode_size(Some(&self.code))
    }

    pub fn encode(&self, buf: &mut ByteBuffer) {
        buf.write_u8(DESCRIBED);
        u64::encode(Some(&self.code), buf);
    }

    /// True when `wire` names this descriptor by code or by symbol.
    pub fn matches(&self, wire: &WireDescriptor) -> bool {
        match wire {
            WireDescriptor::Code(code) => *code == self.code,
            WireDescriptor::Name(name) => name.as_str() == self.name,
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Descriptor as read from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireDescriptor {
    Code(u64),
    Name(Symbol),
}

impl WireDescriptor {
    /// Read the `0x00` prefix and the descriptor that follows it.
    pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let offset = cursor.offset();
        let code = cursor.read_u8()?;
        if code != DESCRIBED {
            return Err(invalid(offset, code, "described value"));
        }

        let offset = cursor.offset();
        let code = cursor.peek_u8()?;
        let descriptor = match code {
            ULONG0 | SMALL_ULONG | ULONG => u64::decode(cursor)?.map(WireDescriptor::Code),
            SYMBOL8 | SYMBOL32 => Symbol::decode(cursor)?.map(WireDescriptor::Name),
            _ => None,
        };
        descriptor.ok_or_else(|| invalid(offset, code, "ulong or symbol descriptor"))
    }
}

impl fmt::Display for WireDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireDescriptor::Code(code) => write!(f, "0x{:016x}", code),
            WireDescriptor::Name(name) => f.write_str(name.as_str()),
        }
    }
}
