// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! AMQP 1.0 format codes (OASIS AMQP 1.0, Part 1 Sec.1.6).
//!
//! The high nibble of a format code fixes how many bytes follow it, which is
//! what lets a decoder skip values of types it does not understand.

/// Prefix of a described value (descriptor, then value).
pub const DESCRIBED: u8 = 0x00;

pub const NULL: u8 = 0x40;
pub const BOOLEAN_TRUE: u8 = 0x41;
pub const BOOLEAN_FALSE: u8 = 0x42;
pub const UINT0: u8 = 0x43;
pub const ULONG0: u8 = 0x44;
pub const LIST0: u8 = 0x45;

pub const UBYTE: u8 = 0x50;
pub const SMALL_UINT: u8 = 0x52;
pub const SMALL_ULONG: u8 = 0x53;
pub const SMALL_INT: u8 = 0x54;
pub const SMALL_LONG: u8 = 0x55;
pub const BOOLEAN: u8 = 0x56;

pub const USHORT: u8 = 0x60;

pub const UINT: u8 = 0x70;
pub const INT: u8 = 0x71;

pub const ULONG: u8 = 0x80;
pub const LONG: u8 = 0x81;

pub const BINARY8: u8 = 0xa0;
pub const STRING8_UTF8: u8 = 0xa1;
pub const SYMBOL8: u8 = 0xa3;

pub const BINARY32: u8 = 0xb0;
pub const STRING32_UTF8: u8 = 0xb1;
pub const SYMBOL32: u8 = 0xb3;

pub const LIST8: u8 = 0xc0;
pub const MAP8: u8 = 0xc1;

pub const LIST32: u8 = 0xd0;
pub const MAP32: u8 = 0xd1;

pub const ARRAY8: u8 = 0xe0;
pub const ARRAY32: u8 = 0xf0;

/// How the bytes following a format code are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Described value: a descriptor value and a value follow.
    Described,
    /// Exactly this many bytes follow.
    Fixed(usize),
    /// A size prefix of this many bytes (1 or 4) precedes the payload.
    Sized(usize),
}

/// Width category of `code`, or `None` if the code is not a valid constructor.
pub const fn width(code: u8) -> Option<Width> {
    match code >> 4 {
        0x0 if code == DESCRIBED => Some(Width::Described),
        0x4 => Some(Width::Fixed(0)),
        0x5 => Some(Width::Fixed(1)),
        0x6 => Some(Width::Fixed(2)),
        0x7 => Some(Width::Fixed(4)),
        0x8 => Some(Width::Fixed(8)),
        0x9 => Some(Width::Fixed(16)),
        0xa | 0xc | 0xe => Some(Width::Sized(1)),
        0xb | 0xd | 0xf => Some(Width::Sized(4)),
        _ => None,
    }
}
