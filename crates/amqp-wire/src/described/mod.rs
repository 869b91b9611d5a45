// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Described lists: composite values encoded as a descriptor plus an ordered
//! list of optional fields.
//!
//! Concrete types implement four per-slot hooks; the size, encode and decode
//! algorithms live here once and are shared by every composite type.
//!
//! # Trailing omission
//!
//! Fields after the last set field are not written at all, and the list
//! count shrinks with them. An unset field *before* a set field is still
//! written as `null` because field position is the only thing that
//! identifies a field on the wire. [`DescribedList::encoded_field_count`] is
//! the single place that decides where the list ends; both
//! [`DescribedList::value_size`] and [`DescribedList::encode`] go through it.
//!
//! # Compatibility
//!
//! - A peer may send fewer fields than `FIELD_COUNT`: the rest stay `None`.
//! - A peer may send more: the extra fields are skipped with
//!   [`skip_value`] and dropped.
//!
//! Slot order is therefore part of the wire contract and must never change
//! for a published descriptor.

pub mod descriptor;
pub mod list;

use std::fmt;

use crate::codec::{skip_value, ByteBuffer, Cursor};
use crate::error::{CodecError, Result};

pub use descriptor::{Descriptor, WireDescriptor};
pub use list::ListHeader;

/// A composite type encoded as a described list.
///
/// Implementors provide the per-slot hooks; everything else has a default
/// implementation that should not be overridden.
pub trait DescribedList: Default {
    /// Wire identity of the type.
    const DESCRIPTOR: Descriptor;

    /// Number of fields this definition knows about.
    const FIELD_COUNT: usize;

    /// Whether slot `index` holds a value.
    fn is_field_set(&self, index: usize) -> bool;

    /// Encoded size of slot `index` (1 for an unset slot).
    fn field_size(&self, index: usize) -> usize;

    /// Write slot `index` (or `null`).
    fn encode_field(&self, index: usize, buf: &mut ByteBuffer);

    /// Read one wire field into slot `index`.
    fn decode_field(&mut self, index: usize, cursor: &mut Cursor<'_>) -> Result<()>;

    /// Number of fields that go on the wire: 1 + index of the last set field,
    /// or 0 when no field is set.
    fn encoded_field_count(&self) -> usize {
        (0..Self::FIELD_COUNT)
            .rev()
            .find(|&index| self.is_field_set(index))
            .map_or(0, |last| last + 1)
    }

    /// Bytes of the field payload, excluding descriptor and list header.
    fn value_size(&self) -> usize {
        (0..self.encoded_field_count())
            .map(|index| self.field_size(index))
            .sum()
    }

    /// Total encoded size: descriptor, list header and fields.
    fn encode_size(&self) -> usize {
        let count = self.encoded_field_count();
        let payload = self.value_size();
        Self::DESCRIPTOR.encode_size() + list::header_size(payload, count) + payload
    }

    /// Append the described list to `buf`.
    fn encode(&self, buf: &mut ByteBuffer) {
        let count = self.encoded_field_count();
        let payload = self.value_size();
        Self::DESCRIPTOR.encode(buf);
        list::encode_header(payload, count, buf);
        for index in 0..count {
            self.encode_field(index, buf);
        }
    }

    fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = ByteBuffer::with_capacity(self.encode_size());
        self.encode(&mut buf);
        buf.into_vec()
    }

    /// Populate slots from `count` wire fields at the cursor.
    ///
    /// Known slots are filled in order; wire fields beyond `FIELD_COUNT` are
    /// consumed and discarded; slots beyond `count` are left untouched.
    fn decode_fields(&mut self, cursor: &mut Cursor<'_>, count: usize) -> Result<()> {
        let mut remaining = count;
        let mut index = 0;
        while remaining > 0 && index < Self::FIELD_COUNT {
            self.decode_field(index, cursor)?;
            index += 1;
            remaining -= 1;
        }

        if remaining > 0 {
            log::trace!(
                "[described] {}: skipping {} unknown trailing field(s)",
                Self::DESCRIPTOR.name,
                remaining
            );
            for _ in 0..remaining {
                skip_value(cursor)?;
            }
        }
        Ok(())
    }

    /// Decode the list part of the value (the descriptor was already read).
    fn decode_body(cursor: &mut Cursor<'_>) -> Result<Self> {
        let header = list::decode_header(cursor)?;
        let start = cursor.offset();

        let mut value = Self::default();
        value.decode_fields(cursor, header.count)?;

        let consumed = cursor.offset() - start;
        if consumed != header.payload_len() {
            return Err(CodecError::InvalidListSize {
                offset: header.offset,
                declared: header.payload_len(),
                consumed,
            });
        }
        Ok(value)
    }

    /// Decode a complete described value and check its descriptor.
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let wire = WireDescriptor::decode(cursor)?;
        if !Self::DESCRIPTOR.matches(&wire) {
            return Err(CodecError::DescriptorMismatch {
                expected: Self::DESCRIPTOR.name,
                found: wire.to_string(),
            });
        }
        Self::decode_body(cursor)
    }

    /// Decode from the start of `src`, returning the value and bytes consumed.
    fn decode_from_slice(src: &[u8]) -> Result<(Self, usize)> {
        let mut cursor = Cursor::new(src);
        let value = Self::decode(&mut cursor)?;
        Ok((value, cursor.offset()))
    }
}

/// Implement [`Scalar`](crate::codec::Scalar) for a [`DescribedList`] so it
/// can be a field of another composite (`null` when absent).
#[macro_export]
macro_rules! impl_scalar_for_described {
    ($ty:ty) => {
        impl $crate::codec::Scalar for $ty {
            fn encode_size(value: Option<&Self>) -> usize {
                value.map_or(1, $crate::described::DescribedList::encode_size)
            }

            fn encode(value: Option<&Self>, buf: &mut $crate::codec::ByteBuffer) {
                match value {
                    None => buf.write_u8($crate::codec::format_code::NULL),
                    Some(v) => $crate::described::DescribedList::encode(v, buf),
                }
            }

            fn decode(cursor: &mut $crate::codec::Cursor<'_>) -> $crate::Result<Option<Self>> {
                if cursor.peek_u8()? == $crate::codec::format_code::NULL {
                    cursor.advance(1)?;
                    return Ok(None);
                }
                <$ty as $crate::described::DescribedList>::decode(cursor).map(Some)
            }
        }
    };
}

/// Renders `name(field=value, ...)`, listing only set fields.
pub struct FieldFormatter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    count: usize,
}

impl<'a, 'b> FieldFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>, name: &str) -> std::result::Result<Self, fmt::Error> {
        f.write_str(name)?;
        f.write_str("(")?;
        Ok(Self { f, count: 0 })
    }

    pub fn field<T: fmt::Display>(&mut self, name: &str, value: Option<&T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if self.count > 0 {
            self.f.write_str(", ")?;
        }
        self.count += 1;
        write!(self.f, "{}={}", name, value)
    }

    pub fn finish(self) -> fmt::Result {
        self.f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::format_code::*;
    use crate::codec::Scalar;

    /// Three-slot test type: uint, string, ulong.
    #[derive(Debug, Default, Clone, PartialEq)]
    struct Probe {
        a: Option<u32>,
        b: Option<String>,
        c: Option<u64>,
    }

    impl DescribedList for Probe {
        const DESCRIPTOR: Descriptor = Descriptor::new("test:probe:list", 0x0000_1234_0000_0001);
        const FIELD_COUNT: usize = 3;

        fn is_field_set(&self, index: usize) -> bool {
            match index {
                0 => self.a.is_some(),
                1 => self.b.is_some(),
                2 => self.c.is_some(),
                _ => false,
            }
        }

        fn field_size(&self, index: usize) -> usize {
            match index {
                0 => u32::encode_size(self.a.as_ref()),
                1 => String::encode_size(self.b.as_ref()),
                2 => u64::encode_size(self.c.as_ref()),
                _ => 0,
            }
        }

        fn encode_field(&self, index: usize, buf: &mut ByteBuffer) {
            match index {
                0 => u32::encode(self.a.as_ref(), buf),
                1 => String::encode(self.b.as_ref(), buf),
                2 => u64::encode(self.c.as_ref(), buf),
                _ => {}
            }
        }

        fn decode_field(&mut self, index: usize, cursor: &mut Cursor<'_>) -> Result<()> {
            match index {
                0 => self.a = u32::decode(cursor)?,
                1 => self.b = String::decode(cursor)?,
                2 => self.c = u64::decode(cursor)?,
                _ => {}
            }
            Ok(())
        }
    }

    impl fmt::Display for Probe {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut out = FieldFormatter::new(f, "probe")?;
            out.field("a", self.a.as_ref())?;
            out.field("b", self.b.as_ref())?;
            out.field("c", self.c.as_ref())?;
            out.finish()
        }
    }

    /// Descriptor of `Probe` as written: 0x00, ulong code.
    fn probe_descriptor() -> Vec<u8> {
        let mut buf = ByteBuffer::new();
        Probe::DESCRIPTOR.encode(&mut buf);
        buf.into_vec()
    }

    #[test]
    fn test_encoded_field_count_tracks_last_set_field() {
        let mut probe = Probe::default();
        assert_eq!(probe.encoded_field_count(), 0);
        probe.a = Some(1);
        assert_eq!(probe.encoded_field_count(), 1);
        probe.c = Some(1);
        assert_eq!(probe.encoded_field_count(), 3);
        probe.a = None;
        assert_eq!(probe.encoded_field_count(), 3);
        probe.c = None;
        assert_eq!(probe.encoded_field_count(), 0);
    }

    #[test]
    fn test_value_size_counts_only_emitted_slots() {
        let probe = Probe {
            a: None,
            b: Some("hi".into()),
            c: None,
        };
        // null (1) + str8 "hi" (4); slot 2 is not emitted.
        assert_eq!(probe.value_size(), 5);
        let bytes = probe.encode_to_vec();
        let header = probe_descriptor().len() + 3;
        assert_eq!(bytes.len() - header, probe.value_size());
        assert_eq!(bytes.len(), probe.encode_size());
    }

    #[test]
    fn test_empty_value_is_list0() {
        let bytes = Probe::default().encode_to_vec();
        let mut expected = probe_descriptor();
        expected.push(LIST0);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_leading_unset_field_is_written_as_null() {
        let probe = Probe {
            a: None,
            b: None,
            c: Some(7),
        };
        let bytes = probe.encode_to_vec();
        let mut expected = probe_descriptor();
        expected.extend_from_slice(&[LIST8, 5, 3, NULL, NULL, SMALL_ULONG, 7]);
        assert_eq!(bytes, expected);

        let (decoded, used) = Probe::decode_from_slice(&bytes).expect("decode");
        assert_eq!(decoded, probe);
        assert_eq!(used, bytes.len());
    }

    #[test]
    fn test_decode_fields_with_fewer_wire_fields() {
        let bytes = [SMALL_UINT, 4];
        let mut probe = Probe::default();
        probe
            .decode_fields(&mut Cursor::new(&bytes), 1)
            .expect("decode");
        assert_eq!(probe.a, Some(4));
        assert_eq!(probe.b, None);
        assert_eq!(probe.c, None);
    }

    #[test]
    fn test_decode_fields_skips_extra_wire_fields() {
        // 3 known fields + a str8 and a described list0 the type does not know.
        let bytes = [
            UINT0, NULL, ULONG0, STRING8_UTF8, 1, b'z', DESCRIBED, SMALL_ULONG, 1, LIST0, 0xee,
        ];
        let mut cursor = Cursor::new(&bytes);
        let mut probe = Probe::default();
        probe.decode_fields(&mut cursor, 5).expect("decode");
        assert_eq!(probe.a, Some(0));
        assert_eq!(probe.b, None);
        assert_eq!(probe.c, Some(0));
        assert_eq!(cursor.offset(), bytes.len() - 1);
    }

    #[test]
    fn test_decode_rejects_size_mismatch() {
        let mut bytes = probe_descriptor();
        // Declares 3 payload bytes but the single field occupies 2.
        bytes.extend_from_slice(&[LIST8, 4, 1, SMALL_UINT, 4, NULL]);
        let err = Probe::decode_from_slice(&bytes).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidListSize {
                declared: 3,
                consumed: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_rejects_other_descriptor() {
        let bytes = [DESCRIBED, SMALL_ULONG, 0x23, LIST0];
        let err = Probe::decode_from_slice(&bytes).unwrap_err();
        assert_eq!(
            err,
            CodecError::DescriptorMismatch {
                expected: "test:probe:list",
                found: "0x0000000000000023".into(),
            }
        );
    }

    #[test]
    fn test_field_formatter_lists_set_fields_only() {
        let probe = Probe {
            a: Some(1),
            b: None,
            c: Some(3),
        };
        assert_eq!(probe.to_string(), "probe(a=1, c=3)");
        assert_eq!(Probe::default().to_string(), "probe()");
    }
}
