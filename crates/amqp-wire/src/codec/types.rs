// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Wire newtypes that share a Rust representation with other AMQP types.

use std::fmt;

/// AMQP `symbol`: a short ASCII identifier such as `amqp:internal-error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// AMQP `binary`: opaque bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Binary(pub Vec<u8>);

impl From<Vec<u8>> for Binary {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

/// One complete encoded value kept verbatim (format code included).
///
/// Used for fields whose type this crate does not model (maps such as
/// `fields` or `annotations`). Decoding consumes exactly one value with
/// [`skip_value`](crate::codec::skip_value); encoding writes the bytes back.
///
/// Only [`RawValue::from_encoded`] and `Scalar::decode` build one; there is
/// no empty value:
///
/// ```compile_fail
/// let empty = amqp_wire::RawValue::default();
/// ```
///
/// ```compile_fail
/// let empty = amqp_wire::RawValue(Vec::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawValue(pub(crate) Vec<u8>);

impl RawValue {
    /// Wrap an already-encoded value.
    ///
    /// The bytes must hold exactly one non-null encoded value; this is checked
    /// so a `RawValue` can never corrupt the list it is written into. Absence
    /// is expressed with `Option::None`, not an encoded null.
    pub fn from_encoded(bytes: Vec<u8>) -> crate::Result<Self> {
        if bytes.first() == Some(&crate::codec::format_code::NULL) {
            return Err(crate::CodecError::InvalidFormatCode {
                offset: 0,
                code: crate::codec::format_code::NULL,
                expected: "non-null value",
            });
        }
        let mut cursor = crate::codec::Cursor::new(&bytes);
        crate::codec::skip_value(&mut cursor)?;
        if !cursor.is_eof() {
            return Err(crate::CodecError::InvalidListSize {
                offset: 0,
                declared: bytes.len(),
                consumed: cursor.offset(),
            });
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str("0x")?;
    for b in bytes {
        write!(f, "{:02x}", b)?;
    }
    Ok(())
}
