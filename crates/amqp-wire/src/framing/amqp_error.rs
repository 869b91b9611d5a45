// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `error` composite (AMQP 1.0 Part 2 Sec.2.8.14), carried by `rejected`.
//!
//! Wire layout: `amqp:error:list` (0x1d)
//!
//! | slot | field | type |
//! |------|-------|------|
//! | 0 | condition | symbol |
//! | 1 | description | string |
//! | 2 | info | fields (kept as raw bytes) |

use std::fmt;

use crate::codec::{ByteBuffer, Cursor, RawValue, Scalar, Symbol};
use crate::described::{DescribedList, Descriptor, FieldFormatter};
use crate::error::Result;

/// Well-known error conditions.
pub mod condition {
    pub const INTERNAL_ERROR: &str = "amqp:internal-error";
    pub const NOT_FOUND: &str = "amqp:not-found";
    pub const UNAUTHORIZED_ACCESS: &str = "amqp:unauthorized-access";
    pub const DECODE_ERROR: &str = "amqp:decode-error";
    pub const RESOURCE_LIMIT_EXCEEDED: &str = "amqp:resource-limit-exceeded";
    pub const NOT_ALLOWED: &str = "amqp:not-allowed";
    pub const INVALID_FIELD: &str = "amqp:invalid-field";
    pub const NOT_IMPLEMENTED: &str = "amqp:not-implemented";
    pub const PRECONDITION_FAILED: &str = "amqp:precondition-failed";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmqpError {
    pub condition: Option<Symbol>,
    pub description: Option<String>,
    pub info: Option<RawValue>,
}

impl AmqpError {
    pub fn new(condition: impl Into<Symbol>) -> Self {
        Self {
            condition: Some(condition.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_info(mut self, info: RawValue) -> Self {
        self.info = Some(info);
        self
    }
}

impl DescribedList for AmqpError {
    const DESCRIPTOR: Descriptor = Descriptor::new("amqp:error:list", 0x0000_0000_0000_001d);
    const FIELD_COUNT: usize = 3;

    fn is_field_set(&self, index: usize) -> bool {
        match index {
            0 => self.condition.is_some(),
            1 => self.description.is_some(),
            2 => self.info.is_some(),
            _ => false,
        }
    }

    fn field_size(&self, index: usize) -> usize {
        match index {
            0 => Symbol::encode_size(self.condition.as_ref()),
            1 => String::encode_size(self.description.as_ref()),
            2 => RawValue::encode_size(self.info.as_ref()),
            _ => 0,
        }
    }

    fn encode_field(&self, index: usize, buf: &mut ByteBuffer) {
        match index {
            0 => Symbol::encode(self.condition.as_ref(), buf),
            1 => String::encode(self.description.as_ref(), buf),
            2 => RawValue::encode(self.info.as_ref(), buf),
            _ => {}
        }
    }

    fn decode_field(&mut self, index: usize, cursor: &mut Cursor<'_>) -> Result<()> {
        match index {
            0 => self.condition = Symbol::decode(cursor)?,
            1 => self.description = String::decode(cursor)?,
            2 => self.info = RawValue::decode(cursor)?,
            _ => {}
        }
        Ok(())
    }
}

crate::impl_scalar_for_described!(AmqpError);

impl fmt::Display for AmqpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = FieldFormatter::new(f, "error")?;
        out.field("condition", self.condition.as_ref())?;
        out.field("description", self.description.as_ref())?;
        out.field("info", self.info.as_ref())?;
        out.finish()
    }
}
