// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Terminal delivery outcomes (AMQP 1.0 Part 3 Sec.3.4.2-3.4.5).
//!
//! | outcome | descriptor | code | fields |
//! |---------|------------|------|--------|
//! | accepted | `amqp:accepted:list` | 0x24 | none |
//! | rejected | `amqp:rejected:list` | 0x25 | error |
//! | released | `amqp:released:list` | 0x26 | none |
//! | modified | `amqp:modified:list` | 0x27 | delivery-failed, undeliverable-here, message-annotations |

use std::fmt;

use super::amqp_error::AmqpError;
use crate::codec::{ByteBuffer, Cursor, RawValue, Scalar};
use crate::described::{DescribedList, Descriptor, FieldFormatter};
use crate::error::Result;

/// Implement `DescribedList` and `Display` for an outcome without fields.
///
/// Such lists still go through the generic algorithm: they encode as `list0`
/// and skip whatever fields a newer peer may add.
macro_rules! impl_marker_outcome {
    ($ty:ident, $name:expr, $code:expr, $label:expr) => {
        impl DescribedList for $ty {
            const DESCRIPTOR: Descriptor = Descriptor::new($name, $code);
            const FIELD_COUNT: usize = 0;

            fn is_field_set(&self, _index: usize) -> bool {
                false
            }

            fn field_size(&self, _index: usize) -> usize {
                0
            }

            fn encode_field(&self, _index: usize, _buf: &mut ByteBuffer) {}

            fn decode_field(&mut self, _index: usize, _cursor: &mut Cursor<'_>) -> Result<()> {
                Ok(())
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                FieldFormatter::new(f, $label)?.finish()
            }
        }
    };
}

/// The message was processed successfully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Accepted;

impl_marker_outcome!(Accepted, "amqp:accepted:list", 0x0000_0000_0000_0024, "accepted");

/// The message was not and will not be processed by this receiver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Released;

impl_marker_outcome!(Released, "amqp:released:list", 0x0000_0000_0000_0026, "released");

/// The message is invalid and cannot be processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rejected {
    pub error: Option<AmqpError>,
}

impl Rejected {
    pub fn new(error: AmqpError) -> Self {
        Self { error: Some(error) }
    }
}

impl DescribedList for Rejected {
    const DESCRIPTOR: Descriptor = Descriptor::new("amqp:rejected:list", 0x0000_0000_0000_0025);
    const FIELD_COUNT: usize = 1;

    fn is_field_set(&self, index: usize) -> bool {
        index == 0 && self.error.is_some()
    }

    fn field_size(&self, index: usize) -> usize {
        match index {
            0 => <AmqpError as Scalar>::encode_size(self.error.as_ref()),
            _ => 0,
        }
    }

    fn encode_field(&self, index: usize, buf: &mut ByteBuffer) {
        if index == 0 {
            <AmqpError as Scalar>::encode(self.error.as_ref(), buf);
        }
    }

    fn decode_field(&mut self, index: usize, cursor: &mut Cursor<'_>) -> Result<()> {
        if index == 0 {
            self.error = <AmqpError as Scalar>::decode(cursor)?;
        }
        Ok(())
    }
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = FieldFormatter::new(f, "rejected")?;
        out.field("error", self.error.as_ref())?;
        out.finish()
    }
}

/// The message was modified but not processed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modified {
    /// Count the transfer as an unsuccessful delivery attempt.
    pub delivery_failed: Option<bool>,
    /// Do not redeliver to this link endpoint.
    pub undeliverable_here: Option<bool>,
    /// Annotations map merged into the message, kept as encoded bytes.
    pub message_annotations: Option<RawValue>,
}

impl Modified {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delivery_failed(mut self, value: bool) -> Self {
        self.delivery_failed = Some(value);
        self
    }

    #[must_use]
    pub fn with_undeliverable_here(mut self, value: bool) -> Self {
        self.undeliverable_here = Some(value);
        self
    }

    #[must_use]
    pub fn with_message_annotations(mut self, value: RawValue) -> Self {
        self.message_annotations = Some(value);
        self
    }
}

impl DescribedList for Modified {
    const DESCRIPTOR: Descriptor = Descriptor::new("amqp:modified:list", 0x0000_0000_0000_0027);
    const FIELD_COUNT: usize = 3;

    fn is_field_set(&self, index: usize) -> bool {
        match index {
            0 => self.delivery_failed.is_some(),
            1 => self.undeliverable_here.is_some(),
            2 => self.message_annotations.is_some(),
            _ => false,
        }
    }

    fn field_size(&self, index: usize) -> usize {
        match index {
            0 => bool::encode_size(self.delivery_failed.as_ref()),
            1 => bool::encode_size(self.undeliverable_here.as_ref()),
            2 => RawValue::encode_size(self.message_annotations.as_ref()),
            _ => 0,
        }
    }

    fn encode_field(&self, index: usize, buf: &mut ByteBuffer) {
        match index {
            0 => bool::encode(self.delivery_failed.as_ref(), buf),
            1 => bool::encode(self.undeliverable_here.as_ref(), buf),
            2 => RawValue::encode(self.message_annotations.as_ref(), buf),
            _ => {}
        }
    }

    fn decode_field(&mut self, index: usize, cursor: &mut Cursor<'_>) -> Result<()> {
        match index {
            0 => self.delivery_failed = bool::decode(cursor)?,
            1 => self.undeliverable_here = bool::decode(cursor)?,
            2 => self.message_annotations = RawValue::decode(cursor)?,
            _ => {}
        }
        Ok(())
    }
}

impl fmt::Display for Modified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = FieldFormatter::new(f, "modified")?;
        out.field("delivery-failed", self.delivery_failed.as_ref())?;
        out.field("undeliverable-here", self.undeliverable_here.as_ref())?;
        out.field("message-annotations", self.message_annotations.as_ref())?;
        out.finish()
    }
}
