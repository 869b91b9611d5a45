// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tagged union over the delivery states carried by `transfer` and
//! `disposition` frames.
//!
//! Decoding reads the descriptor once and dispatches on it (by code or by
//! symbolic name) to the matching type's `decode_body`.

use std::fmt;

use super::outcomes::{Accepted, Modified, Rejected, Released};
use super::received::Received;
use crate::codec::{ByteBuffer, Cursor};
use crate::described::{DescribedList, Descriptor, WireDescriptor};
use crate::error::{CodecError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryState {
    Received(Received),
    Accepted(Accepted),
    Rejected(Rejected),
    Released(Released),
    Modified(Modified),
}

/// Descriptors of every variant, in dispatch order.
pub const DELIVERY_STATE_DESCRIPTORS: [Descriptor; 5] = [
    Received::DESCRIPTOR,
    Accepted::DESCRIPTOR,
    Rejected::DESCRIPTOR,
    Released::DESCRIPTOR,
    Modified::DESCRIPTOR,
];

impl DeliveryState {
    pub fn descriptor(&self) -> Descriptor {
        match self {
            DeliveryState::Received(_) => Received::DESCRIPTOR,
            DeliveryState::Accepted(_) => Accepted::DESCRIPTOR,
            DeliveryState::Rejected(_) => Rejected::DESCRIPTOR,
            DeliveryState::Released(_) => Released::DESCRIPTOR,
            DeliveryState::Modified(_) => Modified::DESCRIPTOR,
        }
    }

    /// `true` for outcomes that settle the delivery (everything but `received`).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DeliveryState::Received(_))
    }

    pub fn encode_size(&self) -> usize {
        match self {
            DeliveryState::Received(v) => v.encode_size(),
            DeliveryState::Accepted(v) => v.encode_size(),
            DeliveryState::Rejected(v) => v.encode_size(),
            DeliveryState::Released(v) => v.encode_size(),
            DeliveryState::Modified(v) => v.encode_size(),
        }
    }

    pub fn encode(&self, buf: &mut ByteBuffer) {
        match self {
            DeliveryState::Received(v) => v.encode(buf),
            DeliveryState::Accepted(v) => v.encode(buf),
            DeliveryState::Rejected(v) => v.encode(buf),
            DeliveryState::Released(v) => v.encode(buf),
            DeliveryState::Modified(v) => v.encode(buf),
        }
    }

    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut buf = ByteBuffer::with_capacity(self.encode_size());
        self.encode(&mut buf);
        buf.into_vec()
    }

    /// Decode any delivery state, dispatching on its descriptor.
    pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let wire = WireDescriptor::decode(cursor)?;
        let state = if Received::DESCRIPTOR.matches(&wire) {
            DeliveryState::Received(Received::decode_body(cursor)?)
        } else if Accepted::DESCRIPTOR.matches(&wire) {
            DeliveryState::Accepted(Accepted::decode_body(cursor)?)
        } else if Rejected::DESCRIPTOR.matches(&wire) {
            DeliveryState::Rejected(Rejected::decode_body(cursor)?)
        } else if Released::DESCRIPTOR.matches(&wire) {
            DeliveryState::Released(Released::decode_body(cursor)?)
        } else if Modified::DESCRIPTOR.matches(&wire) {
            DeliveryState::Modified(Modified::decode_body(cursor)?)
        } else {
            return Err(CodecError::UnknownDescriptor {
                found: wire.to_string(),
            });
        };
        log::trace!("[delivery_state] decoded {}", state.descriptor().short_name());
        Ok(state)
    }

    /// Decode from the start of `src`, returning the state and bytes consumed.
    pub fn decode_from_slice(src: &[u8]) -> Result<(Self, usize)> {
        let mut cursor = Cursor::new(src);
        let state = Self::decode(&mut cursor)?;
        Ok((state, cursor.offset()))
    }
}

impl fmt::Display for DeliveryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryState::Received(v) => fmt::Display::fmt(v, f),
            DeliveryState::Accepted(v) => fmt::Display::fmt(v, f),
            DeliveryState::Rejected(v) => fmt::Display::fmt(v, f),
            DeliveryState::Released(v) => fmt::Display::fmt(v, f),
            DeliveryState::Modified(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<Received> for DeliveryState {
    fn from(value: Received) -> Self {
        DeliveryState::Received(value)
    }
}

impl From<Accepted> for DeliveryState {
    fn from(value: Accepted) -> Self {
        DeliveryState::Accepted(value)
    }
}

impl From<Rejected> for DeliveryState {
    fn from(value: Rejected) -> Self {
        DeliveryState::Rejected(value)
    }
}

impl From<Released> for DeliveryState {
    fn from(value: Released) -> Self {
        DeliveryState::Released(value)
    }
}

impl From<Modified> for DeliveryState {
    fn from(value: Modified) -> Self {
        DeliveryState::Modified(value)
    }
}
