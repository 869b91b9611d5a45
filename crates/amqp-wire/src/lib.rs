// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # amqp-wire - AMQP 1.0 described-list value codec
//!
//! Encodes and decodes AMQP 1.0 composite values: a descriptor followed by an
//! ordered list of optional fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use amqp_wire::{DeliveryState, DescribedList, Received};
//!
//! let received = Received::new().with_section_number(5);
//! let bytes = received.encode_to_vec();
//! assert_eq!(bytes.len(), received.encode_size());
//!
//! let (state, _used) = DeliveryState::decode_from_slice(&bytes)?;
//! assert_eq!(state.to_string(), "received(section-number=5)");
//! # Ok::<(), amqp_wire::CodecError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |  framing     Received | Accepted | Rejected | Released | Modified   |
//! |              AmqpError | DeliveryState (descriptor dispatch)        |
//! +---------------------------------------------------------------------+
//! |  described   DescribedList (size / encode / decode, trailing        |
//! |              omission, unknown-field skipping) | Descriptor | list  |
//! +---------------------------------------------------------------------+
//! |  codec       Scalar (null-aware primitives) | skip_value            |
//! |              ByteBuffer / Cursor | format codes                     |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DescribedList`] | Generic composite codec, implemented per type |
//! | [`Scalar`] | Nullable primitive codec used for each field slot |
//! | [`Received`] | Partial-transfer delivery state (section number/offset) |
//! | [`DeliveryState`] | Any delivery state, decoded by descriptor |
//! | [`CodecLimits`] | Decode limits for untrusted input |
//!
//! ## See Also
//!
//! - [AMQP 1.0 Specification](https://docs.oasis-open.org/amqp/core/v1.0/amqp-core-complete-v1.0.pdf)

/// AMQP primitive types, buffers and format codes.
pub mod codec;
/// Compile-time defaults and decode limits.
pub mod config;
/// Composite values: descriptors, list headers, `DescribedList`.
pub mod described;
/// Codec error type.
pub mod error;
/// Delivery states.
pub mod framing;

pub use codec::{skip_value, Binary, ByteBuffer, Cursor, RawValue, Scalar, Symbol};
pub use config::CodecLimits;
pub use described::{DescribedList, Descriptor, FieldFormatter, WireDescriptor};
pub use error::{CodecError, Result};
pub use framing::{
    condition, Accepted, AmqpError, DeliveryState, Modified, Received, Rejected, Released,
};
