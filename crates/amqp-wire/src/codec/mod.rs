// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! AMQP 1.0 primitive type system: buffers, format codes, scalar codec.

pub mod buffer;
pub mod format_code;
pub mod scalar;
pub mod skip;
pub mod types;

pub use buffer::{ByteBuffer, Cursor};
pub use scalar::Scalar;
pub use skip::skip_value;
pub use types::{Binary, RawValue, Symbol};
