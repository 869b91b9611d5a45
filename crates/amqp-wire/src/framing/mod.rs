// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! AMQP 1.0 delivery states built on [`DescribedList`](crate::described::DescribedList).

pub mod amqp_error;
pub mod delivery_state;
pub mod outcomes;
pub mod received;

pub use amqp_error::{condition, AmqpError};
pub use delivery_state::{DeliveryState, DELIVERY_STATE_DESCRIPTORS};
pub use outcomes::{Accepted, Modified, Rejected, Released};
pub use received::Received;
