// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Bench code readability over pedantic
#![allow(clippy::missing_panics_doc)] // Benches panic on failure
#![allow(clippy::semicolon_if_nothing_returned)] // Benchmark code formatting
#![allow(clippy::unreadable_literal)] // Large test constants

use amqp_wire::{
    condition, AmqpError, DeliveryState, DescribedList, Modified, Received, Rejected,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// ============================================================================
// Encode
// ============================================================================

/// Benchmark: size + encode of a fully populated `received`
fn bench_encode_received(c: &mut Criterion) {
    let value = Received::new()
        .with_section_number(42)
        .with_section_offset(1_048_576);
    c.bench_function("encode_received", |b| {
        b.iter(|| black_box(&value).encode_to_vec())
    });
}

/// Benchmark: trailing-field count on a sparse value
fn bench_encoded_field_count(c: &mut Criterion) {
    let value = Modified::new().with_delivery_failed(true);
    c.bench_function("encoded_field_count_modified", |b| {
        b.iter(|| black_box(&value).encoded_field_count())
    });
}

/// Benchmark: nested composite (rejected carrying an error)
fn bench_encode_rejected(c: &mut Criterion) {
    let value = Rejected::new(
        AmqpError::new(condition::RESOURCE_LIMIT_EXCEEDED).with_description("queue full"),
    );
    c.bench_function("encode_rejected", |b| {
        b.iter(|| black_box(&value).encode_to_vec())
    });
}

// ============================================================================
// Decode
// ============================================================================

/// Benchmark: typed decode of `received`
fn bench_decode_received(c: &mut Criterion) {
    let bytes = Received::new()
        .with_section_number(42)
        .with_section_offset(1_048_576)
        .encode_to_vec();
    c.bench_function("decode_received", |b| {
        b.iter(|| Received::decode_from_slice(black_box(&bytes)).unwrap())
    });
}

/// Benchmark: descriptor dispatch over every delivery state
fn bench_decode_dispatch(c: &mut Criterion) {
    let encoded: Vec<Vec<u8>> = [
        DeliveryState::from(Received::new().with_section_number(1)),
        DeliveryState::Accepted(amqp_wire::Accepted),
        DeliveryState::from(Rejected::new(AmqpError::new(condition::NOT_FOUND))),
        DeliveryState::Released(amqp_wire::Released),
        DeliveryState::from(Modified::new().with_undeliverable_here(true)),
    ]
    .iter()
    .map(DeliveryState::encode_to_vec)
    .collect();

    c.bench_function("decode_delivery_state_dispatch", |b| {
        b.iter(|| {
            for bytes in &encoded {
                black_box(DeliveryState::decode_from_slice(bytes).unwrap());
            }
        })
    });
}

/// Benchmark: skipping unknown trailing fields from a newer peer
fn bench_decode_with_extra_fields(c: &mut Criterion) {
    // received + 4 unknown fields: smalluint, str8 "abc", true, null
    let bytes = [
        0x00, 0x53, 0x23, 0xc0, 0x0e, 0x06, 0x52, 0x01, 0x53, 0x02, 0x52, 0x07, 0xa1, 0x03, b'a',
        b'b', b'c', 0x41, 0x40,
    ];
    c.bench_function("decode_received_skip_extra", |b| {
        b.iter(|| Received::decode_from_slice(black_box(&bytes)).unwrap())
    });
}

criterion_group!(
    encode,
    bench_encode_received,
    bench_encoded_field_count,
    bench_encode_rejected
);
criterion_group!(
    decode,
    bench_decode_received,
    bench_decode_dispatch,
    bench_decode_with_extra_fields
);
criterion_main!(encode, decode);
