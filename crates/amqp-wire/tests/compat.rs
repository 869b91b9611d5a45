// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// Interoperability with peers that know a different field set, plus
// malformed-input handling.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::missing_panics_doc)]

use amqp_wire::{
    condition, AmqpError, CodecError, CodecLimits, Cursor, DeliveryState, DescribedList,
    Modified, RawValue, Received, Rejected, Scalar,
};

// ============================================================================
// Forward / backward compatibility
// ============================================================================

#[test]
fn newer_peer_extra_fields_are_skipped() {
    // received with section-number=1, section-offset=2, then three fields
    // from a future revision: uint 7, str8 "new", and a described list0.
    let bytes = [
        0x00, 0x53, 0x23, // descriptor
        0xc0, 0x10, 0x05, // list8 size=16 count=5
        0x52, 0x01, // section-number
        0x53, 0x02, // section-offset
        0x52, 0x07, // unknown
        0xa1, 0x03, b'n', b'e', b'w', // unknown
        0x00, 0x53, 0x99, 0x45, // unknown
    ];
    let (value, used) = Received::decode_from_slice(&bytes).expect("decode");
    assert_eq!(used, bytes.len());
    assert_eq!(
        value,
        Received::new().with_section_number(1).with_section_offset(2)
    );
}

#[test]
fn older_peer_missing_fields_stay_unset() {
    // modified written by a peer that only knows delivery-failed
    let bytes = [0x00, 0x53, 0x27, 0xc0, 0x02, 0x01, 0x41];
    let (value, used) = Modified::decode_from_slice(&bytes).expect("decode");
    assert_eq!(used, bytes.len());
    assert_eq!(value.delivery_failed, Some(true));
    assert_eq!(value.undeliverable_here, None);
    assert_eq!(value.message_annotations, None);
}

#[test]
fn explicit_trailing_nulls_decode_as_unset() {
    // A peer that does not omit trailing nulls.
    let bytes = [0x00, 0x53, 0x23, 0xc0, 0x05, 0x03, 0x52, 0x05, 0x40, 0x40];
    let (value, _) = Received::decode_from_slice(&bytes).expect("decode");
    assert_eq!(value, Received::new().with_section_number(5));
    // Re-encoding drops them.
    assert_eq!(value.encode_to_vec().len(), 8);
}

#[test]
fn symbolic_descriptor_decodes_like_numeric() {
    let mut bytes = vec![0x00, 0xa3, 18];
    bytes.extend_from_slice(b"amqp:received:list");
    bytes.extend_from_slice(&[0xc0, 0x03, 0x01, 0x52, 0x05]);

    let (value, used) = Received::decode_from_slice(&bytes).expect("decode");
    assert_eq!(used, bytes.len());
    assert_eq!(value, Received::new().with_section_number(5));

    let (state, _) = DeliveryState::decode_from_slice(&bytes).expect("dispatch");
    assert_eq!(state, DeliveryState::Received(value));
}

#[test]
fn long_payload_switches_to_list32() {
    let description = "x".repeat(300);
    let value = Rejected::new(
        AmqpError::new(condition::NOT_ALLOWED).with_description(description.clone()),
    );
    let bytes = value.encode_to_vec();
    assert_eq!(bytes.len(), value.encode_size());
    assert_eq!(bytes[3], 0xd0, "outer list must be list32");
    // The nested error list is also above the list8 limit.
    assert_eq!(&bytes[12..16], &[0x00, 0x53, 0x1d, 0xd0]);

    let (decoded, used) = Rejected::decode_from_slice(&bytes).expect("decode");
    assert_eq!(used, bytes.len());
    assert_eq!(
        decoded.error.and_then(|e| e.description),
        Some(description)
    );
}

#[test]
fn list8_boundary() {
    // 254 payload bytes is the largest list8; one more needs list32.
    // null condition (1) + str8 (2 + 251) = 254
    let fits = AmqpError::default().with_description("d".repeat(251));
    assert_eq!(fits.value_size(), 254);
    assert_eq!(fits.encode_to_vec()[3], 0xc0);

    let spills = AmqpError::default().with_description("d".repeat(252));
    assert_eq!(spills.value_size(), 255);
    let bytes = spills.encode_to_vec();
    assert_eq!(bytes[3], 0xd0);
    assert_eq!(bytes.len(), spills.encode_size());
    let (decoded, _) = AmqpError::decode_from_slice(&bytes).expect("decode");
    assert_eq!(decoded, spills);
}

#[test]
fn raw_annotations_keep_size_and_roundtrip() {
    let from_bytes = RawValue::from_encoded(vec![0xc1, 0x01, 0x00]).expect("empty map8");
    let mut cursor = Cursor::new(&[0x52, 0x07]);
    let decoded = <RawValue as Scalar>::decode(&mut cursor)
        .expect("raw")
        .expect("not null");

    for raw in [from_bytes, decoded] {
        let value = Modified::new().with_message_annotations(raw);
        let bytes = value.encode_to_vec();
        assert_eq!(bytes.len(), value.encode_size());
        let (back, used) = Modified::decode_from_slice(&bytes).expect("decode");
        assert_eq!(used, bytes.len());
        assert_eq!(back, value);
    }
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn every_truncation_fails() {
    let bytes = Rejected::new(AmqpError::new(condition::DECODE_ERROR).with_description("bad"))
        .encode_to_vec();
    for len in 0..bytes.len() {
        let err = DeliveryState::decode_from_slice(&bytes[..len])
            .expect_err("truncated input must not decode");
        assert!(
            matches!(
                err,
                CodecError::UnexpectedEof { .. } | CodecError::InvalidListSize { .. }
            ),
            "len {len}: {err}"
        );
    }
}

#[test]
fn wrong_field_type_is_rejected() {
    // section-number encoded as str8
    let bytes = [0x00, 0x53, 0x23, 0xc0, 0x03, 0x01, 0xa1, 0x00];
    let err = Received::decode_from_slice(&bytes).unwrap_err();
    assert_eq!(
        err,
        CodecError::InvalidFormatCode {
            offset: 6,
            code: 0xa1,
            expected: "uint",
        }
    );
}

#[test]
fn list_size_disagreeing_with_fields_is_rejected() {
    // size says 4 bytes (count + 3), fields use 2
    let bytes = [0x00, 0x53, 0x23, 0xc0, 0x04, 0x01, 0x52, 0x05, 0x40];
    let err = Received::decode_from_slice(&bytes).unwrap_err();
    assert!(matches!(err, CodecError::InvalidListSize { .. }), "{err}");
}

#[test]
fn missing_described_prefix_is_rejected() {
    let err = Received::decode_from_slice(&[0x45]).unwrap_err();
    assert!(matches!(
        err,
        CodecError::InvalidFormatCode { code: 0x45, .. }
    ));
}

#[test]
fn unknown_descriptor_is_reported() {
    let err = DeliveryState::decode_from_slice(&[0x00, 0x53, 0x38, 0x45]).unwrap_err();
    assert_eq!(err.to_string(), "unknown descriptor 0x0000000000000038");
}

// ============================================================================
// Limits
// ============================================================================

#[test]
fn list_count_limit_is_enforced() {
    let limits = CodecLimits {
        max_list_count: 1,
        ..CodecLimits::default()
    };
    let bytes = Received::new()
        .with_section_number(1)
        .with_section_offset(1)
        .encode_to_vec();
    let mut cursor = Cursor::with_limits(&bytes, limits);
    let err = Received::decode(&mut cursor).unwrap_err();
    assert_eq!(
        err,
        CodecError::LimitExceeded {
            what: "list count",
            value: 2,
            limit: 1,
        }
    );
}

#[test]
fn variable_size_limit_is_enforced() {
    let limits = CodecLimits {
        max_variable_size: 8,
        ..CodecLimits::default()
    };
    let bytes = AmqpError::new(condition::RESOURCE_LIMIT_EXCEEDED).encode_to_vec();
    let mut cursor = Cursor::with_limits(&bytes, limits);
    let err = <AmqpError as DescribedList>::decode(&mut cursor).unwrap_err();
    assert!(
        matches!(err, CodecError::LimitExceeded { limit: 8, .. }),
        "{err}"
    );
}

#[test]
fn nesting_limit_applies_to_skipped_fields() {
    let limits = CodecLimits {
        max_nesting_depth: 1,
        ..CodecLimits::default()
    };
    // accepted with one unknown field: a described value whose value is
    // itself described (depth 2).
    let bytes = [
        0x00, 0x53, 0x24, 0xc0, 0x08, 0x01, 0x00, 0x53, 0x01, 0x00, 0x53, 0x02, 0x45,
    ];
    assert!(DeliveryState::decode_from_slice(&bytes).is_ok());

    let mut cursor = Cursor::with_limits(&bytes, limits);
    let err = DeliveryState::decode(&mut cursor).unwrap_err();
    assert!(
        matches!(
            err,
            CodecError::LimitExceeded {
                what: "described nesting depth",
                ..
            }
        ),
        "{err}"
    );
}
