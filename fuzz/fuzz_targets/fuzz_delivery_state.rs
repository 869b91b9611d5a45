// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use amqp_wire::DeliveryState;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode to something that decodes to the
    // same value (the bytes may differ: descriptor names, trailing nulls).
    if let Ok((state, used)) = DeliveryState::decode_from_slice(data) {
        assert!(used <= data.len());
        let bytes = state.encode_to_vec();
        assert_eq!(bytes.len(), state.encode_size());
        let (again, _) = DeliveryState::decode_from_slice(&bytes).expect("re-decode");
        assert_eq!(again, state);
    }
});
