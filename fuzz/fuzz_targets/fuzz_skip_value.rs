// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![no_main]

use amqp_wire::{skip_value, Cursor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);
    if skip_value(&mut cursor).is_ok() {
        assert!(cursor.offset() <= data.len());
    }
});
