// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Hex input parsing.

use anyhow::{bail, Context};
use std::io::Read;

/// Read hex from `arg`, or from stdin when `arg` is `-`.
pub fn read_hex(arg: &str) -> anyhow::Result<Vec<u8>> {
    if arg == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        parse_hex(&text)
    } else {
        parse_hex(arg)
    }
}

/// Decode hex text. Whitespace, `:` separators and a `0x` prefix are ignored
/// so dumps can be pasted as-is.
pub fn parse_hex(text: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = body
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    if digits.is_empty() {
        bail!("no hex input");
    }
    hex::decode(&digits).with_context(|| format!("invalid hex input {:?}", digits))
}
