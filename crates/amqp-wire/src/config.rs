// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Codec configuration: compile-time defaults and runtime decode limits.
//!
//! Encoding is unbounded (the caller owns the value). Decoding reads untrusted
//! input, so every length or count taken from the wire is checked against a
//! `CodecLimits` carried by the [`Cursor`](crate::codec::Cursor).
//!
//! # Example
//!
//! ```ignore
//! use amqp_wire::config::CodecLimits;
//!
//! let limits = CodecLimits::from_yaml_str("max_nesting_depth: 8")?;
//! let mut cursor = Cursor::with_limits(&bytes, limits);
//! ```

use crate::error::{CodecError, Result};

/// Default maximum number of fields a list header may announce.
///
/// Far beyond any legitimate delivery-state list while still catching
/// allocation bombs from malformed frames.
pub const DEFAULT_MAX_LIST_COUNT: usize = 1_000_000;

/// Default maximum length of a variable-width value (string, symbol, binary).
pub const DEFAULT_MAX_VARIABLE_SIZE: usize = 16 * 1024 * 1024;

/// Default maximum nesting of described values while skipping.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;

/// Limits applied while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "config-loaders",
    derive(serde::Deserialize, serde::Serialize),
    serde(default, deny_unknown_fields)
)]
pub struct CodecLimits {
    /// Maximum field count accepted from a list header.
    pub max_list_count: usize,
    /// Maximum byte length of a string, symbol or binary.
    pub max_variable_size: usize,
    /// Maximum depth of nested described values.
    pub max_nesting_depth: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_list_count: DEFAULT_MAX_LIST_COUNT,
            max_variable_size: DEFAULT_MAX_VARIABLE_SIZE,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl CodecLimits {
    /// Reject `value` if it is above `limit`.
    pub(crate) fn check(what: &'static str, value: usize, limit: usize) -> Result<()> {
        if value > limit {
            return Err(CodecError::LimitExceeded { what, value, limit });
        }
        Ok(())
    }

    /// Parse limits from a YAML document. Missing keys keep their defaults.
    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_str(yaml_content: &str) -> Result<Self> {
        let limits: CodecLimits =
            serde_yaml::from_str(yaml_content).map_err(|e| CodecError::Config {
                reason: format!("failed to parse YAML: {}", e),
            })?;
        log::debug!("[config] loaded codec limits {:?}", limits);
        Ok(limits)
    }

    /// Load limits from a YAML file.
    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CodecError::Config {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_yaml_str(&content)
    }
}
