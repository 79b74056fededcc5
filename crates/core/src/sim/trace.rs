//! Memory trace lines.
//!
//! A trace holds one operation per line:
//!
//! ```text
//! l 1fffff50 4
//! s 0x1fffff54 4
//! ```
//!
//! The first field is the operation (`l` load, `s` store), the second a
//! 32-bit hexadecimal address with an optional `0x` prefix. Any further
//! fields, such as the access size column of common course traces, are
//! ignored. A line with no operation at all, including an empty line in the
//! middle of a trace, is an error like any other malformed line.

use crate::common::data::AccessKind;
use crate::common::error::TraceError;

/// One parsed trace operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceOp {
    /// Load or store.
    pub kind: AccessKind,
    /// Byte address accessed.
    pub address: u32,
}

impl TraceOp {
    /// A load of `address`.
    pub const fn load(address: u32) -> Self {
        Self {
            kind: AccessKind::Load,
            address,
        }
    }

    /// A store to `address`.
    pub const fn store(address: u32) -> Self {
        Self {
            kind: AccessKind::Store,
            address,
        }
    }
}

/// Parses one trace line.
///
/// # Arguments
///
/// * `line_no` - 1-based line number, used only in error messages.
/// * `line` - The raw line, without its terminator.
///
/// # Returns
///
/// The parsed operation, or the [`TraceError`] describing the first problem found.
pub fn parse_line(line_no: usize, line: &str) -> Result<TraceOp, TraceError> {
    let mut fields = line.split_whitespace();

    let op = fields
        .next()
        .ok_or(TraceError::MissingOperation { line: line_no })?;

    let kind = AccessKind::from_token(op).ok_or_else(|| TraceError::InvalidOperation {
        line: line_no,
        op: op.to_owned(),
    })?;

    let raw = fields
        .next()
        .ok_or(TraceError::MissingAddress { line: line_no })?;

    let address = parse_hex_address(raw).ok_or_else(|| TraceError::InvalidAddress {
        line: line_no,
        value: raw.to_owned(),
    })?;

    Ok(TraceOp { kind, address })
}

/// Parses a hexadecimal `u32`, accepting an optional `0x`/`0X` prefix.
///
/// Signs, separators, and values wider than 32 bits are rejected.
fn parse_hex_address(raw: &str) -> Option<u32> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
