//! Memory Access Types.
//!
//! This module defines the classification of trace operations. These types are used for:
//! 1. **Trace Parsing:** Mapping the `l`/`s` operation tokens of a trace line.
//! 2. **Policy Dispatch:** Stores consult the write policies; loads never do.
//! 3. **Statistics Tracking:** Counting hits and misses separately per access kind.

use std::fmt;

use serde::Serialize;

/// Kind of memory access replayed from a trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessKind {
    /// Data read (`l` in a trace).
    Load,

    /// Data write (`s` in a trace).
    ///
    /// Subject to the write policy on a hit and the write-miss policy on a miss.
    Store,
}

impl AccessKind {
    /// Maps a trace operation token to an access kind.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "l" => Some(Self::Load),
            "s" => Some(Self::Store),
            _ => None,
        }
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => f.write_str("load"),
            Self::Store => f.write_str("store"),
        }
    }
}
