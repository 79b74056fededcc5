//! Common utilities and types used throughout the cache simulator.
//!
//! This module provides the building blocks shared by the cache model, the
//! configuration layer, and the trace driver. It includes:
//! 1. **Address Decoding:** Splitting a 32-bit address into tag, set index, and offset.
//! 2. **Constants:** Cycle costs of the timing model and geometry limits.
//! 3. **Access Kinds:** Load/store classification of trace operations.
//! 4. **Error Handling:** Configuration, trace, and whole-run error types.

/// Address layout and decoding.
pub mod addr;

/// Timing and geometry constants.
pub mod constants;

/// Memory access kind definitions.
pub mod data;

/// Error types.
pub mod error;

pub use addr::{AddressLayout, DecodedAddr};
pub use constants::{CACHE_HIT_CYCLES, MEMORY_WORD_CYCLES, WORD_BYTES};
pub use data::AccessKind;
pub use error::{ConfigError, SimError, TraceError};
