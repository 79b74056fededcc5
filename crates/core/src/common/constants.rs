//! Timing and Geometry Constants.
//!
//! This module defines the fixed costs of the cache timing model. It includes:
//! 1. **Memory Costs:** Cycles charged for a single word moved to or from backing memory.
//! 2. **Cache Costs:** Cycles charged for touching a line already resident in the cache.
//! 3. **Geometry Limits:** Bounds that every validated cache configuration respects.

/// Cycles for transferring one 4-byte word between the cache and backing memory.
///
/// A full block fill or write-back costs this many cycles per word in the block.
pub const MEMORY_WORD_CYCLES: u64 = 100;

/// Cycles for a single access that is satisfied by the cache.
pub const CACHE_HIT_CYCLES: u64 = 1;

/// Size of a memory word in bytes; block transfers are charged per word.
pub const WORD_BYTES: usize = 4;

/// Smallest legal block size in bytes (one word).
pub const MIN_BLOCK_SIZE: usize = WORD_BYTES;

/// Width of a trace address in bits.
pub const ADDRESS_BITS: u32 = u32::BITS;
