//! Set-associative cache simulator library.
//!
//! This crate replays memory traces through a configurable cache model:
//! 1. **Common:** Address decoding, access kinds, timing constants, and error types.
//! 2. **Configuration:** Geometry and the write-miss, write, and eviction policies.
//! 3. **Cache:** Sets of metadata-only slots, LRU/FIFO victim selection, and write handling.
//! 4. **Simulation:** Trace parsing and the sequential replay driver.
//! 5. **Statistics:** Hit/miss counters, cycle totals, and the text report.
//!
//! ```
//! use csim_core::{CacheConfig, Simulator};
//! use csim_core::config::{EvictionPolicy, WriteMissPolicy, WritePolicy};
//!
//! let config = CacheConfig {
//!     sets: 1,
//!     blocks: 2,
//!     block_size: 4,
//!     miss_policy: WriteMissPolicy::WriteAllocate,
//!     write_policy: WritePolicy::WriteThrough,
//!     eviction_policy: EvictionPolicy::Lru,
//! };
//!
//! let mut sim = Simulator::new(&config).unwrap();
//! let stats = sim.run_str("l 0\nl 4\nl 8\n").unwrap();
//! assert_eq!(stats.load_misses, 3);
//! assert_eq!(stats.load_hits, 0);
//! ```

/// Cache model (sets, slots, replacement policies, write handling).
pub mod cache;
/// Common types and constants (addresses, access kinds, errors).
pub mod common;
/// Simulator configuration (defaults, policy enums, validated geometry).
pub mod config;
/// Trace parsing and replay.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Cache model; build with `CacheSim::new`.
pub use crate::cache::CacheSim;
/// Raw configuration; call `validate` or hand it to `CacheSim::new`.
pub use crate::config::CacheConfig;
/// Replay driver owning a cache.
pub use crate::sim::Simulator;
/// Final counters of a run.
pub use crate::stats::SimStats;
