//! Trace replay.
//!
//! Provides the pieces that turn a textual memory trace into cache accesses:
//! 1. **Trace parsing:** One `<l|s> <hex-address>` operation per line.
//! 2. **Replay driver:** Feeds parsed operations to a [`CacheSim`](crate::cache::CacheSim)
//!    in order, aborting on the first malformed line.

/// Trace line parsing.
pub mod trace;

/// Replay driver owning a cache instance.
pub mod simulator;

pub use simulator::Simulator;
pub use trace::{TraceOp, parse_line};
