//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the line that entered the set earliest, regardless of
//! how recently it was referenced. Hits do not promote a line.
//!
//! # Performance
//!
//! - **Time Complexity:** `victim()` is O(W) where W is the number of ways
//! - **Space Complexity:** O(1); the ordering lives in the slots' timestamps
//! - **Best Case:** Streaming accesses where all lines have equal importance
//! - **Worst Case:** Workloads with strong temporal locality (may evict frequently-used lines)

use super::{ReplacementPolicy, oldest_by};
use crate::cache::set::Slot;

/// FIFO Policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct FifoPolicy;

impl ReplacementPolicy for FifoPolicy {
    /// Returns the valid way with the smallest load timestamp.
    fn victim(&self, slots: &[Slot]) -> usize {
        oldest_by(slots, Slot::load_timestamp)
    }
}
