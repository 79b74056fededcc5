//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the cache line that has not been referenced for the
//! longest time. Every hit refreshes a slot's access timestamp, so a line
//! that keeps being used is never the victim ahead of an untouched one.
//!
//! # Performance
//!
//! - **Time Complexity:** `victim()` is O(W) where W is the number of ways
//! - **Space Complexity:** O(1); the ordering lives in the slots' timestamps
//! - **Best Case:** Workloads with strong temporal locality
//! - **Worst Case:** Cyclic scans slightly larger than the set (thrashing)

use super::{ReplacementPolicy, oldest_by};
use crate::cache::set::Slot;

/// LRU Policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    /// Returns the valid way with the smallest access timestamp.
    fn victim(&self, slots: &[Slot]) -> usize {
        oldest_by(slots, Slot::access_timestamp)
    }
}
