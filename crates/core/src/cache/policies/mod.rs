//! Cache Replacement Policies.
//!
//! Implements victim selection for full sets of a set-associative cache.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out (oldest load timestamp).
//! - `Lru`: Least Recently Used (oldest access timestamp).
//!
//! Both policies are stateless: the ordering they need lives in the slots'
//! logical timestamps, which the cache model maintains.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

use super::set::Slot;
use crate::config::EvictionPolicy;

/// Trait for cache replacement policies.
///
/// Defines the interface for choosing which way of a full set to evict.
pub trait ReplacementPolicy {
    /// Selects the victim way among `slots`.
    ///
    /// # Arguments
    ///
    /// * `slots` - Every way of the set, in way order. All are valid when the
    ///   cache model asks; invalid slots are never chosen over valid ones.
    ///
    /// # Returns
    ///
    /// The index of the way to evict. It must be less than `slots.len()`;
    /// the cache evicts way 0 in place of an out-of-range answer.
    fn victim(&self, slots: &[Slot]) -> usize;
}

/// Builds the policy object for a configured eviction policy.
pub fn for_kind(kind: EvictionPolicy) -> Box<dyn ReplacementPolicy> {
    match kind {
        EvictionPolicy::Lru => Box::new(LruPolicy),
        EvictionPolicy::Fifo => Box::new(FifoPolicy),
    }
}

/// Returns the first valid way with the smallest `key`, or way 0 if none is valid.
///
/// `min_by_key` keeps the first of equal minima, so ties go to the lowest way.
pub(crate) fn oldest_by<F>(slots: &[Slot], key: F) -> usize
where
    F: Fn(&Slot) -> u64,
{
    slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_valid())
        .min_by_key(|&(_, slot)| key(slot))
        .map_or(0, |(way, _)| way)
}
