//! Simulation statistics collection and reporting.
//!
//! This module tracks the counters a trace replay produces. It provides:
//! 1. **Access counts:** Total loads and stores replayed.
//! 2. **Hit/miss breakdown:** Hits and misses per access kind.
//! 3. **Cycle cost:** The accumulated cycle estimate of the timing model.
//! 4. **Reporting:** The fixed seven-line text report and derived hit rates.

use std::fmt;

use serde::Serialize;

use crate::common::data::AccessKind;

/// Simulation statistics structure.
///
/// Counters are only advanced by the cache model; everything else reads
/// them through [`CacheSim::stats`](crate::cache::CacheSim::stats).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Number of load operations replayed.
    pub loads: u64,
    /// Number of store operations replayed.
    pub stores: u64,
    /// Loads that found their block resident.
    pub load_hits: u64,
    /// Loads that had to fetch their block.
    pub load_misses: u64,
    /// Stores that found their block resident.
    pub store_hits: u64,
    /// Stores whose block was not resident.
    pub store_misses: u64,
    /// Total estimated cycles.
    pub cycles: u64,
}

impl SimStats {
    /// Records one completed access of the given kind.
    pub(crate) fn record(&mut self, kind: AccessKind, hit: bool) {
        match (kind, hit) {
            (AccessKind::Load, true) => self.load_hits += 1,
            (AccessKind::Load, false) => self.load_misses += 1,
            (AccessKind::Store, true) => self.store_hits += 1,
            (AccessKind::Store, false) => self.store_misses += 1,
        }
        match kind {
            AccessKind::Load => self.loads += 1,
            AccessKind::Store => self.stores += 1,
        }
    }

    /// Total accesses replayed.
    pub const fn accesses(&self) -> u64 {
        self.loads + self.stores
    }

    /// Hits across both access kinds.
    pub const fn hits(&self) -> u64 {
        self.load_hits + self.store_hits
    }

    /// Misses across both access kinds.
    pub const fn misses(&self) -> u64 {
        self.load_misses + self.store_misses
    }

    /// Fraction of accesses that hit, in `[0.0, 1.0]`.
    ///
    /// Returns `0.0` before any access has been replayed.
    pub fn hit_rate(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.hits() as f64 / total as f64
        }
    }

    /// Average cycles per access; `0.0` before any access.
    pub fn cycles_per_access(&self) -> f64 {
        let total = self.accesses();
        if total == 0 {
            0.0
        } else {
            self.cycles as f64 / total as f64
        }
    }

    /// Prints the seven-line report to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for SimStats {
    /// Renders the report, one labeled counter per line in a fixed order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total loads: {}", self.loads)?;
        writeln!(f, "Total stores: {}", self.stores)?;
        writeln!(f, "Load hits: {}", self.load_hits)?;
        writeln!(f, "Load misses: {}", self.load_misses)?;
        writeln!(f, "Store hits: {}", self.store_hits)?;
        writeln!(f, "Store misses: {}", self.store_misses)?;
        writeln!(f, "Total cycles: {}", self.cycles)
    }
}
