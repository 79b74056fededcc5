//! Store handling.
//!
//! Stores are the only accesses the write policies apply to:
//!
//! | Case | Write-back | Write-through |
//! |------|------------|---------------|
//! | hit | mark dirty, 1 cycle | 1 + 100 cycles |
//! | miss, write-allocate | fill, install dirty, +1 | fill, install clean, +100 +1 |
//! | miss, no-write-allocate | (rejected at configuration) | 100 cycles, cache untouched |
//!
//! "fill" is one block transfer, plus another if the victim was dirty.

use super::{AccessOutcome, CacheSim};
use crate::cache::set::Lookup;
use crate::common::addr::DecodedAddr;
use crate::common::constants::{CACHE_HIT_CYCLES, MEMORY_WORD_CYCLES};
use crate::common::data::AccessKind;
use crate::config::{WriteMissPolicy, WritePolicy};

impl CacheSim {
    pub(super) fn store_decoded(&mut self, address: DecodedAddr, lookup: Lookup) -> AccessOutcome {
        match lookup {
            Lookup::Hit(way) => AccessOutcome {
                kind: AccessKind::Store,
                address,
                hit: true,
                way: Some(way),
                evicted: None,
                cycles: self.write_hit(address.index, way),
            },
            Lookup::MissWithSpace(way) => self.write_miss(address, Some(way)),
            Lookup::MissFull => self.write_miss(address, None),
        }
    }

    /// Applies the write policy to a resident line and returns the cycles charged.
    fn write_hit(&mut self, index: usize, way: usize) -> u64 {
        let now = self.clock;
        let slot = self.sets[index].slot_mut(way);
        slot.touch(now);

        match self.write_policy {
            WritePolicy::WriteBack => {
                slot.mark_dirty();
                CACHE_HIT_CYCLES
            }
            WritePolicy::WriteThrough => CACHE_HIT_CYCLES + MEMORY_WORD_CYCLES,
        }
    }

    /// Applies the write-miss policy, then the write policy if the block is allocated.
    ///
    /// `empty` is the free way the lookup found, or `None` if the set was full
    /// at lookup time.
    fn write_miss(&mut self, address: DecodedAddr, empty: Option<usize>) -> AccessOutcome {
        let mut outcome = AccessOutcome {
            kind: AccessKind::Store,
            address,
            hit: false,
            way: None,
            evicted: None,
            cycles: 0,
        };

        match self.miss_policy {
            WriteMissPolicy::NoWriteAllocate => {
                outcome.cycles = MEMORY_WORD_CYCLES;
            }
            WriteMissPolicy::WriteAllocate => {
                let fill = self.geometry.block_transfer_cycles();
                let placement = self.place(address.index, empty);

                let (dirty, write) = match self.write_policy {
                    WritePolicy::WriteBack => (true, CACHE_HIT_CYCLES),
                    WritePolicy::WriteThrough => (false, MEMORY_WORD_CYCLES + CACHE_HIT_CYCLES),
                };
                self.install(address, placement.way, dirty);

                outcome.way = Some(placement.way);
                outcome.evicted = placement.evicted;
                outcome.cycles = fill + placement.cycles + write;
            }
        }

        outcome
    }
}
