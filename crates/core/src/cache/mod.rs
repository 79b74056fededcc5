//! Set-Associative Cache Simulator.
//!
//! This module implements the trace-driven cache model. It owns the grid of
//! sets and slots, the logical clock, and the running statistics, and it
//! charges cycles according to a simple timing model:
//!
//! - a hit costs one cycle;
//! - moving a whole block to or from memory costs 100 cycles per 4-byte word;
//! - a single-word write to memory (write-through, no-write-allocate) costs 100 cycles.
//!
//! Replacement is delegated to a [`ReplacementPolicy`]; store handling
//! follows the configured write and write-miss policies (see `write.rs`).

/// Cache replacement policy implementations (FIFO, LRU).
pub mod policies;

/// Cache sets, slots, and the lookup outcome.
pub mod set;

mod write;

use std::fmt;

use tracing::{debug, trace, warn};

use self::policies::ReplacementPolicy;
use self::set::{CacheSet, Lookup, Slot};
use crate::common::addr::DecodedAddr;
use crate::common::constants::CACHE_HIT_CYCLES;
use crate::common::data::AccessKind;
use crate::common::error::ConfigError;
use crate::config::{CacheConfig, EvictionPolicy, Geometry, WriteMissPolicy, WritePolicy};
use crate::stats::SimStats;

/// A line pushed out of a full set to make room for a new block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Eviction {
    /// Way the victim occupied (and the new block now occupies).
    pub way: usize,
    /// Tag of the evicted block.
    pub tag: u32,
    /// Whether the victim had to be written back.
    pub dirty: bool,
}

/// Everything a single access did to the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessOutcome {
    /// Load or store.
    pub kind: AccessKind,
    /// The decoded address.
    pub address: DecodedAddr,
    /// Whether the block was resident.
    pub hit: bool,
    /// Way that holds the block after the access; `None` when a store miss
    /// bypassed the cache.
    pub way: Option<usize>,
    /// Line evicted to make room, if any.
    pub evicted: Option<Eviction>,
    /// Cycles charged for this access, write-backs included.
    pub cycles: u64,
}

/// Where a missing block was placed and what placing it cost.
struct Placement {
    way: usize,
    evicted: Option<Eviction>,
    cycles: u64,
}

/// Cache simulator implementing a set-associative cache with configurable policies.
///
/// Owns every set and slot exclusively. Accesses are applied strictly in the
/// order they are issued; the logical clock advances once per access.
pub struct CacheSim {
    geometry: Geometry,
    miss_policy: WriteMissPolicy,
    write_policy: WritePolicy,
    eviction_policy: EvictionPolicy,
    sets: Vec<CacheSet>,
    policy: Box<dyn ReplacementPolicy>,
    stats: SimStats,
    /// Number of accesses completed so far; the timestamp of the access in progress.
    clock: u64,
}

impl CacheSim {
    /// Creates a new cache simulator with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Geometry and policies; validated before anything is built.
    ///
    /// # Returns
    ///
    /// An empty cache, or the first [`ConfigError`] the configuration violates.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        Self::with_policy(config, policies::for_kind(config.eviction_policy))
    }

    /// Creates a cache that selects victims with a caller-supplied policy.
    ///
    /// The configured eviction policy is still validated and reported by
    /// [`CacheSim::eviction_policy`], but `policy` makes every decision.
    pub fn with_policy(
        config: &CacheConfig,
        policy: Box<dyn ReplacementPolicy>,
    ) -> Result<Self, ConfigError> {
        let geometry = config.validate()?;
        let layout = geometry.layout();

        debug!(
            sets = geometry.sets(),
            blocks = geometry.blocks(),
            block_size = geometry.block_size(),
            tag_bits = layout.tag_bits(),
            index_bits = layout.index_bits(),
            offset_bits = layout.offset_bits(),
            miss_policy = %config.miss_policy,
            write_policy = %config.write_policy,
            eviction_policy = %config.eviction_policy,
            "building cache"
        );

        Ok(Self {
            geometry,
            miss_policy: config.miss_policy,
            write_policy: config.write_policy,
            eviction_policy: config.eviction_policy,
            sets: (0..geometry.sets())
                .map(|_| CacheSet::new(geometry.blocks()))
                .collect(),
            policy,
            stats: SimStats::default(),
            clock: 0,
        })
    }

    /// Validated dimensions of this cache.
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Configured write-miss policy.
    pub const fn miss_policy(&self) -> WriteMissPolicy {
        self.miss_policy
    }

    /// Configured write policy.
    pub const fn write_policy(&self) -> WritePolicy {
        self.write_policy
    }

    /// Configured eviction policy.
    pub const fn eviction_policy(&self) -> EvictionPolicy {
        self.eviction_policy
    }

    /// Statistics accumulated so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Current logical time: the number of accesses completed so far.
    pub const fn clock(&self) -> u64 {
        self.clock
    }

    /// The set at `index`, if it exists.
    pub fn set(&self, index: usize) -> Option<&CacheSet> {
        self.sets.get(index)
    }

    /// Checks whether the block holding `address` is resident, without side effects.
    pub fn contains(&self, address: u32) -> bool {
        let decoded = self.geometry.layout().decode(address);
        self.sets[decoded.index].contains(decoded.tag)
    }

    /// Scans the set `address` maps to, without side effects.
    pub fn lookup(&self, address: u32) -> Lookup {
        let decoded = self.geometry.layout().decode(address);
        self.sets[decoded.index].lookup(decoded.tag)
    }

    /// Number of lines currently holding data not yet written to memory.
    pub fn dirty_lines(&self) -> usize {
        self.sets
            .iter()
            .flat_map(CacheSet::slots)
            .filter(|s| s.is_valid() && s.is_dirty())
            .count()
    }

    /// Replays a load of `address`.
    pub fn load(&mut self, address: u32) -> AccessOutcome {
        self.access(AccessKind::Load, address)
    }

    /// Replays a store to `address`.
    pub fn store(&mut self, address: u32) -> AccessOutcome {
        self.access(AccessKind::Store, address)
    }

    /// Replays one access, updating slot metadata, statistics, and the clock.
    ///
    /// Timestamps written during the access equal the clock value before it,
    /// i.e. the number of accesses that completed earlier.
    pub fn access(&mut self, kind: AccessKind, address: u32) -> AccessOutcome {
        let decoded = self.geometry.layout().decode(address);
        let lookup = self.sets[decoded.index].lookup(decoded.tag);

        let outcome = match kind {
            AccessKind::Load => self.load_decoded(decoded, lookup),
            AccessKind::Store => self.store_decoded(decoded, lookup),
        };

        self.stats.record(kind, outcome.hit);
        self.stats.cycles += outcome.cycles;
        self.clock += 1;

        trace!(
            %kind,
            address = format_args!("{address:#010x}"),
            set = decoded.index,
            tag = decoded.tag,
            hit = outcome.hit,
            way = ?outcome.way,
            cycles = outcome.cycles,
            "access"
        );

        outcome
    }

    fn load_decoded(&mut self, address: DecodedAddr, lookup: Lookup) -> AccessOutcome {
        let now = self.clock;
        match lookup {
            Lookup::Hit(way) => {
                self.sets[address.index].slot_mut(way).touch(now);
                AccessOutcome {
                    kind: AccessKind::Load,
                    address,
                    hit: true,
                    way: Some(way),
                    evicted: None,
                    cycles: CACHE_HIT_CYCLES,
                }
            }
            Lookup::MissWithSpace(way) => self.fill_for_load(address, Some(way)),
            Lookup::MissFull => self.fill_for_load(address, None),
        }
    }

    /// Fetches the block for a missing load and installs it clean.
    fn fill_for_load(&mut self, address: DecodedAddr, empty: Option<usize>) -> AccessOutcome {
        let fill = self.geometry.block_transfer_cycles();
        let placement = self.place(address.index, empty);
        self.install(address, placement.way, false);

        AccessOutcome {
            kind: AccessKind::Load,
            address,
            hit: false,
            way: Some(placement.way),
            evicted: placement.evicted,
            cycles: fill + placement.cycles,
        }
    }

    /// Chooses the way a missing block goes into.
    ///
    /// Uses the empty way found by the lookup if there was one; otherwise
    /// asks the replacement policy for a victim.
    fn place(&mut self, index: usize, empty: Option<usize>) -> Placement {
        match empty {
            Some(way) => Placement {
                way,
                evicted: None,
                cycles: 0,
            },
            None => {
                let (evicted, cycles) = self.evict(index);
                Placement {
                    way: evicted.way,
                    evicted: Some(evicted),
                    cycles,
                }
            }
        }
    }

    /// Selects a victim in a full set and charges its write-back.
    ///
    /// A dirty victim costs one full block transfer. This is the only place
    /// write-back cycles are charged.
    fn evict(&self, index: usize) -> (Eviction, u64) {
        let slots = self.sets[index].slots();
        let mut way = self.policy.victim(slots);
        if way >= slots.len() {
            warn!(
                set = index,
                way,
                ways = slots.len(),
                "replacement policy chose a way outside the set; evicting way 0"
            );
            way = 0;
        }
        // Every set has at least one way.
        let victim = slots[way];

        let eviction = Eviction {
            way,
            tag: victim.tag(),
            dirty: victim.is_dirty(),
        };

        let cycles = if eviction.dirty {
            debug!(
                set = index,
                way,
                tag = eviction.tag,
                "writing back dirty victim"
            );
            self.geometry.block_transfer_cycles()
        } else {
            0
        };

        (eviction, cycles)
    }

    /// Overwrites `way` with a fresh line for `address`, stamped with the current clock.
    fn install(&mut self, address: DecodedAddr, way: usize, dirty: bool) {
        *self.sets[address.index].slot_mut(way) = Slot::filled(address.tag, dirty, self.clock);
    }
}

impl fmt::Debug for CacheSim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheSim")
            .field("geometry", &self.geometry)
            .field("miss_policy", &self.miss_policy)
            .field("write_policy", &self.write_policy)
            .field("eviction_policy", &self.eviction_policy)
            .field("clock", &self.clock)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
