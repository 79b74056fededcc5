//! Configuration system for the cache simulator.
//!
//! This module defines the structures and enums used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline geometry used when a field is omitted.
//! 2. **Policies:** Write-miss, write-propagation, and eviction policy enums.
//! 3. **Validation:** Conversion of a raw [`CacheConfig`] into a checked [`Geometry`].
//!
//! Configuration is supplied on the command line (positional arguments, like
//! the classic `csim` tool) or as a JSON document via [`CacheConfig::from_json`].

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::addr::AddressLayout;
use crate::common::constants::{ADDRESS_BITS, MEMORY_WORD_CYCLES, MIN_BLOCK_SIZE, WORD_BYTES};
use crate::common::error::{ConfigError, SimError};

/// Default configuration constants for the simulator.
///
/// These values describe the smallest legal cache: a single one-word line.
mod defaults {
    /// Default number of sets (fully associative).
    pub const SETS: usize = 1;

    /// Default associativity (one block per set).
    pub const BLOCKS: usize = 1;

    /// Default block size in bytes (one word).
    pub const BLOCK_SIZE: usize = 4;
}

/// What a store does when its block is not resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMissPolicy {
    /// Fetch the block into the cache, then perform the store there.
    #[default]
    WriteAllocate,
    /// Write straight to backing memory; the cache is left untouched.
    NoWriteAllocate,
}

/// When a store is propagated to backing memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Every store also writes backing memory immediately.
    WriteThrough,
    /// Stores mark the line dirty; memory is updated when the line is evicted.
    #[default]
    WriteBack,
}

/// Which line of a full set is replaced on a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// Least recently used: the line with the oldest access.
    #[default]
    #[serde(alias = "LRU")]
    Lru,
    /// First in, first out: the line loaded earliest, regardless of later hits.
    #[serde(alias = "FIFO")]
    Fifo,
}

impl WriteMissPolicy {
    /// Command-line token for this policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WriteAllocate => "write-allocate",
            Self::NoWriteAllocate => "no-write-allocate",
        }
    }
}

impl WritePolicy {
    /// Command-line token for this policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WriteThrough => "write-through",
            Self::WriteBack => "write-back",
        }
    }
}

impl EvictionPolicy {
    /// Command-line token for this policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lru => "lru",
            Self::Fifo => "fifo",
        }
    }
}

impl FromStr for WriteMissPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "write-allocate" => Ok(Self::WriteAllocate),
            "no-write-allocate" => Ok(Self::NoWriteAllocate),
            _ => Err(ConfigError::UnknownPolicy {
                kind: "miss",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for WritePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "write-through" => Ok(Self::WriteThrough),
            "write-back" => Ok(Self::WriteBack),
            _ => Err(ConfigError::UnknownPolicy {
                kind: "write",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for EvictionPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lru" => Ok(Self::Lru),
            "fifo" => Ok(Self::Fifo),
            _ => Err(ConfigError::UnknownPolicy {
                kind: "eviction",
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for WriteMissPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw cache configuration as supplied by the user.
///
/// Nothing here is checked yet; call [`CacheConfig::validate`] to obtain a
/// [`Geometry`] the cache model can be built from.
///
/// # Examples
///
/// ```
/// use csim_core::config::{CacheConfig, EvictionPolicy, WritePolicy};
///
/// let json = r#"{
///     "sets": 256,
///     "blocks": 4,
///     "block_size": 16,
///     "miss_policy": "write-allocate",
///     "write_policy": "write-back",
///     "eviction_policy": "fifo"
/// }"#;
///
/// let config = CacheConfig::from_json(json).unwrap();
/// assert_eq!(config.sets, 256);
/// assert_eq!(config.write_policy, WritePolicy::WriteBack);
/// assert_eq!(config.eviction_policy, EvictionPolicy::Fifo);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Number of sets; must be a positive power of two.
    #[serde(default = "CacheConfig::default_sets")]
    pub sets: usize,
    /// Blocks (ways) per set; must be at least one.
    #[serde(default = "CacheConfig::default_blocks")]
    pub blocks: usize,
    /// Bytes per block; a power of two no smaller than one word.
    #[serde(default = "CacheConfig::default_block_size")]
    pub block_size: usize,
    /// Store-miss handling.
    #[serde(default)]
    pub miss_policy: WriteMissPolicy,
    /// Store propagation.
    #[serde(default)]
    pub write_policy: WritePolicy,
    /// Victim selection in a full set.
    #[serde(default)]
    pub eviction_policy: EvictionPolicy,
}

impl CacheConfig {
    fn default_sets() -> usize {
        defaults::SETS
    }

    fn default_blocks() -> usize {
        defaults::BLOCKS
    }

    fn default_block_size() -> usize {
        defaults::BLOCK_SIZE
    }

    /// Parses a configuration from a JSON document.
    ///
    /// Omitted fields take their defaults; unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&text)?)
    }

    /// Checks the configuration and derives the cache geometry.
    ///
    /// Checks run in a fixed order (block size, sets, blocks, address width,
    /// policy pairing) and the first failure is reported.
    pub fn validate(&self) -> Result<Geometry, ConfigError> {
        if self.block_size < MIN_BLOCK_SIZE {
            return Err(ConfigError::BlockSizeTooSmall {
                size: self.block_size,
                min: MIN_BLOCK_SIZE,
            });
        }
        if !self.block_size.is_power_of_two() {
            return Err(ConfigError::BlockSizeNotPowerOfTwo(self.block_size));
        }
        if !self.sets.is_power_of_two() {
            return Err(ConfigError::InvalidSets(self.sets));
        }
        if self.blocks == 0 {
            return Err(ConfigError::InvalidBlocks(self.blocks));
        }

        let bits = self.sets.trailing_zeros() + self.block_size.trailing_zeros();
        if bits > ADDRESS_BITS {
            return Err(ConfigError::AddressBitsExceeded {
                sets: self.sets,
                block_size: self.block_size,
                bits,
            });
        }

        if self.write_policy == WritePolicy::WriteBack
            && self.miss_policy == WriteMissPolicy::NoWriteAllocate
        {
            return Err(ConfigError::IncompatiblePolicies);
        }

        Ok(Geometry {
            sets: self.sets,
            blocks: self.blocks,
            block_size: self.block_size,
            layout: AddressLayout::new(self.sets, self.block_size),
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sets: defaults::SETS,
            blocks: defaults::BLOCKS,
            block_size: defaults::BLOCK_SIZE,
            miss_policy: WriteMissPolicy::default(),
            write_policy: WritePolicy::default(),
            eviction_policy: EvictionPolicy::default(),
        }
    }
}

/// Validated cache dimensions.
///
/// Only obtainable through [`CacheConfig::validate`], so every `Geometry`
/// has power-of-two sets and block size and at least one block per set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    sets: usize,
    blocks: usize,
    block_size: usize,
    layout: AddressLayout,
}

impl Geometry {
    /// Number of sets.
    pub const fn sets(&self) -> usize {
        self.sets
    }

    /// Blocks per set.
    pub const fn blocks(&self) -> usize {
        self.blocks
    }

    /// Bytes per block.
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    /// Address field widths for this geometry.
    pub const fn layout(&self) -> AddressLayout {
        self.layout
    }

    /// Total data capacity in bytes.
    pub const fn capacity(&self) -> usize {
        self.sets
            .saturating_mul(self.blocks)
            .saturating_mul(self.block_size)
    }

    /// Cycles to move a whole block between the cache and backing memory.
    ///
    /// Charged for every block fill and for every write-back of a dirty line.
    pub const fn block_transfer_cycles(&self) -> u64 {
        MEMORY_WORD_CYCLES * (self.block_size / WORD_BYTES) as u64
    }
}
