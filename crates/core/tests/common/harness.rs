use csim_core::CacheConfig;
use csim_core::cache::CacheSim;
use csim_core::config::{EvictionPolicy, WriteMissPolicy, WritePolicy};

/// Installs a test-writer subscriber so `trace!`/`debug!` output is captured per test.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("csim_core=trace")
        .with_test_writer()
        .try_init();
}

/// Builds a configuration from the six command-line values.
pub fn config(
    sets: usize,
    blocks: usize,
    block_size: usize,
    miss_policy: WriteMissPolicy,
    write_policy: WritePolicy,
    eviction_policy: EvictionPolicy,
) -> CacheConfig {
    CacheConfig {
        sets,
        blocks,
        block_size,
        miss_policy,
        write_policy,
        eviction_policy,
    }
}

/// Write-allocate, write-back, LRU cache of the given shape.
pub fn write_back_lru(sets: usize, blocks: usize, block_size: usize) -> CacheConfig {
    config(
        sets,
        blocks,
        block_size,
        WriteMissPolicy::WriteAllocate,
        WritePolicy::WriteBack,
        EvictionPolicy::Lru,
    )
}

/// Builds an empty cache, panicking if `config` is invalid.
pub fn cache(config: &CacheConfig) -> CacheSim {
    init_tracing();
    CacheSim::new(config).expect("test configuration must be valid")
}
