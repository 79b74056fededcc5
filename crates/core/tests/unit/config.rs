//! Configuration Tests.
//!
//! Verifies policy tokens, JSON loading, and the ordered validation of cache
//! geometry and policy pairings.

use std::io::Write;

use csim_core::CacheConfig;
use csim_core::common::{ConfigError, SimError};
use csim_core::config::{EvictionPolicy, WriteMissPolicy, WritePolicy};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::{config, write_back_lru};

// ══════════════════════════════════════════════════════════
// 1. Policy Tokens
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("write-allocate", WriteMissPolicy::WriteAllocate)]
#[case("no-write-allocate", WriteMissPolicy::NoWriteAllocate)]
fn miss_policy_tokens(#[case] token: &str, #[case] policy: WriteMissPolicy) {
    assert_eq!(token.parse::<WriteMissPolicy>(), Ok(policy));
    assert_eq!(policy.to_string(), token);
}

#[rstest]
#[case("write-through", WritePolicy::WriteThrough)]
#[case("write-back", WritePolicy::WriteBack)]
fn write_policy_tokens(#[case] token: &str, #[case] policy: WritePolicy) {
    assert_eq!(token.parse::<WritePolicy>(), Ok(policy));
    assert_eq!(policy.to_string(), token);
}

#[rstest]
#[case("lru", EvictionPolicy::Lru)]
#[case("fifo", EvictionPolicy::Fifo)]
fn eviction_policy_tokens(#[case] token: &str, #[case] policy: EvictionPolicy) {
    assert_eq!(token.parse::<EvictionPolicy>(), Ok(policy));
    assert_eq!(policy.to_string(), token);
}

/// Tokens are matched exactly; the error names the axis and the rejected text.
#[test]
fn unknown_tokens_are_rejected() {
    assert_eq!(
        "write_allocate".parse::<WriteMissPolicy>(),
        Err(ConfigError::UnknownPolicy {
            kind: "miss",
            value: "write_allocate".to_owned(),
        })
    );
    assert_eq!(
        "writeback".parse::<WritePolicy>(),
        Err(ConfigError::UnknownPolicy {
            kind: "write",
            value: "writeback".to_owned(),
        })
    );
    assert_eq!(
        "random".parse::<EvictionPolicy>(),
        Err(ConfigError::UnknownPolicy {
            kind: "eviction",
            value: "random".to_owned(),
        })
    );
}

// ══════════════════════════════════════════════════════════
// 2. Validation
// ══════════════════════════════════════════════════════════

#[test]
fn default_config_is_smallest_legal_cache() {
    let config = CacheConfig::default();
    let geometry = config.validate().expect("default must validate");

    assert_eq!(geometry.sets(), 1);
    assert_eq!(geometry.blocks(), 1);
    assert_eq!(geometry.block_size(), 4);
    assert_eq!(geometry.capacity(), 4);
    assert_eq!(config.miss_policy, WriteMissPolicy::WriteAllocate);
    assert_eq!(config.write_policy, WritePolicy::WriteBack);
    assert_eq!(config.eviction_policy, EvictionPolicy::Lru);
}

#[rstest]
#[case::block_too_small(1, 1, 2, ConfigError::BlockSizeTooSmall { size: 2, min: 4 })]
#[case::block_zero(1, 1, 0, ConfigError::BlockSizeTooSmall { size: 0, min: 4 })]
#[case::block_not_pow2(1, 1, 12, ConfigError::BlockSizeNotPowerOfTwo(12))]
#[case::sets_zero(0, 1, 4, ConfigError::InvalidSets(0))]
#[case::sets_not_pow2(3, 1, 4, ConfigError::InvalidSets(3))]
#[case::blocks_zero(1, 0, 4, ConfigError::InvalidBlocks(0))]
fn invalid_geometry(
    #[case] sets: usize,
    #[case] blocks: usize,
    #[case] block_size: usize,
    #[case] expected: ConfigError,
) {
    assert_eq!(write_back_lru(sets, blocks, block_size).validate(), Err(expected));
}

/// Index and offset together may not need more than 32 bits.
#[test]
fn geometry_wider_than_address_is_rejected() {
    assert_eq!(
        write_back_lru(1 << 20, 1, 1 << 13).validate(),
        Err(ConfigError::AddressBitsExceeded {
            sets: 1 << 20,
            block_size: 1 << 13,
            bits: 33,
        })
    );
}

/// Block size is checked before sets, and sets before blocks.
#[test]
fn first_failing_check_wins() {
    assert_eq!(
        write_back_lru(3, 0, 6).validate(),
        Err(ConfigError::BlockSizeNotPowerOfTwo(6))
    );
    assert_eq!(
        write_back_lru(3, 0, 8).validate(),
        Err(ConfigError::InvalidSets(3))
    );
}

#[test]
fn write_back_with_no_write_allocate_is_rejected() {
    let config = config(
        1,
        1,
        4,
        WriteMissPolicy::NoWriteAllocate,
        WritePolicy::WriteBack,
        EvictionPolicy::Fifo,
    );
    assert_eq!(config.validate(), Err(ConfigError::IncompatiblePolicies));
}

/// The remaining three policy pairings are all accepted.
#[rstest]
#[case(WriteMissPolicy::WriteAllocate, WritePolicy::WriteBack)]
#[case(WriteMissPolicy::WriteAllocate, WritePolicy::WriteThrough)]
#[case(WriteMissPolicy::NoWriteAllocate, WritePolicy::WriteThrough)]
fn compatible_policy_pairs(#[case] miss: WriteMissPolicy, #[case] write: WritePolicy) {
    assert!(config(4, 2, 16, miss, write, EvictionPolicy::Lru).validate().is_ok());
}

/// Index plus offset may use exactly all 32 address bits.
#[test]
fn full_width_geometry_is_accepted() {
    let geometry = write_back_lru(1 << 28, 1, 16)
        .validate()
        .expect("32 address bits must be accepted");
    assert_eq!(geometry.layout().tag_bits(), 0);
}

#[rstest]
#[case(4, 100)]
#[case(16, 400)]
#[case(64, 1600)]
fn block_transfer_is_100_cycles_per_word(#[case] block_size: usize, #[case] cycles: u64) {
    let geometry = write_back_lru(1, 1, block_size)
        .validate()
        .expect("valid geometry");
    assert_eq!(geometry.block_transfer_cycles(), cycles);
}

// ══════════════════════════════════════════════════════════
// 3. JSON Loading
// ══════════════════════════════════════════════════════════

#[test]
fn json_omitted_fields_take_defaults() {
    let config = CacheConfig::from_json(r#"{ "sets": 64, "write_policy": "write-through" }"#)
        .expect("valid json");

    assert_eq!(
        config,
        CacheConfig {
            sets: 64,
            write_policy: WritePolicy::WriteThrough,
            ..CacheConfig::default()
        }
    );
}

#[test]
fn json_accepts_uppercase_eviction_alias() {
    let config = CacheConfig::from_json(r#"{ "eviction_policy": "FIFO" }"#).expect("valid json");
    assert_eq!(config.eviction_policy, EvictionPolicy::Fifo);
}

#[rstest]
#[case::unknown_field(r#"{ "ways": 4 }"#)]
#[case::unknown_policy(r#"{ "eviction_policy": "random" }"#)]
#[case::negative_sets(r#"{ "sets": -1 }"#)]
#[case::not_json("sets = 4")]
fn json_rejects_bad_documents(#[case] json: &str) {
    assert!(CacheConfig::from_json(json).is_err());
}

/// Parsing does not validate; an incompatible pairing surfaces from `validate`.
#[test]
fn json_parsing_defers_validation() {
    let config = CacheConfig::from_json(
        r#"{ "miss_policy": "no-write-allocate", "write_policy": "write-back" }"#,
    )
    .expect("well-formed json");
    assert_eq!(config.validate(), Err(ConfigError::IncompatiblePolicies));
}

#[test]
fn json_file_round_trip() {
    let original = config(
        256,
        4,
        16,
        WriteMissPolicy::NoWriteAllocate,
        WritePolicy::WriteThrough,
        EvictionPolicy::Fifo,
    );

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let json = serde_json::to_string(&original).expect("serializable");
    file.write_all(json.as_bytes()).expect("write config");

    let loaded = CacheConfig::from_json_file(file.path()).expect("readable config");
    assert_eq!(loaded, original);
}

#[test]
fn missing_json_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");

    match CacheConfig::from_json_file(&path) {
        Err(SimError::ReadConfig { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ReadConfig error, got {other:?}"),
    }
}

#[test]
fn malformed_json_file_is_config_file_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"{ \"sets\": ").expect("write config");

    assert!(matches!(
        CacheConfig::from_json_file(file.path()),
        Err(SimError::ConfigFile(_))
    ));
}
