//! Error definitions.
//!
//! This module defines the failure modes of the simulator. It provides:
//! 1. **Configuration Errors:** Invalid geometry or policy choices, detected before any replay.
//! 2. **Trace Errors:** Malformed trace lines, detected during replay; the run aborts on the first one.
//! 3. **Simulation Errors:** An umbrella type for front ends that drive a whole run.

use std::path::PathBuf;

use thiserror::Error;

/// A cache configuration that cannot be simulated.
///
/// Every variant names the offending value so the message can be shown to
/// the user verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The number of sets is zero or not a power of two.
    #[error("number of sets ({0}) is not a positive power of 2")]
    InvalidSets(usize),

    /// The number of blocks per set is zero.
    #[error("number of blocks per set ({0}) cannot be less than 1")]
    InvalidBlocks(usize),

    /// The block size is smaller than one memory word.
    #[error("block size ({size}) is less than the minimum allowed size of {min} bytes")]
    BlockSizeTooSmall {
        /// Requested block size in bytes.
        size: usize,
        /// Smallest legal block size in bytes.
        min: usize,
    },

    /// The block size is not a power of two.
    #[error("block size ({0}) is not a power of 2")]
    BlockSizeNotPowerOfTwo(usize),

    /// Index and offset fields together need more bits than an address has.
    #[error(
        "{sets} sets of {block_size}-byte blocks need {bits} address bits, but addresses are 32 bits wide"
    )]
    AddressBitsExceeded {
        /// Requested number of sets.
        sets: usize,
        /// Requested block size in bytes.
        block_size: usize,
        /// Bits required for index plus offset.
        bits: u32,
    },

    /// A policy token did not name any known policy.
    #[error("invalid {kind} policy '{value}'")]
    UnknownPolicy {
        /// Which policy axis was being parsed (`miss`, `write`, or `eviction`).
        kind: &'static str,
        /// The rejected token.
        value: String,
    },

    /// Write-back paired with no-write-allocate.
    #[error("write-back and no-write-allocate cannot be specified together")]
    IncompatiblePolicies,
}

/// A trace line that cannot be replayed.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The line was empty or held only whitespace.
    #[error("line {line}: missing operation type")]
    MissingOperation {
        /// Line number within the trace.
        line: usize,
    },

    /// The operation field was neither `l` nor `s`.
    #[error("line {line}: invalid operation type '{op}'")]
    InvalidOperation {
        /// Line number within the trace.
        line: usize,
        /// The rejected operation token.
        op: String,
    },

    /// The line had an operation but no address.
    #[error("line {line}: missing address")]
    MissingAddress {
        /// Line number within the trace.
        line: usize,
    },

    /// The address was not a 32-bit hexadecimal number.
    #[error("line {line}: invalid address '{value}'")]
    InvalidAddress {
        /// Line number within the trace.
        line: usize,
        /// The rejected address token.
        value: String,
    },

    /// Reading the trace source failed.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),
}

/// Any failure that stops a simulation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// The cache could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The trace could not be replayed.
    #[error(transparent)]
    Trace(#[from] TraceError),

    /// A JSON configuration document could not be parsed.
    #[error("invalid configuration file: {0}")]
    ConfigFile(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadConfig {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}
