//! Simulator: owns one cache and replays traces through it.
//!
//! The driver is strictly sequential. Each line is parsed and applied before
//! the next is read, and the first malformed line ends the run with an error
//! so no partial statistics escape.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::trace::{TraceOp, parse_line};
use crate::cache::{AccessOutcome, CacheSim};
use crate::common::error::{ConfigError, TraceError};
use crate::config::CacheConfig;
use crate::stats::SimStats;

/// Top-level simulator: a cache plus the trace replay loop.
#[derive(Debug)]
pub struct Simulator {
    cache: CacheSim,
}

impl Simulator {
    /// Creates a simulator with an empty cache built from `config`.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_cache(CacheSim::new(config)?))
    }

    /// Wraps an already-built cache.
    pub const fn from_cache(cache: CacheSim) -> Self {
        Self { cache }
    }

    /// The cache being driven.
    pub const fn cache(&self) -> &CacheSim {
        &self.cache
    }

    /// Statistics accumulated so far.
    pub const fn stats(&self) -> &SimStats {
        self.cache.stats()
    }

    /// Consumes the simulator, returning its final statistics.
    pub fn into_stats(self) -> SimStats {
        self.cache.stats().clone()
    }

    /// Applies a single operation.
    pub fn step(&mut self, op: TraceOp) -> AccessOutcome {
        self.cache.access(op.kind, op.address)
    }

    /// Replays every line of `reader` in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`TraceError`] encountered, either an I/O failure or
    /// a malformed line. Operations before the bad line have been applied,
    /// but callers must not report them as a complete run.
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<&SimStats, TraceError> {
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            match parse_line(line_no, &line) {
                Ok(op) => {
                    let _ = self.step(op);
                }
                Err(err) => {
                    debug!(line = line_no, "aborting replay: {err}");
                    return Err(err);
                }
            }
        }

        let stats = self.cache.stats();
        debug!(
            accesses = stats.accesses(),
            hits = stats.hits(),
            misses = stats.misses(),
            cycles = stats.cycles,
            dirty_lines = self.cache.dirty_lines(),
            "replay complete"
        );
        Ok(stats)
    }

    /// Replays a trace held in memory.
    pub fn run_str(&mut self, trace: &str) -> Result<&SimStats, TraceError> {
        self.run(trace.as_bytes())
    }

    /// Opens and replays the trace file at `path`.
    pub fn run_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&SimStats, TraceError> {
        let file = File::open(path)?;
        self.run(BufReader::new(file))
    }
}
