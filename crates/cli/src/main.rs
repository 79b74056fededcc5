//! Cache simulator CLI.
//!
//! This binary replays a memory trace through one cache and prints its statistics. It performs:
//! 1. **Configuration:** Six positional arguments (sets, blocks, block size, miss/write/eviction
//!    policy) or a JSON file via `--config`.
//! 2. **Replay:** Reads the trace from stdin, or from `--trace <file>`, one `l|s <hex>` line at a time.
//! 3. **Report:** Seven labeled counters on stdout, or the same counters as JSON.
//!
//! Exits with status 1 on any configuration or trace error; no statistics are
//! printed for a run that did not finish.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use csim_core::common::SimError;
use csim_core::config::{CacheConfig, EvictionPolicy, WriteMissPolicy, WritePolicy};
use csim_core::{SimStats, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "csim",
    author,
    version,
    about = "Set-associative cache simulator",
    long_about = "Replay a load/store trace through a configurable cache and report hits, misses, and cycles.\n\nExamples:\n  csim 256 4 16 write-allocate write-back lru < gcc.trace\n  csim 1 1 4 no-write-allocate write-through fifo --trace swim.trace\n  csim --config cache.json --trace gcc.trace --format json"
)]
struct Cli {
    /// Number of sets (positive power of two).
    #[arg(required_unless_present = "config")]
    sets: Option<usize>,

    /// Blocks per set (at least 1).
    #[arg(required_unless_present = "config")]
    blocks: Option<usize>,

    /// Bytes per block (power of two, at least 4).
    #[arg(required_unless_present = "config")]
    block_size: Option<usize>,

    /// write-allocate or no-write-allocate.
    #[arg(required_unless_present = "config")]
    miss_policy: Option<WriteMissPolicy>,

    /// write-through or write-back.
    #[arg(required_unless_present = "config")]
    write_policy: Option<WritePolicy>,

    /// lru or fifo.
    #[arg(required_unless_present = "config")]
    eviction_policy: Option<EvictionPolicy>,

    /// JSON cache configuration, used instead of the positional arguments.
    #[arg(long, conflicts_with = "sets")]
    config: Option<PathBuf>,

    /// Trace file to replay (defaults to stdin).
    #[arg(short, long)]
    trace: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log cache construction and replay summary to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Seven `Label: value` lines.
    Text,
    /// Pretty-printed JSON object.
    Json,
}

impl Cli {
    /// Builds the cache configuration from `--config` or the positional arguments.
    fn cache_config(&self) -> Result<CacheConfig, SimError> {
        if let Some(path) = &self.config {
            return CacheConfig::from_json_file(path);
        }

        // clap guarantees all positionals are present when --config is absent.
        Ok(CacheConfig {
            sets: self.sets.unwrap_or_default(),
            blocks: self.blocks.unwrap_or_default(),
            block_size: self.block_size.unwrap_or_default(),
            miss_policy: self.miss_policy.unwrap_or_default(),
            write_policy: self.write_policy.unwrap_or_default(),
            eviction_policy: self.eviction_policy.unwrap_or_default(),
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stats = match run(&cli) {
        Ok(stats) => stats,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match cli.format {
        Format::Text => stats.print(),
        Format::Json => match serde_json::to_string_pretty(&stats) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: failed to encode statistics: {err}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

/// Builds the cache, replays the whole trace, and returns the final statistics.
///
/// Configuration is fully validated before the trace source is opened.
fn run(cli: &Cli) -> Result<SimStats, SimError> {
    let config = cli.cache_config()?;
    let mut sim = Simulator::new(&config)?;

    match &cli.trace {
        Some(path) => {
            debug!(trace = %path.display(), "replaying trace file");
            let _ = sim.run_file(path)?;
        }
        None => {
            debug!("replaying trace from stdin");
            let _ = sim.run(io::stdin().lock())?;
        }
    }

    Ok(sim.into_stats())
}

/// Installs a stderr subscriber; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
