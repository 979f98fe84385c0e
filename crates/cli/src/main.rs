//! Trace-driven cache simulator CLI.
//!
//! This binary wires the collaborators around the simulation engine. It performs:
//! 1. **Argument parsing:** Geometry flags (`-s`, `-E`, `-b`), trace path (`-t`), verbosity (`-v`).
//! 2. **Ingestion:** Reads and validates the memory trace into an access sequence.
//! 3. **Replay & report:** Runs the engine and prints the summary (or JSON with `--json`).

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cachesim_core::{CacheConfig, Simulator, sim};

#[derive(Parser, Debug)]
#[command(
    name = "csim",
    version,
    about = "Trace-driven set-associative cache simulator",
    long_about = "Replay a memory trace against a modelled set-associative cache and report hits, misses, evictions, and write-back dirty bytes.\n\nExamples:\n  csim -s 4 -E 2 -b 4 -t traces/long.trace\n  csim -v -s 1 -E 1 -b 1 -t traces/tiny.trace\n  csim --json -s 4 -E 2 -b 4 -t traces/long.trace"
)]
struct Cli {
    /// Number of set index bits (the cache has 2**s sets).
    #[arg(short = 's', value_name = "s")]
    set_bits: u32,

    /// Number of lines per set (associativity).
    #[arg(short = 'E', value_name = "E")]
    ways: usize,

    /// Number of block bits (each block holds 2**b bytes).
    #[arg(short = 'b', value_name = "b")]
    block_bits: u32,

    /// File name of the memory trace to process.
    #[arg(short = 't', value_name = "trace")]
    trace: PathBuf,

    /// Verbose mode: report the effect of each memory operation.
    #[arg(short = 'v')]
    verbose: bool,

    /// Print the final statistics as JSON instead of the summary table.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("csim: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CacheConfig::new(cli.set_bits, cli.ways, cli.block_bits, cli.verbose)?;
    let trace = sim::load_trace(&cli.trace)?;

    let mut simulator = Simulator::new(config)?;
    let stdout = io::stdout();
    let stats = simulator.run(&trace, &mut stdout.lock())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        stats.print();
    }
    Ok(())
}
