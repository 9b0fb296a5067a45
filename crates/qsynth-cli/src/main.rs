//! qsynth Command-Line Interface
//!
//! Generates search, Fourier-transform and surface-code circuits as IR JSON,
//! decodes syndromes, and checks how circuits lower onto the vendor
//! executors.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{decode, grover, lower, providers, qft, stabilizer, topology, validate};
use config::Config;

/// qsynth - quantum circuit synthesis and surface-code tooling
#[derive(Parser)]
#[command(name = "qsynth")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to ~/.qsynth/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Grover-style search circuit
    Grover {
        /// Number of qubits
        #[arg(short, long)]
        qubits: u32,

        /// Marked basis state as a bit string, most significant bit first
        #[arg(short, long)]
        marked: Vec<String>,

        /// Iteration count (defaults to floor(pi/4 * sqrt(2^n)))
        #[arg(short, long)]
        iterations: Option<u32>,
    },

    /// Generate a QFT-style circuit
    Qft {
        /// Number of qubits
        #[arg(short, long)]
        qubits: u32,

        /// Emit the inverse transform
        #[arg(long)]
        inverse: bool,
    },

    /// Generate the stabilizer-measurement circuit of a surface code
    Stabilizer {
        /// Code distance (odd, at least 3)
        #[arg(short, long)]
        distance: u32,
    },

    /// Describe the surface-code layout for a distance
    Topology {
        /// Code distance (odd, at least 3)
        #[arg(short, long)]
        distance: u32,
    },

    /// Decode a syndrome into corrections
    Decode {
        /// Code distance (odd, at least 3)
        #[arg(short, long)]
        distance: u32,

        /// Syndrome bits, e.g. 10000000
        #[arg(short, long)]
        syndrome: String,
    },

    /// Validate an IR JSON file
    Validate {
        /// Input file (IR JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Fail when gates sit past the declared step count
        #[arg(long)]
        strict: bool,
    },

    /// Lower an IR JSON file onto a provider's gate set
    Lower {
        /// Input file (IR JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Provider (ibm, rigetti, google, microsoft)
        #[arg(short, long)]
        provider: String,
    },

    /// List providers and their gate sets
    Providers,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose, &config);

    let result = match cli.command {
        Commands::Grover {
            qubits,
            marked,
            iterations,
        } => grover::execute(qubits, &marked, iterations, &config),
        Commands::Qft { qubits, inverse } => qft::execute(qubits, inverse, &config),
        Commands::Stabilizer { distance } => stabilizer::execute(distance, &config),
        Commands::Topology { distance } => topology::execute(distance, &config),
        Commands::Decode { distance, syndrome } => decode::execute(distance, &syndrome, &config),
        Commands::Validate { input, strict } => validate::execute(&input, strict, &config),
        Commands::Lower { input, provider } => lower::execute(&input, &provider, &config),
        Commands::Providers => providers::execute(&config),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Install the global subscriber. Logs go to stderr so stdout stays JSON.
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match config.logging.format.as_str() {
        "json" => builder.json().init(),
        _ => builder.init(),
    }
}
