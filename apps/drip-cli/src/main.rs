use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

#[derive(Parser)]
#[command(name = "drip")]
#[command(about = "Compile, inspect and fixture Drip token distributions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an allocations CSV into a distribution artifact
    Compile {
        /// Path to the allocations CSV (recipient,amount)
        #[arg(long)]
        allocations_csv: PathBuf,

        /// Where to write the artifact JSON
        #[arg(long, default_value = "distribution.json")]
        artifact_out: PathBuf,
    },

    /// Look up a recipient in a compiled artifact and verify their proof
    CheckEligibility {
        /// Path to a compiled artifact JSON
        #[arg(long)]
        artifact: PathBuf,

        /// Recipient address (0x-prefixed hex)
        #[arg(long)]
        recipient: String,
    },

    /// Generate a deterministic random allocations CSV for testing
    GenerateFixtures {
        /// Directory to write fixtures into
        #[arg(long, default_value = "fixtures")]
        out_dir: PathBuf,

        /// Number of recipients to generate
        #[arg(long, default_value_t = 100)]
        count: usize,

        /// RNG seed, same seed same fixtures
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compile {
            allocations_csv,
            artifact_out,
        } => commands::compile::execute(&allocations_csv, &artifact_out),
        Commands::CheckEligibility { artifact, recipient } => {
            commands::check_eligibility::execute(&artifact, &recipient)
        }
        Commands::GenerateFixtures {
            out_dir,
            count,
            seed,
        } => commands::generate_fixtures::execute(&out_dir, count, seed),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
