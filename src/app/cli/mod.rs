//! CLI Adapter.

mod generate;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wsdgen")]
#[command(version)]
#[command(
    about = "Render sequence-diagram sources to PNG images via websequencediagrams.com",
    long_about = None
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every source file in the source directory
    #[clap(visible_alias = "g")]
    Generate(generate::GenerateArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = crate::app::telemetry::init(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let result: Result<i32, AppError> = match cli.command {
        Commands::Generate(args) => generate::run_generate(args),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
