//! `clientgen` command line interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use clientgen::{GenerateConfig, generate_client};

#[derive(Parser)]
#[command(
    name = "clientgen",
    version,
    about = "Generate TypeScript client modules from a declarative api description"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the client module tree
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    /// Path to the api description JSON file
    #[arg(long = "api", value_name = "FILE")]
    api: PathBuf,

    /// Output directory; fully replaced on every run
    #[arg(long = "out", value_name = "DIR")]
    out: PathBuf,

    /// Name of the package-root client type imported by every module
    #[arg(long = "client-symbol", default_value = "ApiClient")]
    client_symbol: String,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Generate(args) => run_generate(args),
    };
    std::process::exit(code);
}

fn run_generate(args: GenerateArgs) -> i32 {
    let config = GenerateConfig {
        client_symbol: args.client_symbol,
    };
    match generate_client(&args.api, &args.out, &config) {
        Ok(()) => {
            println!("generated");
            0
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}
