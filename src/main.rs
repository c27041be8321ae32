// src/main.rs — registrar entry point

use clap::Parser;

use registrar::cli::{Cli, Commands};
use registrar::infra::config::Config;
use registrar::infra::logger;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no registrar.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    logger::init_logging(level);

    match cli.command {
        Commands::Serve { port, seed } => registrar::cli::serve::run_serve(config, port, seed).await,
        Commands::Seed => registrar::cli::seed::run_seed(),
    }
}
