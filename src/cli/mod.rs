// src/cli/mod.rs — CLI definition (clap derive)

pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "registrar", about = "Academic records and timetabling service", version)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose logging (overrides the configured level)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Start from the demo dataset instead of an empty registry
        #[arg(long)]
        seed: bool,
    },
    /// Load the demo dataset and print a summary
    Seed,
}
