// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, GenerateArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate passwords and estimate their strength", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// History/favorites store (a JSON file path, or `memory:`); overrides PASSFORGE_STORE
    #[arg(long, short)]
    pub store: Option<String>,

    /// Log at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Command to execute; the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
