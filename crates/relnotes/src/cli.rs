//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Generate grouped release notes from commit messages and pull request
/// metadata.
#[derive(Debug, Parser)]
#[command(name = "relnotes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new relnotes configuration
    Init(commands::init::InitArgs),

    /// Generate the release notes document
    Generate(commands::generate::GenerateArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init(args) => commands::init::run(&args),
            Commands::Generate(args) => commands::generate::run(&args),
        }
    }
}
