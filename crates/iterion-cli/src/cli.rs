//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{LinearArgs, RootArgs};

/// Iterion - classroom numerical methods CLI
#[derive(Parser)]
#[command(name = "iterion")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Sweep an interval in equal segments, bisecting each for a root
    Root(RootArgs),

    /// Solve a linear system by Gauss-Seidel iteration
    Linear(LinearArgs),
}
