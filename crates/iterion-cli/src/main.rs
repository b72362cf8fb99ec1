//! Iterion CLI - Classroom numerical methods from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Sweep an interval for roots of the demo polynomial
//! iterion root --low -2 --high 2 --tolerance 1e-6
//!
//! # Solve the demo linear system by Gauss-Seidel iteration
//! iterion linear
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Root(args) => commands::root::execute(args)?,
        Commands::Linear(args) => commands::linear::execute(args)?,
    }

    Ok(())
}
