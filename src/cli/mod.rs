//! Command-line interface wiring for the `textpages` binary.
//!
//! This module owns the clap definitions and delegates execution to the
//! submodule for each command.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod common;
pub mod config;
pub mod layout;
pub mod render;
pub mod utils;

/// Parsed CLI entrypoint for the `textpages` binary.
#[derive(Parser, Debug)]
#[command(
    name = "textpages",
    version,
    about = "Paginate a plain-text article into fixed-height PNG pages"
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render every page as a PNG into an output directory.
    Render(render::RenderArgs),
    /// Print the wrapped lines grouped by page without writing images.
    Layout(layout::LayoutArgs),
    /// Print the default configuration as JSON.
    Config(config::ConfigArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render(args) => render::handle(args),
        Command::Layout(args) => layout::handle(args),
        Command::Config(args) => config::handle(args),
    }
}
