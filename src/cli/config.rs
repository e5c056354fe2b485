//! `textpages config`: print the default configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use textpages::RenderConfig;

use crate::cli::utils::write_output;

/// Arguments for `textpages config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output file (`-` or omitted for stdout).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

/// Execute the config command.
pub fn handle(args: ConfigArgs) -> Result<()> {
    let mut json = serde_json::to_string_pretty(&RenderConfig::default())
        .context("failed to serialize default configuration")?;
    json.push('\n');
    match args.output {
        Some(path) => {
            write_output(&path, &json)?;
            if path.as_os_str() != "-" {
                println!("Wrote default configuration to {}", path.display());
            }
        }
        None => print!("{}", json),
    }
    Ok(())
}
