//! `textpages render`: the full text-to-PNG pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use textpages::render_text_to_dir;

use crate::cli::common::LayoutOptions;
use crate::cli::utils::read_input;

/// Arguments for `textpages render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Article to paginate (`-` for stdin).
    pub input: PathBuf,
    /// Output directory. Its existing contents are deleted before writing.
    #[arg(short = 'o', long = "output", default_value = "images")]
    pub output: PathBuf,
    /// Also write manifest.json with per-page checksums.
    #[arg(long)]
    pub manifest: bool,
    #[command(flatten)]
    pub layout: LayoutOptions,
}

/// Execute the render command.
pub fn handle(args: RenderArgs) -> Result<()> {
    let config = args.layout.resolve()?;
    let text = read_input(&args.input)?;
    let summary = render_text_to_dir(&text, &config, &args.output, args.manifest)?;
    println!(
        "Created {} page(s) in '{}'.",
        summary.total_pages(),
        summary.output_dir.display()
    );
    if let Some(path) = summary.manifest {
        println!("Wrote manifest to {}", path.display());
    }
    Ok(())
}
