//! `textpages layout`: dry run that prints the pagination.

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use textpages::{Page, PageFonts, PagedDocument};

use crate::cli::common::LayoutOptions;
use crate::cli::utils::{read_input, write_output};

/// Arguments for `textpages layout`.
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Article to paginate (`-` for stdin).
    pub input: PathBuf,
    /// Output file (`-` or omitted for stdout).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// Emit JSON instead of a text listing.
    #[arg(long)]
    pub json: bool,
    #[command(flatten)]
    pub layout: LayoutOptions,
}

#[derive(Serialize)]
struct LayoutReport<'a> {
    canvas_width: u32,
    canvas_height: u32,
    line_height: u32,
    total_pages: usize,
    pages: &'a [Page],
}

/// Execute the layout command.
pub fn handle(args: LayoutArgs) -> Result<()> {
    let config = args.layout.resolve()?;
    let text = read_input(&args.input)?;
    let fonts = PageFonts::load(&config);
    let doc = PagedDocument::lay_out(&text, &config, &fonts);

    let output = if args.json {
        let report = LayoutReport {
            canvas_width: doc.canvas.width,
            canvas_height: doc.canvas.height,
            line_height: doc.metrics.line_height,
            total_pages: doc.total_pages(),
            pages: &doc.pages,
        };
        let mut json =
            serde_json::to_string_pretty(&report).context("failed to serialize layout")?;
        json.push('\n');
        json
    } else {
        listing(&doc)
    };

    match args.output {
        Some(path) => write_output(&path, &output)?,
        None => print!("{}", output),
    }
    Ok(())
}

fn listing(doc: &PagedDocument) -> String {
    let mut out = String::new();
    for page in &doc.pages {
        let height = doc.metrics.height_of(&page.lines);
        writeln!(
            &mut out,
            "--- page {} ({} line(s), {}px) ---",
            page.marker(),
            page.lines.len(),
            height
        )
        .ok();
        for line in &page.lines {
            writeln!(&mut out, "{}", line).ok();
        }
    }
    out
}
