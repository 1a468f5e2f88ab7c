//! `td export` — write the markdown export document to a file.

use crate::output::{OutputMode, render};
use anyhow::Context as _;
use chrono::Utc;
use clap::Args;
use std::fs;
use std::io::Write as _;
use std::path::PathBuf;
use triad_core::{App, export};

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination path; defaults to a timestamped file in the current directory.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run_export(args: &ExportArgs, app: &App, output: OutputMode) -> anyhow::Result<()> {
    let now = Utc::now();
    let doc = export::render_markdown(app, now);
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(export::export_filename(now)));
    fs::write(&path, &doc).with_context(|| format!("failed to write {}", path.display()))?;

    render(
        output,
        &serde_json::json!({ "ok": true, "path": path }),
        |_, w| writeln!(w, "✓ exported to {}", path.display()),
    )
}
