//! `td list` — show one list in its display order.

use crate::output::{CliError, OutputMode, render_error};
use clap::Args;
use std::str::FromStr;
use triad_core::{App, Tab};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Which list to show: dump, todo, or completed. Defaults to the active tab.
    pub list: Option<String>,
}

pub fn run_list(args: &ListArgs, app: &App, output: OutputMode) -> anyhow::Result<()> {
    let tab = match &args.list {
        Some(raw) => match Tab::from_str(raw) {
            Ok(tab) => tab,
            Err(err) => {
                render_error(output, &CliError::new(err.to_string()))?;
                anyhow::bail!("{err}");
            }
        },
        None => app.tabs.active(),
    };
    super::render_tab_list(app, tab, output)
}
