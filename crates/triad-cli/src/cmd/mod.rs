//! One module per subcommand.

pub mod add;
pub mod clear;
pub mod completions;
pub mod done;
pub mod edit;
pub mod export;
pub mod list;
pub mod move_cmd;
pub mod priority;
pub mod remove;
pub mod restore;
pub mod tab;

use crate::output::OutputMode;
use std::io::{self, Write};
use triad_core::{App, Renderable, Tab};

/// Render the named list to stdout: a count header plus the variant's own
/// display-ordered rendering in human mode, the sorted item array in JSON.
pub(crate) fn render_tab_list(app: &App, tab: Tab, output: OutputMode) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if output.is_json() {
        match tab {
            Tab::Dump => serde_json::to_writer_pretty(&mut out, &app.dump.sorted())?,
            Tab::Todo => serde_json::to_writer_pretty(&mut out, &app.todo.sorted())?,
            Tab::Completed => serde_json::to_writer_pretty(&mut out, &app.completed.sorted())?,
        }
        writeln!(out)?;
        return Ok(());
    }

    let count = match tab {
        Tab::Dump => app.dump.len(),
        Tab::Todo => app.todo.len(),
        Tab::Completed => app.completed.len(),
    };
    writeln!(out, "{tab} — {count} item(s)")?;
    match tab {
        Tab::Dump => app.dump.render(&mut out)?,
        Tab::Todo => app.todo.render(&mut out)?,
        Tab::Completed => app.completed.render(&mut out)?,
    }
    Ok(())
}
