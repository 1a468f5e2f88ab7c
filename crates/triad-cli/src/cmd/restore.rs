//! `td restore` — send a completed item back to the todo list.

use crate::output::{CliError, OutputMode, render, render_error};
use clap::Args;
use std::io::Write as _;
use triad_core::{App, ItemId};

#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Id of the completed item to restore.
    pub id: ItemId,
}

pub fn run_restore(args: &RestoreArgs, app: &mut App, output: OutputMode) -> anyhow::Result<()> {
    let restored = app
        .completed
        .restore_to_todo(&app.storage, args.id, &mut app.todo)
        .cloned();
    let Some(item) = restored else {
        let err = CliError::with_suggestion(
            format!("no completed item with id {}", args.id),
            "run `td list completed` to see ids",
        );
        render_error(output, &err)?;
        anyhow::bail!("no completed item with id {}", args.id);
    };
    render(output, &item, |item, w| {
        writeln!(w, "✓ restored to todo as {} ({})", item.id, item.priority)
    })
}
