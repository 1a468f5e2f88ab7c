//! `td move` — promote a dump note into the todo list.

use crate::output::{CliError, OutputMode, render, render_error};
use clap::Args;
use std::io::Write as _;
use triad_core::{App, ItemId};

#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Id of the dump item to promote.
    pub id: ItemId,
}

pub fn run_move(args: &MoveArgs, app: &mut App, output: OutputMode) -> anyhow::Result<()> {
    let moved = app
        .dump
        .move_to_todo(&app.storage, args.id, &mut app.todo)
        .cloned();
    let Some(item) = moved else {
        let err = CliError::with_suggestion(
            format!("no dump item with id {}", args.id),
            "run `td list dump` to see ids",
        );
        render_error(output, &err)?;
        anyhow::bail!("no dump item with id {}", args.id);
    };
    render(output, &item, |item, w| {
        writeln!(w, "✓ moved to todo as {} ({})", item.id, item.priority)
    })
}
