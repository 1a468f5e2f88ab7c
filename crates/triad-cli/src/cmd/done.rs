//! `td done` — finish a todo item, moving it to the completed log.

use crate::output::{CliError, OutputMode, render, render_error};
use clap::Args;
use std::io::Write as _;
use triad_core::{App, ItemId};

#[derive(Args, Debug)]
pub struct DoneArgs {
    /// Id of the todo item to complete.
    pub id: ItemId,
}

pub fn run_done(args: &DoneArgs, app: &mut App, output: OutputMode) -> anyhow::Result<()> {
    let done = app
        .todo
        .complete(&app.storage, args.id, &mut app.completed)
        .cloned();
    let Some(item) = done else {
        let err = CliError::with_suggestion(
            format!("no todo item with id {}", args.id),
            "run `td list todo` to see ids",
        );
        render_error(output, &err)?;
        anyhow::bail!("no todo item with id {}", args.id);
    };
    render(output, &item, |item, w| {
        writeln!(w, "✓ completed {} (was {})", item.id, item.original_priority)
    })
}
