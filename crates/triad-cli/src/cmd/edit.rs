//! `td edit` — rewrite a todo item's text.

use crate::output::{CliError, OutputMode, render_error, render_success};
use clap::Args;
use triad_core::{App, ItemId};

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Id of the todo item to edit.
    pub id: ItemId,

    /// Replacement text.
    pub text: String,
}

pub fn run_edit(args: &EditArgs, app: &mut App, output: OutputMode) -> anyhow::Result<()> {
    let text = args.text.trim();
    if text.is_empty() {
        render_error(output, &CliError::new("item text must not be empty"))?;
        anyhow::bail!("item text must not be empty");
    }
    if !app.todo.edit(&app.storage, args.id, text) {
        let err = CliError::with_suggestion(
            format!("no todo item with id {}", args.id),
            "run `td list todo` to see ids",
        );
        render_error(output, &err)?;
        anyhow::bail!("no todo item with id {}", args.id);
    }
    render_success(output, &format!("updated {}", args.id))
}
