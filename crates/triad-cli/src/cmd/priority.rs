//! `td priority` — cycle a todo item's priority.

use crate::output::{CliError, OutputMode, render, render_error};
use clap::Args;
use std::io::Write as _;
use triad_core::{App, ItemId};

#[derive(Args, Debug)]
pub struct PriorityArgs {
    /// Id of the todo item to cycle.
    pub id: ItemId,
}

pub fn run_priority(args: &PriorityArgs, app: &mut App, output: OutputMode) -> anyhow::Result<()> {
    let Some(next) = app.todo.cycle_priority(&app.storage, args.id) else {
        let err = CliError::with_suggestion(
            format!("no todo item with id {}", args.id),
            "run `td list todo` to see ids",
        );
        render_error(output, &err)?;
        anyhow::bail!("no todo item with id {}", args.id);
    };
    render(
        output,
        &serde_json::json!({ "id": args.id, "priority": next }),
        |_, w| writeln!(w, "✓ {} is now {next}", args.id),
    )
}

#[cfg(test)]
mod tests {
    use super::PriorityArgs;

    #[test]
    fn priority_args_parse_id() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: PriorityArgs,
        }
        let w = Wrapper::parse_from(["test", "9"]);
        assert_eq!(w.args.id, 9);
    }
}
