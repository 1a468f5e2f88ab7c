//! `td remove` — delete an item from a list.

use crate::output::{CliError, OutputMode, render_error, render_success};
use clap::Args;
use std::str::FromStr;
use triad_core::{App, ItemId, Tab};

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Id of the item to delete.
    pub id: ItemId,

    /// List to delete from: dump, todo, or completed. Defaults to the active tab.
    #[arg(short, long)]
    pub list: Option<String>,
}

pub fn run_remove(args: &RemoveArgs, app: &mut App, output: OutputMode) -> anyhow::Result<()> {
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

    let removed = match tab {
        Tab::Dump => app.dump.remove(&app.storage, args.id),
        Tab::Todo => app.todo.remove(&app.storage, args.id),
        Tab::Completed => app.completed.remove(&app.storage, args.id),
    };
    if !removed {
        let err = CliError::with_suggestion(
            format!("no {tab} item with id {}", args.id),
            format!("run `td list {tab}` to see ids"),
        );
        render_error(output, &err)?;
        anyhow::bail!("no {tab} item with id {}", args.id);
    }
    render_success(output, &format!("removed {} from {tab}", args.id))
}

#[cfg(test)]
mod tests {
    use super::RemoveArgs;

    #[test]
    fn remove_args_list_is_optional() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: RemoveArgs,
        }
        let w = Wrapper::parse_from(["test", "3"]);
        assert_eq!(w.args.id, 3);
        assert!(w.args.list.is_none());

        let w = Wrapper::parse_from(["test", "3", "--list", "completed"]);
        assert_eq!(w.args.list.as_deref(), Some("completed"));
    }
}
