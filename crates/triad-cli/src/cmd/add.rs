//! `td add` — capture a new item in the dump or todo list.

use crate::output::{CliError, OutputMode, render, render_error};
use clap::Args;
use std::io::Write as _;
use std::str::FromStr;
use triad_core::{App, Priority};

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Text of the new item.
    pub text: String,

    /// Destination list: dump or todo.
    #[arg(short, long, default_value = "dump")]
    pub list: String,

    /// Priority for todo items: high, medium, or low.
    #[arg(short, long)]
    pub priority: Option<String>,
}

pub fn run_add(args: &AddArgs, app: &mut App, output: OutputMode) -> anyhow::Result<()> {
    // Input validation lives here; the stores accept whatever they are given.
    let text = args.text.trim();
    if text.is_empty() {
        render_error(output, &CliError::new("item text must not be empty"))?;
        anyhow::bail!("item text must not be empty");
    }

    match args.list.trim().to_ascii_lowercase().as_str() {
        "dump" => {
            if args.priority.is_some() {
                let err = CliError::with_suggestion(
                    "--priority only applies to the todo list",
                    "add with --list todo, or drop --priority",
                );
                render_error(output, &err)?;
                anyhow::bail!("--priority only applies to the todo list");
            }
            let item = app.dump.add(&app.storage, text).clone();
            render(output, &item, |item, w| {
                writeln!(w, "✓ added {} to dump", item.id)
            })?;
        }
        "todo" => {
            let priority = match &args.priority {
                Some(raw) => match Priority::from_str(raw) {
                    Ok(priority) => priority,
                    Err(err) => {
                        render_error(output, &CliError::new(err.to_string()))?;
                        anyhow::bail!("{err}");
                    }
                },
                None => Priority::default(),
            };
            let item = app.todo.add(&app.storage, text, priority).clone();
            render(output, &item, |item, w| {
                writeln!(w, "✓ added {} to todo ({})", item.id, item.priority)
            })?;
        }
        other => {
            let err = CliError::with_suggestion(
                format!("cannot add to '{other}'"),
                "completed items are created with `td done`; use --list dump or --list todo",
            );
            render_error(output, &err)?;
            anyhow::bail!("cannot add to '{other}'");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::AddArgs;

    #[test]
    fn add_args_defaults() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: AddArgs,
        }
        let w = Wrapper::parse_from(["test", "buy milk"]);
        assert_eq!(w.args.text, "buy milk");
        assert_eq!(w.args.list, "dump");
        assert!(w.args.priority.is_none());
    }

    #[test]
    fn add_args_todo_with_priority() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: AddArgs,
        }
        let w = Wrapper::parse_from(["test", "ship", "--list", "todo", "--priority", "high"]);
        assert_eq!(w.args.list, "todo");
        assert_eq!(w.args.priority.as_deref(), Some("high"));
    }
}
