//! `td tab` — show or switch the active tab.

use crate::output::{CliError, OutputMode, render, render_error};
use clap::Args;
use std::io::Write as _;
use std::str::FromStr;
use triad_core::{App, Tab};

#[derive(Args, Debug)]
pub struct TabArgs {
    /// Tab to switch to: dump, todo, or completed. Omit to show the current tab.
    pub target: Option<String>,
}

pub fn run_tab(args: &TabArgs, app: &mut App, output: OutputMode) -> anyhow::Result<()> {
    let Some(raw) = &args.target else {
        let active = app.tabs.active();
        return render(
            output,
            &serde_json::json!({ "active": active }),
            |_, w| writeln!(w, "{active}"),
        );
    };

    let target = match Tab::from_str(raw) {
        Ok(tab) => tab,
        Err(err) => {
            render_error(output, &CliError::new(err.to_string()))?;
            anyhow::bail!("{err}");
        }
    };

    let switched = app.tabs.switch_tab(&app.storage, target);
    if output.is_json() {
        return render(
            output,
            &serde_json::json!({ "active": target, "switched": switched }),
            |_, _| Ok(()),
        );
    }

    if switched {
        // Only the newly active list is refreshed.
        super::render_tab_list(app, target, output)
    } else {
        render(output, &target, |tab, w| {
            writeln!(w, "already on {tab}")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::TabArgs;

    #[test]
    fn tab_args_target_is_optional() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: TabArgs,
        }
        let w = Wrapper::parse_from(["test"]);
        assert!(w.args.target.is_none());

        let w = Wrapper::parse_from(["test", "todo"]);
        assert_eq!(w.args.target.as_deref(), Some("todo"));
    }
}
