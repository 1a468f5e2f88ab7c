//! `td clear` — delete all three lists and reset the active tab.

use crate::output::{CliError, OutputMode, render_error, render_success};
use clap::Args;
use triad_core::App;

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Confirm the deletion; without this flag nothing is touched.
    #[arg(long)]
    pub yes: bool,
}

pub fn run_clear(args: &ClearArgs, app: &mut App, output: OutputMode) -> anyhow::Result<()> {
    if !args.yes {
        let err = CliError::with_suggestion(
            "refusing to clear all lists without confirmation",
            "re-run with --yes; this cannot be undone",
        );
        render_error(output, &err)?;
        anyhow::bail!("refusing to clear all lists without confirmation");
    }
    app.clear_all();
    render_success(output, "cleared all lists")
}

#[cfg(test)]
mod tests {
    use super::ClearArgs;

    #[test]
    fn clear_args_default_unconfirmed() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: ClearArgs,
        }
        let w = Wrapper::parse_from(["test"]);
        assert!(!w.args.yes);

        let w = Wrapper::parse_from(["test", "--yes"]);
        assert!(w.args.yes);
    }
}
