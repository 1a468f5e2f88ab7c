#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use output::OutputMode;
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use triad_core::App;
use triad_core::app::resolve_data_dir;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "td: three-list task capture (dump, todo, completed)",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Data directory override (defaults to TRIAD_DATA_DIR, then the platform data dir).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Capture a new item",
        after_help = "EXAMPLES:\n    # Capture a loose note\n    td add \"look into rust workspaces\"\n\n    # Add a prioritized task directly\n    td add \"fix login timeout\" --list todo --priority high"
    )]
    Add(cmd::add::AddArgs),

    #[command(
        about = "Show a list",
        after_help = "EXAMPLES:\n    # Show the active tab's list\n    td list\n\n    # Show a specific list as JSON\n    td list todo --json"
    )]
    List(cmd::list::ListArgs),

    #[command(
        about = "Show or switch the active tab",
        after_help = "EXAMPLES:\n    # Show the current tab\n    td tab\n\n    # Switch to the todo view\n    td tab todo"
    )]
    Tab(cmd::tab::TabArgs),

    #[command(
        about = "Promote a dump note into the todo list",
        after_help = "EXAMPLES:\n    td move 1730000000000"
    )]
    Move(cmd::move_cmd::MoveArgs),

    #[command(
        about = "Complete a todo item",
        after_help = "EXAMPLES:\n    td done 1730000000000"
    )]
    Done(cmd::done::DoneArgs),

    #[command(
        about = "Send a completed item back to todo",
        after_help = "EXAMPLES:\n    td restore 1730000000000"
    )]
    Restore(cmd::restore::RestoreArgs),

    #[command(
        about = "Cycle a todo item's priority (high -> medium -> low -> high)",
        after_help = "EXAMPLES:\n    td priority 1730000000000"
    )]
    Priority(cmd::priority::PriorityArgs),

    #[command(
        about = "Rewrite a todo item's text",
        after_help = "EXAMPLES:\n    td edit 1730000000000 \"fix login timeout on mobile\""
    )]
    Edit(cmd::edit::EditArgs),

    #[command(
        about = "Delete an item from a list",
        after_help = "EXAMPLES:\n    # Delete from the active tab's list\n    td remove 1730000000000\n\n    # Delete from a specific list\n    td remove 1730000000000 --list completed"
    )]
    Remove(cmd::remove::RemoveArgs),

    #[command(
        about = "Export all lists to a markdown file",
        after_help = "EXAMPLES:\n    # Timestamped file in the current directory\n    td export\n\n    # Explicit destination\n    td export --output tasks.md"
    )]
    Export(cmd::export::ExportArgs),

    #[command(
        about = "Delete all lists and reset the tab",
        after_help = "EXAMPLES:\n    td clear --yes"
    )]
    Clear(cmd::clear::ClearArgs),

    #[command(about = "Generate shell completion scripts")]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TRIAD_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "triad=debug,info"
        } else {
            "triad=info,warn"
        })
    });

    let format = env::var("TRIAD_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();
    let data_dir = resolve_data_dir(cli.data_dir.clone());
    let mut app = App::open(&data_dir);

    match cli.command {
        Commands::Add(ref args) => cmd::add::run_add(args, &mut app, output),
        Commands::List(ref args) => cmd::list::run_list(args, &app, output),
        Commands::Tab(ref args) => cmd::tab::run_tab(args, &mut app, output),
        Commands::Move(ref args) => cmd::move_cmd::run_move(args, &mut app, output),
        Commands::Done(ref args) => cmd::done::run_done(args, &mut app, output),
        Commands::Restore(ref args) => cmd::restore::run_restore(args, &mut app, output),
        Commands::Priority(ref args) => cmd::priority::run_priority(args, &mut app, output),
        Commands::Edit(ref args) => cmd::edit::run_edit(args, &mut app, output),
        Commands::Remove(ref args) => cmd::remove::run_remove(args, &mut app, output),
        Commands::Export(ref args) => cmd::export::run_export(args, &app, output),
        Commands::Clear(ref args) => cmd::clear::run_clear(args, &mut app, output),
        Commands::Completions(ref args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_sets_output_mode() {
        let cli = Cli::parse_from(["td", "--json", "list"]);
        assert!(cli.json);
        assert!(cli.output_mode().is_json());
    }

    #[test]
    fn json_flag_after_subcommand() {
        let cli = Cli::parse_from(["td", "list", "--json"]);
        assert!(cli.json);
        assert!(cli.output_mode().is_json());
    }

    #[test]
    fn default_output_is_human() {
        let cli = Cli::parse_from(["td", "list"]);
        assert!(!cli.json);
        assert!(!cli.output_mode().is_json());
    }

    #[test]
    fn quiet_flag_parsed() {
        let cli = Cli::parse_from(["td", "-q", "list"]);
        assert!(cli.quiet);
    }

    #[test]
    fn data_dir_flag_is_global() {
        let cli = Cli::parse_from(["td", "list", "--data-dir", "/tmp/triad-test"]);
        assert_eq!(
            cli.data_dir.as_deref(),
            Some(std::path::Path::new("/tmp/triad-test"))
        );
    }

    #[test]
    fn add_subcommand_parses() {
        let cli = Cli::parse_from(["td", "add", "buy milk"]);
        assert!(matches!(cli.command, Commands::Add(_)));
    }

    #[test]
    fn all_subcommands_listed() {
        // Verify every subcommand exists by parsing each
        let subcommands = [
            vec!["td", "add", "x"],
            vec!["td", "list"],
            vec!["td", "tab"],
            vec!["td", "tab", "todo"],
            vec!["td", "move", "1"],
            vec!["td", "done", "1"],
            vec!["td", "restore", "1"],
            vec!["td", "priority", "1"],
            vec!["td", "edit", "1", "x"],
            vec!["td", "remove", "1"],
            vec!["td", "export"],
            vec!["td", "clear", "--yes"],
            vec!["td", "completions", "bash"],
        ];
        for args in &subcommands {
            let result = Cli::try_parse_from(args.iter());
            assert!(
                result.is_ok(),
                "Failed to parse: {:?} — error: {:?}",
                args,
                result.err()
            );
        }
    }

    #[test]
    fn completions_subcommand_parses() {
        let cli = Cli::parse_from(["td", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Commands::Completions(cmd::completions::CompletionsArgs {
                shell: clap_complete::Shell::Zsh,
            })
        ));
    }
}
