mod cli;
mod config;
mod display;
mod engine;
mod error;
mod logging;
mod models;
mod renderer;
mod store;

use chrono::Local;
use clap::{CommandFactory, Parser, ValueEnum};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::debug;

use crate::engine::TimecardEngine;
use crate::renderer::Renderer;

const AFTER_HELP: &str = "\
Get a timecard set up with the 'new' command, then use the 'clockin' and
'clockout' commands to record your time. When you want to see a summary of
your time, use the 'print' command.";

#[derive(Parser)]
#[command(name = "timecard", version)]
#[command(about = "Record work shifts for a project and summarize the time spent", long_about = None)]
#[command(after_help = AFTER_HELP, arg_required_else_help = true)]
struct Cli {
    /// Commands to run; several run in the order new, clockin, clockout, print
    #[arg(value_enum)]
    commands: Vec<Action>,

    /// Alias for the new command
    #[arg(short, long)]
    new: bool,

    /// Alias for the clockin command
    #[arg(short = 'i', long)]
    clockin: bool,

    /// Alias for the clockout command
    #[arg(short = 'o', long)]
    clockout: bool,

    /// Alias for the print command
    #[arg(short, long)]
    print: bool,

    /// Task worked on during the shift, recorded on clockout (repeatable)
    #[arg(short, long = "task", value_name = "TEXT")]
    tasks: Vec<String>,

    /// Path to config file (defaults to ./timecard.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Action {
    /// Set up a blank timecard for your project
    New,
    /// Set the start time for your shift
    Clockin,
    /// Set the end time for your shift
    Clockout,
    /// Print a summary of your time
    Print,
}

impl Cli {
    /// Requested actions from both positionals and flags, deduplicated and
    /// in execution order
    fn actions(&self) -> BTreeSet<Action> {
        let flags = [
            (self.new, Action::New),
            (self.clockin, Action::Clockin),
            (self.clockout, Action::Clockout),
            (self.print, Action::Print),
        ];

        self.commands
            .iter()
            .copied()
            .chain(flags.into_iter().filter(|(set, _)| *set).map(|(_, a)| a))
            .collect()
    }
}

fn main() {
    let args = Cli::parse();
    logging::enable_logging(args.verbose);

    let actions = args.actions();
    if actions.is_empty() {
        let _ = Cli::command().print_help();
        std::process::exit(2);
    }

    if let Err(e) = run(&args, &actions) {
        debug!(error = ?e, user_error = e.is_user_error(), "command failed");
        display::eprint_markdown(&Renderer::new(Local).render_error(&e));
        std::process::exit(1);
    }
}

fn run(args: &Cli, actions: &BTreeSet<Action>) -> error::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = config::resolve(args.config.as_deref(), &cwd)?;
    debug!(
        project = %config.project_name,
        path = %config.storage_path.display(),
        "resolved timecard"
    );

    let engine = TimecardEngine::new(&config);
    let renderer = Renderer::new(Local);

    for action in actions {
        debug!(?action, "running command");
        match action {
            Action::New => cli::new::run(&engine, &renderer)?,
            Action::Clockin => cli::clock::clock_in(&engine, &renderer)?,
            Action::Clockout => cli::clock::clock_out(&engine, &renderer, args.tasks.clone())?,
            Action::Print => cli::print::run(&engine, &renderer)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(argv: &[&str]) -> Vec<Action> {
        Cli::try_parse_from(argv.iter().copied()).unwrap().actions().into_iter().collect()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_and_flag_forms_agree() {
        assert_eq!(actions(&["timecard", "clockin"]), vec![Action::Clockin]);
        assert_eq!(actions(&["timecard", "-i"]), vec![Action::Clockin]);
        assert_eq!(actions(&["timecard", "--clockout"]), vec![Action::Clockout]);
        assert_eq!(actions(&["timecard", "-n"]), vec![Action::New]);
        assert_eq!(actions(&["timecard", "-p"]), vec![Action::Print]);
    }

    #[test]
    fn test_actions_run_in_fixed_order() {
        assert_eq!(
            actions(&["timecard", "print", "clockin", "-n", "new"]),
            vec![Action::New, Action::Clockin, Action::Print]
        );
    }

    #[test]
    fn test_tasks_are_collected() {
        let cli = Cli::try_parse_from(["timecard", "clockout", "-t", "triage", "--task", "deploy"])
            .unwrap();
        assert_eq!(cli.tasks, vec!["triage".to_string(), "deploy".to_string()]);
    }

    #[test]
    fn test_no_arguments_is_an_error() {
        assert!(Cli::try_parse_from(["timecard"]).is_err());
    }

    #[test]
    fn test_unknown_command_is_an_error() {
        assert!(Cli::try_parse_from(["timecard", "clock-in"]).is_err());
    }
}
