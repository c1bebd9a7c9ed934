use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tomata")]
#[command(about = "A Pomodoro countdown timer for the terminal")]
#[command(long_about = "tomata - A Pomodoro countdown timer for the terminal

Set a duration, describe the task you plan to work on, and start the
countdown. When the timer expires, the session is appended to a per-day
text log together with what you actually completed.

QUICK START:
  tomata                    Open the interactive timer
  tomata log                Show today's recorded sessions
  tomata log -d 2024-06-01  Show sessions from a specific day

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  tomata <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Runs the full-screen Pomodoro timer. Set the duration in minutes,
    /// describe the task you plan to work on, and start the countdown.
    /// When time is up, the session is recorded in the per-day log along
    /// with whatever you entered in the "completed" field.
    ///
    /// # Keys
    ///
    ///   Tab / Shift+Tab   Switch input field
    ///   Enter or Ctrl+S   Start the countdown
    ///   Ctrl+R            Reset the running countdown
    ///   Esc or Ctrl+C     Quit
    #[command(alias = "t")]
    Tui,

    /// Show recorded sessions from the per-day log
    ///
    /// Reads back the text log tomata appends to when a session expires.
    /// Defaults to today's file; pass --date for another day.
    ///
    /// # Examples
    ///
    ///   tomata log                    Today's sessions
    ///   tomata log -d 2024-06-01      A specific day
    ///   tomata log -o json            JSON for scripting
    ///   tomata log -l 5               Only the 5 most recent
    #[command(alias = "l")]
    Log(LogArgs),
}

/// Arguments for the log command.
#[derive(Args)]
pub struct LogArgs {
    /// Day to show, as YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Maximum number of sessions to show (most recent first)
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_log_defaults() {
        let cli = Cli::parse_from(["tomata", "log"]);
        match cli.command {
            Some(Commands::Log(args)) => {
                assert!(args.date.is_none());
                assert_eq!(args.limit, 20);
            }
            _ => panic!("expected log subcommand"),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_tui() {
        let cli = Cli::parse_from(["tomata"]);
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }
}
