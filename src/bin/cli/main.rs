mod app;
mod commands;
mod render;

use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "moodlog", about = "Mood journal and wellness insights", version)]
struct Cli {
    /// Data directory (default: platform local data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Profile to use (default: user_id from config)
    #[arg(long, global = true)]
    user: Option<String>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Record today's (or a given day's) mood
    Log {
        /// Mood level 1-5 (out-of-range values are clamped)
        level: i64,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
        /// Optional note
        #[arg(long)]
        note: Option<String>,
    },

    /// Write a journal entry
    Journal {
        /// Entry text (use "-" to read from stdin)
        text: Option<String>,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Manage goals
    Goal {
        /// Goal text
        text: String,
        /// Remove instead of adding
        #[arg(long)]
        remove: bool,
    },

    /// Manage reminders
    Remind {
        /// Reminder text, e.g. "09:00 - Take a break"
        text: String,
        /// Remove instead of adding
        #[arg(long)]
        remove: bool,
    },

    /// Show profile statistics
    Stats,

    /// Run the full wellness analysis
    Analyze {
        /// Only analyze the last N days
        #[arg(long, value_parser = clap::value_parser!(u32))]
        days: Option<u32>,
    },

    /// Show trend, weekday, sentiment and forecast reports
    Patterns,

    /// Export profile (and analysis) to a JSON file
    Export {
        /// Output file path
        path: PathBuf,
        /// Skip the analysis section
        #[arg(long)]
        no_analysis: bool,
    },
}

/// Read text from stdin if piped, or resolve "-" as stdin
fn resolve_text(text: Option<String>) -> anyhow::Result<Option<String>> {
    match text.as_deref() {
        Some("-") => read_stdin().map(Some),
        Some(_) => Ok(text),
        None => {
            if std::io::stdin().is_terminal() {
                return Ok(None);
            }
            let buf = read_stdin()?;
            Ok(if buf.trim().is_empty() { None } else { Some(buf) })
        }
    }
}

fn read_stdin() -> anyhow::Result<String> {
    read_text(std::io::stdin())
}

fn read_text(mut reader: impl Read) -> anyhow::Result<String> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .context("Failed to read journal text from stdin")?;
    Ok(buf)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();
    let app = app::App::new(cli.data_dir, cli.config, cli.user.as_deref())?;

    match cli.command {
        Command::Log { level, date, note } => {
            commands::log::run(&app, level, date.as_deref(), note, &cli.format, use_color)?;
        }
        Command::Journal { text, date } => {
            let text = resolve_text(text)?;
            commands::journal::run(&app, text, date.as_deref(), &cli.format)?;
        }
        Command::Goal { text, remove } => {
            commands::goals::run_goal(&app, &text, remove, &cli.format)?;
        }
        Command::Remind { text, remove } => {
            commands::goals::run_reminder(&app, &text, remove, &cli.format)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format, use_color)?;
        }
        Command::Analyze { days } => {
            commands::analyze::run(&app, days, &cli.format, use_color)?;
        }
        Command::Patterns => {
            commands::patterns::run(&app, &cli.format)?;
        }
        Command::Export { path, no_analysis } => {
            commands::export::run(&app, &path, !no_analysis, &cli.format)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_accepts_utf8() {
        let text = read_text("Une belle journée".as_bytes()).unwrap();
        assert_eq!(text, "Une belle journée");
    }

    #[test]
    fn test_read_text_reports_invalid_utf8() {
        let err = read_text(&[0x66, 0xff, 0xfe][..]).unwrap_err();
        assert_eq!(err.to_string(), "Failed to read journal text from stdin");
        assert!(err.root_cause().to_string().contains("UTF-8"));
    }
}
