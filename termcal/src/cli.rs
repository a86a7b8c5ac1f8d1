use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tc_time::{parse_iso_date, NaiveDate};

/// Academic term calendar.
#[derive(Parser)]
#[command(
    name = "termcal",
    version,
    about = "Academic term calendar: terms, holidays and school days"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the calendar state on a date.
    Show(ShowArgs),
    /// List term windows from the epoch onwards.
    Walk(WalkArgs),
    /// Compute the last day of a term starting on a given date.
    TermEnd(TermEndArgs),
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Path to TOML calendar configuration.
    #[arg(short, long, default_value = "termcal.toml")]
    pub config: PathBuf,

    /// Date to inspect (YYYY-MM-DD); defaults to today.
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Print the full state as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `walk` subcommand.
#[derive(clap::Args)]
pub struct WalkArgs {
    /// Path to TOML calendar configuration.
    #[arg(short, long, default_value = "termcal.toml")]
    pub config: PathBuf,

    /// Number of terms to list.
    #[arg(short, long, default_value_t = 6)]
    pub terms: usize,

    /// Print the windows as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `term-end` subcommand.
#[derive(clap::Args)]
pub struct TermEndArgs {
    /// First day of the term (YYYY-MM-DD).
    #[arg(short, long, value_parser = parse_date)]
    pub start: NaiveDate,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_iso_date(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_with_date() {
        let cli = Cli::try_parse_from(["termcal", "-vv", "show", "-c", "x.toml", "--date", "2025-01-11"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Show(args) => {
                assert_eq!(args.config, PathBuf::from("x.toml"));
                assert_eq!(args.date, NaiveDate::from_ymd_opt(2025, 1, 11));
                assert!(!args.json);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn rejects_bad_date() {
        assert!(Cli::try_parse_from(["termcal", "term-end", "--start", "2025-13-01"]).is_err());
    }

    #[test]
    fn walk_defaults() {
        let cli = Cli::try_parse_from(["termcal", "walk"]).unwrap();
        match cli.command {
            Command::Walk(args) => {
                assert_eq!(args.terms, 6);
                assert_eq!(args.config, PathBuf::from("termcal.toml"));
            }
            _ => panic!("expected walk"),
        }
    }
}
