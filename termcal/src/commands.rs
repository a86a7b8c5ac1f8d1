use std::path::Path;

use anyhow::{Context, Result};
use tc_core::{Clock, SystemClock};
use tc_engine::{compute_term_end, current_term_details, CalendarConfig};
use termcal::report::{StateReport, WindowTable};
use tracing::info;

use crate::cli::{ShowArgs, TermEndArgs, WalkArgs};

fn load_config(path: &Path) -> Result<CalendarConfig> {
    let config = CalendarConfig::load(path)
        .with_context(|| format!("failed to load calendar config: {}", path.display()))?;
    info!(
        path = %path.display(),
        epoch = %config.epoch(),
        public_holidays = config.public_holidays().len(),
        "calendar config loaded"
    );
    Ok(config)
}

/// Print the calendar state on one date.
pub fn show(args: ShowArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let now = args.date.unwrap_or_else(|| SystemClock.today());
    let state = current_term_details(&config, Some(now))
        .with_context(|| format!("failed to compute calendar state for {now}"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", StateReport::new(&state, now));
    }
    Ok(())
}

/// List the first term windows from the epoch.
pub fn walk(args: WalkArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let windows = config
        .upcoming_terms(args.terms)
        .with_context(|| format!("failed to walk {} terms", args.terms))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&windows)?);
    } else {
        print!("{}", WindowTable(&windows));
    }
    Ok(())
}

/// Print the last day of a term that opens on `--start`.
pub fn term_end(args: TermEndArgs) -> Result<()> {
    let end = compute_term_end(args.start)
        .with_context(|| format!("failed to compute term end from {}", args.start))?;
    println!("{end}");
    Ok(())
}
