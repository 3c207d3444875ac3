use super::aggregate::aggregate;
use super::output::{output_calendar, output_json};
use super::render::{Renderer, Theme};
use crate::cli::{Backend, CalendarArgs};
use crate::config::Config;
use crate::git::{extract, GitCli, GixLog, LogSource};
use crate::util::parse_short_date;
use anyhow::Context;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

pub fn exec(args: CalendarArgs) -> anyhow::Result<()> {
    let config = Config::load(&args.config)?;

    let as_of = match args.as_of.as_deref() {
        Some(s) => parse_short_date(s).context("Invalid --as-of date")?,
        None => today(),
    };

    let dir = match args.repo {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };
    let source = log_source(args.backend, dir);

    let history = extract(source.as_ref(), &config.author)?;
    tracing::info!(author = %config.author, commits = history.len(), "extracted commit history");

    let theme = Theme {
        color: args.color,
        ..Theme::default()
    };
    let grid = aggregate(&history, as_of);

    if args.json {
        output_json(&grid, &config.author, as_of, theme.palette.max_level())?;
    } else {
        output_calendar(&grid, &Renderer::new(theme))?;
    }

    Ok(())
}

fn log_source(backend: Backend, dir: PathBuf) -> Box<dyn LogSource> {
    match backend {
        Backend::Git => Box::new(GitCli::new(dir)),
        Backend::Gix => Box::new(GixLog::new(dir)),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
