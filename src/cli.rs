use crate::calendar::ColorMode;
use crate::config::DEFAULT_CONFIG_FILE;
use anyhow::Result;
use clap::{ArgAction, Args, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitcal")]
#[command(about = "Contribution calendar of one author's commits over the last 364 days")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub calendar: CalendarArgs,

    #[arg(short, long, action = ArgAction::Count, global = true, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,
}

#[derive(Args, Clone)]
pub struct CalendarArgs {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Path to config file")]
    pub config: PathBuf,

    #[arg(long, help = "Directory to read history from (defaults to current dir)")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Last day of the calendar window (YYYY-MM-DD, defaults to today)")]
    pub as_of: Option<String>,

    #[arg(long, value_enum, default_value_t = Backend::Git, help = "How commit history is read")]
    pub backend: Backend,

    #[arg(long, value_enum, default_value_t = ColorMode::Auto, help = "When to use colors")]
    pub color: ColorMode,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Run `git log`
    Git,
    /// Walk the repository in-process
    Gix,
}

impl Cli {
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    pub fn execute(self) -> Result<()> {
        crate::calendar::exec(self.calendar)
    }
}
