pub mod log;
pub mod repo;

pub use log::{extract, parse_log, GitCli, LogSource};
pub use repo::{GitRepo, GixLog};
