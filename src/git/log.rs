use crate::error::{GitcalError, Result};
use crate::model::{Commit, CommitHistory};
use crate::util::parse_short_date;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Something that can list an author's commits as `<hash> <YYYY-MM-DD>` lines.
pub trait LogSource {
    fn run_log(&self, author: &str) -> Result<String>;
}

/// Runs the `git` binary found on `PATH`.
pub struct GitCli {
    dir: PathBuf,
}

impl GitCli {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl LogSource for GitCli {
    fn run_log(&self, author: &str) -> Result<String> {
        debug!(dir = %self.dir.display(), author, "running git log");
        let output = Command::new("git")
            .arg("log")
            .arg(format!("--author={author}"))
            .arg("--pretty=format:%h %ad")
            .arg("--date=short")
            .current_dir(&self.dir)
            .output()
            .map_err(|e| GitcalError::Execution(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitcalError::Execution(format!(
                "git log exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

pub fn extract(source: &dyn LogSource, author: &str) -> Result<CommitHistory> {
    let output = source.run_log(author)?;
    parse_log(author, &output)
}

pub fn parse_log(author: &str, output: &str) -> Result<CommitHistory> {
    if output.trim().is_empty() {
        return Err(GitcalError::NoContributions {
            author: author.to_string(),
        });
    }

    let mut history = CommitHistory::new(author);
    for line in output.lines() {
        let Some((hash, date)) = line.trim_end().split_once(char::is_whitespace) else {
            continue;
        };
        match parse_short_date(date) {
            Ok(timestamp) => history.commits.push(Commit {
                hash: hash.to_string(),
                author: author.to_string(),
                timestamp,
            }),
            Err(e) => warn!("Failed to parse date {date}: {e}"),
        }
    }

    debug!(commits = history.len(), "parsed git log output");
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    struct Canned(&'static str);

    impl LogSource for Canned {
        fn run_log(&self, _author: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl LogSource for Failing {
        fn run_log(&self, _author: &str) -> Result<String> {
            Err(GitcalError::Execution("fatal: not a git repository".to_string()))
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn skips_malformed_lines() {
        let out = "abc123 2024-06-01\ndef456 2024-06-01\nbad-line\nghi789 2024-06-02";
        let history = extract(&Canned(out), "alice").unwrap();

        assert_eq!(history.author, "alice");
        let parsed: Vec<_> = history
            .commits
            .iter()
            .map(|c| (c.hash.as_str(), c.timestamp))
            .collect();
        assert_eq!(
            parsed,
            vec![
                ("abc123", ymd(2024, 6, 1)),
                ("def456", ymd(2024, 6, 1)),
                ("ghi789", ymd(2024, 6, 2)),
            ]
        );
        assert!(history.commits.iter().all(|c| c.author == "alice"));
    }

    #[test]
    fn skips_unparseable_dates_and_keeps_going() {
        let out = "aaa 2024-13-01\nbbb not-a-date\nccc 2024-01-05\r\nddd 2024-1-6\neee 2024-01-07\n";
        let history = parse_log("bob", out).unwrap();
        let hashes: Vec<_> = history.commits.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, vec!["ccc", "eee"]);
    }

    #[test]
    fn keeps_emission_order() {
        let out = "new 2024-03-02\nold 2023-01-01\nmid 2023-07-04\n";
        let history = parse_log("carol", out).unwrap();
        let dates: Vec<_> = history.commits.iter().map(|c| c.timestamp).collect();
        assert_eq!(dates, vec![ymd(2024, 3, 2), ymd(2023, 1, 1), ymd(2023, 7, 4)]);
    }

    #[test]
    fn empty_output_is_no_contributions() {
        for out in ["", "\n", "  \n"] {
            assert!(matches!(
                extract(&Canned(out), "dave"),
                Err(GitcalError::NoContributions { ref author }) if author == "dave"
            ));
        }
    }

    #[test]
    fn only_malformed_lines_gives_empty_history() {
        let history = parse_log("erin", "garbage\nmore-garbage\n").unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn execution_errors_surface() {
        let err = extract(&Failing, "frank").unwrap_err();
        assert!(err.to_string().contains("not a git repository"));
    }

    #[test]
    fn git_cli_fails_outside_a_repository() {
        if Command::new("git").arg("--version").output().is_err() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let err = GitCli::new(dir.path()).run_log("nobody").unwrap_err();
        assert!(matches!(err, GitcalError::Execution(_)));
    }
}
