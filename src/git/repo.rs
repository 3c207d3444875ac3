use crate::error::{GitcalError, Result};
use crate::git::log::LogSource;
use chrono::{DateTime, FixedOffset, NaiveDate};
use gix::{discover, ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

const SHORT_HASH_LEN: usize = 7;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk every commit reachable from HEAD and emit `<hash> <date>` lines
    /// for those whose `Name <email>` contains `author`.
    pub fn author_log(&self, author: &str) -> Result<String> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut out = String::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Walking history...");

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            for pid in commit.parent_ids() {
                stack.push_back(pid.into());
            }
            pb.inc(1);

            let signature = commit.author()?;
            let identity = format!("{} <{}>", signature.name, signature.email);
            if !identity.contains(author) {
                continue;
            }

            let time = signature
                .time()
                .map_err(|e| GitcalError::InvalidDate(format!("Invalid author time: {e}")))?;
            let date = local_date(time.seconds, time.offset)?;
            let hash: String = commit_id.to_string().chars().take(SHORT_HASH_LEN).collect();
            out.push_str(&format!("{hash} {}\n", date.format("%Y-%m-%d")));
        }

        pb.finish_and_clear();
        tracing::debug!(visited = seen.len(), repo = %self.path().display(), "history walk finished");
        Ok(out)
    }
}

/// Calendar date of an author signature in its own UTC offset.
fn local_date(seconds: i64, offset: i32) -> Result<NaiveDate> {
    let utc = DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| GitcalError::InvalidDate(format!("Invalid timestamp: {seconds}")))?;
    let tz = FixedOffset::east_opt(offset)
        .ok_or_else(|| GitcalError::InvalidDate(format!("Invalid UTC offset: {offset}")))?;
    Ok(utc.with_timezone(&tz).date_naive())
}

/// `LogSource` backed by an in-process repository walk instead of the `git` binary.
pub struct GixLog {
    dir: PathBuf,
}

impl GixLog {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl LogSource for GixLog {
    fn run_log(&self, author: &str) -> Result<String> {
        let repo = GitRepo::open(Some(&self.dir))?;
        repo.author_log(author)
    }
}
