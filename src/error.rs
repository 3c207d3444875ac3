use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitcalError>;

#[derive(Error, Debug)]
pub enum GitcalError {
    #[error("Error reading config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Error parsing config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("No {field} specified in config file {}", .path.display())]
    MissingField { field: &'static str, path: PathBuf },
    #[error("Error running git log: {0}")]
    Execution(String),
    #[error("No contributions found for {author}")]
    NoContributions { author: String },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::discover::Error> for GitcalError {
    fn from(err: gix::discover::Error) -> Self {
        GitcalError::GitDiscover(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GitcalError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GitcalError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GitcalError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GitcalError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GitcalError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GitcalError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for GitcalError {
    fn from(err: gix::object::commit::Error) -> Self {
        GitcalError::Commit(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GitcalError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GitcalError::ObjectDecode(Box::new(err))
    }
}
