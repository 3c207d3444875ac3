use crate::error::{GitcalError, Result};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "gitcal.conf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub author: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    author: Option<String>,
}

impl Config {
    /// Read and validate a YAML config file. Only the `author` key is used.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| GitcalError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        let missing = || GitcalError::MissingField {
            field: "author",
            path: path.to_path_buf(),
        };

        // an empty document deserializes to nothing at all
        if contents.trim().is_empty() {
            return Err(missing());
        }

        let raw: RawConfig =
            serde_yaml::from_str(contents).map_err(|source| GitcalError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        match raw.author {
            Some(author) if !author.is_empty() => {
                tracing::debug!(author = %author, config = %path.display(), "loaded config");
                Ok(Self { author })
            }
            _ => Err(missing()),
        }
    }
}
