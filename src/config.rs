use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::dictionary::{DEFAULT_BUCKET_COUNT, MAX_WORD_LENGTH};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize, Clone)]
pub struct Config {
    /// Word list with one word per line.
    #[serde(default = "default_dictionary_path")]
    pub dictionary: PathBuf,

    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,

    #[serde(default = "default_max_word_length")]
    pub max_word_length: usize,

    /// Words that should never be flagged, e.g. product names.
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Config {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary_path(),
            bucket_count: default_bucket_count(),
            max_word_length: default_max_word_length(),
            ignore: Vec::new(),
        }
    }
}

fn default_dictionary_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("wordset").join("words.txt"))
        .unwrap_or_else(|| PathBuf::from("words.txt"))
}

fn default_bucket_count() -> usize {
    DEFAULT_BUCKET_COUNT
}

fn default_max_word_length() -> usize {
    MAX_WORD_LENGTH
}

pub fn expand_tilde<P: AsRef<Path>>(input: P) -> Option<PathBuf> {
    let path = input.as_ref();
    if !path.starts_with("~") {
        return Some(path.to_path_buf());
    }
    let home = dirs::home_dir()?;
    if path == Path::new("~") {
        return Some(home);
    }
    match path.strip_prefix("~/") {
        Ok(rest) => Some(home.join(rest)),
        Err(_) => None,
    }
}
