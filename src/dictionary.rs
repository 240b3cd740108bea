//! Fixed-bucket hash set over case-folded words.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::DictionaryError;
use crate::hash::bucket_hash;

/// Longest word a source may contain, in bytes.
pub const MAX_WORD_LENGTH: usize = 45;

/// Bucket count chosen large relative to common word-list sizes so
/// chains stay short. The table never resizes.
pub const DEFAULT_BUCKET_COUNT: usize = 150_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Empty,
    Loading,
    Loaded,
    Unloaded,
}

impl State {
    fn name(self) -> &'static str {
        match self {
            State::Empty => "empty",
            State::Loading => "loading",
            State::Loaded => "loaded",
            State::Unloaded => "unloaded",
        }
    }
}

/// In-memory word set with a fixed number of buckets.
///
/// Words are ASCII-lowercased before they are stored, so membership is
/// case-insensitive. The lifecycle is empty → loaded → unloaded;
/// queries are valid in every state and answer as an empty set outside
/// of `loaded`.
pub struct WordSet {
    buckets: Vec<Vec<String>>,
    count: usize,
    max_word_length: usize,
    state: State,
}

impl WordSet {
    pub fn new() -> WordSet {
        WordSet::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    pub fn with_bucket_count(bucket_count: usize) -> WordSet {
        WordSet::with_limits(bucket_count, MAX_WORD_LENGTH)
    }

    pub fn with_limits(bucket_count: usize, max_word_length: usize) -> WordSet {
        WordSet {
            buckets: vec![Vec::new(); bucket_count.max(1)],
            count: 0,
            max_word_length,
            state: State::Empty,
        }
    }

    fn bucket_index(&self, word: &str) -> usize {
        bucket_hash(word) as usize % self.buckets.len()
    }

    /// Add a single word. The stored entry is the ASCII-lowercased
    /// form. Duplicates are kept and each one counts towards `size`.
    pub fn insert(&mut self, word: &str) -> Result<(), DictionaryError> {
        if self.state == State::Unloaded {
            return Err(DictionaryError::InvalidState {
                operation: "insert",
                state: self.state.name(),
            });
        }

        let index = self.bucket_index(word);
        let mut entry = String::new();
        entry.try_reserve_exact(word.len())?;
        entry.extend(word.chars().map(|c| c.to_ascii_lowercase()));

        let bucket = &mut self.buckets[index];
        bucket.try_reserve(1)?;
        bucket.push(entry);
        self.count += 1;
        Ok(())
    }

    /// Case-insensitive membership test. Never mutates the set.
    pub fn contains(&self, word: &str) -> bool {
        let bucket = &self.buckets[self.bucket_index(word)];
        bucket.iter().any(|entry| entry.eq_ignore_ascii_case(word))
    }

    /// Number of inserted entries, duplicates included.
    pub fn size(&self) -> usize {
        self.count
    }

    pub fn is_loaded(&self) -> bool {
        self.state == State::Loaded
    }

    /// Populate the set from a source with one word per line.
    ///
    /// Valid only on a set that has never been loaded. Blank lines are
    /// skipped; a line longer than the word-length limit aborts the
    /// load. On any failure the set rolls back to empty, so a failed
    /// load can be retried.
    pub fn load<R: BufRead>(&mut self, source: R) -> Result<(), DictionaryError> {
        if self.state != State::Empty {
            return Err(DictionaryError::InvalidState {
                operation: "load",
                state: self.state.name(),
            });
        }

        self.state = State::Loading;
        match self.load_records(source) {
            Ok(()) => {
                self.state = State::Loaded;
                info!("loaded {} words", self.count);
                Ok(())
            }
            Err(err) => {
                self.release_buckets();
                self.count = 0;
                self.state = State::Empty;
                Err(err)
            }
        }
    }

    fn load_records<R: BufRead>(&mut self, source: R) -> Result<(), DictionaryError> {
        for (number, line) in source.lines().enumerate() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if word.len() > self.max_word_length {
                return Err(DictionaryError::WordTooLong {
                    line: number + 1,
                    length: word.len(),
                    limit: self.max_word_length,
                });
            }
            self.insert(word)?;
        }
        Ok(())
    }

    /// Open `path` and load it as a word source.
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DictionaryError> {
        debug!("loading word list from {}", path.as_ref().display());
        let file = File::open(path.as_ref())?;
        self.load(BufReader::new(file))
    }

    /// Release every bucket's storage. Idempotent; the set stays valid
    /// and answers every query as an empty set afterwards.
    pub fn unload(&mut self) -> Result<(), DictionaryError> {
        self.release_buckets();
        self.count = 0;
        self.state = State::Unloaded;
        debug!("word set unloaded");
        Ok(())
    }

    fn release_buckets(&mut self) {
        // Chain release must stay iterative even for pathological
        // bucket lengths.
        for bucket in &mut self.buckets {
            *bucket = Vec::new();
        }
    }
}

impl Default for WordSet {
    fn default() -> WordSet {
        WordSet::new()
    }
}
