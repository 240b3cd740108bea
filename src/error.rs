use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word source: {0}")]
    Io(#[from] std::io::Error),

    #[error("out of memory while inserting a word: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("word at line {line} is {length} bytes long, the limit is {limit}")]
    WordTooLong {
        line: usize,
        length: usize,
        limit: usize,
    },

    #[error("cannot {operation} while the word set is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
}
