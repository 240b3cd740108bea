use std::collections::HashSet;

use crate::dictionary::WordSet;
use crate::lexer::{WordLexer, WordToken};

pub struct CheckReport {
    pub unknown: Vec<WordToken>,
    pub words_checked: usize,
}

/// Runs a token stream against a word set, skipping tokens that are
/// not worth checking.
pub struct Checker {
    ignore: HashSet<String>,
}

impl Checker {
    pub fn new(ignore: &[String]) -> Checker {
        Checker {
            ignore: ignore.iter().map(|w| w.to_ascii_lowercase()).collect(),
        }
    }

    pub fn run(&self, dictionary: &WordSet, lexer: WordLexer) -> CheckReport {
        let mut words_checked = 0;
        let unknown = lexer
            // Single letters are not relevant for spelling mistakes
            .filter(|t| t.text.len() > 1)
            .filter(|t| !self.ignore.contains(&t.text.to_ascii_lowercase()))
            .inspect(|_| words_checked += 1)
            .filter(|t| !dictionary.contains(&t.text))
            .collect();

        CheckReport {
            unknown,
            words_checked,
        }
    }
}
