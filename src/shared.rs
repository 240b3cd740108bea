use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::dictionary::WordSet;
use crate::error::DictionaryError;

/// Cloneable handle for sharing a [`WordSet`] across threads.
///
/// `check` and `size` take the read lock, so queries run concurrently;
/// `insert`, `load` and `unload` take the write lock.
#[derive(Clone)]
pub struct SharedWordSet(Arc<RwLock<WordSet>>);

impl SharedWordSet {
    pub fn new(set: WordSet) -> SharedWordSet {
        SharedWordSet(Arc::new(RwLock::new(set)))
    }

    pub fn check(&self, word: &str) -> bool {
        self.0.read().contains(word)
    }

    pub fn size(&self) -> usize {
        self.0.read().size()
    }

    pub fn insert(&self, word: &str) -> Result<(), DictionaryError> {
        self.0.write().insert(word)
    }

    pub fn load<R: BufRead>(&self, source: R) -> Result<(), DictionaryError> {
        self.0.write().load(source)
    }

    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
        self.0.write().load_path(path)
    }

    pub fn unload(&self) -> Result<(), DictionaryError> {
        self.0.write().unload()
    }
}

impl Default for SharedWordSet {
    fn default() -> SharedWordSet {
        SharedWordSet::new(WordSet::new())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::thread;

    use super::*;

    #[test]
    fn clones_see_the_same_set() {
        let shared = SharedWordSet::default();
        let other = shared.clone();

        shared.load(Cursor::new("apple\nbanana\n")).unwrap();
        assert!(other.check("Apple"));
        assert_eq!(other.size(), 2);
    }

    #[test]
    fn concurrent_readers() {
        let shared = SharedWordSet::default();
        shared.load(Cursor::new("alpha\nbeta\ngamma\n")).unwrap();

        thread::scope(|scope| {
            for _ in 0..4 {
                let handle = shared.clone();
                scope.spawn(move || {
                    for _ in 0..100 {
                        assert!(handle.check("ALPHA"));
                        assert!(!handle.check("omega"));
                        assert_eq!(handle.size(), 3);
                    }
                });
            }
        });
    }

    #[test]
    fn unload_through_one_handle_is_visible_in_another() {
        let shared = SharedWordSet::default();
        let other = shared.clone();

        shared.load(Cursor::new("apple\n")).unwrap();
        other.unload().unwrap();
        assert!(!shared.check("apple"));
        assert_eq!(shared.size(), 0);
    }
}
