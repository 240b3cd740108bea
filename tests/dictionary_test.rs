use std::io::Write;

use tempfile::NamedTempFile;
use wordset::{DictionaryError, WordSet};

#[test]
fn loads_a_word_list_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Apple").unwrap();
    writeln!(file, "banana").unwrap();
    writeln!(file, "CHERRY").unwrap();
    writeln!(file, "banana").unwrap();
    file.flush().unwrap();

    let mut set = WordSet::new();
    set.load_path(file.path()).unwrap();

    assert!(set.is_loaded());
    assert_eq!(set.size(), 4);
    assert!(set.contains("apple"));
    assert!(set.contains("BANANA"));
    assert!(set.contains("ChErRy"));
    assert!(!set.contains("durian"));

    set.unload().unwrap();
    assert_eq!(set.size(), 0);
    assert!(!set.contains("apple"));
}

#[test]
fn missing_file_is_an_io_error_and_the_set_stays_usable() {
    let mut set = WordSet::new();
    let err = set.load_path("/no/such/word/list.txt").unwrap_err();
    assert!(matches!(err, DictionaryError::Io(_)));

    // Opening failed before any insert; the set is still loadable.
    assert_eq!(set.size(), 0);
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "retry").unwrap();
    file.flush().unwrap();
    set.load_path(file.path()).unwrap();
    assert!(set.contains("retry"));
}

#[test]
fn crlf_line_endings_are_trimmed() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"alpha\r\nbeta\r\n").unwrap();
    file.flush().unwrap();

    let mut set = WordSet::new();
    set.load_path(file.path()).unwrap();
    assert_eq!(set.size(), 2);
    assert!(set.contains("alpha"));
    assert!(set.contains("beta"));
}
