pub mod checker;
pub mod config;
pub mod dictionary;
pub mod error;
mod hash;
pub mod lexer;
pub mod shared;

pub use dictionary::WordSet;
pub use error::DictionaryError;
pub use shared::SharedWordSet;
