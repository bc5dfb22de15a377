//! Corpus ingestion: the text reader, lexeme frequency ranking, and the
//! inflection spreadsheets.

pub mod frequency;
pub mod inflection;
mod reader;

pub use reader::{Corpus, read_corpus};
