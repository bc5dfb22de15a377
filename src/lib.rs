pub mod cli;
pub mod corpus;
pub mod models;
pub mod morphology;
pub mod mql;
pub mod text;

pub use corpus::{Corpus, read_corpus};
pub use models::{Book, BookName, Chapter, MonadRange, Verse, Word};
pub use morphology::{DecodeError, Morphology, decode_tag};
