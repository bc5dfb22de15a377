//! Morphological tag decoding.
//!
//! A form tag is a compact code like `"V-PAI-3S"` (present active
//! indicative, third person singular) or `"N-NSM"` (noun, nominative
//! singular masculine). Decoding strips the part of speech from the
//! front, then follows a part-of-speech-specific grammar over the
//! remaining characters, consuming the tag through an ordered
//! first-match-wins registry per category.
//!
//! The registries are process-wide statics, read-only after startup, so
//! any number of words can be decoded in parallel.

pub mod categories;
pub mod codes;
mod cursor;
mod error;
mod grammar;
mod registry;

pub use cursor::TagCursor;
pub use error::DecodeError;
pub use grammar::{Morphology, decode_tag};
pub use registry::{Category, Registry};
