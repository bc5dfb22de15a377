//! Decode failures for a single morphology tag.
//!
//! Each variant is local to one word's decode; the caller decides whether
//! a bad tag aborts the whole run or is skipped with a diagnostic. No
//! variant is ever masked by an `NA` value.

use thiserror::Error;

use super::categories::{Mood, PartOfSpeech};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No rule in the named registry matched the remainder of the tag.
    #[error("no {registry} code matches {rest:?} at offset {position} of tag {tag:?}")]
    UnrecognizedCode {
        registry: &'static str,
        tag: String,
        position: usize,
        rest: String,
    },

    /// The grammar for the decoded part of speech completed without
    /// consuming the whole tag.
    #[error("trailing characters {leftover:?} after decoding {psp} tag {tag:?}")]
    TrailingData {
        psp: PartOfSpeech,
        tag: String,
        leftover: String,
    },

    /// A verb mood that requires a `-` before its remaining categories
    /// found none.
    #[error("expected '-' before the {mood} inflection of tag {tag:?}, found {rest:?}")]
    MissingDelimiter {
        mood: Mood,
        tag: String,
        rest: String,
    },
}
