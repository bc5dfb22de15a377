//! Cursor over the unconsumed remainder of a morphology tag.
//!
//! Decoding walks a tag like `"V-PAI-3S"` left to right; each registry
//! match strips the matched code from the front. The cursor keeps the
//! original tag around so errors can report the full tag and the offset
//! where decoding got stuck.

/// A shrinking view over a morphology tag string.
///
/// The cursor owns nothing but a byte position into the borrowed tag; it
/// lives only for the duration of one decode.
#[derive(Debug, Clone)]
pub struct TagCursor<'a> {
    tag: &'a str,
    pos: usize,
}

impl<'a> TagCursor<'a> {
    pub fn new(tag: &'a str) -> Self {
        TagCursor { tag, pos: 0 }
    }

    /// The complete original tag, for error reporting.
    pub fn full_tag(&self) -> &'a str {
        self.tag
    }

    /// Byte offset of the first unconsumed character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unconsumed remainder of the tag.
    pub fn rest(&self) -> &'a str {
        &self.tag[self.pos..]
    }

    /// Non-consuming prefix check against the remainder.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consumes `len` bytes. Callers must have confirmed a match first;
    /// stripping past the end of the tag is a programming error and
    /// panics.
    pub fn strip(&mut self, len: usize) {
        assert!(
            self.pos + len <= self.tag.len(),
            "stripped past the end of tag {:?}",
            self.tag
        );
        self.pos += len;
    }

    /// True when every character of the tag has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.tag.len()
    }

    /// First unconsumed character, if any. Used for single-character
    /// dispatch decisions such as spotting a suffix `-`.
    pub fn peek_first(&self) -> Option<char> {
        self.rest().chars().next()
    }
}
