//! Data model for the generated Emdros objects: words, books, chapters
//! and verses, each covering a contiguous range of monads (word
//! positions).

use log::warn;
use strum::{Display, EnumIter};

use crate::morphology::Morphology;

/// New Testament book, in canonical order. The `Display` labels are the
/// values of the `book_name_t` MQL enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum BookName {
    Matthew,
    Mark,
    Luke,
    John,
    Acts,
    Romans,
    #[strum(serialize = "I_Corinthians")]
    FirstCorinthians,
    #[strum(serialize = "II_Corinthians")]
    SecondCorinthians,
    Galatians,
    Ephesians,
    Philippians,
    Colossians,
    #[strum(serialize = "I_Thessalonians")]
    FirstThessalonians,
    #[strum(serialize = "II_Thessalonians")]
    SecondThessalonians,
    #[strum(serialize = "I_Timothy")]
    FirstTimothy,
    #[strum(serialize = "II_Timothy")]
    SecondTimothy,
    Titus,
    Philemon,
    Hebrews,
    James,
    #[strum(serialize = "I_Peter")]
    FirstPeter,
    #[strum(serialize = "II_Peter")]
    SecondPeter,
    #[strum(serialize = "I_John")]
    FirstJohn,
    #[strum(serialize = "II_John")]
    SecondJohn,
    #[strum(serialize = "III_John")]
    ThirdJohn,
    Jude,
    Revelation,
}

impl BookName {
    /// Resolves the abbreviation used in corpus references ("Matt",
    /// "1Cor", ...).
    pub fn from_abbreviation(abbrev: &str) -> Option<BookName> {
        let book = match abbrev {
            "Matt" => BookName::Matthew,
            "Mark" => BookName::Mark,
            "Luke" => BookName::Luke,
            "John" => BookName::John,
            "Acts" => BookName::Acts,
            "Rom" => BookName::Romans,
            "1Cor" => BookName::FirstCorinthians,
            "2Cor" => BookName::SecondCorinthians,
            "Gal" => BookName::Galatians,
            "Eph" => BookName::Ephesians,
            "Phil" => BookName::Philippians,
            "Col" => BookName::Colossians,
            "1Thess" => BookName::FirstThessalonians,
            "2Thess" => BookName::SecondThessalonians,
            "1Tim" => BookName::FirstTimothy,
            "2Tim" => BookName::SecondTimothy,
            "Titus" => BookName::Titus,
            "Phlm" => BookName::Philemon,
            "Heb" => BookName::Hebrews,
            "Jas" => BookName::James,
            "1Pet" => BookName::FirstPeter,
            "2Pet" => BookName::SecondPeter,
            "1John" => BookName::FirstJohn,
            "2John" => BookName::SecondJohn,
            "3John" => BookName::ThirdJohn,
            "Jude" => BookName::Jude,
            "Rev" => BookName::Revelation,
            _ => return None,
        };
        Some(book)
    }
}

/// A contiguous range of monads. Monads are 1-based word positions; every
/// Emdros object covers one such range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonadRange {
    first: u32,
    last: u32,
}

impl MonadRange {
    pub fn new(monad: u32) -> Self {
        MonadRange {
            first: monad,
            last: monad,
        }
    }

    /// Extends the range by one monad, which must be at most one larger
    /// than the current last monad.
    pub fn add(&mut self, monad: u32) {
        if self.last + 1 == monad {
            self.last = monad;
        } else if self.last != monad {
            warn!("bad range addition: {monad} after {}", self.last);
        }
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }
}

/// One corpus token with its decoded morphology and derived lexeme data.
/// A word occupies a single monad.
#[derive(Debug, Clone)]
pub struct Word {
    pub monad: u32,
    /// Human-readable reference, e.g. "Matt 3:8".
    pub reference: String,
    /// Surface form as it appears in the text.
    pub surface: String,
    pub functional_tag: String,
    /// The raw morphology tag this word was decoded from.
    pub form_tag: String,
    pub strongs: i32,
    pub strongs_unreliable: bool,
    pub lemma: String,
    pub normalized: String,
    pub morphology: Morphology,
    pub lexeme_occurrences: u32,
    pub frequency_rank: u32,
}

#[derive(Debug, Clone)]
pub struct Book {
    pub range: MonadRange,
    pub book: BookName,
}

#[derive(Debug, Clone)]
pub struct Chapter {
    pub range: MonadRange,
    pub book: BookName,
    pub chapter: u32,
}

#[derive(Debug, Clone)]
pub struct Verse {
    pub range: MonadRange,
    pub book: BookName,
    pub chapter: u32,
    pub verse: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ranges_grow_contiguously() {
        let mut range = MonadRange::new(5);
        range.add(6);
        range.add(7);
        assert_eq!(range.first(), 5);
        assert_eq!(range.last(), 7);
    }

    #[test]
    fn every_book_abbreviation_resolves() {
        let abbrevs = [
            "Matt", "Mark", "Luke", "John", "Acts", "Rom", "1Cor", "2Cor", "Gal", "Eph", "Phil",
            "Col", "1Thess", "2Thess", "1Tim", "2Tim", "Titus", "Phlm", "Heb", "Jas", "1Pet",
            "2Pet", "1John", "2John", "3John", "Jude", "Rev",
        ];
        let resolved: Vec<BookName> = abbrevs
            .iter()
            .map(|a| BookName::from_abbreviation(a).unwrap())
            .collect();
        let canonical: Vec<BookName> = BookName::iter().collect();
        assert_eq!(resolved, canonical);

        assert_eq!(BookName::from_abbreviation("Tob"), None);
    }

    #[test]
    fn book_labels_use_roman_numerals() {
        assert_eq!(BookName::FirstCorinthians.to_string(), "I_Corinthians");
        assert_eq!(BookName::ThirdJohn.to_string(), "III_John");
        assert_eq!(BookName::Revelation.to_string(), "Revelation");
    }
}
