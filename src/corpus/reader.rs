//! Reads the tab-separated corpus text and decodes every word.
//!
//! Each input line is one token: reference, surface form, functional
//! tag, form tag, Strong's number, lemma, normalized form (extra columns
//! are ignored). Words get consecutive monad numbers; books, chapters
//! and verses are built as monad ranges that grow while words stream in.

use std::io::Read;

use anyhow::{Context, Result, bail};
use log::warn;
use rayon::prelude::*;

use crate::models::{Book, BookName, Chapter, MonadRange, Verse, Word};
use crate::morphology::{Morphology, decode_tag};

/// The corpus with all object types the MQL script will create.
#[derive(Debug, Default)]
pub struct Corpus {
    pub words: Vec<Word>,
    pub books: Vec<Book>,
    pub chapters: Vec<Chapter>,
    pub verses: Vec<Verse>,
}

/// One raw input line before morphology decoding.
#[derive(Debug, Clone)]
struct RawToken {
    line: u64,
    reference: String,
    surface: String,
    functional_tag: String,
    form_tag: String,
    strongs: i32,
    strongs_unreliable: bool,
    lemma: String,
    normalized: String,
}

/// Reads and decodes the whole corpus. In strict mode (the default) the
/// first undecodable form tag fails the run; with `lenient` such words
/// are logged and skipped. One word's failure never affects another's
/// decode.
pub fn read_corpus(input: impl Read, lenient: bool) -> Result<Corpus> {
    let tokens = parse_tokens(input)?;

    // Decoding one tag touches nothing but the static registries, so the
    // words can be decoded in parallel.
    let decoded: Vec<_> = tokens
        .par_iter()
        .map(|token| decode_tag(&token.form_tag))
        .collect();

    let mut corpus = Corpus::default();

    for (token, morphology) in tokens.into_iter().zip(decoded) {
        let morphology = match morphology {
            Ok(morphology) => morphology,
            Err(err) if lenient => {
                warn!("line {}: skipping {:?}: {err}", token.line, token.reference);
                continue;
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("line {}: cannot decode {:?}", token.line, token.reference)
                });
            }
        };

        let monad = corpus.words.len() as u32 + 1;
        let (book, chapter, verse) = split_reference(&token.reference)
            .with_context(|| format!("line {}: bad reference", token.line))?;

        add_word(&mut corpus, monad, token, morphology);
        add_book(&mut corpus.books, monad, book);
        add_chapter(&mut corpus.chapters, monad, book, chapter);
        add_verse(&mut corpus.verses, monad, book, chapter, verse);
    }

    Ok(corpus)
}

fn parse_tokens(input: impl Read) -> Result<Vec<RawToken>> {
    // The corpus is raw tab-separated text; a quote is an ordinary
    // character, never a field delimiter.
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut tokens = Vec::new();

    for record in reader.records() {
        let record = record.context("cannot read corpus line")?;
        let line = record.position().map_or(0, |p| p.line());

        if record.len() < 7 {
            bail!("line {line}: expected at least 7 tab-separated fields, found {}", record.len());
        }

        let (strongs, strongs_unreliable) = parse_strongs(&record[4])
            .with_context(|| format!("line {line}: bad Strong's number {:?}", &record[4]))?;

        tokens.push(RawToken {
            line,
            reference: record[0].to_string(),
            surface: record[1].to_string(),
            functional_tag: record[2].to_string(),
            form_tag: record[3].to_string(),
            strongs,
            strongs_unreliable,
            lemma: record[5].to_string(),
            normalized: record[6].to_string(),
        });
    }

    Ok(tokens)
}

/// Parses the leading integer of a Strong's number field. A leading zero
/// marks the number as unreliable; anything after the digits (a second
/// number) is discarded.
fn parse_strongs(field: &str) -> Result<(i32, bool)> {
    let digits: String = field.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        bail!("no digits");
    }

    let unreliable = digits.starts_with('0');
    let mut strongs: i32 = digits.parse()?;

    // Known erratum in the source text.
    if strongs == 11391 {
        strongs = 1391;
    }

    Ok((strongs, unreliable))
}

/// Splits a reference like "Matt 3:8" into book, chapter and verse.
fn split_reference(reference: &str) -> Result<(BookName, u32, u32)> {
    let (abbrev, rest) = reference
        .split_once(' ')
        .with_context(|| format!("no book in {reference:?}"))?;
    let (chapter, verse) = rest
        .split_once(':')
        .with_context(|| format!("no chapter:verse in {reference:?}"))?;

    let book = BookName::from_abbreviation(abbrev)
        .with_context(|| format!("unknown book {abbrev:?}"))?;

    Ok((book, chapter.parse()?, verse.parse()?))
}

fn add_word(corpus: &mut Corpus, monad: u32, token: RawToken, morphology: Morphology) {
    corpus.words.push(Word {
        monad,
        reference: token.reference,
        surface: token.surface,
        functional_tag: token.functional_tag,
        form_tag: token.form_tag,
        strongs: token.strongs,
        strongs_unreliable: token.strongs_unreliable,
        lemma: token.lemma,
        normalized: token.normalized,
        morphology,
        lexeme_occurrences: 0,
        frequency_rank: 0,
    });
}

fn add_book(books: &mut Vec<Book>, monad: u32, book: BookName) {
    match books.last_mut() {
        Some(last) if last.book == book => last.range.add(monad),
        _ => books.push(Book {
            range: MonadRange::new(monad),
            book,
        }),
    }
}

fn add_chapter(chapters: &mut Vec<Chapter>, monad: u32, book: BookName, chapter: u32) {
    match chapters.last_mut() {
        Some(last) if last.book == book && last.chapter == chapter => last.range.add(monad),
        _ => chapters.push(Chapter {
            range: MonadRange::new(monad),
            book,
            chapter,
        }),
    }
}

fn add_verse(verses: &mut Vec<Verse>, monad: u32, book: BookName, chapter: u32, verse: u32) {
    match verses.last_mut() {
        Some(last) if last.book == book && last.chapter == chapter && last.verse == verse => {
            last.range.add(monad)
        }
        _ => verses.push(Verse {
            range: MonadRange::new(monad),
            book,
            chapter,
            verse,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::categories::{Case, PartOfSpeech};

    const SAMPLE: &str = "\
Matt 1:1\t\u{0392}\u{03af}\u{03b2}\u{03bb}\u{03bf}\u{03c2}\tN-NSF\tN-NSF\t976\t\u{03b2}\u{03af}\u{03b2}\u{03bb}\u{03bf}\u{03c2}\t\u{03b2}\u{03af}\u{03b2}\u{03bb}\u{03bf}\u{03c2}
Matt 1:1\t\u{03b3}\u{03b5}\u{03bd}\u{03ad}\u{03c3}\u{03b5}\u{03c9}\u{03c2}\tN-GSF\tN-GSF\t1078\t\u{03b3}\u{03ad}\u{03bd}\u{03b5}\u{03c3}\u{03b9}\u{03c2}\t\u{03b3}\u{03b5}\u{03bd}\u{03ad}\u{03c3}\u{03b5}\u{03c9}\u{03c2}
Matt 1:2\t\u{1f10}\u{03b3}\u{03ad}\u{03bd}\u{03bd}\u{03b7}\u{03c3}\u{03b5}\u{03bd}\tV-AAI-3S\tV-AAI-3S\t1080\t\u{03b3}\u{03b5}\u{03bd}\u{03bd}\u{03ac}\u{03c9}\t\u{1f10}\u{03b3}\u{03ad}\u{03bd}\u{03bd}\u{03b7}\u{03c3}\u{03b5}\u{03bd}
";

    #[test]
    fn reads_words_and_grows_ranges() {
        let corpus = read_corpus(SAMPLE.as_bytes(), false).unwrap();

        assert_eq!(corpus.words.len(), 3);
        assert_eq!(corpus.books.len(), 1);
        assert_eq!(corpus.chapters.len(), 1);
        assert_eq!(corpus.verses.len(), 2);

        let first = &corpus.words[0];
        assert_eq!(first.monad, 1);
        assert_eq!(first.strongs, 976);
        assert!(!first.strongs_unreliable);
        assert_eq!(first.morphology.psp, PartOfSpeech::Noun);
        assert_eq!(first.morphology.case, Case::Nominative);

        assert_eq!(corpus.books[0].range.first(), 1);
        assert_eq!(corpus.books[0].range.last(), 3);
        assert_eq!(corpus.verses[0].range.last(), 2);
        assert_eq!(corpus.verses[1].range.first(), 3);
    }

    #[test]
    fn strict_mode_fails_on_bad_tag() {
        let input = "Matt 1:1\tx\tN-ZZZ\tN-ZZZ\t1\tx\tx\n";
        assert!(read_corpus(input.as_bytes(), false).is_err());
    }

    #[test]
    fn lenient_mode_skips_bad_tags_and_renumbers() {
        let input = "Matt 1:1\tx\tN-ZZZ\tN-ZZZ\t1\tx\tx\nMatt 1:1\ty\tADV\tADV\t2\ty\ty\n";
        let corpus = read_corpus(input.as_bytes(), true).unwrap();

        assert_eq!(corpus.words.len(), 1);
        assert_eq!(corpus.words[0].monad, 1);
        assert_eq!(corpus.words[0].surface, "y");
    }

    #[test]
    fn quotes_in_fields_are_literal() {
        let input = "Matt 1:1\t\"x\tADV\tADV\t1\t\"x\t\"x\n";
        let corpus = read_corpus(input.as_bytes(), false).unwrap();

        assert_eq!(corpus.words[0].surface, "\"x");
        assert_eq!(corpus.words[0].lemma, "\"x");
    }

    #[test]
    fn strongs_field_semantics() {
        assert_eq!(parse_strongs("976").unwrap(), (976, false));
        assert_eq!(parse_strongs("0123").unwrap(), (123, true));
        assert_eq!(parse_strongs("3588 1234").unwrap(), (3588, false));
        assert_eq!(parse_strongs("11391").unwrap(), (1391, false));
        assert!(parse_strongs("abc").is_err());
    }

    #[test]
    fn references_split_into_book_chapter_verse() {
        assert_eq!(
            split_reference("Matt 3:8").unwrap(),
            (BookName::Matthew, 3, 8)
        );
        assert_eq!(
            split_reference("1Cor 13:4").unwrap(),
            (BookName::FirstCorinthians, 13, 4)
        );
        assert!(split_reference("Nowhere 1:1").is_err());
        assert!(split_reference("Matt 3").is_err());
    }
}
