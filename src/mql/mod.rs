//! MQL script generation.
//!
//! The generated script creates the database, declares the enumerations
//! and object types, creates every object, and finishes with a vacuum.
//! Output is deterministic: the same corpus and tables produce the same
//! bytes.

mod emitter;
mod objects;

use std::io::{self, Write};

use strum::IntoEnumIterator;

use crate::corpus::Corpus;
use crate::models::BookName;

pub use emitter::{FeatureDef, MqlObject, define_object_type, emit_objects};

const DATABASE_NAME: &str = "nestle1904";

/// Writes the initial part of the MQL file: database creation and the
/// enumerations that do not belong to the word object.
pub fn header(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "CREATE DATABASE '{DATABASE_NAME}' GO")?;
    writeln!(output, "USE DATABASE '{DATABASE_NAME}' GO\n")?;

    writeln!(output, "CREATE ENUMERATION boolean_t = {{")?;
    writeln!(output, "    false = 0,")?;
    writeln!(output, "    true = 1")?;
    writeln!(output, "}}\nGO\n")?;

    writeln!(output, "CREATE ENUMERATION book_name_t = {{")?;
    let mut first = true;
    for book in BookName::iter() {
        if first {
            first = false;
        } else {
            writeln!(output, ",")?;
        }
        write!(output, "    {book}")?;
    }
    writeln!(output, "\n}}\nGO\n")
}

/// Writes the final part of the MQL file.
pub fn trailer(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "VACUUM DATABASE ANALYZE GO")
}

/// Writes the complete MQL load script for a corpus.
pub fn write_script(output: &mut dyn Write, corpus: &Corpus) -> io::Result<()> {
    header(output)?;

    objects::define_word(output)?;
    objects::define_book(output)?;
    objects::define_chapter(output)?;
    objects::define_verse(output)?;

    emit_objects(output, &corpus.words)?;
    emit_objects(output, &corpus.books)?;
    emit_objects(output, &corpus.chapters)?;
    emit_objects(output, &corpus.verses)?;

    trailer(output)
}
