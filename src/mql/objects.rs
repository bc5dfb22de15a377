//! MQL object emission for the four corpus object types.

use std::io::{self, Write};

use crate::models::{Book, Chapter, Verse, Word};
use crate::morphology::codes;
use crate::text;

use super::emitter::{FeatureDef, MqlObject, define_object_type};

static WORD_FEATURES: &[FeatureDef] = &[
    FeatureDef::from_set("ref", "string"),
    FeatureDef::from_set("surface", "string"),
    FeatureDef::from_set("functional_tag", "string"),
    FeatureDef::from_set("form_tag", "string"),
    FeatureDef::new("strongs", "integer"),
    FeatureDef::with_default("strongs_unreliable", "boolean_t", "false"),
    FeatureDef::indexed("lemma", "string"),
    FeatureDef::indexed("raw_lemma", "string"),
    FeatureDef::indexed("normalized", "string"),
    FeatureDef::indexed("raw_normalized", "string"),
    FeatureDef::with_default("psp", "psp_t", "NA"),
    FeatureDef::with_default("case", "case_t", "NA"),
    FeatureDef::with_default("number", "number_t", "NA"),
    FeatureDef::with_default("possessor_number", "number_t", "NA"),
    FeatureDef::with_default("gender", "gender_t", "NA"),
    FeatureDef::with_default("person", "person_t", "NA"),
    FeatureDef::with_default("tense", "tense_t", "NA"),
    FeatureDef::with_default("voice", "voice_t", "NA"),
    FeatureDef::with_default("mood", "mood_t", "NA"),
    FeatureDef::with_default("suffix", "suffix_t", "NA"),
    FeatureDef::with_default("verb_type", "verb_type_t", "NA"),
    FeatureDef::with_default("noun_stem", "noun_stem_t", "NA"),
    FeatureDef::with_default("noun_declension", "noun_declension_t", "NA"),
    FeatureDef::with_default("frequency_rank", "integer", "99999"),
    FeatureDef::with_default("lexeme_occurrences", "integer", "0"),
    FeatureDef::with_default("monad_num", "integer", "0"),
];

/// Writes the word object type definition, preceded by the twelve
/// morphology enumerations its features refer to.
pub fn define_word(output: &mut dyn Write) -> io::Result<()> {
    codes::PART_OF_SPEECH.emit_enumeration(output)?;
    codes::CASE.emit_enumeration(output)?;
    codes::NUMBER.emit_enumeration(output)?;
    codes::GENDER.emit_enumeration(output)?;
    codes::PERSON.emit_enumeration(output)?;
    codes::TENSE.emit_enumeration(output)?;
    codes::VOICE.emit_enumeration(output)?;
    codes::MOOD.emit_enumeration(output)?;
    codes::SUFFIX.emit_enumeration(output)?;
    codes::VERB_STEM.emit_enumeration(output)?;
    codes::NOUN_STEM.emit_enumeration(output)?;
    codes::NOUN_DECLENSION.emit_enumeration(output)?;

    define_object_type(output, Word::OBJECT_TYPE, true, WORD_FEATURES)
}

pub fn define_book(output: &mut dyn Write) -> io::Result<()> {
    let features = [FeatureDef::with_default("book", "book_name_t", "Matthew")];
    define_object_type(output, Book::OBJECT_TYPE, false, &features)
}

pub fn define_chapter(output: &mut dyn Write) -> io::Result<()> {
    let features = [
        FeatureDef::with_default("book", "book_name_t", "Matthew"),
        FeatureDef::with_default("chapter", "integer", "0"),
    ];
    define_object_type(output, Chapter::OBJECT_TYPE, false, &features)
}

pub fn define_verse(output: &mut dyn Write) -> io::Result<()> {
    let features = [
        FeatureDef::with_default("book", "book_name_t", "Matthew"),
        FeatureDef::with_default("chapter", "integer", "0"),
        FeatureDef::with_default("verse", "integer", "0"),
    ];
    define_object_type(output, Verse::OBJECT_TYPE, false, &features)
}

impl MqlObject for Word {
    const OBJECT_TYPE: &'static str = "word";

    fn emit_object(&self, output: &mut dyn Write) -> io::Result<()> {
        let m = &self.morphology;

        writeln!(output, "CREATE OBJECT")?;
        writeln!(output, "FROM MONADS= {{ {} }}", self.monad)?;
        writeln!(output, "[")?;
        writeln!(output, "    ref := \"{}\";", self.reference)?;
        writeln!(output, "    surface := \"{}\";", self.surface)?;
        writeln!(output, "    functional_tag := \"{}\";", self.functional_tag)?;
        writeln!(output, "    form_tag := \"{}\";", self.form_tag)?;
        writeln!(output, "    strongs := {};", self.strongs)?;
        writeln!(output, "    strongs_unreliable := {};", self.strongs_unreliable)?;
        writeln!(output, "    lemma := \"{}\";", self.lemma)?;
        writeln!(output, "    raw_lemma := \"{}\";", text::strip(&self.lemma))?;
        writeln!(output, "    normalized := \"{}\";", self.normalized)?;
        writeln!(output, "    raw_normalized := \"{}\";", text::strip(&self.normalized))?;
        writeln!(output, "    psp := {};", m.psp)?;
        writeln!(output, "    case := {};", m.case)?;
        writeln!(output, "    number := {};", m.number)?;
        writeln!(output, "    possessor_number := {};", m.possessor_number)?;
        writeln!(output, "    gender := {};", m.gender)?;
        writeln!(output, "    person := {};", m.person)?;
        writeln!(output, "    tense := {};", m.tense)?;
        writeln!(output, "    voice := {};", m.voice)?;
        writeln!(output, "    mood := {};", m.mood)?;
        writeln!(output, "    suffix := {};", m.suffix)?;
        writeln!(output, "    verb_type := {};", m.verb_stem)?;
        writeln!(output, "    noun_stem := {};", m.noun_stem)?;
        writeln!(output, "    noun_declension := {};", m.noun_declension)?;
        writeln!(output, "    frequency_rank := {};", self.frequency_rank)?;
        writeln!(output, "    lexeme_occurrences := {};", self.lexeme_occurrences)?;
        writeln!(output, "    monad_num := {};", self.monad)?;
        writeln!(output, "]")
    }
}

impl MqlObject for Book {
    const OBJECT_TYPE: &'static str = "book";

    fn emit_object(&self, output: &mut dyn Write) -> io::Result<()> {
        writeln!(output, "CREATE OBJECT")?;
        writeln!(
            output,
            "FROM MONADS= {{ {}-{} }}",
            self.range.first(),
            self.range.last()
        )?;
        writeln!(output, "[")?;
        writeln!(output, "    book := {};", self.book)?;
        writeln!(output, "]")
    }
}

impl MqlObject for Chapter {
    const OBJECT_TYPE: &'static str = "chapter";

    fn emit_object(&self, output: &mut dyn Write) -> io::Result<()> {
        writeln!(output, "CREATE OBJECT")?;
        writeln!(
            output,
            "FROM MONADS= {{ {}-{} }}",
            self.range.first(),
            self.range.last()
        )?;
        writeln!(output, "[")?;
        writeln!(output, "    book := {};", self.book)?;
        writeln!(output, "    chapter := {};", self.chapter)?;
        writeln!(output, "]")
    }
}

impl MqlObject for Verse {
    const OBJECT_TYPE: &'static str = "verse";

    fn emit_object(&self, output: &mut dyn Write) -> io::Result<()> {
        writeln!(output, "CREATE OBJECT")?;
        writeln!(
            output,
            "FROM MONADS= {{ {}-{} }}",
            self.range.first(),
            self.range.last()
        )?;
        writeln!(output, "[")?;
        writeln!(output, "    book := {};", self.book)?;
        writeln!(output, "    chapter := {};", self.chapter)?;
        writeln!(output, "    verse := {};", self.verse)?;
        writeln!(output, "]")
    }
}
