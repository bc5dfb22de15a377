//! The part-of-speech decoding grammar.
//!
//! Once the part of speech has been stripped from the front of a tag, it
//! selects which categories follow and in what order. Pronoun kinds each
//! have their own sequence (personal pronouns branch on whether a person
//! digit is present); verbs decode tense, voice and mood, then dispatch
//! on the mood for the rest. Most branches end with an optional suffix,
//! recognized by a leading `-` left on the cursor.
//!
//! A branch that completes without exhausting the cursor is a corruption
//! signal, reported as [`DecodeError::TrailingData`].

use super::categories::{
    Case, Gender, Mood, NounDeclension, NounStem, Number, PartOfSpeech, Person, Suffix, Tense,
    VerbStem, Voice,
};
use super::codes;
use super::cursor::TagCursor;
use super::error::DecodeError;

/// The decoded morphology of a single word, one value per category.
/// Categories the part of speech does not carry stay `NA`. Built once
/// from a form tag and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Morphology {
    pub psp: PartOfSpeech,
    pub case: Case,
    pub number: Number,
    pub possessor_number: Number,
    pub gender: Gender,
    pub person: Person,
    pub tense: Tense,
    pub voice: Voice,
    pub mood: Mood,
    pub suffix: Suffix,
    pub verb_stem: VerbStem,
    pub noun_stem: NounStem,
    pub noun_declension: NounDeclension,
}

/// Decodes a complete morphology tag such as `"V-PAI-3S"` or `"N-NSM"`.
///
/// The lexeme classes (`verb_stem`, `noun_stem`, `noun_declension`) are
/// not encoded in the tag and stay `NA`; they are filled in later from
/// the inflection spreadsheets.
pub fn decode_tag(tag: &str) -> Result<Morphology, DecodeError> {
    let mut cursor = TagCursor::new(tag);

    let psp = codes::PART_OF_SPEECH.decode(&mut cursor)?;
    let mut morph = Morphology {
        psp,
        ..Morphology::default()
    };

    match psp {
        PartOfSpeech::PersonalPronoun => {
            if matches!(cursor.peek_first(), Some('1') | Some('2')) {
                // Person specified, gender unspecified
                morph.person = codes::PERSON.decode(&mut cursor)?;
                morph.case = codes::CASE.decode(&mut cursor)?;
                morph.number = codes::NUMBER.decode(&mut cursor)?;
            } else {
                // 3rd person assumed, gender specified
                morph.person = Person::ThirdPerson;
                morph.case = codes::CASE.decode(&mut cursor)?;
                morph.number = codes::NUMBER.decode(&mut cursor)?;
                morph.gender = codes::GENDER.decode(&mut cursor)?;
            }

            morph.suffix = decode_suffix_if_present(&mut cursor)?;
        }

        PartOfSpeech::PossessivePronoun => {
            morph.person = codes::PERSON.decode(&mut cursor)?;
            morph.possessor_number = codes::NUMBER.decode(&mut cursor)?;
            morph.case = codes::CASE.decode(&mut cursor)?;
            morph.number = codes::NUMBER.decode(&mut cursor)?;
            morph.gender = codes::GENDER.decode(&mut cursor)?;
        }

        PartOfSpeech::ReflexivePronoun => {
            morph.person = codes::PERSON.decode(&mut cursor)?;
            morph.case = codes::CASE.decode(&mut cursor)?;
            morph.number = codes::NUMBER.decode(&mut cursor)?;
            morph.gender = codes::GENDER.decode(&mut cursor)?;
        }

        PartOfSpeech::Noun
        | PartOfSpeech::Adjective
        | PartOfSpeech::Article
        | PartOfSpeech::ReciprocalPronoun
        | PartOfSpeech::DemonstrativePronoun
        | PartOfSpeech::CorrelativePronoun
        | PartOfSpeech::InterrogativePronoun
        | PartOfSpeech::RelativePronoun
        | PartOfSpeech::CorrelativeOrInterrogativePronoun
        | PartOfSpeech::IndefinitePronoun => {
            morph.case = codes::CASE.decode(&mut cursor)?;
            morph.number = codes::NUMBER.decode(&mut cursor)?;
            morph.gender = codes::GENDER.decode(&mut cursor)?;

            morph.suffix = decode_suffix_if_present(&mut cursor)?;
        }

        PartOfSpeech::Verb => {
            morph.tense = codes::TENSE.decode(&mut cursor)?;
            morph.voice = codes::VOICE.decode(&mut cursor)?;
            morph.mood = codes::MOOD.decode(&mut cursor)?;

            match morph.mood {
                Mood::Indicative | Mood::Subjunctive | Mood::Optative | Mood::Imperative => {
                    require_dash(&mut cursor, morph.mood)?;
                    morph.person = codes::PERSON.decode(&mut cursor)?;
                    morph.number = codes::NUMBER.decode(&mut cursor)?;
                }

                Mood::Infinitive => {}

                Mood::Participle | Mood::ImperativeParticiple => {
                    require_dash(&mut cursor, morph.mood)?;
                    morph.case = codes::CASE.decode(&mut cursor)?;
                    morph.number = codes::NUMBER.decode(&mut cursor)?;
                    morph.gender = codes::GENDER.decode(&mut cursor)?;
                }

                // The mood registry has no rule producing NA; nothing
                // further to decode if it ever appears.
                Mood::NA => {}
            }

            morph.suffix = decode_suffix_if_present(&mut cursor)?;
        }

        PartOfSpeech::Conjunction
        | PartOfSpeech::Cond
        | PartOfSpeech::Adverb
        | PartOfSpeech::Particle
        | PartOfSpeech::Preposition
        | PartOfSpeech::Interjection
        | PartOfSpeech::Aramaic
        | PartOfSpeech::Hebrew
        | PartOfSpeech::ProperNounIndeclinable
        | PartOfSpeech::NumeralIndeclinable
        | PartOfSpeech::LetterIndeclinable
        | PartOfSpeech::NounOtherTypeIndeclinable
        | PartOfSpeech::NA => {
            morph.suffix = decode_suffix_if_present(&mut cursor)?;
        }
    }

    if !cursor.is_exhausted() {
        return Err(DecodeError::TrailingData {
            psp,
            tag: tag.to_string(),
            leftover: cursor.rest().to_string(),
        });
    }

    Ok(morph)
}

/// Decodes a trailing suffix if the cursor holds one (a leading `-`);
/// the suffix codes themselves include the dash. Leaves the cursor alone
/// otherwise.
fn decode_suffix_if_present(cursor: &mut TagCursor) -> Result<Suffix, DecodeError> {
    if cursor.peek_first() == Some('-') {
        codes::SUFFIX.decode(cursor)
    } else {
        Ok(Suffix::NA)
    }
}

/// The finite and participle verb moods continue after a mandatory `-`.
fn require_dash(cursor: &mut TagCursor, mood: Mood) -> Result<(), DecodeError> {
    if cursor.starts_with("-") {
        cursor.strip(1);
        Ok(())
    } else {
        Err(DecodeError::MissingDelimiter {
            mood,
            tag: cursor.full_tag().to_string(),
            rest: cursor.rest().to_string(),
        })
    }
}
