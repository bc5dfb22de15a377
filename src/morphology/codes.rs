//! The static category registries with their ordered code tables.
//!
//! Rule order within each table is load-bearing: a shorter code must
//! follow any longer code it is a prefix of, e.g. `"N-"` must come after
//! `"N-PRI"`. [`verify_tables`] checks this once at startup.

use anyhow::{Result, anyhow};

use super::categories::{
    Case, Gender, Mood, NounDeclension, NounStem, Number, PartOfSpeech, Person, Suffix, Tense,
    VerbStem, Voice,
};
use super::registry::Registry;

pub static PART_OF_SPEECH: Registry<PartOfSpeech> = Registry::new(
    "psp_t",
    &[
        ("ADV", PartOfSpeech::Adverb),
        ("CONJ", PartOfSpeech::Conjunction),
        ("COND", PartOfSpeech::Cond),
        ("PRT", PartOfSpeech::Particle),
        ("PREP", PartOfSpeech::Preposition),
        ("INJ", PartOfSpeech::Interjection),
        ("ARAM", PartOfSpeech::Aramaic),
        ("HEB", PartOfSpeech::Hebrew),
        ("N-PRI", PartOfSpeech::ProperNounIndeclinable),
        ("A-NUI", PartOfSpeech::NumeralIndeclinable),
        ("N-LI", PartOfSpeech::LetterIndeclinable),
        ("N-OI", PartOfSpeech::NounOtherTypeIndeclinable),
        ("N-", PartOfSpeech::Noun),
        ("A-", PartOfSpeech::Adjective),
        ("R-", PartOfSpeech::RelativePronoun),
        ("C-", PartOfSpeech::ReciprocalPronoun),
        ("D-", PartOfSpeech::DemonstrativePronoun),
        ("T-", PartOfSpeech::Article),
        ("K-", PartOfSpeech::CorrelativePronoun),
        ("I-", PartOfSpeech::InterrogativePronoun),
        ("X-", PartOfSpeech::IndefinitePronoun),
        ("Q-", PartOfSpeech::CorrelativeOrInterrogativePronoun),
        ("F-", PartOfSpeech::ReflexivePronoun),
        ("S-", PartOfSpeech::PossessivePronoun),
        ("P-", PartOfSpeech::PersonalPronoun),
        ("V-", PartOfSpeech::Verb),
    ],
);

pub static CASE: Registry<Case> = Registry::new(
    "case_t",
    &[
        ("N", Case::Nominative),
        ("V", Case::Vocative),
        ("G", Case::Genitive),
        ("D", Case::Dative),
        ("A", Case::Accusative),
    ],
);

pub static NUMBER: Registry<Number> = Registry::new(
    "number_t",
    &[("S", Number::Singular), ("P", Number::Plural)],
);

pub static GENDER: Registry<Gender> = Registry::new(
    "gender_t",
    &[
        ("M", Gender::Masculine),
        ("F", Gender::Feminine),
        ("N", Gender::Neuter),
    ],
);

pub static PERSON: Registry<Person> = Registry::new(
    "person_t",
    &[
        ("1", Person::FirstPerson),
        ("2", Person::SecondPerson),
        ("3", Person::ThirdPerson),
    ],
);

pub static TENSE: Registry<Tense> = Registry::new(
    "tense_t",
    &[
        ("P", Tense::Present),
        ("I", Tense::Imperfect),
        ("F", Tense::Future),
        ("2F", Tense::SecondFuture),
        ("A", Tense::Aorist),
        ("2A", Tense::SecondAorist),
        ("R", Tense::Perfect),
        ("2R", Tense::SecondPerfect),
        ("L", Tense::Pluperfect),
        ("2L", Tense::SecondPluperfect),
    ],
);

pub static VOICE: Registry<Voice> = Registry::new(
    "voice_t",
    &[
        ("A", Voice::Active),
        ("M", Voice::Middle),
        ("P", Voice::Passive),
        ("E", Voice::MiddleOrPassive),
        ("D", Voice::MiddleDeponent),
        ("O", Voice::PassiveDeponent),
        ("N", Voice::MiddleOrPassiveDeponent),
        ("Q", Voice::ImpersonalActive),
    ],
);

pub static MOOD: Registry<Mood> = Registry::new(
    "mood_t",
    &[
        ("I", Mood::Indicative),
        ("S", Mood::Subjunctive),
        ("O", Mood::Optative),
        ("M", Mood::Imperative),
        ("N", Mood::Infinitive),
        ("P", Mood::Participle),
        ("R", Mood::ImperativeParticiple),
    ],
);

// The suffix codes include the introducing '-', so decoding a suffix
// consumes the dash along with the letter(s).
pub static SUFFIX: Registry<Suffix> = Registry::new(
    "suffix_t",
    &[
        ("-S", Suffix::Superlative),
        ("-C", Suffix::Comparative),
        ("-I", Suffix::Interrogative),
        ("-N", Suffix::Negative),
        ("-ATT", Suffix::Attic),
        ("-P", Suffix::ParticleAttached),
        ("-K", Suffix::Crasis),
    ],
);

// The three lexeme classes are never decoded from a form tag; their
// registries exist for labels and schema emission only.
pub static VERB_STEM: Registry<VerbStem> = Registry::new("verb_type_t", &[]);
pub static NOUN_STEM: Registry<NounStem> = Registry::new("noun_stem_t", &[]);
pub static NOUN_DECLENSION: Registry<NounDeclension> = Registry::new("noun_declension_t", &[]);

/// Verifies the rule-ordering invariant of every built-in registry.
/// Called once at startup; the tables never change afterwards.
pub fn verify_tables() -> Result<()> {
    let checks = [
        PART_OF_SPEECH.verify_rule_order(),
        CASE.verify_rule_order(),
        NUMBER.verify_rule_order(),
        GENDER.verify_rule_order(),
        PERSON.verify_rule_order(),
        TENSE.verify_rule_order(),
        VOICE.verify_rule_order(),
        MOOD.verify_rule_order(),
        SUFFIX.verify_rule_order(),
        VERB_STEM.verify_rule_order(),
        NOUN_STEM.verify_rule_order(),
        NOUN_DECLENSION.verify_rule_order(),
    ];

    for check in checks {
        check.map_err(|msg| anyhow!("{msg}"))?;
    }
    Ok(())
}
