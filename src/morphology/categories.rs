//! The closed grammatical category enumerations.
//!
//! Each enumeration mirrors one MQL enumeration type in the generated
//! database schema. The first variant is always `NA` ("not applicable"),
//! which is the default for categories a part of speech does not carry.
//! Variant order is the ordinal order of the emitted MQL enumeration, so
//! it must not be rearranged.
//!
//! The `strum` `Display` impl provides the canonical MQL label for each
//! value (`FirstPerson` → `first_person`); `EnumIter` walks variants in
//! declaration order for schema emission.

use strum::{Display, EnumIter};

/// Part of speech, decoded from the leading characters of a form tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum PartOfSpeech {
    #[default]
    #[strum(serialize = "NA")]
    NA,
    Adverb,      // ADV
    Conjunction, // CONJ
    Cond,        // COND (conditional particle)
    Particle,    // PRT
    Preposition, // PREP
    Interjection, // INJ
    Aramaic,     // ARAM (Aramaic transliteration)
    Hebrew,      // HEB (Hebrew transliteration)
    ProperNounIndeclinable,    // N-PRI
    NumeralIndeclinable,       // A-NUI
    LetterIndeclinable,        // N-LI
    NounOtherTypeIndeclinable, // N-OI
    Noun,                      // N-
    Adjective,                 // A-
    RelativePronoun,           // R-
    ReciprocalPronoun,         // C-
    DemonstrativePronoun,      // D-
    Article,                   // T-
    CorrelativePronoun,        // K-
    InterrogativePronoun,      // I-
    IndefinitePronoun,         // X-
    CorrelativeOrInterrogativePronoun, // Q-
    ReflexivePronoun,          // F-
    PossessivePronoun,         // S-
    PersonalPronoun,           // P-
    Verb,                      // V-
}

/// Grammatical case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Case {
    #[default]
    #[strum(serialize = "NA")]
    NA,
    Nominative, // N
    Vocative,   // V
    Genitive,   // G
    Dative,     // D
    Accusative, // A
}

/// Grammatical number. Also used for the possessor number of possessive
/// pronouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Number {
    #[default]
    #[strum(serialize = "NA")]
    NA,
    Singular, // S
    Plural,   // P
}

/// Grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Gender {
    #[default]
    #[strum(serialize = "NA")]
    NA,
    Masculine, // M
    Feminine,  // F
    Neuter,    // N
}

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Person {
    #[default]
    #[strum(serialize = "NA")]
    NA,
    FirstPerson,  // 1
    SecondPerson, // 2
    ThirdPerson,  // 3
}

/// Verb tense. The "second" variants are the second (strong) forms of the
/// corresponding tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Tense {
    #[default]
    #[strum(serialize = "NA")]
    NA,
    Present,          // P
    Imperfect,        // I
    Future,           // F
    SecondFuture,     // 2F
    Aorist,           // A
    SecondAorist,     // 2A
    Perfect,          // R
    SecondPerfect,    // 2R
    Pluperfect,       // L
    SecondPluperfect, // 2L
}

/// Verb voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Voice {
    #[default]
    #[strum(serialize = "NA")]
    NA,
    Active,                  // A
    Middle,                  // M
    Passive,                 // P
    MiddleOrPassive,         // E
    MiddleDeponent,          // D
    PassiveDeponent,         // O
    MiddleOrPassiveDeponent, // N
    ImpersonalActive,        // Q
}

/// Verb mood. The mood selects how the rest of a verb tag is decoded:
/// finite moods carry person and number, participles carry case, number
/// and gender, infinitives carry nothing further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Mood {
    #[default]
    #[strum(serialize = "NA")]
    NA,
    Indicative,  // I
    Subjunctive, // S
    Optative,    // O
    Imperative,  // M
    Infinitive,  // N
    Participle,  // P
    ImperativeParticiple, // R
}

/// Optional tag suffix, always introduced by a `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Suffix {
    #[default]
    #[strum(serialize = "NA")]
    NA,
    Superlative,      // -S
    Comparative,      // -C
    Interrogative,    // -I
    Negative,         // -N
    Attic,            // -ATT
    ParticleAttached, // -P
    Crasis,           // -K
}

/// Verb stem class. Not encoded in the form tag; looked up per lexeme in
/// the verb inflection spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum VerbStem {
    #[default]
    #[strum(serialize = "NA")]
    NA,
    Irregular,
    Alpha,
    Beta,
    Gamma,
    Delta,
    Epsilon,
    EpsilonUpsilon,
    Zeta,
    Eta,
    Theta,
    Iota,
    Kappa,
    Lambda,
    Mu,
    MuIota,
    Nu,
    Omicron,
    Pi,
    Rho,
    SigmaKappa,
    Tau,
    Upsilon,
    Phi,
    Khi,
}

/// Noun stem class. Looked up per lexeme in the noun inflection
/// spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum NounStem {
    #[default]
    #[strum(serialize = "NA")]
    NA,
    Indeclinable,
    Irregular,
    Alpha,
    Beta,
    Gamma,
    Delta,
    EpsilonUpsilon,
    Iota,
    Kappa,
    KappaTau,
    Nu,
    NuTau,
    Omicron,
    OmicronUpsilon,
    Pi,
    Rho,
    Sigma,
    Tau,
    Upsilon,
    Khi,
    Omega,
}

/// Noun declension class. Looked up per lexeme in the noun inflection
/// spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum NounDeclension {
    #[default]
    #[strum(serialize = "NA")]
    NA,
    FirstEta,
    FirstAlphaBreve,
    FirstAlphaMacron,
    FirstAlphaMacronDoric,
    SecondD,
    SecondAttic,
    ThirdD,
    Indeclinable,
    Irregular,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn na_is_first_and_default_everywhere() {
        assert_eq!(PartOfSpeech::iter().next(), Some(PartOfSpeech::NA));
        assert_eq!(Case::iter().next(), Some(Case::NA));
        assert_eq!(Number::iter().next(), Some(Number::NA));
        assert_eq!(Gender::iter().next(), Some(Gender::NA));
        assert_eq!(Person::iter().next(), Some(Person::NA));
        assert_eq!(Tense::iter().next(), Some(Tense::NA));
        assert_eq!(Voice::iter().next(), Some(Voice::NA));
        assert_eq!(Mood::iter().next(), Some(Mood::NA));
        assert_eq!(Suffix::iter().next(), Some(Suffix::NA));
        assert_eq!(VerbStem::iter().next(), Some(VerbStem::NA));
        assert_eq!(NounStem::iter().next(), Some(NounStem::NA));
        assert_eq!(NounDeclension::iter().next(), Some(NounDeclension::NA));

        assert_eq!(PartOfSpeech::default(), PartOfSpeech::NA);
        assert_eq!(Mood::default(), Mood::NA);
    }

    #[test]
    fn labels_are_snake_case_with_na_exception() {
        assert_eq!(PartOfSpeech::NA.to_string(), "NA");
        assert_eq!(
            PartOfSpeech::CorrelativeOrInterrogativePronoun.to_string(),
            "correlative_or_interrogative_pronoun"
        );
        assert_eq!(Person::FirstPerson.to_string(), "first_person");
        assert_eq!(Tense::SecondPluperfect.to_string(), "second_pluperfect");
        assert_eq!(
            Voice::MiddleOrPassiveDeponent.to_string(),
            "middle_or_passive_deponent"
        );
        assert_eq!(Mood::ImperativeParticiple.to_string(), "imperative_participle");
        assert_eq!(Suffix::ParticleAttached.to_string(), "particle_attached");
        assert_eq!(VerbStem::MuIota.to_string(), "mu_iota");
        assert_eq!(NounStem::OmicronUpsilon.to_string(), "omicron_upsilon");
        assert_eq!(NounDeclension::FirstAlphaMacronDoric.to_string(), "first_alpha_macron_doric");
        assert_eq!(NounDeclension::SecondD.to_string(), "second_d");
    }
}
