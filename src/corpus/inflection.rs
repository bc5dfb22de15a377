//! Inflection class lookup from the verb and noun spreadsheets.
//!
//! The spreadsheets key each lexeme by a single quoted CSV field of the
//! form `"lemma,strongs,unreliable"`. Verb rows carry a stem-class label,
//! noun rows a declension label and a stem label. The labels are the
//! Danish terms used by the spreadsheet authors ("μι-verbum",
//! "α-stamme", "uregelmæssig", ...); a few known misspellings in the data
//! are corrected before translation.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use log::warn;

use crate::models::Word;
use crate::morphology::categories::{NounDeclension, NounStem, PartOfSpeech, VerbStem};

/// Lexeme classes loaded from the spreadsheets. Spreadsheets are
/// optional; a missing table simply leaves the corresponding categories
/// `NA`.
#[derive(Debug, Default)]
pub struct InflectionTables {
    verb_stems: Option<HashMap<String, VerbStem>>,
    nouns: Option<HashMap<String, (NounStem, NounDeclension)>>,
}

impl InflectionTables {
    /// Loads whichever spreadsheets were supplied.
    pub fn load(verbs: Option<&Path>, nouns: Option<&Path>) -> Result<Self> {
        let mut tables = InflectionTables::default();

        if let Some(path) = verbs {
            let file = File::open(path)
                .with_context(|| format!("cannot open verbs file {}", path.display()))?;
            tables.verb_stems = Some(
                read_verbs(file).with_context(|| format!("in {}", path.display()))?,
            );
        }

        if let Some(path) = nouns {
            let file = File::open(path)
                .with_context(|| format!("cannot open nouns file {}", path.display()))?;
            tables.nouns = Some(
                read_nouns(file).with_context(|| format!("in {}", path.display()))?,
            );
        }

        Ok(tables)
    }

    /// Assigns stem and declension classes to every noun and verb. A
    /// lexeme missing from a loaded table is an error in strict mode and
    /// a logged `NA` in lenient mode.
    pub fn apply(&self, words: &mut [Word], lenient: bool) -> Result<()> {
        for word in words.iter_mut() {
            match word.morphology.psp {
                PartOfSpeech::Noun => {
                    let Some(nouns) = &self.nouns else { continue };

                    match nouns.get(&lexeme_key(word)) {
                        Some(&(stem, declension)) => {
                            word.morphology.noun_stem = stem;
                            word.morphology.noun_declension = declension;
                        }
                        None if lenient => {
                            warn!("no noun inflection entry for {:?}", lexeme_key(word));
                        }
                        None => bail!("no noun inflection entry for {:?}", lexeme_key(word)),
                    }
                }

                PartOfSpeech::Verb => {
                    let Some(verb_stems) = &self.verb_stems else { continue };

                    match verb_stems.get(&lexeme_key(word)) {
                        Some(&stem) => word.morphology.verb_stem = stem,
                        None if lenient => {
                            warn!("no verb inflection entry for {:?}", lexeme_key(word));
                        }
                        None => bail!("no verb inflection entry for {:?}", lexeme_key(word)),
                    }
                }

                _ => {}
            }
        }

        Ok(())
    }
}

/// The spreadsheet key of a word's lexeme.
fn lexeme_key(word: &Word) -> String {
    format!(
        "{},{},{}",
        word.lemma, word.strongs, word.strongs_unreliable
    )
}

fn read_verbs(input: impl Read) -> Result<HashMap<String, VerbStem>> {
    let mut reader = csv::Reader::from_reader(input);
    let mut stems = HashMap::new();

    for record in reader.records() {
        let record = record.context("cannot read verb row")?;
        let key = record.get(0).context("missing lexeme column")?;
        let label = record.get(1).context("missing stem column")?;

        let stem = verb_stem_of(fix_spelling(label))
            .with_context(|| format!("problem with verb stem {label:?}"))?;

        if stems.insert(key.to_string(), stem).is_some() {
            bail!("duplicate verb {key:?}");
        }
    }

    Ok(stems)
}

fn read_nouns(input: impl Read) -> Result<HashMap<String, (NounStem, NounDeclension)>> {
    let mut reader = csv::Reader::from_reader(input);
    let mut nouns = HashMap::new();

    for record in reader.records() {
        let record = record.context("cannot read noun row")?;
        let key = record.get(0).context("missing lexeme column")?;
        let declension_label = record.get(1).context("missing declension column")?;
        let stem_label = record.get(2).context("missing stem column")?;

        let declension = noun_declension_of(fix_spelling(declension_label))
            .with_context(|| format!("problem with declension {declension_label:?}"))?;
        let stem = noun_stem_of(fix_spelling(stem_label))
            .with_context(|| format!("problem with noun stem {stem_label:?}"))?;

        if nouns.insert(key.to_string(), (stem, declension)).is_some() {
            bail!("duplicate noun {key:?}");
        }
    }

    Ok(nouns)
}

/// Corrects the known misspellings in the spreadsheet data.
fn fix_spelling(label: &str) -> &str {
    match label {
        "ο-stamm" => "ο-stamme",
        "indeklinalbel" => "indeklinabel",
        "uregelmæssig " => "uregelmæssig",
        other => other,
    }
}

fn verb_stem_of(label: &str) -> Result<VerbStem> {
    let stem = match label {
        "uregelmæssig" => VerbStem::Irregular,
        "α-stamme" => VerbStem::Alpha,
        "β-stamme" => VerbStem::Beta,
        "γ-stamme" => VerbStem::Gamma,
        "δ-stamme" => VerbStem::Delta,
        "ε-stamme" => VerbStem::Epsilon,
        "ευ-stamme" => VerbStem::EpsilonUpsilon,
        "ζ-stamme" => VerbStem::Zeta,
        "η-stamme" => VerbStem::Eta,
        "θ-stamme" => VerbStem::Theta,
        "ι-stamme" => VerbStem::Iota,
        "κ-stamme" => VerbStem::Kappa,
        "λ-stamme" => VerbStem::Lambda,
        "μ-stamme" => VerbStem::Mu,
        "μι-verbum" => VerbStem::MuIota,
        "ν-stamme" => VerbStem::Nu,
        "ο-stamme" => VerbStem::Omicron,
        "π-stamme" => VerbStem::Pi,
        "ρ-stamme" => VerbStem::Rho,
        "σκ-verbum" => VerbStem::SigmaKappa,
        "τ-stamme" => VerbStem::Tau,
        "υ-stamme" => VerbStem::Upsilon,
        "φ-stamme" => VerbStem::Phi,
        "χ-stamme" => VerbStem::Khi,
        other => return Err(anyhow!("unknown verb stem label {other:?}")),
    };
    Ok(stem)
}

fn noun_stem_of(label: &str) -> Result<NounStem> {
    let stem = match label {
        "indeklinabel" => NounStem::Indeclinable,
        "uregelmæssig" => NounStem::Irregular,
        "α-stamme" => NounStem::Alpha,
        "β-stamme" => NounStem::Beta,
        "γ-stamme" => NounStem::Gamma,
        "δ-stamme" => NounStem::Delta,
        "ευ-stamme" => NounStem::EpsilonUpsilon,
        "ι-stamme" => NounStem::Iota,
        "κ-stamme" => NounStem::Kappa,
        "κτ-stamme" => NounStem::KappaTau,
        "ν-stamme" => NounStem::Nu,
        "ντ-stamme" => NounStem::NuTau,
        "ο-stamme" => NounStem::Omicron,
        "ου-stamme" => NounStem::OmicronUpsilon,
        "π-stamme" => NounStem::Pi,
        "ρ-stamme" => NounStem::Rho,
        "ς-stamme" => NounStem::Sigma,
        "τ-stamme" => NounStem::Tau,
        "υ-stamme" => NounStem::Upsilon,
        "χ-stamme" => NounStem::Khi,
        "ω-stamme" => NounStem::Omega,
        other => return Err(anyhow!("unknown noun stem label {other:?}")),
    };
    Ok(stem)
}

fn noun_declension_of(label: &str) -> Result<NounDeclension> {
    let declension = match label {
        "1. (-η)" => NounDeclension::FirstEta,
        "1. (-ᾰ)" => NounDeclension::FirstAlphaBreve,
        "1. (-ᾱ)" => NounDeclension::FirstAlphaMacron,
        "1. (-ᾱ; dorisk genitiv)" => NounDeclension::FirstAlphaMacronDoric,
        "2." => NounDeclension::SecondD,
        "2. (attisk)" => NounDeclension::SecondAttic,
        "3." => NounDeclension::ThirdD,
        "indeklinabel" => NounDeclension::Indeclinable,
        "uregelmæssig" => NounDeclension::Irregular,
        other => return Err(anyhow!("unknown declension label {other:?}")),
    };
    Ok(declension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::decode_tag;

    fn verb_word(lemma: &str, strongs: i32) -> Word {
        Word {
            monad: 1,
            reference: "Matt 1:2".to_string(),
            surface: lemma.to_string(),
            functional_tag: "V-AAI-3S".to_string(),
            form_tag: "V-AAI-3S".to_string(),
            strongs,
            strongs_unreliable: false,
            lemma: lemma.to_string(),
            normalized: lemma.to_string(),
            morphology: decode_tag("V-AAI-3S").unwrap(),
            lexeme_occurrences: 0,
            frequency_rank: 0,
        }
    }

    #[test]
    fn loads_verb_stems_with_quoted_keys() {
        let csv = "lexeme,stem\n\"γεννάω,1080,false\",α-stamme\n\"εἰμί,1510,false\",μι-verbum\n";
        let stems = read_verbs(csv.as_bytes()).unwrap();

        assert_eq!(stems["γεννάω,1080,false"], VerbStem::Alpha);
        assert_eq!(stems["εἰμί,1510,false"], VerbStem::MuIota);
    }

    #[test]
    fn loads_noun_stems_and_declensions() {
        let csv = "lexeme,declension,stem\n\"βίβλος,976,false\",2.,ο-stamm\n";
        let nouns = read_nouns(csv.as_bytes()).unwrap();

        // "ο-stamm" is one of the known misspellings.
        assert_eq!(
            nouns["βίβλος,976,false"],
            (NounStem::Omicron, NounDeclension::SecondD)
        );
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let csv = "lexeme,stem\n\"a,1,false\",α-stamme\n\"a,1,false\",β-stamme\n";
        assert!(read_verbs(csv.as_bytes()).is_err());
    }

    #[test]
    fn unknown_labels_are_rejected() {
        let csv = "lexeme,stem\n\"a,1,false\",ψ-stamme\n";
        assert!(read_verbs(csv.as_bytes()).is_err());
    }

    #[test]
    fn apply_fills_verb_stems() {
        let csv = "lexeme,stem\n\"γεννάω,1080,false\",α-stamme\n";
        let tables = InflectionTables {
            verb_stems: Some(read_verbs(csv.as_bytes()).unwrap()),
            nouns: None,
        };

        let mut words = vec![verb_word("γεννάω", 1080)];
        tables.apply(&mut words, false).unwrap();
        assert_eq!(words[0].morphology.verb_stem, VerbStem::Alpha);
    }

    #[test]
    fn apply_strictness_on_missing_lexeme() {
        let csv = "lexeme,stem\n\"γεννάω,1080,false\",α-stamme\n";
        let tables = InflectionTables {
            verb_stems: Some(read_verbs(csv.as_bytes()).unwrap()),
            nouns: None,
        };

        let mut words = vec![verb_word("λύω", 3089)];
        assert!(tables.apply(&mut words, false).is_err());

        tables.apply(&mut words, true).unwrap();
        assert_eq!(words[0].morphology.verb_stem, VerbStem::NA);
    }

    #[test]
    fn missing_tables_leave_classes_na() {
        let tables = InflectionTables::default();
        let mut words = vec![verb_word("λύω", 3089)];
        tables.apply(&mut words, false).unwrap();
        assert_eq!(words[0].morphology.verb_stem, VerbStem::NA);
    }
}
