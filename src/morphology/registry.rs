//! One registry per grammatical category: the category's MQL name, its
//! canonical labels, and the ordered code rules used for decoding.
//!
//! Decoding is a first-match-wins scan over the rule list. The list order
//! is load-bearing: a code that is a leading substring of another code
//! (`"N-"` vs `"N-PRI"`) must come after it, or the longer code becomes
//! unreachable. The ordering is a static property of the tables in
//! [`super::codes`], verified once at startup rather than per decode.

use std::fmt;
use std::io::{self, Write};

use strum::IntoEnumIterator;

use super::cursor::TagCursor;
use super::error::DecodeError;

/// Bound for types usable as a grammatical category: a closed `Copy` enum
/// whose `Display` impl yields the canonical MQL label and whose iterator
/// walks variants in ordinal (declaration) order.
pub trait Category: Copy + Eq + Default + fmt::Display + IntoEnumIterator + 'static {}

impl<T> Category for T where T: Copy + Eq + Default + fmt::Display + IntoEnumIterator + 'static {}

/// Metadata and decode rules for one category enumeration.
///
/// Registries are built once as statics and never mutated, so they can be
/// shared freely across parallel decodes.
pub struct Registry<T: Category> {
    name: &'static str,
    rules: &'static [(&'static str, T)],
}

impl<T: Category> Registry<T> {
    pub const fn new(name: &'static str, rules: &'static [(&'static str, T)]) -> Self {
        Registry { name, rules }
    }

    /// The MQL name of the enumeration (e.g. `"psp_t"`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The canonical display label of a value. Total over the closed
    /// value set; `NA` maps to `"NA"`.
    pub fn label_of(&self, value: T) -> String {
        value.to_string()
    }

    /// Decodes the next code from the cursor: the first rule whose code
    /// is a prefix of the remainder wins and is consumed. Failing to
    /// match any rule is a hard error, not a recoverable default.
    pub fn decode(&self, cursor: &mut TagCursor) -> Result<T, DecodeError> {
        for (code, value) in self.rules {
            if cursor.starts_with(code) {
                cursor.strip(code.len());
                return Ok(*value);
            }
        }

        Err(DecodeError::UnrecognizedCode {
            registry: self.name,
            tag: cursor.full_tag().to_string(),
            position: cursor.position(),
            rest: cursor.rest().to_string(),
        })
    }

    /// Writes the `CREATE ENUMERATION` declaration for this category,
    /// values in ordinal order with `NA` first. The order is part of the
    /// emitted schema contract and must be reproducible between runs.
    pub fn emit_enumeration(&self, output: &mut dyn Write) -> io::Result<()> {
        writeln!(output, "CREATE ENUMERATION {} = {{", self.name)?;

        let mut first = true;
        for value in T::iter() {
            if first {
                first = false;
            } else {
                writeln!(output, ",")?;
            }
            write!(output, "    {value}")?;
        }

        writeln!(output, "\n}}\nGO")
    }

    /// Checks the ordering invariant of the rule list: no rule may be
    /// preceded by a rule whose code is a prefix of its own, since the
    /// earlier rule would always win.
    pub fn verify_rule_order(&self) -> Result<(), String> {
        for (i, (earlier, _)) in self.rules.iter().enumerate() {
            for (later, _) in &self.rules[i + 1..] {
                if later.starts_with(earlier) {
                    return Err(format!(
                        "registry {}: code {:?} is unreachable because {:?} precedes it",
                        self.name, later, earlier
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::categories::Tense;

    static TENSE_TEST: Registry<Tense> = Registry::new(
        "tense_t",
        &[("2A", Tense::SecondAorist), ("A", Tense::Aorist)],
    );

    static BROKEN: Registry<Tense> = Registry::new(
        "tense_t",
        &[("A", Tense::Aorist), ("2A", Tense::SecondAorist), ("AX", Tense::Present)],
    );

    #[test]
    fn first_match_wins_and_consumes() {
        let mut cursor = TagCursor::new("2AAI");
        assert_eq!(TENSE_TEST.decode(&mut cursor), Ok(Tense::SecondAorist));
        assert_eq!(cursor.rest(), "AI");

        assert_eq!(TENSE_TEST.decode(&mut cursor), Ok(Tense::Aorist));
        assert_eq!(cursor.rest(), "I");
    }

    #[test]
    fn unmatched_code_reports_registry_and_offset() {
        let mut cursor = TagCursor::new("2AZZ");
        TENSE_TEST.decode(&mut cursor).unwrap();

        let err = TENSE_TEST.decode(&mut cursor).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnrecognizedCode {
                registry: "tense_t",
                tag: "2AZZ".to_string(),
                position: 2,
                rest: "ZZ".to_string(),
            }
        );
    }

    #[test]
    fn rule_order_verification_flags_shadowed_codes() {
        assert!(TENSE_TEST.verify_rule_order().is_ok());

        let err = BROKEN.verify_rule_order().unwrap_err();
        assert!(err.contains("\"AX\""), "unexpected message: {err}");
    }

    #[test]
    fn enumeration_emission_is_ordinal_ordered() {
        let mut buf = Vec::new();
        TENSE_TEST.emit_enumeration(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("CREATE ENUMERATION tense_t = {\n    NA,\n    present,\n"));
        assert!(text.ends_with("    second_pluperfect\n}\nGO\n"));
    }
}
