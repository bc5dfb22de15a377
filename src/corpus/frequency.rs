//! Lexeme occurrence counts and frequency ranks.
//!
//! Lexemes are identified by (lemma, Strong's number, unreliable flag).
//! Ranks are competition-style: lexemes with equal frequency share the
//! rank of the first of them, and the rank counter keeps advancing, so a
//! tie produces a sequence like 1, 2, 2, 4.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::models::Word;

type LexemeKey = (String, i32, bool);

/// Fills in `lexeme_occurrences` and `frequency_rank` for every word.
pub fn assign_frequency(words: &mut [Word]) {
    let mut counts: HashMap<LexemeKey, u32> = HashMap::new();
    for word in words.iter() {
        *counts.entry(lexeme_key(word)).or_default() += 1;
    }

    // Sort by descending frequency; ties are ordered by key so ranks are
    // reproducible between runs.
    let mut by_frequency: Vec<(&LexemeKey, u32)> =
        counts.iter().map(|(key, &count)| (key, count)).collect();
    by_frequency.sort_by(|a, b| (Reverse(a.1), a.0).cmp(&(Reverse(b.1), b.0)));

    let mut ranks: HashMap<&LexemeKey, u32> = HashMap::with_capacity(by_frequency.len());
    let mut last_frequency = 0;
    let mut last_rank = 0;

    for (position, &(key, frequency)) in by_frequency.iter().enumerate() {
        let rank = position as u32 + 1;
        if frequency == last_frequency {
            ranks.insert(key, last_rank);
        } else {
            ranks.insert(key, rank);
            last_frequency = frequency;
            last_rank = rank;
        }
    }

    for word in words.iter_mut() {
        let key = lexeme_key(word);
        word.lexeme_occurrences = counts[&key];
        word.frequency_rank = ranks[&key];
    }
}

fn lexeme_key(word: &Word) -> LexemeKey {
    (word.lemma.clone(), word.strongs, word.strongs_unreliable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::Morphology;

    fn word(lemma: &str, strongs: i32) -> Word {
        Word {
            monad: 0,
            reference: "Matt 1:1".to_string(),
            surface: lemma.to_string(),
            functional_tag: "ADV".to_string(),
            form_tag: "ADV".to_string(),
            strongs,
            strongs_unreliable: false,
            lemma: lemma.to_string(),
            normalized: lemma.to_string(),
            morphology: Morphology::default(),
            lexeme_occurrences: 0,
            frequency_rank: 0,
        }
    }

    #[test]
    fn counts_and_competition_ranks() {
        // a: 3 occurrences, b and c: 2 each, d: 1.
        let mut words = vec![
            word("a", 1),
            word("a", 1),
            word("a", 1),
            word("b", 2),
            word("b", 2),
            word("c", 3),
            word("c", 3),
            word("d", 4),
        ];

        assign_frequency(&mut words);

        assert_eq!(words[0].lexeme_occurrences, 3);
        assert_eq!(words[0].frequency_rank, 1);

        let rank_b = words[3].frequency_rank;
        let rank_c = words[5].frequency_rank;
        assert_eq!(rank_b, 2);
        assert_eq!(rank_c, 2);

        assert_eq!(words[7].lexeme_occurrences, 1);
        assert_eq!(words[7].frequency_rank, 4);
    }

    #[test]
    fn same_lemma_with_different_strongs_is_a_different_lexeme() {
        let mut words = vec![word("a", 1), word("a", 2)];
        assign_frequency(&mut words);
        assert_eq!(words[0].lexeme_occurrences, 1);
        assert_eq!(words[1].lexeme_occurrences, 1);
    }
}
