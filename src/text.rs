//! Greek text normalization helpers.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Punctuation removed by [`strip`]. NFD turns the Greek question mark
/// and ano teleia into `;` and the middle dot, so those appear here in
/// decomposed form.
const STRIPPED_PUNCTUATION: &[char] = &[
    '(', ')', '[', ']', ',', '.', ';', '\u{00b7}', '\u{2019}', '\u{2014}',
];

/// Homonym markers appended to lemmas, removed before stripping.
const HOMONYM_MARKERS: &[&str] = &[" (I)", " (II)"];

/// Precomposed oxia characters and their tonos (or ASCII) equivalents.
/// The Nestle 1904 source text uses oxia codepoints; downstream tooling
/// expects the tonos normalization.
const OXIA_TO_TONOS: &[(char, char)] = &[
    ('\u{037e}', ';'),        // GREEK QUESTION MARK
    ('\u{0387}', '\u{00b7}'), // GREEK ANO TELEIA -> MIDDLE DOT
    ('\u{1f71}', '\u{03ac}'), // alpha with oxia
    ('\u{1f73}', '\u{03ad}'), // epsilon with oxia
    ('\u{1f75}', '\u{03ae}'), // eta with oxia
    ('\u{1f77}', '\u{03af}'), // iota with oxia
    ('\u{1f79}', '\u{03cc}'), // omicron with oxia
    ('\u{1f7b}', '\u{03cd}'), // upsilon with oxia
    ('\u{1f7d}', '\u{03ce}'), // omega with oxia
    ('\u{1fd3}', '\u{0390}'), // iota with dialytika and oxia
    ('\u{1fe3}', '\u{03b0}'), // upsilon with dialytika and oxia
];

/// Strips a Greek string down to its bare lowercase letters: homonym
/// markers like `" (I)"` are removed whole, then accents and breathing
/// marks are removed via NFD decomposition, punctuation (including the
/// apostrophe of elided forms) is dropped, spaces are kept.
pub fn strip(text: &str) -> String {
    let mut text = text.to_string();
    for marker in HOMONYM_MARKERS {
        text = text.replace(marker, "");
    }

    text.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

/// Replaces every precomposed oxia accent with its tonos equivalent.
pub fn oxia_to_tonos(text: &str) -> String {
    text.chars()
        .map(|c| {
            OXIA_TO_TONOS
                .iter()
                .find(|(oxia, _)| *oxia == c)
                .map_or(c, |&(_, tonos)| tonos)
        })
        .collect()
}

/// The inverse of [`oxia_to_tonos`], for regenerating text in the
/// corpus's own accent convention.
pub fn tonos_to_oxia(text: &str) -> String {
    text.chars()
        .map(|c| {
            OXIA_TO_TONOS
                .iter()
                .find(|(_, tonos)| *tonos == c)
                .map_or(c, |&(oxia, _)| oxia)
        })
        .collect()
}
