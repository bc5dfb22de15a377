use std::io::Write;

use nestle_mql::corpus::frequency::assign_frequency;
use nestle_mql::corpus::inflection::InflectionTables;
use nestle_mql::{BookName, mql, read_corpus};

const SAMPLE_TEXT: &str = "\
Matt 1:1\tΒίβλος\tN-NSF\tN-NSF\t976\tβίβλος\tΒίβλος\n\
Matt 1:1\tγενέσεως\tN-GSF\tN-GSF\t1078\tγένεσις\tγενέσεως\n\
Matt 1:2\tἐγέννησεν\tV-AAI-3S\tV-AAI-3S\t1080\tγεννάω\tἐγέννησεν\n\
Mark 1:1\tἈρχὴ\tN-NSF\tN-NSF\t746\tἀρχή\tἀρχή\n";

#[test]
fn converts_a_small_corpus_end_to_end() {
    let mut corpus = read_corpus(SAMPLE_TEXT.as_bytes(), false).unwrap();
    assign_frequency(&mut corpus.words);

    let dir = tempfile::tempdir().unwrap();
    let verbs_path = dir.path().join("verbs.csv");
    let nouns_path = dir.path().join("nouns.csv");
    std::fs::File::create(&verbs_path)
        .unwrap()
        .write_all("lexeme,stem\n\"γεννάω,1080,false\",α-stamme\n".as_bytes())
        .unwrap();
    std::fs::File::create(&nouns_path)
        .unwrap()
        .write_all(
            "lexeme,declension,stem\n\
             \"βίβλος,976,false\",2.,ο-stamme\n\
             \"γένεσις,1078,false\",3.,ι-stamme\n\
             \"ἀρχή,746,false\",1. (-η),α-stamme\n"
                .as_bytes(),
        )
        .unwrap();

    let tables = InflectionTables::load(Some(&verbs_path), Some(&nouns_path)).unwrap();
    tables.apply(&mut corpus.words, false).unwrap();

    let mut buf = Vec::new();
    mql::write_script(&mut buf, &corpus).unwrap();
    let script = String::from_utf8(buf).unwrap();

    assert!(script.starts_with("CREATE DATABASE 'nestle1904' GO\n"));
    assert!(script.ends_with("VACUUM DATABASE ANALYZE GO\n"));

    // Words are single monads in document order.
    assert!(script.contains("FROM MONADS= { 1 }"));
    assert!(script.contains("    surface := \"Βίβλος\";"));
    assert!(script.contains("    functional_tag := \"V-AAI-3S\";"));
    assert!(script.contains("    noun_stem := omicron;"));
    assert!(script.contains("    noun_declension := second_d;"));
    assert!(script.contains("    verb_type := alpha;"));

    // Two books, each covering its own words.
    assert_eq!(corpus.books.len(), 2);
    assert_eq!(corpus.books[0].book, BookName::Matthew);
    assert_eq!(corpus.books[1].book, BookName::Mark);
    assert!(script.contains("FROM MONADS= { 1-3 }"));
    assert!(script.contains("FROM MONADS= { 4-4 }"));

    // Matt 1:1 has two words, Matt 1:2 one.
    assert_eq!(corpus.verses.len(), 3);
    assert!(script.contains("FROM MONADS= { 1-2 }"));
}

#[test]
fn lenient_mode_skips_undecodable_words() {
    let text = "\
Matt 1:1\tΒίβλος\tN-NSF\tN-NSF\t976\tβίβλος\tΒίβλος\n\
Matt 1:1\tbad\tX-YZ\tX-YZ\t1\tbad\tbad\n";

    assert!(read_corpus(text.as_bytes(), false).is_err());

    let corpus = read_corpus(text.as_bytes(), true).unwrap();
    assert_eq!(corpus.words.len(), 1);
    assert_eq!(corpus.words[0].surface, "Βίβλος");
}

#[test]
fn frequency_ranks_flow_into_the_script() {
    let mut corpus = read_corpus(SAMPLE_TEXT.as_bytes(), false).unwrap();
    assign_frequency(&mut corpus.words);

    // Every lexeme occurs once, so they all share the top rank.
    let ranks: Vec<u32> = corpus.words.iter().map(|word| word.frequency_rank).collect();
    assert_eq!(ranks, vec![1, 1, 1, 1]);

    let mut buf = Vec::new();
    mql::write_script(&mut buf, &corpus).unwrap();
    let script = String::from_utf8(buf).unwrap();
    assert!(script.contains("    lexeme_occurrences := 1;"));
}
