mod common;

use braille_autocorrect::api::{normalize_chord, parse_input, rank};
use braille_autocorrect::cell::ChordPolicy;
use braille_autocorrect::lexicon::{encode, Dictionary};
use braille_autocorrect::ranker::{Ranker, Suggestion, DEFAULT_TOP_K};
use common::{cells, chords_for, reference_dictionary};
use proptest::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn dictionary() -> Dictionary {
    reference_dictionary()
}

fn pairs(suggestions: &[Suggestion]) -> Vec<(&str, usize)> {
    suggestions
        .iter()
        .map(|s| (s.word.as_str(), s.distance))
        .collect()
}

#[rstest]
fn test_single_a_chord(dictionary: Dictionary) {
    let input = vec![normalize_chord("D")];
    let top = rank(&input, &dictionary, DEFAULT_TOP_K);
    // Every word but "dog" contains an 'a' cell: two deletions away.
    assert_eq!(pairs(&top), vec![("cat", 2), ("cab", 2), ("bat", 2)]);

    let all = rank(&input, &dictionary, 10);
    assert_eq!(
        pairs(&all),
        vec![
            ("cat", 2),
            ("cab", 2),
            ("bat", 2),
            ("car", 2),
            ("bar", 2),
            ("rat", 2),
            ("dog", 3)
        ]
    );
}

#[rstest]
fn test_exact_input_ranks_first(dictionary: Dictionary) {
    let input = parse_input(&chords_for("cat"), ChordPolicy::default());
    assert_eq!(input, encode("cat").unwrap());

    let top = rank(&input, &dictionary, DEFAULT_TOP_K);
    assert_eq!(pairs(&top), vec![("cat", 0), ("cab", 1), ("bat", 1)]);
}

#[rstest]
fn test_ties_keep_dictionary_order(dictionary: Dictionary) {
    // First chord matches no letter, so every "?at" word is one substitution
    // away and the tie resolves by dictionary position.
    let input = cells(&["DWKOP", "D", "QWKO"]);
    let top = rank(&input, &dictionary, 3);
    assert_eq!(pairs(&top), vec![("cat", 1), ("bat", 1), ("rat", 1)]);

    let reversed = Dictionary::from_words(dictionary.words().iter().rev().cloned());
    let top = rank(&input, &reversed, 3);
    assert_eq!(pairs(&top), vec![("rat", 1), ("bat", 1), ("cat", 1)]);
}

#[test]
fn test_empty_input_scores_word_length() {
    let dict = Dictionary::from_words(["a", "to", "cat", "bird"]);
    let top = rank(&[], &dict, 4);
    assert_eq!(pairs(&top), vec![("a", 1), ("to", 2), ("cat", 3), ("bird", 4)]);
}

#[rstest]
#[case("D")]
#[case("DQ D KOQW")]
#[case("")]
#[case("DQK DKO DWQK")]
fn test_unencodable_words_never_ranked(#[case] line: &str) {
    let dict = Dictionary::from_words(["c4t", "cat", "r@t", "", "bat", "Dog"]);
    let input = parse_input(line, ChordPolicy::default());
    let all = rank(&input, &dict, 10);

    let words: Vec<&str> = all.iter().map(|s| s.word.as_str()).collect();
    assert_eq!(words.len(), 3);
    for bad in ["c4t", "r@t", ""] {
        assert!(!words.contains(&bad));
    }
    assert!(words.contains(&"Dog"));
}

#[test]
fn test_degenerate_dictionaries() {
    let input = cells(&["D"]);
    assert!(rank(&input, &Dictionary::from_words(Vec::<String>::new()), 3).is_empty());
    assert!(rank(&input, &Dictionary::from_words(["123", "?!"]), 3).is_empty());
}

#[rstest]
fn test_fewer_words_than_k(dictionary: Dictionary) {
    let top = rank(&cells(&["D"]), &dictionary, 100);
    assert_eq!(top.len(), dictionary.len());
}

#[rstest]
fn test_multiset_policy_penalizes_repeats(dictionary: Dictionary) {
    let line = "DQQ D KOQW";
    let dedup = rank(&parse_input(line, ChordPolicy::Deduplicate), &dictionary, 1);
    let multi = rank(&parse_input(line, ChordPolicy::Multiset), &dictionary, 1);
    assert_eq!(pairs(&dedup), vec![("cat", 0)]);
    assert_eq!(pairs(&multi), vec![("cat", 1)]);
}

#[rstest]
fn test_cached_ranker_agrees(dictionary: Dictionary) {
    let ranker = Ranker::new(dictionary.clone());
    for line in ["D", "DQ D KOQW", "", "DKQ DKO DKQW"] {
        let input = parse_input(line, ChordPolicy::default());
        assert_eq!(ranker.rank(&input, 3), rank(&input, &dictionary, 3));
    }
}

fn arb_line() -> impl Strategy<Value = String> {
    prop::collection::vec("[dwqkopDWQKOPx]{0,4}", 0..6).prop_map(|toks| toks.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_ranking_is_deterministic_and_sorted(line in arb_line(), k in 0usize..10) {
        let dict = Dictionary::from_words(["cat", "cab", "b4t", "car", "bar", "dog", "rat", "r-a"]);
        let input = parse_input(&line, ChordPolicy::default());

        let first = rank(&input, &dict, k);
        let second = rank(&input, &dict, k);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.len() <= k);
        prop_assert!(first.windows(2).all(|w| w[0].distance <= w[1].distance));
        prop_assert!(first.iter().all(|s| s.word != "b4t" && s.word != "r-a"));
    }
}
