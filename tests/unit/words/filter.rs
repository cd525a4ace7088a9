use super::*;

fn mstr() -> TargetLetters {
    TargetLetters::default()
}

#[test]
fn master_matches_first_occurrences() {
    let m = find_match_indices("master", &mstr()).unwrap();
    assert_eq!(m.as_slice(), &[0, 2, 3, 5]);
}

#[test]
fn matching_ignores_ascii_case() {
    let m = find_match_indices("MiSTeR", &mstr()).unwrap();
    assert_eq!(m.as_slice(), &[0, 2, 3, 5]);
}

#[test]
fn empty_word_is_rejected() {
    assert!(find_match_indices("", &mstr()).is_none());
}

#[test]
fn wrong_relative_order_is_rejected() {
    // 't' only appears before 's'.
    assert!(!contains_target_sequence("mtsr", &mstr()));
    assert!(!contains_target_sequence("rtsm", &mstr()));
    assert!(!contains_target_sequence("mist", &mstr()));
}

#[test]
fn repeats_and_gaps_between_letters_are_allowed() {
    let m = find_match_indices("mmssttrr", &mstr()).unwrap();
    assert_eq!(m.as_slice(), &[0, 2, 4, 6]);

    let m = find_match_indices("amusement park", &mstr()).unwrap();
    assert_eq!(m.as_slice(), &[1, 3, 8, 12]);
}

#[test]
fn offsets_are_bytes_for_non_ascii_words() {
    // 'é' is two bytes, shifting later offsets.
    let m = find_match_indices("méstr", &mstr()).unwrap();
    assert_eq!(m.as_slice(), &[0, 3, 4, 5]);
}

#[test]
fn indices_are_strictly_increasing() {
    for word in ["mastermind", "monster", "MOISTURE", "amsterdam"] {
        let m = find_match_indices(word, &mstr()).unwrap();
        assert!(m.as_slice().windows(2).all(|w| w[0] < w[1]), "{word}");
    }
}

#[test]
fn predicate_agrees_with_brute_force_subsequence_search() {
    fn brute(word: &str) -> bool {
        let chars: Vec<char> = word.chars().map(|c| c.to_ascii_lowercase()).collect();
        let n = chars.len();
        for a in 0..n {
            for b in a + 1..n {
                for c in b + 1..n {
                    for d in c + 1..n {
                        if [chars[a], chars[b], chars[c], chars[d]] == ['m', 's', 't', 'r'] {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    let words = [
        "master", "mists", "xyz", "", "mstr", "rtsm", "smart", "MuStaRd", "storm", "mortars",
        "misteR", "mmmm", "stream", "amstrad", "moist rag",
    ];
    for w in words {
        assert_eq!(contains_target_sequence(w, &mstr()), brute(w), "{w}");
    }
}

#[test]
fn filter_preserves_relative_order() {
    let words = ["mister", "xyz", "master", "mists", "MUSTARD"];
    assert_eq!(
        filter_words(&words, &mstr()),
        vec!["mister".to_string(), "master".into(), "MUSTARD".into()]
    );
}

#[test]
fn custom_letters_are_respected() {
    let letters = TargetLetters::new("ab").unwrap();
    assert!(contains_target_sequence("xAyB", &letters));
    assert!(!contains_target_sequence("ba", &letters));
}
