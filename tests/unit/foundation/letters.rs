use super::*;

#[test]
fn default_letters_spell_mstr() {
    let letters = TargetLetters::default();
    assert_eq!(letters.as_slice(), &['m', 's', 't', 'r']);
    assert_eq!(letters.sentinel(), "mstr");
    assert_eq!(letters.segment_count(), 9);
}

#[test]
fn new_folds_ascii_case() {
    let letters = TargetLetters::new("CaT").unwrap();
    assert_eq!(letters.sentinel(), "cat");
    assert_eq!(letters.len(), 3);
    assert_eq!(letters.segment_count(), 7);
}

#[test]
fn new_rejects_empty_and_whitespace() {
    assert!(matches!(
        TargetLetters::new(""),
        Err(WordcycleError::InvalidConfig(_))
    ));
    assert!(matches!(
        TargetLetters::new("m s"),
        Err(WordcycleError::InvalidConfig(_))
    ));
    assert!(matches!(
        TargetLetters::new("ms\n"),
        Err(WordcycleError::InvalidConfig(_))
    ));
}
