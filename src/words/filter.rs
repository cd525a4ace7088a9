use crate::foundation::letters::TargetLetters;

/// Byte offsets of each matched target letter within a word, strictly increasing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchIndices(Vec<usize>);

impl MatchIndices {
    /// Offsets in match order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

/// Locate the target letters in `word`, in order.
///
/// Each letter is matched at its first occurrence after the previous match; earlier
/// occurrences are never revisited. Returns `None` when any letter is missing.
pub fn find_match_indices(word: &str, letters: &TargetLetters) -> Option<MatchIndices> {
    let targets = letters.as_slice();
    let mut found = Vec::with_capacity(targets.len());

    for (offset, ch) in word.char_indices() {
        let Some(&want) = targets.get(found.len()) else {
            break;
        };
        if ch.to_ascii_lowercase() == want {
            found.push(offset);
        }
    }

    (found.len() == targets.len()).then_some(MatchIndices(found))
}

/// Whether `word` contains every target letter in order.
pub fn contains_target_sequence(word: &str, letters: &TargetLetters) -> bool {
    find_match_indices(word, letters).is_some()
}

/// Keep the qualifying words, preserving their relative order.
pub fn filter_words<S: AsRef<str>>(words: &[S], letters: &TargetLetters) -> Vec<String> {
    words
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|w| contains_target_sequence(w, letters))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/words/filter.rs"]
mod tests;
