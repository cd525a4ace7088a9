use crate::foundation::error::{WordcycleError, WordcycleResult};

/// Ordered, case-folded letters a word must contain to qualify for display.
///
/// Matching is ASCII-case-insensitive and character-by-character. The default set is
/// `m, s, t, r`, whose sentinel word is `"mstr"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetLetters {
    letters: Vec<char>,
}

impl Default for TargetLetters {
    fn default() -> Self {
        Self {
            letters: vec!['m', 's', 't', 'r'],
        }
    }
}

impl TargetLetters {
    /// Build a letter sequence from `letters`, folding ASCII to lowercase.
    pub fn new(letters: &str) -> WordcycleResult<Self> {
        if letters.is_empty() {
            return Err(WordcycleError::invalid_config(
                "target letters must be non-empty",
            ));
        }
        if let Some(bad) = letters
            .chars()
            .find(|c| c.is_whitespace() || c.is_control())
        {
            return Err(WordcycleError::invalid_config(format!(
                "target letters must not contain whitespace or control characters (got {bad:?})"
            )));
        }
        Ok(Self {
            letters: letters.chars().map(|c| c.to_ascii_lowercase()).collect(),
        })
    }

    /// Folded letters in match order.
    pub fn as_slice(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (always >= 1).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether there are no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The word shown first in every cycle: the letters concatenated, lowercase.
    pub fn sentinel(&self) -> String {
        self.letters.iter().collect()
    }

    /// Segments produced for a qualifying word: one per letter plus the runs around them.
    pub fn segment_count(&self) -> usize {
        2 * self.letters.len() + 1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/letters.rs"]
mod tests;
