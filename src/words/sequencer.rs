use rand::Rng;
use rand::seq::SliceRandom;

use crate::foundation::letters::TargetLetters;

/// Uniformly permute `words` in place with rand's Fisher-Yates shuffle.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(words: &mut [T], rng: &mut R) {
    words.shuffle(rng);
}

/// Shuffle the filtered words and put the sentinel in front.
///
/// The sentinel itself never takes part in the shuffle.
pub fn sequence_words<R: Rng + ?Sized>(
    filtered: &[String],
    letters: &TargetLetters,
    rng: &mut R,
) -> Vec<String> {
    let mut shuffled = filtered.to_vec();
    shuffle_in_place(&mut shuffled, rng);

    let mut out = Vec::with_capacity(shuffled.len() + 1);
    out.push(letters.sentinel());
    out.extend(shuffled);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/words/sequencer.rs"]
mod tests;
