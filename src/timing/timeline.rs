use crate::foundation::error::{WordcycleError, WordcycleResult};

/// Share of each word's slot spent fading out.
pub const FADE_FRACTION: f64 = 0.2;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Shared animation cycle for one rendered word list.
///
/// Every word runs the same keyframes over `total_duration_s`; words differ only by their
/// start delay, so word `i` is opaque from `delays_s[i]` for one slot and hidden otherwise.
pub struct Timeline {
    /// Length of one full cycle in seconds (`duration_per_word * word_count`).
    pub total_duration_s: f64,
    /// Percent of the cycle allotted to a single word.
    pub visible_percentage: f64,
    /// Trailing percent of a slot used to fade to transparent.
    pub fade_percentage: f64,
    /// Start delay in seconds for each word position.
    pub delays_s: Vec<f64>,
}

impl Timeline {
    /// Compute the cycle for `word_count` words shown `duration_per_word_s` seconds each.
    pub fn new(word_count: usize, duration_per_word_s: f64) -> WordcycleResult<Self> {
        if word_count == 0 {
            return Err(WordcycleError::invalid_input(
                "timeline needs at least one word",
            ));
        }
        if !duration_per_word_s.is_finite() || duration_per_word_s <= 0.0 {
            return Err(WordcycleError::invalid_config(format!(
                "duration per word must be finite and > 0 (got {duration_per_word_s})"
            )));
        }

        let n = word_count as f64;
        let visible_percentage = 100.0 / n;
        Ok(Self {
            total_duration_s: duration_per_word_s * n,
            visible_percentage,
            fade_percentage: visible_percentage * FADE_FRACTION,
            delays_s: (0..word_count)
                .map(|i| i as f64 * duration_per_word_s)
                .collect(),
        })
    }

    /// Number of word slots in the cycle.
    pub fn word_count(&self) -> usize {
        self.delays_s.len()
    }

    /// Percent at which the fade-out begins.
    pub fn opaque_until_percentage(&self) -> f64 {
        self.visible_percentage - self.fade_percentage
    }

    /// Start delay of word `index`, if it exists.
    pub fn delay_s(&self, index: usize) -> Option<f64> {
        self.delays_s.get(index).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/timeline.rs"]
mod tests;
