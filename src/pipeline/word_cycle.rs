use rand::Rng;

use crate::{
    config::options::{AnimationConfig, AnimationOptions},
    foundation::error::{WordcycleError, WordcycleResult},
    foundation::letters::TargetLetters,
    markup::document::is_xml_char,
    markup::emitter::emit_markup,
    timing::timeline::Timeline,
    words::filter::{MatchIndices, filter_words, find_match_indices},
    words::sequencer::sequence_words,
};

/// Configured generator: filter, shuffle, time and render a word list.
///
/// A `WordCycle` holds no mutable state; the only source of variation between calls is
/// the random generator handed to [`WordCycle::prepare`] / [`WordCycle::generate`].
#[derive(Clone, Debug)]
pub struct WordCycle {
    letters: TargetLetters,
    config: AnimationConfig,
}

impl WordCycle {
    /// Resolve `options` and use the default target letters.
    pub fn new(options: &AnimationOptions) -> WordcycleResult<Self> {
        Ok(Self::from_config(options.resolve()?))
    }

    /// Use an already resolved config.
    pub fn from_config(config: AnimationConfig) -> Self {
        Self {
            letters: TargetLetters::default(),
            config,
        }
    }

    /// Replace the target letters.
    pub fn with_letters(mut self, letters: TargetLetters) -> Self {
        self.letters = letters;
        self
    }

    /// Target letters in use.
    pub fn letters(&self) -> &TargetLetters {
        &self.letters
    }

    /// Resolved config in use.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Filter `words`, shuffle the survivors and prepend the sentinel.
    pub fn prepare<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        words: &[S],
        rng: &mut R,
    ) -> Vec<String> {
        let filtered = filter_words(words, &self.letters);
        if filtered.is_empty() {
            tracing::warn!(
                input = words.len(),
                "no word contains the target letters in order; rendering the sentinel only"
            );
        } else {
            tracing::debug!(input = words.len(), kept = filtered.len(), "filtered words");
        }
        sequence_words(&filtered, &self.letters, rng)
    }

    /// Render an already ordered word list. Deterministic for a given list and config.
    #[tracing::instrument(skip_all, fields(words = sequence.len()))]
    pub fn render(&self, sequence: &[String]) -> WordcycleResult<String> {
        self.config.validate()?;

        let matches = sequence
            .iter()
            .map(|w| {
                if let Some(bad) = w.chars().find(|&c| !is_xml_char(c)) {
                    return Err(WordcycleError::invalid_input(format!(
                        "word {w:?} contains {bad:?}, which cannot appear in SVG markup"
                    )));
                }
                find_match_indices(w, &self.letters).ok_or_else(|| {
                    WordcycleError::invalid_input(format!(
                        "word {w:?} does not contain '{}' in order",
                        self.letters.sentinel()
                    ))
                })
            })
            .collect::<WordcycleResult<Vec<MatchIndices>>>()?;

        let timeline = Timeline::new(sequence.len(), self.config.duration_per_word)?;
        tracing::debug!(
            total_s = timeline.total_duration_s,
            visible_pct = timeline.visible_percentage,
            fade_pct = timeline.fade_percentage,
            "computed timeline"
        );

        emit_markup(sequence, &matches, &timeline, &self.config)
    }

    /// Run the whole pipeline on raw input words.
    #[tracing::instrument(skip_all, fields(words = words.len()))]
    pub fn generate<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        words: &[S],
        rng: &mut R,
    ) -> WordcycleResult<String> {
        let sequence = self.prepare(words, rng);
        self.render(&sequence)
    }
}

/// Generate markup for `words` with the default letters, drawing entropy from the
/// thread-local generator.
pub fn generate_svg<S: AsRef<str>>(
    words: &[S],
    options: &AnimationOptions,
) -> WordcycleResult<String> {
    generate_svg_with_rng(words, options, &mut rand::rng())
}

/// Generate markup for `words` with the default letters and an injected generator.
pub fn generate_svg_with_rng<S: AsRef<str>, R: Rng + ?Sized>(
    words: &[S],
    options: &AnimationOptions,
    rng: &mut R,
) -> WordcycleResult<String> {
    WordCycle::new(options)?.generate(words, rng)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/word_cycle.rs"]
mod tests;
