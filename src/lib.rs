//! wordcycle generates self-contained animated SVG that cycles through a list of words.
//!
//! Each word must contain a fixed set of target letters in order (by default `m`, `s`, `t`,
//! `r`). Those letters are drawn bold in ink color while the rest of the word is muted.
//! Words fade in and out one at a time using a single CSS `@keyframes` rule, so the output
//! needs no script to play.
//!
//! # Pipeline overview
//!
//! 1. **Filter**: keep words that contain the target letters in order ([`filter_words`])
//! 2. **Sequence**: shuffle survivors and prepend the sentinel word ([`sequence_words`])
//! 3. **Time**: derive the shared cycle and per-word delays ([`Timeline`])
//! 4. **Split**: cut each word into emphasized and plain runs ([`segments`])
//! 5. **Emit**: build an [`SvgDocument`] and serialize it ([`emit_markup`])
//!
//! [`WordCycle`] wires the stages together; [`generate_svg`] is the one-call entry point.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic rendering**: only the shuffle is random, and its generator is injectable.
//! - **Fail closed**: bad options are rejected before any markup is produced.
//!
//! For a longer walkthrough see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod markup;
mod pipeline;
mod text;
mod timing;
mod words;

/// Standalone walkthrough of wordcycle's concepts and output format.
pub mod guide;

pub use config::options::{
    AnimationConfig, AnimationOptions, DEFAULT_DURATION_PER_WORD, DEFAULT_FONT_FAMILY,
    DEFAULT_FONT_SIZE, DEFAULT_HEIGHT, DEFAULT_INK_COLOR, DEFAULT_MUTED_COLOR, DEFAULT_WIDTH,
};
pub use foundation::error::{WordcycleError, WordcycleResult};
pub use foundation::letters::TargetLetters;
pub use markup::document::{
    Declaration, KeyframeStop, KeyframesRule, StyleRule, SvgDocument, TextElement, TextRun,
    escape_attr, escape_text, fmt_num, is_xml_char,
};
pub use markup::emitter::{
    ANIMATION_NAME, EMPHASIS_CLASS, MUTED_CLASS, WORD_CLASS, build_document, emit_markup,
};
pub use pipeline::word_cycle::{WordCycle, generate_svg, generate_svg_with_rng};
pub use text::segments::{Segment, Span, segments, split_spans};
pub use timing::timeline::{FADE_FRACTION, Timeline};
pub use words::filter::{
    MatchIndices, contains_target_sequence, filter_words, find_match_indices,
};
pub use words::sequencer::{sequence_words, shuffle_in_place};
