//! # wordcycle guide
//!
//! This module walks through how a word list becomes an animated SVG, and what the output
//! looks like. If you only need the one-liner, call [`generate_svg`](crate::generate_svg).
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`TargetLetters`](crate::TargetLetters): ordered letters a word must contain (default `mstr`)
//! - [`MatchIndices`](crate::MatchIndices): byte offsets of those letters in one word
//! - [`AnimationOptions`](crate::AnimationOptions): what the caller supplies, all optional
//! - [`AnimationConfig`](crate::AnimationConfig): resolved, validated settings
//! - [`Timeline`](crate::Timeline): the shared cycle and the delay of each word
//! - [`SvgDocument`](crate::SvgDocument): structured output, serialized once
//!
//! ---
//!
//! ## Which words qualify
//!
//! A word qualifies when its letters, folded to ASCII lowercase, contain the target letters as
//! an ordered subsequence. The scan is greedy: each letter is matched at its first occurrence
//! after the previous match, and those positions are the ones emphasized.
//!
//! ```rust
//! use wordcycle::{TargetLetters, find_match_indices};
//!
//! let letters = TargetLetters::default();
//! let m = find_match_indices("Master", &letters).unwrap();
//! assert_eq!(m.as_slice(), &[0, 2, 3, 5]);
//! assert!(find_match_indices("mists", &letters).is_none());
//! ```
//!
//! ---
//!
//! ## Ordering
//!
//! Qualifying words are shuffled with a Fisher-Yates pass, then the sentinel word (the target
//! letters spelled out) is put in front. Pass your own generator to make runs reproducible:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordcycle::{AnimationOptions, WordCycle};
//!
//! # fn main() -> wordcycle::WordcycleResult<()> {
//! let cycle = WordCycle::new(&AnimationOptions::default())?;
//! let mut rng = StdRng::seed_from_u64(7);
//! let seq = cycle.prepare(&["monster", "xyz", "mister"], &mut rng);
//! assert_eq!(seq[0], "mstr");
//! assert_eq!(seq.len(), 3);
//!
//! // Rendering a fixed sequence is deterministic.
//! assert_eq!(cycle.render(&seq)?, cycle.render(&seq)?);
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! ## Timing
//!
//! With `N` words shown `D` seconds each, one cycle lasts `N * D` seconds. Every word runs the
//! same keyframes:
//!
//! - opaque from `0%` to `100/N - 20/N` percent
//! - fading to transparent by `100/N` percent
//! - transparent until `100%`
//!
//! Word `i` starts after `i * D` seconds, so the words take turns. Outside its slot a word
//! stays at its base opacity of `0`.
//!
//! ---
//!
//! ## Options
//!
//! Options can be built in code or parsed from JSON with camelCase keys. A value of `0` or an
//! empty string means "use the default"; negative or non-finite numbers are rejected.
//!
//! ```rust
//! use wordcycle::{AnimationOptions, WordcycleError};
//!
//! let opts = AnimationOptions::from_json(r#"{"width": 640, "durationPerWord": 0}"#).unwrap();
//! let cfg = opts.resolve().unwrap();
//! assert_eq!(cfg.width, 640.0);
//! assert_eq!(cfg.duration_per_word, 2.0);
//!
//! let err = AnimationOptions::default().width(-10.0).resolve().unwrap_err();
//! assert!(matches!(err, WordcycleError::InvalidConfig(_)));
//! ```
//!
//! ---
//!
//! ## Output shape
//!
//! ```text
//! <svg xmlns="http://www.w3.org/2000/svg" width="500" height="150" viewBox="0 0 500 150">
//!   <style>
//!     @keyframes wordcycle {
//!       0% { opacity: 1; }
//!       40% { opacity: 1; }
//!       50% { opacity: 0; }
//!       100% { opacity: 0; }
//!     }
//!     .word { opacity: 0; font-family: Times New Roman, serif; font-size: 50px; animation: wordcycle 4s linear infinite; }
//!     .em { font-weight: bold; fill: #000000; }
//!     .dim { font-weight: normal; fill: #aaaaaa; }
//!   </style>
//!   <text class="word" x="250" y="75" ... style="animation-delay: 0s;">...</text>
//!   <text class="word" x="250" y="75" ... style="animation-delay: 2s;">...</text>
//! </svg>
//! ```
