//! Word selection and ordering.

/// Ordered-letter predicate and filtering.
pub mod filter;
/// Shuffle and sentinel placement.
pub mod sequencer;
