//! SVG output: a structured document and the emitter that fills it.

/// Style rules, text elements and serialization.
pub mod document;
/// Builds the document from words, timeline and config.
pub mod emitter;
