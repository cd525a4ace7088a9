/// Emphasized/plain runs of a word.
pub mod segments;
