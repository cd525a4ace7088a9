/// Error taxonomy and result alias.
pub mod error;
/// Ordered target letters.
pub mod letters;
