/// End-to-end generator.
pub mod word_cycle;
