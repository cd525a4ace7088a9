/// Caller-facing options and the resolved config.
pub mod options;
