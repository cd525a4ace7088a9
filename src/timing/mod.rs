/// Shared animation cycle.
pub mod timeline;
