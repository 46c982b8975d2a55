pub mod classify;
pub mod format;
pub mod io;

// Re-export key types for easier usage
pub use classify::{LineKind, classify};
pub use format::{format, is_formatted};
pub use io::*;
