//! Shared types for beta code transliteration.
//!
//! - [`accent`] -- accent flags, the per-letter accumulator and the 5-bit
//!   accent index used to key the composition tables
//! - [`mode`] -- alphabet and escape modes

pub mod accent;
pub mod mode;

pub use accent::{AccentFlag, AccentGroup, AccentIndex, AccentSet};
pub use mode::{Alphabet, Mode};
