//! Beta code to Unicode Greek transliteration engine.
//!
//! Converts the ASCII beta code encoding of ancient Greek into Unicode,
//! composing letters and diacritics into precomposed scalars where Unicode
//! has them and into letter + combining mark sequences where it does not.
//! The engine is a byte-in, scalars-out transducer; reading files and
//! encoding the output belong to the caller.
//!
//! # Architecture
//!
//! - [`base`] -- byte to code translation table
//! - [`letter`] -- Greek letter classes and their plain scalars
//! - [`tables`] -- accent composition tables and the combining-mark fallback
//! - [`sigma`] -- medial, final and lunate sigma selection
//! - [`escape`] -- escape classes and their selection tables
//! - [`options`] -- per-session configuration
//! - [`engine`] -- the state machine tying the above together
//!
//! # Example
//!
//! ```
//! use betacode_engine::{Options, transliterate};
//!
//! let greek = transliterate("$*)/anqrwpos", Options::default()).unwrap();
//! assert_eq!(greek, "\u{1F0C}νθρωπος");
//! ```

pub mod base;
pub mod engine;
pub mod escape;
pub mod letter;
pub mod options;
pub mod sigma;
pub mod tables;

pub use engine::Engine;
pub use options::{AccentPlacement, Options};

/// Error type for the transliteration engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BetaError {
    /// A byte outside `0x20..=0x7f` reached the engine.
    #[error("byte {byte:#04x} at offset {offset} is outside the beta code range 0x20..=0x7f")]
    OutOfDomain { byte: u8, offset: usize },
}

/// Transliterate a complete input with a fresh engine.
pub fn transliterate(input: impl AsRef<[u8]>, options: Options) -> Result<String, BetaError> {
    let input = input.as_ref();
    let mut engine = Engine::new(options);
    let mut out = String::with_capacity(input.len() * 2);
    engine.feed_all(input, &mut out)?;
    engine.finish(&mut out);
    Ok(out)
}
