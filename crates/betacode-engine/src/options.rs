// Engine configuration.

use serde::Deserialize;

/// Where accent escapes are written relative to their letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentPlacement {
    /// Accents precede the letter: `)/a`, `*)/a`.
    #[default]
    Leading,
    /// Accents follow a lowercase letter (`a)/`); a capital still takes
    /// them between `*` and the letter (`*)/a`).
    Trailing,
}

/// Options for one transliteration session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Write every contextual sigma as lunate sigma.
    pub lunate_sigma: bool,
    pub accent_placement: AccentPlacement,
    /// Lowercase ASCII letters produce capitals without `*`.
    pub lowercase_capitals: bool,
    /// Begin in the Hellenic alphabet instead of Roman, for text that
    /// never writes the leading `$`.
    pub start_hellenic: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = Options::default();
        assert!(!options.lunate_sigma);
        assert!(!options.lowercase_capitals);
        assert_eq!(options.accent_placement, AccentPlacement::Leading);
        assert!(!options.start_hellenic);
    }

    #[test]
    fn deserialize_partial() {
        let options: Options =
            serde_json::from_str(r#"{"lunate_sigma": true, "accent_placement": "trailing"}"#)
                .unwrap();
        assert!(options.lunate_sigma);
        assert_eq!(options.accent_placement, AccentPlacement::Trailing);
        assert!(!options.lowercase_capitals);
    }
}
