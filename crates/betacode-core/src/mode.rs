// Alphabet and escape modes reported by the engine.

/// Persistent alphabet selected by the `$` and `&` escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    Hellenic,
    #[default]
    Roman,
}

/// Current interpretation mode of the engine.
///
/// `Hellenic` and `Roman` persist until the next alphabet escape.
/// `HellenicUpper` is reported while a `*` capital marker waits for its
/// letter. The remaining modes are reported while the numeric argument of
/// the corresponding escape is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    Hellenic,
    HellenicUpper,
    #[default]
    Roman,
    Punctuation,
    Quotation,
    Page,
    Bracket,
    Quasibracket,
    Nontext,
    Symbol,
    TabHalf,
}

impl From<Alphabet> for Mode {
    fn from(alphabet: Alphabet) -> Self {
        match alphabet {
            Alphabet::Hellenic => Mode::Hellenic,
            Alphabet::Roman => Mode::Roman,
        }
    }
}
