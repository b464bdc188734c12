// Sigma form selection.
//
// A plain `S` is decided by the byte that follows it: another letter means
// the word continues (medial), anything else ends the word (final). End of
// input counts as a word boundary. `S1`, `S2` and `S3` force a form.

/// The three written forms of sigma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigmaForm {
    Medial,
    Final,
    Lunate,
}

impl SigmaForm {
    /// Form forced by a digit written directly after `S`.
    pub fn from_digit(byte: u8) -> Option<Self> {
        match byte {
            b'1' => Some(SigmaForm::Medial),
            b'2' => Some(SigmaForm::Final),
            b'3' => Some(SigmaForm::Lunate),
            _ => None,
        }
    }

    /// Form chosen from one byte of lookahead.
    pub fn contextual(next_is_letter: bool, lunate: bool) -> Self {
        if lunate {
            SigmaForm::Lunate
        } else if next_is_letter {
            SigmaForm::Medial
        } else {
            SigmaForm::Final
        }
    }

    /// The scalar for this form. Final capital sigma is the ordinary capital.
    pub fn glyph(self, capital: bool) -> char {
        match (self, capital) {
            (SigmaForm::Medial, false) => '\u{03C3}',
            (SigmaForm::Medial, true) => '\u{03A3}',
            (SigmaForm::Final, false) => '\u{03C2}',
            (SigmaForm::Final, true) => '\u{03A3}',
            (SigmaForm::Lunate, false) => '\u{03F2}',
            (SigmaForm::Lunate, true) => '\u{03F9}',
        }
    }
}
