// Greek letters reachable from the ASCII alphabet.
//
// Beta code letter assignments (case-insensitive):
//
//   A α  B β  C ξ  D δ  E ε  F ϕ  G γ  H η  I ι  J ς  K κ  L λ  M μ
//   N ν  O ο  P π  Q θ  R ρ  S σ  T τ  U υ  V ϝ  W ω  X χ  Y ψ  Z ζ

/// A Greek letter class, independent of case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    Alpha,
    Beta,
    Xi,
    Delta,
    Epsilon,
    Phi,
    Gamma,
    Eta,
    Iota,
    /// `J`: always the final form.
    FinalSigma,
    Kappa,
    Lambda,
    Mu,
    Nu,
    Omicron,
    Pi,
    Theta,
    Rho,
    /// `S`: medial, final or lunate depending on context.
    Sigma,
    Tau,
    Upsilon,
    Digamma,
    Omega,
    Chi,
    Psi,
    Zeta,
}

/// Letters in ASCII order, `A` through `Z`.
const BY_ASCII: [Letter; 26] = [
    Letter::Alpha,
    Letter::Beta,
    Letter::Xi,
    Letter::Delta,
    Letter::Epsilon,
    Letter::Phi,
    Letter::Gamma,
    Letter::Eta,
    Letter::Iota,
    Letter::FinalSigma,
    Letter::Kappa,
    Letter::Lambda,
    Letter::Mu,
    Letter::Nu,
    Letter::Omicron,
    Letter::Pi,
    Letter::Theta,
    Letter::Rho,
    Letter::Sigma,
    Letter::Tau,
    Letter::Upsilon,
    Letter::Digamma,
    Letter::Omega,
    Letter::Chi,
    Letter::Psi,
    Letter::Zeta,
];

impl Letter {
    /// Look up the letter for an ASCII letter byte of either case.
    pub const fn from_ascii(byte: u8) -> Option<Letter> {
        match byte {
            b'A'..=b'Z' => Some(BY_ASCII[(byte - b'A') as usize]),
            b'a'..=b'z' => Some(BY_ASCII[(byte - b'a') as usize]),
            _ => None,
        }
    }

    /// Lowercase scalar. Sigma yields its medial form.
    pub const fn lower(self) -> char {
        match self {
            Letter::Alpha => '\u{03B1}',
            Letter::Beta => '\u{03B2}',
            Letter::Xi => '\u{03BE}',
            Letter::Delta => '\u{03B4}',
            Letter::Epsilon => '\u{03B5}',
            Letter::Phi => '\u{03D5}',
            Letter::Gamma => '\u{03B3}',
            Letter::Eta => '\u{03B7}',
            Letter::Iota => '\u{03B9}',
            Letter::FinalSigma => '\u{03C2}',
            Letter::Kappa => '\u{03BA}',
            Letter::Lambda => '\u{03BB}',
            Letter::Mu => '\u{03BC}',
            Letter::Nu => '\u{03BD}',
            Letter::Omicron => '\u{03BF}',
            Letter::Pi => '\u{03C0}',
            Letter::Theta => '\u{03B8}',
            Letter::Rho => '\u{03C1}',
            Letter::Sigma => '\u{03C3}',
            Letter::Tau => '\u{03C4}',
            Letter::Upsilon => '\u{03C5}',
            Letter::Digamma => '\u{03DD}',
            Letter::Omega => '\u{03C9}',
            Letter::Chi => '\u{03C7}',
            Letter::Psi => '\u{03C8}',
            Letter::Zeta => '\u{03B6}',
        }
    }

    /// Uppercase scalar. Both sigma letters yield capital sigma.
    pub const fn upper(self) -> char {
        match self {
            Letter::Alpha => '\u{0391}',
            Letter::Beta => '\u{0392}',
            Letter::Xi => '\u{039E}',
            Letter::Delta => '\u{0394}',
            Letter::Epsilon => '\u{0395}',
            Letter::Phi => '\u{03A6}',
            Letter::Gamma => '\u{0393}',
            Letter::Eta => '\u{0397}',
            Letter::Iota => '\u{0399}',
            Letter::FinalSigma => '\u{03A3}',
            Letter::Kappa => '\u{039A}',
            Letter::Lambda => '\u{039B}',
            Letter::Mu => '\u{039C}',
            Letter::Nu => '\u{039D}',
            Letter::Omicron => '\u{039F}',
            Letter::Pi => '\u{03A0}',
            Letter::Theta => '\u{0398}',
            Letter::Rho => '\u{03A1}',
            Letter::Sigma => '\u{03A3}',
            Letter::Tau => '\u{03A4}',
            Letter::Upsilon => '\u{03A5}',
            Letter::Digamma => '\u{03DC}',
            Letter::Omega => '\u{03A9}',
            Letter::Chi => '\u{03A7}',
            Letter::Psi => '\u{03A8}',
            Letter::Zeta => '\u{0396}',
        }
    }

    pub const fn glyph(self, capital: bool) -> char {
        if capital { self.upper() } else { self.lower() }
    }

    /// Whether the letter has an accent table (the seven vowels and rho).
    pub const fn is_accentable(self) -> bool {
        matches!(
            self,
            Letter::Alpha
                | Letter::Epsilon
                | Letter::Eta
                | Letter::Iota
                | Letter::Omicron
                | Letter::Upsilon
                | Letter::Omega
                | Letter::Rho
        )
    }
}
