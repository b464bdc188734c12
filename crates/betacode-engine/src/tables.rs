// Accent composition tables.
//
// One 32-entry row per accentable letter and case, indexed by `AccentIndex`:
//
//   plain        psili        dasia        dialytika
//   varia        psili-varia  dasia-varia  dialytika-varia
//   oxia         psili-oxia   dasia-oxia   dialytika-oxia
//   perispomeni  psili-per.   dasia-per.   dialytika-per.
//   ... the same sixteen again with ypogegrammeni
//
// Zero means Unicode has no precomposed form; the caller then emits the
// plain letter followed by combining marks.

use betacode_core::accent::{ACCENT_INDEX_COUNT, AccentIndex, AccentSet};

use crate::letter::Letter;

/// A row of precomposed scalars, zero where none exists.
pub type AccentTable = [u32; ACCENT_INDEX_COUNT];

#[rustfmt::skip]
static ALPHA: AccentTable = [
    0x03b1, 0x1f00, 0x1f01, 0x0000, 0x1f70, 0x1f02, 0x1f03, 0x0000,
    0x1f71, 0x1f04, 0x1f05, 0x0000, 0x1fb6, 0x1f06, 0x1f07, 0x0000,
    0x1fb3, 0x1f80, 0x1f81, 0x0000, 0x1fb2, 0x1f82, 0x1f83, 0x0000,
    0x1fb4, 0x1f84, 0x1f85, 0x0000, 0x1fb7, 0x1f86, 0x1f87, 0x0000,
];

#[rustfmt::skip]
static ALPHA_UPPER: AccentTable = [
    0x0391, 0x1f08, 0x1f09, 0x0000, 0x1fba, 0x1f0a, 0x1f0b, 0x0000,
    0x1fbb, 0x1f0c, 0x1f0d, 0x0000, 0x0000, 0x1f0e, 0x1f0f, 0x0000,
    0x1fbc, 0x1f88, 0x1f89, 0x0000, 0x0000, 0x1f8a, 0x1f8b, 0x0000,
    0x0000, 0x1f8c, 0x1f8d, 0x0000, 0x0000, 0x1f8e, 0x1f8f, 0x0000,
];

#[rustfmt::skip]
static EPSILON: AccentTable = [
    0x03b5, 0x1f10, 0x1f11, 0x0000, 0x1f72, 0x1f12, 0x1f13, 0x0000,
    0x1f73, 0x1f14, 0x1f15, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

#[rustfmt::skip]
static EPSILON_UPPER: AccentTable = [
    0x0395, 0x1f18, 0x1f19, 0x0000, 0x1fc8, 0x1f1a, 0x1f1b, 0x0000,
    0x1fc9, 0x1f1c, 0x1f1d, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

#[rustfmt::skip]
static ETA: AccentTable = [
    0x03b7, 0x1f20, 0x1f21, 0x0000, 0x1f74, 0x1f22, 0x1f23, 0x0000,
    0x1f75, 0x1f24, 0x1f25, 0x0000, 0x1fc6, 0x1f26, 0x1f27, 0x0000,
    0x1fc3, 0x1f90, 0x1f91, 0x0000, 0x1fc2, 0x1f92, 0x1f93, 0x0000,
    0x1fc4, 0x1f94, 0x1f95, 0x0000, 0x1fc7, 0x1f96, 0x1f97, 0x0000,
];

#[rustfmt::skip]
static ETA_UPPER: AccentTable = [
    0x0397, 0x1f28, 0x1f29, 0x0000, 0x1fca, 0x1f2a, 0x1f2b, 0x0000,
    0x1fcb, 0x1f2c, 0x1f2d, 0x0000, 0x0000, 0x1f2e, 0x1f2f, 0x0000,
    0x1fcc, 0x1f98, 0x1f99, 0x0000, 0x0000, 0x1f9a, 0x1f9b, 0x0000,
    0x0000, 0x1f9c, 0x1f9d, 0x0000, 0x0000, 0x1f9e, 0x1f9f, 0x0000,
];

#[rustfmt::skip]
static IOTA: AccentTable = [
    0x03b9, 0x1f30, 0x1f31, 0x03ca, 0x1f76, 0x1f32, 0x1f33, 0x1fd2,
    0x1f77, 0x1f34, 0x1f35, 0x1fd3, 0x1fd6, 0x1f36, 0x1f37, 0x1fd7,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

#[rustfmt::skip]
static IOTA_UPPER: AccentTable = [
    0x0399, 0x1f38, 0x1f39, 0x03aa, 0x1fda, 0x1f3a, 0x1f3b, 0x0000,
    0x1fdb, 0x1f3c, 0x1f3d, 0x0000, 0x0000, 0x1f3e, 0x1f3f, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

#[rustfmt::skip]
static OMICRON: AccentTable = [
    0x03bf, 0x1f40, 0x1f41, 0x0000, 0x1f78, 0x1f42, 0x1f43, 0x0000,
    0x1f79, 0x1f44, 0x1f45, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

#[rustfmt::skip]
static OMICRON_UPPER: AccentTable = [
    0x039f, 0x1f48, 0x1f49, 0x0000, 0x1ff8, 0x1f4a, 0x1f4b, 0x0000,
    0x1ff9, 0x1f4c, 0x1f4d, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

#[rustfmt::skip]
static UPSILON: AccentTable = [
    0x03c5, 0x1f50, 0x1f51, 0x03cb, 0x1f7a, 0x1f52, 0x1f53, 0x1fe2,
    0x1f7b, 0x1f54, 0x1f55, 0x1fe3, 0x1fe6, 0x1f56, 0x1f57, 0x1fe7,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

#[rustfmt::skip]
static UPSILON_UPPER: AccentTable = [
    0x03a5, 0x0000, 0x1f59, 0x03ab, 0x1fea, 0x0000, 0x1f5b, 0x0000,
    0x1feb, 0x0000, 0x1f5d, 0x0000, 0x0000, 0x0000, 0x1f5f, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

#[rustfmt::skip]
static OMEGA: AccentTable = [
    0x03c9, 0x1f60, 0x1f61, 0x0000, 0x1f7c, 0x1f62, 0x1f63, 0x0000,
    0x1f7d, 0x1f64, 0x1f65, 0x0000, 0x1ff6, 0x1f66, 0x1f67, 0x0000,
    0x1ff3, 0x1fa0, 0x1fa1, 0x0000, 0x1ff2, 0x1fa2, 0x1fa3, 0x0000,
    0x1ff4, 0x1fa4, 0x1fa5, 0x0000, 0x1ff7, 0x1fa6, 0x1fa7, 0x0000,
];

// Capital omega has no precomposed perispomeni form (entry 12).
#[rustfmt::skip]
static OMEGA_UPPER: AccentTable = [
    0x03a9, 0x1f68, 0x1f69, 0x0000, 0x1ffa, 0x1f6a, 0x1f6b, 0x0000,
    0x1ffb, 0x1f6c, 0x1f6d, 0x0000, 0x0000, 0x1f6e, 0x1f6f, 0x0000,
    0x1ffc, 0x1fa8, 0x1fa9, 0x0000, 0x0000, 0x1faa, 0x1fab, 0x0000,
    0x0000, 0x1fac, 0x1fad, 0x0000, 0x0000, 0x1fae, 0x1faf, 0x0000,
];

#[rustfmt::skip]
static RHO: AccentTable = [
    0x03c1, 0x1fe4, 0x1fe5, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

#[rustfmt::skip]
static RHO_UPPER: AccentTable = [
    0x03a1, 0x0000, 0x1fec, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
    0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,
];

/// The accent table for a letter in the given case, if it takes accents.
pub fn accent_table(letter: Letter, capital: bool) -> Option<&'static AccentTable> {
    let table = match (letter, capital) {
        (Letter::Alpha, false) => &ALPHA,
        (Letter::Alpha, true) => &ALPHA_UPPER,
        (Letter::Epsilon, false) => &EPSILON,
        (Letter::Epsilon, true) => &EPSILON_UPPER,
        (Letter::Eta, false) => &ETA,
        (Letter::Eta, true) => &ETA_UPPER,
        (Letter::Iota, false) => &IOTA,
        (Letter::Iota, true) => &IOTA_UPPER,
        (Letter::Omicron, false) => &OMICRON,
        (Letter::Omicron, true) => &OMICRON_UPPER,
        (Letter::Upsilon, false) => &UPSILON,
        (Letter::Upsilon, true) => &UPSILON_UPPER,
        (Letter::Omega, false) => &OMEGA,
        (Letter::Omega, true) => &OMEGA_UPPER,
        (Letter::Rho, false) => &RHO,
        (Letter::Rho, true) => &RHO_UPPER,
        _ => return None,
    };
    Some(table)
}

/// Precomposed scalar for a letter with the given accents, if Unicode has one.
pub fn precomposed(letter: Letter, capital: bool, index: AccentIndex) -> Option<char> {
    let table = accent_table(letter, capital)?;
    match table[index.as_usize()] {
        0 => None,
        cp => char::from_u32(cp),
    }
}

/// Append `letter` carrying `accents` to `out`.
///
/// Uses the precomposed scalar when the table has one, otherwise the plain
/// letter followed by combining marks in breathing, tone, subscript order.
/// Letters without a table drop their accents.
pub fn compose(letter: Letter, capital: bool, accents: AccentSet, out: &mut String) {
    let base = letter.glyph(capital);
    if accents.is_empty() {
        out.push(base);
        return;
    }
    if !letter.is_accentable() {
        log::trace!("dropping accents {accents:?} on non-accentable {letter:?}");
        out.push(base);
        return;
    }
    match precomposed(letter, capital, accents.index()) {
        Some(c) => out.push(c),
        None => {
            out.push(base);
            out.extend(accents.combining_marks());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use betacode_core::accent::AccentFlag;

    const ACCENTABLE: [Letter; 8] = [
        Letter::Alpha,
        Letter::Epsilon,
        Letter::Eta,
        Letter::Iota,
        Letter::Omicron,
        Letter::Upsilon,
        Letter::Omega,
        Letter::Rho,
    ];

    fn composed(letter: Letter, capital: bool, flags: &[AccentFlag]) -> String {
        let mut out = String::new();
        compose(letter, capital, flags.iter().copied().collect(), &mut out);
        out
    }

    #[test]
    fn plain_entry_is_the_letter_itself() {
        for letter in ACCENTABLE {
            for capital in [false, true] {
                assert_eq!(
                    precomposed(letter, capital, AccentIndex::PLAIN),
                    Some(letter.glyph(capital)),
                    "{letter:?} capital={capital}"
                );
            }
        }
    }

    #[test]
    fn every_nonzero_entry_is_a_valid_scalar() {
        for letter in ACCENTABLE {
            for capital in [false, true] {
                let table = accent_table(letter, capital).unwrap();
                for &cp in table.iter().filter(|&&cp| cp != 0) {
                    assert!(char::from_u32(cp).is_some(), "{cp:#x}");
                }
            }
        }
    }

    #[test]
    fn alpha_psili_oxia() {
        assert_eq!(
            composed(Letter::Alpha, false, &[AccentFlag::Psili, AccentFlag::Oxia]),
            "\u{1F04}"
        );
        assert_eq!(
            composed(Letter::Alpha, true, &[AccentFlag::Psili, AccentFlag::Oxia]),
            "\u{1F0C}"
        );
    }

    #[test]
    fn subscript_forms() {
        assert_eq!(
            composed(Letter::Omega, false, &[AccentFlag::Perispomeni, AccentFlag::Ypogegrammeni]),
            "\u{1FF7}"
        );
        assert_eq!(
            composed(
                Letter::Eta,
                false,
                &[AccentFlag::Dasia, AccentFlag::Oxia, AccentFlag::Ypogegrammeni]
            ),
            "\u{1F95}"
        );
    }

    #[test]
    fn diaeresis_forms() {
        assert_eq!(composed(Letter::Iota, false, &[AccentFlag::Dialytika]), "\u{03CA}");
        assert_eq!(
            composed(Letter::Upsilon, false, &[AccentFlag::Dialytika, AccentFlag::Oxia]),
            "\u{1FE3}"
        );
    }

    #[test]
    fn rho_breathings() {
        assert_eq!(composed(Letter::Rho, false, &[AccentFlag::Dasia]), "\u{1FE5}");
        assert_eq!(composed(Letter::Rho, true, &[AccentFlag::Dasia]), "\u{1FEC}");
        // No capital rho with psili.
        assert_eq!(composed(Letter::Rho, true, &[AccentFlag::Psili]), "\u{03A1}\u{0313}");
    }

    #[test]
    fn fallback_law_for_every_zero_entry() {
        for letter in ACCENTABLE {
            for capital in [false, true] {
                let table = accent_table(letter, capital).unwrap();
                for (i, &cp) in table.iter().enumerate() {
                    if cp != 0 {
                        continue;
                    }
                    let accents = AccentSet::from_index(AccentIndex::from_bits(i as u8));
                    let mut out = String::new();
                    compose(letter, capital, accents, &mut out);

                    let mut expected = String::new();
                    expected.push(letter.glyph(capital));
                    expected.extend(accents.combining_marks());
                    assert_eq!(out, expected, "{letter:?} capital={capital} index={i}");
                    assert!(!out.contains('\0'));
                }
            }
        }
    }

    #[test]
    fn capital_omega_perispomeni_keeps_its_accent() {
        assert_eq!(
            composed(Letter::Omega, true, &[AccentFlag::Perispomeni]),
            "\u{03A9}\u{0342}"
        );
    }

    #[test]
    fn epsilon_has_no_circumflex() {
        assert_eq!(
            composed(Letter::Epsilon, false, &[AccentFlag::Psili, AccentFlag::Perispomeni]),
            "\u{03B5}\u{0313}\u{0342}"
        );
    }

    #[test]
    fn consonants_drop_accents() {
        assert_eq!(composed(Letter::Kappa, false, &[AccentFlag::Oxia]), "κ");
        assert!(accent_table(Letter::Kappa, false).is_none());
        assert!(accent_table(Letter::Sigma, true).is_none());
    }
}
