// Accent flags, the per-letter accent accumulator and its 5-bit index.
//
// Diacritics fall into three independent groups. Within a group the marks are
// mutually exclusive, so a complete accent state is one optional flag per
// group:
//
//   breathing: psili  )   dasia  (   dialytika    +
//   tone:      varia  \   oxia   /   perispomeni  =
//   subscript: ypogegrammeni |
//
// The packed index layout (low bit first):
//
//   bit 4   bits 3-2     bits 1-0
//   iota    tone         breathing
//           01 varia     01 psili
//           10 oxia      10 dasia
//           11 perisp.   11 dialytika

/// Combining psili (smooth breathing), U+0313.
pub const PSILI: char = '\u{0313}';
/// Combining dasia (rough breathing), U+0314.
pub const DASIA: char = '\u{0314}';
/// Combining diaeresis, U+0308.
pub const DIALYTIKA: char = '\u{0308}';
/// Combining grave, U+0300.
pub const VARIA: char = '\u{0300}';
/// Combining acute, U+0301.
pub const OXIA: char = '\u{0301}';
/// Combining Greek perispomeni, U+0342.
pub const PERISPOMENI: char = '\u{0342}';
/// Combining Greek ypogegrammeni, U+0345.
pub const YPOGEGRAMMENI: char = '\u{0345}';

/// Number of distinct accent indices (and entries per accent table).
pub const ACCENT_INDEX_COUNT: usize = 32;

/// The three mutually independent diacritic groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentGroup {
    Breathing,
    Tone,
    Subscript,
}

/// A single diacritic escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentFlag {
    /// `)` smooth breathing.
    Psili,
    /// `(` rough breathing.
    Dasia,
    /// `+` diaeresis.
    Dialytika,
    /// `\` grave.
    Varia,
    /// `/` acute.
    Oxia,
    /// `=` circumflex.
    Perispomeni,
    /// `|` iota subscript.
    Ypogegrammeni,
}

impl AccentFlag {
    /// All flags, in breathing, tone, subscript order.
    pub const ALL: [AccentFlag; 7] = [
        AccentFlag::Psili,
        AccentFlag::Dasia,
        AccentFlag::Dialytika,
        AccentFlag::Varia,
        AccentFlag::Oxia,
        AccentFlag::Perispomeni,
        AccentFlag::Ypogegrammeni,
    ];

    /// Parse a beta code accent escape byte.
    pub fn from_beta(byte: u8) -> Option<Self> {
        match byte {
            b')' => Some(AccentFlag::Psili),
            b'(' => Some(AccentFlag::Dasia),
            b'+' => Some(AccentFlag::Dialytika),
            b'\\' => Some(AccentFlag::Varia),
            b'/' => Some(AccentFlag::Oxia),
            b'=' => Some(AccentFlag::Perispomeni),
            b'|' => Some(AccentFlag::Ypogegrammeni),
            _ => None,
        }
    }

    /// The beta code byte for this flag.
    pub fn beta(self) -> u8 {
        match self {
            AccentFlag::Psili => b')',
            AccentFlag::Dasia => b'(',
            AccentFlag::Dialytika => b'+',
            AccentFlag::Varia => b'\\',
            AccentFlag::Oxia => b'/',
            AccentFlag::Perispomeni => b'=',
            AccentFlag::Ypogegrammeni => b'|',
        }
    }

    pub fn group(self) -> AccentGroup {
        match self {
            AccentFlag::Psili | AccentFlag::Dasia | AccentFlag::Dialytika => AccentGroup::Breathing,
            AccentFlag::Varia | AccentFlag::Oxia | AccentFlag::Perispomeni => AccentGroup::Tone,
            AccentFlag::Ypogegrammeni => AccentGroup::Subscript,
        }
    }

    /// Two-bit code of the flag within its group (always 1 for the subscript).
    fn code(self) -> u8 {
        match self {
            AccentFlag::Psili | AccentFlag::Varia | AccentFlag::Ypogegrammeni => 0b01,
            AccentFlag::Dasia | AccentFlag::Oxia => 0b10,
            AccentFlag::Dialytika | AccentFlag::Perispomeni => 0b11,
        }
    }

    /// The Unicode combining mark used when no precomposed form exists.
    pub fn combining_mark(self) -> char {
        match self {
            AccentFlag::Psili => PSILI,
            AccentFlag::Dasia => DASIA,
            AccentFlag::Dialytika => DIALYTIKA,
            AccentFlag::Varia => VARIA,
            AccentFlag::Oxia => OXIA,
            AccentFlag::Perispomeni => PERISPOMENI,
            AccentFlag::Ypogegrammeni => YPOGEGRAMMENI,
        }
    }
}

/// Packed accent state, the key into every accent table. Always `< 32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AccentIndex(u8);

impl AccentIndex {
    /// No accents.
    pub const PLAIN: AccentIndex = AccentIndex(0);

    /// Build an index from a raw value, masking it to five bits.
    pub const fn from_bits(bits: u8) -> Self {
        AccentIndex(bits & 0x1f)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Table offset for this index.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Accent accumulator: at most one flag per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AccentSet {
    breathing: Option<AccentFlag>,
    tone: Option<AccentFlag>,
    subscript: Option<AccentFlag>,
}

impl AccentSet {
    pub const fn new() -> Self {
        Self {
            breathing: None,
            tone: None,
            subscript: None,
        }
    }

    fn slot(&mut self, group: AccentGroup) -> &mut Option<AccentFlag> {
        match group {
            AccentGroup::Breathing => &mut self.breathing,
            AccentGroup::Tone => &mut self.tone,
            AccentGroup::Subscript => &mut self.subscript,
        }
    }

    /// Add a flag to the set.
    ///
    /// Returns `Err` with the flag already occupying the group when the
    /// group is taken; the set is left unchanged in that case (first flag
    /// wins).
    pub fn insert(&mut self, flag: AccentFlag) -> Result<(), AccentFlag> {
        let slot = self.slot(flag.group());
        match *slot {
            Some(existing) => Err(existing),
            None => {
                *slot = Some(flag);
                Ok(())
            }
        }
    }

    pub fn get(&self, group: AccentGroup) -> Option<AccentFlag> {
        match group {
            AccentGroup::Breathing => self.breathing,
            AccentGroup::Tone => self.tone,
            AccentGroup::Subscript => self.subscript,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.breathing.is_none() && self.tone.is_none() && self.subscript.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Take the accumulated flags, leaving the set empty.
    pub fn take(&mut self) -> AccentSet {
        std::mem::take(self)
    }

    /// Flags present, in breathing, tone, subscript order.
    pub fn flags(&self) -> impl Iterator<Item = AccentFlag> + '_ {
        [self.breathing, self.tone, self.subscript]
            .into_iter()
            .flatten()
    }

    /// Combining marks for the flags present, in breathing, tone, subscript order.
    pub fn combining_marks(&self) -> impl Iterator<Item = char> + '_ {
        self.flags().map(AccentFlag::combining_mark)
    }

    /// Pack the set into its 5-bit table index.
    pub fn index(&self) -> AccentIndex {
        let breathing = self.breathing.map_or(0, AccentFlag::code);
        let tone = self.tone.map_or(0, AccentFlag::code);
        let subscript = self.subscript.map_or(0, AccentFlag::code);
        AccentIndex::from_bits(breathing | (tone << 2) | (subscript << 4))
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: AccentIndex) -> Self {
        let bits = index.bits();
        let breathing = match bits & 0b11 {
            0b01 => Some(AccentFlag::Psili),
            0b10 => Some(AccentFlag::Dasia),
            0b11 => Some(AccentFlag::Dialytika),
            _ => None,
        };
        let tone = match (bits >> 2) & 0b11 {
            0b01 => Some(AccentFlag::Varia),
            0b10 => Some(AccentFlag::Oxia),
            0b11 => Some(AccentFlag::Perispomeni),
            _ => None,
        };
        let subscript = (bits & 0b1_0000 != 0).then_some(AccentFlag::Ypogegrammeni);
        Self {
            breathing,
            tone,
            subscript,
        }
    }
}

impl FromIterator<AccentFlag> for AccentSet {
    /// Collect flags, keeping the first flag seen in each group.
    fn from_iter<I: IntoIterator<Item = AccentFlag>>(iter: I) -> Self {
        let mut set = AccentSet::new();
        for flag in iter {
            let _ = set.insert(flag);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_sets() -> Vec<AccentSet> {
        let breathing = [
            None,
            Some(AccentFlag::Psili),
            Some(AccentFlag::Dasia),
            Some(AccentFlag::Dialytika),
        ];
        let tone = [
            None,
            Some(AccentFlag::Varia),
            Some(AccentFlag::Oxia),
            Some(AccentFlag::Perispomeni),
        ];
        let subscript = [None, Some(AccentFlag::Ypogegrammeni)];
        let mut sets = Vec::new();
        for b in breathing {
            for t in tone {
                for s in subscript {
                    sets.push([b, t, s].into_iter().flatten().collect());
                }
            }
        }
        sets
    }

    #[test]
    fn empty_set_is_index_zero() {
        assert_eq!(AccentSet::new().index(), AccentIndex::PLAIN);
        assert!(AccentSet::new().is_empty());
    }

    #[test]
    fn index_is_injective_and_in_range() {
        let sets = all_sets();
        assert_eq!(sets.len(), ACCENT_INDEX_COUNT);
        let indices: HashSet<u8> = sets.iter().map(|s| s.index().bits()).collect();
        assert_eq!(indices.len(), ACCENT_INDEX_COUNT);
        assert!(indices.iter().all(|&i| i < 32));
    }

    #[test]
    fn index_bit_layout() {
        let psili_oxia: AccentSet = [AccentFlag::Psili, AccentFlag::Oxia].into_iter().collect();
        assert_eq!(psili_oxia.index().bits(), 0b0_10_01);

        let dasia_perispomeni_iota: AccentSet = [
            AccentFlag::Dasia,
            AccentFlag::Perispomeni,
            AccentFlag::Ypogegrammeni,
        ]
        .into_iter()
        .collect();
        assert_eq!(dasia_perispomeni_iota.index().bits(), 0b1_11_10);

        let dialytika_varia: AccentSet =
            [AccentFlag::Dialytika, AccentFlag::Varia].into_iter().collect();
        assert_eq!(dialytika_varia.index().bits(), 0b0_01_11);
    }

    #[test]
    fn index_does_not_depend_on_insertion_order() {
        let a: AccentSet = [AccentFlag::Ypogegrammeni, AccentFlag::Oxia, AccentFlag::Psili]
            .into_iter()
            .collect();
        let b: AccentSet = [AccentFlag::Psili, AccentFlag::Oxia, AccentFlag::Ypogegrammeni]
            .into_iter()
            .collect();
        assert_eq!(a, b);
        assert_eq!(a.index(), b.index());
    }

    #[test]
    fn from_index_inverts_index() {
        for set in all_sets() {
            assert_eq!(AccentSet::from_index(set.index()), set);
        }
    }

    #[test]
    fn duplicate_group_is_rejected() {
        let mut set = AccentSet::new();
        assert_eq!(set.insert(AccentFlag::Oxia), Ok(()));
        assert_eq!(set.insert(AccentFlag::Varia), Err(AccentFlag::Oxia));
        assert_eq!(set.insert(AccentFlag::Oxia), Err(AccentFlag::Oxia));
        assert_eq!(set.get(AccentGroup::Tone), Some(AccentFlag::Oxia));
        // Other groups are still open.
        assert_eq!(set.insert(AccentFlag::Dasia), Ok(()));
    }

    #[test]
    fn combining_marks_follow_group_order() {
        let set: AccentSet = [AccentFlag::Ypogegrammeni, AccentFlag::Perispomeni, AccentFlag::Psili]
            .into_iter()
            .collect();
        let marks: Vec<char> = set.combining_marks().collect();
        assert_eq!(marks, vec![PSILI, PERISPOMENI, YPOGEGRAMMENI]);
    }

    #[test]
    fn take_empties_the_set() {
        let mut set: AccentSet = [AccentFlag::Dasia].into_iter().collect();
        let taken = set.take();
        assert!(set.is_empty());
        assert_eq!(taken.get(AccentGroup::Breathing), Some(AccentFlag::Dasia));
    }

    #[test]
    fn beta_bytes_round_trip() {
        for flag in AccentFlag::ALL {
            assert_eq!(AccentFlag::from_beta(flag.beta()), Some(flag));
        }
        assert_eq!(AccentFlag::from_beta(b'a'), None);
        assert_eq!(AccentFlag::from_beta(b'*'), None);
    }
}
