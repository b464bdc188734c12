// Escape classes and their selection tables.
//
// An escape is an introducer byte optionally followed by a decimal argument:
// `$` and `&` switch the alphabet, the other introducers select a glyph from
// their class's table (`%13` dagger, `"1` low double quote, `[1` parenthesis).
// An escape without digits selects entry 0.

use betacode_core::mode::{Alphabet, Mode};

/// Class of an escape introducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeClass {
    /// `$`
    Hellenic,
    /// `&`
    Roman,
    /// `%`
    Punctuation,
    /// `"`
    Quotation,
    /// `@`
    Page,
    /// `[` `]`
    Bracket,
    /// `<` `>`
    Quasibracket,
    /// `{` `}`
    Nontext,
    /// `#`
    Symbol,
    /// `^`
    TabHalf,
}

impl EscapeClass {
    /// The mode reported while this escape's argument is being read.
    pub fn mode(self) -> Mode {
        match self {
            EscapeClass::Hellenic => Mode::Hellenic,
            EscapeClass::Roman => Mode::Roman,
            EscapeClass::Punctuation => Mode::Punctuation,
            EscapeClass::Quotation => Mode::Quotation,
            EscapeClass::Page => Mode::Page,
            EscapeClass::Bracket => Mode::Bracket,
            EscapeClass::Quasibracket => Mode::Quasibracket,
            EscapeClass::Nontext => Mode::Nontext,
            EscapeClass::Symbol => Mode::Symbol,
            EscapeClass::TabHalf => Mode::TabHalf,
        }
    }
}

/// What a completed escape does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Change the persistent alphabet.
    Switch(Alphabet),
    /// Emit these scalars.
    Emit(&'static [char]),
    /// Markup or unknown argument; no output.
    Nothing,
}

static PUNCTUATION: [char; 20] = [
    '\u{2020}', // 0 dagger
    '?',        // 1
    '*',        // 2
    '/',        // 3
    '!',        // 4
    '|',        // 5
    '=',        // 6
    '+',        // 7
    '%',        // 8
    '&',        // 9
    ':',        // 10
    '\u{2022}', // 11 bullet
    '\u{204E}', // 12 low asterisk
    '\u{2021}', // 13 double dagger
    '\u{00A7}', // 14 section sign
    '\u{02C8}', // 15 vertical line modifier
    '\u{00A6}', // 16 broken bar
    '\u{2016}', // 17 double vertical line
    '\'',       // 18
    '\u{2013}', // 19 en dash
];

static QUOTATION: [char; 9] = [
    '"',        // 0
    '\u{201E}', // 1 „
    '\u{201C}', // 2 “
    '\u{201D}', // 3 ”
    '\u{2018}', // 4 ‘
    '\u{2019}', // 5 ’
    '\u{00AB}', // 6 «
    '\u{00BB}', // 7 »
    '\u{201F}', // 8 ‟
];

/// Opening and closing bracket pairs.
static BRACKETS: [(char, char); 5] = [
    ('[', ']'),
    ('(', ')'),
    ('\u{27E8}', '\u{27E9}'), // ⟨ ⟩
    ('{', '}'),
    ('\u{27E6}', '\u{27E7}'), // ⟦ ⟧
];

static SYMBOLS: [char; 6] = [
    '\u{0374}', // 0 numeral sign
    '\u{03DF}', // 1 koppa
    '\u{03DB}', // 2 stigma
    '\u{03D9}', // 3 archaic koppa
    '\u{03E1}', // 4 sampi
    '\u{0375}', // 5 lower numeral sign
];

static SPACE: [char; 1] = [' '];
static NEWLINE: [char; 1] = ['\n'];

fn one(table: &'static [char], arg: u32) -> Selection {
    match table.get(arg as usize) {
        Some(c) => Selection::Emit(std::slice::from_ref(c)),
        None => Selection::Nothing,
    }
}

fn bracket(closing: bool, arg: u32) -> Selection {
    match BRACKETS.get(arg as usize) {
        Some((open, _)) if !closing => Selection::Emit(std::slice::from_ref(open)),
        Some((_, close)) => Selection::Emit(std::slice::from_ref(close)),
        None => Selection::Nothing,
    }
}

/// Resolve a completed escape. `arg` is `None` when no digits followed.
pub fn select(class: EscapeClass, closing: bool, arg: Option<u32>) -> Selection {
    let n = arg.unwrap_or(0);
    let selection = match class {
        EscapeClass::Hellenic => Selection::Switch(Alphabet::Hellenic),
        EscapeClass::Roman => Selection::Switch(Alphabet::Roman),
        EscapeClass::Punctuation => one(&PUNCTUATION, n),
        EscapeClass::Quotation => one(&QUOTATION, n),
        EscapeClass::Bracket => bracket(closing, n),
        EscapeClass::Symbol => one(&SYMBOLS, n),
        EscapeClass::Page => match n {
            0 => Selection::Emit(&SPACE),
            1 => Selection::Emit(&NEWLINE),
            _ => Selection::Nothing,
        },
        EscapeClass::TabHalf => match arg {
            Some(n) if n > 0 => Selection::Emit(&SPACE),
            _ => Selection::Nothing,
        },
        EscapeClass::Quasibracket | EscapeClass::Nontext => return Selection::Nothing,
    };
    if selection == Selection::Nothing {
        log::debug!("no selection for escape {class:?} with argument {n}");
    }
    selection
}
