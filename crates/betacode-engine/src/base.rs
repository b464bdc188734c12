// Base translation table: one input byte in 0x20..=0x7f to one `Code`.

use betacode_core::accent::AccentFlag;
use betacode_core::mode::Alphabet;

use crate::escape::EscapeClass;
use crate::letter::Letter as L;

/// First byte of the translation domain (space).
pub const DOMAIN_START: u8 = 0x20;

/// Last byte of the translation domain (DEL).
pub const DOMAIN_END: u8 = 0x7f;

/// Result of translating one input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// No character; the byte is dropped.
    Nothing,
    /// Scalar emitted as-is.
    Literal(char),
    /// Greek letter; case and accents are applied by the engine.
    Letter(L),
    /// Diacritic escape, accumulated until a letter arrives.
    Accent(AccentFlag),
    /// `*`: the next letter is a capital.
    Capital,
    /// Escape introducer, optionally followed by a decimal argument.
    Escape(Escape),
}

/// An escape introducer byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escape {
    pub class: EscapeClass,
    /// Closing half of a paired escape (`]`, `>`, `}`).
    pub closing: bool,
}

const fn lit(c: char) -> Code {
    Code::Literal(c)
}

const fn ascii_letter(byte: u8) -> Code {
    match L::from_ascii(byte) {
        Some(l) => Code::Letter(l),
        None => Code::Nothing,
    }
}

const fn accent(flag: AccentFlag) -> Code {
    Code::Accent(flag)
}

const fn open(class: EscapeClass) -> Code {
    Code::Escape(Escape {
        class,
        closing: false,
    })
}

const fn close(class: EscapeClass) -> Code {
    Code::Escape(Escape {
        class,
        closing: true,
    })
}

/// Hellenic alphabet table, indexed by `byte - 0x20`.
static HELLENIC: [Code; 96] = [
    // sp  !  "  #  $  %  &  '
    lit(' '),
    lit('!'),
    open(EscapeClass::Quotation),
    open(EscapeClass::Symbol),
    open(EscapeClass::Hellenic),
    open(EscapeClass::Punctuation),
    open(EscapeClass::Roman),
    lit('\''),
    // (  )  *  +  ,  -  .  /
    accent(AccentFlag::Dasia),
    accent(AccentFlag::Psili),
    Code::Capital,
    accent(AccentFlag::Dialytika),
    lit(','),
    lit('-'),
    lit('.'),
    accent(AccentFlag::Oxia),
    // 0 - 7
    lit('0'),
    lit('1'),
    lit('2'),
    lit('3'),
    lit('4'),
    lit('5'),
    lit('6'),
    lit('7'),
    // 8  9  :  ;  <  =  >  ?
    lit('8'),
    lit('9'),
    lit(':'),
    lit(';'),
    open(EscapeClass::Quasibracket),
    accent(AccentFlag::Perispomeni),
    close(EscapeClass::Quasibracket),
    lit('?'),
    // @  A  B  C  D  E  F  G
    open(EscapeClass::Page),
    ascii_letter(b'A'),
    ascii_letter(b'B'),
    ascii_letter(b'C'),
    ascii_letter(b'D'),
    ascii_letter(b'E'),
    ascii_letter(b'F'),
    ascii_letter(b'G'),
    // H  I  J  K  L  M  N  O
    ascii_letter(b'H'),
    ascii_letter(b'I'),
    ascii_letter(b'J'),
    ascii_letter(b'K'),
    ascii_letter(b'L'),
    ascii_letter(b'M'),
    ascii_letter(b'N'),
    ascii_letter(b'O'),
    // P  Q  R  S  T  U  V  W
    ascii_letter(b'P'),
    ascii_letter(b'Q'),
    ascii_letter(b'R'),
    ascii_letter(b'S'),
    ascii_letter(b'T'),
    ascii_letter(b'U'),
    ascii_letter(b'V'),
    ascii_letter(b'W'),
    // X  Y  Z  [  \  ]  ^  _
    ascii_letter(b'X'),
    ascii_letter(b'Y'),
    ascii_letter(b'Z'),
    open(EscapeClass::Bracket),
    accent(AccentFlag::Varia),
    close(EscapeClass::Bracket),
    open(EscapeClass::TabHalf),
    Code::Nothing,
    // `  a  b  c  d  e  f  g
    Code::Nothing,
    ascii_letter(b'a'),
    ascii_letter(b'b'),
    ascii_letter(b'c'),
    ascii_letter(b'd'),
    ascii_letter(b'e'),
    ascii_letter(b'f'),
    ascii_letter(b'g'),
    // h  i  j  k  l  m  n  o
    ascii_letter(b'h'),
    ascii_letter(b'i'),
    ascii_letter(b'j'),
    ascii_letter(b'k'),
    ascii_letter(b'l'),
    ascii_letter(b'm'),
    ascii_letter(b'n'),
    ascii_letter(b'o'),
    // p  q  r  s  t  u  v  w
    ascii_letter(b'p'),
    ascii_letter(b'q'),
    ascii_letter(b'r'),
    ascii_letter(b's'),
    ascii_letter(b't'),
    ascii_letter(b'u'),
    ascii_letter(b'v'),
    ascii_letter(b'w'),
    // x  y  z  {  |  }  ~  DEL
    ascii_letter(b'x'),
    ascii_letter(b'y'),
    ascii_letter(b'z'),
    open(EscapeClass::Nontext),
    accent(AccentFlag::Ypogegrammeni),
    close(EscapeClass::Nontext),
    Code::Nothing,
    Code::Nothing,
];

/// Whether `byte` is inside the translation domain.
pub const fn in_domain(byte: u8) -> bool {
    byte >= DOMAIN_START && byte <= DOMAIN_END
}

/// Translate one byte under the given alphabet.
///
/// Returns `None` for bytes outside `0x20..=0x7f`; those belong to the
/// framing layer and must never reach the engine.
///
/// Under the Roman alphabet only the escape introducers keep their meaning;
/// backtick and DEL are dropped and every other byte is a literal.
pub fn translate(alphabet: Alphabet, byte: u8) -> Option<Code> {
    if !in_domain(byte) {
        return None;
    }
    let code = HELLENIC[(byte - DOMAIN_START) as usize];
    Some(match alphabet {
        Alphabet::Hellenic => code,
        Alphabet::Roman => match code {
            Code::Escape(_) => code,
            _ if byte == b'`' || byte == DOMAIN_END => Code::Nothing,
            _ => Code::Literal(byte as char),
        },
    })
}
