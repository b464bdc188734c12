// Byte-at-a-time beta code state machine.
//
// Per byte, in order:
//   1. reject bytes outside 0x20..=0x7f
//   2. a pending escape swallows digits; any other byte completes it
//   3. a held letter (sigma, or any letter with trailing accents) takes a
//      sigma form digit or a trailing accent; a held sigma also waits out
//      leading accents and `*`; otherwise it is released using this byte as
//      lookahead
//   4. the byte's table code is applied
//
// Nothing here allocates beyond the caller's output buffer.

use betacode_core::accent::{AccentFlag, AccentSet};
use betacode_core::mode::{Alphabet, Mode};

use crate::BetaError;
use crate::base::{self, Code, Escape};
use crate::escape::{self, Selection};
use crate::letter::Letter;
use crate::options::{AccentPlacement, Options};
use crate::sigma::SigmaForm;
use crate::tables;

/// Escape introducer waiting for the end of its decimal argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingEscape {
    escape: Escape,
    arg: Option<u32>,
}

impl PendingEscape {
    fn push_digit(self, byte: u8) -> Self {
        let digit = u32::from(byte - b'0');
        let arg = self.arg.unwrap_or(0).saturating_mul(10).saturating_add(digit);
        Self {
            arg: Some(arg),
            ..self
        }
    }
}

/// A decoded letter whose output waits for the next byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Held {
    letter: Letter,
    capital: bool,
    accents: AccentSet,
}

/// Transliteration state for one input stream.
///
/// Feed bytes with [`feed`](Self::feed) and call [`finish`](Self::finish)
/// at the end of the stream (or of a record) to flush the held letter.
/// An engine must not be shared between streams; create one per stream or
/// [`reset`](Self::reset) it between documents.
#[derive(Debug, Clone)]
pub struct Engine {
    options: Options,
    alphabet: Alphabet,
    /// `*` seen, waiting for its letter.
    capital: bool,
    /// Accents written before their letter.
    accents: AccentSet,
    escape: Option<PendingEscape>,
    held: Option<Held>,
    /// Bytes accepted since construction or the last reset.
    offset: usize,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl Engine {
    pub fn new(options: Options) -> Self {
        let alphabet = if options.start_hellenic {
            Alphabet::Hellenic
        } else {
            Alphabet::Roman
        };
        Self {
            options,
            alphabet,
            capital: false,
            accents: AccentSet::new(),
            escape: None,
            held: None,
            offset: 0,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Number of bytes accepted since construction or the last reset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The current interpretation mode.
    pub fn mode(&self) -> Mode {
        if let Some(pending) = self.escape {
            return pending.escape.class.mode();
        }
        match self.alphabet {
            Alphabet::Hellenic if self.capital => Mode::HellenicUpper,
            alphabet => Mode::from(alphabet),
        }
    }

    /// Return to the initial state, keeping the options.
    pub fn reset(&mut self) {
        *self = Self::new(self.options);
    }

    /// Consume one byte, appending any output to `out`.
    ///
    /// Bytes outside `0x20..=0x7f` are rejected and leave the state untouched.
    pub fn feed(&mut self, byte: u8, out: &mut String) -> Result<(), BetaError> {
        let offset = self.offset;
        if !base::in_domain(byte) {
            return Err(BetaError::OutOfDomain { byte, offset });
        }
        self.offset += 1;

        if let Some(pending) = self.escape.take() {
            if byte.is_ascii_digit() {
                self.escape = Some(pending.push_digit(byte));
                return Ok(());
            }
            self.complete_escape(pending, out);
        }

        let Some(code) = base::translate(self.alphabet, byte) else {
            return Err(BetaError::OutOfDomain { byte, offset });
        };

        if let Some(mut held) = self.held.take() {
            if held.letter == Letter::Sigma {
                if let Some(form) = SigmaForm::from_digit(byte) {
                    emit_sigma(held, form, out);
                    return Ok(());
                }
            }
            match (self.options.accent_placement, code) {
                (AccentPlacement::Trailing, Code::Accent(flag)) => {
                    add_accent(&mut held.accents, flag);
                    self.held = Some(held);
                    return Ok(());
                }
                // Leading accents and `*` belong to the next letter of the
                // same word, so the sigma waits for that letter.
                (AccentPlacement::Leading, Code::Accent(_) | Code::Capital)
                    if held.letter == Letter::Sigma =>
                {
                    self.held = Some(held);
                }
                _ => self.release(held, matches!(code, Code::Letter(_)), out),
            }
        }

        match code {
            Code::Nothing => self.discard_accents(),
            Code::Literal(c) => {
                self.discard_accents();
                self.capital = false;
                out.push(c);
            }
            Code::Capital => self.capital = true,
            Code::Accent(flag) => add_accent(&mut self.accents, flag),
            Code::Escape(escape) => {
                self.discard_accents();
                self.capital = false;
                self.escape = Some(PendingEscape { escape, arg: None });
            }
            Code::Letter(letter) => {
                let capital =
                    self.capital || (self.options.lowercase_capitals && byte.is_ascii_lowercase());
                self.capital = false;
                let held = Held {
                    letter,
                    capital,
                    accents: self.accents.take(),
                };
                if letter == Letter::Sigma
                    || self.options.accent_placement == AccentPlacement::Trailing
                {
                    self.held = Some(held);
                } else {
                    self.release(held, false, out);
                }
            }
        }
        Ok(())
    }

    /// Feed every byte of `input`, stopping at the first rejected byte.
    pub fn feed_all(&mut self, input: &[u8], out: &mut String) -> Result<(), BetaError> {
        for &byte in input {
            self.feed(byte, out)?;
        }
        Ok(())
    }

    /// Flush at end of stream or record: completes a pending escape, emits a
    /// held letter as word-final and drops dangling accents. The alphabet is
    /// kept.
    pub fn finish(&mut self, out: &mut String) {
        if let Some(pending) = self.escape.take() {
            self.complete_escape(pending, out);
        }
        if let Some(held) = self.held.take() {
            self.release(held, false, out);
        }
        self.discard_accents();
        self.capital = false;
    }

    fn complete_escape(&mut self, pending: PendingEscape, out: &mut String) {
        let Escape { class, closing } = pending.escape;
        match escape::select(class, closing, pending.arg) {
            Selection::Switch(alphabet) => {
                log::trace!("alphabet {:?} -> {alphabet:?}", self.alphabet);
                self.alphabet = alphabet;
            }
            Selection::Emit(chars) => out.extend(chars),
            Selection::Nothing => {}
        }
    }

    fn release(&self, held: Held, next_is_letter: bool, out: &mut String) {
        match held.letter {
            Letter::Sigma => {
                let form = SigmaForm::contextual(next_is_letter, self.options.lunate_sigma);
                emit_sigma(held, form, out);
            }
            letter => tables::compose(letter, held.capital, held.accents, out),
        }
    }

    fn discard_accents(&mut self) {
        if !self.accents.is_empty() {
            log::trace!("discarding dangling accents {:?}", self.accents);
            self.accents.clear();
        }
    }
}

/// Sigma takes no diacritics; any it collected are dropped.
fn emit_sigma(held: Held, form: SigmaForm, out: &mut String) {
    if !held.accents.is_empty() {
        log::trace!("dropping accents {:?} on sigma", held.accents);
    }
    out.push(form.glyph(held.capital));
}

/// Add a flag, keeping the first flag of each group.
fn add_accent(accents: &mut AccentSet, flag: AccentFlag) {
    if let Err(existing) = accents.insert(flag) {
        log::debug!(
            "ignoring {flag:?}: {:?} group already holds {existing:?}",
            flag.group()
        );
    }
}
