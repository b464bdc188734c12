// betacode-cli: shared utilities for the command-line converter.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use betacode_engine::{BetaError, Engine, Options};

/// Load engine options from a TOML file. Missing keys keep their defaults.
pub fn load_options(path: &Path) -> Result<Options> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_options(&content).with_context(|| format!("invalid options in {}", path.display()))
}

fn parse_options(content: &str) -> Result<Options> {
    Ok(toml::from_str(content)?)
}

/// An engine error located at a 1-based column of the current line.
#[derive(Debug, thiserror::Error)]
#[error("column {column}: {source}")]
pub struct ColumnError {
    pub column: usize,
    pub source: BetaError,
}

/// Line-oriented driver around one [`Engine`].
///
/// Each line has `\r` removed and TAB replaced by a space before it reaches
/// the engine, and ends with `finish` plus a newline. Alphabet state carries
/// over to the next line unless `reset_per_line` is set.
pub struct LineConverter {
    engine: Engine,
    reset_per_line: bool,
}

impl LineConverter {
    pub fn new(options: Options, reset_per_line: bool) -> Self {
        Self {
            engine: Engine::new(options),
            reset_per_line,
        }
    }

    /// Convert one line (without its terminator) into `out`, appending `\n`.
    pub fn convert_line(&mut self, raw: &[u8], out: &mut String) -> Result<(), ColumnError> {
        if self.reset_per_line {
            self.engine.reset();
        }
        for (i, byte) in clean_line(raw).enumerate() {
            if let Err(source) = self.engine.feed(byte, out) {
                self.engine.reset();
                return Err(ColumnError {
                    column: i + 1,
                    source,
                });
            }
        }
        self.engine.finish(out);
        out.push('\n');
        Ok(())
    }

    /// Convert everything `reader` yields into `writer`. `name` labels the
    /// input in error messages.
    pub fn convert_reader<R: BufRead, W: Write>(
        &mut self,
        name: &str,
        mut reader: R,
        writer: &mut W,
    ) -> Result<()> {
        let mut line = Vec::new();
        let mut out = String::new();
        let mut line_no = 0usize;

        loop {
            line.clear();
            let n = reader
                .read_until(b'\n', &mut line)
                .with_context(|| format!("failed to read {name}"))?;
            if n == 0 {
                break;
            }
            line_no += 1;
            if line.last() == Some(&b'\n') {
                line.pop();
            }

            out.clear();
            if let Err(e) = self.convert_line(&line, &mut out) {
                let byte = match e.source {
                    BetaError::OutOfDomain { byte, .. } => byte,
                };
                log::debug!("{name}:{line_no}: engine error {}", e.source);
                anyhow::bail!(
                    "{name}:{line_no}:{}: byte {byte:#04x} is outside the beta code range",
                    e.column
                );
            }
            writer
                .write_all(out.as_bytes())
                .with_context(|| format!("failed to write output for {name}"))?;
        }

        writer
            .flush()
            .with_context(|| format!("failed to write output for {name}"))?;
        Ok(())
    }
}

fn clean_line(raw: &[u8]) -> impl Iterator<Item = u8> + '_ {
    raw.iter()
        .copied()
        .filter(|&b| b != b'\r')
        .map(|b| if b == b'\t' { b' ' } else { b })
}
