// betacode: Convert beta code text to Unicode Greek.
//
// Reads each FILE in turn (stdin when none is given, or for `-`) and writes
// the converted text to stdout, one output line per input line.
//
// Usage:
//   betacode [OPTIONS] [FILE]...
//
// Options:
//   --config FILE          TOML file of engine options, applied before flags
//   --reset-per-line       Reset the engine at every line
//   --greek                Start in the Greek alphabet instead of Roman
//   --lunate               Write every contextual sigma as lunate sigma
//   --trailing-accents     Accents follow lowercase letters
//   --lowercase-capitals   Lowercase ASCII letters produce capitals
//   --log-level LEVEL      error, warn, info, debug, trace (default: warn)

use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use betacode_cli::{LineConverter, load_options};
use betacode_engine::{AccentPlacement, Options};
use clap::Parser;

/// Convert beta code text to Unicode Greek.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input files; `-` or no files reads stdin.
    files: Vec<PathBuf>,

    /// TOML file of engine options. Flags given on the command line win.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reset the engine at the start of every line.
    #[arg(long, default_value_t = false)]
    reset_per_line: bool,

    /// Start in the Greek alphabet, for text without a leading `$`.
    #[arg(long, default_value_t = false)]
    greek: bool,

    /// Write every contextual sigma as lunate sigma.
    #[arg(long, default_value_t = false)]
    lunate: bool,

    /// Accents follow lowercase letters (`a)/`) instead of preceding them.
    #[arg(long, default_value_t = false)]
    trailing_accents: bool,

    /// Lowercase ASCII letters produce capitals without `*`.
    #[arg(long, default_value_t = false)]
    lowercase_capitals: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn options(&self) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => load_options(path)?,
            None => Options::default(),
        };
        options.start_hellenic |= self.greek;
        options.lunate_sigma |= self.lunate;
        options.lowercase_capitals |= self.lowercase_capitals;
        if self.trailing_accents {
            options.accent_placement = AccentPlacement::Trailing;
        }
        Ok(options)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let options = cli.options()?;
    log::debug!("options: {options:?}");

    let mut converter = LineConverter::new(options, cli.reset_per_line);
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    if cli.files.is_empty() {
        return converter.convert_reader("<stdin>", io::stdin().lock(), &mut writer);
    }

    for path in &cli.files {
        if path.as_os_str() == "-" {
            converter.convert_reader("<stdin>", io::stdin().lock(), &mut writer)?;
            continue;
        }
        let file = std::fs::File::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        log::info!("converting {}", path.display());
        converter.convert_reader(&path.display().to_string(), BufReader::new(file), &mut writer)?;
    }
    Ok(())
}
