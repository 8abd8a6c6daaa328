//! Run configuration
//!
//! Defaults reproduce the classic file layout: the raw source is read from
//! `input`, and the four report channels are written to `codeoutput`,
//! `output`, `symbol_table.txt` and `parse_output` in the working directory.

use crate::error::{Error, Result};
use crate::parser::{LineAttribution, RecognizerOptions, SkipStrategy};
use crate::report::ChannelPaths;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "input";
pub const DEFAULT_NORMALIZED: &str = "codeoutput";
pub const DEFAULT_TOKENS: &str = "output";
pub const DEFAULT_RESERVED_TABLE: &str = "symbol_table.txt";
pub const DEFAULT_PARSE_RESULTS: &str = "parse_output";

pub const USAGE: &str = "\
Usage: loopscan [input] [options]

Options:
  --out-dir <dir>       Directory for relative output paths
  --normalized <path>   Normalized source output (default: codeoutput)
  --tokens <path>       Token report output (default: output)
  --symbols <path>      Reserved-table dump output (default: symbol_table.txt)
  --parse <path>        Parse results output (default: parse_output)
  --naive-skip          Skip to the first matching delimiter, ignoring nesting
  --marker-lines        Count lines only on explicit newline-marker tokens
  --tui                 Browse the results in a terminal viewer
  -v | --verbose        Debug-level logging (RUST_LOG still takes precedence)
  -h | --help           Show this help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub out_dir: Option<PathBuf>,
    pub normalized: PathBuf,
    pub tokens: PathBuf,
    pub reserved_table: PathBuf,
    pub parse_results: PathBuf,
    pub recognizer: RecognizerOptions,
    pub tui: bool,
    pub verbose: bool,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            out_dir: None,
            normalized: PathBuf::from(DEFAULT_NORMALIZED),
            tokens: PathBuf::from(DEFAULT_TOKENS),
            reserved_table: PathBuf::from(DEFAULT_RESERVED_TABLE),
            parse_results: PathBuf::from(DEFAULT_PARSE_RESULTS),
            recognizer: RecognizerOptions::default(),
            tui: false,
            verbose: false,
            help: false,
        }
    }
}

impl Config {
    /// Parse command-line arguments (without the program name).
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut input_seen = false;
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out-dir" => config.out_dir = Some(value(&mut args, &arg)?),
                "--normalized" => config.normalized = value(&mut args, &arg)?,
                "--tokens" => config.tokens = value(&mut args, &arg)?,
                "--symbols" => config.reserved_table = value(&mut args, &arg)?,
                "--parse" => config.parse_results = value(&mut args, &arg)?,
                "--naive-skip" => config.recognizer.skip = SkipStrategy::FirstMatch,
                "--marker-lines" => config.recognizer.lines = LineAttribution::Marker,
                "--tui" => config.tui = true,
                "-v" | "--verbose" => config.verbose = true,
                "-h" | "--help" => config.help = true,
                flag if flag.starts_with('-') => {
                    return Err(Error::Usage(format!("unknown option '{}'", flag)));
                }
                _ if input_seen => {
                    return Err(Error::Usage(format!("unexpected argument '{}'", arg)));
                }
                _ => {
                    config.input = PathBuf::from(&arg);
                    input_seen = true;
                }
            }
        }

        Ok(config)
    }

    /// Output paths with `--out-dir` applied to the relative ones
    pub fn channel_paths(&self) -> ChannelPaths {
        let dir = self.out_dir.as_deref();
        ChannelPaths {
            normalized: output_path(dir, &self.normalized),
            tokens: output_path(dir, &self.tokens),
            reserved_table: output_path(dir, &self.reserved_table),
            parse_results: output_path(dir, &self.parse_results),
        }
    }

    /// Default `log` filter level for this run
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<PathBuf> {
    args.next()
        .map(PathBuf::from)
        .ok_or_else(|| Error::Usage(format!("option '{}' needs a value", flag)))
}

/// Resolve `name` under `dir` unless it is already absolute
fn output_path(dir: Option<&Path>, name: &Path) -> PathBuf {
    match dir {
        Some(dir) if name.is_relative() => dir.join(name),
        _ => name.to_path_buf(),
    }
}
