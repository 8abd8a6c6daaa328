//! Error types for the loopscan pipeline
//!
//! Only channel-level failures abort a run. Lexemes that match no category
//! become [`TokenCategory::Unknown`](crate::lexer::TokenCategory::Unknown) and
//! grammar mismatches are recorded as
//! [`ParseOutcome::Error`](crate::parser::ParseOutcome::Error) entries, so
//! neither appears here.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The abstract input/output channels of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    RawSource,
    NormalizedSource,
    TokenReport,
    ReservedTable,
    ParseResults,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::RawSource => "raw source",
            Channel::NormalizedSource => "normalized source",
            Channel::TokenReport => "token report",
            Channel::ReservedTable => "reserved-table dump",
            Channel::ParseResults => "parse results",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// A channel could not be opened, read or written. Fatal for the run.
    #[error("{channel} channel failed ({}): {source}", path.display())]
    Channel {
        channel: Channel,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl Error {
    pub fn channel(channel: Channel, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Channel {
            channel,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
