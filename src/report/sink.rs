//! Output channel sinks
//!
//! A [`ReportSink`] receives every structured result of a run, channel by
//! channel, in stream order. [`FileSink`] persists each channel to its own
//! file; [`MemorySink`] keeps the rendered lines in memory.

use crate::error::{Channel, Error, Result};
use crate::lexer::{NormalizedLine, ReservedWordTable, Token};
use crate::parser::ParseOutcome;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Header line of the reserved-table dump file
pub const RESERVED_TABLE_HEADER: &str = "Symbol Table Contents:";

pub trait ReportSink {
    fn normalized_line(&mut self, line: &NormalizedLine) -> Result<()>;

    fn token(&mut self, token: &Token) -> Result<()>;

    fn reserved_table(&mut self, table: &ReservedWordTable) -> Result<()>;

    fn outcome(&mut self, outcome: &ParseOutcome) -> Result<()>;

    /// Flush anything buffered. Called once after the last outcome.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Output paths of the four report channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPaths {
    pub normalized: PathBuf,
    pub tokens: PathBuf,
    pub reserved_table: PathBuf,
    pub parse_results: PathBuf,
}

/// One buffered output file
struct ChannelWriter {
    channel: Channel,
    path: PathBuf,
    writer: BufWriter<File>,
}

impl ChannelWriter {
    fn create(channel: Channel, path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::channel(channel, path, e))?;
        Ok(Self {
            channel,
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    fn write_line(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(|e| self.fail(e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.fail(e))
    }

    fn fail(&self, source: std::io::Error) -> Error {
        Error::channel(self.channel, &self.path, source)
    }
}

/// Writes every channel to its own file.
///
/// All files are created up front so an unwritable destination fails the run
/// before any stage starts. Files are closed when the sink is dropped,
/// whether or not the run succeeded.
pub struct FileSink {
    normalized: ChannelWriter,
    tokens: ChannelWriter,
    reserved_table: ChannelWriter,
    parse_results: ChannelWriter,
}

impl FileSink {
    pub fn create(paths: &ChannelPaths) -> Result<Self> {
        Ok(Self {
            normalized: ChannelWriter::create(Channel::NormalizedSource, &paths.normalized)?,
            tokens: ChannelWriter::create(Channel::TokenReport, &paths.tokens)?,
            reserved_table: ChannelWriter::create(Channel::ReservedTable, &paths.reserved_table)?,
            parse_results: ChannelWriter::create(Channel::ParseResults, &paths.parse_results)?,
        })
    }
}

impl ReportSink for FileSink {
    fn normalized_line(&mut self, line: &NormalizedLine) -> Result<()> {
        self.normalized.write_line(&line.text)
    }

    fn token(&mut self, token: &Token) -> Result<()> {
        self.tokens.write_line(token)
    }

    fn reserved_table(&mut self, table: &ReservedWordTable) -> Result<()> {
        self.reserved_table.write_line(RESERVED_TABLE_HEADER)?;
        for bucket in table.dump() {
            self.reserved_table.write_line(bucket)?;
        }
        Ok(())
    }

    fn outcome(&mut self, outcome: &ParseOutcome) -> Result<()> {
        self.parse_results.write_line(outcome)
    }

    fn finish(&mut self) -> Result<()> {
        self.normalized.flush()?;
        self.tokens.flush()?;
        self.reserved_table.flush()?;
        self.parse_results.flush()
    }
}

/// Collects each channel's rendered lines
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub normalized: Vec<String>,
    pub tokens: Vec<String>,
    pub reserved_table: Vec<String>,
    pub parse_results: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for MemorySink {
    fn normalized_line(&mut self, line: &NormalizedLine) -> Result<()> {
        self.normalized.push(line.text.clone());
        Ok(())
    }

    fn token(&mut self, token: &Token) -> Result<()> {
        self.tokens.push(token.to_string());
        Ok(())
    }

    fn reserved_table(&mut self, table: &ReservedWordTable) -> Result<()> {
        self.reserved_table
            .extend(table.dump().iter().map(ToString::to_string));
        Ok(())
    }

    fn outcome(&mut self, outcome: &ParseOutcome) -> Result<()> {
        self.parse_results.push(outcome.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenCategory;
    use crate::parser::LoopKind;

    #[test]
    fn test_memory_sink_renders_channels() {
        let mut sink = MemorySink::new();
        sink.normalized_line(&NormalizedLine {
            number: 1,
            text: "int x;".to_string(),
        })
        .unwrap();
        sink.token(&Token::new("x", TokenCategory::Identifier, 1)).unwrap();
        sink.outcome(&ParseOutcome::Success {
            kind: LoopKind::WhileLoop,
            line: 2,
        })
        .unwrap();
        sink.reserved_table(&ReservedWordTable::new()).unwrap();

        assert_eq!(sink.normalized, vec!["int x;"]);
        assert_eq!(sink.tokens, vec!["IDENTIFIER: x"]);
        assert_eq!(sink.parse_results, vec!["While Loop (Line 2)"]);
        assert!(sink.reserved_table.iter().all(|l| l.starts_with("Index ")));
    }

    #[test]
    fn test_file_sink_fails_on_missing_directory() {
        let missing = std::env::temp_dir()
            .join("loopscan-no-such-dir")
            .join("nested");
        let paths = ChannelPaths {
            normalized: missing.join("codeoutput"),
            tokens: missing.join("output"),
            reserved_table: missing.join("symbol_table.txt"),
            parse_results: missing.join("parse_output"),
        };

        match FileSink::create(&paths) {
            Err(Error::Channel { channel, .. }) => assert_eq!(channel, Channel::NormalizedSource),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("expected a channel failure"),
        }
    }
}
