//! Stage orchestration
//!
//! ```text
//! raw lines → Normalizer → Tokenizer (+ ReservedWordTable) → LoopRecognizer
//! ```
//!
//! Stages run strictly one after another: every line is normalised before
//! tokenizing starts, and the recognizer only runs once the whole token
//! stream exists. Each stage's results are handed to the [`ReportSink`] as
//! soon as the stage finishes.

use crate::error::{Channel, Error, Result};
use crate::lexer::{NormalizedLine, Normalizer, ReservedWordTable, Token, Tokenizer};
use crate::parser::{recognize_loops, ParseOutcome, RecognizerOptions};
use crate::report::{ChannelPaths, FileSink, ReportSink, Summary};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub normalized: Vec<NormalizedLine>,
    pub tokens: Vec<Token>,
    pub outcomes: Vec<ParseOutcome>,
    /// Physical lines read from the raw source
    pub source_lines: usize,
}

impl PipelineOutput {
    pub fn summary(&self) -> Summary {
        Summary::collect(self.source_lines, &self.tokens, &self.outcomes)
    }
}

pub struct Pipeline {
    table: ReservedWordTable,
    options: RecognizerOptions,
}

impl Pipeline {
    pub fn new(options: RecognizerOptions) -> Self {
        Self {
            table: ReservedWordTable::new(),
            options,
        }
    }

    pub fn table(&self) -> &ReservedWordTable {
        &self.table
    }

    /// Run every stage over `reader`, reporting each channel to `sink`.
    ///
    /// `source` names the raw source channel in errors.
    pub fn run<R: BufRead>(
        &self,
        mut reader: R,
        source: &Path,
        sink: &mut dyn ReportSink,
    ) -> Result<PipelineOutput> {
        let mut normalizer = Normalizer::new();
        let mut normalized = Vec::new();
        let mut source_lines = 0;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::channel(Channel::RawSource, source, e))?;
            if read == 0 {
                break;
            }
            source_lines += 1;

            let line = decode_line(&mut buf);
            if matches!(line, Cow::Owned(_)) {
                log::warn!(
                    "{}:{}: invalid UTF-8 replaced",
                    source.display(),
                    source_lines
                );
            }
            if let Some(retained) = normalizer.next_line(&line) {
                sink.normalized_line(&retained)?;
                normalized.push(retained);
            }
        }
        if normalizer.in_block_comment() {
            log::warn!("{}: block comment is never closed", source.display());
        }
        log::info!(
            "normalized {} of {} line(s)",
            normalized.len(),
            source_lines
        );

        let tokens = Tokenizer::new(&self.table).tokenize(&normalized);
        for token in &tokens {
            sink.token(token)?;
        }
        log::info!("produced {} token(s)", tokens.len());

        sink.reserved_table(&self.table)?;

        let outcomes = recognize_loops(&tokens, self.options);
        for outcome in &outcomes {
            sink.outcome(outcome)?;
        }
        sink.finish()?;

        Ok(PipelineOutput {
            normalized,
            tokens,
            outcomes,
            source_lines,
        })
    }

    /// Run over an in-memory source text
    pub fn run_str(&self, source: &str, sink: &mut dyn ReportSink) -> Result<PipelineOutput> {
        self.run(source.as_bytes(), Path::new("<memory>"), sink)
    }

    /// Open `path` as the raw source channel and run over it
    pub fn run_file(&self, path: &Path, sink: &mut dyn ReportSink) -> Result<PipelineOutput> {
        let reader = open_source(path)?;
        self.run(reader, path, sink)
    }

    /// Run over `path`, writing every channel to `paths`.
    ///
    /// The source is opened before any output file is created, so a bad input
    /// path leaves earlier results in place.
    pub fn run_to_files(&self, path: &Path, paths: &ChannelPaths) -> Result<PipelineOutput> {
        let reader = open_source(path)?;
        let mut sink = FileSink::create(paths)?;
        self.run(reader, path, &mut sink)
    }
}

fn open_source(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| Error::channel(Channel::RawSource, path, e))?;
    log::info!("reading {}", path.display());
    Ok(BufReader::new(file))
}

/// Strip the line terminator and decode, replacing invalid UTF-8.
fn decode_line(buf: &mut Vec<u8>) -> Cow<'_, str> {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    String::from_utf8_lossy(buf)
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(RecognizerOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemorySink;

    #[test]
    fn test_round_trip_declaration() {
        let mut sink = MemorySink::new();
        let output = Pipeline::default()
            .run_str("int   x = 5; // set x", &mut sink)
            .unwrap();

        assert_eq!(
            sink.tokens,
            vec![
                "RESERVED: int",
                "IDENTIFIER: x",
                "DELIMITER: =",
                "NUMBER: 5",
                "DELIMITER: ;",
            ]
        );
        assert_eq!(sink.normalized, vec!["int x = 5; "]);
        assert!(output.outcomes.is_empty());
        assert!(!sink.reserved_table.is_empty());
    }

    #[test]
    fn test_all_channels_produced_despite_errors() {
        let mut sink = MemorySink::new();
        let output = Pipeline::default()
            .run_str("while ( x > 0 { x = x - 1 ; }", &mut sink)
            .unwrap();

        assert_eq!(output.source_lines, 1);
        assert_eq!(sink.parse_results, vec!["Error at Line 1: Expected ) but found {"]);
        assert_eq!(sink.tokens.len(), output.tokens.len());
        assert!(!sink.reserved_table.is_empty());
    }

    #[test]
    fn test_invalid_utf8_in_comment_is_not_fatal() {
        let mut sink = MemorySink::new();
        let output = Pipeline::default()
            .run(
                &b"// caf\xe9\r\nwhile (x) { }\n"[..],
                Path::new("latin1.c"),
                &mut sink,
            )
            .unwrap();

        assert_eq!(output.source_lines, 2);
        assert_eq!(sink.normalized, vec!["while (x) { }"]);
        assert_eq!(sink.parse_results, vec!["While Loop (Line 2)"]);
    }

    #[test]
    fn test_missing_input_is_channel_failure() {
        let mut sink = MemorySink::new();
        let missing = std::env::temp_dir().join("loopscan-missing-input.c");
        let err = Pipeline::default().run_file(&missing, &mut sink).unwrap_err();
        assert!(matches!(
            err,
            Error::Channel {
                channel: Channel::RawSource,
                ..
            }
        ));
    }
}
