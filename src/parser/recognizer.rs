//! Loop recognizer core
//!
//! This module provides the [`LoopRecognizer`] struct: a single forward-only
//! cursor over a borrowed token stream, plus the cursor helpers the skeleton
//! checks in [`loops`](super::loops) are built from.
//!
//! # State machine
//!
//! ```text
//! Scanning ──for/while/do──▶ skeleton check ──▶ Scanning
//!    │
//!    └── cursor exhausted ──▶ Done
//! ```
//!
//! The cursor never moves backwards. A failed expect step records an error
//! and leaves the cursor where it is; there is no resynchronisation.

use super::outcome::{LoopKind, ParseOutcome};
use crate::lexer::Token;

/// Lexeme that advances the line counter in [`LineAttribution::Marker`] mode
pub const NEWLINE_MARKER: &str = "\n";

/// How the recognizer finds the end of a skipped region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkipStrategy {
    /// Count nested parens/braces and stop at the closer at depth zero
    #[default]
    Nested,
    /// Stop at the first occurrence of the target lexeme
    FirstMatch,
}

/// Where outcome line numbers come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAttribution {
    /// The physical source line carried by each token
    #[default]
    Source,
    /// A counter starting at 1 that advances only on [`NEWLINE_MARKER`] tokens
    Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecognizerOptions {
    pub skip: SkipStrategy,
    pub lines: LineAttribution,
}

pub struct LoopRecognizer<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) position: usize,
    pub(crate) options: RecognizerOptions,
    marker_line: usize,
    outcomes: Vec<ParseOutcome>,
}

impl<'a> LoopRecognizer<'a> {
    pub fn new(tokens: &'a [Token], options: RecognizerOptions) -> Self {
        Self {
            tokens,
            position: 0,
            options,
            marker_line: 1,
            outcomes: Vec::new(),
        }
    }

    /// Scan the whole stream, returning one or more outcomes per top-level
    /// loop keyword in scan order.
    pub fn recognize(mut self) -> Vec<ParseOutcome> {
        while let Some(token) = self.peek() {
            if token.is(NEWLINE_MARKER) {
                self.marker_line += 1;
            }

            match LoopKind::from_keyword(token.lexeme()) {
                Some(kind) => self.parse_loop(kind),
                None => self.position += 1,
            }
        }

        log::info!(
            "recognized {} loop construct(s), {} error(s)",
            self.outcomes.iter().filter(|o| o.is_success()).count(),
            self.outcomes.iter().filter(|o| !o.is_success()).count()
        );
        self.outcomes
    }

    /// Check one skeleton. Records `Success` only if every expect step matched.
    fn parse_loop(&mut self, kind: LoopKind) {
        let line = self.current_line();
        let recorded = self.outcomes.len();

        match kind {
            LoopKind::ForLoop => self.parse_for(),
            LoopKind::WhileLoop => self.parse_while(),
            LoopKind::DoWhileLoop => self.parse_do_while(),
        }

        if self.outcomes.len() == recorded {
            log::debug!("{} at line {}", kind, line);
            self.outcomes.push(ParseOutcome::Success { kind, line });
        }
    }

    // ===== Cursor helpers =====

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn check(&self, lexeme: &str) -> bool {
        self.peek().is_some_and(|t| t.is(lexeme))
    }

    /// Consume `expected` or record a mismatch without consuming anything.
    pub(crate) fn expect(&mut self, expected: &str) {
        if self.check(expected) {
            self.advance();
            return;
        }

        let found = self.peek().map_or("end of input", |t| t.lexeme());
        let message = format!("Expected {} but found {}", expected, found);
        let line = self.current_line();
        log::warn!("line {}: {}", line, message);
        self.outcomes.push(ParseOutcome::Error { message, line });
    }

    /// Line to attach to an outcome recorded at the cursor
    pub(crate) fn current_line(&self) -> usize {
        match self.options.lines {
            LineAttribution::Marker => self.marker_line,
            LineAttribution::Source => self
                .peek()
                .or_else(|| self.tokens.last())
                .map_or(1, Token::line),
        }
    }
}
