//! Loop-construct recognizer
//!
//! This module scans a token stream for `for`, `while` and `do`/`while`
//! constructs and checks each against a fixed token skeleton:
//! - [`recognizer`]: the [`LoopRecognizer`] cursor, options and helpers
//! - [`loops`]: the per-kind skeleton checks
//! - [`outcome`]: [`ParseOutcome`] / [`LoopKind`] results
//!
//! Everything outside a loop header or body (declarations, expressions,
//! function bodies) is stepped over one token at a time and never parsed.

pub mod loops;
pub mod outcome;
pub mod recognizer;

pub use outcome::{LoopKind, ParseOutcome};
pub use recognizer::{LineAttribution, LoopRecognizer, RecognizerOptions, SkipStrategy};

use crate::lexer::Token;

/// Run the recognizer over `tokens` once.
pub fn recognize_loops(tokens: &[Token], options: RecognizerOptions) -> Vec<ParseOutcome> {
    LoopRecognizer::new(tokens, options).recognize()
}
