//! # Introduction
//!
//! loopscan is a small front end for a C-like language. It normalises raw
//! source text, splits it into classified tokens, and then checks every
//! top-level `for`, `while` and `do`/`while` construct against a fixed token
//! skeleton, reporting either the recognised loop or a line-tagged mismatch.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Normalizer → Tokenizer (+ ReservedWordTable) → LoopRecognizer → Sink
//! ```
//!
//! 1. [`lexer`]: comment stripping, the reserved-word table, tokenizing and
//!    classification into [`lexer::TokenCategory`] values.
//! 2. [`parser`]: the single-pass [`parser::LoopRecognizer`] producing
//!    [`parser::ParseOutcome`]s.
//! 3. [`pipeline`]: runs the stages in order and feeds a
//!    [`report::ReportSink`].
//! 4. [`report`]: output channels (files or memory) and the run
//!    [`report::Summary`].
//! 5. [`ui`]: ratatui-based viewer; not part of the stable library API.
//!
//! ## What is not parsed
//!
//! Expressions, declarations and function bodies outside loop headers are
//! stepped over token by token. There is no AST and no error recovery beyond
//! continuing the scan.

pub mod config;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod ui;

pub use error::{Error, Result};
