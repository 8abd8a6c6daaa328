//! Front end: raw text → normalised lines → classified token stream
//!
//! - [`normalizer`]: comment stripping and whitespace canonicalisation
//! - [`reserved`]: the fixed reserved-word hash table
//! - [`tokenizer`]: lexeme splitting and classification
//! - [`token`]: the [`Token`] / [`TokenCategory`] model

pub mod normalizer;
pub mod reserved;
pub mod token;
pub mod tokenizer;

pub use normalizer::{normalize_source, NormalizedLine, Normalizer};
pub use reserved::{BucketDump, ReservedWordTable};
pub use token::{Token, TokenCategory};
pub use tokenizer::{split_lexemes, Tokenizer};
