//! Token model shared by the tokenizer and the loop recognizer

use std::fmt;

/// Category assigned to a lexeme by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    Reserved,
    Delimiter,
    Identifier,
    Number,
    StringLiteral,
    Unknown,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 6] = [
        TokenCategory::Reserved,
        TokenCategory::Delimiter,
        TokenCategory::Identifier,
        TokenCategory::Number,
        TokenCategory::StringLiteral,
        TokenCategory::Unknown,
    ];

    /// Upper-case label used by the token report
    pub fn label(self) -> &'static str {
        match self {
            TokenCategory::Reserved => "RESERVED",
            TokenCategory::Delimiter => "DELIMITER",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Number => "NUMBER",
            TokenCategory::StringLiteral => "STRING",
            TokenCategory::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified lexeme. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    lexeme: String,
    category: TokenCategory,
    line: usize,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, category: TokenCategory, line: usize) -> Self {
        Self {
            lexeme: lexeme.into(),
            category,
            line,
        }
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn category(&self) -> TokenCategory {
        self.category
    }

    /// 1-based physical source line the lexeme was read from
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is(&self, lexeme: &str) -> bool {
        self.lexeme == lexeme
    }
}

/// Token report form: `<CATEGORY>: <lexeme>`
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.lexeme)
    }
}
