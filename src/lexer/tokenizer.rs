//! Tokenizer and classifier
//!
//! A normalised line is split into raw lexemes, then each lexeme is assigned a
//! [`TokenCategory`]. Splitting happens on whitespace and around every
//! character in [`SPLIT_CHARS`], so `x=5;` yields `x`, `=`, `5`, `;`. A
//! double-quoted run is kept whole, which keeps `"a;b"` a single lexeme.
//!
//! Classification precedence (first match wins):
//!
//! ```text
//! Reserved → Delimiter → Identifier → Number → StringLiteral → Unknown
//! ```

use super::normalizer::NormalizedLine;
use super::reserved::ReservedWordTable;
use super::token::{Token, TokenCategory};
use lazy_static::lazy_static;
use regex::Regex;

/// Characters that always form a lexeme of their own
pub const SPLIT_CHARS: &[char] = &['{', '}', '(', ')', ';', ':', ',', '<', '>', '+', '=', '-'];

/// Single-symbol punctuation and operators classified as delimiters
pub const DELIMITERS: &[&str] = &[
    "(", ")", "[", "%", "]", "{", "}", ";", ",", ".", ":", "!", "?", "+", "-", "*", "/", "=",
    "<", ">", "&", "|", "^", "~",
];

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex =
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid");
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("number pattern is valid");
}

/// Splits one line into raw lexemes
struct Splitter {
    input: Vec<char>,
    position: usize,
}

impl Splitter {
    fn new(text: &str) -> Self {
        Self {
            input: text.chars().collect(),
            position: 0,
        }
    }

    fn lexemes(mut self) -> Vec<String> {
        let mut lexemes = Vec::new();

        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            let Some(ch) = self.peek() else {
                break;
            };

            if SPLIT_CHARS.contains(&ch) {
                self.advance();
                lexemes.push(ch.to_string());
            } else {
                lexemes.push(self.word());
            }
        }

        lexemes
    }

    /// Read up to the next whitespace or split character, keeping quoted
    /// runs intact.
    fn word(&mut self) -> String {
        let mut word = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || SPLIT_CHARS.contains(&ch) {
                break;
            }
            self.advance();
            word.push(ch);
            if ch == '"' {
                self.quoted(&mut word);
            }
        }

        word
    }

    /// Consume through the closing quote. A quote left open on this line is
    /// an ordinary character and the text after it splits as usual.
    fn quoted(&mut self, word: &mut String) {
        let Some(end) = self.closing_quote() else {
            return;
        };
        word.extend(&self.input[self.position..=end]);
        self.position = end + 1;
    }

    /// Index of the `"` closing a run opened just before the cursor
    fn closing_quote(&self) -> Option<usize> {
        let mut position = self.position;
        while let Some(&ch) = self.input.get(position) {
            match ch {
                '\\' => position += 2,
                '"' => return Some(position),
                _ => position += 1,
            }
        }
        None
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}

/// Split `text` into raw lexemes. Empty lexemes never appear.
pub fn split_lexemes(text: &str) -> Vec<String> {
    Splitter::new(text).lexemes()
}

/// Classifier bound to a reserved-word table
pub struct Tokenizer<'t> {
    table: &'t ReservedWordTable,
}

impl<'t> Tokenizer<'t> {
    pub fn new(table: &'t ReservedWordTable) -> Self {
        Self { table }
    }

    pub fn classify(&self, lexeme: &str) -> TokenCategory {
        if self.table.contains(lexeme) {
            TokenCategory::Reserved
        } else if DELIMITERS.contains(&lexeme) {
            TokenCategory::Delimiter
        } else if IDENTIFIER_PATTERN.is_match(lexeme) {
            TokenCategory::Identifier
        } else if NUMBER_PATTERN.is_match(lexeme) {
            TokenCategory::Number
        } else if is_string_literal(lexeme) {
            TokenCategory::StringLiteral
        } else {
            TokenCategory::Unknown
        }
    }

    /// Tokenize one normalised line; every token is tagged with `line`.
    pub fn tokenize_line(&self, text: &str, line: usize) -> Vec<Token> {
        split_lexemes(text)
            .into_iter()
            .map(|lexeme| {
                let category = self.classify(&lexeme);
                let token = Token::new(lexeme, category, line);
                if category == TokenCategory::Unknown {
                    log::warn!("line {}: unclassified lexeme `{}`", line, token.lexeme());
                } else {
                    log::debug!("line {}: {}", line, token);
                }
                token
            })
            .collect()
    }

    /// Tokenize every normalised line, in order, into one stream.
    pub fn tokenize(&self, lines: &[NormalizedLine]) -> Vec<Token> {
        lines
            .iter()
            .flat_map(|line| self.tokenize_line(&line.text, line.number))
            .collect()
    }
}

fn is_string_literal(lexeme: &str) -> bool {
    lexeme.len() > 1 && lexeme.starts_with('"') && lexeme.ends_with('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(text: &str) -> Vec<(String, TokenCategory)> {
        let table = ReservedWordTable::new();
        Tokenizer::new(&table)
            .tokenize_line(text, 1)
            .into_iter()
            .map(|t| (t.lexeme().to_string(), t.category()))
            .collect()
    }

    #[test]
    fn test_split_around_delimiters() {
        assert_eq!(
            split_lexemes("x=a+b;"),
            vec!["x", "=", "a", "+", "b", ";"]
        );
        assert_eq!(
            split_lexemes(" for(i=0;i<10;i++){} "),
            vec!["for", "(", "i", "=", "0", ";", "i", "<", "10", ";", "i", "+", "+", ")", "{", "}"]
        );
    }

    #[test]
    fn test_non_split_punctuation_stays_attached() {
        assert_eq!(split_lexemes("a*b [i] x.y"), vec!["a*b", "[i]", "x.y"]);
    }

    #[test]
    fn test_quoted_run_is_one_lexeme() {
        assert_eq!(split_lexemes("s = \"a;b c\";"), vec!["s", "=", "\"a;b c\"", ";"]);
        assert_eq!(split_lexemes("\"say \\\"hi\\\"\""), vec!["\"say \\\"hi\\\"\""]);
        assert_eq!(split_lexemes("\"open ; end"), vec!["\"open", ";", "end"]);
    }

    #[test]
    fn test_unclosed_quote_does_not_swallow_delimiters() {
        assert_eq!(
            split_lexemes("while (c != '\"') { c = next(); }"),
            vec![
                "while", "(", "c", "!", "=", "'\"'", ")", "{", "c", "=", "next", "(", ")", ";",
                "}",
            ]
        );
    }

    #[test]
    fn test_classification_precedence() {
        use TokenCategory::*;
        assert_eq!(
            categories("int x = 5;"),
            vec![
                ("int".to_string(), Reserved),
                ("x".to_string(), Identifier),
                ("=".to_string(), Delimiter),
                ("5".to_string(), Number),
                (";".to_string(), Delimiter),
            ]
        );
    }

    #[test]
    fn test_include_directive() {
        use TokenCategory::*;
        let got: Vec<TokenCategory> = categories("#include <stdio.h>")
            .into_iter()
            .map(|(_, c)| c)
            .collect();
        assert_eq!(got, vec![Reserved, Delimiter, Reserved, Delimiter]);
    }

    #[test]
    fn test_numbers() {
        let table = ReservedWordTable::new();
        let tokenizer = Tokenizer::new(&table);
        assert_eq!(tokenizer.classify("42"), TokenCategory::Number);
        assert_eq!(tokenizer.classify("3.14"), TokenCategory::Number);
        assert_eq!(tokenizer.classify("3."), TokenCategory::Unknown);
        assert_eq!(tokenizer.classify("1e5"), TokenCategory::Unknown);
        assert_eq!(tokenizer.classify("0x1F"), TokenCategory::Unknown);
    }

    #[test]
    fn test_identifiers_and_unknowns() {
        let table = ReservedWordTable::new();
        let tokenizer = Tokenizer::new(&table);
        assert_eq!(tokenizer.classify("_tmp$1"), TokenCategory::Identifier);
        assert_eq!(tokenizer.classify("while"), TokenCategory::Reserved);
        assert_eq!(tokenizer.classify("9lives"), TokenCategory::Unknown);
        assert_eq!(tokenizer.classify("a*b"), TokenCategory::Unknown);
        assert_eq!(tokenizer.classify("&&"), TokenCategory::Unknown);
    }

    #[test]
    fn test_string_literals() {
        let table = ReservedWordTable::new();
        let tokenizer = Tokenizer::new(&table);
        assert_eq!(tokenizer.classify("\"a;b\""), TokenCategory::StringLiteral);
        assert_eq!(tokenizer.classify("\"\""), TokenCategory::StringLiteral);
        assert_eq!(tokenizer.classify("\""), TokenCategory::Unknown);
    }

    #[test]
    fn test_tokens_keep_source_line() {
        let table = ReservedWordTable::new();
        let lines = vec![
            NormalizedLine {
                number: 2,
                text: "int a;".to_string(),
            },
            NormalizedLine {
                number: 5,
                text: "a = 1;".to_string(),
            },
        ];
        let tokens = Tokenizer::new(&table).tokenize(&lines);
        let got: Vec<(&str, usize)> = tokens.iter().map(|t| (t.lexeme(), t.line())).collect();
        assert_eq!(
            got,
            vec![("int", 2), ("a", 2), (";", 2), ("a", 5), ("=", 5), ("1", 5), (";", 5)]
        );
    }
}
