//! Loop skeleton checks
//!
//! ```text
//! for_loop      ::= "for" "(" <init> ";" <cond> ";" <step> ")" body
//! while_loop    ::= "while" "(" <cond> ")" body
//! do_while_loop ::= "do" body "while" "(" <cond> ")" ";"
//! body          ::= "{" <skipped> "}"
//! ```
//!
//! Angle-bracketed regions are skipped, not parsed. How far a skip goes is
//! decided by [`SkipStrategy`].

use super::outcome::LoopKind;
use super::recognizer::{LoopRecognizer, SkipStrategy};

/// Lexemes that end a `for` header region early when met at paren depth zero
const HEADER_STOPS: &[&str] = &["{", "}"];

/// Lexemes that end a `while` condition early when met at paren depth zero
const CONDITION_STOPS: &[&str] = &["{", "}", ";"];

impl LoopRecognizer<'_> {
    pub(crate) fn parse_for(&mut self) {
        self.expect(LoopKind::ForLoop.keyword());
        self.expect("(");
        self.skip_region(";", HEADER_STOPS);
        self.expect(";");
        self.skip_region(";", HEADER_STOPS);
        self.expect(";");
        self.skip_region(")", HEADER_STOPS);
        self.expect(")");
        self.parse_body();
    }

    pub(crate) fn parse_while(&mut self) {
        self.expect(LoopKind::WhileLoop.keyword());
        self.parse_condition();
        self.parse_body();
    }

    pub(crate) fn parse_do_while(&mut self) {
        self.expect(LoopKind::DoWhileLoop.keyword());
        self.parse_body();
        self.expect(LoopKind::WhileLoop.keyword());
        self.parse_condition();
        self.expect(";");
    }

    /// `( <cond> )`
    fn parse_condition(&mut self) {
        self.expect("(");
        self.skip_region(")", CONDITION_STOPS);
        self.expect(")");
    }

    /// `{ <skipped> }`
    fn parse_body(&mut self) {
        self.expect("{");
        self.skip_block();
        self.expect("}");
    }

    /// Advance to `target` inside a parenthesised header without consuming it.
    ///
    /// With [`SkipStrategy::Nested`] the scan only matches `target` at paren
    /// depth zero and also halts at any of `stops` or at an unbalanced `)`,
    /// so a missing delimiter is reported against the token actually found.
    pub(crate) fn skip_region(&mut self, target: &str, stops: &[&str]) {
        if self.options.skip == SkipStrategy::FirstMatch {
            self.skip_to(target);
            return;
        }

        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            let lexeme = token.lexeme();
            if depth == 0 && (lexeme == target || lexeme == ")" || stops.contains(&lexeme)) {
                return;
            }
            match lexeme {
                "(" => depth += 1,
                ")" => depth -= 1,
                _ => {}
            }
            self.advance();
        }
    }

    /// Advance to the `}` closing the current body without consuming it.
    pub(crate) fn skip_block(&mut self) {
        if self.options.skip == SkipStrategy::FirstMatch {
            self.skip_to("}");
            return;
        }

        let mut depth = 0usize;
        while let Some(token) = self.peek() {
            match token.lexeme() {
                "}" if depth == 0 => return,
                "{" => depth += 1,
                "}" => depth -= 1,
                _ => {}
            }
            self.advance();
        }
    }

    /// Advance to the first occurrence of `target`.
    fn skip_to(&mut self, target: &str) {
        while !self.is_at_end() && !self.check(target) {
            self.advance();
        }
    }
}
