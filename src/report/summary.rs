//! Run summary: token counts per category, identifier usage, loop results

use crate::lexer::{Token, TokenCategory};
use crate::parser::ParseOutcome;
use rustc_hash::FxHashMap;
use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub lines: usize,
    pub by_category: FxHashMap<TokenCategory, usize>,
    pub identifiers: FxHashMap<String, usize>,
    pub loops: usize,
    pub errors: usize,
}

impl Summary {
    pub fn collect(lines: usize, tokens: &[Token], outcomes: &[ParseOutcome]) -> Self {
        let mut summary = Summary {
            lines,
            ..Default::default()
        };

        for token in tokens {
            *summary.by_category.entry(token.category()).or_default() += 1;
            if token.category() == TokenCategory::Identifier {
                *summary
                    .identifiers
                    .entry(token.lexeme().to_string())
                    .or_default() += 1;
            }
        }

        summary.loops = outcomes.iter().filter(|o| o.is_success()).count();
        summary.errors = outcomes.len() - summary.loops;
        summary
    }

    pub fn count(&self, category: TokenCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    pub fn total_tokens(&self) -> usize {
        self.by_category.values().sum()
    }

    /// Identifiers by descending occurrence count, then alphabetically
    pub fn top_identifiers(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .identifiers
            .iter()
            .map(|(name, &count)| (name.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(limit);
        ranked
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} line(s), {} token(s) [",
            self.lines,
            self.total_tokens()
        )?;
        for (i, category) in TokenCategory::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", category, self.count(*category))?;
        }
        write!(f, "], {} loop(s), {} error(s)", self.loops, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LoopKind;

    #[test]
    fn test_collect_counts() {
        let tokens = vec![
            Token::new("int", TokenCategory::Reserved, 1),
            Token::new("b", TokenCategory::Identifier, 1),
            Token::new("=", TokenCategory::Delimiter, 1),
            Token::new("a", TokenCategory::Identifier, 1),
            Token::new("+", TokenCategory::Delimiter, 1),
            Token::new("b", TokenCategory::Identifier, 1),
        ];
        let outcomes = vec![
            ParseOutcome::Success {
                kind: LoopKind::ForLoop,
                line: 1,
            },
            ParseOutcome::Error {
                message: "Expected ; but found )".to_string(),
                line: 2,
            },
        ];

        let summary = Summary::collect(2, &tokens, &outcomes);
        assert_eq!(summary.total_tokens(), 6);
        assert_eq!(summary.count(TokenCategory::Identifier), 3);
        assert_eq!(summary.count(TokenCategory::Number), 0);
        assert_eq!(summary.top_identifiers(5), vec![("b", 2), ("a", 1)]);
        assert_eq!(summary.loops, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(
            summary.to_string(),
            "2 line(s), 6 token(s) [RESERVED=1 DELIMITER=2 IDENTIFIER=3 NUMBER=0 STRING=0 UNKNOWN=0], 1 loop(s), 1 error(s)"
        );
    }
}
