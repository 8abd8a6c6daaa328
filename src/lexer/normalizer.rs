//! Comment stripping and whitespace canonicalisation
//!
//! Each physical line is normalised on its own. The only state carried from
//! one line to the next is whether an unterminated `/* ... */` block is still
//! open. Lines that end up empty are dropped, so every retained line keeps the
//! 1-based number of the physical line it came from.
//!
//! The normaliser does not understand string literals: `//` or `/*` inside
//! quotes still starts a comment.

/// A retained line after normalisation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine {
    /// 1-based physical line number in the raw source
    pub number: usize,
    pub text: String,
}

/// Line-by-line comment remover
#[derive(Debug, Default)]
pub struct Normalizer {
    in_block_comment: bool,
    line: usize,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a block comment opened on an earlier line is still open
    pub fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    /// Normalise the next physical line.
    ///
    /// Returns `None` when nothing but comments and whitespace remain; the
    /// line counter still advances so later lines keep their true numbers.
    pub fn next_line(&mut self, line: &str) -> Option<NormalizedLine> {
        self.line += 1;
        let text = self.normalize(line);
        if text.is_empty() {
            None
        } else {
            Some(NormalizedLine {
                number: self.line,
                text,
            })
        }
    }

    /// Strip comments from `line` and collapse each whitespace run to one
    /// space. Leading and trailing spaces are kept (collapsed), not trimmed.
    pub fn normalize(&mut self, line: &str) -> String {
        let chars: Vec<char> = line.chars().collect();
        let mut out = String::with_capacity(line.len());
        let mut last_was_space = false;
        let mut position = 0;

        while position < chars.len() {
            let ch = chars[position];
            let next = chars.get(position + 1).copied();

            if self.in_block_comment {
                if ch == '*' && next == Some('/') {
                    self.in_block_comment = false;
                    position += 1;
                }
            } else if ch == '/' && next == Some('/') {
                break;
            } else if ch == '/' && next == Some('*') {
                self.in_block_comment = true;
                position += 1;
            } else if ch.is_whitespace() {
                if !last_was_space {
                    out.push(' ');
                    last_was_space = true;
                }
            } else {
                out.push(ch);
                last_was_space = false;
            }

            position += 1;
        }

        out
    }
}

/// Normalise a whole source text, dropping empty lines.
pub fn normalize_source<'a, I>(lines: I) -> Vec<NormalizedLine>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut normalizer = Normalizer::new();
    lines
        .into_iter()
        .filter_map(|line| normalizer.next_line(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(line: &str) -> String {
        Normalizer::new().normalize(line)
    }

    #[test]
    fn test_line_comment_discards_rest() {
        assert_eq!(normalize("int   x = 5; // set x"), "int x = 5; ");
        assert_eq!(normalize("// only a comment"), "");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(normalize("\t a \t\t b   "), " a b ");
    }

    #[test]
    fn test_inline_block_comment() {
        assert_eq!(normalize("a/* x */b"), "ab");
        // The space before the comment is kept, the one after is collapsed into it.
        assert_eq!(normalize("a /* x */ b"), "a b");
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let mut normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("int a; /* start"), "int a; ");
        assert!(normalizer.in_block_comment());
        assert_eq!(normalizer.normalize("still inside // not a line comment"), "");
        assert_eq!(normalizer.normalize("end */int b;"), "int b;");
        assert!(!normalizer.in_block_comment());
    }

    #[test]
    fn test_lone_slash_passes_through() {
        assert_eq!(normalize("a / b /"), "a / b /");
    }

    #[test]
    fn test_string_contents_are_not_protected() {
        assert_eq!(normalize("s = \"http://x\";"), "s = \"http:");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for line in ["int x = 5;", " for ( i = 0 ; i < 3 ; i ++ ) { } ", "a/b"] {
            let once = normalize(line);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_empty_lines_are_dropped_with_true_numbers() {
        let source = "int a;\n\n// comment\n/* block\n  */\n  while (a) { }";
        let lines = normalize_source(source.lines());

        assert_eq!(
            lines,
            vec![
                NormalizedLine {
                    number: 1,
                    text: "int a;".to_string(),
                },
                NormalizedLine {
                    number: 6,
                    text: " while (a) { }".to_string(),
                },
            ]
        );
    }
}
