//! Per-construct results produced by the loop recognizer

use std::fmt;

/// Loop constructs the recognizer knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopKind {
    ForLoop,
    WhileLoop,
    DoWhileLoop,
}

impl LoopKind {
    /// Map a lexeme that opens a loop to its kind
    pub fn from_keyword(lexeme: &str) -> Option<Self> {
        match lexeme {
            "for" => Some(LoopKind::ForLoop),
            "while" => Some(LoopKind::WhileLoop),
            "do" => Some(LoopKind::DoWhileLoop),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            LoopKind::ForLoop => "for",
            LoopKind::WhileLoop => "while",
            LoopKind::DoWhileLoop => "do",
        }
    }
}

impl fmt::Display for LoopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopKind::ForLoop => write!(f, "For Loop"),
            LoopKind::WhileLoop => write!(f, "While Loop"),
            LoopKind::DoWhileLoop => write!(f, "Do-While Loop"),
        }
    }
}

/// Result of checking one loop skeleton. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Success { kind: LoopKind, line: usize },
    Error { message: String, line: usize },
}

impl ParseOutcome {
    pub fn line(&self) -> usize {
        match self {
            ParseOutcome::Success { line, .. } | ParseOutcome::Error { line, .. } => *line,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ParseOutcome::Success { .. })
    }
}

/// Parse result report form
impl fmt::Display for ParseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseOutcome::Success { kind, line } => write!(f, "{} (Line {})", kind, line),
            ParseOutcome::Error { message, line } => {
                write!(f, "Error at Line {}: {}", line, message)
            }
        }
    }
}
