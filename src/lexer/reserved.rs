//! Reserved-word table
//!
//! A fixed-bucket chained hash set of the language keywords. The bucket index
//! uses the classic 31-multiplier string hash over UTF-16 code units, so the
//! bucket layout (and therefore the diagnostic dump) is stable across runs and
//! platforms.

use std::fmt;

/// Number of buckets; prime to spread short alphabetic keys.
pub const BUCKET_COUNT: usize = 13;

/// Keywords in insertion order. Insertion order decides the order within a
/// bucket in [`ReservedWordTable::dump`].
pub const RESERVED_WORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if",
    "inline", "int", "#include", "stdio.h", "long", "register", "restrict",
    "return", "short", "signed", "sizeof", "static", "struct", "switch",
    "typedef", "union", "unsigned", "void", "volatile", "while",
];

/// Read-only keyword set. Never mutated after [`ReservedWordTable::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedWordTable {
    buckets: Vec<Vec<&'static str>>,
}

/// One non-empty bucket of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketDump<'a> {
    pub index: usize,
    pub words: &'a [&'static str],
}

impl fmt::Display for BucketDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index {}: ", self.index)?;
        for word in self.words {
            write!(f, "{} ", word)?;
        }
        Ok(())
    }
}

impl ReservedWordTable {
    pub fn new() -> Self {
        let mut buckets = vec![Vec::new(); BUCKET_COUNT];
        for &word in RESERVED_WORDS {
            buckets[bucket_index(word)].push(word);
        }
        Self { buckets }
    }

    /// Exact-match membership test. Absent words simply return `false`.
    pub fn contains(&self, word: &str) -> bool {
        self.buckets[bucket_index(word)]
            .iter()
            .any(|&reserved| reserved == word)
    }

    /// Non-empty buckets in index order, members in insertion order.
    pub fn dump(&self) -> Vec<BucketDump<'_>> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, words)| !words.is_empty())
            .map(|(index, words)| BucketDump {
                index,
                words: words.as_slice(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ReservedWordTable {
    fn default() -> Self {
        Self::new()
    }
}

/// `h = 31 * h + unit` over UTF-16 code units, wrapping at 32 bits.
fn string_hash(word: &str) -> i32 {
    word.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

fn bucket_index(word: &str) -> usize {
    string_hash(word).unsigned_abs() as usize % BUCKET_COUNT
}
