// Integration tests for the normalize → tokenize → recognize pipeline

use loopscan::error::Channel;
use loopscan::lexer::{normalize_source, ReservedWordTable, TokenCategory, Tokenizer};
use loopscan::parser::{recognize_loops, LoopKind, ParseOutcome, RecognizerOptions};
use loopscan::pipeline::Pipeline;
use loopscan::report::{ChannelPaths, FileSink, MemorySink, RESERVED_TABLE_HEADER};
use loopscan::Error;
use std::fs;
use std::path::PathBuf;

const PROGRAM: &str = r#"#include <stdio.h>

/* Sum and count down.
   Nothing in here is parsed. */
int main() {
    int total = 0;  // running sum
    for (int i = 0; i < 10; i++) {
        total = total + i;
    }

    while (total > 0) {
        total = total - 1;
    }

    do {
        printf("done;\n");
    } while (total != 0);
    return 0;
}
"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("loopscan-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    dir
}

#[test]
fn test_full_program() {
    let mut sink = MemorySink::new();
    let output = Pipeline::default()
        .run_str(PROGRAM, &mut sink)
        .expect("Pipeline failed");

    assert_eq!(
        output.outcomes,
        vec![
            ParseOutcome::Success {
                kind: LoopKind::ForLoop,
                line: 7
            },
            ParseOutcome::Success {
                kind: LoopKind::WhileLoop,
                line: 11
            },
            ParseOutcome::Success {
                kind: LoopKind::DoWhileLoop,
                line: 15
            },
        ]
    );
    assert_eq!(
        sink.parse_results,
        vec!["For Loop (Line 7)", "While Loop (Line 11)", "Do-While Loop (Line 15)"]
    );

    // Comment-only and blank lines are dropped
    assert_eq!(output.source_lines, 19);
    assert_eq!(sink.normalized.len(), 14);
    assert_eq!(sink.normalized[0], "#include <stdio.h>");
    assert_eq!(sink.normalized[1], "int main() {");
}

#[test]
fn test_string_literal_with_delimiters() {
    let table = ReservedWordTable::new();
    let tokens = Tokenizer::new(&table).tokenize_line(r#"printf("a;b");"#, 1);

    let got: Vec<(&str, TokenCategory)> = tokens.iter().map(|t| (t.lexeme(), t.category())).collect();
    assert_eq!(
        got,
        vec![
            ("printf", TokenCategory::Identifier),
            ("(", TokenCategory::Delimiter),
            ("\"a;b\"", TokenCategory::StringLiteral),
            (")", TokenCategory::Delimiter),
            (";", TokenCategory::Delimiter),
        ]
    );
}

#[test]
fn test_round_trip_categories() {
    let table = ReservedWordTable::new();
    let lines = normalize_source(["int   x = 5; // set x"]);
    let tokens = Tokenizer::new(&table).tokenize(&lines);

    let report: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(
        report,
        vec!["RESERVED: int", "IDENTIFIER: x", "DELIMITER: =", "NUMBER: 5", "DELIMITER: ;"]
    );
}

#[test]
fn test_zero_loops() {
    let table = ReservedWordTable::new();
    let lines = normalize_source(["int x = 1;", "x = x * 2;"]);
    let tokens = Tokenizer::new(&table).tokenize(&lines);

    assert!(recognize_loops(&tokens, RecognizerOptions::default()).is_empty());
}

#[test]
fn test_file_sink_writes_all_channels() {
    let dir = scratch_dir("channels");
    let input = dir.join("input");
    fs::write(&input, "while ( x > 0 { x = x - 1 ; }\n// trailing comment\n")
        .expect("Failed to write input");

    let paths = ChannelPaths {
        normalized: dir.join("codeoutput"),
        tokens: dir.join("output"),
        reserved_table: dir.join("symbol_table.txt"),
        parse_results: dir.join("parse_output"),
    };

    {
        let mut sink = FileSink::create(&paths).expect("Failed to create sink");
        Pipeline::default()
            .run_file(&input, &mut sink)
            .expect("Pipeline failed");
    }

    let normalized = fs::read_to_string(&paths.normalized).unwrap();
    assert_eq!(normalized, "while ( x > 0 { x = x - 1 ; }\n");

    let tokens = fs::read_to_string(&paths.tokens).unwrap();
    let token_lines: Vec<&str> = tokens.lines().collect();
    assert_eq!(token_lines.len(), 13);
    assert_eq!(token_lines[0], "RESERVED: while");
    assert_eq!(token_lines[4], "NUMBER: 0");

    let table = fs::read_to_string(&paths.reserved_table).unwrap();
    let mut table_lines = table.lines();
    assert_eq!(table_lines.next(), Some(RESERVED_TABLE_HEADER));
    assert!(table_lines.all(|l| l.starts_with("Index ") && l.ends_with(' ')));

    let results = fs::read_to_string(&paths.parse_results).unwrap();
    assert_eq!(results, "Error at Line 1: Expected ) but found {\n");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_input_keeps_previous_results() {
    let dir = scratch_dir("missing-input");
    let paths = ChannelPaths {
        normalized: dir.join("codeoutput"),
        tokens: dir.join("output"),
        reserved_table: dir.join("symbol_table.txt"),
        parse_results: dir.join("parse_output"),
    };
    fs::write(&paths.parse_results, "For Loop (Line 1)\n").expect("Failed to seed results");

    let err = Pipeline::default()
        .run_to_files(&dir.join("no-such-input"), &paths)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Channel {
            channel: Channel::RawSource,
            ..
        }
    ));

    assert_eq!(
        fs::read_to_string(&paths.parse_results).unwrap(),
        "For Loop (Line 1)\n"
    );
    assert!(!paths.tokens.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_reserved_dump_is_stable() {
    let mut first = MemorySink::new();
    let mut second = MemorySink::new();
    Pipeline::default().run_str("", &mut first).unwrap();
    Pipeline::default().run_str("", &mut second).unwrap();

    assert_eq!(first.reserved_table, second.reserved_table);
    assert!(first.normalized.is_empty());
    assert!(first.tokens.is_empty());
    assert!(first.parse_results.is_empty());
}
