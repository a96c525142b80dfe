// Formatting contract tests for the rendering and rewrite layers.
//
// These exercise the library surface directly so failures point at the
// rendering code rather than at process plumbing.
use std::fs;

use serde_json::Value;

use jsonfmt::core::error::ErrorKind;
use jsonfmt::core::render::render;
use jsonfmt::core::rewrite::rewrite_file;

#[test]
fn corpus_round_trip_preserves_values() {
    let corpus = [
        "{}",
        "[]",
        "null",
        "\"top-level string\"",
        "{\"big\":18446744073709551615}",
        "{\"snow\":\"\\u2603\",\"mixed\":[true,false,null,0.5]}",
        "{\"nested\":{\"a\":[{\"b\":{}}]}}",
    ];
    for input in corpus {
        let value: Value = serde_json::from_str(input).expect("parse input");
        let rendered = render(&value).expect("render");
        let reparsed: Value = serde_json::from_str(&rendered).expect("reparse");
        assert_eq!(value, reparsed, "round trip changed value for {input}");
    }
}

#[test]
fn indentation_grows_by_four_per_level() {
    let value: Value = serde_json::from_str("{\"a\":{\"b\":{\"c\":[1]}}}").expect("parse");
    let rendered = render(&value).expect("render");

    let leading: Vec<usize> = rendered
        .lines()
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .collect();
    assert_eq!(leading, [0, 4, 8, 12, 16, 12, 8, 4, 0]);
}

#[test]
fn key_order_is_preserved_from_input() {
    let value: Value = serde_json::from_str("{\"zulu\":1,\"alpha\":2,\"mike\":3}").expect("parse");
    let rendered = render(&value).expect("render");

    let zulu = rendered.find("zulu").expect("zulu");
    let alpha = rendered.find("alpha").expect("alpha");
    let mike = rendered.find("mike").expect("mike");
    assert!(zulu < alpha);
    assert!(alpha < mike);
}

#[test]
fn string_escapes_follow_serializer_defaults() {
    let input = "{\"s\":\"tab\\there \\\"quoted\\\" back\\\\slash \\u2603\"}";
    let value: Value = serde_json::from_str(input).expect("parse");
    let rendered = render(&value).expect("render");

    assert!(rendered.contains("\\t"));
    assert!(rendered.contains("\\\"quoted\\\""));
    assert!(rendered.contains("\\\\slash"));
    assert!(rendered.contains('\u{2603}'));
    assert!(!rendered.contains("\\u2603"));
}

#[test]
fn rewrite_file_appends_exactly_one_newline() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("doc.json");
    fs::write(&path, "{\"a\":1}").expect("seed");

    rewrite_file(&path).expect("rewrite");

    let content = fs::read_to_string(&path).expect("read back");
    assert!(content.ends_with('\n'));
    assert!(!content.ends_with("\n\n"));
    for line in content.lines() {
        assert_eq!(line.trim_end_matches(' '), line, "trailing spaces on {line:?}");
    }
}

#[test]
fn parse_error_reports_position() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("doc.json");
    fs::write(&path, "{\n  \"a\": ,\n}").expect("seed");

    let err = rewrite_file(&path).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(err.line(), Some(2));
    assert_eq!(err.column(), Some(8));
    let hint = err.hint().expect("hint");
    assert!(hint.contains("line 2, column 8"));
    assert!(hint.contains("parse category: syntax"));
}
