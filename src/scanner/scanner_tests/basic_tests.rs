//! Span boundaries, offsets and the round-trip property.

use super::*;

#[test]
fn empty_text_yields_no_spans() {
    let c = rule("C");
    assert_eq!(scan("", &c).count(), 0);
}

#[test]
fn plain_code_is_one_span() {
    let c = rule("C");
    assert_eq!(spans("int x = 1;", &c), vec![(SpanKind::Code, "int x = 1;")]);
}

#[test]
fn line_comment_excludes_newline() {
    let c = rule("C");
    assert_eq!(
        spans("// note\ncode", &c),
        vec![(SpanKind::Comment, "// note"), (SpanKind::Code, "\ncode")]
    );
}

#[test]
fn line_comment_excludes_crlf() {
    let c = rule("C");
    assert_eq!(
        spans("// note\r\ncode", &c),
        vec![(SpanKind::Comment, "// note"), (SpanKind::Code, "\r\ncode")]
    );
}

#[test]
fn line_comment_at_end_of_input() {
    let c = rule("C");
    let all: Vec<_> = scan("x; // tail", &c).collect();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].text, "// tail");
    assert!(!all[1].unterminated);
}

#[test]
fn trailing_block_comment_between_code() {
    let c = rule("C");
    assert_eq!(
        spans("x = 1; /* c */ y", &c),
        vec![
            (SpanKind::Code, "x = 1; "),
            (SpanKind::Comment, "/* c */"),
            (SpanKind::Code, " y"),
        ]
    );
}

#[test]
fn strings_and_code_alternate() {
    let c = rule("C");
    assert_eq!(
        spans("\"a\" + 'b'", &c),
        vec![
            (SpanKind::String, "\"a\""),
            (SpanKind::Code, " + "),
            (SpanKind::String, "'b'"),
        ]
    );
}

#[test]
fn span_offsets_are_byte_offsets() {
    let c = rule("C");
    let all: Vec<_> = scan("é /* ü */", &c).collect();
    assert_eq!(all[0].start, 0);
    assert_eq!(all[0].end, 3);
    assert_eq!(all[1].start, 3);
    assert_eq!(all[1].end, "é /* ü */".len());
}

#[test]
fn delimiter_lengths_and_body() {
    let c = rule("C");
    let span = scan("/* x */", &c).next().unwrap();
    assert_eq!(span.open_len, 2);
    assert_eq!(span.close_len, 2);
    assert_eq!(span.body(), " x ");

    let span = scan("// y", &c).next().unwrap();
    assert_eq!(span.open_len, 2);
    assert_eq!(span.close_len, 0);
    assert_eq!(span.body(), " y");
}

#[test]
fn adjacent_comments_are_separate_spans() {
    let c = rule("C");
    assert_eq!(
        spans("/*a*//*b*/", &c),
        vec![(SpanKind::Comment, "/*a*/"), (SpanKind::Comment, "/*b*/")]
    );
}

#[test]
fn scanning_is_restartable() {
    let rust = rule("Rust");
    let text = "fn main() { /* a */ let s = \"//\"; } // done\n";
    let first: Vec<_> = scan(text, &rust).collect();
    let second: Vec<_> = scan(text, &rust).collect();
    assert_eq!(first, second);
}

#[test]
fn scanner_is_fused() {
    let c = rule("C");
    let mut scanner = scan("x", &c);
    assert!(scanner.next().is_some());
    assert!(scanner.next().is_none());
    assert!(scanner.next().is_none());
}

#[test]
fn round_trip_on_mixed_input() {
    let text = "/*\n * header\n */\n#include <stdio.h>\n\nint main() {\n    \
                printf(\"%s // %d\\n\", \"a\", 1); // print\n    return 0; /* done */\n}\n";
    for name in ["C", "C++", "C#", "Java", "JavaScript", "Go", "Rust", "Swift", "Kotlin"] {
        assert_round_trip(text, &rule(name));
    }
}

#[test]
fn round_trip_with_multibyte_text() {
    let text = "# Unicode: 你好世界 🌍 مرحبا\nx = \"🌍 # not\"  # ok ✓\n";
    for name in ["Python", "Ruby", "Shell", "PHP"] {
        assert_round_trip(text, &rule(name));
    }
}

#[test]
fn span_serializes_kind_in_lowercase() {
    let c = rule("C");
    let span = scan("// x", &c).next().unwrap();
    let json = serde_json::to_value(span).unwrap();
    assert_eq!(json["kind"], "comment");
    assert_eq!(json["text"], "// x");
    assert!(json.get("unterminated").is_none());
}

#[test]
fn span_kind_names_match_serialized_form() {
    for kind in [SpanKind::Comment, SpanKind::String, SpanKind::Code] {
        let json = serde_json::to_value(kind).unwrap();
        assert_eq!(json, kind.as_str());
    }
}
