//! Comment markers inside string literals must stay inert.

use super::*;

#[test]
fn marker_inside_string_is_not_a_comment() {
    let c = rule("C");
    assert!(comments("pattern = \"//.*$\";", &c).is_empty());
}

#[test]
fn decoy_string_then_real_comment() {
    let c = rule("C");
    assert_eq!(
        comments("pattern = \"//.*$\"  // Regex for matching comments", &c),
        vec!["// Regex for matching comments"]
    );
}

#[test]
fn block_marker_inside_string() {
    let c = rule("C");
    assert_eq!(comments("s = \"/* not */\"; /* real */", &c), vec!["/* real */"]);
}

#[test]
fn escaped_quote_does_not_end_string() {
    let c = rule("C");
    assert_eq!(
        comments("s = \"a \\\" // b\"; // real", &c),
        vec!["// real"]
    );
}

#[test]
fn escaped_backslash_before_quote_ends_string() {
    let c = rule("C");
    assert_eq!(comments("p = \"C:\\\\\"; // c", &c), vec!["// c"]);
}

#[test]
fn escape_consumes_multibyte_character() {
    let c = rule("C");
    assert_eq!(comments("s = \"\\é\"; // c", &c), vec!["// c"]);
}

#[test]
fn url_in_python_string() {
    let py = rule("Python");
    assert_eq!(
        comments("url = \"http://example.com#not-a-comment\"  # real", &py),
        vec!["# real"]
    );
}

#[test]
fn hash_in_python_single_quotes() {
    let py = rule("Python");
    assert_eq!(comments("x = '#'  # c", &py), vec!["# c"]);
}

#[test]
fn python_triple_quoted_string_hides_hash() {
    let py = rule("Python");
    assert_eq!(
        spans("x = \"\"\"a # b\nc\"\"\"", &py),
        vec![
            (SpanKind::Code, "x = "),
            (SpanKind::String, "\"\"\"a # b\nc\"\"\""),
        ]
    );
}

#[test]
fn python_docstring_on_its_own_line_is_a_comment() {
    let py = rule("Python");
    assert_eq!(
        spans("def f():\n    \"\"\"Doc # x\"\"\"\n    return 1", &py),
        vec![
            (SpanKind::Code, "def f():\n    "),
            (SpanKind::Comment, "\"\"\"Doc # x\"\"\""),
            (SpanKind::Code, "\n    return 1"),
        ]
    );
}

#[test]
fn single_line_string_stops_at_newline() {
    let c = rule("C");
    let all: Vec<_> = scan("s = \"abc\n// c", &c).collect();
    assert_eq!(all[1].kind, SpanKind::String);
    assert_eq!(all[1].text, "\"abc");
    assert!(all[1].unterminated);
    assert_eq!(all[2].text, "\n");
    assert_eq!(all[3].text, "// c");
}

#[test]
fn escaped_newline_continues_single_line_string() {
    let c = rule("C");
    assert!(comments("s = \"abc\\\n// still string\";", &c).is_empty());
}

#[test]
fn quotes_inside_comments_are_inert() {
    let c = rule("C");
    assert_eq!(
        spans("// it's\nx = 'a'", &c),
        vec![
            (SpanKind::Comment, "// it's"),
            (SpanKind::Code, "\nx = "),
            (SpanKind::String, "'a'"),
        ]
    );
}

#[test]
fn close_marker_inside_quotes_in_comment_still_closes() {
    let c = rule("C");
    assert_eq!(
        spans("/* \"*/ x", &c),
        vec![(SpanKind::Comment, "/* \"*/"), (SpanKind::Code, " x")]
    );
}

#[test]
fn fixture_decoy_lines() {
    let js = rule("JavaScript");
    let text = "message = \"This string contains // but it's not a comment\"\n\
                pattern = \"//.*$\"  // Regex for matching comments\n";
    assert_eq!(comments(text, &js), vec!["// Regex for matching comments"]);
    assert_round_trip(text, &js);
}

#[test]
fn edge_case_fixture_strings() {
    let go = rule("Go");
    let text = "escaped = \"This has \\\"quotes\\\" and \\\\n newlines\"\n\
                path = \"C:\\\\Users\\\\file.txt\"\n\
                comment_marker = \"//\"\n\
                trailing = 'v'    // Comment after spaces    \n";
    assert_eq!(comments(text, &go), vec!["// Comment after spaces    "]);
}
