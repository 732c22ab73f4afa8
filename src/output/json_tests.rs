use std::path::PathBuf;

use serde_json::Value;

use super::*;
use crate::extractor::extract_with_rule;
use crate::language::LanguageRegistry;
use crate::scanner::scan;

fn parse(output: &str) -> Value {
    serde_json::from_str(output).unwrap()
}

fn python_rule() -> LanguageRule {
    LanguageRegistry::default().rules_for("python").unwrap().clone()
}

#[test]
fn spans_serialize_kind_and_range() {
    let rule = python_rule();
    let files = [FileSpans {
        path: PathBuf::from("./a.py"),
        language: "Python".to_string(),
        spans: scan("x = '#'  # c", &rule).collect(),
    }];

    let json = parse(&JsonFormatter.format_spans(&files).unwrap());
    let spans = json["files"][0]["spans"].as_array().unwrap();

    assert_eq!(json["files"][0]["path"], "a.py");
    assert_eq!(json["files"][0]["language"], "Python");
    assert_eq!(spans.len(), 4);
    assert_eq!(spans[1]["kind"], "string");
    assert_eq!(spans[1]["text"], "'#'");
    assert_eq!(spans[3]["kind"], "comment");
    assert_eq!(spans[3]["start"], 9);
    assert!(spans[3].get("unterminated").is_none());
}

#[test]
fn comments_serialize_body_and_flag() {
    let rule = python_rule();
    let files = [FileComments {
        path: PathBuf::from("a.py"),
        language: "Python".to_string(),
        comments: extract_with_rule("# one\nx = '''open", &rule),
    }];

    let json = parse(&JsonFormatter.format_comments(&files).unwrap());
    let comments = json["files"][0]["comments"].as_array().unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["text"], " one");
    assert_eq!(comments[0]["line"], 1);
}

#[test]
fn counts_flatten_line_stats() {
    let stats = LineStats {
        total: 3,
        code: 2,
        comment: 1,
        blank: 0,
    };
    let summary = CountSummary::new(
        vec![FileCount {
            path: PathBuf::from("./x.py"),
            language: "Python".to_string(),
            stats,
            unterminated: 0,
        }],
        1,
    );

    let json = parse(&JsonFormatter.format_counts(&summary).unwrap());

    assert_eq!(json["summary"]["files"], 1);
    assert_eq!(json["summary"]["skipped"], 1);
    assert_eq!(json["summary"]["total"], 3);
    assert_eq!(json["summary"]["code"], 2);
    assert_eq!(json["files"][0]["path"], "x.py");
    assert_eq!(json["files"][0]["comment"], 1);
    assert_eq!(json["files"][0]["unterminated"], 0);
}

#[test]
fn languages_list_names_and_markers() {
    let registry = LanguageRegistry::default();
    let json = parse(&JsonFormatter.format_languages(registry.all()).unwrap());
    let languages = json.as_array().unwrap();

    assert_eq!(languages.len(), registry.all().len());
    let haskell = languages.iter().find(|l| l["name"] == "Haskell").unwrap();
    assert_eq!(haskell["nested"], true);
    assert_eq!(haskell["line_comments"][0], "--");
}
