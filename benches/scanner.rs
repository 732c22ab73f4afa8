//! Scanner throughput on ordinary source and on decoy-heavy input

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use comment_sieve::{LanguageRegistry, count_lines, extract_comments, scan};

const C_SOURCE: &str = r#"/*
 * Data processor
 */
#include <stdio.h>

static const char *pattern = "/\\*.*\\*/";  // Regex for matching comments

int process(int *items, int count) {
    // Skip invalid items
    int total = 0;
    for (int i = 0; i < count; i++) {
        total += items[i];  /* accumulate */
    }
    printf("%s // not a comment\n", pattern);
    return total;
}
"#;

const PYTHON_SOURCE: &str = r##""""
Module docstring explaining the purpose of this module.
"""

message = "This string contains # but it's not a comment"
pattern = "#.*$"  # Regex for matching comments

def main():
    # Check if data is valid
    print(message, pattern)
"##;

fn bench_ordinary_source(c: &mut Criterion) {
    let registry = LanguageRegistry::default();
    let c_rule = registry.rules_for("c").unwrap();
    let c_text = C_SOURCE.repeat(200);
    let py_text = PYTHON_SOURCE.repeat(200);

    let mut group = c.benchmark_group("ordinary_source");
    group.throughput(Throughput::Bytes(c_text.len() as u64));
    group.bench_function("scan_c", |b| {
        b.iter(|| scan(black_box(&c_text), c_rule).count())
    });
    group.bench_function("count_lines_c", |b| {
        b.iter(|| count_lines(black_box(&c_text), c_rule))
    });
    group.bench_function("extract_python", |b| {
        b.iter(|| extract_comments(black_box(&py_text), "python").unwrap().len())
    });
    group.finish();
}

fn bench_decoy_repetition(c: &mut Criterion) {
    let registry = LanguageRegistry::default();
    let cases = [
        ("c", "/*"),
        ("c", "//"),
        ("python", "#"),
        ("rust", "'"),
        ("swift", "#"),
        ("shell", "$#"),
    ];

    let mut group = c.benchmark_group("decoy_repetition");
    for (language, token) in cases {
        let rule = registry.rules_for(language).unwrap();
        let text = token.repeat(10_000);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new(language, token),
            &text,
            |b, text| b.iter(|| scan(black_box(text), rule).count()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_ordinary_source, bench_decoy_repetition);
criterion_main!(benches);
