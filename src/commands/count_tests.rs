use std::fs;

use tempfile::TempDir;

use super::*;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn counts_known_files_and_skips_others() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.rs", "// doc\nfn main() {}\n");
    write(&dir, "b.py", "x = 1  # one\n\n");
    write(&dir, "notes.txt", "plain text\n");

    let registry = LanguageRegistry::default();
    let summary = count_paths(&registry, &[dir.path().to_path_buf()], None).unwrap();

    assert_eq!(summary.files.len(), 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.files[0].language, "Rust");
    assert_eq!(summary.files[1].language, "Python");
    assert_eq!(summary.total.total, 4);
    assert_eq!(summary.total.code, 2);
    assert_eq!(summary.total.comment, 2);
    assert_eq!(summary.total.blank, 1);
}

#[test]
fn lang_override_applies_to_every_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "script", "# comment\necho hi\n");

    let registry = LanguageRegistry::default();
    let summary = count_paths(&registry, &[path], Some("sh")).unwrap();

    assert_eq!(summary.files.len(), 1);
    assert_eq!(summary.files[0].language, "Shell");
    assert_eq!(summary.files[0].stats.comment, 1);
}

#[test]
fn unknown_lang_override_fails() {
    let registry = LanguageRegistry::default();
    let err = count_paths(&registry, &[PathBuf::from(".")], Some("cobol")).unwrap_err();
    assert!(matches!(err, SieveError::UnknownLanguage(_)));
}

#[test]
fn records_unterminated_literals() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "open.c", "int x; /* never closed\n");

    let registry = LanguageRegistry::default();
    let summary = count_paths(&registry, &[path], None).unwrap();

    assert_eq!(summary.unterminated(), 1);
}

#[test]
fn skips_non_utf8_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bin.c");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let registry = LanguageRegistry::default();
    let summary = count_paths(&registry, &[path], None).unwrap();

    assert!(summary.files.is_empty());
    assert_eq!(summary.skipped, 1);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let registry = LanguageRegistry::default();
    let err = count_paths(&registry, &[PathBuf::from("/no/such/file.rs")], None).unwrap_err();
    assert!(matches!(err, SieveError::FileRead { .. }));
}
