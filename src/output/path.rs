//! Path display with forward slashes and no leading `./`.

use std::path::Path;

#[must_use]
pub fn display_path(path: &Path) -> String {
    let path_str = path.to_string_lossy();
    let stripped = path_str
        .strip_prefix("./")
        .or_else(|| path_str.strip_prefix(".\\"))
        .unwrap_or(&path_str);

    if stripped.is_empty() {
        ".".to_string()
    } else {
        stripped.replace('\\', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_dot_slash() {
        assert_eq!(display_path(Path::new("./src/lib.rs")), "src/lib.rs");
        assert_eq!(display_path(Path::new(".\\src\\lib.rs")), "src/lib.rs");
    }

    #[test]
    fn normalizes_backslashes() {
        assert_eq!(display_path(Path::new("src\\scanner\\mod.rs")), "src/scanner/mod.rs");
    }

    #[test]
    fn preserves_plain_and_parent_paths() {
        assert_eq!(display_path(Path::new("src/lib.rs")), "src/lib.rs");
        assert_eq!(display_path(Path::new("../src")), "../src");
        assert_eq!(display_path(Path::new("src/.hidden")), "src/.hidden");
    }

    #[test]
    fn bare_dot_slash_becomes_dot() {
        assert_eq!(display_path(Path::new("./")), ".");
    }
}
