/*!
 * Name-based filtering: excluded directories, included extensions and
 * language detection
 */

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::utils::FALLBACK_LANGUAGE;

/// True iff `name` is exactly one of the excluded names
pub fn is_excluded_dir(name: &str, exclude_dirs: &BTreeSet<String>) -> bool {
    exclude_dirs.contains(name)
}

/// Lower-cased final dot-suffix of the file name (`".py"`), or `""`
///
/// A leading dot alone does not count, so `.gitignore` has no extension.
pub fn extension_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy().to_lowercase()),
        _ => String::new(),
    }
}

/// Language tag for `path`, `"text"` when the extension is unmapped
pub fn language_for(path: &Path, languages: &HashMap<String, String>) -> String {
    languages
        .get(&extension_of(path))
        .cloned()
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// True iff `name` ends with one of the configured suffixes
///
/// This is a plain suffix test, so an empty suffix matches every name.
pub fn matches_any_extension(name: &str, extensions: &BTreeSet<String>) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_excluded_dir_exact_match() {
        let excluded = set(&["node_modules", ".git"]);

        assert!(is_excluded_dir("node_modules", &excluded));
        assert!(is_excluded_dir(".git", &excluded));
        assert!(!is_excluded_dir("node_modules_backup", &excluded));
        assert!(!is_excluded_dir("git", &excluded));
        assert!(!is_excluded_dir("NODE_MODULES", &excluded));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("main.py")), ".py");
        assert_eq!(extension_of(Path::new("src/App.TSX")), ".tsx");
        assert_eq!(extension_of(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(extension_of(Path::new("Makefile")), "");
        assert_eq!(extension_of(Path::new(".gitignore")), "");
        assert_eq!(extension_of(Path::new("trailing.")), "");
    }

    #[test]
    fn test_language_for() {
        let languages = Config::default().languages;
        let cases = [
            ("test.py", "python"),
            ("script.js", "javascript"),
            ("component.jsx", "jsx"),
            ("style.css", "css"),
            ("index.html", "html"),
            ("config.json", "json"),
            ("README.md", "markdown"),
            ("lib.RS", "rust"),
            ("unknown.xyz", "text"),
            ("LICENSE", "text"),
        ];

        for (name, expected) in cases {
            assert_eq!(language_for(Path::new(name), &languages), expected, "{}", name);
        }
    }

    #[test]
    fn test_matches_any_extension_is_suffix_based() {
        let extensions = set(&[".py", ".md"]);

        assert!(matches_any_extension("main.py", &extensions));
        assert!(matches_any_extension("xxx.py", &extensions));
        assert!(matches_any_extension("README.md", &extensions));
        assert!(!matches_any_extension("main.pyc", &extensions));
        assert!(!matches_any_extension("README.MD", &extensions));
        assert!(!matches_any_extension("notes.txt", &extensions));
    }

    #[test]
    fn test_empty_suffix_matches_everything() {
        let extensions = set(&[""]);
        assert!(matches_any_extension("anything.bin", &extensions));
        assert!(matches_any_extension("Makefile", &extensions));
    }
}
