/*!
 * Utility functions and built-in defaults for aipt
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Default content size ceiling in bytes
pub const DEFAULT_MAX_SIZE: u64 = 600_000;

/// Default tree depth limit
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Language tag used when no mapping matches
pub const FALLBACK_LANGUAGE: &str = "text";

/// Directory names never traversed unless overridden
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    "node_modules",
    ".vscode",
    ".idea",
    "venv",
    "env",
    ".venv",
    ".ruff_cache",
    "htmlcov",
    ".pytest_cache",
];

/// File suffixes included unless overridden
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".jsx", ".ts", ".tsx", ".html", ".css", ".json", ".xml", ".yaml", ".yml",
    ".toml", ".md", ".txt",
];

/// Extension to code-fence language tag
pub static DEFAULT_LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (".py", "python"),
        (".js", "javascript"),
        (".jsx", "jsx"),
        (".ts", "typescript"),
        (".tsx", "tsx"),
        (".html", "html"),
        (".css", "css"),
        (".json", "json"),
        (".xml", "xml"),
        (".yaml", "yaml"),
        (".yml", "yaml"),
        (".toml", "toml"),
        (".md", "markdown"),
        (".txt", "text"),
        // Shell
        (".sh", "bash"),
        (".bash", "bash"),
        // Compiled and other languages
        (".php", "php"),
        (".java", "java"),
        (".cpp", "cpp"),
        (".c", "c"),
        (".h", "c"),
        (".cs", "csharp"),
        (".rb", "ruby"),
        (".go", "go"),
        (".rs", "rust"),
        (".sql", "sql"),
    ])
});

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
