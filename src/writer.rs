/*!
 * AI-friendly text rendering of scan results
 */

use crate::config::Config;
use crate::types::FileRecord;

/// Width of the `=` and `-` separator rules
pub const RULE_WIDTH: usize = 80;

/// Normalize a question for the top of the document
///
/// Surrounding whitespace is trimmed and a period is appended unless the
/// text already ends in `.`, `!`, `?` or `:`. Internal whitespace is kept.
pub fn format_question(question: &str) -> String {
    let question = question.trim();
    if question.is_empty() {
        return String::new();
    }

    if question.ends_with(['.', '!', '?', ':']) {
        question.to_string()
    } else {
        format!("{}.", question)
    }
}

/// Writer for the final context document
pub struct MarkdownWriter {
    framework: Option<String>,
    question: Option<String>,
    include_large: bool,
}

impl MarkdownWriter {
    /// Create a new writer
    pub fn new(config: &Config) -> Self {
        Self {
            framework: config.framework.clone(),
            question: config.question.clone(),
            include_large: config.include_large,
        }
    }

    /// Format a single file block
    pub fn format_file(&self, record: &FileRecord) -> String {
        let mut out = Vec::new();

        if let Some(framework) = &self.framework {
            out.push(format!("**Framework:** {}", framework));
        }

        out.push(format!("**File:** {}", record.relative_path));
        out.push(String::new());

        match record.text() {
            Some(text) => {
                out.push(format!("```{}", record.language));
                out.push(text.to_string());
                out.push("```".to_string());
                out.push(String::new());
            }
            None => {
                out.push(format!("*Note: {}*", record.content));
                out.push(String::new());
            }
        }

        out.join("\n")
    }

    /// Question block, empty when no usable question was given
    pub fn question_section(&self) -> Vec<String> {
        let question = self
            .question
            .as_deref()
            .map(format_question)
            .unwrap_or_default();

        if question.is_empty() {
            return Vec::new();
        }

        vec!["**Question:**".to_string(), question, String::new()]
    }

    /// Project structure block
    pub fn structure_section(&self, root_name: &str, tree: &[String]) -> Vec<String> {
        let mut out = vec![
            "**Project Structure:**".to_string(),
            format!("Path: {}", root_name),
            String::new(),
        ];
        out.extend(tree.iter().cloned());
        out.push(String::new());
        out
    }

    /// Code files block; oversize files are dropped unless requested
    pub fn files_section(&self, records: &[FileRecord]) -> Vec<String> {
        let mut out = banner("CODE FILES:");

        for record in records.iter().filter(|r| self.keeps(r)) {
            out.push(self.format_file(record));
            out.push("-".repeat(RULE_WIDTH));
            out.push(String::new());
        }

        out
    }

    /// Single-file block
    pub fn single_file_section(&self, file_name: &str, parent: &str, record: &FileRecord) -> Vec<String> {
        let mut out = vec![
            "**Single File Analysis:**".to_string(),
            format!("File: {}", file_name),
            format!("Path: {}", parent),
            String::new(),
        ];
        out.extend(banner("FILE CONTENT:"));
        out.push(self.format_file(record));
        out
    }

    /// Whether `record` belongs in the output
    pub fn keeps(&self, record: &FileRecord) -> bool {
        self.include_large || !record.content.is_too_large()
    }
}

fn banner(title: &str) -> Vec<String> {
    let rule = "=".repeat(RULE_WIDTH);
    vec![rule.clone(), title.to_string(), rule, String::new()]
}
