/*!
 * Reporting functionality for aipt
 *
 * Renders an end-of-run summary with the tabled library. The report goes
 * to stderr so the document on stdout stays clean for piping.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::{FileContent, FileRecord};
use crate::utils::format_file_size;

/// Information about a file in the report
#[derive(Debug, Clone, Default)]
pub struct FileReportInfo {
    /// Path relative to the scan root
    pub path: String,
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

/// Statistics for one run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Scanned directory or file
    pub target: String,
    /// Time taken to scan and format
    pub duration: Duration,
    /// Files whose content was included
    pub files_processed: usize,
    /// Files skipped for exceeding the size ceiling
    pub files_too_large: usize,
    /// Files that could not be read
    pub files_unreadable: usize,
    /// Total size on disk of every collected file
    pub total_bytes: u64,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each file with content
    pub file_details: Vec<FileReportInfo>,
}

impl ScanReport {
    /// Summarize collected records
    pub fn from_records(target: &str, records: &[FileRecord], duration: Duration) -> Self {
        let mut report = Self {
            target: target.to_string(),
            duration,
            files_processed: 0,
            files_too_large: 0,
            files_unreadable: 0,
            total_bytes: 0,
            total_lines: 0,
            total_chars: 0,
            file_details: Vec::new(),
        };

        for record in records {
            report.total_bytes += record.size_bytes;
            match &record.content {
                FileContent::Text(text) => {
                    let info = FileReportInfo {
                        path: record.relative_path.clone(),
                        lines: text.lines().count(),
                        chars: text.chars().count(),
                    };
                    report.files_processed += 1;
                    report.total_lines += info.lines;
                    report.total_chars += info.chars;
                    report.file_details.push(info);
                }
                FileContent::TooLarge(_) => report.files_too_large += 1,
                FileContent::Unreadable(_) => report.files_unreadable += 1,
            }
        }

        report
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for scan results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on scan statistics
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stderr
    pub fn print_report(&self, report: &ScanReport) {
        eprintln!("\n{}", self.generate_report(report));
    }

    // Keep the last path segments that fit in `max_len`
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.chars().count() <= max_len {
            return path.to_string();
        }

        let mut segments = Vec::new();
        let mut current_len = 3;
        for part in path.rsplit(['/', '\\']) {
            let part_len = part.chars().count() + 1;
            if current_len + part_len > max_len {
                break;
            }
            segments.push(part);
            current_len += part_len;
        }

        if segments.is_empty() {
            let tail: String = path.chars().skip(path.chars().count() - (max_len - 3)).collect();
            return format!("...{}", tail);
        }

        let mut result = String::from("...");
        for part in segments.iter().rev() {
            result.push('/');
            result.push_str(part);
        }
        result
    }

    fn styled(table: &mut Table) -> String {
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));
        table.to_string()
    }

    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Target".to_string(),
                value: report.target.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Included".to_string(),
                value: self.format_number(report.files_processed),
            },
            SummaryRow {
                key: "🐘 Too Large".to_string(),
                value: self.format_number(report.files_too_large),
            },
            SummaryRow {
                key: "⚠️ Unreadable".to_string(),
                value: self.format_number(report.files_unreadable),
            },
            SummaryRow {
                key: "💾 Size on Disk".to_string(),
                value: format_file_size(report.total_bytes),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(report.total_lines),
            },
            SummaryRow {
                key: "📦 LLM Tokens".to_string(),
                value: format!(
                    "{} tokens (estimated)",
                    self.format_number(report.total_chars / 4)
                ),
            },
        ];

        Self::styled(&mut Table::new(rows))
    }

    fn create_files_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        let mut files: Vec<&FileReportInfo> = report.file_details.iter().collect();
        files.sort_by(|a, b| b.chars.cmp(&a.chars));
        if files.len() > 15 {
            files.truncate(10);
        }

        let rows: Vec<FileRow> = files
            .iter()
            .map(|info| FileRow {
                path: self.format_path(&info.path, 60),
                lines: self.format_number(info.lines),
                tokens: self.format_number(info.chars / 4),
            })
            .collect();

        Self::styled(&mut Table::new(rows))
    }

    fn generate_console_report(&self, report: &ScanReport) -> String {
        let summary_table = self.create_summary_table(report);
        let files_table = self.create_files_table(report);

        let summary_title = "✅  CONTEXT READY";
        let files_title = if report.file_details.len() > 15 {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT  📋"
        } else {
            "📋  INCLUDED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title, files_table, summary_title, summary_table
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(path: &str, content: FileContent, size_bytes: u64) -> FileRecord {
        FileRecord {
            relative_path: path.to_string(),
            absolute_path: PathBuf::from(path),
            language: "text".to_string(),
            content,
            size_bytes,
        }
    }

    #[test]
    fn test_from_records() {
        let records = vec![
            record("a.txt", FileContent::Text("one\ntwo\n".into()), 8),
            record("big.txt", FileContent::TooLarge(900), 900),
            record("gone.txt", FileContent::Unreadable("missing".into()), 0),
        ];

        let report = ScanReport::from_records("project", &records, Duration::from_millis(5));
        assert_eq!(report.files_processed, 1);
        assert_eq!(report.files_too_large, 1);
        assert_eq!(report.files_unreadable, 1);
        assert_eq!(report.total_bytes, 908);
        assert_eq!(report.total_lines, 2);
        assert_eq!(report.total_chars, 8);
        assert_eq!(report.file_details.len(), 1);
    }

    #[test]
    fn test_console_report_contents() {
        let records = vec![record("src/main.py", FileContent::Text("x".repeat(4000)), 4000)];
        let report = ScanReport::from_records("project", &records, Duration::from_millis(1));

        let text = Reporter::new(ReportFormat::ConsoleTable).generate_report(&report);
        assert!(text.contains("INCLUDED FILES"));
        assert!(text.contains("src/main.py"));
        assert!(text.contains("1.0K tokens (estimated)"));
        assert!(text.contains("3.91 KB"));
    }

    #[test]
    fn test_format_path_keeps_tail() {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        assert_eq!(reporter.format_path("src/main.rs", 60), "src/main.rs");

        let long = format!("{}/inner/file.rs", "a".repeat(70));
        assert_eq!(reporter.format_path(&long, 20), ".../inner/file.rs");
    }
}
