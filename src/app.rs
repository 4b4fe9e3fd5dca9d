/*!
 * One invocation, from resolved configuration to emitted document
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::clipboard;
use crate::config::Config;
use crate::error::{AiptError, Result};
use crate::report::{ReportFormat, Reporter, ScanReport};
use crate::scanner::Scanner;
use crate::tree::render_tree;
use crate::types::FileRecord;
use crate::writer::MarkdownWriter;

/// What an analysis produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A document ready to print and copy
    Document(String),
    /// Single file whose name matches none of the configured extensions
    Unsupported { path: PathBuf, supported: String },
    /// Single file over the size ceiling without `--include-large`
    SkippedLarge(String),
    /// Directory with no matching files
    NoFiles,
}

/// Result of analyzing one target
#[derive(Debug)]
pub struct Analysis {
    pub outcome: Outcome,
    /// Every collected record, including ones left out of the document
    pub records: Vec<FileRecord>,
}

/// Canonical path of the scan target
///
/// A missing target is the one path problem that aborts the run.
pub fn resolve_target(target: &Path) -> Result<PathBuf> {
    fs::canonicalize(target).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AiptError::PathNotFound(target.display().to_string()),
        _ => AiptError::Io(e),
    })
}

/// Analyze the configured target and build the document
pub fn analyze(config: &Config, progress: ProgressBar) -> Result<Analysis> {
    let root = resolve_target(&config.target)?;
    let scanner = Scanner::new(config.clone(), progress);
    let writer = MarkdownWriter::new(config);

    if root.is_file() {
        analyze_file(config, &scanner, &writer, &root)
    } else {
        analyze_directory(config, &scanner, &writer, &root)
    }
}

fn analyze_file(
    config: &Config,
    scanner: &Scanner,
    writer: &MarkdownWriter,
    path: &Path,
) -> Result<Analysis> {
    info!("Analyzing single file {}", path.display());

    let Some(record) = scanner.scan_file(path) else {
        return Ok(Analysis {
            outcome: Outcome::Unsupported {
                path: path.to_path_buf(),
                supported: config.supported_extensions(),
            },
            records: Vec::new(),
        });
    };

    if !writer.keeps(&record) {
        return Ok(Analysis {
            outcome: Outcome::SkippedLarge(record.content.to_string()),
            records: vec![record],
        });
    }

    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let parent = path
        .parent()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    let mut lines = writer.question_section();
    lines.extend(writer.single_file_section(&file_name, &parent, &record));

    Ok(Analysis {
        outcome: Outcome::Document(lines.join("\n")),
        records: vec![record],
    })
}

fn analyze_directory(
    config: &Config,
    scanner: &Scanner,
    writer: &MarkdownWriter,
    root: &Path,
) -> Result<Analysis> {
    info!("Analyzing directory {}", root.display());

    let mut lines = writer.question_section();
    let mut records = Vec::new();

    if config.output.includes_structure() {
        let root_name = root
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let tree = render_tree(root, &config.exclude_dirs, config.max_depth);
        lines.extend(writer.structure_section(&root_name, &tree));
    }

    if config.output.includes_files() {
        records = scanner.scan(root);
        if records.is_empty() {
            return Ok(Analysis {
                outcome: Outcome::NoFiles,
                records,
            });
        }
        lines.extend(writer.files_section(&records));
    }

    Ok(Analysis {
        outcome: Outcome::Document(lines.join("\n")),
        records,
    })
}

/// Run one invocation: analyze, print, copy and optionally report
pub fn run(config: Config) -> Result<()> {
    config.validate()?;

    let start_time = Instant::now();
    let progress = spinner();
    let analysis = analyze(&config, progress.clone());
    progress.finish_and_clear();
    let analysis = analysis?;

    match &analysis.outcome {
        Outcome::Document(text) => {
            println!("{}", text);
            if config.copy && !text.is_empty() {
                clipboard::copy_with_feedback(text);
            }
        }
        Outcome::Unsupported { path, supported } => {
            eprintln!(
                "Error: '{}' is not a supported code file type.",
                path.display()
            );
            eprintln!("Supported extensions: {}", supported);
        }
        Outcome::SkippedLarge(reason) => eprintln!("Skipping large file: {}", reason),
        Outcome::NoFiles => eprintln!("No code files found in the specified directory."),
    }

    if config.stats {
        let report = ScanReport::from_records(
            &config.target.display().to_string(),
            &analysis.records,
            start_time.elapsed(),
        );
        Reporter::new(ReportFormat::ConsoleTable).print_report(&report);
    }

    Ok(())
}

fn spinner() -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    progress.set_style(style);
    progress.set_prefix("📂 Scanning");
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}
