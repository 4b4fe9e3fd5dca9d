/*!
 * Source file collection
 */

use std::fs;
use std::path::Path;

use indicatif::ProgressBar;
use log::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::filter::{is_excluded_dir, language_for, matches_any_extension};
use crate::reader::read_file_content;
use crate::types::FileRecord;

/// Collector for source files under a scan root
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress indicator, ticked once per collected file
    progress: ProgressBar,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: ProgressBar) -> Self {
        Self { config, progress }
    }

    /// Collect every matching file under `root`, sorted by relative path
    ///
    /// Depth is unbounded. Excluded directories are pruned before the walk
    /// descends into them, so nothing beneath them is ever listed.
    pub fn scan(&self, root: &Path) -> Vec<FileRecord> {
        info!("Collecting files under {}", root.display());

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !self.is_pruned(entry));

        let mut records = Vec::new();
        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }
            // Links to directories are listed but never followed
            if entry.path_is_symlink() && entry.path().is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !matches_any_extension(&name, &self.config.extensions) {
                continue;
            }

            let relative_path = entry
                .path()
                .strip_prefix(root)
                .unwrap_or_else(|_| entry.path())
                .to_string_lossy()
                .to_string();

            records.push(self.build_record(entry.path(), relative_path));
        }

        records.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        info!("Collected {} files", records.len());
        records
    }

    /// Build the record for a single file given directly
    ///
    /// Returns `None` when the file name matches none of the configured
    /// extensions.
    pub fn scan_file(&self, path: &Path) -> Option<FileRecord> {
        let name = path.file_name()?.to_string_lossy().to_string();
        if !matches_any_extension(&name, &self.config.extensions) {
            debug!("{} has no supported extension", path.display());
            return None;
        }

        Some(self.build_record(path, name))
    }

    /// Whether the walk should skip `entry` and everything beneath it
    fn is_pruned(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && is_excluded_dir(&entry.file_name().to_string_lossy(), &self.config.exclude_dirs)
    }

    fn build_record(&self, abs_path: &Path, relative_path: String) -> FileRecord {
        self.progress.inc(1);

        // Truncate long names to keep the spinner on one line
        let char_count = relative_path.chars().count();
        let display_name = if char_count > 40 {
            let tail: String = relative_path.chars().skip(char_count - 37).collect();
            format!("...{}", tail)
        } else {
            relative_path.clone()
        };
        self.progress
            .set_message(format!("Current file: {}", display_name));

        let content = read_file_content(abs_path, self.config.max_size);
        // The file may have vanished since it was listed
        let size_bytes = fs::metadata(abs_path).map(|m| m.len()).unwrap_or(0);

        FileRecord {
            relative_path,
            absolute_path: abs_path.to_path_buf(),
            language: language_for(abs_path, &self.config.languages),
            content,
            size_bytes,
        }
    }
}
