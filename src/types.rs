/*!
 * Core types and data structures for aipt
 */

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use strum::Display;

/// Sections emitted in directory mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputMode {
    /// Directory tree only
    Structure,
    /// File contents only
    Files,
    /// Tree followed by file contents
    Both,
}

impl OutputMode {
    /// Whether the tree section is emitted
    pub fn includes_structure(self) -> bool {
        matches!(self, Self::Structure | Self::Both)
    }

    /// Whether the file section is emitted
    pub fn includes_files(self) -> bool {
        matches!(self, Self::Files | Self::Both)
    }
}

/// Outcome of reading one file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Decoded text (undecodable bytes dropped)
    Text(String),
    /// File exceeds the size ceiling; holds the real size
    TooLarge(u64),
    /// I/O failure while sizing or reading
    Unreadable(String),
}

impl FileContent {
    /// Decoded text, if the read succeeded
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Reason the content is missing, if it is
    pub fn error(&self) -> Option<String> {
        match self {
            Self::Text(_) => None,
            other => Some(other.to_string()),
        }
    }

    pub fn is_too_large(&self) -> bool {
        matches!(self, Self::TooLarge(_))
    }
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::TooLarge(size) => {
                write!(f, "File too large ({} bytes), skipping content", size)
            }
            Self::Unreadable(message) => write!(f, "Error reading file: {}", message),
        }
    }
}

/// A collected source file
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to the scan root, platform separators
    pub relative_path: String,
    /// Absolute path on disk
    pub absolute_path: PathBuf,
    /// Code-fence language tag
    pub language: String,
    /// Text or the reason it is missing
    pub content: FileContent,
    /// Size at collection time, 0 if the file vanished
    pub size_bytes: u64,
}

impl FileRecord {
    pub fn text(&self) -> Option<&str> {
        self.content.text()
    }

    pub fn error(&self) -> Option<String> {
        self.content.error()
    }
}
