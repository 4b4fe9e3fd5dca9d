/*!
 * File content reading with a size ceiling
 */

use std::fs;
use std::path::Path;

use log::debug;

use crate::types::FileContent;

/// Read `path` as text unless it is larger than `max_size` bytes
///
/// Files exactly `max_size` bytes long are read. Invalid UTF-8 sequences
/// are dropped rather than failing the read, and any I/O error is
/// captured in the returned value so one bad file never aborts a scan.
pub fn read_file_content(path: &Path, max_size: u64) -> FileContent {
    let size = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            debug!("Cannot stat {}: {}", path.display(), e);
            return FileContent::Unreadable(e.to_string());
        }
    };

    if size > max_size {
        debug!(
            "Skipping content of {} ({} bytes > {})",
            path.display(),
            size,
            max_size
        );
        return FileContent::TooLarge(size);
    }

    match fs::read(path) {
        Ok(bytes) => FileContent::Text(decode_lossy(&bytes)),
        Err(e) => {
            debug!("Cannot read {}: {}", path.display(), e);
            FileContent::Unreadable(e.to_string())
        }
    }
}

/// UTF-8 decode that silently drops undecodable bytes
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
