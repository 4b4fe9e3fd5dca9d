/*!
 * aipt - package a project for an AI assistant's context window
 *
 * Renders a directory tree, collects the text of recognized source files
 * and formats both into a single document.
 */

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod reader;
pub mod report;
pub mod scanner;
pub mod tree;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use app::{analyze, run, Analysis, Outcome};
pub use config::Config;
pub use error::{AiptError, Result};
pub use reader::read_file_content;
pub use scanner::Scanner;
pub use tree::render_tree;
pub use types::{FileContent, FileRecord, OutputMode};
pub use writer::MarkdownWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
