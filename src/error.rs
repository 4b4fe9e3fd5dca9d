//! Crate-wide error handling for aipt
//!
//! Only root-level failures live here. Problems with a single file or
//! directory during a scan are recorded in the scan results instead.

use std::io;
use thiserror::Error;

/// Error type for aipt operations
#[derive(Error, Debug)]
pub enum AiptError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scan target does not exist
    #[error("Path '{0}' does not exist")]
    PathNotFound(String),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for aipt operations
pub type Result<T> = std::result::Result<T, AiptError>;

/// Creates an AiptError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::AiptError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
