//! Error types for BSP file inspection.
//!
//! All errors implement the `std::error::Error` trait and carry structured
//! context (path, offsets, byte counts) rather than preformatted strings.
//!
//! ## Error Categories
//!
//! - **File Errors**: problems opening or reading a BSP file from disk
//! - **Size Errors**: a buffer that is not exactly the fixed BSP file size
//! - **Truncation Errors**: a primitive read that would run past a slice end
//!
//! The CLI treats every per-file error the same way: the offending file is
//! skipped and the batch continues.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for BSP operations.
pub type Result<T, E = BspError> = std::result::Result<T, E>;

/// Main error type for BSP file inspection.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BspError {
    #[error("BSP file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("BSP size mismatch: expected {expected} bytes, found {found}")]
    Size { expected: usize, found: usize },

    #[error(
        "Truncated read in {context}: need {needed} bytes at offset {offset:#x}, have {have}"
    )]
    Truncated { context: &'static str, offset: usize, needed: usize, have: usize },
}

impl BspError {
    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        BspError::File { path, source }
    }
}
