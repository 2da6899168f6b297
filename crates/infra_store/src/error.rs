//! Store error types

use thiserror::Error;

/// Errors that can occur while reading or writing a directory file
///
/// A failed save leaves the in-memory directory ahead of the file on disk;
/// that divergence is the caller's to report, not the store's to hide.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
}
