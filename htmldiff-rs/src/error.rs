//! Error types for HTML diffing.

use thiserror::Error;

/// Result type alias for diff operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while diffing HTML documents.
#[derive(Error, Debug)]
pub enum Error {
    /// A required input document was empty.
    #[error("{0} document is empty")]
    EmptyDocument(&'static str),

    /// I/O error while reading an input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
