//! Error types for XML generation.

use thiserror::Error;

/// Result type alias for doclet-xml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating the XML document.
///
/// Every generation-time failure funnels into this one type at the
/// driver boundary; nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The output sink could not be created, written, or flushed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying XML writer rejected an event.
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// An emitter primitive was called out of sequence. The walker
    /// balances its calls, so hitting this is a bug, not a user error.
    #[error("invalid writer state: {0}")]
    InvalidWriterState(&'static str),
}
