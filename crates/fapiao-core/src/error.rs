//! Error types for the fapiao-core library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the fapiao library.
#[derive(Error, Debug)]
pub enum FapiaoError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Rename error.
    #[error("rename error: {0}")]
    Rename(#[from] RenameError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to producing the text line source for a document.
///
/// Any of these is a per-document failure: the batch driver reports it
/// and continues with the remaining documents.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors from the per-file rename side effect.
#[derive(Error, Debug)]
pub enum RenameError {
    /// The target file name already exists in the directory.
    #[error("target already exists: {0}")]
    TargetExists(PathBuf),

    /// The OS refused the rename.
    #[error("rename denied for {path}: {source}")]
    Denied {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the fapiao library.
pub type Result<T> = std::result::Result<T, FapiaoError>;
