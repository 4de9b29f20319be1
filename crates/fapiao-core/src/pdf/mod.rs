//! PDF line source module.

mod extractor;

pub use extractor::PdfTextExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for producing a document's text line sequence.
///
/// One call per document; pages are concatenated in page order with
/// line order preserved within a page. The sequence is finite and can
/// be produced again from the same loaded document.
pub trait TextSource {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract the flattened text of the entire document.
    fn extract_text(&self) -> Result<String>;

    /// Extract the ordered line sequence the scanner consumes.
    fn extract_lines(&self) -> Result<Vec<String>> {
        Ok(self.extract_text()?.lines().map(str::to_string).collect())
    }
}
