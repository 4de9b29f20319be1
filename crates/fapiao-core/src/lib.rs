//! Core library for renaming Chinese VAT invoice (fapiao) PDFs.
//!
//! This crate provides:
//! - PDF text extraction (ordered line source per document)
//! - Single-pass invoice field scanning (contract number, seller,
//!   project name, amount, date, invoice number, quantity ratio)
//! - File name construction from the extracted record
//! - The in-place rename side effect

pub mod error;
pub mod models;
pub mod naming;
pub mod pdf;
pub mod scan;

pub use error::{FapiaoError, PdfError, RenameError, Result};
pub use models::config::{FapiaoConfig, MergePolicy, QuantityTrigger, ScanConfig};
pub use models::record::InvoiceRecord;
pub use naming::{build_file_name, rename_in_place, NameTemplate};
pub use pdf::{PdfTextExtractor, TextSource};
pub use scan::InvoiceScanner;
