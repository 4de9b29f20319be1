//! Data models: the invoice record and configuration.

pub mod config;
pub mod record;

pub use config::{FapiaoConfig, MergePolicy, QuantityTrigger, ScanConfig};
pub use record::InvoiceRecord;
