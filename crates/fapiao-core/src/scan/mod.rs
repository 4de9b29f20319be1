//! Invoice field scanning module.

mod project;
mod quantity;
pub mod rules;
mod scanner;

pub use scanner::InvoiceScanner;
