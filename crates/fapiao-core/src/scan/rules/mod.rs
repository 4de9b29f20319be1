//! Declarative rule table for the scalar invoice fields.

pub mod patterns;

use regex::Regex;

use crate::models::record::{InvoiceRecord, ScalarField};
use patterns::*;

/// A first-match-wins extraction rule for one scalar field.
///
/// `patterns` are tried in order on each line; the first one that
/// matches captures group 1 as the field value. Listing a fallback
/// after a stricter pattern means the fallback is attempted on the
/// same line only when the strict pattern fails there.
pub struct ScalarRule {
    /// Target field in the record.
    pub field: ScalarField,
    /// Capture patterns, strictest first. Group 1 is the value.
    pub patterns: Vec<&'static Regex>,
}

impl ScalarRule {
    /// Apply this rule to a line. No-op if the field is already
    /// populated (first match wins) or nothing matches.
    pub fn apply(&self, line: &str, record: &mut InvoiceRecord) {
        if record.scalar(self.field).is_some() {
            return;
        }
        for pattern in &self.patterns {
            if let Some(caps) = pattern.captures(line) {
                record.set_scalar(self.field, caps[1].trim().to_string());
                return;
            }
        }
    }
}

/// The full scalar rule table, in record-field order.
pub fn scalar_rules() -> Vec<ScalarRule> {
    vec![
        ScalarRule {
            field: ScalarField::ContractNumber,
            patterns: vec![&*CONTRACT_NUMBER],
        },
        ScalarRule {
            field: ScalarField::SellerName,
            patterns: vec![&*SELLER_NAME],
        },
        ScalarRule {
            field: ScalarField::IssueDate,
            patterns: vec![&*ISSUE_DATE],
        },
        ScalarRule {
            field: ScalarField::InvoiceAmount,
            patterns: vec![&*AMOUNT_TOTAL, &*AMOUNT_FALLBACK],
        },
        ScalarRule {
            field: ScalarField::InvoiceNumber,
            patterns: vec![&*INVOICE_NUMBER],
        },
    ]
}
