//! The invoice record produced by a single scan pass.

use serde::{Deserialize, Serialize};

/// Structured fields extracted from one invoice document.
///
/// Every field is optional: an absent field means its trigger pattern
/// never matched during the scan. An all-empty record is a valid,
/// well-formed result for an unparseable document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceRecord {
    /// Contract number (e.g. `SLG-2024-001`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,

    /// Seller name from the 销售方 name label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,

    /// Project/goods name merged from up to two lines after the label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// Total amount in figures, two fractional digits (e.g. `1,234.56`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_amount: Option<String>,

    /// Issue date in `YYYY年MM月DD日` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,

    /// Invoice number (digits only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Minimum table-row quantity scaled by 100, truncated, as `NN%`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_ratio: Option<String>,
}

/// Scalar fields populated by the first-match-wins rule table.
///
/// `project_name` and `quantity_ratio` are not scalar: they are filled
/// by the merge-window state machine and the quantity collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    ContractNumber,
    SellerName,
    IssueDate,
    InvoiceAmount,
    InvoiceNumber,
}

impl ScalarField {
    /// Field name as used in serialized output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ContractNumber => "contract_number",
            Self::SellerName => "seller_name",
            Self::IssueDate => "issue_date",
            Self::InvoiceAmount => "invoice_amount",
            Self::InvoiceNumber => "invoice_number",
        }
    }
}

impl InvoiceRecord {
    /// Current value of a scalar field.
    pub fn scalar(&self, field: ScalarField) -> Option<&str> {
        match field {
            ScalarField::ContractNumber => self.contract_number.as_deref(),
            ScalarField::SellerName => self.seller_name.as_deref(),
            ScalarField::IssueDate => self.issue_date.as_deref(),
            ScalarField::InvoiceAmount => self.invoice_amount.as_deref(),
            ScalarField::InvoiceNumber => self.invoice_number.as_deref(),
        }
    }

    /// Set a scalar field. Callers guard on emptiness first; the
    /// scanner never overwrites a populated field.
    pub fn set_scalar(&mut self, field: ScalarField, value: String) {
        let slot = match field {
            ScalarField::ContractNumber => &mut self.contract_number,
            ScalarField::SellerName => &mut self.seller_name,
            ScalarField::IssueDate => &mut self.issue_date,
            ScalarField::InvoiceAmount => &mut self.invoice_amount,
            ScalarField::InvoiceNumber => &mut self.invoice_number,
        };
        *slot = Some(value);
    }

    /// True if no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.contract_number.is_none()
            && self.seller_name.is_none()
            && self.project_name.is_none()
            && self.invoice_amount.is_none()
            && self.issue_date.is_none()
            && self.invoice_number.is_none()
            && self.quantity_ratio.is_none()
    }

    /// Names of fields that stayed empty after the scan.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let fields: [(&'static str, bool); 7] = [
            ("contract_number", self.contract_number.is_none()),
            ("seller_name", self.seller_name.is_none()),
            ("project_name", self.project_name.is_none()),
            ("invoice_amount", self.invoice_amount.is_none()),
            ("issue_date", self.issue_date.is_none()),
            ("invoice_number", self.invoice_number.is_none()),
            ("quantity_ratio", self.quantity_ratio.is_none()),
        ];
        for (name, absent) in fields {
            if absent {
                missing.push(name);
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_record() {
        let record = InvoiceRecord::default();
        assert!(record.is_empty());
        assert_eq!(record.missing_fields().len(), 7);
    }

    #[test]
    fn test_scalar_accessors() {
        let mut record = InvoiceRecord::default();
        assert!(record.scalar(ScalarField::ContractNumber).is_none());

        record.set_scalar(ScalarField::ContractNumber, "SLG-2024-001".to_string());
        assert_eq!(
            record.scalar(ScalarField::ContractNumber),
            Some("SLG-2024-001")
        );
        assert!(!record.is_empty());
        assert!(!record.missing_fields().contains(&"contract_number"));
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let record = InvoiceRecord {
            invoice_number: Some("25117000000318420422".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"invoice_number":"25117000000318420422"}"#);

        let back: InvoiceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
