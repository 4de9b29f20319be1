//! File-name construction from a record, and the rename side effect.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RenameError;
use crate::models::record::InvoiceRecord;

/// File-name template. The segment order is fixed (contract number,
/// invoice number, seller, project, quantity ratio); the literal
/// prefix, separators, and extension are a configuration surface
/// rather than a hard contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NameTemplate {
    /// Literal prefix at the start of every produced name.
    pub prefix: String,

    /// Separator placed between segments.
    pub separator: String,

    /// Whether the separator also appears between prefix and the
    /// first segment (both variants are in observed use).
    pub separator_after_prefix: bool,

    /// File extension, without the dot.
    pub extension: String,
}

impl Default for NameTemplate {
    fn default() -> Self {
        Self {
            prefix: "发票".to_string(),
            separator: "_".to_string(),
            separator_after_prefix: false,
            extension: "pdf".to_string(),
        }
    }
}

/// Remove characters that would make a segment invalid in a file name
/// (path separators and NUL bytes).
pub fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | '\0'))
        .collect()
}

/// Build the file name for a scanned record. Absent fields produce
/// empty segments; the name is always well formed.
pub fn build_file_name(record: &InvoiceRecord, template: &NameTemplate) -> String {
    let segments = [
        record.contract_number.as_deref().unwrap_or(""),
        record.invoice_number.as_deref().unwrap_or(""),
        record.seller_name.as_deref().unwrap_or(""),
        record.project_name.as_deref().unwrap_or(""),
        record.quantity_ratio.as_deref().unwrap_or(""),
    ];

    let body = segments
        .iter()
        .map(|s| sanitize_segment(s))
        .collect::<Vec<_>>()
        .join(&template.separator);

    let mut name = template.prefix.clone();
    if template.separator_after_prefix {
        name.push_str(&template.separator);
    }
    name.push_str(&body);
    name.push('.');
    name.push_str(&template.extension);
    name
}

/// Rename a file within its own directory.
///
/// Fails per file, never per batch: the caller reports the error and
/// moves on to the next document.
pub fn rename_in_place(path: &Path, new_name: &str) -> Result<PathBuf, RenameError> {
    let target = path
        .parent()
        .map(|dir| dir.join(new_name))
        .unwrap_or_else(|| PathBuf::from(new_name));

    if target.exists() {
        return Err(RenameError::TargetExists(target));
    }

    std::fs::rename(path, &target).map_err(|source| RenameError::Denied {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Renamed {} -> {}", path.display(), target.display());
    Ok(target)
}
