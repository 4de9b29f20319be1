//! Configuration structures for scanning and naming.

use serde::{Deserialize, Serialize};

use crate::naming::NameTemplate;

/// Main configuration for the fapiao pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FapiaoConfig {
    /// Field scanner configuration.
    pub scan: ScanConfig,

    /// File-name template configuration.
    pub naming: NameTemplate,
}

/// Invoice field scanner configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// End-of-window policy for the project-name merge.
    pub merge_policy: MergePolicy,

    /// What marks a table line as a quantity-bearing row.
    pub quantity_trigger: QuantityTrigger,
}

/// How the project-name merge window decides it is finished.
///
/// Two divergent behaviors exist in the wild; the choice is deliberate
/// configuration, not a hidden assumption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Close after the second content line unconditionally. If that
    /// line still carries an unstripped `*`, discard it and keep only
    /// the first line's capture. Guarantees termination within two
    /// consumed lines.
    #[default]
    TwoLineWindow,

    /// Keep the window open until two valid tokens have accumulated.
    TwoValidTokens,
}

/// Trigger that marks a line as a quantity-bearing table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityTrigger {
    /// The line contains the generic `*` marker.
    #[default]
    Marker,

    /// The line contains a specific item-category annotation token
    /// (e.g. `机床`).
    CategoryToken(String),
}

impl FapiaoConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
