//! Single-pass invoice field scanner.

use tracing::debug;

use crate::models::config::ScanConfig;
use crate::models::record::InvoiceRecord;

use super::project::ProjectNameBuilder;
use super::quantity::QuantityCollector;
use super::rules::{scalar_rules, ScalarRule};

/// Scans an ordered sequence of text lines into an [`InvoiceRecord`].
///
/// The scan is a pure function of its input: deterministic, total
/// (malformed input leaves fields empty rather than failing), and free
/// of side effects apart from diagnostic logging. Each extractor
/// guards on its own field's emptiness, so evaluation order within a
/// line does not affect the result.
pub struct InvoiceScanner {
    config: ScanConfig,
    rules: Vec<ScalarRule>,
}

impl InvoiceScanner {
    /// Create a scanner with default policies.
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    /// Create a scanner with explicit policy configuration.
    pub fn with_config(config: ScanConfig) -> Self {
        Self {
            config,
            rules: scalar_rules(),
        }
    }

    /// Consume one document's line sequence and produce its record.
    pub fn scan<I>(&self, lines: I) -> InvoiceRecord
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut record = InvoiceRecord::default();
        let mut project = ProjectNameBuilder::new(self.config.merge_policy);
        let mut quantities = QuantityCollector::new(self.config.quantity_trigger.clone());

        for line in lines {
            let line = line.as_ref().trim();

            for rule in &self.rules {
                rule.apply(line, &mut record);
            }
            project.observe(line);
            quantities.observe(line);
        }

        record.project_name = project.finish();
        record.quantity_ratio = quantities.finish();

        if !record.missing_fields().is_empty() {
            debug!(missing = ?record.missing_fields(), "scan left fields empty");
        }
        record
    }

    /// Convenience wrapper over [`scan`](Self::scan) for a full
    /// document text.
    pub fn scan_text(&self, text: &str) -> InvoiceRecord {
        self.scan(text.lines())
    }
}

impl Default for InvoiceScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::{MergePolicy, QuantityTrigger};
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
电子发票（增值税专用发票）
发票号码：25117000000318420422
开票日期：2024年03月15日
购买方 名称：某某重工集团有限公司
销售方 名称：某某机械制造有限公司
项目名称
数控机床*配件* 1 台
购方信息 税号91330000000000000X
合同编号SLG-2024-001 备注栏
* 台 0.5 557522.12 13% 72477.88
* 台 0.8 123456.78 13% 16049.38
价税合计（大写）壹佰万元整 （小写）￥1,234.56
";

    #[test]
    fn test_scan_full_document() {
        let record = InvoiceScanner::new().scan_text(SAMPLE);

        assert_eq!(record.contract_number.as_deref(), Some("SLG-2024-001"));
        assert_eq!(
            record.seller_name.as_deref(),
            Some("某某机械制造有限公司")
        );
        assert_eq!(record.project_name.as_deref(), Some("数控机床"));
        assert_eq!(record.invoice_amount.as_deref(), Some("1,234.56"));
        assert_eq!(record.issue_date.as_deref(), Some("2024年03月15日"));
        assert_eq!(
            record.invoice_number.as_deref(),
            Some("25117000000318420422")
        );
        assert_eq!(record.quantity_ratio.as_deref(), Some("50%"));
    }

    #[test]
    fn test_no_matching_lines_yields_empty_record() {
        let record = InvoiceScanner::new().scan(["随便一行", "另一行", ""]);
        assert!(record.is_empty());
    }

    #[test]
    fn test_empty_input_yields_empty_record() {
        let record = InvoiceScanner::new().scan(std::iter::empty::<&str>());
        assert!(record.is_empty());
    }

    #[test]
    fn test_first_invoice_number_wins() {
        let record =
            InvoiceScanner::new().scan(["发票号码：111", "发票号码：222"]);
        assert_eq!(record.invoice_number.as_deref(), Some("111"));
    }

    #[test]
    fn test_scan_is_idempotent() {
        let scanner = InvoiceScanner::new();
        let first = scanner.scan_text(SAMPLE);
        let second = scanner.scan_text(SAMPLE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_lines_are_trimmed_before_matching() {
        let record = InvoiceScanner::new().scan(["   发票号码：333   "]);
        assert_eq!(record.invoice_number.as_deref(), Some("333"));
    }

    #[test]
    fn test_malformed_quantity_does_not_poison_ratio() {
        let record = InvoiceScanner::new().scan([
            "* 台 1.2.3 50.00 ",
            "* 条 0.25 80.00 ",
        ]);
        assert_eq!(record.quantity_ratio.as_deref(), Some("25%"));
    }

    #[test]
    fn test_policy_b_waits_for_two_tokens() {
        let config = ScanConfig {
            merge_policy: MergePolicy::TwoValidTokens,
            ..Default::default()
        };
        let record = InvoiceScanner::with_config(config).scan([
            "货物名称",
            "购方 地址栏",
            "数控机床",
            "附属设备",
        ]);
        assert_eq!(record.project_name.as_deref(), Some("数控机床附属设备"));
    }

    #[test]
    fn test_category_token_quantity_trigger() {
        let config = ScanConfig {
            quantity_trigger: QuantityTrigger::CategoryToken("机床".to_string()),
            ..Default::default()
        };
        let record = InvoiceScanner::with_config(config).scan([
            "机床 整机 台 0.4 100.00 ",
            "* 台 0.1 100.00 ",
        ]);
        assert_eq!(record.quantity_ratio.as_deref(), Some("40%"));
    }
}
