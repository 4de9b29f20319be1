//! Quantity collection from invoice table rows.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::config::QuantityTrigger;

use super::rules::patterns::QUANTITY_ROW;

/// Collects quantities from table rows during a scan pass and derives
/// the quantity ratio after the pass completes.
#[derive(Debug)]
pub struct QuantityCollector {
    trigger: QuantityTrigger,
    quantities: Vec<Decimal>,
}

impl QuantityCollector {
    pub fn new(trigger: QuantityTrigger) -> Self {
        Self {
            trigger,
            quantities: Vec::new(),
        }
    }

    /// Inspect one trimmed line; collect its quantity if it is a
    /// quantity-bearing row. A malformed number is logged and skipped,
    /// never fatal.
    pub fn observe(&mut self, line: &str) {
        let triggered = match &self.trigger {
            QuantityTrigger::Marker => line.contains('*'),
            QuantityTrigger::CategoryToken(token) => line.contains(token.as_str()),
        };
        if !triggered {
            return;
        }

        if let Some(caps) = QUANTITY_ROW.captures(line) {
            let token = &caps[2];
            match Decimal::from_str(token) {
                Ok(quantity) => self.quantities.push(quantity),
                Err(_) => warn!(token, "unparseable quantity token, skipping row"),
            }
        }
    }

    /// `floor(min * 100)` over all collected quantities, formatted as
    /// an integer percentage. `None` if no row matched.
    pub fn finish(self) -> Option<String> {
        let min = self.quantities.into_iter().min()?;
        let scaled = (min * Decimal::ONE_HUNDRED).floor();
        scaled.to_i64().map(|pct| format!("{}%", pct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(trigger: QuantityTrigger, lines: &[&str]) -> Option<String> {
        let mut collector = QuantityCollector::new(trigger);
        for line in lines {
            collector.observe(line);
        }
        collector.finish()
    }

    #[test]
    fn test_minimum_scaled_and_floored() {
        let result = ratio(
            QuantityTrigger::Marker,
            &["* 台 0.5 123.45 ", "* 台 0.8 67.8 "],
        );
        assert_eq!(result.as_deref(), Some("50%"));
    }

    #[test]
    fn test_fractional_minimum_truncates() {
        let result = ratio(QuantityTrigger::Marker, &["* 套 0.555 99.00 "]);
        assert_eq!(result.as_deref(), Some("55%"));
    }

    #[test]
    fn test_no_rows_yields_none() {
        let result = ratio(QuantityTrigger::Marker, &["普通行", "台 0.5 1.00 "]);
        assert!(result.is_none());
    }

    #[test]
    fn test_malformed_token_skipped() {
        let result = ratio(
            QuantityTrigger::Marker,
            &["* 台 1.2.3 50.00 ", "* 台 0.4 50.00 "],
        );
        assert_eq!(result.as_deref(), Some("40%"));
    }

    #[test]
    fn test_non_numeric_row_does_not_match() {
        let result = ratio(QuantityTrigger::Marker, &["* 台 abc ", "* 个 2.0 10.00 "]);
        assert_eq!(result.as_deref(), Some("200%"));
    }

    #[test]
    fn test_category_token_trigger() {
        let trigger = QuantityTrigger::CategoryToken("机床".to_string());
        let result = ratio(
            trigger,
            &["机床 配件 台 0.3 10.00 ", "* 台 0.1 10.00 "],
        );
        assert_eq!(result.as_deref(), Some("30%"));
    }
}
