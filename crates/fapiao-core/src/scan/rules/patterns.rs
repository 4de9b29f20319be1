//! Regex patterns for Chinese VAT invoice field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Contract number: contiguous run of word/hyphen characters
    // starting at the SLG prefix.
    pub static ref CONTRACT_NUMBER: Regex = Regex::new(
        r"(SLG[\w\-]+)"
    ).unwrap();

    // Seller name: the 名称 label inside the 销售方 block.
    pub static ref SELLER_NAME: Regex = Regex::new(
        r"销[\s\S]*?名称：\s*(.+)"
    ).unwrap();

    // Issue date: 开票日期：YYYY年MM月DD日
    pub static ref ISSUE_DATE: Regex = Regex::new(
        r"开票日期[:：]\s*(\d{4}年\d{2}月\d{2}日)"
    ).unwrap();

    // Total amount in figures, preceded by the 价税合计 label.
    pub static ref AMOUNT_TOTAL: Regex = Regex::new(
        r"价税合计.*?小写[^\n]*￥([\d,]+\.\d{2})"
    ).unwrap();

    // Looser amount fallback: any figures after the 小写 marker.
    pub static ref AMOUNT_FALLBACK: Regex = Regex::new(
        r"小写\s*￥([\d,]+\.\d{2})"
    ).unwrap();

    // Invoice number: 发票号码：digits
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"发票号码[:：]\s*(\d+)"
    ).unwrap();

    // Quantity-bearing table row: measure word followed by a decimal,
    // e.g. "台    0.2  557522.12"
    pub static ref QUANTITY_ROW: Regex = Regex::new(
        r"(台|条|套|个)\s+([\d.]+)\s"
    ).unwrap();

    // Inline category/model annotation delimited by a pair of asterisks,
    // e.g. "*机床配件*". Stripped before project-name candidates are
    // considered.
    pub static ref STARRED_ANNOTATION: Regex = Regex::new(
        r"\*.*?\*"
    ).unwrap();
}

/// Labels that open the project-name merge window.
pub const PROJECT_LABELS: [&str; 2] = ["项目名称", "货物名称"];

/// Tokens that disqualify a merge-window candidate line: the line
/// belongs to a buyer/seller info, tax-id, address, phone, or bank
/// section rather than the goods table.
pub const PROJECT_DISQUALIFIERS: [&str; 6] = ["购方", "销方", "税号", "地址", "电话", "开户"];
