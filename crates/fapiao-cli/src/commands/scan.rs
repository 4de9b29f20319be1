//! Scan command - extract and display the record for a single file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use fapiao_core::models::record::InvoiceRecord;
use fapiao_core::naming::build_file_name;
use fapiao_core::pdf::{PdfTextExtractor, TextSource};
use fapiao_core::scan::InvoiceScanner;

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also print the file name the record would produce
    #[arg(long)]
    show_name: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Scanning file: {}", args.input.display());

    let data = fs::read(&args.input)?;
    let mut extractor = PdfTextExtractor::new();
    extractor.load(&data)?;
    let lines = extractor.extract_lines()?;

    let scanner = InvoiceScanner::with_config(config.scan.clone());
    let record = scanner.scan(&lines);

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_name {
        println!();
        println!(
            "{} File name: {}",
            style("ℹ").blue(),
            build_file_name(&record, &config.naming)
        );
    }

    if !record.missing_fields().is_empty() {
        eprintln!(
            "{} Missing fields: {}",
            style("!").yellow(),
            record.missing_fields().join(", ")
        );
    }

    Ok(())
}

fn format_record(record: &InvoiceRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => format_record_csv(record),
        OutputFormat::Text => Ok(format_record_text(record)),
    }
}

fn format_record_csv(record: &InvoiceRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "contract_number",
        "invoice_number",
        "seller_name",
        "project_name",
        "invoice_amount",
        "issue_date",
        "quantity_ratio",
    ])?;

    wtr.write_record([
        record.contract_number.as_deref().unwrap_or(""),
        record.invoice_number.as_deref().unwrap_or(""),
        record.seller_name.as_deref().unwrap_or(""),
        record.project_name.as_deref().unwrap_or(""),
        record.invoice_amount.as_deref().unwrap_or(""),
        record.issue_date.as_deref().unwrap_or(""),
        record.quantity_ratio.as_deref().unwrap_or(""),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_record_text(record: &InvoiceRecord) -> String {
    let mut output = String::new();

    let fields = [
        ("Contract number", &record.contract_number),
        ("Invoice number", &record.invoice_number),
        ("Seller", &record.seller_name),
        ("Project", &record.project_name),
        ("Amount", &record.invoice_amount),
        ("Issue date", &record.issue_date),
        ("Quantity ratio", &record.quantity_ratio),
    ];

    for (label, value) in fields {
        output.push_str(&format!(
            "{:15} {}\n",
            format!("{}:", label),
            value.as_deref().unwrap_or("-")
        ));
    }

    output
}
