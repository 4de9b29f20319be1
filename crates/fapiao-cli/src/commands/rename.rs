//! Rename command - batch rename invoice PDFs in place.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use fapiao_core::models::config::FapiaoConfig;
use fapiao_core::models::record::InvoiceRecord;
use fapiao_core::naming::{build_file_name, rename_in_place};
use fapiao_core::pdf::{PdfTextExtractor, TextSource};
use fapiao_core::scan::InvoiceScanner;

/// Arguments for the rename command.
#[derive(Args)]
pub struct RenameArgs {
    /// Input files or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Show the planned names without renaming anything
    #[arg(long)]
    dry_run: bool,

    /// Write a per-file summary CSV to this path
    #[arg(long)]
    summary: Option<PathBuf>,
}

/// Outcome of processing a single file.
struct RenameResult {
    path: PathBuf,
    record: Option<InvoiceRecord>,
    new_name: Option<String>,
    error: Option<String>,
}

pub async fn run(args: RenameArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let files = collect_files(&args.inputs)?;
    if files.is_empty() {
        anyhow::bail!("No matching PDF files found");
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let scanner = InvoiceScanner::with_config(config.scan.clone());

    // One bad document never stops the batch: every failure is
    // recorded per file and reported at the end.
    let mut results = Vec::with_capacity(files.len());
    for path in files {
        results.push(process_file(&path, &scanner, &config, args.dry_run));
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    let renamed: Vec<_> = results.iter().filter(|r| r.error.is_none()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if args.dry_run {
        println!();
        for result in &renamed {
            println!(
                "  {} -> {}",
                result.path.display(),
                result.new_name.as_deref().unwrap_or("?")
            );
        }
    }

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} renamed, {} failed",
        style(renamed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Expand glob patterns and keep only PDF paths.
fn collect_files(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        for entry in glob(input)? {
            match entry {
                Ok(path) => {
                    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                    if ext.eq_ignore_ascii_case("pdf") {
                        files.push(path);
                    }
                }
                Err(e) => warn!("Skipping unreadable path: {}", e),
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn process_file(
    path: &PathBuf,
    scanner: &InvoiceScanner,
    config: &FapiaoConfig,
    dry_run: bool,
) -> RenameResult {
    match scan_and_rename(path, scanner, config, dry_run) {
        Ok((record, new_name)) => RenameResult {
            path: path.clone(),
            record: Some(record),
            new_name: Some(new_name),
            error: None,
        },
        Err(e) => RenameResult {
            path: path.clone(),
            record: None,
            new_name: None,
            error: Some(e.to_string()),
        },
    }
}

fn scan_and_rename(
    path: &PathBuf,
    scanner: &InvoiceScanner,
    config: &FapiaoConfig,
    dry_run: bool,
) -> anyhow::Result<(InvoiceRecord, String)> {
    let data = fs::read(path)?;
    let mut extractor = PdfTextExtractor::new();
    extractor.load(&data)?;

    let lines = extractor.extract_lines()?;
    debug!("Extracted {} lines from {}", lines.len(), path.display());

    let record = scanner.scan(&lines);
    if record.is_empty() {
        warn!("No fields extracted from {}", path.display());
    }

    let new_name = build_file_name(&record, &config.naming);
    if !dry_run {
        rename_in_place(path, &new_name)?;
    }
    Ok((record, new_name))
}

fn write_summary(path: &PathBuf, results: &[RenameResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "new_name",
        "contract_number",
        "invoice_number",
        "seller_name",
        "project_name",
        "invoice_amount",
        "issue_date",
        "quantity_ratio",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(record) = &result.record {
            wtr.write_record([
                filename,
                "success",
                result.new_name.as_deref().unwrap_or(""),
                record.contract_number.as_deref().unwrap_or(""),
                record.invoice_number.as_deref().unwrap_or(""),
                record.seller_name.as_deref().unwrap_or(""),
                record.project_name.as_deref().unwrap_or(""),
                record.invoice_amount.as_deref().unwrap_or(""),
                record.issue_date.as_deref().unwrap_or(""),
                record.quantity_ratio.as_deref().unwrap_or(""),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
