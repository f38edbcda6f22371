//! `label-checkr` — scan a product label for hazardous ingredients and score
//! overall toxicity.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Build the signature catalog and severity table ([`toxicity`]) — a
//!    malformed signature or out-of-range severity override aborts here.
//! 4. Obtain raw text: `--text` as-is, otherwise Tesseract OCR ([`ocr`]).
//!    OCR failure is not an error; it collapses to the nothing-found path.
//! 5. Normalize ([`normalizer`]) and scan against the catalog ([`detector`]).
//! 6. Classify the average severity ([`toxicity::verdict`]).
//! 7. Render the requested report ([`report`]).
//! 8. Exit `0` (SAFE, CAUTION, or nothing found) or `1` (AVOID).

mod cli;
mod config;
mod detector;
mod models;
mod normalizer;
mod ocr;
mod report;
mod toxicity;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, ReportFormat};
use config::load_config;
use detector::detect;
use models::{DetectionResult, RiskVerdict};
use normalizer::Normalizer;
use ocr::TesseractOcr;
use toxicity::catalog::Catalog;
use toxicity::severity::SeverityTable;
use toxicity::verdict::classify;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    // Built once, read-only for the rest of the run.
    let catalog = Catalog::builtin()?;
    let severities = SeverityTable::builtin().with_overrides(&config.severity.overrides)?;
    let normalizer = Normalizer::new()?;

    let raw = if let Some(text) = cli.text {
        Some(text)
    } else if let Some(image) = &cli.image {
        let ocr = TesseractOcr::new(
            cli.tesseract.unwrap_or(config.ocr.tesseract),
            cli.lang.unwrap_or(config.ocr.language),
        );
        // Any OCR failure means there is simply no text to analyze.
        ocr.extract(image).ok()
    } else {
        None
    };

    let normalized = normalizer.normalize(raw.as_deref());
    let result = if normalized.is_empty() {
        DetectionResult::new()
    } else {
        detect(&normalized, &catalog, &severities)
    };

    let verdict = (!result.is_empty()).then(|| {
        let average = result.average();
        (classify(average), average)
    });

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&result, verdict, cli.quiet),
        ReportFormat::Json => report::json::render(&result, verdict)?,
    }

    if matches!(verdict, Some((RiskVerdict::Avoid, _))) {
        std::process::exit(1);
    }

    Ok(())
}
