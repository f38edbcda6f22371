use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "label-checkr",
    about = "Scan product label images for hazardous ingredients and score toxicity",
    version
)]
pub struct Cli {
    /// Label image to scan
    #[arg(value_name = "IMAGE", required_unless_present = "text")]
    pub image: Option<PathBuf>,

    /// Analyze literal text instead of running OCR on an image
    #[arg(long, value_name = "TEXT", conflicts_with = "image")]
    pub text: Option<String>,

    /// Tesseract binary [default: from config, falls back to `tesseract`]
    #[arg(long, value_name = "BIN")]
    pub tesseract: Option<PathBuf>,

    /// OCR language model passed to tesseract via -l
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Config file [default: ./.label-checkr/config.toml, fallback ~/.config/label-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Only print the verdict line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
