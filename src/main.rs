//! Command-line entry point: prescription OCR.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Parse the command line.
//! 3. Load [`AppConfig`] (default on first run).
//! 4. Build the OCR engine from config (`DisabledOcr` when switched off).
//! 5. Run the requested command; `scan` drives [`UploadHandler`] on a tokio
//!    runtime and prints the JSON response.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prescription_ocr::{
    config::{AppConfig, AppPaths},
    ocr::{DisabledOcr, DocumentAiEngine, OcrEngine},
    pipeline::{ScanResponse, ScanResult, Upload, UploadHandler},
    text::DRUG_VOCABULARY,
};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "prescription-ocr", version, about = "OCR and clean up prescription images")]
struct Cli {
    /// Path to settings.toml (defaults to the platform config dir).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// OCR an image (PNG/JPEG) and print recognised + corrected text as JSON.
    Scan {
        /// Image file to upload.
        image: PathBuf,
    },
    /// Normalize and correct text without OCR (reads stdin when omitted).
    Clean {
        /// Raw text to process.
        text: Option<String>,
    },
    /// List the built-in drug / instruction vocabulary.
    Vocab,
    /// Write the default settings.toml.
    InitConfig,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn settings_path(cli: &Cli) -> PathBuf {
    cli.config
        .clone()
        .unwrap_or_else(|| AppPaths::new().settings_file)
}

fn load_config(path: &Path) -> AppConfig {
    AppConfig::load_from(path).unwrap_or_else(|e| {
        log::warn!("Failed to load config from {} ({e:#}); using defaults", path.display());
        AppConfig::default()
    })
}

fn build_engine(config: &AppConfig) -> Arc<dyn OcrEngine> {
    if config.ocr.enabled {
        let engine = DocumentAiEngine::from_config(&config.ocr);
        log::info!("OCR endpoint: {}", engine.endpoint());
        Arc::new(engine)
    } else {
        log::warn!("OCR disabled in settings; scans will fail");
        Arc::new(DisabledOcr)
    }
}

fn read_upload(image: &Path) -> Result<Upload> {
    let bytes =
        std::fs::read(image).with_context(|| format!("reading {}", image.display()))?;
    let filename = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(Upload { filename, bytes })
}

fn print_json(response: &ScanResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn run_scan(config: &AppConfig, image: &Path) -> Result<ExitCode> {
    // A missing file is reported the same way as a missing upload.
    let upload = match read_upload(image) {
        Ok(upload) => Some(upload),
        Err(e) => {
            log::warn!("{e:#}");
            None
        }
    };

    let handler = UploadHandler::new(build_engine(config));

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;
    let result = rt.block_on(handler.process(upload));

    let (status, response) = ScanResponse::from_result(&result);
    print_json(&response)?;
    log::debug!("scan finished with status {status}");

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_clean(text: Option<String>) -> Result<ExitCode> {
    let raw = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let response = ScanResponse::from(ScanResult::from_raw(&raw, DRUG_VOCABULARY));
    print_json(&response)?;
    Ok(ExitCode::SUCCESS)
}

fn run_vocab() -> ExitCode {
    for term in DRUG_VOCABULARY {
        println!("{term}");
    }
    ExitCode::SUCCESS
}

fn run_init_config(path: &Path) -> Result<ExitCode> {
    AppConfig::default().save_to(path)?;
    log::info!("Wrote default settings to {}", path.display());
    println!("{}", path.display());
    Ok(ExitCode::SUCCESS)
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> Result<ExitCode> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Command line
    let cli = Cli::parse();
    let path = settings_path(&cli);

    // 3-5. Dispatch
    match cli.command {
        Command::Scan { image } => run_scan(&load_config(&path), &image),
        Command::Clean { text } => run_clean(text),
        Command::Vocab => Ok(run_vocab()),
        Command::InitConfig => run_init_config(&path),
    }
}
