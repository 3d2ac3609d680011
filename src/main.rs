use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use veridoc::config::{self, AdvisoryConfig};
use veridoc::pipeline::advisory::{ChatClient, OpenAiChatClient, UnconfiguredChatClient};
use veridoc::pipeline::extraction::PdfTextExtractor;
use veridoc::pipeline::processor::DocumentProcessor;

#[cfg(feature = "ocr")]
use veridoc::pipeline::extraction::TesseractEngine;

#[cfg(not(feature = "ocr"))]
use veridoc::pipeline::extraction::DisabledOcrEngine;

#[derive(Parser, Debug)]
#[command(name = "veridoc", version, about = "KYC document triage pipeline")]
struct Cli {
    /// Identity document to process (.png, .jpg, .jpeg or .pdf)
    path: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Print the raw text acquired from the document before the record
    #[arg(long)]
    show_text: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::info!("veridoc v{}", config::APP_VERSION);

    let chat: Box<dyn ChatClient> = match AdvisoryConfig::from_env() {
        Ok(advisory_config) => Box::new(
            OpenAiChatClient::new(&advisory_config).context("building advisory client")?,
        ),
        Err(e) => {
            tracing::warn!(error = %e, "advisory disabled — fields and score still computed");
            Box::new(UnconfiguredChatClient::new(&e.to_string()))
        }
    };

    #[cfg(feature = "ocr")]
    let ocr = Box::new(TesseractEngine::new());
    #[cfg(not(feature = "ocr"))]
    let ocr = Box::new(DisabledOcrEngine);

    let processor = DocumentProcessor::new(ocr, Box::new(PdfTextExtractor), chat);

    let output = processor
        .process(&cli.path)
        .with_context(|| format!("failed to process {}", cli.path.display()))?;

    if cli.show_text {
        println!("Extracted Text:\n{}\n", output.raw_text);
    }

    match cli.format {
        OutputFormat::Table => {
            println!("{}", output.report.to_table());
            println!("\nAdvisory:\n{}", output.report.advisory);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output.report)?);
        }
        OutputFormat::Csv => {
            print!("{}", output.report.to_csv()?);
        }
    }

    Ok(())
}
