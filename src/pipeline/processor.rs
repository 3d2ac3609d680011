//! Document processing orchestrator.
//!
//! Single entry point that drives the full pipeline for one document:
//! format dispatch → text acquisition → field extraction → risk scoring
//! → advisory validation → report assembly.
//!
//! Uses trait-based DI for the external collaborators (OcrEngine,
//! PdfExtractor, ChatClient) so the orchestrator is fully testable with
//! mock implementations.

use std::path::Path;

use crate::pipeline::advisory::{request_advisory, ChatClient};
use crate::pipeline::extraction::{
    binarize_for_ocr, detect_format, DocumentFormat, ExtractionError, OcrEngine, PdfExtractor,
};
use crate::pipeline::fields::extract_fields;
use crate::pipeline::risk::assess;
use crate::report::KycReport;

/// Errors that abort processing of a document.
///
/// Advisory failures are deliberately not represented here — they
/// degrade inside the advisory stage and never become terminal.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("text acquisition failed: {0}")]
    Extraction(#[from] ExtractionError),
}

/// Full pipeline output for one document.
#[derive(Debug)]
pub struct ProcessingOutput {
    pub report: KycReport,
    /// Raw acquired text, kept for optional display and diagnostics.
    pub raw_text: String,
}

/// One-document pipeline. Stateless across invocations; every call
/// processes its document independently.
pub struct DocumentProcessor {
    ocr: Box<dyn OcrEngine>,
    pdf: Box<dyn PdfExtractor>,
    chat: Box<dyn ChatClient>,
}

impl DocumentProcessor {
    pub fn new(
        ocr: Box<dyn OcrEngine>,
        pdf: Box<dyn PdfExtractor>,
        chat: Box<dyn ChatClient>,
    ) -> Self {
        Self { ocr, pdf, chat }
    }

    /// Run the full pipeline on a single file.
    ///
    /// Unsupported extensions fail before any bytes are read; acquisition
    /// failures are terminal; advisory failures degrade to an
    /// "unavailable" marker on the report.
    pub fn process(&self, path: &Path) -> Result<ProcessingOutput, ProcessingError> {
        let format = detect_format(path)?;
        let raw_text = self.acquire_text(path, format)?;
        tracing::debug!(chars = raw_text.len(), ?format, "acquired document text");

        let record = extract_fields(&raw_text);
        let risk = assess(&record);
        tracing::info!(
            score = risk.score,
            level = %risk.level,
            document_type = %record.document_type,
            "risk assessment complete"
        );

        let advisory = request_advisory(self.chat.as_ref(), &record);

        Ok(ProcessingOutput {
            report: KycReport {
                record,
                risk,
                advisory,
            },
            raw_text,
        })
    }

    fn acquire_text(
        &self,
        path: &Path,
        format: DocumentFormat,
    ) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path)?;
        match format {
            DocumentFormat::Image => {
                let preprocessed = binarize_for_ocr(&bytes)?;
                self.ocr.ocr_image(&preprocessed)
            }
            DocumentFormat::Pdf => {
                let pages = self.pdf.extract_text(&bytes)?;
                Ok(pages.join("\n"))
            }
        }
    }
}
