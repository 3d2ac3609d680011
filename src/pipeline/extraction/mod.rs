pub mod format;
pub mod ocr;
pub mod pdf;
pub mod preprocess;
pub mod types;

pub use format::*;
pub use ocr::*;
pub use pdf::*;
pub use preprocess::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OCR engine initialization failed: {0}")]
    OcrInit(String),

    #[error("OCR processing failed: {0}")]
    OcrProcessing(String),

    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("Image processing error: {0}")]
    ImageProcessing(String),

    #[error("unsupported file format: {0:?}")]
    UnsupportedFormat(String),
}
