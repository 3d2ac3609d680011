use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// Supported input formats, selected by file extension.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Raster image (.png, .jpg, .jpeg) — goes through preprocessing + OCR.
    Image,
    /// PDF (.pdf) — goes through direct text extraction.
    Pdf,
}

/// Dispatch on the file extension, case-insensitively.
///
/// Anything other than .png/.jpg/.jpeg/.pdf is rejected before any bytes
/// are read, so a corrupt-but-supported file fails in acquisition while an
/// unsupported one never reaches it.
pub fn detect_format(path: &Path) -> Result<DocumentFormat, ExtractionError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match ext.as_str() {
        "png" | "jpg" | "jpeg" => Ok(DocumentFormat::Image),
        "pdf" => Ok(DocumentFormat::Pdf),
        _ => Err(ExtractionError::UnsupportedFormat(ext)),
    }
}
