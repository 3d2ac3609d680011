use super::ExtractionError;

/// OCR engine abstraction (allows mocking for tests).
///
/// Takes encoded image bytes (the preprocessed PNG produced by
/// [`super::preprocess::binarize_for_ocr`]) and returns the recognized
/// text.
pub trait OcrEngine {
    fn ocr_image(&self, image_bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// PDF text extraction abstraction.
///
/// Returns one string per page; the caller joins pages with newline
/// separators.
pub trait PdfExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, ExtractionError>;
}
