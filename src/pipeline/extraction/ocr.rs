use super::types::OcrEngine;
use super::ExtractionError;

/// Tesseract OCR engine.
/// Only available when compiled with the `ocr` feature flag.
#[cfg(feature = "ocr")]
pub struct TesseractEngine {
    lang: String,
}

#[cfg(feature = "ocr")]
impl TesseractEngine {
    /// English-language engine using the system tessdata.
    pub fn new() -> Self {
        Self {
            lang: "eng".to_string(),
        }
    }

    /// Set the recognition language(s), e.g. "eng" or "eng+fra".
    pub fn with_language(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }
}

#[cfg(feature = "ocr")]
impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "ocr")]
impl OcrEngine for TesseractEngine {
    fn ocr_image(&self, image_bytes: &[u8]) -> Result<String, ExtractionError> {
        let tess = tesseract::Tesseract::new(None, Some(&self.lang))
            .map_err(|e| ExtractionError::OcrInit(format!("{e:?}")))?;

        let mut tess = tess
            .set_image_from_mem(image_bytes)
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))?;

        tess.get_text()
            .map_err(|e| ExtractionError::OcrProcessing(format!("{e:?}")))
    }
}

/// Placeholder engine for builds without the `ocr` feature.
/// PDF inputs still work; image inputs fail with a clear diagnostic.
pub struct DisabledOcrEngine;

impl OcrEngine for DisabledOcrEngine {
    fn ocr_image(&self, _image_bytes: &[u8]) -> Result<String, ExtractionError> {
        Err(ExtractionError::OcrInit(
            "this build does not include the `ocr` feature".to_string(),
        ))
    }
}

/// Mock OCR engine for unit testing without Tesseract.
pub struct MockOcrEngine {
    text: String,
}

impl MockOcrEngine {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl OcrEngine for MockOcrEngine {
    fn ocr_image(&self, _image_bytes: &[u8]) -> Result<String, ExtractionError> {
        Ok(self.text.clone())
    }
}
