//! End-to-end pipeline tests with mock collaborators.
//!
//! The OCR engine and chat client are mocked; the PDF path runs against
//! a real pdf-extract parse of a lopdf-built fixture.

use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use tempfile::TempDir;

use veridoc::pipeline::advisory::{Advisory, ChatClient, FailingChatClient, MockChatClient};
use veridoc::pipeline::extraction::{
    ExtractionError, MockOcrEngine, OcrEngine, PdfExtractor, PdfTextExtractor,
};
use veridoc::pipeline::fields::DocumentType;
use veridoc::pipeline::processor::{DocumentProcessor, ProcessingError};
use veridoc::pipeline::risk::RiskLevel;

/// Write a small real PNG so the preprocessing stage has something to
/// decode before the mock engine takes over.
fn write_scan_png(dir: &Path) -> PathBuf {
    let path = dir.join("scan.png");
    let img = GrayImage::from_fn(32, 16, |x, _y| {
        if x < 16 {
            Luma([20u8])
        } else {
            Luma([230u8])
        }
    });
    img.save(&path).unwrap();
    path
}

fn processor_with(ocr_text: &str, chat: Box<dyn ChatClient>) -> DocumentProcessor {
    DocumentProcessor::new(
        Box::new(MockOcrEngine::new(ocr_text)),
        Box::new(PdfTextExtractor),
        chat,
    )
}

#[test]
fn image_pipeline_produces_full_report() {
    let dir = TempDir::new().unwrap();
    let path = write_scan_png(dir.path());

    let ocr_text = "Passport\n\
                    Name: John Smith\n\
                    Date of Birth: 01/02/1990\n\
                    Address: 221 Baker Street, London";
    let processor = processor_with(ocr_text, Box::new(MockChatClient::new("fields look fine")));

    let output = processor.process(&path).unwrap();
    let report = &output.report;

    assert_eq!(report.record.name.as_deref(), Some("John Smith"));
    assert_eq!(report.record.date_of_birth.as_deref(), Some("01/02/1990"));
    assert_eq!(
        report.record.address.as_deref(),
        Some("221 Baker Street, London")
    );
    assert_eq!(report.record.document_type, DocumentType::Passport);
    assert_eq!(report.risk.score, 0);
    assert_eq!(report.risk.level, RiskLevel::Low);
    assert_eq!(report.advisory, Advisory::Text("fields look fine".into()));
    assert_eq!(output.raw_text, ocr_text);
}

#[test]
fn unrecognizable_text_scores_sixty_five_high() {
    let dir = TempDir::new().unwrap();
    let path = write_scan_png(dir.path());

    let processor = processor_with(
        "no recognizable fields here",
        Box::new(MockChatClient::new("nothing to validate")),
    );

    let report = processor.process(&path).unwrap().report;
    assert_eq!(report.record.document_type, DocumentType::Unknown);
    assert_eq!(report.risk.score, 65);
    assert_eq!(report.risk.level, RiskLevel::High);
}

#[test]
fn short_address_scores_ten_low() {
    let dir = TempDir::new().unwrap();
    let path = write_scan_png(dir.path());

    let ocr_text = "Passport\n\
                    Name: John Smith\n\
                    Date of Birth: 01/02/1990\n\
                    Address: 12 Ave";
    let processor = processor_with(ocr_text, Box::new(MockChatClient::new("ok")));

    let report = processor.process(&path).unwrap().report;
    assert_eq!(report.record.address.as_deref(), Some("12 Ave"));
    assert_eq!(report.risk.score, 10);
    assert_eq!(report.risk.level, RiskLevel::Low);
}

#[test]
fn passport_wins_over_license_in_document_type() {
    let dir = TempDir::new().unwrap();
    let path = write_scan_png(dir.path());

    let processor = processor_with(
        "Driver LICENSE renewal attached to Passport application",
        Box::new(MockChatClient::new("ok")),
    );

    let report = processor.process(&path).unwrap().report;
    assert_eq!(report.record.document_type, DocumentType::Passport);
}

#[test]
fn advisory_failure_does_not_suppress_record_or_score() {
    let dir = TempDir::new().unwrap();
    let path = write_scan_png(dir.path());

    let ocr_text = "Passport\nName: Jane Doe\nDate of Birth: 05-06-1975";
    let processor = processor_with(ocr_text, Box::new(FailingChatClient::new("network down")));

    let output = processor.process(&path).unwrap();
    let report = &output.report;

    assert_eq!(report.record.name.as_deref(), Some("Jane Doe"));
    assert_eq!(report.risk.score, 15, "only the absent address penalizes");
    assert!(!report.advisory.is_available());
    match &report.advisory {
        Advisory::Unavailable { reason } => assert!(reason.contains("network down")),
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[test]
fn unsupported_extension_halts_before_acquisition() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contract.docx");
    std::fs::write(&path, b"word document bytes").unwrap();

    // An OCR engine that would fail loudly if it were ever reached.
    struct PanickingOcr;
    impl OcrEngine for PanickingOcr {
        fn ocr_image(&self, _: &[u8]) -> Result<String, ExtractionError> {
            panic!("OCR must not run for unsupported formats");
        }
    }

    let processor = DocumentProcessor::new(
        Box::new(PanickingOcr),
        Box::new(PdfTextExtractor),
        Box::new(MockChatClient::new("ok")),
    );

    let err = processor.process(&path).unwrap_err();
    assert!(matches!(
        err,
        ProcessingError::Extraction(ExtractionError::UnsupportedFormat(ext)) if ext == "docx"
    ));
}

#[test]
fn corrupt_image_is_a_terminal_acquisition_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"not actually a png").unwrap();

    let processor = processor_with("unused", Box::new(MockChatClient::new("ok")));

    let err = processor.process(&path).unwrap_err();
    assert!(matches!(
        err,
        ProcessingError::Extraction(ExtractionError::ImageProcessing(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let processor = processor_with("unused", Box::new(MockChatClient::new("ok")));
    let err = processor.process(Path::new("/nonexistent/scan.png")).unwrap_err();
    assert!(matches!(
        err,
        ProcessingError::Extraction(ExtractionError::Io(_))
    ));
}

#[test]
fn pdf_pipeline_extracts_document_type() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("passport.pdf");
    std::fs::write(&path, make_test_pdf("Passport of John Smith")).unwrap();

    let processor = DocumentProcessor::new(
        Box::new(MockOcrEngine::new("unused")),
        Box::new(PdfTextExtractor),
        Box::new(MockChatClient::new("ok")),
    );

    let output = processor.process(&path).unwrap();
    assert_eq!(output.report.record.document_type, DocumentType::Passport);
    assert!(output.raw_text.contains("Passport") || output.raw_text.contains("John"));
}

#[test]
fn pdf_pages_are_joined_with_newlines() {
    struct TwoPagePdf;
    impl PdfExtractor for TwoPagePdf {
        fn extract_text(&self, _: &[u8]) -> Result<Vec<String>, ExtractionError> {
            Ok(vec!["Name: Jane Doe".to_string(), "passport".to_string()])
        }
    }

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doc.pdf");
    std::fs::write(&path, b"stand-in pdf bytes").unwrap();

    let processor = DocumentProcessor::new(
        Box::new(MockOcrEngine::new("unused")),
        Box::new(TwoPagePdf),
        Box::new(MockChatClient::new("ok")),
    );

    let output = processor.process(&path).unwrap();
    assert_eq!(output.raw_text, "Name: Jane Doe\npassport");
    assert_eq!(output.report.record.name.as_deref(), Some("Jane Doe"));
    assert_eq!(output.report.record.document_type, DocumentType::Passport);
}

/// Minimal single-page PDF with one text run.
fn make_test_pdf(text: &str) -> Vec<u8> {
    use lopdf::dictionary;
    use lopdf::{Document, Object, Stream};

    let mut doc = Document::with_version("1.4");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let content = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.into_bytes()));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        },
    });

    let pages_id = doc.add_object(dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    });

    if let Ok(Object::Dictionary(page)) = doc.get_object_mut(page_id) {
        page.set("Parent", pages_id);
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
