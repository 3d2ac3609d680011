//! Image preprocessing for OCR input.
//!
//! Identity scans arrive as phone photos or flatbed scans with uneven
//! lighting. Converting to grayscale and binarizing with a global Otsu
//! threshold before OCR markedly improves recognition on printed
//! documents.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat};
use tracing::debug;

use super::ExtractionError;

/// Decode an image, convert it to grayscale, binarize it with an Otsu
/// threshold, and re-encode it as PNG for the OCR engine.
pub fn binarize_for_ocr(image_bytes: &[u8]) -> Result<Vec<u8>, ExtractionError> {
    let decoded = image::load_from_memory(image_bytes)
        .map_err(|e| ExtractionError::ImageProcessing(e.to_string()))?;

    let mut gray = decoded.to_luma8();
    let threshold = otsu_threshold(&gray);
    debug!(threshold, "binarizing image for OCR");

    for pixel in gray.pixels_mut() {
        pixel.0[0] = if pixel.0[0] > threshold { 255 } else { 0 };
    }

    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(gray)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| ExtractionError::ImageProcessing(e.to_string()))?;

    Ok(buf)
}

/// Global Otsu threshold: pick the gray level that maximizes between-class
/// variance of the foreground/background split.
fn otsu_threshold(image: &GrayImage) -> u8 {
    let mut histogram = [0u64; 256];
    for pixel in image.pixels() {
        histogram[pixel.0[0] as usize] += 1;
    }

    let total: u64 = histogram.iter().sum();
    if total == 0 {
        return 0;
    }

    let weighted_sum: f64 = histogram
        .iter()
        .enumerate()
        .map(|(level, &count)| level as f64 * count as f64)
        .sum();

    let mut background_count = 0u64;
    let mut background_sum = 0f64;
    let mut best_variance = 0f64;
    let mut best_threshold = 0u8;

    for level in 0..256usize {
        background_count += histogram[level];
        if background_count == 0 {
            continue;
        }
        let foreground_count = total - background_count;
        if foreground_count == 0 {
            break;
        }

        background_sum += level as f64 * histogram[level] as f64;
        let mean_background = background_sum / background_count as f64;
        let mean_foreground = (weighted_sum - background_sum) / foreground_count as f64;

        let variance = background_count as f64
            * foreground_count as f64
            * (mean_background - mean_foreground).powi(2);

        if variance > best_variance {
            best_variance = variance;
            best_threshold = level as u8;
        }
    }

    best_threshold
}
