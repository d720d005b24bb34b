//! Image filter panel: decode an upload, derive grayscale and a Canny edge map.
//!
//! Nothing here is persisted; every call works on its own buffer.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, GrayImage, ImageFormat, ImageOutputFormat, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AdminError;

/// Canny hysteresis thresholds.
pub const CANNY_LOW_THRESHOLD: f32 = 100.0;
pub const CANNY_HIGH_THRESHOLD: f32 = 200.0;

const ACCEPTED_FORMATS: [ImageFormat; 2] = [ImageFormat::Png, ImageFormat::Jpeg];

#[derive(Debug, Clone)]
pub struct ProcessedImage {
    /// Three-channel rendition of the upload; grayscale inputs are expanded.
    pub color: RgbImage,
    pub grayscale: GrayImage,
    pub edges: GrayImage,
    /// Whether the upload was grayscale and had to be expanded to three channels.
    pub converted: bool,
}

impl ProcessedImage {
    pub fn dimensions(&self) -> (u32, u32) {
        self.color.dimensions()
    }
}

pub fn process_image(bytes: &[u8]) -> Result<ProcessedImage, AdminError> {
    if bytes.is_empty() {
        return Err(AdminError::InvalidImage("empty upload".to_string()));
    }

    let format = image::guess_format(bytes)
        .map_err(|_| AdminError::InvalidImage("unrecognised image format".to_string()))?;
    if !ACCEPTED_FORMATS.contains(&format) {
        return Err(AdminError::InvalidImage(format!(
            "unsupported image format {:?}; upload a PNG or JPEG",
            format
        )));
    }

    let decoded = image::load_from_memory_with_format(bytes, format)?;
    let converted = matches!(
        decoded,
        DynamicImage::ImageLuma8(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)
    );
    let color = decoded.to_rgb8();
    let grayscale = image::imageops::grayscale(&color);
    let edges = imageproc::edges::canny(&grayscale, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD);

    debug!(
        "Processed {:?} upload {}x{} (converted: {})",
        format,
        color.width(),
        color.height(),
        converted
    );

    Ok(ProcessedImage {
        color,
        grayscale,
        edges,
        converted,
    })
}

pub fn encode_png(image: DynamicImage) -> Result<Vec<u8>, AdminError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageOutputFormat::Png)
        .map_err(|e| AdminError::InvalidImage(format!("Failed to encode PNG: {}", e)))?;
    Ok(buffer.into_inner())
}

/// PNG renditions of a processed upload, base64-encoded for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageReport {
    pub width: u32,
    pub height: u32,
    pub converted: bool,
    pub original_png: String,
    pub grayscale_png: String,
    pub edges_png: String,
}

impl ImageReport {
    pub fn from_processed(processed: ProcessedImage) -> Result<Self, AdminError> {
        let (width, height) = processed.dimensions();
        let converted = processed.converted;

        Ok(ImageReport {
            width,
            height,
            converted,
            original_png: STANDARD.encode(encode_png(DynamicImage::ImageRgb8(processed.color))?),
            grayscale_png: STANDARD.encode(encode_png(DynamicImage::ImageLuma8(processed.grayscale))?),
            edges_png: STANDARD.encode(encode_png(DynamicImage::ImageLuma8(processed.edges))?),
        })
    }
}
