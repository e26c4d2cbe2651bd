use anyhow::{Result, anyhow};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

use crate::models::{ImageDimensions, ResizeDimensions};

pub struct ImageService;

impl ImageService {
    /// Reads width and height from the image header (format auto-detected)
    /// without decoding the pixel data.
    pub fn dimensions(data: &[u8]) -> Result<ImageDimensions> {
        let reader = image::io::Reader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| anyhow!("Failed to read image: {}", e))?;

        if reader.format().is_none() {
            return Err(anyhow!("Failed to load image: unrecognized image format"));
        }

        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| anyhow!("Failed to load image: {}", e))?;

        Ok(ImageDimensions { width, height })
    }

    /// Resample to exactly the requested size with Lanczos3, encoded as PNG
    pub fn resize(data: &[u8], target: ResizeDimensions) -> Result<Vec<u8>> {
        let img = Self::decode(data)?;
        let resized = img.resize_exact(target.width, target.height, FilterType::Lanczos3);
        Self::encode_png(&resized)
    }

    /// Single-channel 8-bit luminance, encoded as PNG. Alpha is dropped.
    pub fn grayscale(data: &[u8]) -> Result<Vec<u8>> {
        let img = Self::decode(data)?;
        let gray = DynamicImage::ImageLuma8(img.to_luma8());
        Self::encode_png(&gray)
    }

    fn decode(data: &[u8]) -> Result<DynamicImage> {
        image::load_from_memory(data).map_err(|e| anyhow!("Failed to load image: {}", e))
    }

    /// Encode an image::DynamicImage to PNG bytes
    fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
        // PNG has no float color types. Convert those down to 8-bit.
        let converted;
        let img = match img.color() {
            image::ColorType::Rgba32F => {
                converted = DynamicImage::ImageRgba8(img.to_rgba8());
                &converted
            }
            image::ColorType::Rgb32F => {
                converted = DynamicImage::ImageRgb8(img.to_rgb8());
                &converted
            }
            _ => img,
        };

        let mut out_data = Vec::new();
        let mut cursor = Cursor::new(&mut out_data);
        img.write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| anyhow!("Failed to encode PNG: {}", e))?;
        Ok(out_data)
    }
}
