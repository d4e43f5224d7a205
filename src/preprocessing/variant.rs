use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use super::steps;
use crate::error::SolveError;

/// One preprocessing pipeline applied to the source image before
/// classification. The order of [`Variant::ALL`] is the attempt order and
/// the tie-break order during selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Pass the source bytes through untouched
    Original,
    /// Grayscale, histogram equalization, then a 3x3 median blur
    Enhanced,
    /// Grayscale, then a saturating 1.5x contrast stretch
    Contrast,
}

impl Variant {
    /// Fixed attempt order
    pub const ALL: [Variant; 3] = [Variant::Original, Variant::Enhanced, Variant::Contrast];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Enhanced => "enhanced",
            Self::Contrast => "contrast",
        }
    }
}

/// Render a variant of the source image as an encoded byte buffer.
///
/// `Original` is a pass-through; the other variants decode, transform, and
/// re-encode as PNG.
pub fn render(variant: Variant, source: &[u8]) -> Result<Vec<u8>, SolveError> {
    match variant {
        Variant::Original => Ok(source.to_vec()),
        Variant::Enhanced => {
            let img = decode(source)?;
            let img = steps::grayscale::apply(img)?;
            let img = steps::equalize::apply(img)?;
            let img = steps::denoise::apply(img)?;
            encode_png(&img)
        }
        Variant::Contrast => {
            let img = decode(source)?;
            let img = steps::grayscale::apply(img)?;
            let img = steps::contrast::apply(img)?;
            encode_png(&img)
        }
    }
}

fn decode(source: &[u8]) -> Result<DynamicImage, SolveError> {
    image::load_from_memory(source)
        .map_err(|e| SolveError::PreprocessingError(format!("Failed to decode image: {}", e)))
}

fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, SolveError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| SolveError::PreprocessingError(format!("Failed to encode PNG: {}", e)))?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn sample_png() -> Vec<u8> {
        let img = GrayImage::from_fn(16, 8, |x, _| Luma([60 + (x as u8) * 8]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageLuma8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_original_is_pass_through() {
        let source = sample_png();
        let rendered = render(Variant::Original, &source).unwrap();
        assert_eq!(rendered, source);
    }

    #[test]
    fn test_enhanced_produces_decodable_png() {
        let source = sample_png();
        let rendered = render(Variant::Enhanced, &source).unwrap();
        let img = image::load_from_memory(&rendered).unwrap();
        assert_eq!((img.width(), img.height()), (16, 8));
    }

    #[test]
    fn test_contrast_produces_decodable_png() {
        let source = sample_png();
        let rendered = render(Variant::Contrast, &source).unwrap();
        let img = image::load_from_memory(&rendered).unwrap();
        assert_eq!((img.width(), img.height()), (16, 8));
    }

    #[test]
    fn test_transform_variants_reject_garbage() {
        assert!(render(Variant::Enhanced, b"not an image").is_err());
        assert!(render(Variant::Contrast, b"not an image").is_err());
        // Original never looks at the bytes
        assert!(render(Variant::Original, b"not an image").is_ok());
    }

    #[test]
    fn test_attempt_order_is_fixed() {
        assert_eq!(
            Variant::ALL.map(|v| v.as_str()),
            ["original", "enhanced", "contrast"]
        );
    }
}
