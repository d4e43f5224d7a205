use image::DynamicImage;
use imageproc::filter::median_filter;

use crate::error::SolveError;

/// 3x3 median blur to knock out speckle noise without softening glyph edges
pub fn apply(image: DynamicImage) -> Result<DynamicImage, SolveError> {
    let gray = image.to_luma8();
    let denoised = median_filter(&gray, 1, 1);
    Ok(DynamicImage::ImageLuma8(denoised))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_denoise_removes_isolated_speckles() {
        let mut img = GrayImage::from_pixel(9, 9, Luma([200]));
        img.put_pixel(4, 4, Luma([0]));

        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();
        let gray = result.to_luma8();

        // The lone dark pixel has eight bright neighbours, so the median wins
        assert_eq!(gray.get_pixel(4, 4).0[0], 200);
    }

    #[test]
    fn test_denoise_keeps_solid_strokes() {
        let mut img = GrayImage::from_pixel(9, 9, Luma([230]));
        for y in 0..9 {
            for x in 3..6 {
                img.put_pixel(x, y, Luma([10]));
            }
        }

        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();
        let gray = result.to_luma8();

        // A three-pixel-wide stroke survives a radius-1 median
        assert_eq!(gray.get_pixel(4, 4).0[0], 10);
    }
}
