use image::{DynamicImage, GrayImage, Luma};

use crate::error::SolveError;

/// Linear gain applied to every pixel
const GAIN: f32 = 1.5;

/// Stretch contrast by multiplying each pixel by a fixed gain, saturating
/// at white
pub fn apply(image: DynamicImage) -> Result<DynamicImage, SolveError> {
    let gray = image.to_luma8();
    let stretched = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let pixel = gray.get_pixel(x, y).0[0] as f32;
        Luma([(pixel * GAIN).min(255.0) as u8])
    });
    Ok(DynamicImage::ImageLuma8(stretched))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_scales_midtones() {
        let img = GrayImage::from_pixel(4, 4, Luma([100]));
        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!(result.to_luma8().get_pixel(0, 0).0[0], 150);
    }

    #[test]
    fn test_contrast_saturates_at_white() {
        let img = GrayImage::from_pixel(4, 4, Luma([220]));
        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!(result.to_luma8().get_pixel(0, 0).0[0], 255);
    }

    #[test]
    fn test_contrast_keeps_black_black() {
        let img = GrayImage::from_pixel(4, 4, Luma([0]));
        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();
        assert_eq!(result.to_luma8().get_pixel(0, 0).0[0], 0);
    }
}
