use image::DynamicImage;

use crate::error::SolveError;

/// Convert the image to grayscale; every other step works on luma
pub fn apply(image: DynamicImage) -> Result<DynamicImage, SolveError> {
    Ok(DynamicImage::ImageLuma8(image.to_luma8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_grayscale_collapses_channels() {
        let mut img = RgbImage::new(4, 4);
        img.put_pixel(0, 0, Rgb([200, 30, 30]));
        img.put_pixel(1, 0, Rgb([30, 200, 30]));

        let result = apply(DynamicImage::ImageRgb8(img)).unwrap();
        assert!(matches!(result, DynamicImage::ImageLuma8(_)));
    }

    #[test]
    fn test_grayscale_preserves_dimensions() {
        let img = RgbImage::new(60, 20);
        let result = apply(DynamicImage::ImageRgb8(img)).unwrap();
        assert_eq!((result.width(), result.height()), (60, 20));
    }
}
