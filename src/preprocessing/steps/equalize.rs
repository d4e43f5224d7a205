use image::DynamicImage;
use imageproc::contrast::equalize_histogram;

use crate::error::SolveError;

/// Equalize the luma histogram to spread captcha glyphs away from the
/// background intensity
pub fn apply(image: DynamicImage) -> Result<DynamicImage, SolveError> {
    let gray = image.to_luma8();
    let equalized = equalize_histogram(&gray);
    Ok(DynamicImage::ImageLuma8(equalized))
}
