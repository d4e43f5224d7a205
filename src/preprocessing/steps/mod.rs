//! Individual preprocessing steps

pub mod contrast;
pub mod denoise;
pub mod equalize;
pub mod grayscale;
