//! Image preprocessing variants
//!
//! Each variant is a stateless transformation of the same source bytes,
//! re-encoded to a byte buffer for the classifier.

pub mod steps;
pub mod variant;

pub use variant::{render, Variant};
