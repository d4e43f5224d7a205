use crate::error::SolveError;

/// Trait for OCR backends that predict the characters in an encoded image.
///
/// The classifier is a black box: bytes of an image in, a string of
/// predicted characters out. Implementations must not panic on malformed
/// input; decode failures surface as `SolveError`.
pub trait Classifier: Send + Sync {
    /// Returns the classifier identifier (e.g., "ocrs")
    #[allow(dead_code)]
    fn name(&self) -> &'static str;

    /// Predict the characters contained in an encoded image
    fn classify(&self, image_bytes: &[u8]) -> Result<String, SolveError>;
}
