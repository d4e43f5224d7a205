//! OCRS classifier implementation
//!
//! Pure Rust OCR backend using the ocrs library. No system dependencies
//! required. Downloads neural network models automatically on first use.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use ocrs::{DecodeMethod, ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;

use crate::classifier::Classifier;
use crate::error::SolveError;

/// Default model URLs from the ocrs project
const DETECTION_MODEL_URL: &str =
    "https://ocrs-models.s3-accelerate.amazonaws.com/text-detection.rten";
const RECOGNITION_MODEL_URL: &str =
    "https://ocrs-models.s3-accelerate.amazonaws.com/text-recognition.rten";

/// Classifier wrapping the ocrs engine
pub struct OcrsClassifier {
    engine: OcrEngine,
}

impl OcrsClassifier {
    /// Create a new classifier, downloading models if needed
    pub fn new() -> Result<Self, SolveError> {
        tracing::info!("Initializing ocrs classifier...");

        let detection_model_path =
            ensure_model_downloaded(DETECTION_MODEL_URL, "text-detection.rten")?;
        let recognition_model_path =
            ensure_model_downloaded(RECOGNITION_MODEL_URL, "text-recognition.rten")?;

        let detection_model = Model::load_file(&detection_model_path).map_err(|e| {
            SolveError::InitializationError(format!("Failed to load detection model: {}", e))
        })?;
        let recognition_model = Model::load_file(&recognition_model_path).map_err(|e| {
            SolveError::InitializationError(format!("Failed to load recognition model: {}", e))
        })?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            decode_method: DecodeMethod::Greedy,
            ..Default::default()
        })
        .map_err(|e| {
            SolveError::InitializationError(format!("Failed to create OCR engine: {}", e))
        })?;

        tracing::info!("ocrs classifier initialized successfully");

        Ok(Self { engine })
    }
}

impl Classifier for OcrsClassifier {
    fn name(&self) -> &'static str {
        "ocrs"
    }

    fn classify(&self, image_bytes: &[u8]) -> Result<String, SolveError> {
        let img = image::load_from_memory(image_bytes)
            .map_err(|e| SolveError::ClassificationError(format!("Failed to decode image: {}", e)))?;

        // ImageSource::from_bytes expects RGB8 in HWC layout
        let rgb_img = img.into_rgb8();
        let dimensions = rgb_img.dimensions();

        let img_source = ImageSource::from_bytes(rgb_img.as_raw(), dimensions).map_err(|e| {
            SolveError::ClassificationError(format!("Failed to create image source: {}", e))
        })?;

        let ocr_input = self.engine.prepare_input(img_source).map_err(|e| {
            SolveError::ClassificationError(format!("Failed to prepare input: {}", e))
        })?;

        let word_rects = self.engine.detect_words(&ocr_input).map_err(|e| {
            SolveError::ClassificationError(format!("Failed to detect words: {}", e))
        })?;

        let line_rects = self.engine.find_text_lines(&ocr_input, &word_rects);

        let line_texts = self
            .engine
            .recognize_text(&ocr_input, &line_rects)
            .map_err(|e| {
                SolveError::ClassificationError(format!("Failed to recognize text: {}", e))
            })?;

        let text: String = line_texts
            .iter()
            .filter_map(|line| line.as_ref())
            .map(|line| {
                line.words()
                    .map(|word| word.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(" ");

        // A captcha is one token; whatever spacing the engine detects is noise
        Ok(squash(&text))
    }
}

/// Strip all whitespace from a prediction
fn squash(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Ensure a model is downloaded and return its path
fn ensure_model_downloaded(url: &str, filename: &str) -> Result<PathBuf, SolveError> {
    let cache_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("captcha-solver");

    std::fs::create_dir_all(&cache_dir).map_err(|e| {
        SolveError::InitializationError(format!("Failed to create cache directory: {}", e))
    })?;

    let model_path = cache_dir.join(filename);

    if !model_path.exists() {
        tracing::info!("Downloading {} (this may take a moment)...", filename);
        download_file(url, &model_path)?;
        tracing::info!("Downloaded {} to {:?}", filename, model_path);
    } else {
        tracing::debug!("Using cached model from {:?}", model_path);
    }

    Ok(model_path)
}

/// Download a file from URL to path using ureq
fn download_file(url: &str, path: &Path) -> Result<(), SolveError> {
    let response = ureq::get(url).call().map_err(|e| {
        SolveError::InitializationError(format!("Failed to download model: {}", e))
    })?;

    let mut file = File::create(path).map_err(|e| {
        SolveError::InitializationError(format!("Failed to create model file: {}", e))
    })?;

    let buffer = response.into_body().read_to_vec().map_err(|e| {
        SolveError::InitializationError(format!("Failed to read response body: {}", e))
    })?;

    file.write_all(&buffer).map_err(|e| {
        SolveError::InitializationError(format!("Failed to write model file: {}", e))
    })?;

    Ok(())
}
