//! OCR classifier implementations
//!
//! Backends implementing the [`Classifier`](crate::classifier::Classifier)
//! trait. Currently a single pure-Rust backend built on the ocrs library.

pub mod ocrs;

use std::sync::Arc;

use crate::classifier::Classifier;
use crate::error::SolveError;

/// Build the default classifier backend
pub fn default_classifier() -> Result<Arc<dyn Classifier>, SolveError> {
    Ok(Arc::new(ocrs::OcrsClassifier::new()?))
}
