//! Multi-variant attempt loop, character correction, and result selection.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::classifier::Classifier;
use crate::classifiers;
use crate::error::SolveError;
use crate::preprocessing::{self, Variant};

/// Expected captcha length; results of this length win selection
const EXPECTED_LEN: usize = 6;

/// Character confusions seen on this captcha family, applied after
/// lowercasing
const CORRECTIONS: &[(char, char)] = &[('z', '2')];

pub struct Solver {
    classifier: Arc<dyn Classifier>,
}

impl Solver {
    /// Build a solver over the default classifier backend
    pub fn new() -> Result<Self, SolveError> {
        Ok(Self {
            classifier: classifiers::default_classifier()?,
        })
    }

    #[cfg(test)]
    fn with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Solve one captcha image.
    ///
    /// The only error that escapes is the initial file read; everything past
    /// that degrades to fewer variants, down to an empty result.
    pub fn solve(&self, path: &Path) -> Result<String, SolveError> {
        let source = fs::read(path)
            .map_err(|e| SolveError::FileReadError(format!("{}: {}", path.display(), e)))?;
        let attempts = self.attempt_variants(&source);
        Ok(select_best(&attempts))
    }

    /// Run every preprocessing variant through the classifier, in fixed
    /// order, dropping variants that fail anywhere in render or classify.
    fn attempt_variants(&self, source: &[u8]) -> Vec<(Variant, String)> {
        let mut results = Vec::new();

        for variant in Variant::ALL {
            let outcome = preprocessing::render(variant, source)
                .and_then(|bytes| self.classifier.classify(&bytes));
            match outcome {
                Ok(raw) => {
                    tracing::debug!(variant = variant.as_str(), raw = %raw, "variant prediction");
                    results.push((variant, raw));
                }
                Err(e) => {
                    tracing::debug!(variant = variant.as_str(), error = %e, "variant dropped");
                }
            }
        }

        results
    }
}

/// Lowercase a raw prediction and apply the correction table globally
pub fn apply_corrections(raw: &str) -> String {
    let mut corrected = raw.to_lowercase();
    for &(wrong, right) in CORRECTIONS {
        corrected = corrected.replace(wrong, &right.to_string());
    }
    corrected
}

/// Pick the result: first corrected text of the expected length, else the
/// first successful variant's corrected text, else empty
pub fn select_best(attempts: &[(Variant, String)]) -> String {
    let corrected: Vec<String> = attempts
        .iter()
        .map(|(_, raw)| apply_corrections(raw))
        .collect();

    if let Some(hit) = corrected
        .iter()
        .find(|text| text.chars().count() == EXPECTED_LEN)
    {
        return hit.clone();
    }

    corrected.into_iter().next().unwrap_or_default()
}
