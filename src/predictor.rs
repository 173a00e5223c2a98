use std::sync::Arc;

use log::debug;

use crate::artifacts::{AgeBand, ArtifactStore};
use crate::error::{PremiumError, Result};
use crate::features::{encode, FeatureVector};
use crate::records::RawInput;
use crate::scaling::scale;

/// Runs the encode → scale → regress pipeline against a shared artifact store.
///
/// Cloning is cheap; every request builds its own feature row.
#[derive(Clone)]
pub struct Predictor {
    store: Arc<ArtifactStore>,
}

impl Predictor {
    pub fn new(store: Arc<ArtifactStore>) -> Self {
        Predictor { store }
    }

    /// The encoded and scaled row the selected model receives.
    pub fn features(&self, input: &RawInput) -> Result<FeatureVector> {
        let row = encode(input)?;
        scale(&self.store, input.age, row)
    }

    /// Estimated annual premium, truncated towards zero.
    pub fn predict(&self, input: &RawInput) -> Result<i64> {
        let band = AgeBand::for_age(input.age);
        let x = self.features(input)?.to_matrix()?;

        let y = self.store.model(band).predict(&x)?;
        let value = *y.first().ok_or(PremiumError::EmptyPrediction)?;
        if !value.is_finite() {
            return Err(PremiumError::NonFinitePrediction { value });
        }

        let premium = value.trunc() as i64;
        debug!("age {} routed to {} model: {}", input.age, band, premium);
        Ok(premium)
    }
}
