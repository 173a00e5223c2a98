//! Health-insurance premium estimation.
//!
//! A questionnaire ([`RawInput`]) is encoded into a fixed 18-column feature
//! row, scaled with the bundle for the applicant's age band and passed to the
//! regressor for the same band. Artifacts are loaded once into an
//! [`ArtifactStore`] and shared read-only by every request.

pub mod artifacts;
pub mod batch;
pub mod categories;
pub mod error;
pub mod features;
pub mod model;
pub mod predictor;
pub mod records;
pub mod risk;
pub mod scaling;
pub mod server;

pub use artifacts::{AgeBand, ArtifactStore, AGE_THRESHOLD};
pub use error::{PremiumError, Result};
pub use features::{encode, FeatureVector, FEATURE_COLUMNS};
pub use model::{Regressor, RegressorArtifact};
pub use predictor::Predictor;
pub use records::{PremiumResponse, RawInput};
pub use risk::normalized_risk;
pub use scaling::{scale, Scaler, ScalerBundle, PLACEHOLDER_COLUMN};
