//! Read-only model and scaler artifacts, loaded once at startup.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::info;
use serde::de::DeserializeOwned;

use crate::error::{PremiumError, Result};
use crate::model::{Regressor, RegressorArtifact};
use crate::scaling::ScalerBundle;

/// Highest age, inclusive, served by the young model and scaler.
pub const AGE_THRESHOLD: u32 = 25;

static MODEL_YOUNG_FILE: &str = "model_young.json";
static MODEL_REST_FILE: &str = "model_rest.json";
static SCALER_YOUNG_FILE: &str = "scaler_young.json";
static SCALER_REST_FILE: &str = "scaler_rest.json";

/// Which artifact pair serves a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBand {
    Young,
    Rest,
}

impl AgeBand {
    pub fn for_age(age: u32) -> Self {
        if age <= AGE_THRESHOLD {
            AgeBand::Young
        } else {
            AgeBand::Rest
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::Young => "young",
            AgeBand::Rest => "rest",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both fitted models and both scaler bundles. Never mutated after
/// construction, so it can be shared behind an `Arc` without locking.
pub struct ArtifactStore {
    young_model: Box<dyn Regressor>,
    rest_model: Box<dyn Regressor>,
    young_scaler: ScalerBundle,
    rest_scaler: ScalerBundle,
}

impl ArtifactStore {
    pub fn new(
        young_model: Box<dyn Regressor>,
        rest_model: Box<dyn Regressor>,
        young_scaler: ScalerBundle,
        rest_scaler: ScalerBundle,
    ) -> Result<Self> {
        young_scaler.validate()?;
        rest_scaler.validate()?;

        Ok(ArtifactStore {
            young_model,
            rest_model,
            young_scaler,
            rest_scaler,
        })
    }

    /// Loads `model_{young,rest}.json` and `scaler_{young,rest}.json` from `dir`.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        info!("loading artifacts from {}", dir.display());

        let young_model: RegressorArtifact = read_json(dir.join(MODEL_YOUNG_FILE))?;
        let rest_model: RegressorArtifact = read_json(dir.join(MODEL_REST_FILE))?;
        let young_scaler: ScalerBundle = read_json(dir.join(SCALER_YOUNG_FILE))?;
        let rest_scaler: ScalerBundle = read_json(dir.join(SCALER_REST_FILE))?;

        info!(
            "young: {} model, scaling {:?}",
            young_model.kind(),
            young_scaler.columns()
        );
        info!(
            "rest: {} model, scaling {:?}",
            rest_model.kind(),
            rest_scaler.columns()
        );

        ArtifactStore::new(
            Box::new(young_model),
            Box::new(rest_model),
            young_scaler,
            rest_scaler,
        )
    }

    pub fn model(&self, band: AgeBand) -> &dyn Regressor {
        match band {
            AgeBand::Young => self.young_model.as_ref(),
            AgeBand::Rest => self.rest_model.as_ref(),
        }
    }

    pub fn scaler(&self, band: AgeBand) -> &ScalerBundle {
        match band {
            AgeBand::Young => &self.young_scaler,
            AgeBand::Rest => &self.rest_scaler,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: PathBuf) -> Result<T> {
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(source) => return Err(PremiumError::ArtifactIo { path, source }),
    };

    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| PremiumError::ArtifactFormat { path, source })
}
