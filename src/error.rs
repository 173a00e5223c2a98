use std::path::PathBuf;

use polars::prelude::PolarsError;
use smartcore::error::Failed;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PremiumError>;

#[derive(Error, Debug)]
pub enum PremiumError {
    #[error("cannot read artifact {path:?}: {source}")]
    ArtifactIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed artifact {path:?}: {source}")]
    ArtifactFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid scaler bundle: {reason}")]
    InvalidScaler { reason: String },
    #[error("feature column {column:?} has no value")]
    MissingFeature { column: String },
    #[error("feature frame error: {0}")]
    Frame(#[from] PolarsError),
    #[error("model inference failed: {0}")]
    Model(#[from] Failed),
    #[error("model returned no prediction")]
    EmptyPrediction,
    #[error("model returned a non-finite prediction {value}")]
    NonFinitePrediction { value: f64 },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
