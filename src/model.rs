//! Regression models the predictor can run.

use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use smartcore::linear::ridge_regression::RidgeRegression;

use crate::error::Result;

/// A fitted regressor mapping feature rows to premiums.
///
/// Implementations must not mutate themselves during inference; the same
/// instance serves concurrent requests.
pub trait Regressor: Send + Sync {
    /// One prediction per row of `x`.
    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>;
}

/// Fitted smartcore model as stored on disk, e.g. `{"linear_regression": {...}}`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressorArtifact {
    LinearRegression(LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>),
    RidgeRegression(RidgeRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>),
    RandomForest(RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>),
}

impl RegressorArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            RegressorArtifact::LinearRegression(_) => "linear_regression",
            RegressorArtifact::RidgeRegression(_) => "ridge_regression",
            RegressorArtifact::RandomForest(_) => "random_forest",
        }
    }
}

impl Regressor for RegressorArtifact {
    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let y = match self {
            RegressorArtifact::LinearRegression(model) => model.predict(x)?,
            RegressorArtifact::RidgeRegression(model) => model.predict(x)?,
            RegressorArtifact::RandomForest(model) => model.predict(x)?,
        };
        Ok(y)
    }
}
