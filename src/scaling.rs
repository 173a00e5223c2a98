//! Age-conditioned scaling of the numeric feature columns.
//!
//! A [`ScalerBundle`] pairs fitted scaler parameters with the ordered columns
//! they were fitted on. The fitted column list includes [`PLACEHOLDER_COLUMN`],
//! which no request carries: it is synthesized as 0 before the transform and
//! dropped afterwards so it never reaches a model. A typical bundle declares
//!
//! ```text
//! age, number_of_dependants, income_level, income_lakhs, insurance_plan, genetical_risk
//! ```
//!
//! Columns outside the declared list pass through unchanged.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::artifacts::{AgeBand, ArtifactStore};
use crate::error::{PremiumError, Result};
use crate::features::{FeatureVector, FEATURE_COLUMNS};

/// Column present in the scalers' fitted schema but not in the feature row.
pub const PLACEHOLDER_COLUMN: &str = "income_level";

/// Fitted per-column scaler parameters, indexed like the bundle's columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scaler {
    /// `(x - data_min) / (data_max - data_min)`
    MinMax {
        data_min: Vec<f64>,
        data_max: Vec<f64>,
    },
    /// `(x - mean) / scale`
    Standard { mean: Vec<f64>, scale: Vec<f64> },
}

impl Scaler {
    fn dimensions(&self) -> (usize, usize) {
        match self {
            Scaler::MinMax { data_min, data_max } => (data_min.len(), data_max.len()),
            Scaler::Standard { mean, scale } => (mean.len(), scale.len()),
        }
    }

    /// Offset and divisor for column `idx`. A zero divisor becomes 1 so
    /// constant training columns do not divide by zero.
    fn parameters(&self, idx: usize) -> (f64, f64) {
        let (offset, divisor) = match self {
            Scaler::MinMax { data_min, data_max } => (data_min[idx], data_max[idx] - data_min[idx]),
            Scaler::Standard { mean, scale } => (mean[idx], scale[idx]),
        };
        if divisor == 0.0 {
            (offset, 1.0)
        } else {
            (offset, divisor)
        }
    }

    fn transform(&self, idx: usize, column: Series) -> Series {
        let (offset, divisor) = self.parameters(idx);
        (column - offset) / divisor
    }
}

/// Always validated: deserialization goes through [`ScalerBundle::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BundleFile")]
pub struct ScalerBundle {
    #[serde(rename = "cols_to_scale")]
    columns: Vec<String>,
    scaler: Scaler,
}

/// On-disk shape of a bundle before validation.
#[derive(Deserialize)]
struct BundleFile {
    cols_to_scale: Vec<String>,
    scaler: Scaler,
}

impl TryFrom<BundleFile> for ScalerBundle {
    type Error = PremiumError;

    fn try_from(file: BundleFile) -> Result<Self> {
        ScalerBundle::new(file.cols_to_scale, file.scaler)
    }
}

impl ScalerBundle {
    pub fn new(columns: Vec<String>, scaler: Scaler) -> Result<Self> {
        let bundle = ScalerBundle { columns, scaler };
        bundle.validate()?;
        Ok(bundle)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Checks the parameters line up with the declared columns, that every
    /// declared column is either a feature or the placeholder, and that the
    /// placeholder is declared.
    pub fn validate(&self) -> Result<()> {
        let (left, right) = self.scaler.dimensions();
        if left != self.columns.len() || right != self.columns.len() {
            return Err(PremiumError::InvalidScaler {
                reason: format!(
                    "{} columns declared but parameters have lengths {} and {}",
                    self.columns.len(),
                    left,
                    right
                ),
            });
        }

        for (idx, column) in self.columns.iter().enumerate() {
            let known = column == PLACEHOLDER_COLUMN || FEATURE_COLUMNS.contains(&column.as_str());
            if !known {
                return Err(PremiumError::InvalidScaler {
                    reason: format!("unknown column {:?}", column),
                });
            }
            if self.columns[..idx].contains(column) {
                return Err(PremiumError::InvalidScaler {
                    reason: format!("column {:?} declared twice", column),
                });
            }
        }

        if !self.columns.iter().any(|column| column == PLACEHOLDER_COLUMN) {
            return Err(PremiumError::InvalidScaler {
                reason: format!("placeholder column {:?} not declared", PLACEHOLDER_COLUMN),
            });
        }

        Ok(())
    }

    /// Scales the declared columns of `row`, synthesizing and then dropping
    /// the placeholder column.
    pub fn apply(&self, row: FeatureVector) -> Result<FeatureVector> {
        let mut frame = row.into_frame();
        frame.with_column(Series::new(PLACEHOLDER_COLUMN, &[0.0f64]))?;

        for (idx, name) in self.columns.iter().enumerate() {
            let column = frame.column(name)?.cast(&DataType::Float64)?;
            let mut scaled = self.scaler.transform(idx, column);
            scaled.rename(name);
            frame.with_column(scaled)?;
        }

        let frame = frame.drop(PLACEHOLDER_COLUMN)?;
        Ok(FeatureVector::from_frame(frame))
    }
}

/// Applies the scaler bundle selected by `age` to `row`.
pub fn scale(store: &ArtifactStore, age: u32, row: FeatureVector) -> Result<FeatureVector> {
    let band = AgeBand::for_age(age);
    log::trace!("scaling with the {} bundle", band);
    store.scaler(band).apply(row)
}

#[cfg(test)]
pub(crate) fn bundle_columns() -> Vec<String> {
    [
        "age",
        "number_of_dependants",
        PLACEHOLDER_COLUMN,
        "income_lakhs",
        "insurance_plan",
        "genetical_risk",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect()
}
