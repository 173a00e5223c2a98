#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use premium_estimator::{
    ArtifactStore, Predictor, RawInput, Regressor, RegressorArtifact, Result, Scaler, ScalerBundle,
    FEATURE_COLUMNS, PLACEHOLDER_COLUMN,
};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters};

pub fn sample_input() -> RawInput {
    RawInput {
        age: 22,
        dependants: 0,
        income: 10.0,
        genetical_risk: 1,
        insurance_plan: "Bronze".to_string(),
        gender: "Female".to_string(),
        marital_status: "Married".to_string(),
        employment_status: "Salaried".to_string(),
        bmi: "Normal".to_string(),
        smoking: "No".to_string(),
        region: "Northwest".to_string(),
        medical_history: "none".to_string(),
    }
}

/// Min-max bundle over the numeric columns; `age_min`/`age_max` bound age.
pub fn bundle(age_min: f64, age_max: f64) -> ScalerBundle {
    let columns = [
        "age",
        "number_of_dependants",
        PLACEHOLDER_COLUMN,
        "income_lakhs",
        "insurance_plan",
        "genetical_risk",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect();

    ScalerBundle::new(
        columns,
        Scaler::MinMax {
            data_min: vec![age_min, 0.0, 1.0, 1.0, 1.0, 0.0],
            data_max: vec![age_max, 5.0, 4.0, 101.0, 3.0, 5.0],
        },
    )
    .unwrap()
}

/// Answers `base + 1000 * scaled age + 10 * region_Northwest`.
pub struct Marker(pub f64);

impl Regressor for Marker {
    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        Ok(vec![self.0 + 1000.0 * *x.get((0, 0)) + 10.0 * *x.get((0, 7))])
    }
}

pub fn predictor_with(young: Box<dyn Regressor>, rest: Box<dyn Regressor>) -> Predictor {
    let store = ArtifactStore::new(young, rest, bundle(18.0, 26.0), bundle(26.0, 106.0)).unwrap();
    Predictor::new(Arc::new(store))
}

pub fn marker_predictor() -> Predictor {
    predictor_with(Box::new(Marker(1000.0)), Box::new(Marker(9000.0)))
}

/// `premium = base + 100 * x0`, fitted with smartcore.
pub fn fitted_linear(base: f64) -> RegressorArtifact {
    let width = FEATURE_COLUMNS.len();
    let rows: Vec<Vec<f64>> = (0..40)
        .map(|i| {
            let mut row = vec![0.0; width];
            row[0] = i as f64;
            if i % 2 == 0 {
                row[1 + (i / 2) % (width - 1)] = 1.0;
            }
            row
        })
        .collect();
    let y: Vec<f64> = rows.iter().map(|row| base + 100.0 * row[0]).collect();
    let x = DenseMatrix::from_2d_vec(&rows);

    let model = LinearRegression::fit(&x, &y, LinearRegressionParameters::default()).unwrap();
    RegressorArtifact::LinearRegression(model)
}

pub fn write_artifacts(dir: &Path) {
    let write = |name: &str, json: String| fs::write(dir.join(name), json).unwrap();

    write("model_young.json", serde_json::to_string(&fitted_linear(2000.4)).unwrap());
    write("model_rest.json", serde_json::to_string(&fitted_linear(8000.4)).unwrap());
    write("scaler_young.json", serde_json::to_string(&bundle(18.0, 26.0)).unwrap());
    write("scaler_rest.json", serde_json::to_string(&bundle(26.0, 106.0)).unwrap());
}
