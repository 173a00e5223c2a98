//! Fixed-schema feature row construction.

use polars::prelude::*;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::categories::{
    BmiCategory, Categorical, EmploymentStatus, Gender, InsurancePlan, MaritalStatus, Region,
    SmokingStatus,
};
use crate::error::{PremiumError, Result};
use crate::records::RawInput;
use crate::risk::normalized_risk;

/// Model input columns, in the order both models were fitted on.
pub const FEATURE_COLUMNS: [&str; 18] = [
    "age",
    "number_of_dependants",
    "income_lakhs",
    "insurance_plan",
    "genetical_risk",
    "normalized_risk_score",
    "gender_Male",
    "region_Northwest",
    "region_Southeast",
    "region_Southwest",
    "marital_status_Unmarried",
    "bmi_category_Obesity",
    "bmi_category_Overweight",
    "bmi_category_Underweight",
    "smoking_status_Occasional",
    "smoking_status_Regular",
    "employment_status_Salaried",
    "employment_status_Self-Employed",
];

/// A single encoded request: one row over [`FEATURE_COLUMNS`], all `Float64`.
#[derive(Debug, Clone)]
pub struct FeatureVector {
    frame: DataFrame,
}

impl FeatureVector {
    /// A row with every feature column set to 0.
    pub fn zeros() -> Result<Self> {
        let columns = FEATURE_COLUMNS
            .iter()
            .map(|name| Series::new(name, &[0.0f64]))
            .collect::<Vec<_>>();

        Ok(FeatureVector {
            frame: DataFrame::new(columns)?,
        })
    }

    pub(crate) fn from_frame(frame: DataFrame) -> Self {
        FeatureVector { frame }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn width(&self) -> usize {
        self.frame.width()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.frame.get_column_names()
    }

    /// Overwrites a column with a single value.
    pub fn set(&mut self, column: &str, value: f64) -> Result<()> {
        self.frame.with_column(Series::new(column, &[value]))?;
        Ok(())
    }

    pub fn get(&self, column: &str) -> Result<f64> {
        self.frame
            .column(column)?
            .f64()?
            .get(0)
            .ok_or_else(|| PremiumError::MissingFeature {
                column: column.to_string(),
            })
    }

    /// Row-major 1 × 18 matrix in [`FEATURE_COLUMNS`] order.
    pub fn to_matrix(&self) -> Result<DenseMatrix<f64>> {
        let ordered = self.frame.select(FEATURE_COLUMNS)?;

        let mut xs: Vec<f64> = Vec::with_capacity(FEATURE_COLUMNS.len());
        for name in FEATURE_COLUMNS {
            let value = ordered
                .column(name)?
                .f64()?
                .get(0)
                .ok_or_else(|| PremiumError::MissingFeature {
                    column: name.to_string(),
                })?;
            xs.push(value);
        }

        Ok(DenseMatrix::new(1, FEATURE_COLUMNS.len(), xs, false))
    }
}

fn set_indicator<C: Categorical>(row: &mut FeatureVector, label: &str) -> Result<()> {
    if let Some(column) = C::from_label(label).indicator() {
        row.set(column, 1.0)?;
    }
    Ok(())
}

/// Encodes a questionnaire into an unscaled feature row.
///
/// Numeric answers are copied, the plan becomes its ordinal, each categorical
/// answer raises at most one indicator and the medical history becomes
/// `normalized_risk_score`. Everything else stays 0.
pub fn encode(input: &RawInput) -> Result<FeatureVector> {
    let mut row = FeatureVector::zeros()?;

    row.set("age", input.age as f64)?;
    row.set("number_of_dependants", input.dependants as f64)?;
    row.set("income_lakhs", input.income)?;
    row.set("genetical_risk", input.genetical_risk as f64)?;
    row.set(
        "insurance_plan",
        InsurancePlan::from_label(&input.insurance_plan).ordinal() as f64,
    )?;

    set_indicator::<Gender>(&mut row, &input.gender)?;
    set_indicator::<MaritalStatus>(&mut row, &input.marital_status)?;
    set_indicator::<EmploymentStatus>(&mut row, &input.employment_status)?;
    set_indicator::<BmiCategory>(&mut row, &input.bmi)?;
    set_indicator::<SmokingStatus>(&mut row, &input.smoking)?;
    set_indicator::<Region>(&mut row, &input.region)?;

    row.set(
        "normalized_risk_score",
        normalized_risk(&input.medical_history),
    )?;

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::sample_input;
    use pretty_assertions::assert_eq;
    use smartcore::linalg::basic::arrays::Array;

    fn nonzero_columns(row: &FeatureVector) -> Vec<String> {
        FEATURE_COLUMNS
            .iter()
            .filter(|name| row.get(name).unwrap() != 0.0)
            .map(|name| name.to_string())
            .collect()
    }

    #[test]
    fn encodes_every_column_in_order() {
        let row = encode(&sample_input()).unwrap();

        assert_eq!(row.width(), 18);
        assert_eq!(row.column_names(), FEATURE_COLUMNS.to_vec());
        assert_eq!(row.frame().height(), 1);
    }

    #[test]
    fn baseline_answers_leave_indicators_at_zero() {
        let mut input = sample_input();
        input.age = 40;
        input.dependants = 2;
        input.genetical_risk = 3;
        input.employment_status = "Unemployed".to_string();
        input.region = "Northeast".to_string();

        let row = encode(&input).unwrap();

        assert_eq!(
            nonzero_columns(&row),
            vec![
                "age",
                "number_of_dependants",
                "income_lakhs",
                "insurance_plan",
                "genetical_risk"
            ]
        );
        assert_eq!(row.get("insurance_plan").unwrap(), 1.0);
    }

    #[test]
    fn young_salaried_northwest_scenario() {
        let row = encode(&sample_input()).unwrap();

        assert_eq!(row.get("age").unwrap(), 22.0);
        assert_eq!(row.get("income_lakhs").unwrap(), 10.0);
        assert_eq!(row.get("insurance_plan").unwrap(), 1.0);
        assert_eq!(row.get("employment_status_Salaried").unwrap(), 1.0);
        assert_eq!(row.get("region_Northwest").unwrap(), 1.0);
        assert_eq!(row.get("normalized_risk_score").unwrap(), 0.0);
        assert_eq!(
            nonzero_columns(&row),
            vec![
                "age",
                "income_lakhs",
                "insurance_plan",
                "genetical_risk",
                "region_Northwest",
                "employment_status_Salaried"
            ]
        );
    }

    #[test]
    fn explicit_categories_raise_one_indicator_each() {
        let mut input = sample_input();
        input.insurance_plan = "Gold".to_string();
        input.gender = "Male".to_string();
        input.marital_status = "Unmarried".to_string();
        input.employment_status = "Self-Employed".to_string();
        input.bmi = "Obesity".to_string();
        input.smoking = "Regular".to_string();
        input.region = "Southwest".to_string();
        input.medical_history = "Diabetes & Heart disease".to_string();

        let row = encode(&input).unwrap();

        assert_eq!(row.get("insurance_plan").unwrap(), 3.0);
        assert_eq!(row.get("normalized_risk_score").unwrap(), 1.0);
        for column in [
            "gender_Male",
            "marital_status_Unmarried",
            "employment_status_Self-Employed",
            "bmi_category_Obesity",
            "smoking_status_Regular",
            "region_Southwest",
        ] {
            assert_eq!(row.get(column).unwrap(), 1.0, "{column}");
        }
        assert_eq!(row.get("employment_status_Salaried").unwrap(), 0.0);
        assert_eq!(row.get("region_Northwest").unwrap(), 0.0);
    }

    #[test]
    fn encoding_leaves_input_untouched() {
        let input = sample_input();
        let before = input.clone();
        encode(&input).unwrap();
        assert_eq!(input, before);
    }

    #[test]
    fn matrix_follows_feature_order() {
        let row = encode(&sample_input()).unwrap();
        let matrix = row.to_matrix().unwrap();

        assert_eq!(matrix.shape(), (1, 18));
        assert_eq!(*matrix.get((0, 0)), 22.0);
        assert_eq!(*matrix.get((0, 7)), 1.0);
        assert_eq!(*matrix.get((0, 16)), 1.0);
    }
}
