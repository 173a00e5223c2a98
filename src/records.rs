use serde::{Deserialize, Serialize};

/// One questionnaire answer set, exactly as the form client posts it.
///
/// Categorical answers stay as their wire labels; [`crate::categories`] maps
/// them onto encoded variants. Unknown labels are kept so a scored batch can
/// be written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub age: u32,
    pub dependants: u32,
    /// Annual income in lakhs.
    pub income: f64,
    pub genetical_risk: u32,
    pub insurance_plan: String,
    pub gender: String,
    pub marital_status: String,
    pub employment_status: String,
    pub bmi: String,
    pub smoking: String,
    pub region: String,
    /// Disease labels joined by `" & "`.
    pub medical_history: String,
}

/// A scored batch row: the request fields followed by the estimate.
///
/// Fields are spelled out because csv cannot serialize flattened maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub age: u32,
    pub dependants: u32,
    pub income: f64,
    pub genetical_risk: u32,
    pub insurance_plan: String,
    pub gender: String,
    pub marital_status: String,
    pub employment_status: String,
    pub bmi: String,
    pub smoking: String,
    pub region: String,
    pub medical_history: String,
    pub predicted_premium: i64,
}

impl ScoredRecord {
    pub fn new(input: RawInput, predicted_premium: i64) -> Self {
        ScoredRecord {
            age: input.age,
            dependants: input.dependants,
            income: input.income,
            genetical_risk: input.genetical_risk,
            insurance_plan: input.insurance_plan,
            gender: input.gender,
            marital_status: input.marital_status,
            employment_status: input.employment_status,
            bmi: input.bmi,
            smoking: input.smoking,
            region: input.region,
            medical_history: input.medical_history,
            predicted_premium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumResponse {
    pub predicted_premium: i64,
}

#[cfg(test)]
pub(crate) fn sample_input() -> RawInput {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_form_payload() {
        let payload = r#"{
            "age": 30, "dependants": 2, "income": 12, "genetical_risk": 3,
            "insurance_plan": "Gold", "gender": "Male", "marital_status": "Unmarried",
            "employment_status": "Self-Employed", "bmi": "Obesity", "smoking": "Regular",
            "region": "Southeast", "medical_history": "Diabetes & Thyroid"
        }"#;
        let input: RawInput = serde_json::from_str(payload).unwrap();

        assert_eq!(input.age, 30);
        assert_eq!(input.income, 12.0);
        assert_eq!(input.employment_status, "Self-Employed");
    }

    #[test]
    fn rejects_negative_counts() {
        let mut value = serde_json::to_value(sample_input()).unwrap();
        value["dependants"] = serde_json::json!(-1);

        assert!(serde_json::from_value::<RawInput>(value).is_err());
    }
}
