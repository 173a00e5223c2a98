//! Categorical answers and their reference-level indicator encoding.
//!
//! Every categorical field has one baseline variant that sets no indicator
//! column. The label → variant → column mapping lives in one table per field,
//! so adding a category means adding a row rather than another branch.
//!
//! Unknown labels fall back to the baseline variant (or Bronze for the plan)
//! instead of being rejected; the fallback is logged at debug level.

use log::debug;

/// A categorical questionnaire field with an explicit encoding table.
pub trait Categorical: Copy + PartialEq + 'static {
    /// Wire name of the field, for diagnostics.
    const FIELD: &'static str;
    /// `(label, variant, indicator column)`; `None` marks the baseline.
    const TABLE: &'static [(&'static str, Self, Option<&'static str>)];
    /// Variant used for labels missing from [`Categorical::TABLE`].
    const BASELINE: Self;

    fn from_label(label: &str) -> Self {
        match Self::TABLE.iter().find(|(name, _, _)| *name == label) {
            Some((_, variant, _)) => *variant,
            None => {
                debug!("unrecognized {} {:?}, using baseline", Self::FIELD, label);
                Self::BASELINE
            }
        }
    }

    /// Indicator column set to 1 for this variant, if any.
    fn indicator(self) -> Option<&'static str> {
        Self::TABLE
            .iter()
            .find(|(_, variant, _)| *variant == self)
            .and_then(|(_, _, column)| *column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Categorical for Gender {
    const FIELD: &'static str = "gender";
    const TABLE: &'static [(&'static str, Self, Option<&'static str>)] = &[
        ("Male", Gender::Male, Some("gender_Male")),
        ("Female", Gender::Female, None),
    ];
    const BASELINE: Self = Gender::Female;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaritalStatus {
    Married,
    Unmarried,
}

impl Categorical for MaritalStatus {
    const FIELD: &'static str = "marital_status";
    const TABLE: &'static [(&'static str, Self, Option<&'static str>)] = &[
        ("Married", MaritalStatus::Married, None),
        (
            "Unmarried",
            MaritalStatus::Unmarried,
            Some("marital_status_Unmarried"),
        ),
    ];
    const BASELINE: Self = MaritalStatus::Married;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentStatus {
    Salaried,
    SelfEmployed,
    /// Neither salaried nor self-employed.
    Other,
}

impl Categorical for EmploymentStatus {
    const FIELD: &'static str = "employment_status";
    const TABLE: &'static [(&'static str, Self, Option<&'static str>)] = &[
        (
            "Salaried",
            EmploymentStatus::Salaried,
            Some("employment_status_Salaried"),
        ),
        (
            "Self-Employed",
            EmploymentStatus::SelfEmployed,
            Some("employment_status_Self-Employed"),
        ),
    ];
    const BASELINE: Self = EmploymentStatus::Other;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Normal,
    Overweight,
    Obesity,
    Underweight,
}

impl Categorical for BmiCategory {
    const FIELD: &'static str = "bmi";
    const TABLE: &'static [(&'static str, Self, Option<&'static str>)] = &[
        ("Normal", BmiCategory::Normal, None),
        (
            "Overweight",
            BmiCategory::Overweight,
            Some("bmi_category_Overweight"),
        ),
        ("Obesity", BmiCategory::Obesity, Some("bmi_category_Obesity")),
        (
            "Underweight",
            BmiCategory::Underweight,
            Some("bmi_category_Underweight"),
        ),
    ];
    const BASELINE: Self = BmiCategory::Normal;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmokingStatus {
    No,
    Occasional,
    Regular,
}

impl Categorical for SmokingStatus {
    const FIELD: &'static str = "smoking";
    const TABLE: &'static [(&'static str, Self, Option<&'static str>)] = &[
        ("No", SmokingStatus::No, None),
        (
            "Occasional",
            SmokingStatus::Occasional,
            Some("smoking_status_Occasional"),
        ),
        (
            "Regular",
            SmokingStatus::Regular,
            Some("smoking_status_Regular"),
        ),
    ];
    const BASELINE: Self = SmokingStatus::No;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Categorical for Region {
    const FIELD: &'static str = "region";
    const TABLE: &'static [(&'static str, Self, Option<&'static str>)] = &[
        ("Northeast", Region::Northeast, None),
        ("Northwest", Region::Northwest, Some("region_Northwest")),
        ("Southeast", Region::Southeast, Some("region_Southeast")),
        ("Southwest", Region::Southwest, Some("region_Southwest")),
    ];
    const BASELINE: Self = Region::Northeast;
}

/// Policy tier, encoded as an ordinal rather than an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsurancePlan {
    Bronze,
    Silver,
    Gold,
}

impl InsurancePlan {
    const TABLE: &'static [(&'static str, InsurancePlan, u8)] = &[
        ("Bronze", InsurancePlan::Bronze, 1),
        ("Silver", InsurancePlan::Silver, 2),
        ("Gold", InsurancePlan::Gold, 3),
    ];

    pub fn from_label(label: &str) -> Self {
        match Self::TABLE.iter().find(|(name, _, _)| *name == label) {
            Some((_, plan, _)) => *plan,
            None => {
                debug!("unrecognized insurance_plan {:?}, using Bronze", label);
                InsurancePlan::Bronze
            }
        }
    }

    pub fn ordinal(self) -> u8 {
        Self::TABLE
            .iter()
            .find(|(_, plan, _)| *plan == self)
            .map(|(_, _, rank)| *rank)
            .unwrap_or(1)
    }
}
