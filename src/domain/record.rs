//! Clinical record types for heart disease risk prediction.
//!
//! Field vocabulary follows the UCI Cleveland heart disease dataset the
//! deployed model was trained on.

/// Chest pain type reported by the patient.
///
/// The training data contains exactly these three categories; any other
/// value must be rejected before a record is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChestPainType {
    /// Substernal pain provoked by exertion, relieved by rest
    TypicalAngina,
    /// Pain with some but not all characteristics of typical angina
    AtypicalAngina,
    /// Chest pain not consistent with angina
    NonAnginalPain,
}

impl ChestPainType {
    /// Parse the canonical category name used by the trained model.
    ///
    /// Matching is exact (case-sensitive); returns `None` for anything
    /// outside the closed set.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Typical Angina" => Some(Self::TypicalAngina),
            "Atypical Angina" => Some(Self::AtypicalAngina),
            "Non-Anginal Pain" => Some(Self::NonAnginalPain),
            _ => None,
        }
    }

    /// Canonical category name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TypicalAngina => "Typical Angina",
            Self::AtypicalAngina => "Atypical Angina",
            Self::NonAnginalPain => "Non-Anginal Pain",
        }
    }
}

impl std::fmt::Display for ChestPainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Slope of the peak exercise ST segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeStSegment {
    Upsloping,
    Flat,
    Downsloping,
}

impl SlopeStSegment {
    /// Parse the canonical category name used by the trained model.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Upsloping" => Some(Self::Upsloping),
            "Flat" => Some(Self::Flat),
            "Downsloping" => Some(Self::Downsloping),
            _ => None,
        }
    }

    /// Canonical category name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Upsloping => "Upsloping",
            Self::Flat => "Flat",
            Self::Downsloping => "Downsloping",
        }
    }
}

impl std::fmt::Display for SlopeStSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Thalassemia blood disorder status from the thallium stress test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thalassemia {
    /// Normal blood flow
    Normal,
    /// Permanent perfusion defect
    FixedDefect,
    /// Defect visible under stress only
    ReversibleDefect,
}

impl Thalassemia {
    /// Parse the canonical category name used by the trained model.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Normal" => Some(Self::Normal),
            "Fixed Defect" => Some(Self::FixedDefect),
            "Reversible Defect" => Some(Self::ReversibleDefect),
            _ => None,
        }
    }

    /// Canonical category name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::FixedDefect => "Fixed Defect",
            Self::ReversibleDefect => "Reversible Defect",
        }
    }
}

impl std::fmt::Display for Thalassemia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One patient's clinical measurements, validated at the request boundary.
///
/// Numeric fields carry the inbound contract's types unchanged; no range
/// clamping or sanitization happens here. Categorical fields are already
/// parsed into their closed enums, so a constructed record always encodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicalRecord {
    /// Age in years
    pub age: i64,

    /// Sex: 0 = female, 1 = male
    pub sex: i64,

    /// Chest pain category
    pub chest_pain_type: ChestPainType,

    /// Resting blood pressure in mm Hg
    pub resting_blood_pressure: i64,

    /// Serum cholesterol in mg/dl
    pub serum_cholesterol: i64,

    /// Fasting blood sugar > 120 mg/dl: 0 = no, 1 = yes
    pub fasting_blood_sugar: i64,

    /// Resting electrocardiogram result code (0-2)
    pub resting_ecg: i64,

    /// Maximum heart rate achieved during exercise
    pub max_heart_rate: i64,

    /// Exercise induced angina: 0 = no, 1 = yes
    pub exercise_induced_angina: i64,

    /// ST depression induced by exercise relative to rest
    pub st_depression: f64,

    /// Slope of the peak exercise ST segment
    pub slope_st_segment: SlopeStSegment,

    /// Number of major vessels colored by fluoroscopy (0-3)
    pub num_major_vessels: i64,

    /// Thalassemia status
    pub thalassemia: Thalassemia,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chest_pain_from_name() {
        assert_eq!(
            ChestPainType::from_name("Typical Angina"),
            Some(ChestPainType::TypicalAngina)
        );
        assert_eq!(
            ChestPainType::from_name("Atypical Angina"),
            Some(ChestPainType::AtypicalAngina)
        );
        assert_eq!(
            ChestPainType::from_name("Non-Anginal Pain"),
            Some(ChestPainType::NonAnginalPain)
        );
        assert_eq!(ChestPainType::from_name("Asymptomatic"), None);
    }

    #[test]
    fn test_category_names_are_case_sensitive() {
        assert_eq!(ChestPainType::from_name("typical angina"), None);
        assert_eq!(SlopeStSegment::from_name("FLAT"), None);
        assert_eq!(Thalassemia::from_name("fixed defect"), None);
    }

    #[test]
    fn test_slope_from_name() {
        assert_eq!(
            SlopeStSegment::from_name("Upsloping"),
            Some(SlopeStSegment::Upsloping)
        );
        assert_eq!(SlopeStSegment::from_name("Flat"), Some(SlopeStSegment::Flat));
        assert_eq!(
            SlopeStSegment::from_name("Downsloping"),
            Some(SlopeStSegment::Downsloping)
        );
        assert_eq!(SlopeStSegment::from_name("Sloped"), None);
    }

    #[test]
    fn test_thalassemia_from_name() {
        assert_eq!(Thalassemia::from_name("Normal"), Some(Thalassemia::Normal));
        assert_eq!(
            Thalassemia::from_name("Fixed Defect"),
            Some(Thalassemia::FixedDefect)
        );
        assert_eq!(
            Thalassemia::from_name("Reversible Defect"),
            Some(Thalassemia::ReversibleDefect)
        );
        assert_eq!(Thalassemia::from_name(""), None);
    }

    #[test]
    fn test_name_round_trips_through_from_name() {
        for cp in [
            ChestPainType::TypicalAngina,
            ChestPainType::AtypicalAngina,
            ChestPainType::NonAnginalPain,
        ] {
            assert_eq!(ChestPainType::from_name(cp.name()), Some(cp));
        }
        for slope in [
            SlopeStSegment::Upsloping,
            SlopeStSegment::Flat,
            SlopeStSegment::Downsloping,
        ] {
            assert_eq!(SlopeStSegment::from_name(slope.name()), Some(slope));
        }
        for thal in [
            Thalassemia::Normal,
            Thalassemia::FixedDefect,
            Thalassemia::ReversibleDefect,
        ] {
            assert_eq!(Thalassemia::from_name(thal.name()), Some(thal));
        }
    }
}
