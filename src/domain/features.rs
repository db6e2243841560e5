//! Feature encoding for the trained classifier.
//!
//! Translates a [`ClinicalRecord`] into the exact numeric vector the model
//! was fitted on: ten numerics followed by dummy-encoded indicator bits for
//! the three categorical fields, in a fixed column order.

use super::record::{ChestPainType, ClinicalRecord, SlopeStSegment, Thalassemia};

/// Number of features the deployed model was trained with.
pub const FEATURE_COUNT: usize = 17;

/// Feature names in model column order, as produced by the training
/// pipeline's dummy encoding. Classifier artifacts must declare exactly
/// this schema to be loadable.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Age",
    "Sex",
    "RestingBloodPressure",
    "SerumCholesterol",
    "FastingBloodSugar",
    "RestingECG",
    "MaxHeartRate",
    "ExerciseInducedAngina",
    "STDepression",
    "NumMajorVessels",
    "ChestPainType_Atypical angina",
    "ChestPainType_Non-anginal pain",
    "ChestPainType_Typical angina",
    "Thalassemia_Normal",
    "Thalassemia_Reversible defect",
    "SlopeSTSegment_Flat",
    "SlopeSTSegment_Upsloping",
];

/// Ordered numeric features for one prediction.
///
/// Length and order are fixed by `FEATURE_NAMES`; the only way to obtain a
/// vector is through [`ClinicalRecord::encode`], so downstream consumers can
/// rely on both.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// View the features as a slice in `FEATURE_NAMES` order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl ChestPainType {
    /// Indicator bits in schema order: atypical angina, non-anginal pain,
    /// typical angina. Every category sets exactly one bit.
    fn indicator_bits(self) -> [f64; 3] {
        match self {
            Self::TypicalAngina => [0.0, 0.0, 1.0],
            Self::AtypicalAngina => [1.0, 0.0, 0.0],
            Self::NonAnginalPain => [0.0, 1.0, 0.0],
        }
    }
}

impl Thalassemia {
    /// Indicator bits in schema order: normal, reversible defect.
    /// Fixed Defect is the dummy-encoding baseline and sets neither bit.
    fn indicator_bits(self) -> [f64; 2] {
        match self {
            Self::Normal => [1.0, 0.0],
            Self::FixedDefect => [0.0, 0.0],
            Self::ReversibleDefect => [0.0, 1.0],
        }
    }
}

impl SlopeStSegment {
    /// Indicator bits in schema order: flat, upsloping.
    /// Downsloping is the dummy-encoding baseline and sets neither bit.
    fn indicator_bits(self) -> [f64; 2] {
        match self {
            Self::Upsloping => [0.0, 1.0],
            Self::Flat => [1.0, 0.0],
            Self::Downsloping => [0.0, 0.0],
        }
    }
}

impl ClinicalRecord {
    /// Encode the record into the model's feature vector.
    ///
    /// Numeric fields are cast to f64 unchanged; categorical fields expand
    /// into their indicator bits. Deterministic and infallible: a record
    /// can only hold categories the encoding covers.
    #[must_use]
    pub fn encode(&self) -> FeatureVector {
        let [cp_atypical, cp_non_anginal, cp_typical] = self.chest_pain_type.indicator_bits();
        let [thal_normal, thal_reversible] = self.thalassemia.indicator_bits();
        let [slope_flat, slope_upsloping] = self.slope_st_segment.indicator_bits();

        FeatureVector([
            self.age as f64,
            self.sex as f64,
            self.resting_blood_pressure as f64,
            self.serum_cholesterol as f64,
            self.fasting_blood_sugar as f64,
            self.resting_ecg as f64,
            self.max_heart_rate as f64,
            self.exercise_induced_angina as f64,
            self.st_depression,
            self.num_major_vessels as f64,
            cp_atypical,
            cp_non_anginal,
            cp_typical,
            thal_normal,
            thal_reversible,
            slope_flat,
            slope_upsloping,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ClinicalRecord {
        ClinicalRecord {
            age: 63,
            sex: 1,
            chest_pain_type: ChestPainType::TypicalAngina,
            resting_blood_pressure: 145,
            serum_cholesterol: 233,
            fasting_blood_sugar: 1,
            resting_ecg: 0,
            max_heart_rate: 150,
            exercise_induced_angina: 0,
            st_depression: 2.3,
            slope_st_segment: SlopeStSegment::Flat,
            num_major_vessels: 0,
            thalassemia: Thalassemia::Normal,
        }
    }

    fn position(name: &str) -> usize {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .unwrap_or_else(|| panic!("unknown feature {name}"))
    }

    #[test]
    fn test_schema_has_17_unique_names() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
        for (i, a) in FEATURE_NAMES.iter().enumerate() {
            for b in &FEATURE_NAMES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_encode_matches_schema_order() {
        let v = sample_record().encode();
        let v = v.as_slice();

        assert_eq!(v.len(), FEATURE_COUNT);
        assert!((v[position("Age")] - 63.0).abs() < f64::EPSILON);
        assert!((v[position("RestingBloodPressure")] - 145.0).abs() < f64::EPSILON);
        assert!((v[position("STDepression")] - 2.3).abs() < f64::EPSILON);

        // Typical Angina sets only its own chest pain bit.
        assert_eq!(v[position("ChestPainType_Typical angina")], 1.0);
        assert_eq!(v[position("ChestPainType_Atypical angina")], 0.0);
        assert_eq!(v[position("ChestPainType_Non-anginal pain")], 0.0);

        assert_eq!(v[position("Thalassemia_Normal")], 1.0);
        assert_eq!(v[position("Thalassemia_Reversible defect")], 0.0);

        assert_eq!(v[position("SlopeSTSegment_Flat")], 1.0);
        assert_eq!(v[position("SlopeSTSegment_Upsloping")], 0.0);
    }

    #[test]
    fn test_every_category_combination_encodes() {
        let chest_pain = [
            ChestPainType::TypicalAngina,
            ChestPainType::AtypicalAngina,
            ChestPainType::NonAnginalPain,
        ];
        let slopes = [
            SlopeStSegment::Upsloping,
            SlopeStSegment::Flat,
            SlopeStSegment::Downsloping,
        ];
        let thals = [
            Thalassemia::Normal,
            Thalassemia::FixedDefect,
            Thalassemia::ReversibleDefect,
        ];

        for cp in chest_pain {
            for slope in slopes {
                for thal in thals {
                    let mut record = sample_record();
                    record.chest_pain_type = cp;
                    record.slope_st_segment = slope;
                    record.thalassemia = thal;

                    let v = record.encode();
                    let v = v.as_slice();
                    assert_eq!(v.len(), FEATURE_COUNT);

                    // Indicator positions carry only 0 or 1.
                    for value in &v[10..] {
                        assert!(*value == 0.0 || *value == 1.0);
                    }

                    // Chest pain has one indicator per category.
                    let cp_sum: f64 = v[10..13].iter().sum();
                    assert_eq!(cp_sum, 1.0);

                    // Thalassemia and slope drop one baseline level each.
                    let thal_sum: f64 = v[13..15].iter().sum();
                    let expected = if thal == Thalassemia::FixedDefect { 0.0 } else { 1.0 };
                    assert_eq!(thal_sum, expected);

                    let slope_sum: f64 = v[15..17].iter().sum();
                    let expected = if slope == SlopeStSegment::Downsloping { 0.0 } else { 1.0 };
                    assert_eq!(slope_sum, expected);
                }
            }
        }
    }

    #[test]
    fn test_baseline_categories_set_no_indicator() {
        // Fixed Defect is trained as the all-zero thalassemia baseline, not
        // a missing value. Downsloping plays the same role for slope. If a
        // retrained model changes either baseline this pin must be updated
        // together with the artifact schema.
        let mut record = sample_record();
        record.thalassemia = Thalassemia::FixedDefect;
        record.slope_st_segment = SlopeStSegment::Downsloping;

        let v = record.encode();
        let v = v.as_slice();
        assert_eq!(v[position("Thalassemia_Normal")], 0.0);
        assert_eq!(v[position("Thalassemia_Reversible defect")], 0.0);
        assert_eq!(v[position("SlopeSTSegment_Flat")], 0.0);
        assert_eq!(v[position("SlopeSTSegment_Upsloping")], 0.0);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let record = sample_record();
        let first = record.encode();
        let second = record.encode();

        for (a, b) in first.as_slice().iter().zip(second.as_slice()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_numeric_fields_cast_exactly() {
        let mut record = sample_record();
        record.age = 0;
        record.max_heart_rate = 202;
        record.st_depression = 0.25;

        let v = record.encode();
        let v = v.as_slice();
        assert_eq!(v[position("Age")], 0.0);
        assert_eq!(v[position("MaxHeartRate")], 202.0);
        assert_eq!(v[position("STDepression")], 0.25);
    }
}
