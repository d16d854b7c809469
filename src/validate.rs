//! Field Validation
//!
//! Pure validation over the whole draft record. The diastolic rule depends
//! on the systolic value, so the error map is always recomputed from the
//! full record rather than from one field in isolation.

use std::collections::HashMap;

use crate::models::{DraftRecord, Field};

/// Field name -> error message. Absent entry = valid.
pub type FieldErrors = HashMap<Field, String>;

fn int_in_range(raw: &str, min: i32, max: i32) -> bool {
    raw.trim()
        .parse::<i32>()
        .map_or(false, |v| v >= min && v <= max)
}

fn float_in_range(raw: &str, min: f64, max: f64) -> bool {
    raw.trim()
        .parse::<f64>()
        .map_or(false, |v| v >= min && v <= max)
}

/// Validate one field against the current draft. A failed numeric parse
/// yields the same message as a range violation.
pub fn validate_field(field: Field, draft: &DraftRecord) -> Option<String> {
    let raw = draft.get(field);
    match field {
        Field::Age => (!int_in_range(raw, 1, 120))
            .then(|| "Usia harus antara 1-120 tahun".to_string()),
        Field::Height => (!float_in_range(raw, 100.0, 250.0))
            .then(|| "Tinggi badan harus antara 100-250 cm".to_string()),
        Field::Weight => (!float_in_range(raw, 30.0, 200.0))
            .then(|| "Berat badan harus antara 30-200 kg".to_string()),
        Field::ApHi => (!int_in_range(raw, 80, 200))
            .then(|| "Systolic BP harus antara 80-200 mmHg".to_string()),
        Field::ApLo => {
            if !int_in_range(raw, 40, 150) {
                return Some("Diastolic BP harus antara 40-150 mmHg".to_string());
            }
            // Diastolic must stay strictly below systolic whenever systolic parses.
            if let (Ok(lo), Ok(hi)) = (
                raw.trim().parse::<i32>(),
                draft.get(Field::ApHi).trim().parse::<i32>(),
            ) {
                if lo >= hi {
                    return Some("Diastolic BP harus lebih kecil dari Systolic BP".to_string());
                }
            }
            None
        }
        Field::Gender
        | Field::Cholesterol
        | Field::Gluc
        | Field::Smoke
        | Field::Alco
        | Field::Active => raw.is_empty().then(|| "Field ini wajib diisi".to_string()),
    }
}

/// Recompute the full error map for the draft.
pub fn validate_record(draft: &DraftRecord) -> FieldErrors {
    Field::ALL
        .iter()
        .filter_map(|&field| validate_field(field, draft).map(|msg| (field, msg)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Draft that passes every rule.
    fn valid_draft() -> DraftRecord {
        DraftRecord::sample()
    }

    fn error_for(field: Field, value: &str) -> Option<String> {
        let mut draft = valid_draft();
        draft.set(field, value.to_string());
        validate_field(field, &draft)
    }

    #[test]
    fn test_age_bounds() {
        assert!(error_for(Field::Age, "0").is_some());
        assert!(error_for(Field::Age, "1").is_none());
        assert!(error_for(Field::Age, "120").is_none());
        assert_eq!(
            error_for(Field::Age, "121").unwrap(),
            "Usia harus antara 1-120 tahun"
        );
    }

    #[test]
    fn test_height_and_weight_bounds() {
        assert_eq!(
            error_for(Field::Height, "99.9").unwrap(),
            "Tinggi badan harus antara 100-250 cm"
        );
        assert!(error_for(Field::Height, "100").is_none());
        assert!(error_for(Field::Height, "250").is_none());
        assert!(error_for(Field::Height, "250.1").is_some());

        assert_eq!(
            error_for(Field::Weight, "29").unwrap(),
            "Berat badan harus antara 30-200 kg"
        );
        assert!(error_for(Field::Weight, "30").is_none());
        assert!(error_for(Field::Weight, "72.5").is_none());
        assert!(error_for(Field::Weight, "201").is_some());
    }

    #[test]
    fn test_blood_pressure_bounds() {
        assert_eq!(
            error_for(Field::ApHi, "79").unwrap(),
            "Systolic BP harus antara 80-200 mmHg"
        );
        assert!(error_for(Field::ApHi, "80").is_none());
        assert!(error_for(Field::ApHi, "200").is_none());
        assert!(error_for(Field::ApHi, "201").is_some());

        assert_eq!(
            error_for(Field::ApLo, "39").unwrap(),
            "Diastolic BP harus antara 40-150 mmHg"
        );
        assert!(error_for(Field::ApLo, "151").is_some());
    }

    #[test]
    fn test_not_a_number_gets_range_message() {
        assert_eq!(
            error_for(Field::Age, "abc").unwrap(),
            "Usia harus antara 1-120 tahun"
        );
        assert_eq!(
            error_for(Field::ApHi, "").unwrap(),
            "Systolic BP harus antara 80-200 mmHg"
        );
    }

    #[test]
    fn test_diastolic_depends_on_systolic() {
        let mut draft = valid_draft();
        draft.ap_hi = "120".to_string();

        draft.ap_lo = "120".to_string();
        assert_eq!(
            validate_field(Field::ApLo, &draft).unwrap(),
            "Diastolic BP harus lebih kecil dari Systolic BP"
        );

        draft.ap_lo = "119".to_string();
        assert!(validate_field(Field::ApLo, &draft).is_none());

        draft.ap_lo = "80".to_string();
        assert!(validate_field(Field::ApLo, &draft).is_none());
    }

    #[test]
    fn test_lowering_systolic_flags_diastolic() {
        let mut draft = valid_draft();
        draft.ap_hi = "100".to_string();
        draft.ap_lo = "80".to_string();
        assert!(validate_record(&draft).is_empty());

        // Editing ap_hi after ap_lo was entered re-asserts the cross rule.
        draft.ap_hi = "80".to_string();
        let errors = validate_record(&draft);
        assert_eq!(
            errors.get(&Field::ApLo).unwrap(),
            "Diastolic BP harus lebih kecil dari Systolic BP"
        );
    }

    #[test]
    fn test_categorical_fields_required() {
        for field in [
            Field::Gender,
            Field::Cholesterol,
            Field::Gluc,
            Field::Smoke,
            Field::Alco,
            Field::Active,
        ] {
            assert_eq!(error_for(field, "").unwrap(), "Field ini wajib diisi");
            assert!(error_for(field, "1").is_none());
        }
    }

    #[test]
    fn test_empty_draft_has_eleven_errors() {
        let errors = validate_record(&DraftRecord::default());
        assert_eq!(errors.len(), Field::ALL.len());
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate_record(&valid_draft()).is_empty());
    }
}
