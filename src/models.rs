//! Frontend Models
//!
//! Draft form input, wire payload, and prediction result.

use serde::{Deserialize, Serialize};

/// The eleven vitals fields, in form display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    Gender,
    Height,
    Weight,
    ApHi,
    ApLo,
    Cholesterol,
    Gluc,
    Smoke,
    Alco,
    Active,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Age,
        Field::Gender,
        Field::Height,
        Field::Weight,
        Field::ApHi,
        Field::ApLo,
        Field::Cholesterol,
        Field::Gluc,
        Field::Smoke,
        Field::Alco,
        Field::Active,
    ];

    /// Wire name, also used as the DOM id.
    pub fn name(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Height => "height",
            Field::Weight => "weight",
            Field::ApHi => "ap_hi",
            Field::ApLo => "ap_lo",
            Field::Cholesterol => "cholesterol",
            Field::Gluc => "gluc",
            Field::Smoke => "smoke",
            Field::Alco => "alco",
            Field::Active => "active",
        }
    }
}

/// In-progress form input, every field held as raw text until validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftRecord {
    pub age: String,
    pub gender: String,
    pub height: String,
    pub weight: String,
    pub ap_hi: String,
    pub ap_lo: String,
    pub cholesterol: String,
    pub gluc: String,
    pub smoke: String,
    pub alco: String,
    pub active: String,
}

impl DraftRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Height => &self.height,
            Field::Weight => &self.weight,
            Field::ApHi => &self.ap_hi,
            Field::ApLo => &self.ap_lo,
            Field::Cholesterol => &self.cholesterol,
            Field::Gluc => &self.gluc,
            Field::Smoke => &self.smoke,
            Field::Alco => &self.alco,
            Field::Active => &self.active,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Age => self.age = value,
            Field::Gender => self.gender = value,
            Field::Height => self.height = value,
            Field::Weight => self.weight = value,
            Field::ApHi => self.ap_hi = value,
            Field::ApLo => self.ap_lo = value,
            Field::Cholesterol => self.cholesterol = value,
            Field::Gluc => self.gluc = value,
            Field::Smoke => self.smoke = value,
            Field::Alco => self.alco = value,
            Field::Active => self.active = value,
        }
    }

    /// Pre-filled record for the diagnostics test-predict card.
    pub fn sample() -> Self {
        Self {
            age: "50".into(),
            gender: "2".into(),
            height: "170".into(),
            weight: "70".into(),
            ap_hi: "120".into(),
            ap_lo: "80".into(),
            cholesterol: "1".into(),
            gluc: "1".into(),
            smoke: "0".into(),
            alco: "0".into(),
            active: "1".into(),
        }
    }

    /// Coerce the raw text into the numeric wire payload.
    pub fn to_payload(&self) -> Result<VitalsPayload, String> {
        fn int(field: Field, raw: &str) -> Result<i32, String> {
            raw.trim()
                .parse()
                .map_err(|_| format!("{}: not a valid number", field.name()))
        }
        fn float(field: Field, raw: &str) -> Result<f64, String> {
            raw.trim()
                .parse()
                .map_err(|_| format!("{}: not a valid number", field.name()))
        }
        Ok(VitalsPayload {
            age: int(Field::Age, &self.age)?,
            gender: int(Field::Gender, &self.gender)?,
            height: float(Field::Height, &self.height)?,
            weight: float(Field::Weight, &self.weight)?,
            ap_hi: int(Field::ApHi, &self.ap_hi)?,
            ap_lo: int(Field::ApLo, &self.ap_lo)?,
            cholesterol: int(Field::Cholesterol, &self.cholesterol)?,
            gluc: int(Field::Gluc, &self.gluc)?,
            smoke: int(Field::Smoke, &self.smoke)?,
            alco: int(Field::Alco, &self.alco)?,
            active: int(Field::Active, &self.active)?,
        })
    }
}

/// Numeric, submission-ready form of the draft. Sent verbatim as the
/// request body; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalsPayload {
    pub age: i32,
    pub gender: i32,
    pub height: f64,
    pub weight: f64,
    pub ap_hi: i32,
    pub ap_lo: i32,
    pub cholesterol: i32,
    pub gluc: i32,
    pub smoke: i32,
    pub alco: i32,
    pub active: i32,
}

/// Response body of a successful prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: u8,
    pub probability: Option<f64>,
}

impl PredictionResult {
    pub fn risk_label(&self) -> &'static str {
        if self.prediction == 1 {
            "Risiko Tinggi"
        } else {
            "Risiko Rendah"
        }
    }

    /// Probability as a percentage string, e.g. "87.31%".
    pub fn probability_percent(&self) -> Option<String> {
        self.probability.map(|p| format!("{:.2}%", p * 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_wire_order() {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            [
                "age", "gender", "height", "weight", "ap_hi", "ap_lo", "cholesterol", "gluc",
                "smoke", "alco", "active"
            ]
        );
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut draft = DraftRecord::default();
        for field in Field::ALL {
            draft.set(field, "7".to_string());
            assert_eq!(draft.get(field), "7");
        }
    }

    #[test]
    fn test_sample_coerces_to_payload() {
        let payload = DraftRecord::sample().to_payload().unwrap();
        assert_eq!(payload.age, 50);
        assert_eq!(payload.gender, 2);
        assert_eq!(payload.height, 170.0);
        assert_eq!(payload.weight, 70.0);
        assert_eq!(payload.ap_hi, 120);
        assert_eq!(payload.ap_lo, 80);
        assert_eq!(payload.active, 1);
    }

    #[test]
    fn test_to_payload_reports_bad_field() {
        let mut draft = DraftRecord::sample();
        draft.weight = "heavy".to_string();
        let err = draft.to_payload().unwrap_err();
        assert!(err.contains("weight"));
    }

    #[test]
    fn test_payload_serializes_with_wire_keys() {
        let json = serde_json::to_value(DraftRecord::sample().to_payload().unwrap()).unwrap();
        assert_eq!(json["age"], 50);
        assert_eq!(json["ap_hi"], 120);
        assert_eq!(json["height"], 170.0);
        assert_eq!(json.as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_risk_labels() {
        let low = PredictionResult { prediction: 0, probability: None };
        assert_eq!(low.risk_label(), "Risiko Rendah");
        assert_eq!(low.probability_percent(), None);

        let high = PredictionResult { prediction: 1, probability: Some(0.8731) };
        assert_eq!(high.risk_label(), "Risiko Tinggi");
        assert_eq!(high.probability_percent().unwrap(), "87.31%");
    }
}
