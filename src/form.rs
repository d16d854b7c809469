//! Form State Controller
//!
//! Drives the predict form through Editing -> Submitting -> Resolved.
//! The predict page wraps one of these in a signal and forwards events.

use std::collections::HashSet;

use crate::models::{DraftRecord, Field, PredictionResult, VitalsPayload};
use crate::validate::{validate_record, FieldErrors};

pub const FORM_INVALID_MSG: &str = "Mohon perbaiki error pada form sebelum melanjutkan";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormController {
    pub draft: DraftRecord,
    errors: FieldErrors,
    touched: HashSet<Field>,
    /// True between begin_submit and resolve.
    pub submitting: bool,
    pub result: Option<PredictionResult>,
    /// Form-level or request error message.
    pub error: Option<String>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field edit and revalidate the whole draft, so a sibling
    /// field can become invalid retroactively (ap_lo when ap_hi drops).
    pub fn edit(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
        self.touched.insert(field);
        self.errors = validate_record(&self.draft);
    }

    /// Error to display for a field. Untouched fields stay silent until a
    /// submit attempt marks everything touched.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(&field) {
            self.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Gate into Submitting. Returns the payload to send, or None when the
    /// draft is invalid (form-level error set) or a submit is already
    /// running. Prior result and error are cleared either way.
    pub fn begin_submit(&mut self) -> Option<VitalsPayload> {
        if self.submitting {
            return None;
        }
        self.error = None;
        self.result = None;
        self.errors = validate_record(&self.draft);
        self.touched.extend(Field::ALL);
        if !self.errors.is_empty() {
            self.error = Some(FORM_INVALID_MSG.to_string());
            return None;
        }
        match self.draft.to_payload() {
            Ok(payload) => {
                self.submitting = true;
                Some(payload)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }

    /// Leave Submitting with the prediction client's outcome.
    pub fn resolve(&mut self, outcome: Result<PredictionResult, String>) {
        self.submitting = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(message) => self.error = Some(message),
        }
    }
}
