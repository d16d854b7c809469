//! Prediction API Client
//!
//! One HTTP boundary: GET/POST /api/predict. Responses are parsed and
//! tagged into closed variants before they reach any UI state.

use gloo_net::http::Request;
use serde::Deserialize;

use crate::models::{PredictionResult, VitalsPayload};

pub const API_URL: &str = "/api/predict";

pub const GENERIC_PREDICT_ERROR: &str = "Prediksi gagal. Silakan coba lagi.";
const MALFORMED_RESPONSE: &str = "Respons API tidak valid";

/// Health probe outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthCheck {
    /// 2xx; body pretty-printed when it is JSON.
    Online { body: String },
    /// Endpoint reachable but returned a non-success status.
    Degraded { status: u16, body: String },
    /// Transport failure, endpoint never answered.
    Unreachable { message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Single POST, no retries, no timeout beyond the transport's own.
pub async fn predict(payload: &VitalsPayload) -> Result<PredictionResult, String> {
    let response = Request::post(API_URL)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let ok = response.ok();
    let body = response.text().await.map_err(|e| e.to_string())?;
    if ok {
        parse_prediction(&body)
    } else {
        Err(error_message(&body))
    }
}

/// GET probe of the same endpoint.
pub async fn check_health() -> HealthCheck {
    let response = match Request::get(API_URL).send().await {
        Ok(response) => response,
        Err(e) => {
            return HealthCheck::Unreachable {
                message: e.to_string(),
            }
        }
    };
    let ok = response.ok();
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if ok {
        HealthCheck::Online {
            body: pretty_json(&body),
        }
    } else {
        HealthCheck::Degraded { status, body }
    }
}

/// Parse a 2xx body, insisting on a binary prediction and a fractional
/// probability.
fn parse_prediction(body: &str) -> Result<PredictionResult, String> {
    let result: PredictionResult =
        serde_json::from_str(body).map_err(|_| MALFORMED_RESPONSE.to_string())?;
    if result.prediction > 1 {
        return Err(MALFORMED_RESPONSE.to_string());
    }
    if let Some(p) = result.probability {
        if !(0.0..=1.0).contains(&p) {
            return Err(MALFORMED_RESPONSE.to_string());
        }
    }
    Ok(result)
}

/// Error text for a non-2xx response: the body's `error` field verbatim
/// when present, else a generic message.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| GENERIC_PREDICT_ERROR.to_string())
}

/// Pretty-print a JSON body for the diagnostics log; non-JSON text passes
/// through untouched.
pub fn pretty_json(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .and_then(|v| serde_json::to_string_pretty(&v))
        .unwrap_or_else(|_| body.to_string())
}
