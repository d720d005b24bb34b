use axum::{extract::State, response::Json};
use serde_json::Value;

use super::AppState;
use crate::alarms;
use crate::error::AdminError;
use crate::predictions::{self, PatientForecast};

pub async fn alarm_system(
    State((_config, database)): State<AppState>,
) -> Result<Json<Value>, AdminError> {
    let report = alarms::check_alarms(&database).await?;
    let mut body = serde_json::to_value(&report)
        .map_err(|e| AdminError::DatabaseError(format!("Failed to serialize alarms: {}", e)))?;
    body["message"] = Value::from(report.message());
    Ok(Json(body))
}

pub async fn predicted_patients() -> Json<PatientForecast> {
    Json(predictions::placeholder_forecast())
}
