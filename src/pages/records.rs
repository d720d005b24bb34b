use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::Json,
    Form,
};
use serde::Serialize;
use tracing::info;

use super::forms::{EquipmentForm, PatientForm, ReferralForm};
use super::AppState;
use crate::database::models::*;
use crate::error::AdminError;

pub async fn register_patient(
    State((_config, database)): State<AppState>,
    form: Result<Form<PatientForm>, FormRejection>,
) -> Result<(StatusCode, Json<PatientRecord>), AdminError> {
    let Form(form) = form?;
    let patient = form.into_record()?;
    let record = database.insert_patient(&patient).await?;
    info!("Patient registration saved");
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_equipment_status(
    State((_config, database)): State<AppState>,
    form: Result<Form<EquipmentForm>, FormRejection>,
) -> Result<(StatusCode, Json<EquipmentRecord>), AdminError> {
    let Form(form) = form?;
    let record = database.insert_equipment(&form.into_record()).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn record_referral(
    State((_config, database)): State<AppState>,
    form: Result<Form<ReferralForm>, FormRejection>,
) -> Result<(StatusCode, Json<ReferralRecord>), AdminError> {
    let Form(form) = form?;
    let referral = form.into_record()?;
    let record = database.insert_referral(&referral).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_patients(
    State((_config, database)): State<AppState>,
) -> Result<Json<Vec<PatientRecord>>, AdminError> {
    Ok(Json(database.list_patients().await?))
}

pub async fn list_equipment(
    State((_config, database)): State<AppState>,
) -> Result<Json<Vec<EquipmentRecord>>, AdminError> {
    Ok(Json(database.list_equipment().await?))
}

pub async fn list_referrals(
    State((_config, database)): State<AppState>,
) -> Result<Json<Vec<ReferralRecord>>, AdminError> {
    Ok(Json(database.list_referrals().await?))
}

/// One section of the stored records page.
#[derive(Debug, Serialize)]
pub struct RecordSection<T> {
    pub rows: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<String>,
}

impl<T> RecordSection<T> {
    fn new(rows: Vec<T>, kind: &str) -> Self {
        let empty = rows
            .is_empty()
            .then(|| format!("No {} records available yet.", kind));
        Self { rows, empty }
    }
}

#[derive(Debug, Serialize)]
pub struct StoredRecords {
    pub patients: RecordSection<PatientRecord>,
    pub equipment: RecordSection<EquipmentRecord>,
    pub referrals: RecordSection<ReferralRecord>,
}

pub async fn view_records(
    State((_config, database)): State<AppState>,
) -> Result<Json<StoredRecords>, AdminError> {
    Ok(Json(StoredRecords {
        patients: RecordSection::new(database.list_patients().await?, "patient"),
        equipment: RecordSection::new(database.list_equipment().await?, "equipment"),
        referrals: RecordSection::new(database.list_referrals().await?, "referral"),
    }))
}
