//! HTTP surface: one route per dashboard page.

pub mod backup;
pub mod forms;
pub mod imaging;
pub mod monitoring;
pub mod records;

use axum::{
    extract::DefaultBodyLimit,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::database::Database;

pub type AppState = (AppConfig, Database);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Page {
    PatientRegistration,
    EquipmentStatus,
    ReferralDecision,
    ViewRecords,
    PredictedPatients,
    AlarmSystem,
    ImageProcessing,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::PatientRegistration,
        Page::EquipmentStatus,
        Page::ReferralDecision,
        Page::ViewRecords,
        Page::PredictedPatients,
        Page::AlarmSystem,
        Page::ImageProcessing,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::PatientRegistration => "Patient Registration",
            Page::EquipmentStatus => "Equipment Status",
            Page::ReferralDecision => "Referral Decision",
            Page::ViewRecords => "View Records",
            Page::PredictedPatients => "Predicted Patients",
            Page::AlarmSystem => "Alarm System",
            Page::ImageProcessing => "Image Processing",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::PatientRegistration => "/patients",
            Page::EquipmentStatus => "/equipment",
            Page::ReferralDecision => "/referrals",
            Page::ViewRecords => "/records",
            Page::PredictedPatients => "/predictions",
            Page::AlarmSystem => "/alarms",
            Page::ImageProcessing => "/images/process",
        }
    }
}

pub fn router(config: AppConfig, database: Database) -> Router {
    let upload_limit = config.max_upload_bytes;

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route(
            "/patients",
            post(records::register_patient).get(records::list_patients),
        )
        .route(
            "/equipment",
            post(records::update_equipment_status).get(records::list_equipment),
        )
        .route(
            "/referrals",
            post(records::record_referral).get(records::list_referrals),
        )
        .route("/records", get(records::view_records))
        .route("/predictions", get(monitoring::predicted_patients))
        .route("/alarms", get(monitoring::alarm_system))
        .route(
            "/images/process",
            post(imaging::process_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/backup", get(backup::download_backup))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .into_inner(),
        )
        .with_state((config, database))
}

async fn index() -> Json<serde_json::Value> {
    let pages: Vec<_> = Page::ALL
        .iter()
        .map(|page| serde_json::json!({ "title": page.title(), "path": page.path() }))
        .collect();

    Json(serde_json::json!({
        "title": "Hospital Management",
        "pages": pages,
        "backup": "/backup"
    }))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "hospital-admin",
        "timestamp": chrono::Utc::now()
    }))
}
