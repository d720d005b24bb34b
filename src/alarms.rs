//! Equipment alarm check
//!
//! A fresh snapshot of the equipment table on every call: each equipment's
//! latest status row is inspected and anything not `Working` is reported.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::database::models::{Equipment, EquipmentRecord, EquipmentStatus};
use crate::database::Database;
use crate::error::AdminError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    pub equipment_name: Equipment,
    pub status: EquipmentStatus,
    pub timestamp: DateTime<Utc>,
}

impl From<&EquipmentRecord> for Alarm {
    fn from(record: &EquipmentRecord) -> Self {
        Alarm {
            equipment_name: record.equipment_name,
            status: record.status,
            timestamp: record.timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "alarms", rename_all = "snake_case")]
pub enum AlarmReport {
    AllClear,
    Attention(Vec<Alarm>),
}

impl AlarmReport {
    pub fn alarms(&self) -> &[Alarm] {
        match self {
            AlarmReport::AllClear => &[],
            AlarmReport::Attention(alarms) => alarms,
        }
    }

    pub fn is_all_clear(&self) -> bool {
        matches!(self, AlarmReport::AllClear)
    }

    pub fn message(&self) -> &'static str {
        match self {
            AlarmReport::AllClear => "All equipment is in working condition.",
            AlarmReport::Attention(_) => "Attention required: Equipment issues detected!",
        }
    }
}

/// Build a report from each equipment's latest status row.
pub fn evaluate(latest: &[EquipmentRecord]) -> AlarmReport {
    let alarms: Vec<Alarm> = latest
        .iter()
        .filter(|record| !record.status.is_working())
        .map(Alarm::from)
        .collect();

    if alarms.is_empty() {
        AlarmReport::AllClear
    } else {
        AlarmReport::Attention(alarms)
    }
}

pub async fn check_alarms(database: &Database) -> Result<AlarmReport, AdminError> {
    let latest = database.latest_equipment_status().await?;
    let report = evaluate(&latest);

    match &report {
        AlarmReport::AllClear => info!("Alarm check: all equipment working"),
        AlarmReport::Attention(alarms) => {
            for alarm in alarms {
                warn!(
                    "Alarm: {} is {} since {}",
                    alarm.equipment_name.as_str(),
                    alarm.status.as_str(),
                    alarm.timestamp
                );
            }
        }
    }

    Ok(report)
}
