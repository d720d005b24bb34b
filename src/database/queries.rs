use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::database::models::*;
use crate::error::AdminError;

pub struct Queries;

impl Queries {
    pub async fn insert_patient(
        pool: &SqlitePool,
        patient: &NewPatient,
    ) -> Result<PatientRecord, AdminError> {
        let result = sqlx::query(
            r#"
            INSERT INTO patients (name, age, gender, department, hashed_password, timestamp)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&patient.name)
        .bind(patient.age)
        .bind(patient.gender.as_str())
        .bind(patient.department.as_str())
        .bind(&patient.hashed_password)
        .bind(patient.timestamp.to_rfc3339())
        .execute(pool)
        .await
        .map_err(|e| AdminError::DatabaseError(format!("Failed to save patient: {}", e)))?;

        let id = result.last_insert_rowid();
        info!("Saved patient record {} ({})", id, patient.department.as_str());

        Ok(PatientRecord {
            id,
            name: patient.name.clone(),
            age: patient.age,
            gender: patient.gender,
            department: patient.department,
            hashed_password: patient.hashed_password.clone(),
            timestamp: patient.timestamp,
        })
    }

    pub async fn insert_equipment(
        pool: &SqlitePool,
        update: &NewEquipmentStatus,
    ) -> Result<EquipmentRecord, AdminError> {
        let result = sqlx::query(
            r#"
            INSERT INTO equipment (equipment_name, status, timestamp)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(update.equipment_name.as_str())
        .bind(update.status.as_str())
        .bind(update.timestamp.to_rfc3339())
        .execute(pool)
        .await
        .map_err(|e| AdminError::DatabaseError(format!("Failed to save equipment status: {}", e)))?;

        let id = result.last_insert_rowid();
        info!(
            "Saved equipment status {}: {} -> {}",
            id,
            update.equipment_name.as_str(),
            update.status.as_str()
        );

        Ok(EquipmentRecord {
            id,
            equipment_name: update.equipment_name,
            status: update.status,
            timestamp: update.timestamp,
        })
    }

    pub async fn insert_referral(
        pool: &SqlitePool,
        referral: &NewReferral,
    ) -> Result<ReferralRecord, AdminError> {
        let result = sqlx::query(
            r#"
            INSERT INTO referrals (hospital_name, beds_available, ventilators_available, timestamp)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(referral.hospital_name.as_str())
        .bind(referral.beds_available)
        .bind(referral.ventilators_available)
        .bind(referral.timestamp.to_rfc3339())
        .execute(pool)
        .await
        .map_err(|e| AdminError::DatabaseError(format!("Failed to save referral data: {}", e)))?;

        let id = result.last_insert_rowid();
        info!(
            "Saved referral capacity {} for {}",
            id,
            referral.hospital_name.as_str()
        );

        Ok(ReferralRecord {
            id,
            hospital_name: referral.hospital_name,
            beds_available: referral.beds_available,
            ventilators_available: referral.ventilators_available,
            timestamp: referral.timestamp,
        })
    }

    pub async fn list_patients(pool: &SqlitePool) -> Result<Vec<PatientRecord>, AdminError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, age, gender, department, hashed_password, timestamp
            FROM patients
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch patients: {}", e)))?;

        rows.iter().map(patient_from_row).collect()
    }

    pub async fn list_equipment(pool: &SqlitePool) -> Result<Vec<EquipmentRecord>, AdminError> {
        let rows = sqlx::query(
            r#"
            SELECT id, equipment_name, status, timestamp
            FROM equipment
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch equipment: {}", e)))?;

        rows.iter().map(equipment_from_row).collect()
    }

    pub async fn list_referrals(pool: &SqlitePool) -> Result<Vec<ReferralRecord>, AdminError> {
        let rows = sqlx::query(
            r#"
            SELECT id, hospital_name, beds_available, ventilators_available, timestamp
            FROM referrals
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch referrals: {}", e)))?;

        rows.iter().map(referral_from_row).collect()
    }

    /// Most recent row for each equipment name, ordered by name.
    pub async fn latest_equipment_status(
        pool: &SqlitePool,
    ) -> Result<Vec<EquipmentRecord>, AdminError> {
        let rows = sqlx::query(
            r#"
            SELECT e.id, e.equipment_name, e.status, e.timestamp
            FROM equipment e
            WHERE e.id = (
                SELECT MAX(latest.id) FROM equipment latest
                WHERE latest.equipment_name = e.equipment_name
            )
            ORDER BY e.equipment_name
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| AdminError::DatabaseError(format!("Failed to fetch equipment status: {}", e)))?;

        rows.iter().map(equipment_from_row).collect()
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, AdminError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| AdminError::DatabaseError(format!("Invalid timestamp {}: {}", raw, e)))
}

fn patient_from_row(row: &SqliteRow) -> Result<PatientRecord, AdminError> {
    let gender = row.try_get::<String, _>("gender")?;
    let department = row.try_get::<String, _>("department")?;

    Ok(PatientRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        age: row.try_get("age")?,
        gender: Gender::from_str(&gender).ok_or_else(|| AdminError::unknown_value("gender", &gender))?,
        department: Department::from_str(&department)
            .ok_or_else(|| AdminError::unknown_value("department", &department))?,
        hashed_password: row.try_get("hashed_password")?,
        timestamp: parse_timestamp(&row.try_get::<String, _>("timestamp")?)?,
    })
}

fn equipment_from_row(row: &SqliteRow) -> Result<EquipmentRecord, AdminError> {
    let name = row.try_get::<String, _>("equipment_name")?;
    let status = row.try_get::<String, _>("status")?;

    Ok(EquipmentRecord {
        id: row.try_get("id")?,
        equipment_name: Equipment::from_str(&name)
            .ok_or_else(|| AdminError::unknown_value("equipment", &name))?,
        status: EquipmentStatus::from_str(&status)
            .ok_or_else(|| AdminError::unknown_value("equipment status", &status))?,
        timestamp: parse_timestamp(&row.try_get::<String, _>("timestamp")?)?,
    })
}

fn referral_from_row(row: &SqliteRow) -> Result<ReferralRecord, AdminError> {
    let hospital = row.try_get::<String, _>("hospital_name")?;

    Ok(ReferralRecord {
        id: row.try_get("id")?,
        hospital_name: Hospital::from_str(&hospital)
            .ok_or_else(|| AdminError::unknown_value("hospital", &hospital))?,
        beds_available: row.try_get("beds_available")?,
        ventilators_available: row.try_get("ventilators_available")?,
        timestamp: parse_timestamp(&row.try_get::<String, _>("timestamp")?)?,
    })
}
