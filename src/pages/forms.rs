//! Submitted form bodies and the checks each page applies before a write.

use serde::Deserialize;

use crate::database::models::*;
use crate::error::AdminError;

pub const AGE_RANGE: (i64, i64) = (0, 120);
pub const BEDS_RANGE: (i64, i64) = (0, 20);
pub const VENTILATORS_RANGE: (i64, i64) = (0, 10);

fn check_range(field: &str, value: i64, (min, max): (i64, i64)) -> Result<i64, AdminError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(AdminError::out_of_range(field, value, min, max))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatientForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
    pub gender: Gender,
    pub department: Department,
    #[serde(default)]
    pub password: String,
}

impl PatientForm {
    pub fn into_record(self) -> Result<NewPatient, AdminError> {
        if self.name.is_empty() || self.password.is_empty() {
            return Err(AdminError::missing_fields());
        }
        let age = check_range("Age", self.age, AGE_RANGE)?;

        Ok(NewPatient::register(
            self.name,
            age,
            self.gender,
            self.department,
            &self.password,
        ))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EquipmentForm {
    pub equipment: Equipment,
    pub status: EquipmentStatus,
}

impl EquipmentForm {
    pub fn into_record(self) -> NewEquipmentStatus {
        NewEquipmentStatus::now(self.equipment, self.status)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReferralForm {
    pub hospital: Hospital,
    #[serde(default)]
    pub beds_available: i64,
    #[serde(default)]
    pub ventilators_available: i64,
}

impl ReferralForm {
    pub fn into_record(self) -> Result<NewReferral, AdminError> {
        let beds = check_range("Beds Available", self.beds_available, BEDS_RANGE)?;
        let ventilators = check_range(
            "Ventilators Available",
            self.ventilators_available,
            VENTILATORS_RANGE,
        )?;

        Ok(NewReferral::now(self.hospital, beds, ventilators))
    }
}
