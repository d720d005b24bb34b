//! Placeholder patient forecast.
//!
//! These figures are fixed and come from no model or data source. They are
//! served with `placeholder: true` so no client mistakes them for a forecast.

use serde::{Deserialize, Serialize};

use crate::database::models::Department;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentForecast {
    pub department: Department,
    pub patients: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientForecast {
    pub placeholder: bool,
    pub description: String,
    pub departments: Vec<DepartmentForecast>,
}

pub fn placeholder_forecast() -> PatientForecast {
    let departments = [
        (Department::Emergency, 10),
        (Department::Icu, 5),
        (Department::Opd, 8),
    ]
    .into_iter()
    .map(|(department, patients)| DepartmentForecast {
        department,
        patients,
    })
    .collect();

    PatientForecast {
        placeholder: true,
        description: "Predicted number of patients for the day".to_string(),
        departments,
    }
}
