use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::legacy_password_digest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Emergency,
    #[serde(rename = "ICU")]
    Icu,
    #[serde(rename = "OPD")]
    Opd,
}

impl Department {
    pub const ALL: [Department; 3] = [Department::Emergency, Department::Icu, Department::Opd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Emergency => "Emergency",
            Department::Icu => "ICU",
            Department::Opd => "OPD",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Equipment {
    Ventilator,
    Defibrillator,
    #[serde(rename = "Infusion Pump")]
    InfusionPump,
}

impl Equipment {
    pub const ALL: [Equipment; 3] = [
        Equipment::Ventilator,
        Equipment::Defibrillator,
        Equipment::InfusionPump,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Ventilator => "Ventilator",
            Equipment::Defibrillator => "Defibrillator",
            Equipment::InfusionPump => "Infusion Pump",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentStatus {
    Working,
    #[serde(rename = "Needs Maintenance")]
    NeedsMaintenance,
    Offline,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 3] = [
        EquipmentStatus::Working,
        EquipmentStatus::NeedsMaintenance,
        EquipmentStatus::Offline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Working => "Working",
            EquipmentStatus::NeedsMaintenance => "Needs Maintenance",
            EquipmentStatus::Offline => "Offline",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    pub fn is_working(&self) -> bool {
        matches!(self, EquipmentStatus::Working)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hospital {
    CityCare,
    Medipoint,
    LifeLine,
}

impl Hospital {
    pub const ALL: [Hospital; 3] = [Hospital::CityCare, Hospital::Medipoint, Hospital::LifeLine];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hospital::CityCare => "CityCare",
            Hospital::Medipoint => "Medipoint",
            Hospital::LifeLine => "LifeLine",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.as_str() == s)
    }
}

/// A stored patient intake row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: Gender,
    pub department: Department,
    pub hashed_password: String,
    pub timestamp: DateTime<Utc>,
}

/// A fully-populated patient row awaiting insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPatient {
    pub name: String,
    pub age: i64,
    pub gender: Gender,
    pub department: Department,
    pub hashed_password: String,
    pub timestamp: DateTime<Utc>,
}

impl NewPatient {
    /// Digest the password and stamp the row with the current time.
    pub fn register(
        name: impl Into<String>,
        age: i64,
        gender: Gender,
        department: Department,
        password: &str,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
            department,
            hashed_password: legacy_password_digest(password),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: i64,
    pub equipment_name: Equipment,
    pub status: EquipmentStatus,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEquipmentStatus {
    pub equipment_name: Equipment,
    pub status: EquipmentStatus,
    pub timestamp: DateTime<Utc>,
}

impl NewEquipmentStatus {
    pub fn now(equipment_name: Equipment, status: EquipmentStatus) -> Self {
        Self {
            equipment_name,
            status,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralRecord {
    pub id: i64,
    pub hospital_name: Hospital,
    pub beds_available: i64,
    pub ventilators_available: i64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewReferral {
    pub hospital_name: Hospital,
    pub beds_available: i64,
    pub ventilators_available: i64,
    pub timestamp: DateTime<Utc>,
}

impl NewReferral {
    pub fn now(hospital_name: Hospital, beds_available: i64, ventilators_available: i64) -> Self {
        Self {
            hospital_name,
            beds_available,
            ventilators_available,
            timestamp: Utc::now(),
        }
    }
}
