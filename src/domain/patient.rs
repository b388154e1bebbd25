//! Patient records listing

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::schema::{FilterKind, FilterSchema};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Administrative gender on file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Canonical lowercase token, as exact filters match it
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

/// Whether the patient file is currently in use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Active,
    Inactive,
}

impl PatientStatus {
    /// Canonical lowercase token, as exact filters match it
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Active => "active",
            PatientStatus::Inactive => "inactive",
        }
    }
}

/// One patient file row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    /// Unique identifier for this record
    pub id: Uuid,

    /// Human-facing file number (e.g., "PAT-001")
    pub code: String,

    /// Full name
    pub name: String,

    /// Age in years
    pub age: u32,

    /// Administrative gender
    pub gender: Gender,

    /// Blood type token (e.g., "O+", "AB-")
    pub blood_type: String,

    /// Contact phone number
    pub phone: String,

    /// Free-form insurance provider name
    pub insurance_provider: String,

    /// Free-form name of the assigned doctor
    pub assigned_doctor: String,

    /// Registration date
    pub registered_on: NaiveDate,

    /// Most recent visit
    pub last_visit: NaiveDate,

    /// File status
    pub status: PatientStatus,
}

impl Patient {
    /// Filter schema for the patients listing
    pub fn filter_schema() -> FilterSchema {
        FilterSchema::new("patients")
            .with("searchTerm", FilterKind::search(["name", "code", "phone"]))
            .with("status", FilterKind::exact("status"))
            .with("gender", FilterKind::exact("gender"))
            .with("bloodType", FilterKind::exact("blood_type"))
            .with("insuranceProvider", FilterKind::partial("insurance_provider"))
            .with("assignedDoctor", FilterKind::partial("assigned_doctor"))
            .with("lastVisitRange", FilterKind::date_bucket("last_visit"))
            .with("ageRange", FilterKind::numeric_range("age", 1.0))
    }

    /// Fictional seed patients for the records page
    pub fn samples() -> Vec<Patient> {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");
        let patient = |code: &str,
                       name: &str,
                       age,
                       gender,
                       blood: &str,
                       phone: &str,
                       insurance: &str,
                       doctor: &str,
                       registered,
                       visited,
                       status| Patient {
            id: Uuid::new_v4(),
            code: code.to_string(),
            name: name.to_string(),
            age,
            gender,
            blood_type: blood.to_string(),
            phone: phone.to_string(),
            insurance_provider: insurance.to_string(),
            assigned_doctor: doctor.to_string(),
            registered_on: registered,
            last_visit: visited,
            status,
        };

        vec![
            patient(
                "PAT-001",
                "Marie Kouam",
                34,
                Gender::Female,
                "O+",
                "+237650112233",
                "CNPS Sant\u{e9}",
                "Dr. Ngono Ateba",
                date(2022, 3, 14),
                date(2024, 6, 12),
                PatientStatus::Active,
            ),
            patient(
                "PAT-002",
                "Jean Mbarga",
                52,
                Gender::Male,
                "A-",
                "+237677445566",
                "Allianz Care",
                "Dr. Ngono Ateba",
                date(2021, 11, 2),
                date(2024, 6, 8),
                PatientStatus::Active,
            ),
            patient(
                "PAT-003",
                "Amina Njoya",
                27,
                Gender::Female,
                "B+",
                "+237690778899",
                "Saham Assurance",
                "Dr. Bello Mounchili",
                date(2023, 7, 21),
                date(2024, 5, 30),
                PatientStatus::Active,
            ),
            patient(
                "PAT-004",
                "Paul Etoa",
                61,
                Gender::Male,
                "AB+",
                "+237655001122",
                "CNPS Sant\u{e9}",
                "Dr. Bello Mounchili",
                date(2020, 1, 9),
                date(2024, 2, 17),
                PatientStatus::Inactive,
            ),
            patient(
                "PAT-005",
                "Grace Fotso",
                45,
                Gender::Female,
                "O-",
                "+237698334455",
                "Activa Assurances",
                "Dr. Ngono Ateba",
                date(2023, 2, 28),
                date(2024, 6, 15),
                PatientStatus::Active,
            ),
        ]
    }
}

impl Record for Patient {
    fn resource_name() -> &'static str {
        "patients"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "code" => Some(FieldValue::String(self.code.clone())),
            "name" => Some(FieldValue::String(self.name.clone())),
            "age" => Some(FieldValue::Integer(self.age as i64)),
            "gender" => Some(FieldValue::String(self.gender.as_str().to_string())),
            "blood_type" => Some(FieldValue::String(self.blood_type.clone())),
            "phone" => Some(FieldValue::String(self.phone.clone())),
            "insurance_provider" => Some(FieldValue::String(self.insurance_provider.clone())),
            "assigned_doctor" => Some(FieldValue::String(self.assigned_doctor.clone())),
            "registered_on" => Some(FieldValue::Date(self.registered_on)),
            "last_visit" => Some(FieldValue::Date(self.last_visit)),
            "status" => Some(FieldValue::String(self.status.as_str().to_string())),
            _ => None,
        }
    }
}
