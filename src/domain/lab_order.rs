//! Laboratory orders listing

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::schema::{FilterKind, FilterSchema};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Processing state of a lab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabOrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl LabOrderStatus {
    /// Canonical lowercase token, as exact filters match it
    pub fn as_str(&self) -> &'static str {
        match self {
            LabOrderStatus::Pending => "pending",
            LabOrderStatus::InProgress => "in_progress",
            LabOrderStatus::Completed => "completed",
            LabOrderStatus::Cancelled => "cancelled",
        }
    }
}

/// One laboratory order row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabOrder {
    /// Unique identifier for this record
    pub id: Uuid,

    /// Human-facing order number (e.g., "LAB-2024-001")
    pub code: String,

    /// Name of the patient the order is for
    pub patient_name: String,

    /// Test being ordered
    pub test_name: String,

    /// Test category token (e.g., "hematology")
    pub category: String,

    /// Hospital department token that placed the order
    pub department: String,

    /// Processing state
    pub status: LabOrderStatus,

    /// Free-form name of the ordering doctor
    pub ordered_by: String,

    /// Order date
    pub ordered_on: NaiveDate,
}

impl LabOrder {
    /// Advance the order to a new processing state
    pub fn set_status(&mut self, status: LabOrderStatus) {
        self.status = status;
    }

    /// Filter schema for the lab orders listing
    pub fn filter_schema() -> FilterSchema {
        FilterSchema::new("lab_orders")
            .with(
                "searchTerm",
                FilterKind::search(["code", "patient_name", "test_name"]),
            )
            .with("status", FilterKind::exact("status"))
            .with("category", FilterKind::exact("category"))
            .with("department", FilterKind::exact("department"))
            .with("orderedBy", FilterKind::partial("ordered_by"))
            .with("dateRange", FilterKind::date_bucket("ordered_on"))
    }

    /// Fictional seed orders for the laboratory page
    pub fn samples() -> Vec<LabOrder> {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");
        let order = |code: &str,
                     patient: &str,
                     test: &str,
                     category: &str,
                     department: &str,
                     status,
                     doctor: &str,
                     ordered| LabOrder {
            id: Uuid::new_v4(),
            code: code.to_string(),
            patient_name: patient.to_string(),
            test_name: test.to_string(),
            category: category.to_string(),
            department: department.to_string(),
            status,
            ordered_by: doctor.to_string(),
            ordered_on: ordered,
        };

        vec![
            order(
                "LAB-2024-001",
                "Marie Kouam",
                "Complete blood count",
                "hematology",
                "general_medicine",
                LabOrderStatus::Completed,
                "Dr. Ngono Ateba",
                date(2024, 6, 10),
            ),
            order(
                "LAB-2024-002",
                "Jean Mbarga",
                "Fasting glucose",
                "biochemistry",
                "cardiology",
                LabOrderStatus::InProgress,
                "Dr. Bello Mounchili",
                date(2024, 6, 13),
            ),
            order(
                "LAB-2024-003",
                "Amina Njoya",
                "Malaria smear",
                "parasitology",
                "general_medicine",
                LabOrderStatus::Pending,
                "Dr. Ngono Ateba",
                date(2024, 6, 14),
            ),
            order(
                "LAB-2024-004",
                "Paul Etoa",
                "Lipid panel",
                "biochemistry",
                "cardiology",
                LabOrderStatus::Cancelled,
                "Dr. Bello Mounchili",
                date(2024, 5, 22),
            ),
            order(
                "LAB-2024-005",
                "Grace Fotso",
                "Urinalysis",
                "microbiology",
                "gynecology",
                LabOrderStatus::Pending,
                "Dr. Ngono Ateba",
                date(2024, 6, 15),
            ),
        ]
    }
}

impl Record for LabOrder {
    fn resource_name() -> &'static str {
        "lab_orders"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "code" => Some(FieldValue::String(self.code.clone())),
            "patient_name" => Some(FieldValue::String(self.patient_name.clone())),
            "test_name" => Some(FieldValue::String(self.test_name.clone())),
            "category" => Some(FieldValue::String(self.category.clone())),
            "department" => Some(FieldValue::String(self.department.clone())),
            "status" => Some(FieldValue::String(self.status.as_str().to_string())),
            "ordered_by" => Some(FieldValue::String(self.ordered_by.clone())),
            "ordered_on" => Some(FieldValue::Date(self.ordered_on)),
            _ => None,
        }
    }
}
