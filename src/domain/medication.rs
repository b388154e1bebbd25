//! Pharmacy inventory listing

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::schema::{FilterKind, FilterSchema};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One pharmacy stock row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    /// Unique identifier for this record
    pub id: Uuid,

    /// Human-facing stock code (e.g., "MED-001")
    pub code: String,

    /// Commercial name
    pub name: String,

    /// Category token (e.g., "antibiotic")
    pub category: String,

    /// Free-form supplier name
    pub supplier: String,

    /// Units currently on the shelf
    pub stock: i64,

    /// Price per unit in raw currency units
    pub unit_price: f64,

    /// Whether dispensing requires a prescription
    pub prescription_required: bool,

    /// Whether the product needs cold-chain storage
    pub refrigerated: bool,

    /// Expiry date of the current batch
    pub expires_on: NaiveDate,
}

impl Medication {
    /// Adjust the stock level by a signed delta, never below zero
    pub fn adjust_stock(&mut self, delta: i64) {
        self.stock = (self.stock + delta).max(0);
    }

    /// Filter schema for the pharmacy listing
    pub fn filter_schema() -> FilterSchema {
        FilterSchema::new("medications")
            .with("searchTerm", FilterKind::search(["name", "code"]))
            .with("category", FilterKind::exact("category"))
            .with("supplier", FilterKind::partial("supplier"))
            .with("prescriptionRequired", FilterKind::flag("prescription_required"))
            .with("refrigerated", FilterKind::flag("refrigerated"))
            .with("stockRange", FilterKind::numeric_range("stock", 1.0))
    }

    /// Fictional seed stock for the pharmacy page
    pub fn samples() -> Vec<Medication> {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");
        let medication = |code: &str,
                          name: &str,
                          category: &str,
                          supplier: &str,
                          stock,
                          price,
                          prescription,
                          refrigerated,
                          expires| Medication {
            id: Uuid::new_v4(),
            code: code.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            supplier: supplier.to_string(),
            stock,
            unit_price: price,
            prescription_required: prescription,
            refrigerated,
            expires_on: expires,
        };

        vec![
            medication(
                "MED-001",
                "Amoxicillin 500mg",
                "antibiotic",
                "Laborex Cameroun",
                240,
                1_500.0,
                true,
                false,
                date(2025, 8, 31),
            ),
            medication(
                "MED-002",
                "Paracetamol 1g",
                "analgesic",
                "Ubipharm",
                520,
                350.0,
                false,
                false,
                date(2026, 1, 15),
            ),
            medication(
                "MED-003",
                "Insulin glargine",
                "antidiabetic",
                "Laborex Cameroun",
                36,
                9_800.0,
                true,
                true,
                date(2024, 12, 1),
            ),
            medication(
                "MED-004",
                "Artemether-lumefantrine",
                "antimalarial",
                "Pharmacam Distribution",
                180,
                2_200.0,
                true,
                false,
                date(2025, 4, 20),
            ),
            medication(
                "MED-005",
                "Oral rehydration salts",
                "rehydration",
                "Ubipharm",
                75,
                500.0,
                false,
                false,
                date(2026, 6, 30),
            ),
        ]
    }
}

impl Record for Medication {
    fn resource_name() -> &'static str {
        "medications"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "code" => Some(FieldValue::String(self.code.clone())),
            "name" => Some(FieldValue::String(self.name.clone())),
            "category" => Some(FieldValue::String(self.category.clone())),
            "supplier" => Some(FieldValue::String(self.supplier.clone())),
            "stock" => Some(FieldValue::Integer(self.stock)),
            "unit_price" => Some(FieldValue::Float(self.unit_price)),
            "prescription_required" => Some(FieldValue::Boolean(self.prescription_required)),
            "refrigerated" => Some(FieldValue::Boolean(self.refrigerated)),
            "expires_on" => Some(FieldValue::Date(self.expires_on)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_seeded() {
        let stock = Medication::samples();
        assert_eq!(stock.len(), 5);
        assert!(stock.iter().any(|m| m.refrigerated));
    }

    #[test]
    fn test_adjust_stock_floors_at_zero() {
        let mut medication = Medication::samples().remove(2);
        assert_eq!(medication.stock, 36);

        medication.adjust_stock(-10);
        assert_eq!(medication.stock, 26);

        medication.adjust_stock(-100);
        assert_eq!(medication.stock, 0);
    }

    #[test]
    fn test_flags_expose_booleans() {
        let medication = &Medication::samples()[2];
        assert_eq!(
            medication.field_value("refrigerated"),
            Some(FieldValue::Boolean(true))
        );
        assert_eq!(
            medication.field_value("prescription_required"),
            Some(FieldValue::Boolean(true))
        );
    }

    #[test]
    fn test_schema_uses_flags_and_stock_range() {
        let schema = Medication::filter_schema();
        assert_eq!(
            schema.get("refrigerated"),
            Some(&FilterKind::flag("refrigerated"))
        );
        assert_eq!(
            schema.get("stockRange"),
            Some(&FilterKind::numeric_range("stock", 1.0))
        );
    }
}
