//! Billing invoices listing

use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::schema::{FilterKind, FilterSchema};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Settlement state of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Partial,
    Overdue,
}

impl InvoiceStatus {
    /// Canonical lowercase token, as exact filters match it
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Partial => "partial",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

/// How an invoice was (or will be) settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Insurance,
    MobileMoney,
}

impl PaymentMethod {
    /// Canonical lowercase token, as exact filters match it
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Insurance => "insurance",
            PaymentMethod::MobileMoney => "mobile_money",
        }
    }
}

/// One billing invoice row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier for this record
    pub id: Uuid,

    /// Human-facing invoice number (e.g., "INV-2024-001")
    pub code: String,

    /// Name of the billed patient
    pub patient_name: String,

    /// Amount in raw currency units; the `amountRange` filter writes
    /// thousands, so `"25-50"` means 25 000 to 50 000
    pub amount: f64,

    /// Settlement state
    pub status: InvoiceStatus,

    /// Payment method
    pub payment_method: PaymentMethod,

    /// Issue date
    pub issued_on: NaiveDate,
}

impl Invoice {
    /// Mark this invoice settled in full
    pub fn mark_paid(&mut self, method: PaymentMethod) {
        self.status = InvoiceStatus::Paid;
        self.payment_method = method;
    }

    /// Filter schema for the invoices listing
    pub fn filter_schema() -> FilterSchema {
        FilterSchema::new("invoices")
            .with("searchTerm", FilterKind::search(["code", "patient_name"]))
            .with("status", FilterKind::exact("status"))
            .with("paymentMethod", FilterKind::exact("payment_method"))
            .with("dateRange", FilterKind::date_bucket("issued_on"))
            .with("amountRange", FilterKind::numeric_range("amount", 1000.0))
    }

    /// Fictional seed invoices for the billing page
    pub fn samples() -> Vec<Invoice> {
        let invoice = |code: &str, patient: &str, amount: f64, status, method, date| Invoice {
            id: Uuid::new_v4(),
            code: code.to_string(),
            patient_name: patient.to_string(),
            amount,
            status,
            payment_method: method,
            issued_on: date,
        };
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date");

        vec![
            invoice(
                "INV-2024-001",
                "Marie Kouam",
                35_500.0,
                InvoiceStatus::Pending,
                PaymentMethod::Cash,
                date(2024, 6, 12),
            ),
            invoice(
                "INV-2024-002",
                "Jean Mbarga",
                43_000.0,
                InvoiceStatus::Paid,
                PaymentMethod::MobileMoney,
                date(2024, 6, 10),
            ),
            invoice(
                "INV-2024-003",
                "Amina Njoya",
                65_000.0,
                InvoiceStatus::Partial,
                PaymentMethod::Insurance,
                date(2024, 5, 28),
            ),
            invoice(
                "INV-2024-004",
                "Paul Etoa",
                33_000.0,
                InvoiceStatus::Overdue,
                PaymentMethod::Cash,
                date(2024, 4, 3),
            ),
            invoice(
                "INV-2024-005",
                "Grace Fotso",
                77_000.0,
                InvoiceStatus::Paid,
                PaymentMethod::Card,
                date(2024, 6, 14),
            ),
        ]
    }
}

impl Record for Invoice {
    fn resource_name() -> &'static str {
        "invoices"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "code" => Some(FieldValue::String(self.code.clone())),
            "patient_name" => Some(FieldValue::String(self.patient_name.clone())),
            "amount" => Some(FieldValue::Float(self.amount)),
            "status" => Some(FieldValue::String(self.status.as_str().to_string())),
            "payment_method" => Some(FieldValue::String(self.payment_method.as_str().to_string())),
            "issued_on" => Some(FieldValue::Date(self.issued_on)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_cover_all_statuses() {
        let invoices = Invoice::samples();
        assert_eq!(invoices.len(), 5);

        let statuses: Vec<_> = invoices.iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            vec![
                InvoiceStatus::Pending,
                InvoiceStatus::Paid,
                InvoiceStatus::Partial,
                InvoiceStatus::Overdue,
                InvoiceStatus::Paid,
            ]
        );
    }

    #[test]
    fn test_field_value_exposes_canonical_tokens() {
        let invoice = &Invoice::samples()[0];
        assert_eq!(
            invoice.field_value("status"),
            Some(FieldValue::String("pending".to_string()))
        );
        assert_eq!(invoice.field_value("amount"), Some(FieldValue::Float(35_500.0)));
        assert_eq!(invoice.field_value("nonexistent"), None);
    }

    #[test]
    fn test_mark_paid() {
        let mut invoice = Invoice::samples().remove(0);
        invoice.mark_paid(PaymentMethod::Card);
        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert_eq!(invoice.payment_method, PaymentMethod::Card);
    }

    #[test]
    fn test_schema_keys() {
        let schema = Invoice::filter_schema();
        let keys: Vec<_> = schema.keys().collect();
        assert_eq!(
            keys,
            vec!["searchTerm", "status", "paymentMethod", "dateRange", "amountRange"]
        );
    }
}
