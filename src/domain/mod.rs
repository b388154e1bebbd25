//! Concrete listing domains of the hospital management views
//!
//! Each module defines one record type, its canonical filter schema, and a
//! hardcoded fictional sample dataset standing in for a real clinical
//! database. All data here is fabricated.

pub mod invoice;
pub mod lab_order;
pub mod medication;
pub mod patient;

pub use invoice::{Invoice, InvoiceStatus, PaymentMethod};
pub use lab_order::{LabOrder, LabOrderStatus};
pub use medication::Medication;
pub use patient::{Gender, Patient, PatientStatus};
