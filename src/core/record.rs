//! Record trait defining the core abstraction for all listing entities

use crate::core::field::FieldValue;
use uuid::Uuid;

/// Base trait for every entity that can appear in a listing view.
///
/// A record is a flat domain object (patient, invoice, lab order,
/// medication) that exposes:
/// - id: Unique identifier
/// - resource_name: The plural listing name (e.g., "invoices")
/// - field_value: Dynamic field access by name
///
/// The pipeline never touches a record's concrete fields directly; the
/// predicate compiler and the sorter both go through [`Record::field_value`],
/// which lets one compiled filter schema drive any domain.
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name of the listing (e.g., "patients", "invoices")
    fn resource_name() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// Get the value of a specific field by name.
    ///
    /// Returns `None` for field names the record does not have. Predicates
    /// treat a missing field as a non-match; the sorter places such records
    /// after all records that do carry the field.
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}
