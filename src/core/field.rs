//! Field value types and comparison

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// A polymorphic field value that can hold different types
///
/// Records expose their fields dynamically through this enum so that the
/// predicate compiler and the sorter can work against any listing domain
/// without knowing its concrete shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string slice if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a boolean if possible
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a calendar date, truncating datetimes
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::DateTime(dt) => Some(dt.date_naive()),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Compare two values for sorting purposes.
    ///
    /// Strings compare case-insensitively, numbers numerically (integers and
    /// floats mix), dates chronologically (a plain date counts as midnight
    /// UTC). Returns `None` when the two values have no meaningful order,
    /// which the sorter treats as a tie so that stability decides.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::String(a), FieldValue::String(b)) => {
                Some(a.to_lowercase().cmp(&b.to_lowercase()))
            }
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => Some(a.cmp(b)),
            (FieldValue::Uuid(a), FieldValue::Uuid(b)) => Some(a.cmp(b)),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => Some(a.cmp(b)),
            (FieldValue::Date(a), FieldValue::DateTime(b)) => {
                let a = a.and_hms_opt(0, 0, 0)?.and_utc();
                Some(a.cmp(b))
            }
            (FieldValue::DateTime(a), FieldValue::Date(b)) => {
                let b = b.and_hms_opt(0, 0, 0)?.and_utc();
                Some(a.cmp(&b))
            }
            _ => {
                let (a, b) = (self.as_number()?, other.as_number()?);
                a.partial_cmp(&b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_str(), Some("test"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_number_widening() {
        assert_eq!(FieldValue::Integer(42).as_number(), Some(42.0));
        assert_eq!(FieldValue::Float(2.5).as_number(), Some(2.5));
        assert_eq!(FieldValue::String("42".to_string()).as_number(), None);
    }

    #[test]
    fn test_field_value_date_truncation() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let dt = date.and_hms_opt(14, 30, 0).unwrap().and_utc();

        assert_eq!(FieldValue::Date(date).as_date(), Some(date));
        assert_eq!(FieldValue::DateTime(dt).as_date(), Some(date));
        assert_eq!(FieldValue::Integer(1).as_date(), None);
    }

    #[test]
    fn test_field_value_null() {
        let value = FieldValue::Null;
        assert!(value.is_null());
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_compare_strings_case_insensitive() {
        let a = FieldValue::String("alice".to_string());
        let b = FieldValue::String("BOB".to_string());
        assert_eq!(a.compare(&b), Some(Ordering::Less));

        let c = FieldValue::String("ALICE".to_string());
        assert_eq!(a.compare(&c), Some(Ordering::Equal));
    }

    #[test]
    fn test_compare_mixed_numbers() {
        let a = FieldValue::Integer(3);
        let b = FieldValue::Float(3.5);
        assert_eq!(a.compare(&b), Some(Ordering::Less));
        assert_eq!(b.compare(&a), Some(Ordering::Greater));
    }

    #[test]
    fn test_compare_date_against_datetime() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let later = date.and_hms_opt(8, 0, 0).unwrap().and_utc();
        assert_eq!(
            FieldValue::Date(date).compare(&FieldValue::DateTime(later)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_compare_incomparable_types() {
        let a = FieldValue::String("abc".to_string());
        let b = FieldValue::Integer(5);
        assert_eq!(a.compare(&b), None);
        assert_eq!(FieldValue::Null.compare(&FieldValue::Null), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = FieldValue::String("hello".to_string());
        let json = serde_json::to_string(&original).expect("serialize should succeed");
        let restored: FieldValue =
            serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(original, restored);
    }
}
