//! Filter criteria state for one listing view

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Current filter state for a single listing view.
///
/// A flat mapping of filter-key to filter-value where the empty string means
/// "no constraint". Every key of the view's filter schema is always present,
/// defaulted to `""`, so the presentation layer can bind inputs without
/// null-checking. Keys iterate in insertion order.
///
/// All operations are total: any string is accepted for any key, and keys the
/// compiler does not recognize are simply ignored downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Criteria {
    values: IndexMap<String, String>,
}

impl Criteria {
    /// Create an empty criteria record with no keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a criteria record with every given key defaulted to `""`
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = keys.into_iter().map(|k| (k.into(), String::new())).collect();
        Self { values }
    }

    /// Set the value for a filter key.
    ///
    /// Setting `""` clears the constraint for that key. Unknown keys are
    /// stored as-is; the compiler skips anything the schema does not name.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get the current value for a key, `""` when absent
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Reset every key to its empty default in one operation
    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    /// True when no key carries a constraint
    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    /// Iterate over the active (non-empty) entries in key order
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_keys_defaults_to_empty() {
        let criteria = Criteria::with_keys(["searchTerm", "status"]);
        assert_eq!(criteria.get("searchTerm"), "");
        assert_eq!(criteria.get("status"), "");
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut criteria = Criteria::with_keys(["status"]);
        criteria.set("status", "paid");
        assert_eq!(criteria.get("status"), "paid");
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_get_absent_key_is_empty() {
        let criteria = Criteria::new();
        assert_eq!(criteria.get("anything"), "");
    }

    #[test]
    fn test_clear_resets_all_keys() {
        let mut criteria = Criteria::with_keys(["searchTerm", "status"]);
        criteria.set("searchTerm", "marie");
        criteria.set("status", "active");

        criteria.clear();

        assert!(criteria.is_empty());
        // Keys survive the reset so inputs stay bound.
        assert_eq!(criteria.get("searchTerm"), "");
    }

    #[test]
    fn test_active_skips_empty_entries() {
        let mut criteria = Criteria::with_keys(["searchTerm", "status", "gender"]);
        criteria.set("status", "active");
        criteria.set("gender", "female");

        let active: Vec<_> = criteria.active().collect();
        assert_eq!(active, vec![("status", "active"), ("gender", "female")]);
    }

    #[test]
    fn test_setting_empty_string_clears_constraint() {
        let mut criteria = Criteria::with_keys(["status"]);
        criteria.set("status", "paid");
        criteria.set("status", "");
        assert!(criteria.is_empty());
    }
}
