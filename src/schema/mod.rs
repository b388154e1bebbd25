//! Filter schema: the per-domain field-specification table
//!
//! Each listing view declares, once, which filter keys it supports and which
//! predicate kind each key compiles to. The same schema value drives criteria
//! defaulting, predicate compilation, and (optionally) YAML-based
//! configuration of listings.

use crate::core::criteria::Criteria;
use crate::core::error::SchemaError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

fn default_scale() -> f64 {
    1.0
}

/// The predicate kind a filter key compiles to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterKind {
    /// Case-insensitive substring match over several text fields at once;
    /// the record matches when any of the fields contains the term
    Search { fields: Vec<String> },

    /// Case-sensitive equality against a canonical lowercase token field
    /// (status, category, department, ...)
    Exact { field: String },

    /// Case-insensitive substring match against a free-form display string
    /// (insurance provider, supplier, doctor name, ...)
    Partial { field: String },

    /// Named date window relative to "now" applied to one date field;
    /// accepted values are `today | week | month | 3months | 6months | year`
    DateBucket { field: String },

    /// `"min-max"` / `"min+"` shorthand over a numeric field. `scale`
    /// multiplies both bounds before comparing, so currency listings can
    /// write `"25-50"` for 25 000 to 50 000
    NumericRange {
        field: String,
        #[serde(default = "default_scale")]
        scale: f64,
    },

    /// Tri-state boolean flag: `""` matches all, `"true"`/`"false"` match
    /// exactly
    Flag { field: String },
}

impl FilterKind {
    /// Convenience constructor for [`FilterKind::Search`]
    pub fn search<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterKind::Search {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Convenience constructor for [`FilterKind::Exact`]
    pub fn exact(field: impl Into<String>) -> Self {
        FilterKind::Exact { field: field.into() }
    }

    /// Convenience constructor for [`FilterKind::Partial`]
    pub fn partial(field: impl Into<String>) -> Self {
        FilterKind::Partial { field: field.into() }
    }

    /// Convenience constructor for [`FilterKind::DateBucket`]
    pub fn date_bucket(field: impl Into<String>) -> Self {
        FilterKind::DateBucket { field: field.into() }
    }

    /// Convenience constructor for [`FilterKind::NumericRange`]
    pub fn numeric_range(field: impl Into<String>, scale: f64) -> Self {
        FilterKind::NumericRange {
            field: field.into(),
            scale,
        }
    }

    /// Convenience constructor for [`FilterKind::Flag`]
    pub fn flag(field: impl Into<String>) -> Self {
        FilterKind::Flag { field: field.into() }
    }
}

/// Complete filter specification for one listing view
///
/// Maps every supported filter key to its [`FilterKind`]. Keys keep their
/// declaration order, which is also the order criteria records iterate in.
///
/// # Example
/// ```
/// use medilist::schema::{FilterKind, FilterSchema};
///
/// let schema = FilterSchema::new("invoices")
///     .with("searchTerm", FilterKind::search(["code", "patient_name"]))
///     .with("status", FilterKind::exact("status"))
///     .with("amountRange", FilterKind::numeric_range("amount", 1000.0));
///
/// assert_eq!(schema.keys().count(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterSchema {
    /// Name of the listing this schema belongs to (e.g., "invoices")
    pub listing: String,

    /// Filter key to predicate kind, in declaration order
    filters: IndexMap<String, FilterKind>,
}

impl FilterSchema {
    /// Create an empty schema for a listing
    pub fn new(listing: impl Into<String>) -> Self {
        Self {
            listing: listing.into(),
            filters: IndexMap::new(),
        }
    }

    /// Add a filter key, replacing any previous definition of the same key
    pub fn with(mut self, key: impl Into<String>, kind: FilterKind) -> Self {
        self.filters.insert(key.into(), kind);
        self
    }

    /// Load a schema from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load a schema from a YAML string
    ///
    /// # Example
    /// ```
    /// use medilist::schema::FilterSchema;
    ///
    /// let schema = FilterSchema::from_yaml_str(r#"
    /// listing: invoices
    /// filters:
    ///   searchTerm: { kind: search, fields: [code, patient_name] }
    ///   status: { kind: exact, field: status }
    ///   amountRange: { kind: numeric_range, field: amount, scale: 1000.0 }
    /// "#).unwrap();
    ///
    /// assert_eq!(schema.listing, "invoices");
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Check structural constraints that serde cannot express
    pub fn validate(&self) -> Result<(), SchemaError> {
        for (key, kind) in &self.filters {
            if let FilterKind::Search { fields } = kind
                && fields.is_empty()
            {
                return Err(SchemaError::EmptySearchFields { key: key.clone() });
            }
        }
        Ok(())
    }

    /// Look up the predicate kind for a filter key
    pub fn get(&self, key: &str) -> Option<&FilterKind> {
        self.filters.get(key)
    }

    /// Iterate over the filter keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    /// Build a criteria record with every schema key defaulted to `""`
    pub fn empty_criteria(&self) -> Criteria {
        Criteria::with_keys(self.keys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice_schema() -> FilterSchema {
        FilterSchema::new("invoices")
            .with("searchTerm", FilterKind::search(["code", "patient_name"]))
            .with("status", FilterKind::exact("status"))
            .with("amountRange", FilterKind::numeric_range("amount", 1000.0))
    }

    #[test]
    fn test_builder_keeps_declaration_order() {
        let schema = invoice_schema();
        let keys: Vec<_> = schema.keys().collect();
        assert_eq!(keys, vec!["searchTerm", "status", "amountRange"]);
    }

    #[test]
    fn test_with_replaces_existing_key() {
        let schema = invoice_schema().with("status", FilterKind::partial("status"));
        assert_eq!(schema.get("status"), Some(&FilterKind::partial("status")));
        assert_eq!(schema.keys().count(), 3);
    }

    #[test]
    fn test_empty_criteria_covers_all_keys() {
        let criteria = invoice_schema().empty_criteria();
        assert!(criteria.is_empty());
        assert_eq!(criteria.get("amountRange"), "");
    }

    #[test]
    fn test_from_yaml_str() {
        let schema = FilterSchema::from_yaml_str(
            r#"
listing: medications
filters:
  searchTerm: { kind: search, fields: [name, code] }
  supplier: { kind: partial, field: supplier }
  refrigerated: { kind: flag, field: refrigerated }
  stockRange: { kind: numeric_range, field: stock }
"#,
        )
        .expect("schema should parse");

        assert_eq!(schema.listing, "medications");
        assert_eq!(
            schema.get("stockRange"),
            Some(&FilterKind::numeric_range("stock", 1.0))
        );
        assert_eq!(
            schema.get("refrigerated"),
            Some(&FilterKind::flag("refrigerated"))
        );
    }

    #[test]
    fn test_from_yaml_rejects_empty_search_fields() {
        let result = FilterSchema::from_yaml_str(
            r#"
listing: patients
filters:
  searchTerm: { kind: search, fields: [] }
"#,
        );
        assert!(matches!(
            result,
            Err(SchemaError::EmptySearchFields { .. })
        ));
    }

    #[test]
    fn test_from_yaml_rejects_malformed_input() {
        assert!(matches!(
            FilterSchema::from_yaml_str("listing: [broken"),
            Err(SchemaError::Parse(_))
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let schema = invoice_schema();
        let yaml = serde_yaml::to_string(&schema).expect("serialize should succeed");
        let restored = FilterSchema::from_yaml_str(&yaml).expect("deserialize should succeed");
        assert_eq!(schema, restored);
    }
}
