//! Typed errors for schema construction and loading
//!
//! The pipeline itself is fail-open by design: malformed filter values
//! degrade to "match all" instead of erroring. The only fallible surface is
//! building or loading a filter schema.

use thiserror::Error;

/// Errors raised while building or loading a [`FilterSchema`]
///
/// [`FilterSchema`]: crate::schema::FilterSchema
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Failed to read a schema file from disk
    #[error("failed to read schema file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse schema YAML
    #[error("failed to parse filter schema: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A search filter must name at least one field to match against
    #[error("search filter '{key}' declares no searchable fields")]
    EmptySearchFields { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_fields_display() {
        let err = SchemaError::EmptySearchFields {
            key: "searchTerm".to_string(),
        };
        assert!(err.to_string().contains("searchTerm"));
        assert!(err.to_string().contains("no searchable fields"));
    }

    #[test]
    fn test_parse_error_from_yaml() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("[unclosed").unwrap_err();
        let err: SchemaError = yaml_err.into();
        assert!(matches!(err, SchemaError::Parse(_)));
    }
}
