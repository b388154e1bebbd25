//! Core module containing fundamental traits and types for the pipeline

pub mod criteria;
pub mod error;
pub mod field;
pub mod query;
pub mod record;

pub use criteria::Criteria;
pub use error::SchemaError;
pub use field::FieldValue;
pub use query::{Page, PaginationMeta, SortDirection, SortSpec, ViewResult};
pub use record::Record;
