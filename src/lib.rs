//! # Medilist
//!
//! The filter/search/sort/paginate pipeline behind the listing pages of a
//! hospital management application: patient records, billing invoices, lab
//! orders, and pharmacy inventory.
//!
//! ## Features
//!
//! - **Criteria Store**: flat string-keyed filter state, empty string means
//!   "no constraint", total operations with no failure modes
//! - **Predicate Compiler**: one composite AND-predicate per criteria record,
//!   driven by a per-domain filter schema; fail-open on malformed input
//! - **View Materializer**: order-preserving filter, stable sort, 1-indexed
//!   page slice with a pre-pagination total count
//! - **Deterministic time**: date-bucket filters are anchored at an explicit
//!   `now` passed by the caller, never sampled inside the pipeline
//! - **Schema-Driven**: filter schemas built in code or loaded from YAML
//! - **Domain records included**: patients, invoices, lab orders and
//!   medications with canonical token fields and seeded sample data
//!
//! ## Quick Start
//!
//! ```rust
//! use medilist::prelude::*;
//!
//! let mut billing = Listing::new(Invoice::filter_schema(), Invoice::samples());
//!
//! billing.set_filter("status", "paid");
//! billing.set_sort("amount", SortDirection::Descending);
//!
//! let view = billing.view(Utc::now());
//! assert!(view.rows.iter().all(|i| i.status == InvoiceStatus::Paid));
//! assert_eq!(view.total, view.rows.len());
//!
//! billing.clear_filters();
//! assert_eq!(billing.view(Utc::now()).total, 5);
//! ```

pub mod compile;
pub mod core;
pub mod domain;
pub mod listing;
pub mod schema;
pub mod view;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        criteria::Criteria,
        error::SchemaError,
        field::FieldValue,
        query::{Page, PaginationMeta, SortDirection, SortSpec, ViewResult},
        record::Record,
    };

    // === Pipeline ===
    pub use crate::compile::{DateBucket, Predicate, compile};
    pub use crate::listing::{DEFAULT_PAGE_SIZE, Listing};
    pub use crate::schema::{FilterKind, FilterSchema};
    pub use crate::view::materialize;

    // === Domains ===
    pub use crate::domain::{
        Gender, Invoice, InvoiceStatus, LabOrder, LabOrderStatus, Medication, Patient,
        PatientStatus, PaymentMethod,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
