//! Sort, pagination and view-result types

use serde::{Deserialize, Serialize};

/// Sort direction for a listing column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// A `(field, direction)` pair describing how to order a listing
///
/// # Example
/// ```
/// use medilist::core::query::{SortDirection, SortSpec};
///
/// let spec = SortSpec::parse("amount:desc");
/// assert_eq!(spec.field, "amount");
/// assert_eq!(spec.direction, SortDirection::Descending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Record field to compare
    pub field: String,

    /// Ascending or descending
    pub direction: SortDirection,
}

impl SortSpec {
    /// Create a sort spec
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Shorthand for an ascending sort
    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Shorthand for a descending sort
    pub fn descending(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Parse a `field:asc` / `field:desc` expression.
    ///
    /// A bare field name sorts ascending; an unknown direction token also
    /// falls back to ascending rather than failing.
    pub fn parse(expr: &str) -> Self {
        match expr.split_once(':') {
            Some((field, "desc")) => Self::descending(field),
            Some((field, _)) => Self::ascending(field),
            None => Self::ascending(expr),
        }
    }
}

/// A 1-indexed page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (starts at 1)
    pub number: usize,

    /// Number of rows per page
    pub size: usize,
}

impl Page {
    /// Create a page request
    pub fn new(number: usize, size: usize) -> Self {
        Self { number, size }
    }

    /// Get the page number, ensuring a minimum of 1
    pub fn number(&self) -> usize {
        self.number.max(1)
    }

    /// Get the page size, ensuring it doesn't exceed the maximum
    pub fn size(&self) -> usize {
        self.size.clamp(1, 100) // Maximum 100 per page, minimum 1
    }

    /// Index of the first row on this page
    pub fn start(&self) -> usize {
        (self.number() - 1) * self.size()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { number: 1, size: 10 }
    }
}

/// Pagination metadata computed from the pre-pagination match count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of rows per page
    pub size: usize,

    /// Total number of matching rows (after filters, before paging)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, size: usize, total: usize) -> Self {
        // Ensure size is at least 1 to avoid division by zero
        let size = size.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(size) };
        let start = (page.max(1) - 1) * size;

        Self {
            page: page.max(1),
            size,
            total,
            total_pages,
            has_next: start + size < total,
            has_prev: page > 1,
        }
    }
}

/// The final filtered, sorted, paged rows handed to the presentation layer
#[derive(Debug, Clone, Serialize)]
pub struct ViewResult<T> {
    /// The rows of the requested page, in display order
    pub rows: Vec<T>,

    /// Total number of matching rows before pagination
    pub total: usize,

    /// Pagination metadata, present when a page was requested
    pub pagination: Option<PaginationMeta>,
}

impl<T> ViewResult<T> {
    /// True when the requested page has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
