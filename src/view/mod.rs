//! View materializer: filter, stable sort, page slice
//!
//! The last pipeline stage. Takes the source collection and a compiled
//! predicate, keeps matches in their original relative order, stable-sorts by
//! the requested column, then slices out the requested page. The total match
//! count is taken before pagination so callers can compute total pages.

use crate::compile::Predicate;
use crate::core::query::{Page, PaginationMeta, SortDirection, SortSpec, ViewResult};
use crate::core::record::Record;
use std::cmp::Ordering;
use tracing::debug;

/// Produce the final displayed rows for a listing.
///
/// - Filtering preserves the source collection's relative order.
/// - Sorting is stable: ties and incomparable values keep their pre-sort
///   order. Records missing the sort field go after all records that carry
///   it, regardless of direction.
/// - Paging is 1-indexed. A page past the end of the filtered collection
///   yields an empty row set, never an error and never a clamped page; the
///   caller detects the overrun through the metadata and resets the page.
pub fn materialize<R: Record>(
    records: &[R],
    predicate: &Predicate<R>,
    sort: Option<&SortSpec>,
    page: Option<Page>,
) -> ViewResult<R> {
    let mut matched: Vec<R> = records
        .iter()
        .filter(|record| predicate.matches(record))
        .cloned()
        .collect();

    if let Some(spec) = sort {
        sort_rows(&mut matched, spec);
    }

    let total = matched.len();
    debug!(
        listing = R::resource_name(),
        total,
        source = records.len(),
        "materialized view"
    );

    match page {
        None => ViewResult {
            rows: matched,
            total,
            pagination: None,
        },
        Some(page) => {
            let meta = PaginationMeta::new(page.number(), page.size(), total);
            let start = page.start();
            let rows = if start >= total {
                Vec::new()
            } else {
                let end = (start + page.size()).min(total);
                matched[start..end].to_vec()
            };
            ViewResult {
                rows,
                total,
                pagination: Some(meta),
            }
        }
    }
}

/// Stable sort by one column
fn sort_rows<R: Record>(rows: &mut [R], spec: &SortSpec) {
    rows.sort_by(|a, b| {
        let (a, b) = (a.field_value(&spec.field), b.field_value(&spec.field));
        match (a, b) {
            // Missing values always sort to the end.
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                let ord = a.compare(&b).unwrap_or(Ordering::Equal);
                match spec.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            }
        }
    });
}
