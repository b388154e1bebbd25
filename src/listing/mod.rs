//! Page-level listing container
//!
//! `Listing` owns what one management page owns: the record collection, the
//! current criteria, the sort spec, and the page state. Every call to
//! [`Listing::view`] recomputes the displayed rows from scratch; there is no
//! memoization and no background work.

use crate::compile::compile;
use crate::core::criteria::Criteria;
use crate::core::query::{Page, SortDirection, SortSpec, ViewResult};
use crate::core::record::Record;
use crate::schema::FilterSchema;
use crate::view::materialize;
use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Default rows per page for management tables
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// In-memory listing state for one management view.
///
/// Records are owned exclusively by the listing and returned by value;
/// nothing is shared by reference, so the container needs no locking.
/// Changing any filter resets the page to 1, matching how the management
/// pages behave when the total page count shrinks.
pub struct Listing<R: Record> {
    schema: FilterSchema,
    records: Vec<R>,
    criteria: Criteria,
    sort: Option<SortSpec>,
    page: Page,
}

impl<R: Record> Listing<R> {
    /// Create a listing seeded with an initial record collection
    pub fn new(schema: FilterSchema, records: Vec<R>) -> Self {
        let criteria = schema.empty_criteria();
        Self {
            schema,
            records,
            criteria,
            sort: None,
            page: Page::new(1, DEFAULT_PAGE_SIZE),
        }
    }

    /// Set one filter value; resets to the first page
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.criteria.set(key, value);
        self.page.number = 1;
    }

    /// Reset every filter to its empty default; resets to the first page
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
        self.page.number = 1;
    }

    /// Sort by a column
    pub fn set_sort(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.sort = Some(SortSpec::new(field, direction));
    }

    /// Drop the sort, returning to source order
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Jump to a page. Out-of-range pages are kept as requested and yield an
    /// empty view; call [`Listing::clear_filters`] or set a valid page to
    /// recover
    pub fn set_page(&mut self, number: usize) {
        self.page.number = number.max(1);
    }

    /// Change the page size; resets to the first page
    pub fn set_page_size(&mut self, size: usize) {
        self.page.size = size;
        self.page.number = 1;
    }

    /// Current filter state
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Number of records in the source collection, before filtering
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the source collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Recompute the displayed rows.
    ///
    /// `now` anchors the date-bucket filters; the caller supplies the real
    /// current time in production and a fixed instant in tests.
    pub fn view(&self, now: DateTime<Utc>) -> ViewResult<R> {
        let predicate = compile(&self.criteria, &self.schema, now);
        materialize(&self.records, &predicate, self.sort.as_ref(), Some(self.page))
    }

    /// Append a new record to the collection
    pub fn insert(&mut self, record: R) {
        self.records.push(record);
    }

    /// Update a record in place by id (e.g., mark an invoice paid)
    pub fn update_record(&mut self, id: &Uuid, apply: impl FnOnce(&mut R)) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| &r.id() == id)
            .ok_or_else(|| anyhow!("{} with id '{}' not found", R::resource_name(), id))?;
        apply(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::schema::FilterKind;
    use chrono::TimeZone;

    #[derive(Clone, Debug)]
    struct Ticket {
        id: Uuid,
        title: String,
        state: String,
    }

    impl Ticket {
        fn new(title: &str, state: &str) -> Self {
            Self {
                id: Uuid::new_v4(),
                title: title.to_string(),
                state: state.to_string(),
            }
        }
    }

    impl Record for Ticket {
        fn resource_name() -> &'static str {
            "tickets"
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "title" => Some(FieldValue::String(self.title.clone())),
                "state" => Some(FieldValue::String(self.state.clone())),
                _ => None,
            }
        }
    }

    fn schema() -> FilterSchema {
        FilterSchema::new("tickets")
            .with("searchTerm", FilterKind::search(["title"]))
            .with("state", FilterKind::exact("state"))
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn listing() -> Listing<Ticket> {
        Listing::new(
            schema(),
            vec![
                Ticket::new("broken door", "open"),
                Ticket::new("flickering light", "closed"),
                Ticket::new("door handle", "open"),
            ],
        )
    }

    #[test]
    fn test_unfiltered_view_shows_everything() {
        let view = listing().view(now());
        assert_eq!(view.total, 3);
        assert_eq!(view.rows.len(), 3);
    }

    #[test]
    fn test_filtering_narrows_view() {
        let mut listing = listing();
        listing.set_filter("state", "open");

        let view = listing.view(now());
        assert_eq!(view.total, 2);
        assert!(view.rows.iter().all(|t| t.state == "open"));
    }

    #[test]
    fn test_clear_filters_restores_default_view() {
        let mut listing = listing();
        listing.set_filter("searchTerm", "door");
        listing.set_filter("state", "open");
        listing.clear_filters();

        let view = listing.view(now());
        assert_eq!(view.total, 3);
        assert!(listing.criteria().is_empty());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut listing = listing();
        listing.set_page_size(2);
        listing.set_page(2);
        listing.set_filter("state", "open");

        let view = listing.view(now());
        // Back on page 1 after the filter change.
        assert_eq!(view.pagination.unwrap().page, 1);
        assert!(!view.rows.is_empty());
    }

    #[test]
    fn test_out_of_range_page_yields_empty_view() {
        let mut listing = listing();
        listing.set_page(7);

        let view = listing.view(now());
        assert!(view.is_empty());
        assert_eq!(view.total, 3);
    }

    #[test]
    fn test_insert_shows_up_in_view() {
        let mut listing = listing();
        listing.insert(Ticket::new("leaking roof", "open"));
        assert_eq!(listing.view(now()).total, 4);
    }

    #[test]
    fn test_update_record_in_place() {
        let mut listing = listing();
        let id = listing.view(now()).rows[0].id;

        listing
            .update_record(&id, |t| t.state = "closed".to_string())
            .expect("record should exist");

        listing.set_filter("state", "closed");
        assert_eq!(listing.view(now()).total, 2);
    }

    #[test]
    fn test_update_unknown_record_errors() {
        let mut listing = listing();
        let err = listing
            .update_record(&Uuid::new_v4(), |_| {})
            .expect_err("unknown id should fail");
        assert!(err.to_string().contains("tickets"));
        assert!(err.to_string().contains("not found"));
    }
}
