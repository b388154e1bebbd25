//! Predicate compiler: criteria + schema + now → one composite predicate
//!
//! Compilation walks the active criteria entries, looks each key up in the
//! listing's filter schema, and emits one clause per constraint. All clauses
//! AND together. Parsing is best-effort and fail-open: an unparseable range
//! or bucket value, or a key the schema does not name, contributes no clause
//! at all, so ambiguous input over-includes rather than erroring.

use crate::core::criteria::Criteria;
use crate::core::field::FieldValue;
use crate::core::record::Record;
use crate::schema::{FilterKind, FilterSchema};
use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use tracing::debug;

/// A compiled filter: the logical AND of one clause per active criteria entry
///
/// Pure and re-entrant; compiled once per criteria change and applied to
/// every record of the collection.
pub struct Predicate<R: Record> {
    clauses: Vec<Box<dyn Fn(&R) -> bool + Send + Sync>>,
}

impl<R: Record> Predicate<R> {
    /// Test a record against every clause
    pub fn matches(&self, record: &R) -> bool {
        self.clauses.iter().all(|clause| clause(record))
    }

    /// Number of active clauses; zero means "match all"
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Named date window relative to "now", always an inclusive constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBucket {
    /// Same calendar day as now
    Today,
    /// Within the last 7 days, inclusive
    Week,
    /// Same calendar month and year as now
    Month,
    /// On or after the calendar day 3 months back
    ThreeMonths,
    /// On or after the calendar day 6 months back
    SixMonths,
    /// Same calendar year as now
    Year,
}

impl DateBucket {
    /// Parse a bucket token; unknown tokens yield `None` (match all)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "today" => Some(DateBucket::Today),
            "week" => Some(DateBucket::Week),
            "month" => Some(DateBucket::Month),
            "3months" => Some(DateBucket::ThreeMonths),
            "6months" => Some(DateBucket::SixMonths),
            "year" => Some(DateBucket::Year),
            _ => None,
        }
    }

    /// Test a record date against this bucket, anchored at `now`
    pub fn contains(&self, date: NaiveDate, now: DateTime<Utc>) -> bool {
        let today = now.date_naive();
        match self {
            DateBucket::Today => date == today,
            DateBucket::Week => match today.checked_sub_days(Days::new(7)) {
                Some(bound) => date >= bound,
                None => true,
            },
            DateBucket::Month => date.month() == today.month() && date.year() == today.year(),
            DateBucket::ThreeMonths => match today.checked_sub_months(Months::new(3)) {
                Some(bound) => date >= bound,
                None => true,
            },
            DateBucket::SixMonths => match today.checked_sub_months(Months::new(6)) {
                Some(bound) => date >= bound,
                None => true,
            },
            DateBucket::Year => date.year() == today.year(),
        }
    }
}

/// Parse a `"min-max"` or `"min+"` bucket-range value.
///
/// Returns `(min, Some(max))` for a closed range and `(min, None)` for an
/// open-ended one. `None` means the value is unparseable and the constraint
/// must fall back to match-all.
pub fn parse_numeric_range(raw: &str) -> Option<(f64, Option<f64>)> {
    let raw = raw.trim();
    if let Some(min) = raw.strip_suffix('+') {
        return Some((min.trim().parse().ok()?, None));
    }
    let (min, max) = raw.split_once('-')?;
    Some((
        min.trim().parse().ok()?,
        Some(max.trim().parse().ok()?),
    ))
}

/// Compile criteria into a single composite predicate.
///
/// `now` anchors every date bucket; callers pass the real current time in
/// production and a fixed instant in tests, so compilation itself never
/// reads the wall clock.
pub fn compile<R: Record>(
    criteria: &Criteria,
    schema: &FilterSchema,
    now: DateTime<Utc>,
) -> Predicate<R> {
    let mut clauses: Vec<Box<dyn Fn(&R) -> bool + Send + Sync>> = Vec::new();

    for (key, value) in criteria.active() {
        let Some(kind) = schema.get(key) else {
            // Unknown keys are forward-compatible noise, not errors.
            debug!(listing = %schema.listing, key, "ignoring unknown filter key");
            continue;
        };

        match kind {
            FilterKind::Search { fields } => {
                let term = value.to_lowercase();
                let fields = fields.clone();
                clauses.push(Box::new(move |record| {
                    fields.iter().any(|field| {
                        text_of(record, field)
                            .is_some_and(|text| text.to_lowercase().contains(&term))
                    })
                }));
            }
            FilterKind::Exact { field } => {
                let want = value.to_string();
                let field = field.clone();
                clauses.push(Box::new(move |record| {
                    text_of(record, &field).is_some_and(|text| text == want)
                }));
            }
            FilterKind::Partial { field } => {
                let term = value.to_lowercase();
                let field = field.clone();
                clauses.push(Box::new(move |record| {
                    text_of(record, &field)
                        .is_some_and(|text| text.to_lowercase().contains(&term))
                }));
            }
            FilterKind::DateBucket { field } => {
                let Some(bucket) = DateBucket::parse(value) else {
                    debug!(key, value, "unknown date bucket, matching all");
                    continue;
                };
                let field = field.clone();
                clauses.push(Box::new(move |record| {
                    record
                        .field_value(&field)
                        .and_then(|v| v.as_date())
                        .is_some_and(|date| bucket.contains(date, now))
                }));
            }
            FilterKind::NumericRange { field, scale } => {
                let Some((min, max)) = parse_numeric_range(value) else {
                    debug!(key, value, "unparseable numeric range, matching all");
                    continue;
                };
                // Bounds are fully inclusive after scaling.
                let (min, max) = (min * scale, max.map(|m| m * scale));
                let field = field.clone();
                clauses.push(Box::new(move |record| {
                    record
                        .field_value(&field)
                        .and_then(|v| v.as_number())
                        .is_some_and(|n| n >= min && max.is_none_or(|max| n <= max))
                }));
            }
            FilterKind::Flag { field } => {
                let want = match value {
                    "true" => true,
                    "false" => false,
                    other => {
                        debug!(key, value = other, "unparseable flag, matching all");
                        continue;
                    }
                };
                let field = field.clone();
                clauses.push(Box::new(move |record| {
                    record
                        .field_value(&field)
                        .and_then(|v| v.as_boolean())
                        .is_some_and(|b| b == want)
                }));
            }
        }
    }

    Predicate { clauses }
}

/// Textual rendition of a record field, used by search/exact/partial clauses
fn text_of<R: Record>(record: &R, field: &str) -> Option<String> {
    match record.field_value(field)? {
        FieldValue::String(s) => Some(s),
        _ => None,
    }
}
