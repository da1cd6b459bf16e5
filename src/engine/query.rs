use super::types::{OrderField, QueryError, SortOrder};
use crate::store::types::UserRecord;
use std::cmp::Ordering;

/// Runs filter and sort over the full record set.
///
/// The order field and direction are validated before any work happens, so a
/// malformed request never pays for filtering.
pub fn apply(
    records: Vec<UserRecord>,
    query: &str,
    order_field: &str,
    order_by: i32,
) -> Result<Vec<UserRecord>, QueryError> {
    let field = OrderField::parse(order_field)?;
    let order = SortOrder::from_value(order_by)?;

    let mut subset = filter_records(records, query);
    sort_records(&mut subset, field, order);
    Ok(subset)
}

/// Keeps records where `query` is a substring of `"first_name last_name"` or
/// of `about`. Matching is case-sensitive; duplicates (structural equality)
/// are included once. Empty query means no filtering.
///
/// Compatibility quirk: when the query matches nothing, the ENTIRE unfiltered
/// set is returned instead of an empty result. Callers cannot distinguish
/// "no matches" from "no filter". Kept for wire compatibility with the
/// original service.
pub fn filter_records(records: Vec<UserRecord>, query: &str) -> Vec<UserRecord> {
    if query.is_empty() {
        return records;
    }

    let mut matched: Vec<UserRecord> = Vec::new();
    for record in &records {
        let full_name = format!("{} {}", record.first_name, record.last_name);
        if !full_name.contains(query) && !record.about.contains(query) {
            continue;
        }
        if matched.contains(record) {
            continue;
        }
        matched.push(record.clone());
    }

    if matched.is_empty() {
        return records;
    }
    matched
}

/// Stable sort by the chosen field. `SortOrder::AsIs` leaves the input order
/// untouched; descending reverses the comparator, so ties still preserve
/// their relative input order.
pub fn sort_records(records: &mut [UserRecord], field: OrderField, order: SortOrder) {
    match order {
        SortOrder::Asc => records.sort_by(|a, b| compare(field, a, b)),
        SortOrder::Desc => records.sort_by(|a, b| compare(field, b, a)),
        SortOrder::AsIs => {}
    }
}

fn compare(field: OrderField, a: &UserRecord, b: &UserRecord) -> Ordering {
    match field {
        OrderField::Id => a.id.cmp(&b.id),
        OrderField::Age => a.age.cmp(&b.age),
        OrderField::Name => a.first_name.cmp(&b.first_name),
    }
}

/// Truncates to the first `limit` records. Zero means no truncation; a limit
/// beyond the input length passes the input through unchanged.
pub fn limit_records(mut records: Vec<UserRecord>, limit: usize) -> Vec<UserRecord> {
    if limit == 0 {
        return records;
    }
    records.truncate(limit);
    records
}

/// Drops records from the front according to a 1-based `offset`. An offset
/// whose effective skip (`offset - 1`) is negative or past the end is treated
/// as zero rather than erroring or emptying the result.
pub fn skip_records(mut records: Vec<UserRecord>, offset: i32) -> Vec<UserRecord> {
    let effective = offset - 1;
    if effective <= 0 || effective as usize > records.len() {
        return records;
    }
    records.drain(..effective as usize);
    records
}
