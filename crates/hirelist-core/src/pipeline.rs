//! Pipeline: filter → group → sort → flatten.
//!
//! Every step works on borrowed [`Record`]s so the caller's slice is never
//! copied or modified. The steps are public individually so the ordering of
//! equal names can be checked on records rather than on bare strings.
//!
//! ```text
//! &[Record] ─► filter_displayable ─► group_by_list ─► sort each group ─► flatten ─► names
//! ```

use crate::types::Record;
use std::collections::BTreeMap;

/// Records grouped by `listId`. Iteration is in ascending key order.
pub type Groups<'a> = BTreeMap<i64, Vec<&'a Record>>;

/// Keep only records with a non-empty name, in their original order.
pub fn filter_displayable(records: &[Record]) -> Vec<&Record> {
    records.iter().filter(|r| r.is_displayable()).collect()
}

/// Partition by `listId`. Members keep the order in which they were given.
pub fn group_by_list<'a>(records: impl IntoIterator<Item = &'a Record>) -> Groups<'a> {
    let mut groups = Groups::new();
    for record in records {
        groups.entry(record.list_id).or_default().push(record);
    }
    groups
}

/// Sort each group by name. `sort_by` is stable, so equal names keep their
/// relative order.
fn sort_groups(groups: &mut Groups<'_>) {
    for members in groups.values_mut() {
        members.sort_by(|a, b| a.display_name().cmp(b.display_name()));
    }
}

/// Run every step except the final projection, returning the records in
/// display order.
pub fn arrange(records: &[Record]) -> Vec<&Record> {
    let mut groups = group_by_list(filter_displayable(records));
    sort_groups(&mut groups);
    let arranged: Vec<&Record> = groups.into_values().flatten().collect();
    tracing::debug!(
        input = records.len(),
        output = arranged.len(),
        "pipeline arranged records"
    );
    arranged
}

/// The full pipeline: the display rows, top to bottom.
pub fn transform(records: &[Record]) -> Vec<String> {
    arrange(records)
        .into_iter()
        .map(|r| r.display_name().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
