//! Test builders: terse constructors for `Record` inputs.
//!
//! These are for readability in assertions, not for production use.

use hirelist_core::Record;

/// Build a named record: `rec(id, list_id, "name")`.
pub fn rec(id: i64, list_id: i64, name: &str) -> Record {
    Record::new(id, list_id, Some(name))
}

/// Build a record whose `name` is null.
pub fn unnamed(id: i64, list_id: i64) -> Record {
    Record::new(id, list_id, None)
}

/// Serialise records back into the wire format the endpoint uses.
///
/// `None` names are written as an explicit `null`.
pub fn to_wire_json(records: &[Record]) -> String {
    let items: Vec<serde_json::Value> = records
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id,
                "listId": r.list_id,
                "name": r.name,
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

/// Re-wrap arranged records as owned records with the same fields, in
/// arranged order. Used to feed the pipeline its own output.
pub fn rewrap(arranged: &[&Record]) -> Vec<Record> {
    arranged.iter().map(|r| (*r).clone()).collect()
}
