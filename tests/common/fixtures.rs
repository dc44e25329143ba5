//! Static payloads used across harnesses.

/// Two groups, names out of order.
pub const BASIC_SORT: &str =
    r#"[{"id": 1, "listId": 2, "name": "B"}, {"id": 2, "listId": 1, "name": "A"}, {"id": 3, "listId": 2, "name": "C"}]"#;

/// Null and empty names mixed with one valid name.
pub const FILTERING: &str =
    r#"[{"id": 1, "listId": 2, "name": null}, {"id": 2, "listId": 1, "name": "Item 2"}, {"id": 3, "listId": 1, "name": ""}]"#;

/// Equal names in one group.
pub const STABLE_TIE: &str = r#"[{"id": 1, "listId": 1, "name": "A"}, {"id": 2, "listId": 1, "name": "A"}]"#;

/// One item in each of three groups.
pub const MULTI_GROUP: &str =
    r#"[{"id": 1, "listId": 3, "name": "Z"}, {"id": 2, "listId": 1, "name": "Y"}, {"id": 3, "listId": 2, "name": "X"}]"#;

/// A slice of the real endpoint's payload: "Item N" names, nulls, blanks,
/// four list ids, ids out of order.
pub const HIRING_SAMPLE: &str = r#"[
  {"id": 755, "listId": 2, "name": ""},
  {"id": 203, "listId": 2, "name": ""},
  {"id": 684, "listId": 1, "name": "Item 684"},
  {"id": 276, "listId": 1, "name": "Item 276"},
  {"id": 736, "listId": 3, "name": null},
  {"id": 926, "listId": 4, "name": null},
  {"id": 808, "listId": 4, "name": "Item 808"},
  {"id": 599, "listId": 1, "name": null},
  {"id": 424, "listId": 2, "name": null},
  {"id": 444, "listId": 1, "name": ""},
  {"id": 809, "listId": 3, "name": null},
  {"id": 293, "listId": 2, "name": null},
  {"id": 510, "listId": 2, "name": null},
  {"id": 680, "listId": 3, "name": "Item 680"},
  {"id": 231, "listId": 2, "name": null},
  {"id": 534, "listId": 4, "name": "Item 534"},
  {"id": 906, "listId": 2, "name": "Item 906"},
  {"id": 735, "listId": 1, "name": "Item 735"},
  {"id": 28, "listId": 1, "name": "Item 28"},
  {"id": 73, "listId": 4, "name": "Item 73"}
]"#;

/// Expected rows for [`HIRING_SAMPLE`]: names compare by code point, so
/// "Item 28" < "Item 276" < "Item 684".
pub const HIRING_SAMPLE_ROWS: &[&str] = &[
    "Item 276",
    "Item 28",
    "Item 684",
    "Item 735",
    "Item 906",
    "Item 680",
    "Item 534",
    "Item 73",
    "Item 808",
];

/// Payloads that must be rejected by the parser.
pub const MALFORMED: &[&str] = &[
    "not json",
    "",
    "[",
    r#"[{"id": 1, "listId": 2, "name": "x"},]"#,
];

/// Valid JSON that is not a list of records.
pub const WRONG_SHAPE: &[&str] = &[
    "{}",
    "null",
    r#""[]""#,
    r#"[{"id": 1}]"#,
    r#"[{"listId": 1}]"#,
    r#"[{"id": "1", "listId": 1}]"#,
    r#"[{"id": 1, "listId": 1, "name": true}]"#,
    r#"[[1, 1, "x"]]"#,
];
