//! Parser integration harness.
//!
//! # What this covers
//!
//! - **Field mapping**: `id`, `listId` and `name` land in the right fields;
//!   absent and `null` names are indistinguishable afterwards.
//! - **Error classification**: text that is not JSON is `Malformed`; valid
//!   JSON of the wrong shape is `Shape`. Both carry a position.
//! - **All or nothing**: one bad element fails the whole payload.
//! - **Presenter contract**: a payload that fails to parse never reaches
//!   `set_rows`.
//!
//! # What this does NOT cover
//!
//! - Ordering of the parsed records through the pipeline (see
//!   `pipeline_harness`)
//!
//! # Running
//!
//! ```sh
//! cargo test --test parser_harness
//! ```

mod common;
use common::*;

use hirelist_core::{parse, present, ParseError, Presenter};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

/// Counts `set_rows` calls so a test can tell "never called" from "called
/// with nothing".
#[derive(Default)]
struct RecordingPresenter {
    calls: usize,
    rows: Vec<String>,
}

impl Presenter for RecordingPresenter {
    fn set_rows(&mut self, rows: Vec<String>) {
        self.calls += 1;
        self.rows = rows;
    }
}

// ---------------------------------------------------------------------------
// Field mapping
// ---------------------------------------------------------------------------

#[test]
fn records_keep_source_order() {
    let records = parse(HIRING_SAMPLE).unwrap();
    assert_eq!(records.len(), 20);
    assert_eq!(records[0], rec(755, 2, ""));
    assert_eq!(records[4], unnamed(736, 3));
    assert_eq!(records[19], rec(73, 4, "Item 73"));
}

#[test]
fn null_and_absent_names_parse_the_same() {
    let absent = parse(r#"[{"id": 5, "listId": 1}]"#).unwrap();
    let null = parse(r#"[{"id": 5, "listId": 1, "name": null}]"#).unwrap();
    assert_eq!(absent, null);
    assert_eq!(absent, [unnamed(5, 1)]);
}

#[test]
fn key_order_and_whitespace_do_not_matter() {
    let records = parse("\n [ {\"name\" : \"q\",\t\"listId\":3,\"id\":-9} ] \n").unwrap();
    assert_eq!(records, [rec(-9, 3, "q")]);
}

#[test]
fn large_ids_fit() {
    let records = parse(r#"[{"id": 9007199254740993, "listId": -1, "name": "big"}]"#).unwrap();
    assert_eq!(records[0].id, 9_007_199_254_740_993);
}

// ---------------------------------------------------------------------------
// Error classification
// ---------------------------------------------------------------------------

#[rstest]
fn malformed_payloads_are_rejected(#[values(0, 1, 2, 3)] index: usize) {
    let body = MALFORMED[index];
    match parse(body) {
        Err(ParseError::Malformed { .. }) => {}
        other => panic!("{body:?} should be malformed, got {other:?}"),
    }
}

#[rstest]
fn wrong_shape_payloads_are_rejected(#[values(0, 1, 2, 3, 4, 5, 6, 7)] index: usize) {
    let body = WRONG_SHAPE[index];
    match parse(body) {
        Err(ParseError::Shape { .. }) => {}
        other => panic!("{body:?} should be a shape error, got {other:?}"),
    }
}

#[test]
fn one_bad_element_fails_the_whole_payload() {
    let body = r#"[{"id": 1, "listId": 1, "name": "ok"}, {"id": 2, "listId": 1.5, "name": "bad"}]"#;
    let err = parse(body).unwrap_err();
    assert!(matches!(err, ParseError::Shape { .. }), "{err}");
}

#[test]
fn error_reports_position() {
    let err = parse("[\n  {\"id\": 1, \"listId\": }\n]").unwrap_err();
    match err {
        ParseError::Malformed { line, .. } => assert_eq!(line, 2),
        other => panic!("expected malformed, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Presenter contract
// ---------------------------------------------------------------------------

/// A payload that is not JSON produces an error and no rows.
#[test]
fn not_json_never_reaches_presenter() {
    let mut presenter = RecordingPresenter::default();
    let err = present("not json", &mut presenter).unwrap_err();
    assert!(matches!(err, ParseError::Malformed { .. }));
    assert_eq!(presenter.calls, 0);
}

#[test]
fn empty_array_sets_empty_rows() {
    let mut presenter = RecordingPresenter::default();
    assert_eq!(present("[]", &mut presenter).unwrap(), 0);
    assert_eq!(presenter.calls, 1);
    assert!(presenter.rows.is_empty());
}

#[test]
fn sample_payload_reaches_presenter_once() {
    let mut presenter = RecordingPresenter::default();
    let shown = present(HIRING_SAMPLE, &mut presenter).unwrap();
    assert_eq!(shown, HIRING_SAMPLE_ROWS.len());
    assert_eq!(presenter.calls, 1);
    assert_eq!(presenter.rows, HIRING_SAMPLE_ROWS);
}

proptest! {
    /// Arbitrary text either parses or fails; it never panics.
    #[test]
    fn arbitrary_text_never_panics(text in ".{0,64}") {
        let _ = parse(&text);
    }
}
