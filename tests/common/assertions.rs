//! Domain-specific assertion helpers for hirelist harnesses.
//!
//! These add context-rich failure messages that say which ordering rule was
//! broken and where in the output.

use hirelist_core::Record;

/// Assert the display-order invariant over arranged records: ascending
/// `list_id`, and within a list non-decreasing `name`, with equal names in
/// the order they had in `input`.
pub fn assert_display_order(input: &[Record], arranged: &[&Record]) {
    let position = |r: &Record| {
        input
            .iter()
            .position(|x| std::ptr::eq(x, r))
            .expect("arranged record must come from the input slice")
    };

    for (i, pair) in arranged.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        if a.list_id != b.list_id {
            assert!(
                a.list_id < b.list_id,
                "group order broken at rows {i}/{}: list {} before list {}",
                i + 1,
                a.list_id,
                b.list_id
            );
            continue;
        }
        let (na, nb) = (a.display_name(), b.display_name());
        assert!(
            na <= nb,
            "name order broken in list {} at rows {i}/{}: {na:?} before {nb:?}",
            a.list_id,
            i + 1
        );
        if na == nb {
            assert!(
                position(a) < position(b),
                "tie order broken in list {} for {na:?}: input #{} emitted before input #{}",
                a.list_id,
                position(a),
                position(b)
            );
        }
    }
}

/// Assert every arranged record is displayable.
pub fn assert_all_displayable(arranged: &[&Record]) {
    for r in arranged {
        assert!(r.is_displayable(), "non-displayable record survived the filter: {r}");
    }
}
