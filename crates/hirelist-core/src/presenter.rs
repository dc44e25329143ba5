//! Presenter: the one thing the core needs from a display surface.
//!
//! A surface only has to accept the complete list of rows; there is no
//! incremental update contract.

use crate::{parser, pipeline, ParseError};

/// A display surface for the final name list.
pub trait Presenter {
    /// Replace every visible row with `rows`, top to bottom.
    fn set_rows(&mut self, rows: Vec<String>);
}

impl Presenter for Vec<String> {
    fn set_rows(&mut self, rows: Vec<String>) {
        *self = rows;
    }
}

/// Parse `body`, run the pipeline and hand the rows to `presenter`.
///
/// Returns the number of rows shown. On a parse error the presenter is not
/// touched, so it keeps whatever it displayed before.
pub fn present<P: Presenter + ?Sized>(body: &str, presenter: &mut P) -> Result<usize, ParseError> {
    let records = parser::parse(body)?;
    let rows = pipeline::transform(&records);
    let count = rows.len();
    presenter.set_rows(rows);
    Ok(count)
}
