//! Headless mode: print the rows to a writer, one per line, and exit.

use hirelist_core::{present, Presenter};
use hirelist_fetch::Fetcher;
use std::borrow::Cow;
use std::io::{self, Write};

/// Presenter that writes each row on its own line.
///
/// `set_rows` cannot fail, so the first write error is kept and returned by
/// [`LinePresenter::finish`].
pub struct LinePresenter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> LinePresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and surface any write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Presenter for LinePresenter<W> {
    fn set_rows(&mut self, rows: Vec<String>) {
        if self.error.is_some() {
            return;
        }
        for row in &rows {
            if let Err(err) = writeln!(self.out, "{}", one_line(row)) {
                self.error = Some(err);
                return;
            }
        }
    }
}

/// Keep a row on a single output line: line breaks and backslashes are
/// escaped, everything else is written as is.
fn one_line(row: &str) -> Cow<'_, str> {
    if !row.contains(['\\', '\n', '\r']) {
        return Cow::Borrowed(row);
    }
    let mut escaped = String::with_capacity(row.len() + 2);
    for c in row.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// One fetch → parse → pipeline cycle written to `out`. Returns the number of
/// rows written. Nothing is written when the fetch or the parse fails.
pub async fn run<F: Fetcher, W: Write>(fetcher: &F, url: &str, out: W) -> anyhow::Result<usize> {
    let body = match fetcher.fetch(url).await {
        Ok(body) => body,
        Err(err) => {
            tracing::error!(url, error = %err, "error retrieving data");
            return Err(err.into());
        }
    };

    let mut presenter = LinePresenter::new(out);
    let count = present(&body, &mut presenter)?;
    presenter.finish()?;
    tracing::info!(url, rows = count, "rows written");
    Ok(count)
}
