//! Status bar: one line under the list showing the fetch state.

use crate::theme::Theme;
use chrono::{DateTime, Local};
use hirelist_fetch::FetchState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const HINT: &str = " r refresh · ? help · q quit ";

pub struct StatusBar<'a> {
    state: &'a FetchState,
    rows: usize,
    refreshed_at: Option<DateTime<Local>>,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        state: &'a FetchState,
        rows: usize,
        refreshed_at: Option<DateTime<Local>>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            rows,
            refreshed_at,
            theme,
        }
    }

    /// The left-hand text, without styling.
    pub fn summary(&self) -> String {
        let mut text = match self.state {
            FetchState::Idle => " idle".to_string(),
            FetchState::Pending => " loading…".to_string(),
            FetchState::Succeeded => format!(" {} rows", self.rows),
            FetchState::Failed(reason) => format!(" error: {reason}"),
        };
        if let Some(at) = self.refreshed_at {
            text.push_str(&format!("  (refreshed {})", at.format("%H:%M:%S")));
        }
        text
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let summary = self.summary();
        let pad = (area.width as usize)
            .saturating_sub(summary.chars().count() + HINT.chars().count());
        let line = Line::from(vec![
            Span::styled(summary, self.theme.state_style(self.state)),
            Span::raw(" ".repeat(pad)),
            Span::styled(HINT, self.theme.status_hint),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
