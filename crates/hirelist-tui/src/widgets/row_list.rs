//! Row list widget: the scrollable list of names that fills the screen.
//!
//! # Scroll semantics
//!
//! `offset` = index of the first visible row. `cursor` = absolute index of the
//! highlighted row. The cursor is always kept within the visible window;
//! moving it past an edge scrolls the window.
//!
//! [`RowListState`] is the terminal's [`Presenter`]: `set_rows` swaps in a new
//! list and returns the view to the top.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use hirelist_core::Presenter;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct RowListState {
    pub rows: Vec<String>,
    /// Index of the first visible row.
    pub offset: usize,
    /// Absolute index of the highlighted row.
    pub cursor: usize,
    pub show_row_numbers: bool,
    /// Cached from the last render so `handle()` can do cursor-aware scrolling.
    last_height: Cell<usize>,
}

impl Default for RowListState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Presenter for RowListState {
    fn set_rows(&mut self, rows: Vec<String>) {
        tracing::debug!(rows = rows.len(), "row list replaced");
        self.rows = rows;
        self.offset = 0;
        self.cursor = 0;
    }
}

impl RowListState {
    pub fn new(rows: Vec<String>) -> Self {
        Self {
            rows,
            offset: 0,
            cursor: 0,
            show_row_numbers: true,
            last_height: Cell::new(40),
        }
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Returns `(start, end)`, the exclusive range of rows currently visible.
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset.min(self.rows.len());
        let end = (start + self.height()).min(self.rows.len());
        (start, end)
    }

    /// Move the cursor to `index` (clamped) and scroll just enough to show it.
    fn move_to(&mut self, index: usize) {
        let last = self.rows.len().saturating_sub(1);
        self.cursor = index.min(last);
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.height() {
            self.offset = self.cursor + 1 - self.height();
        }
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        if self.rows.is_empty() {
            return;
        }

        match event {
            AppEvent::Nav(Direction::Up) => self.move_to(self.cursor.saturating_sub(1)),
            AppEvent::Nav(Direction::Down) => self.move_to(self.cursor + 1),
            AppEvent::ScrollUp => self.move_to(self.cursor.saturating_sub(PAGE_STEP)),
            AppEvent::ScrollDown => self.move_to(self.cursor + PAGE_STEP),
            AppEvent::ScrollToTop => self.move_to(0),
            AppEvent::ScrollToBottom => self.move_to(usize::MAX),
            _ => return,
        }
        tracing::debug!(cursor = self.cursor, offset = self.offset, "rows: cursor moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct RowList<'a> {
    state: &'a RowListState,
    title: &'a str,
    /// Shown instead of rows when the list is empty.
    placeholder: &'a str,
    theme: &'a Theme,
}

impl<'a> RowList<'a> {
    pub fn new(state: &'a RowListState, title: &'a str, placeholder: &'a str, theme: &'a Theme) -> Self {
        Self {
            state,
            title,
            placeholder,
            theme,
        }
    }
}

impl Widget for RowList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(self.theme.border_list);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Cache for handle(), draw always runs before handle()
        self.state.last_height.set(height);

        let total = self.state.rows.len();
        if total == 0 {
            Paragraph::new(Line::from(Span::styled(
                self.placeholder.to_string(),
                self.theme.row_empty,
            )))
            .render(inner, buf);
            return;
        }

        let (start, end) = self.state.visible_range();
        let number_width = total.to_string().len();

        let lines: Vec<Line<'static>> = self.state.rows[start..end]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let index = start + i;
                let mut spans = Vec::with_capacity(2);
                if self.state.show_row_numbers {
                    spans.push(Span::styled(
                        format!("{:>width$} │ ", index + 1, width = number_width),
                        self.theme.row_number,
                    ));
                }
                let style = if index == self.state.cursor {
                    self.theme.row_cursor
                } else {
                    self.theme.row_normal
                };
                spans.push(Span::styled(name.clone(), style));
                Line::from(spans)
            })
            .collect();

        // Text fills the inner area minus a 1-column scrollbar strip.
        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(total)
            .position(start)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
