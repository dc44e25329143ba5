//! Ratatui widgets for the hirelist TUI.

pub mod help;
pub mod row_list;
pub mod status_bar;
