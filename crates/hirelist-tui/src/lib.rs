//! hirelist TUI: ratatui application shell.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::{App, AppState, FetchMsg};

use hirelist_core::config::Config;
use hirelist_fetch::HttpFetcher;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Start the TUI against the configured endpoint. Fetches are spawned on
/// `runtime`; the event loop itself runs on the calling thread.
pub fn run(config: Config, runtime: Handle) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    let fetcher = Arc::new(HttpFetcher::new().with_timeout(config.source.timeout()));
    App::new(config, theme, runtime, fetcher).run()
}
