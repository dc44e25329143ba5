//! hirelist: fetch the hiring list, drop unnamed entries, group by list id,
//! sort by name and show the result.
//!
//! The work is split across three crates; this one only wires them together
//! and provides the headless (`--plain`) mode.
//!
//! # Architecture
//!
//! ```text
//! Fetcher ──► body ──► Parser ──► Pipeline ──► Presenter
//!   │                    │
//!   └─ FetchError        └─ ParseError      (no rows set on either)
//! ```

pub mod headless;

pub use hirelist_core::{arrange, config::Config, parse, present, transform, ParseError, Presenter, Record};
pub use hirelist_fetch::{fetch_with_callbacks, FetchError, FetchState, Fetcher, HttpFetcher};
