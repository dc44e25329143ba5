//! hirelist-core: record model and display pipeline.
//!
//! This crate holds everything between the raw response body and the rows a
//! display surface shows. It has no networking and no UI dependencies.
//!
//! # Architecture
//!
//! ```text
//! body ──► parser ──► pipeline ──► Presenter::set_rows
//!            │
//!            └──► ParseError (no rows set)
//! ```

pub mod config;
pub mod parser;
pub mod pipeline;
pub mod presenter;
pub mod types;

pub use parser::{parse, ParseError};
pub use pipeline::{arrange, transform};
pub use presenter::{present, Presenter};
pub use types::Record;
