//! `sl-output` — the streaming table writer for the rust_simlog framework.
//!
//! Converts a changing set of named scalar/string quantities into aligned,
//! delimiter-separated text rows.  An external scheduler drives
//! [`TableWriter::write`] once per sampling event; the writer samples its
//! [`QuantitySource`][sl_core::QuantitySource], notices on its own when the
//! set of logged columns changed, re-emits a header in that case, and
//! appends one fixed-width data row before flushing the sink.
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`format`] | `Formatter`, `Align` — width-aware cell rendering   |
//! | [`header`] | `derive_header` — namespace → column header         |
//! | [`table`]  | `TableWriter`, `TableBuilder`, `TableConfig`        |
//! | [`error`]  | `OutputError`, `OutputResult`                       |
//!
//! # Usage
//!
//! ```rust,ignore
//! use sl_core::StdoutSink;
//! use sl_output::TableBuilder;
//!
//! let mut table = TableBuilder::new(thermo, StdoutSink::new())
//!     .max_header_len(20)
//!     .build()?;
//! for _ in 0..steps {
//!     sim.advance();
//!     table.write()?;
//! }
//! ```

pub mod error;
pub mod format;
pub mod header;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{OutputError, OutputResult};
pub use format::{Align, Formatter};
pub use header::derive_header;
pub use table::{Column, TableBuilder, TableConfig, TableWriter};
