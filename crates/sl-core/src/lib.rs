//! `sl-core` — foundational types for the `rust_simlog` streaming logger.
//!
//! This crate is a dependency of every other `sl-*` crate.  It intentionally
//! has no `sl-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`value`]     | `Value`, `Cell`, `Category`, `CategorySet`            |
//! | [`namespace`] | `Namespace` — the column key                          |
//! | [`tree`]      | `QuantityTree`, depth-first flattening                |
//! | [`source`]    | The `QuantitySource` sampling contract                |
//! | [`sink`]      | `TextSink` + stdout/file/buffer sinks                 |
//! | [`gate`]      | `WriteGate` — multi-process write election            |
//! | [`error`]     | `SlError`, `SlResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public owned types.   |

pub mod error;
pub mod gate;
pub mod namespace;
pub mod sink;
pub mod source;
pub mod tree;
pub mod value;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SlError, SlResult};
pub use gate::{AlwaysWrite, RankGate, WriteGate};
pub use namespace::Namespace;
pub use sink::{BufferSink, FileSink, StdoutSink, TextSink};
pub use source::QuantitySource;
pub use tree::{QuantityNode, QuantityTree};
pub use value::{Category, CategorySet, Cell, Value};
