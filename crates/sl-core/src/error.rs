//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert `SlError`
//! into them via `From` impls or wrap it as one variant.

use thiserror::Error;

/// The top-level error type for `sl-core`.
#[derive(Debug, Error)]
pub enum SlError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("namespace must contain at least one segment")]
    EmptyNamespace,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sl-*` crates.
pub type SlResult<T> = Result<T, SlError>;
