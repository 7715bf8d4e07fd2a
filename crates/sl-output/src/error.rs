//! Error types for sl-output.

use sl_core::Namespace;
use thiserror::Error;

/// Errors from constructing or driving a table writer.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The sink's mode indicator reported a non-writable handle.
    #[error("output sink is not writable")]
    SinkNotWritable,

    /// The quantity source does not advertise the scalar category.
    #[error("quantity source must emit scalar quantities")]
    ScalarsUnsupported,

    /// A schema column was missing from the sampled data.  The key sets
    /// are compared immediately before row assembly, so this indicates a
    /// broken `QuantitySource`, never a shorter row.
    #[error("column {0} missing from sampled data")]
    MissingColumn(Namespace),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
