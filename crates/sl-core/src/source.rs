//! The `QuantitySource` sampling contract.

use crate::{CategorySet, QuantityTree};

/// Supplies the nested mapping of named quantities a table writer samples
/// once per invocation.
///
/// The writer never inspects source internals: it checks the advertised
/// [`categories`][QuantitySource::categories] once at construction and then
/// calls [`collect`][QuantitySource::collect] each time it is driven.
///
/// # Example — fixed counters
///
/// ```rust,ignore
/// struct StepCounter { step: i64 }
///
/// impl QuantitySource for StepCounter {
///     fn categories(&self) -> CategorySet {
///         Category::Scalar.into()
///     }
///
///     fn collect(&mut self) -> QuantityTree {
///         let mut tree = QuantityTree::new();
///         tree.insert_value("step", self.step);
///         tree
///     }
/// }
/// ```
pub trait QuantitySource {
    /// Kinds of quantities this source can emit.
    ///
    /// Checked once at writer construction; table writers require
    /// [`Category::Scalar`][crate::Category::Scalar] to be present.
    fn categories(&self) -> CategorySet;

    /// Sample the current values.
    ///
    /// Called exactly once per writer invocation.  Entries of kinds a table
    /// cannot render are dropped downstream; they never shrink a row.
    fn collect(&mut self) -> QuantityTree;
}
