//! Namespace paths — the ordered segment sequences identifying quantities.

use std::fmt;

use crate::{SlError, SlResult};

/// Ordered, non-empty sequence of name segments identifying one logged
/// quantity, e.g. `md.pair.LJ.energy`.
///
/// `Namespace` is the column key: identity is the full path, and the full
/// derive set (`Eq + Hash + Ord`) lets it key hash sets and sorted maps
/// without ceremony.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Namespace(Vec<String>);

impl Namespace {
    /// Build a namespace from owned segments.
    ///
    /// # Errors
    /// Returns [`SlError::EmptyNamespace`] if `segments` is empty.
    pub fn new(segments: Vec<String>) -> SlResult<Self> {
        if segments.is_empty() {
            return Err(SlError::EmptyNamespace);
        }
        Ok(Self(segments))
    }

    /// Parse a dotted path such as `"md.pair.energy"`.  Empty segments are
    /// skipped, so `"a..b"` parses as `a.b`.
    ///
    /// # Errors
    /// Returns [`SlError::EmptyNamespace`] if no segment survives.
    pub fn from_dotted(path: &str) -> SlResult<Self> {
        let segments: Vec<String> = path
            .split('.')
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        Self::new(segments)
    }

    /// Single-segment namespace.  Infallible.
    pub fn from_leaf(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// `prefix` segments followed by `leaf`.  Used when flattening trees.
    pub(crate) fn from_prefix(prefix: &[String], leaf: &str) -> Self {
        let mut segments = Vec::with_capacity(prefix.len() + 1);
        segments.extend_from_slice(prefix);
        segments.push(leaf.to_owned());
        Self(segments)
    }

    /// All segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The most specific (last) segment.
    pub fn leaf(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// Join all segments with `sep`.
    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}
