//! Nested quantity trees and their flattening into namespaced pairs.
//!
//! A [`QuantityTree`] is an insertion-ordered name→node mapping; nodes are
//! either sub-trees or leaf [`Value`]s.  [`QuantityTree::flatten`] walks the
//! tree depth-first in insertion order, which fixes the column order a
//! table writer derives from a fresh sample.

use crate::{Namespace, Value};

/// One node of a [`QuantityTree`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuantityNode {
    /// Nested sub-tree.
    Group(QuantityTree),
    /// Leaf quantity.
    Value(Value),
}

/// Insertion-ordered nested mapping of named quantities.
///
/// Inserting a name that already exists at the same level replaces the
/// previous entry, so one snapshot never holds duplicate paths.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuantityTree {
    entries: Vec<(String, QuantityNode)>,
}

impl QuantityTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a leaf quantity at this level.
    pub fn insert_value(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.insert_node(name.into(), QuantityNode::Value(value.into()));
    }

    /// Insert a nested sub-tree at this level.
    pub fn insert_group(&mut self, name: impl Into<String>, group: QuantityTree) {
        self.insert_node(name.into(), QuantityNode::Group(group));
    }

    fn insert_node(&mut self, name: String, node: QuantityNode) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = node,
            None => self.entries.push((name, node)),
        }
    }

    /// Entries at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten into `(namespace, value)` pairs, depth-first in insertion
    /// order.
    pub fn flatten(&self) -> Vec<(Namespace, &Value)> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        self.flatten_into(&mut prefix, &mut out);
        out
    }

    fn flatten_into<'a>(
        &'a self,
        prefix: &mut Vec<String>,
        out: &mut Vec<(Namespace, &'a Value)>,
    ) {
        for (name, node) in &self.entries {
            match node {
                QuantityNode::Value(value) => {
                    out.push((Namespace::from_prefix(prefix, name), value));
                }
                QuantityNode::Group(tree) => {
                    prefix.push(name.clone());
                    tree.flatten_into(prefix, out);
                    prefix.pop();
                }
            }
        }
    }
}
