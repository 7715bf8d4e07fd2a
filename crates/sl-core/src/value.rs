//! Logged quantity values and their kind tags.
//!
//! # Design
//!
//! Sources emit [`Value`]s, which may include kinds a table cannot render
//! (per-element [`Value::Series`] data).  The writable subset is the
//! borrowed [`Cell`] view obtained through [`Value::as_cell`]; a formatter
//! that accepts `Cell` is total by construction, and unsupported kinds are
//! dropped at the sampling boundary rather than surfacing as errors.

use std::fmt;
use std::ops::BitOr;

// ── Value ─────────────────────────────────────────────────────────────────────

/// A single logged quantity sampled from a
/// [`QuantitySource`][crate::QuantitySource].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Exact integer scalar.  Rendered with zero decimals.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// String quantity.
    Text(String),
    /// Per-element sequence data.  Never written to a table; rows keep only
    /// scalar and text quantities.
    Series(Vec<f64>),
}

impl Value {
    /// The kind tag of this value.
    pub fn category(&self) -> Category {
        match self {
            Value::Int(_) | Value::Float(_) => Category::Scalar,
            Value::Text(_) => Category::Text,
            Value::Series(_) => Category::Sequence,
        }
    }

    /// Borrowed view of the kinds a table can render, or `None` for the
    /// rest.
    pub fn as_cell(&self) -> Option<Cell<'_>> {
        match self {
            Value::Int(v) => Some(Cell::Int(*v)),
            Value::Float(v) => Some(Cell::Float(*v)),
            Value::Text(v) => Some(Cell::Text(v)),
            Value::Series(_) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Series(v)
    }
}

// ── Cell ──────────────────────────────────────────────────────────────────────

/// Borrowed view of the value kinds a table writer can render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Cell<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

// ── Category ──────────────────────────────────────────────────────────────────

/// Kind tag carried by every logged quantity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Numeric scalars — both exact integers and floats.
    Scalar,
    /// String quantities.
    Text,
    /// Per-element sequence data.
    Sequence,
}

impl Category {
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Scalar => "scalar",
            Category::Text => "text",
            Category::Sequence => "sequence",
        };
        write!(f, "{name}")
    }
}

// ── CategorySet ───────────────────────────────────────────────────────────────

/// Bit-set of [`Category`] tags a source advertises.
///
/// Build with `|`: `Category::Scalar | Category::Text`.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategorySet(u8);

impl CategorySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn with(self, category: Category) -> Self {
        Self(self.0 | category.bit())
    }

    pub const fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }
}

impl From<Category> for CategorySet {
    fn from(category: Category) -> Self {
        CategorySet::empty().with(category)
    }
}

impl BitOr for Category {
    type Output = CategorySet;

    fn bitor(self, rhs: Category) -> CategorySet {
        CategorySet::empty().with(self).with(rhs)
    }
}

impl BitOr<Category> for CategorySet {
    type Output = CategorySet;

    fn bitor(self, rhs: Category) -> CategorySet {
        self.with(rhs)
    }
}
