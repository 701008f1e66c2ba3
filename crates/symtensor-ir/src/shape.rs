//! Dimensions and shapes.

use serde::{Deserialize, Serialize};

/// A single tensor axis: either a concrete extent or a named symbolic one.
///
/// Two [`Dim::Dynamic`] values denote the same axis only if their names are
/// textually identical; no other equivalence is inferred.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dim {
    /// Axis with an extent known at graph-construction time.
    Static(u64),
    /// Axis whose extent is unknown here, identified by a symbolic name.
    Dynamic(String),
}

impl Dim {
    /// Create a dynamic axis from any string-like name.
    pub fn dynamic(name: impl Into<String>) -> Self {
        Dim::Dynamic(name.into())
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Dim::Static(_))
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, Dim::Dynamic(_))
    }

    /// Concrete extent, if this axis has one.
    pub fn extent(&self) -> Option<u64> {
        match self {
            Dim::Static(extent) => Some(*extent),
            Dim::Dynamic(_) => None,
        }
    }

    /// Symbolic name, if this axis is dynamic.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Dim::Static(_) => None,
            Dim::Dynamic(name) => Some(name),
        }
    }
}

impl From<u64> for Dim {
    fn from(extent: u64) -> Self {
        Dim::Static(extent)
    }
}

/// An ordered sequence of axes; the number of axes is the rank.
///
/// Axis order is significant: broadcasting aligns shapes starting from the
/// trailing axis. Shapes are immutable once built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape(Vec<Dim>);

impl Shape {
    pub fn new(dims: Vec<Dim>) -> Self {
        Shape(dims)
    }

    /// The rank-0 shape.
    pub fn scalar() -> Self {
        Shape(Vec::new())
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    pub fn is_scalar(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dims(&self) -> &[Dim] {
        &self.0
    }

    /// Axis at `index`, counted from the leading (outermost) axis.
    pub fn dim(&self, index: usize) -> Option<&Dim> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dim> {
        self.0.iter()
    }
}

impl From<Vec<Dim>> for Shape {
    fn from(dims: Vec<Dim>) -> Self {
        Shape(dims)
    }
}

impl FromIterator<Dim> for Shape {
    fn from_iter<I: IntoIterator<Item = Dim>>(iter: I) -> Self {
        Shape(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Shape {
    type Item = &'a Dim;
    type IntoIter = std::slice::Iter<'a, Dim>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
