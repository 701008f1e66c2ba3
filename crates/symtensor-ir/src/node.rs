//! Expression graph nodes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dtype::DataType;
use crate::shape::Shape;

/// One point in a tensor expression graph.
///
/// A node records its own resolved shape and dtype plus zero to three child
/// operands; the operation `name` on non-leaf variants identifies the
/// operation for diagnostics only and carries no executable semantics.
///
/// Nodes are immutable once constructed and share their operands through
/// [`Arc`], so several parents may reference the same child. Because
/// construction can only reference already-existing nodes, the result is
/// always a directed acyclic graph, and a finished graph can be traversed
/// from multiple threads without coordination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// External input with no operands.
    Leaf { shape: Shape, dtype: DataType },
    Unary {
        name: String,
        shape: Shape,
        dtype: DataType,
        operand: Arc<Node>,
    },
    Binary {
        name: String,
        shape: Shape,
        dtype: DataType,
        left: Arc<Node>,
        right: Arc<Node>,
    },
    Ternary {
        name: String,
        shape: Shape,
        dtype: DataType,
        first: Arc<Node>,
        second: Arc<Node>,
        third: Arc<Node>,
    },
}

impl Node {
    /// Create an external input node. The shape may be rank 0.
    pub fn leaf(shape: impl Into<Shape>, dtype: DataType) -> Arc<Self> {
        Arc::new(Node::Leaf {
            shape: shape.into(),
            dtype,
        })
    }

    /// Create a rank-0 input node.
    pub fn scalar(dtype: DataType) -> Arc<Self> {
        Node::leaf(Shape::scalar(), dtype)
    }

    pub fn shape(&self) -> &Shape {
        match self {
            Node::Leaf { shape, .. }
            | Node::Unary { shape, .. }
            | Node::Binary { shape, .. }
            | Node::Ternary { shape, .. } => shape,
        }
    }

    pub fn dtype(&self) -> DataType {
        match self {
            Node::Leaf { dtype, .. }
            | Node::Unary { dtype, .. }
            | Node::Binary { dtype, .. }
            | Node::Ternary { dtype, .. } => *dtype,
        }
    }

    /// Number of axes in this node's shape.
    pub fn rank(&self) -> usize {
        self.shape().rank()
    }

    /// Operation name for non-leaf nodes; diagnostics only.
    pub fn op_name(&self) -> Option<&str> {
        match self {
            Node::Leaf { .. } => None,
            Node::Unary { name, .. } | Node::Binary { name, .. } | Node::Ternary { name, .. } => {
                Some(name)
            }
        }
    }

    /// Number of child operands (0 for a leaf, up to 3).
    pub fn arity(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Unary { .. } => 1,
            Node::Binary { .. } => 2,
            Node::Ternary { .. } => 3,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Child operands in positional order.
    pub fn operands(&self) -> Vec<&Arc<Node>> {
        match self {
            Node::Leaf { .. } => Vec::new(),
            Node::Unary { operand, .. } => vec![operand],
            Node::Binary { left, right, .. } => vec![left, right],
            Node::Ternary {
                first,
                second,
                third,
                ..
            } => vec![first, second, third],
        }
    }
}
