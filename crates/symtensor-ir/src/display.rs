//! Display trait implementations for IR types.
//!
//! Human-readable renderings for logs and error messages; none of this text
//! is a parseable or persisted format.

use std::fmt;

use crate::dtype::DataType;
use crate::node::Node;
use crate::ops::{BinaryOp, TernaryOp, UnaryOp};
use crate::shape::{Dim, Shape};

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim::Static(extent) => write!(f, "{}", extent),
            Dim::Dynamic(name) => write!(f, "<{}>", name),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, dim) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", dim)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf { shape, dtype } => {
                write!(f, "Leaf[shape: {}, dtype: {}]", shape, dtype)
            }
            Node::Unary {
                name, shape, dtype, ..
            } => write!(f, "Unary[name: {}, shape: {}, dtype: {}]", name, shape, dtype),
            Node::Binary {
                name, shape, dtype, ..
            } => write!(f, "Binary[name: {}, shape: {}, dtype: {}]", name, shape, dtype),
            Node::Ternary {
                name, shape, dtype, ..
            } => write!(
                f,
                "Ternary[name: {}, shape: {}, dtype: {}]",
                name, shape, dtype
            ),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) -> {}", self.name, self.input_dtype, self.output_dtype)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}) -> {}",
            self.name, self.left_dtype, self.right_dtype, self.output_dtype
        )
    }
}

impl fmt::Display for TernaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {}) -> {}",
            self.name, self.first_dtype, self.second_dtype, self.third_dtype, self.output_dtype
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_dim() {
        assert_eq!(format!("{}", Dim::Static(7)), "7");
        assert_eq!(format!("{}", Dim::dynamic("batch_size")), "<batch_size>");
    }

    #[test]
    fn test_display_shape() {
        let shape = Shape::from(vec![Dim::Static(2), Dim::dynamic("batch_size")]);
        assert_eq!(format!("{}", shape), "[2, <batch_size>]");
        assert_eq!(format!("{}", Shape::scalar()), "[]");
    }

    #[test]
    fn test_display_dtype() {
        assert_eq!(format!("{}", DataType::Float32), "Float32");
        assert_eq!(format!("{}", DataType::BFloat16), "BFloat16");
        assert_eq!(format!("{}", DataType::UInt64), "UInt64");
    }

    #[test]
    fn test_display_leaf() {
        let leaf = Node::leaf(
            vec![Dim::Static(2), Dim::dynamic("batch_size")],
            DataType::Float32,
        );
        assert_eq!(
            format!("{}", leaf),
            "Leaf[shape: [2, <batch_size>], dtype: Float32]"
        );
    }

    #[test]
    fn test_display_unary_node() {
        let relu = UnaryOp::new("relu", DataType::Float32, DataType::Float32);
        let input = Node::leaf(
            vec![Dim::Static(2), Dim::dynamic("batch_size")],
            DataType::Float32,
        );
        let out = relu.apply(&input).unwrap();
        assert_eq!(
            format!("{}", out),
            "Unary[name: relu, shape: [2, <batch_size>], dtype: Float32]"
        );
    }

    #[test]
    fn test_display_descriptors() {
        let relu = UnaryOp::new("relu", DataType::Float32, DataType::Float32);
        assert_eq!(format!("{}", relu), "relu(Float32) -> Float32");

        let add = BinaryOp::new("add", DataType::Float32, DataType::Float32, DataType::Float32);
        assert_eq!(format!("{}", add), "add(Float32, Float32) -> Float32");

        let select = TernaryOp::new(
            "where",
            DataType::Bool,
            DataType::Float32,
            DataType::Float32,
            DataType::Float32,
        );
        assert_eq!(
            format!("{}", select),
            "where(Bool, Float32, Float32) -> Float32"
        );
    }
}
