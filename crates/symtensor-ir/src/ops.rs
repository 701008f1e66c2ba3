//! Operator descriptors.
//!
//! A descriptor fixes an operation name and its dtype signature once and is
//! then applied to any number of node sets. Applying a descriptor validates
//! the operands' dtypes positionally, broadcasts their shapes, and on
//! success constructs the node of matching arity; nothing is ever
//! evaluated or scheduled. Descriptors carry no mutable state, so two
//! descriptors with identical fields are behaviorally interchangeable.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::broadcast::broadcast;
use crate::dtype::DataType;
use crate::error::IrError;
use crate::node::Node;
use crate::shape::Shape;

/// Check one operand's dtype against its declared dtype. `position` is
/// 1-based.
fn check_dtype(
    op: &str,
    position: usize,
    expected: DataType,
    actual: DataType,
) -> Result<(), IrError> {
    if actual == expected {
        Ok(())
    } else {
        Err(IrError::DtypeMismatch {
            op: op.to_string(),
            position,
            expected,
            actual,
        })
    }
}

/// Broadcast operand shapes, attaching the operator name on failure.
fn broadcast_operands(op: &str, shapes: Vec<Shape>) -> Result<Shape, IrError> {
    match broadcast(&shapes) {
        Some(shape) => Ok(shape),
        None => Err(IrError::ShapeIncompatible {
            op: op.to_string(),
            shapes,
        }),
    }
}

/// Descriptor for a one-operand operation (e.g. `relu`, `sigmoid`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnaryOp {
    pub name: String,
    pub input_dtype: DataType,
    pub output_dtype: DataType,
}

impl UnaryOp {
    pub fn new(name: impl Into<String>, input_dtype: DataType, output_dtype: DataType) -> Self {
        UnaryOp {
            name: name.into(),
            input_dtype,
            output_dtype,
        }
    }

    /// Validate the operand and construct the resulting node.
    pub fn apply(&self, operand: &Arc<Node>) -> Result<Arc<Node>, IrError> {
        check_dtype(&self.name, 1, self.input_dtype, operand.dtype())?;
        let shape = broadcast_operands(&self.name, vec![operand.shape().clone()])?;

        Ok(Arc::new(Node::Unary {
            name: self.name.clone(),
            shape,
            dtype: self.output_dtype,
            operand: Arc::clone(operand),
        }))
    }
}

/// Descriptor for a two-operand operation (e.g. `add`, `mul`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryOp {
    pub name: String,
    pub left_dtype: DataType,
    pub right_dtype: DataType,
    pub output_dtype: DataType,
}

impl BinaryOp {
    pub fn new(
        name: impl Into<String>,
        left_dtype: DataType,
        right_dtype: DataType,
        output_dtype: DataType,
    ) -> Self {
        BinaryOp {
            name: name.into(),
            left_dtype,
            right_dtype,
            output_dtype,
        }
    }

    /// Validate both operands and construct the resulting node.
    ///
    /// Dtype validation runs left to right and completes before any shape
    /// work; a call with both a dtype mismatch and incompatible shapes
    /// reports the dtype error.
    pub fn apply(&self, left: &Arc<Node>, right: &Arc<Node>) -> Result<Arc<Node>, IrError> {
        check_dtype(&self.name, 1, self.left_dtype, left.dtype())?;
        check_dtype(&self.name, 2, self.right_dtype, right.dtype())?;
        let shape = broadcast_operands(
            &self.name,
            vec![left.shape().clone(), right.shape().clone()],
        )?;

        Ok(Arc::new(Node::Binary {
            name: self.name.clone(),
            shape,
            dtype: self.output_dtype,
            left: Arc::clone(left),
            right: Arc::clone(right),
        }))
    }
}

/// Descriptor for a three-operand operation (e.g. `where`, `select`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TernaryOp {
    pub name: String,
    pub first_dtype: DataType,
    pub second_dtype: DataType,
    pub third_dtype: DataType,
    pub output_dtype: DataType,
}

impl TernaryOp {
    pub fn new(
        name: impl Into<String>,
        first_dtype: DataType,
        second_dtype: DataType,
        third_dtype: DataType,
        output_dtype: DataType,
    ) -> Self {
        TernaryOp {
            name: name.into(),
            first_dtype,
            second_dtype,
            third_dtype,
            output_dtype,
        }
    }

    /// Validate all three operands and construct the resulting node.
    pub fn apply(
        &self,
        first: &Arc<Node>,
        second: &Arc<Node>,
        third: &Arc<Node>,
    ) -> Result<Arc<Node>, IrError> {
        check_dtype(&self.name, 1, self.first_dtype, first.dtype())?;
        check_dtype(&self.name, 2, self.second_dtype, second.dtype())?;
        check_dtype(&self.name, 3, self.third_dtype, third.dtype())?;
        let shape = broadcast_operands(
            &self.name,
            vec![
                first.shape().clone(),
                second.shape().clone(),
                third.shape().clone(),
            ],
        )?;

        Ok(Arc::new(Node::Ternary {
            name: self.name.clone(),
            shape,
            dtype: self.output_dtype,
            first: Arc::clone(first),
            second: Arc::clone(second),
            third: Arc::clone(third),
        }))
    }
}
