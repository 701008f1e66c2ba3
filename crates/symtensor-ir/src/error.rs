//! Error types for the IR.

use thiserror::Error;

use crate::dtype::DataType;
use crate::shape::Shape;

/// Validation failures raised at the operator-application boundary.
///
/// Both variants are deterministic: retrying the same call produces the
/// same outcome. A failed application produces exactly one error and no
/// node; dtype validation always completes before shape validation, so a
/// call that fails both always reports [`IrError::DtypeMismatch`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IrError {
    #[error(
        "operand {position} of '{op}' has dtype {actual}, expected {expected}"
    )]
    DtypeMismatch {
        op: String,
        /// 1-based operand position.
        position: usize,
        expected: DataType,
        actual: DataType,
    },
    #[error("cannot broadcast shapes {} for operation '{op}'", render_shapes(.shapes))]
    ShapeIncompatible { op: String, shapes: Vec<Shape> },
}

fn render_shapes(shapes: &[Shape]) -> String {
    shapes
        .iter()
        .map(|shape| shape.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
