//! # Symtensor IR
//!
//! **Shape- and dtype-level symbolic tensor expression IR**
//!
//! This crate builds immutable expression graphs describing tensor
//! computations purely in terms of shapes and element types. No numeric
//! computation is ever performed: the crate is the graph-construction front
//! end that a downstream execution engine would later lower to kernels.
//!
//! ## Core Components
//!
//! ### Dimensions and Shapes ([`Dim`], [`Shape`])
//! An axis is either a concrete extent (`Static`) or a named symbolic extent
//! (`Dynamic`) whose size is unknown at graph-construction time. A shape is
//! an ordered sequence of axes; its length is the rank.
//!
//! ### Element types ([`DataType`])
//! A closed set of tensor element types with exact equality and no implicit
//! coercion.
//!
//! ### Expression graphs ([`Node`])
//! Immutable nodes of arity 0 to 3, each carrying its resolved shape and
//! dtype. Children are shared through `Arc`, so graphs are DAGs that can be
//! traversed concurrently without coordination.
//!
//! ### Broadcasting ([`broadcast`])
//! A pure function reconciling operand shapes, aligned from the trailing
//! axis, folding left to right across three or more shapes.
//!
//! ### Operator descriptors ([`UnaryOp`], [`BinaryOp`], [`TernaryOp`])
//! Stateless values fixing an operation name and dtype signature. Applying
//! one validates operand dtypes positionally, broadcasts the operand shapes,
//! and constructs the resulting node, or returns a structured [`IrError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use symtensor_ir::{BinaryOp, DataType, Dim, Node, Shape, UnaryOp};
//!
//! // Leaves: external inputs described by shape and dtype only.
//! let x = Node::leaf(vec![Dim::Static(2), Dim::Static(3)], DataType::Float32);
//! let y = Node::leaf(vec![Dim::Static(3)], DataType::Float32);
//!
//! // Descriptors are built once and applied repeatedly.
//! let add = BinaryOp::new("add", DataType::Float32, DataType::Float32, DataType::Float32);
//! let relu = UnaryOp::new("relu", DataType::Float32, DataType::Float32);
//!
//! let sum = add.apply(&x, &y)?;
//! let out = relu.apply(&sum)?;
//!
//! assert_eq!(out.shape(), &Shape::from(vec![Dim::Static(2), Dim::Static(3)]));
//! assert_eq!(out.dtype(), DataType::Float32);
//! assert_eq!(
//!     out.to_string(),
//!     "Unary[name: relu, shape: [2, 3], dtype: Float32]"
//! );
//! # Ok::<(), symtensor_ir::IrError>(())
//! ```
//!
//! ### Dynamic axes
//!
//! ```rust
//! use symtensor_ir::{broadcast, Dim, Shape};
//!
//! let lhs = Shape::from(vec![Dim::dynamic("batch"), Dim::Static(1)]);
//! let rhs = Shape::from(vec![Dim::dynamic("batch"), Dim::Static(3)]);
//!
//! let combined = broadcast(&[lhs, rhs]).unwrap();
//! assert_eq!(combined.to_string(), "[<batch>, 3]");
//! ```
//!
//! ## Error Handling
//!
//! Validation failures are deterministic values, never process aborts. Dtype
//! validation always completes before shape validation, so a call failing
//! both reports the dtype error:
//!
//! ```rust
//! use symtensor_ir::{BinaryOp, DataType, Dim, IrError, Node};
//!
//! let add = BinaryOp::new("add", DataType::Float32, DataType::Float32, DataType::Float32);
//! let lhs = Node::leaf(vec![Dim::Static(2), Dim::Static(3)], DataType::Float32);
//! let rhs = Node::leaf(vec![Dim::Static(4), Dim::Static(5)], DataType::Int32);
//!
//! match add.apply(&lhs, &rhs) {
//!     Err(IrError::DtypeMismatch { position, .. }) => assert_eq!(position, 2),
//!     other => panic!("expected a dtype mismatch, got {:?}", other),
//! }
//! ```

mod broadcast;
mod display;
mod dtype;
mod error;
mod node;
mod ops;
mod shape;
pub mod util;

#[cfg(test)]
mod tests;

pub use broadcast::broadcast;
pub use dtype::DataType;
pub use error::IrError;
pub use node::Node;
pub use ops::{BinaryOp, TernaryOp, UnaryOp};
pub use shape::{Dim, Shape};
pub use util::{graph_stats, pretty_print_node, GraphStats};
