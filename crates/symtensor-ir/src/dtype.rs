//! Tensor element types.

use serde::{Deserialize, Serialize};

/// Element type of a tensor.
///
/// The set is closed and equality is exact: there is no implicit widening or
/// coercion between members. Operator signatures compare dtypes with plain
/// equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Float32,
    Float16,
    BFloat16,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Bool,
}

impl DataType {
    /// Every supported element type.
    pub const ALL: [DataType; 8] = [
        DataType::Float32,
        DataType::Float16,
        DataType::BFloat16,
        DataType::Int32,
        DataType::Int64,
        DataType::UInt32,
        DataType::UInt64,
        DataType::Bool,
    ];

    /// Canonical spelling used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Float32 => "Float32",
            DataType::Float16 => "Float16",
            DataType::BFloat16 => "BFloat16",
            DataType::Int32 => "Int32",
            DataType::Int64 => "Int64",
            DataType::UInt32 => "UInt32",
            DataType::UInt64 => "UInt64",
            DataType::Bool => "Bool",
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(
            self,
            DataType::Float32 | DataType::Float16 | DataType::BFloat16
        )
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            DataType::Int32 | DataType::Int64 | DataType::UInt32 | DataType::UInt64
        )
    }
}
