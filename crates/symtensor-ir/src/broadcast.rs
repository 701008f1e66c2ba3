//! Shape broadcasting.
//!
//! Reconciles shapes of possibly differing rank and extents into a single
//! shape for elementwise-style operations, aligned from the trailing axis.

use crate::shape::{Dim, Shape};

/// Broadcast any number of shapes into one compatible shape.
///
/// Zero shapes yield the rank-0 shape and a single shape is returned
/// unchanged. With two or more, shapes are folded strictly left to right:
/// the fold order is part of the contract, because broadcasting involving
/// named dynamic axes is not associative across more than two operands.
///
/// Returns `None` as soon as any pair of aligned axes is incompatible; there
/// is no partial result.
pub fn broadcast(shapes: &[Shape]) -> Option<Shape> {
    let (first, rest) = match shapes.split_first() {
        Some(split) => split,
        None => return Some(Shape::scalar()),
    };

    let mut result = first.clone();
    for shape in rest {
        result = broadcast_pair(&result, shape)?;
    }
    Some(result)
}

/// Combine two shapes, right-aligned by trailing axis.
///
/// The result rank is the larger of the two input ranks. Where one side has
/// no axis at an aligned position, the present side's dimension is carried
/// through verbatim: no `Static(1)` is synthesized for the absent side.
fn broadcast_pair(a: &Shape, b: &Shape) -> Option<Shape> {
    let rank_a = a.rank();
    let rank_b = b.rank();
    let rank = rank_a.max(rank_b);

    let mut dims = Vec::with_capacity(rank);
    for offset in 1..=rank {
        let dim_a = rank_a.checked_sub(offset).map(|i| &a.dims()[i]);
        let dim_b = rank_b.checked_sub(offset).map(|i| &b.dims()[i]);

        let combined = match (dim_a, dim_b) {
            (Some(dim), None) | (None, Some(dim)) => dim.clone(),
            (Some(da), Some(db)) => combine_dims(da, db)?,
            (None, None) => unreachable!("offset bounded by max rank"),
        };
        dims.push(combined);
    }

    dims.reverse();
    Some(Shape::new(dims))
}

/// Combine two dimensions present at the same aligned position.
fn combine_dims(a: &Dim, b: &Dim) -> Option<Dim> {
    match (a, b) {
        (Dim::Static(x), Dim::Static(y)) => {
            if x == y || *x == 1 || *y == 1 {
                Some(Dim::Static(*x.max(y)))
            } else {
                None
            }
        }
        (Dim::Static(1), dynamic @ Dim::Dynamic(_)) => Some(dynamic.clone()),
        (dynamic @ Dim::Dynamic(_), Dim::Static(1)) => Some(dynamic.clone()),
        (Dim::Dynamic(n1), Dim::Dynamic(n2)) => {
            if n1 == n2 {
                Some(a.clone())
            } else {
                None
            }
        }
        _ => None,
    }
}
