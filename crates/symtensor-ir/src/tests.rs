//! Unit tests for the IR.

use std::sync::Arc;

use crate::{
    broadcast, BinaryOp, DataType, Dim, IrError, Node, Shape, TernaryOp, UnaryOp,
};

fn f32_leaf(extents: &[u64]) -> Arc<Node> {
    Node::leaf(
        extents.iter().map(|&e| Dim::Static(e)).collect::<Vec<_>>(),
        DataType::Float32,
    )
}

#[test]
fn test_leaf_and_scalar_constructors() {
    let leaf = Node::leaf(
        vec![Dim::Static(2), Dim::dynamic("batch_size")],
        DataType::Float32,
    );
    assert_eq!(leaf.rank(), 2);
    assert_eq!(leaf.dtype(), DataType::Float32);

    let scalar = Node::scalar(DataType::Float32);
    assert_eq!(scalar.rank(), 0);
    assert_eq!(scalar.shape(), &Shape::scalar());
}

#[test]
fn test_application_result_matches_broadcast_engine() {
    let lhs = f32_leaf(&[1, 4, 1]);
    let rhs = f32_leaf(&[3, 1, 5]);
    let mul = BinaryOp::new("mul", DataType::Float32, DataType::Float32, DataType::Float32);

    let out = mul.apply(&lhs, &rhs).unwrap();
    let expected = broadcast(&[lhs.shape().clone(), rhs.shape().clone()]).unwrap();
    assert_eq!(out.shape(), &expected);
    assert_eq!(out.dtype(), DataType::Float32);
}

#[test]
fn test_operands_are_stored_unchanged() {
    let lhs = f32_leaf(&[2, 3]);
    let rhs = f32_leaf(&[3]);
    let add = BinaryOp::new("add", DataType::Float32, DataType::Float32, DataType::Float32);

    let out = add.apply(&lhs, &rhs).unwrap();
    match out.as_ref() {
        Node::Binary { left, right, .. } => {
            assert!(Arc::ptr_eq(left, &lhs));
            assert!(Arc::ptr_eq(right, &rhs));
        }
        other => panic!("expected a binary node, got {}", other),
    }
}

#[test]
fn test_shared_leaf_untouched_by_two_parents() {
    let shared = f32_leaf(&[2, 3]);
    let shape_before = shared.shape().clone();
    let dtype_before = shared.dtype();

    let relu = UnaryOp::new("relu", DataType::Float32, DataType::Float32);
    let neg = UnaryOp::new("neg", DataType::Float32, DataType::Float32);
    let a = relu.apply(&shared).unwrap();
    let b = neg.apply(&shared).unwrap();

    assert_eq!(shared.shape(), &shape_before);
    assert_eq!(shared.dtype(), dtype_before);
    for parent in [&a, &b] {
        assert!(Arc::ptr_eq(parent.operands()[0], &shared));
    }
}

#[test]
fn test_failed_application_produces_no_node() {
    let add = BinaryOp::new("add", DataType::Float32, DataType::Float32, DataType::Float32);
    let result = add.apply(&f32_leaf(&[2, 3]), &f32_leaf(&[4, 5]));
    assert!(result.is_err());
}

#[test]
fn test_dtype_error_wins_over_shape_error_for_every_arity() {
    let relu = UnaryOp::new("relu", DataType::Float32, DataType::Float32);
    let int_input = Node::leaf(vec![Dim::Static(2)], DataType::Int32);
    assert!(matches!(
        relu.apply(&int_input),
        Err(IrError::DtypeMismatch { position: 1, .. })
    ));

    let add = BinaryOp::new("add", DataType::Float32, DataType::Float32, DataType::Float32);
    assert!(matches!(
        add.apply(
            &f32_leaf(&[2, 3]),
            &Node::leaf(vec![Dim::Static(4), Dim::Static(5)], DataType::Int32),
        ),
        Err(IrError::DtypeMismatch { position: 2, .. })
    ));

    let select = TernaryOp::new(
        "where",
        DataType::Bool,
        DataType::Float32,
        DataType::Float32,
        DataType::Float32,
    );
    assert!(matches!(
        select.apply(
            &Node::leaf(vec![Dim::Static(2)], DataType::Bool),
            &f32_leaf(&[2]),
            &Node::leaf(vec![Dim::Static(9)], DataType::Int64),
        ),
        Err(IrError::DtypeMismatch { position: 3, .. })
    ));
}

#[test]
fn test_fold_order_matters_with_dynamic_axes() {
    let batch = Shape::from(vec![Dim::dynamic("batch")]);
    let one = Shape::from(vec![Dim::Static(1)]);
    let sequence = Shape::from(vec![Dim::dynamic("sequence")]);

    // (batch ⊕ one) ⊕ sequence fails at the second step...
    assert_eq!(broadcast(&[batch.clone(), one.clone(), sequence.clone()]), None);
    // ...while a reordering that pairs each dynamic axis with the size-1
    // axis first would see different intermediates. Fold order is part of
    // the contract.
    assert_eq!(
        broadcast(&[one.clone(), batch.clone()]),
        Some(batch.clone())
    );
    assert_eq!(broadcast(&[one, sequence.clone()]), Some(sequence));
}

#[test]
fn test_deep_graph_construction() {
    let add = BinaryOp::new("add", DataType::Float32, DataType::Float32, DataType::Float32);
    let mut node = f32_leaf(&[8, 8]);
    let bias = f32_leaf(&[8]);

    for _ in 0..100 {
        node = add.apply(&node, &bias).unwrap();
    }

    assert_eq!(node.shape(), &Shape::from(vec![Dim::Static(8), Dim::Static(8)]));
    let stats = crate::graph_stats(&node);
    assert_eq!(stats.binary_count, 100);
    assert_eq!(stats.leaf_count, 2);
    assert_eq!(stats.depth, 101);
}

#[test]
fn test_serde_round_trip_preserves_graph() {
    let add = BinaryOp::new("add", DataType::Float32, DataType::Float32, DataType::Float32);
    let graph = add
        .apply(
            &Node::leaf(vec![Dim::dynamic("batch"), Dim::Static(3)], DataType::Float32),
            &f32_leaf(&[3]),
        )
        .unwrap();

    let json = serde_json::to_string(&graph).unwrap();
    let restored: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, graph.as_ref());
}

#[test]
fn test_descriptor_serde_round_trip() {
    let select = TernaryOp::new(
        "where",
        DataType::Bool,
        DataType::Float32,
        DataType::Float32,
        DataType::Float32,
    );
    let json = serde_json::to_string(&select).unwrap();
    let restored: TernaryOp = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, select);
}
