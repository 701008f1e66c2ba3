//! Utility functions for the IR.
//!
//! Pretty printing for whole expression graphs and simple structural
//! statistics. Shared subgraphs are printed at every use site but counted
//! once in statistics.

use std::collections::HashMap;
use std::fmt::{self, Write};
use std::sync::Arc;

use crate::node::Node;

/// Pretty-print an expression graph to a string, one node per line with
/// children indented beneath their parent.
pub fn pretty_print_node(node: &Arc<Node>) -> String {
    let mut buffer = String::new();
    pretty_print_inner(node, &mut buffer, 0).unwrap();
    buffer
}

fn pretty_print_inner(node: &Arc<Node>, buf: &mut String, indent: usize) -> fmt::Result {
    writeln!(buf, "{}{}", "  ".repeat(indent), node)?;
    for child in node.operands() {
        pretty_print_inner(child, buf, indent + 1)?;
    }
    Ok(())
}

/// Structural statistics for an expression graph.
///
/// Counts are over unique nodes: a child shared by several parents
/// contributes once. `depth` is the longest path from the root to a leaf,
/// counted in nodes (a bare leaf has depth 1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub node_count: usize,
    pub leaf_count: usize,
    pub unary_count: usize,
    pub binary_count: usize,
    pub ternary_count: usize,
    pub depth: usize,
}

/// Compute [`GraphStats`] for the graph rooted at `root`.
pub fn graph_stats(root: &Arc<Node>) -> GraphStats {
    let mut stats = GraphStats::default();
    let mut depths: HashMap<*const Node, usize> = HashMap::new();
    let depth = visit(root, &mut depths, &mut stats);
    stats.depth = depth;
    stats
}

// Memoized by node identity so shared subgraphs are counted once and the
// walk stays linear in the number of unique nodes.
fn visit(
    node: &Arc<Node>,
    depths: &mut HashMap<*const Node, usize>,
    stats: &mut GraphStats,
) -> usize {
    if let Some(&depth) = depths.get(&Arc::as_ptr(node)) {
        return depth;
    }

    stats.node_count += 1;
    match node.as_ref() {
        Node::Leaf { .. } => stats.leaf_count += 1,
        Node::Unary { .. } => stats.unary_count += 1,
        Node::Binary { .. } => stats.binary_count += 1,
        Node::Ternary { .. } => stats.ternary_count += 1,
    }

    let child_depth = node
        .operands()
        .into_iter()
        .map(|child| visit(child, depths, stats))
        .max()
        .unwrap_or(0);
    let depth = child_depth + 1;
    depths.insert(Arc::as_ptr(node), depth);
    depth
}
