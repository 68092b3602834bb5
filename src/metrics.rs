//! Structural counts over a whole node collection.
//!
//! These look at every node in the slice, reachable or not.
use crate::Node;

/// Sum of the children list lengths.
///
/// Duplicate child ids and self-loops are counted as stored.
pub fn count_edges(nodes: &[Node]) -> usize {
    nodes.iter().map(|node| node.children.len()).sum()
}

/// Number of nodes without children.
pub fn count_leaves(nodes: &[Node]) -> usize {
    nodes.iter().filter(|node| node.is_leaf()).count()
}

/// Number of nodes with at least one child.
///
/// Together with [`count_leaves`] this always adds up to `nodes.len()`.
pub fn count_internal_nodes(nodes: &[Node]) -> usize {
    nodes.iter().filter(|node| !node.is_leaf()).count()
}

/// Number of nodes in the collection.
#[inline]
pub fn count_nodes(nodes: &[Node]) -> usize {
    nodes.len()
}
