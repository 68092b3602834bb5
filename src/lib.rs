//! Free functions over explicit, array-backed trees.
//!
//! A tree is a slice of [`Node`]s, each listing the ids of its children. The
//! representation is permissive: nothing stops two nodes from naming the same
//! child, so every query degrades gracefully on graphs that are not strictly
//! trees. Malformed input never produces an error; queries fall back to an
//! empty, zero or absent answer instead.
//!
//! - [`builders`]: canonical shapes (chain, star, heap-shaped binary tree).
//! - [`metrics`]: edge, leaf and internal-node counts.
//! - [`index`]: dense id lookup tables and root detection.
//! - [`traversal`]: breadth-first order, reachability and depth.
//! - [`forest`]: an arena of handle-linked nodes for code that wants a
//!   materialized tree instead of a flat id list.
//!
//! # Example
//!
//! ```
//! use treegraph::{bfs_order, count_edges, find_root, make_binary_tree, max_depth};
//!
//! let nodes = make_binary_tree(7);
//! assert_eq!(count_edges(&nodes), 6);
//! assert_eq!(find_root(&nodes), Some(0));
//! assert_eq!(bfs_order(&nodes, 0), vec![0, 1, 2, 3, 4, 5, 6]);
//! assert_eq!(max_depth(&nodes, 0), 3);
//! ```

pub mod builders;
pub mod forest;
pub mod index;
pub mod memory;
pub mod metrics;
pub mod traversal;

pub use builders::{make_binary_tree, make_chain, make_star};
pub use index::{find_root, index_by_id, parent_index, IdIndex, ParentIndex};
pub use metrics::{count_edges, count_internal_nodes, count_leaves, count_nodes};
pub use traversal::{bfs_order, count_nodes_reachable, max_depth};

/// Identifier of a node within a collection.
pub type NodeId = usize;

/// A vertex together with the ids of its direct successors.
///
/// The order of `children` is significant: it is the order in which
/// traversals visit them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Node {
    pub id: NodeId,
    pub children: Vec<NodeId>,
}

impl Node {
    /// Creates a node without children.
    #[inline]
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    /// Creates a node with the given children, in order.
    pub fn with_children(id: NodeId, children: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            id,
            children: children.into_iter().collect(),
        }
    }

    /// Whether the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
