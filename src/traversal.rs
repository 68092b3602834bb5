//! Breadth-first queries rooted at a given id.
//!
//! Traversals keep a visited set so that shared children and cycles are
//! emitted at most once. A node is marked visited when it is enqueued, not
//! when it is dequeued. Child ids without a matching node are skipped.
use std::collections::VecDeque;

use bitvec::vec::BitVec;

use crate::index::{index_by_id, IdIndex};
use crate::{Node, NodeId};

/// Breadth-first walk over an [`IdIndex`], yielding `(id, depth)` pairs with
/// the root at depth 1.
struct Bfs<'a> {
    index: IdIndex<'a>,
    queue: VecDeque<(NodeId, usize)>,
    visited: BitVec,
}

impl<'a> Bfs<'a> {
    /// Returns `None` when `root` does not name a node in `nodes`.
    fn new(nodes: &'a [Node], root: NodeId) -> Option<Self> {
        let index = index_by_id(nodes);
        if !index.contains(root) {
            tracing::trace!(root, "traversal root not found");
            return None;
        }

        let mut visited: BitVec = BitVec::repeat(false, index.len());
        visited.set(root, true);

        let mut queue = VecDeque::with_capacity(nodes.len());
        queue.push_back((root, 1));

        Some(Self {
            index,
            queue,
            visited,
        })
    }
}

impl<'a> Iterator for Bfs<'a> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.queue.pop_front()?;

        if let Some(node) = self.index.get(id) {
            for &child in &node.children {
                if self.index.contains(child) && !self.visited.replace(child, true) {
                    self.queue.push_back((child, depth + 1));
                }
            }
        }

        Some((id, depth))
    }
}

/// Returns the ids reachable from `root` in breadth-first order.
///
/// Children are enqueued in their stored order. Returns an empty vector when
/// `root` does not name a node in `nodes`.
///
/// # Example
///
/// ```
/// # use treegraph::{bfs_order, make_star};
/// assert_eq!(bfs_order(&make_star(4), 0), vec![0, 1, 2, 3]);
/// assert!(bfs_order(&make_star(4), 7).is_empty());
/// ```
pub fn bfs_order(nodes: &[Node], root: NodeId) -> Vec<NodeId> {
    Bfs::new(nodes, root)
        .map(|bfs| bfs.map(|(id, _)| id).collect())
        .unwrap_or_default()
}

/// Number of distinct nodes reachable from `root`, including `root` itself.
pub fn count_nodes_reachable(nodes: &[Node], root: NodeId) -> usize {
    Bfs::new(nodes, root).map_or(0, |bfs| bfs.count())
}

/// Number of levels below and including `root`, counting the root as depth 1.
///
/// Each node is assigned the depth at which it is first reached. Returns `0`
/// when `root` does not name a node in `nodes`.
pub fn max_depth(nodes: &[Node], root: NodeId) -> usize {
    Bfs::new(nodes, root)
        .and_then(|bfs| bfs.map(|(_, depth)| depth).max())
        .unwrap_or(0)
}
