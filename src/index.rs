//! Dense id-keyed lookup tables over a node collection.
//!
//! Both tables have one slot per id in `0..=max(id)`, so their size is driven
//! by the largest id in the collection rather than by the number of nodes.
//! They are rebuilt on every call; keep the returned value around when
//! querying repeatedly.
use std::fmt::{self, Debug};

use crate::memory::DenseMap;
use crate::{Node, NodeId};

/// Number of slots needed to address every id in `nodes`.
fn table_len(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| node.id)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

/// Maps node ids to the node carrying that id.
#[derive(Clone, PartialEq, Eq)]
pub struct IdIndex<'a> {
    slots: DenseMap<NodeId, Option<&'a Node>>,
}

impl<'a> IdIndex<'a> {
    /// Returns the node with the given id, or `None` when the id is out of
    /// range or no node carries it.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&'a Node> {
        self.slots[id]
    }

    /// Whether a node with the given id exists.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of slots, i.e. `max(id) + 1`, or `0` for an empty collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over all slots in id order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Option<&'a Node>)> + '_ {
        self.slots.iter().map(|(id, node)| (id, *node))
    }
}

impl<'a> Debug for IdIndex<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().filter_map(|(id, node)| Some((id, node?))))
            .finish()
    }
}

/// Maps node ids to the id of a node listing them as a child.
#[derive(Clone, PartialEq, Eq)]
pub struct ParentIndex {
    slots: DenseMap<NodeId, Option<NodeId>>,
}

impl ParentIndex {
    /// Returns the recorded parent of `id`, if any.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<NodeId> {
        self.slots[id]
    }

    /// Whether `id` falls within the table's bounds.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots.contains(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over all slots in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Option<NodeId>)> + '_ {
        self.slots.iter().map(|(id, parent)| (id, *parent))
    }
}

impl Debug for ParentIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().filter_map(|(id, parent)| Some((id, parent?))))
            .finish()
    }
}

/// Builds the id to node table.
///
/// When several nodes share an id, the one appearing last in `nodes` wins.
///
/// # Example
///
/// ```
/// # use treegraph::{index_by_id, Node};
/// let nodes = vec![Node::new(3), Node::new(0)];
/// let index = index_by_id(&nodes);
/// assert_eq!(index.len(), 4);
/// assert_eq!(index.get(3), Some(&nodes[0]));
/// assert_eq!(index.get(1), None);
/// ```
pub fn index_by_id(nodes: &[Node]) -> IdIndex<'_> {
    let mut slots = DenseMap::with_len(table_len(nodes));

    for node in nodes {
        slots[node.id] = Some(node);
    }

    IdIndex { slots }
}

/// Builds the child to parent table.
///
/// A child id listed by more than one node keeps the parent encountered last
/// in a forward pass over `nodes`. Child ids beyond the largest node id are
/// ignored.
pub fn parent_index(nodes: &[Node]) -> ParentIndex {
    let mut slots = DenseMap::with_len(table_len(nodes));

    for node in nodes {
        for &child in &node.children {
            if slots.contains(child) {
                slots[child] = Some(node.id);
            }
        }
    }

    ParentIndex { slots }
}

/// Returns the id of the unique node without a parent.
///
/// Returns `None` for an empty collection, when every node has a parent, or
/// when more than one node is parentless.
pub fn find_root(nodes: &[Node]) -> Option<NodeId> {
    if nodes.is_empty() {
        return None;
    }

    let parents = parent_index(nodes);
    let mut root = None;

    for node in nodes {
        if !parents.contains(node.id) || parents.get(node.id).is_some() {
            continue;
        }

        if let Some(first) = root {
            tracing::debug!(first, second = node.id, "ambiguous root");
            return None;
        }
        root = Some(node.id);
    }

    root
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{make_binary_tree, make_chain, make_star};
    use rstest::rstest;

    #[test]
    fn empty_collection() {
        let nodes: Vec<Node> = Vec::new();
        assert!(index_by_id(&nodes).is_empty());
        assert!(parent_index(&nodes).is_empty());
        assert_eq!(find_root(&nodes), None);
    }

    #[test]
    fn index_sized_by_max_id() {
        let nodes = vec![Node::new(5), Node::new(2)];
        let index = index_by_id(&nodes);
        assert_eq!(index.len(), 6);
        assert_eq!(index.get(5).map(|n| n.id), Some(5));
        assert!(!index.contains(0));
        assert!(!index.contains(6));
        assert_eq!(index.iter().filter(|(_, n)| n.is_some()).count(), 2);
    }

    #[test]
    fn index_last_duplicate_wins() {
        let nodes = vec![Node::with_children(1, [0]), Node::new(0), Node::new(1)];
        let index = index_by_id(&nodes);
        assert!(index.get(1).is_some_and(Node::is_leaf));
    }

    #[test]
    fn parent_last_writer_wins() {
        let nodes = vec![
            Node::with_children(0, [2]),
            Node::with_children(1, [2]),
            Node::new(2),
        ];
        let parents = parent_index(&nodes);
        assert_eq!(parents.get(2), Some(1));
        assert_eq!(parents.get(0), None);
    }

    #[test]
    fn parent_ignores_out_of_range_children() {
        let nodes = vec![Node::with_children(0, [1, 9]), Node::new(1)];
        let parents = parent_index(&nodes);
        assert_eq!(parents.len(), 2);
        assert_eq!(parents.get(1), Some(0));
        assert_eq!(parents.get(9), None);
    }

    #[rstest]
    #[case(make_chain(1), Some(0))]
    #[case(make_chain(6), Some(0))]
    #[case(make_star(4), Some(0))]
    #[case(make_binary_tree(9), Some(0))]
    fn root_of_builders(#[case] nodes: Vec<Node>, #[case] root: Option<NodeId>) {
        assert_eq!(find_root(&nodes), root);
    }

    #[test]
    fn two_disjoint_chains_have_no_root() {
        let nodes = vec![
            Node::with_children(0, [1]),
            Node::new(1),
            Node::with_children(2, [3]),
            Node::new(3),
        ];
        assert_eq!(find_root(&nodes), None);
    }

    #[test]
    fn cycle_has_no_root() {
        let nodes = vec![Node::with_children(0, [1]), Node::with_children(1, [0])];
        assert_eq!(find_root(&nodes), None);
    }

    #[test]
    fn root_need_not_be_first() {
        let nodes = vec![Node::new(1), Node::with_children(0, [1])];
        assert_eq!(find_root(&nodes), Some(0));
    }

    #[test]
    fn queries_are_repeatable() {
        let nodes = make_binary_tree(10);
        assert_eq!(parent_index(&nodes), parent_index(&nodes));
        assert_eq!(find_root(&nodes), find_root(&nodes));
    }
}
