use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use thiserror::Error;

use crate::entity_impl;
use crate::index::index_by_id;
use crate::memory::{DenseMap, EntityIndex};
use crate::{Node, NodeId};

/// Handle to a node in a [`Forest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeRef(u32);

entity_impl!(NodeRef, u32);

/// An arena of nodes arranged into trees.
///
/// Each node carries a weight of type `T`, an optional parent and an ordered
/// list of children. Attaching maintains the forest shape: a node has at most
/// one parent and no node is its own ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forest<T> {
    nodes: Vec<NodeData<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeData<T> {
    weight: T,
    /// The parent of the node, if any.
    parent: Option<NodeRef>,
    /// The children of the node in order.
    children: Vec<NodeRef>,
}

impl<T> Forest<T> {
    /// Creates a new empty forest.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates a new empty forest with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Adds a detached node, which becomes a new root.
    ///
    /// # Panics
    ///
    /// Panics when the forest would hold more than `u32::MAX + 1` nodes.
    pub fn add_node(&mut self, weight: T) -> NodeRef {
        let node = NodeRef::new(self.nodes.len());
        self.nodes.push(NodeData {
            weight,
            parent: None,
            children: Vec::new(),
        });
        node
    }

    /// Adds a node as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Fails when `parent` is not part of the forest; nothing is added then.
    pub fn add_child(&mut self, parent: NodeRef, weight: T) -> Result<NodeRef, AttachError> {
        if !self.contains(parent) {
            return Err(AttachError::UnknownNode(parent));
        }

        let node = self.add_node(weight);
        self.link(node, parent);
        Ok(node)
    }

    /// Attaches a root node as the last child of a parent node.
    ///
    /// # Errors
    ///
    ///  - When either node is not part of the forest.
    ///  - When the node is already attached.
    ///  - When the attachment would introduce a cycle.
    pub fn attach_last(&mut self, node: NodeRef, parent: NodeRef) -> Result<(), AttachError> {
        for handle in [node, parent] {
            if !self.contains(handle) {
                return Err(AttachError::UnknownNode(handle));
            }
        }

        if self.nodes[node.index()].parent.is_some() {
            return Err(AttachError::AlreadyAttached);
        } else if self.is_ancestor(node, parent) {
            return Err(AttachError::Cycle);
        }

        self.link(node, parent);
        Ok(())
    }

    /// Detaches a node from its parent, returning the former parent.
    ///
    /// Does nothing and returns `None` when the node is a root or unknown.
    pub fn detach(&mut self, node: NodeRef) -> Option<NodeRef> {
        let parent = self.nodes.get_mut(node.index())?.parent.take()?;
        let siblings = &mut self.nodes[parent.index()].children;

        if let Some(position) = siblings.iter().position(|&child| child == node) {
            siblings.remove(position);
        }

        Some(parent)
    }

    /// Whether `ancestor` lies on the path from `node` up to its root,
    /// `node` itself included.
    fn is_ancestor(&self, ancestor: NodeRef, mut node: NodeRef) -> bool {
        loop {
            if node == ancestor {
                return true;
            }

            match self.parent(node) {
                Some(next) => node = next,
                None => return false,
            }
        }
    }

    /// Links two known nodes without checking the forest shape.
    fn link(&mut self, node: NodeRef, parent: NodeRef) {
        self.nodes[node.index()].parent = Some(parent);
        self.nodes[parent.index()].children.push(node);
    }

    /// Whether the handle refers to a node of this forest.
    #[inline]
    pub fn contains(&self, node: NodeRef) -> bool {
        node.index() < self.nodes.len()
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the forest has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Borrows a node's weight.
    #[inline]
    pub fn weight(&self, node: NodeRef) -> Option<&T> {
        self.nodes.get(node.index()).map(|data| &data.weight)
    }

    /// Mutably borrows a node's weight.
    #[inline]
    pub fn weight_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        self.nodes.get_mut(node.index()).map(|data| &mut data.weight)
    }

    /// Returns a node's parent or `None` if it is a root or unknown.
    #[inline]
    pub fn parent(&self, node: NodeRef) -> Option<NodeRef> {
        self.nodes.get(node.index())?.parent
    }

    /// Returns a node's children in order. Unknown nodes have none.
    #[inline]
    pub fn children(&self, node: NodeRef) -> &[NodeRef] {
        self.nodes
            .get(node.index())
            .map_or(&[], |data| data.children.as_slice())
    }

    /// Returns the number of the node's children.
    #[inline]
    pub fn child_count(&self, node: NodeRef) -> usize {
        self.children(node).len()
    }

    /// Iterates over all node handles in insertion order.
    pub fn node_refs(&self) -> impl ExactSizeIterator<Item = NodeRef> + FusedIterator {
        (0..self.nodes.len()).map(NodeRef::new)
    }

    /// Iterates over the nodes without a parent, in insertion order.
    pub fn roots(&self) -> Roots<'_, T> {
        Roots {
            inner: self.nodes.iter().enumerate(),
        }
    }
}

impl Forest<NodeId> {
    /// Materializes the part of `nodes` reachable from `root` as a tree whose
    /// weights are the original ids.
    ///
    /// Children are attached in breadth-first order. A node listed as the
    /// child of several nodes is attached once, under the first parent that
    /// reaches it; child ids without a matching node are skipped.
    ///
    /// Returns an empty forest and `None` when `root` does not name a node.
    pub fn from_nodes(nodes: &[Node], root: NodeId) -> (Self, Option<NodeRef>) {
        let index = index_by_id(nodes);
        if !index.contains(root) {
            return (Self::new(), None);
        }

        let mut forest = Self::with_capacity(nodes.len());
        let mut handles: DenseMap<NodeId, Option<NodeRef>> = DenseMap::with_len(index.len());
        let root_ref = forest.add_node(root);
        handles[root] = Some(root_ref);

        let mut next = 0;
        while next < forest.len() {
            let parent = NodeRef::new(next);
            next += 1;

            let Some(node) = index.get(forest[parent]) else {
                continue;
            };

            for &child in &node.children {
                if index.contains(child) && handles[child].is_none() {
                    let handle = forest.add_node(child);
                    forest.link(handle, parent);
                    handles[child] = Some(handle);
                }
            }
        }

        (forest, Some(root_ref))
    }
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeRef> for Forest<T> {
    type Output = T;

    fn index(&self, node: NodeRef) -> &Self::Output {
        &self.nodes[node.index()].weight
    }
}

impl<T> IndexMut<NodeRef> for Forest<T> {
    fn index_mut(&mut self, node: NodeRef) -> &mut Self::Output {
        &mut self.nodes[node.index()].weight
    }
}

pub struct Roots<'a, T> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, NodeData<T>>>,
}

impl<'a, T> Iterator for Roots<'a, T> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .find(|(_, data)| data.parent.is_none())
            .map(|(index, _)| NodeRef::new(index))
    }
}

impl<'a, T> FusedIterator for Roots<'a, T> {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    #[error("node {0:?} is not part of the forest")]
    UnknownNode(NodeRef),
    #[error("the node is already attached")]
    AlreadyAttached,
    #[error("attaching the node would introduce a cycle")]
    Cycle,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{make_binary_tree, make_chain};

    #[test]
    fn attach_keeps_child_order() {
        let mut forest = Forest::new();
        let root = forest.add_node(0);
        let a = forest.add_node(1);
        let b = forest.add_node(2);

        forest.attach_last(b, root).unwrap();
        forest.attach_last(a, root).unwrap();

        assert_eq!(forest.children(root), [b, a]);
        assert_eq!(forest.parent(a), Some(root));
        assert!(forest.roots().eq([root]));
    }

    #[test]
    fn attach_errors() {
        let mut forest = Forest::new();
        let root = forest.add_node(());
        let child = forest.add_child(root, ()).unwrap();
        let other = forest.add_node(());

        assert_eq!(forest.attach_last(child, other), Err(AttachError::AlreadyAttached));
        assert_eq!(forest.attach_last(root, child), Err(AttachError::Cycle));
        assert_eq!(forest.attach_last(other, other), Err(AttachError::Cycle));

        let unknown = NodeRef::new(10);
        assert_eq!(forest.attach_last(unknown, root), Err(AttachError::UnknownNode(unknown)));
        assert_eq!(forest.add_child(unknown, ()), Err(AttachError::UnknownNode(unknown)));
        assert_eq!(forest.len(), 3);
    }

    #[test]
    fn detach_makes_root() {
        let mut forest = Forest::new();
        let root = forest.add_node('r');
        let a = forest.add_child(root, 'a').unwrap();
        let b = forest.add_child(root, 'b').unwrap();

        assert_eq!(forest.detach(a), Some(root));
        assert_eq!(forest.detach(a), None);
        assert_eq!(forest.children(root), [b]);
        assert!(forest.roots().eq([root, a]));

        forest.attach_last(root, a).unwrap();
        assert!(forest.roots().eq([a]));
    }

    #[test]
    fn unknown_handles_are_empty() {
        let forest = Forest::<u8>::new();
        let node = NodeRef::new(3);
        assert!(!forest.contains(node));
        assert_eq!(forest.weight(node), None);
        assert_eq!(forest.parent(node), None);
        assert!(forest.children(node).is_empty());
    }

    #[test]
    fn from_nodes_mirrors_tree() {
        let (forest, root) = Forest::from_nodes(&make_binary_tree(7), 0);
        let root = root.unwrap();

        assert_eq!(forest.len(), 7);
        let children: Vec<_> = forest.children(root).iter().map(|&c| forest[c]).collect();
        assert_eq!(children, [1, 2]);
    }

    #[test]
    fn from_nodes_attaches_shared_children_once() {
        let nodes = vec![
            Node::with_children(0, [1, 2]),
            Node::with_children(1, [3]),
            Node::with_children(2, [3, 0, 8]),
            Node::new(3),
        ];
        let (forest, root) = Forest::from_nodes(&nodes, 0);

        assert_eq!(forest.len(), 4);
        let three = forest.node_refs().find(|&n| forest[n] == 3).unwrap();
        assert_eq!(forest.parent(three).map(|p| forest[p]), Some(1));
        assert!(forest.roots().eq(root));
    }

    #[test]
    fn from_nodes_missing_root() {
        let (forest, root) = Forest::from_nodes(&make_chain(3), 5);
        assert!(forest.is_empty());
        assert_eq!(root, None);
    }
}
