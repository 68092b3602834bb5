use std::iter::FusedIterator;

use super::arena::{Forest, NodeRef};

/// A root handle that is absent or not part of the forest is an empty tree.
#[inline]
fn resolve<T>(forest: &Forest<T>, root: Option<NodeRef>) -> Option<NodeRef> {
    root.filter(|&root| forest.contains(root))
}

/// Iterates over the tree below `root` in preorder: a node, then each of its
/// children's subtrees in order.
pub fn preorder<T>(forest: &Forest<T>, root: Option<NodeRef>) -> Preorder<'_, T> {
    Preorder {
        forest,
        stack: resolve(forest, root).into_iter().collect(),
    }
}

/// Number of nodes in the tree below `root`, or `0` when `root` is absent.
pub fn count_nodes<T>(forest: &Forest<T>, root: Option<NodeRef>) -> usize {
    preorder(forest, root).count()
}

/// Number of nodes on the longest path from `root` down to a leaf.
///
/// A lone root has depth 1, an absent root depth 0.
pub fn max_depth<T>(forest: &Forest<T>, root: Option<NodeRef>) -> usize {
    let mut stack: Vec<(NodeRef, usize)> = resolve(forest, root)
        .map(|root| (root, 1))
        .into_iter()
        .collect();
    let mut deepest = 0;

    while let Some((node, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        stack.extend(forest.children(node).iter().map(|&child| (child, depth + 1)));
    }

    deepest
}

/// Number of childless nodes in the tree below `root`.
pub fn count_leaves<T>(forest: &Forest<T>, root: Option<NodeRef>) -> usize {
    preorder(forest, root)
        .filter(|&node| forest.child_count(node) == 0)
        .count()
}

/// Calls `visit` with every node of the tree below `root` and its weight, in
/// preorder.
pub fn for_each_preorder<T, F>(forest: &Forest<T>, root: Option<NodeRef>, mut visit: F)
where
    F: FnMut(NodeRef, &T),
{
    for node in preorder(forest, root) {
        visit(node, &forest[node]);
    }
}

/// Iterator created by [`preorder`].
#[derive(Debug, Clone)]
pub struct Preorder<'a, T> {
    forest: &'a Forest<T>,
    /// Pending subtree roots, the next one on top.
    stack: Vec<NodeRef>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(self.forest.children(node).iter().rev().copied());
        Some(node)
    }
}

impl<'a, T> FusedIterator for Preorder<'a, T> {}
