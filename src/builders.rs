//! Constructors for canonical tree shapes.
//!
//! Every builder allocates exactly `n` nodes with ids `0..n`, stored at the
//! position matching their id.
use crate::{Node, NodeId};

fn unlinked(n: usize) -> Vec<Node> {
    (0..n).map(Node::new).collect()
}

/// Builds a path `0 -> 1 -> ... -> n-1`.
///
/// # Example
///
/// ```
/// # use treegraph::make_chain;
/// let nodes = make_chain(3);
/// assert_eq!(nodes[0].children, [1]);
/// assert_eq!(nodes[1].children, [2]);
/// assert!(nodes[2].is_leaf());
/// ```
pub fn make_chain(n: usize) -> Vec<Node> {
    let mut nodes = unlinked(n);

    for (id, node) in nodes.iter_mut().enumerate().take(n.saturating_sub(1)) {
        node.children.push(id + 1);
    }

    nodes
}

/// Builds a star with hub `0` whose children are `1..n` in ascending order.
///
/// Returns an empty collection for `n == 0`.
pub fn make_star(n: usize) -> Vec<Node> {
    let mut nodes = unlinked(n);

    if let Some(hub) = nodes.first_mut() {
        hub.children.extend(1..n);
    }

    nodes
}

/// Builds a heap-shaped binary tree: node `i` has children `2i+1` and `2i+2`,
/// left before right, whenever they are below `n`.
pub fn make_binary_tree(n: usize) -> Vec<Node> {
    let mut nodes = unlinked(n);

    for (id, node) in nodes.iter_mut().enumerate() {
        let left: NodeId = 2 * id + 1;
        let right: NodeId = 2 * id + 2;
        node.children.extend([left, right].into_iter().filter(|&child| child < n));
    }

    nodes
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(17)]
    fn builders_allocate_dense_ids(#[case] n: usize) {
        for nodes in [make_chain(n), make_star(n), make_binary_tree(n)] {
            assert_eq!(nodes.len(), n);
            assert!(nodes.iter().enumerate().all(|(pos, node)| node.id == pos));
        }
    }

    #[test]
    fn chain_links_successors() {
        let nodes = make_chain(5);
        assert_eq!(nodes[0].children, [1]);
        assert_eq!(nodes[3].children, [4]);
        assert!(nodes[4].is_leaf());
    }

    #[test]
    fn single_node_shapes_are_leaves() {
        assert!(make_chain(1)[0].is_leaf());
        assert!(make_star(1)[0].is_leaf());
        assert!(make_binary_tree(1)[0].is_leaf());
    }

    #[test]
    fn star_hub_lists_all_others() {
        let nodes = make_star(4);
        assert_eq!(nodes[0].children, [1, 2, 3]);
        assert!(nodes[1..].iter().all(Node::is_leaf));
    }

    #[test]
    fn binary_tree_heap_layout() {
        let nodes = make_binary_tree(7);
        assert_eq!(nodes[0].children, [1, 2]);
        assert_eq!(nodes[1].children, [3, 4]);
        assert_eq!(nodes[2].children, [5, 6]);
        assert!(nodes[6].is_leaf());
    }

    #[test]
    fn binary_tree_partial_last_level() {
        let nodes = make_binary_tree(6);
        assert_eq!(nodes[2].children, [5]);
        assert!(nodes[3].is_leaf());
    }
}
