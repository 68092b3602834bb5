//! Trees materialized as an arena of handle-linked nodes.
//!
//! Every node has an ordered collection of child nodes and at most one parent.
//! Nodes that have not been attached to a parent are roots. Nodes are
//! addressed by [`NodeRef`] handles instead of references, so a forest can be
//! freely moved and cloned.
//!
//! The queries in this module mirror the recursive definitions of node count,
//! depth and leaf count but walk the tree with an explicit stack, so arbitrarily
//! deep trees do not exhaust the call stack.
//!
//! # Example
//!
//! ```
//! use treegraph::forest::{self, Forest};
//!
//! let mut tree = Forest::new();
//! let root = tree.add_node("root");
//! let a = tree.add_child(root, "a").unwrap();
//! tree.add_child(a, "b").unwrap();
//! tree.add_child(root, "c").unwrap();
//!
//! assert_eq!(forest::count_nodes(&tree, Some(root)), 4);
//! assert_eq!(forest::max_depth(&tree, Some(root)), 3);
//! assert_eq!(forest::count_leaves(&tree, Some(root)), 2);
//!
//! let mut names = Vec::new();
//! forest::for_each_preorder(&tree, Some(root), |_, name| names.push(*name));
//! assert_eq!(names, ["root", "a", "b", "c"]);
//! ```
mod arena;
mod traversal;

pub use arena::{AttachError, Forest, NodeRef, Roots};
pub use traversal::{count_leaves, count_nodes, for_each_preorder, max_depth, preorder, Preorder};
