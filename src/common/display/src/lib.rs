//! Display utilities for hypergraphdb.
//!
//! Provides box-drawing rendering for hierarchical structures such as the
//! containment tree of a hypergraph.

mod tree;

pub use tree::{DisplayTree, TreeNode};
