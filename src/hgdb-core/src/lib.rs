//! Core data model for the hypergraphdb store.
//!
//! This crate provides the in-memory node graph:
//! - `Node` and `NodeId` for vertices nested in a containment forest
//! - `NodeSet` for ordered, identity-based node collections
//! - `Hypergraph` for construction, mutation, common-ancestor queries and
//!   rendering
//!
//! Adjacency traversal lives in `hgdb-traversal`.

pub mod hypergraph;
pub mod testing;

pub use hypergraph::{
    ContainmentTree, Hypergraph, Label, Membership, Node, NodeDisplay, NodeId, NodeSet,
    NodeSetDisplay,
};
