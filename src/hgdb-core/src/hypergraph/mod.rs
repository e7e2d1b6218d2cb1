//! Hypergraph data model.
//!
//! This module provides the core graph primitives:
//! - `NodeId` handles into the node arena
//! - `Node` with containment, adjacency and hyperedge relations
//! - `NodeSet` ordered node collections with set algebra
//! - `Hypergraph` the arena owning every node, with ancestry queries and
//!   textual rendering

mod ancestry;
mod graph;
mod identifiers;
mod node;
mod node_set;
mod render;

pub use graph::Hypergraph;
pub use identifiers::{Label, NodeId};
pub use node::Node;
pub use node_set::{Membership, NodeSet};
pub use render::{ContainmentTree, NodeDisplay, NodeSetDisplay};
