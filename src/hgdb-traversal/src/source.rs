//! Read access to the adjacency relation.
//!
//! The traversal engine never touches node state directly; it asks an
//! [`AdjacencySource`] for the next neighbour worth exploring. The trait is
//! implemented for [`Hypergraph`] and forwarded through references, `Arc`
//! and `parking_lot::RwLock`, so the same engine walks a borrowed graph from
//! the calling thread or a shared graph from a background task.

use std::sync::Arc;

use hgdb_core::{Hypergraph, Membership, NodeId};
use parking_lot::RwLock;

/// A graph shared between a writer and background traversals.
pub type SharedHypergraph = Arc<RwLock<Hypergraph>>;

/// Source of adjacency information for the traversal engine.
pub trait AdjacencySource {
    /// Check if `node` is a valid handle for this source.
    fn has_node(&self, node: NodeId) -> bool;

    /// First neighbour of `node`, at list position `from` or later, that no
    /// `excluded` collection contains, together with its position.
    ///
    /// Unknown nodes have no neighbours.
    fn next_unexplored(
        &self,
        node: NodeId,
        from: usize,
        excluded: &[&dyn Membership],
    ) -> Option<(usize, NodeId)>;
}

impl AdjacencySource for Hypergraph {
    fn has_node(&self, node: NodeId) -> bool {
        self.contains(node)
    }

    fn next_unexplored(
        &self,
        node: NodeId,
        from: usize,
        excluded: &[&dyn Membership],
    ) -> Option<(usize, NodeId)> {
        self.node(node)
            .ok()?
            .neighbours()
            .first_not_in_from(from, excluded)
    }
}

impl<G: AdjacencySource + ?Sized> AdjacencySource for &G {
    fn has_node(&self, node: NodeId) -> bool {
        (**self).has_node(node)
    }

    fn next_unexplored(
        &self,
        node: NodeId,
        from: usize,
        excluded: &[&dyn Membership],
    ) -> Option<(usize, NodeId)> {
        (**self).next_unexplored(node, from, excluded)
    }
}

impl<G: AdjacencySource + ?Sized> AdjacencySource for Arc<G> {
    fn has_node(&self, node: NodeId) -> bool {
        (**self).has_node(node)
    }

    fn next_unexplored(
        &self,
        node: NodeId,
        from: usize,
        excluded: &[&dyn Membership],
    ) -> Option<(usize, NodeId)> {
        (**self).next_unexplored(node, from, excluded)
    }
}

/// The read lock is held for a single lookup, so writers can interleave
/// between traversal steps.
impl<G: AdjacencySource + ?Sized> AdjacencySource for RwLock<G> {
    fn has_node(&self, node: NodeId) -> bool {
        self.read().has_node(node)
    }

    fn next_unexplored(
        &self,
        node: NodeId,
        from: usize,
        excluded: &[&dyn Membership],
    ) -> Option<(usize, NodeId)> {
        self.read().next_unexplored(node, from, excluded)
    }
}
