//! Handle types for graph elements.

use std::fmt;

/// Display label of a node. Labels are not required to be unique.
pub type Label = String;

/// Opaque handle to a node stored in a [`Hypergraph`](crate::Hypergraph).
///
/// A handle is a stable index into the graph arena: nodes are never removed,
/// so a handle stays valid for the lifetime of the graph that issued it. Node
/// identity is handle identity, two nodes with the same label are distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the zero-based arena index of the node.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
