//! Node representation.

use common_config::DisplayConfig;

use super::{Label, NodeId, NodeSet};

/// A vertex of the hypergraph.
///
/// A node takes part in three relations at once:
/// - containment: `parent` / `children`, a forest of nested sub-graphs
/// - adjacency: `neighbours`, directed edges that may form cycles
/// - hyperedges: a node created by
///   [`connect_hyperedge`](crate::Hypergraph::connect_hyperedge) carries a
///   `hyperedge_trail` of members, and every member lists it in its
///   `hyperedge_memberships`
///
/// Nodes are only mutated through [`Hypergraph`](crate::Hypergraph), which
/// keeps the relations consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) label: Label,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: NodeSet,
    pub(crate) neighbours: NodeSet,
    pub(crate) hyperedge_trail: NodeSet,
    pub(crate) hyperedge_memberships: NodeSet,
    pub(crate) display: DisplayConfig,
}

impl Node {
    pub(crate) fn new(label: impl Into<Label>, display: DisplayConfig) -> Self {
        Self {
            label: label.into(),
            parent: None,
            children: NodeSet::new(),
            neighbours: NodeSet::new(),
            hyperedge_trail: NodeSet::new(),
            hyperedge_memberships: NodeSet::new(),
            display,
        }
    }

    /// The display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The containing node, `None` for a root.
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Nodes nested directly inside this node.
    pub const fn children(&self) -> &NodeSet {
        &self.children
    }

    /// Adjacency targets, in connection order.
    pub const fn neighbours(&self) -> &NodeSet {
        &self.neighbours
    }

    /// Members tied together by this node when it is a hyperedge.
    pub const fn hyperedge_trail(&self) -> &NodeSet {
        &self.hyperedge_trail
    }

    /// Hyperedges whose trail includes this node.
    pub const fn hyperedge_memberships(&self) -> &NodeSet {
        &self.hyperedge_memberships
    }

    /// Which relation groups the textual form shows.
    pub const fn display_flags(&self) -> DisplayConfig {
        self.display
    }

    /// Check if this node has no parent.
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if this node was created as a hyperedge.
    pub fn is_hyperedge(&self) -> bool {
        !self.hyperedge_trail.is_empty()
    }

    /// Check if this node has no children, neighbours or trail.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.neighbours.is_empty() && self.hyperedge_trail.is_empty()
    }

    /// Flags inherited by a child created under this node.
    ///
    /// Membership visibility is not inherited; it comes from the graph
    /// default.
    pub(crate) const fn inherited_display(&self, defaults: DisplayConfig) -> DisplayConfig {
        DisplayConfig {
            show_neighbours: self.display.show_neighbours,
            show_children: self.display.show_children,
            show_hyperedge_trail: self.display.show_hyperedge_trail,
            show_hyperedge_memberships: defaults.show_hyperedge_memberships,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_root_leaf() {
        let node = Node::new("a", DisplayConfig::default());
        assert_eq!(node.label(), "a");
        assert!(node.is_root());
        assert!(node.is_leaf());
        assert!(!node.is_hyperedge());
    }

    #[test]
    fn test_inherited_display_keeps_default_memberships() {
        let mut parent = Node::new("g", DisplayConfig::label_only());
        parent.display.show_children = true;

        let inherited = parent.inherited_display(DisplayConfig::default());
        assert!(inherited.show_children);
        assert!(!inherited.show_neighbours);
        assert!(!inherited.show_hyperedge_trail);
        assert!(inherited.show_hyperedge_memberships);
    }
}
