//! Hypergraph container - the arena that owns every node.
//!
//! All structural mutation goes through [`Hypergraph`] so that the three
//! relations stay consistent:
//! - containment is a forest: every child is listed by exactly one parent
//! - adjacency may be cyclic and is never ownership
//! - hyperedge memberships are the exact inverse of hyperedge trails
//!
//! Every handle is validated before any state is touched, so an operation that
//! returns an error leaves the graph unmodified.

use common_config::{DisplayConfig, HgConfig};
use common_error::{HgError, HgResult, ensure};
use log::debug;

use super::{Label, Node, NodeId, NodeSet};

/// The node arena.
///
/// ## Example
///
/// ```rust
/// use hgdb_core::Hypergraph;
///
/// let mut hg = Hypergraph::new();
/// let g = hg.create_root("g");
/// let m = hg.create_child(g, "m").unwrap();
/// let n = hg.create_mutual_adjacent_child(m, "n").unwrap();
///
/// assert_eq!(hg.display(g).unwrap().to_string(), "g [m, n]");
/// assert_eq!(hg.display(n).unwrap().to_string(), "n (m)");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hypergraph {
    nodes: Vec<Node>,
    display: DisplayConfig,
}

impl Hypergraph {
    /// Create an empty hypergraph with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty hypergraph whose roots use the configured display flags.
    pub fn with_config(config: &HgConfig) -> Self {
        Self {
            nodes: Vec::new(),
            display: config.display,
        }
    }

    /// Number of nodes ever created.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no node was created yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if `id` was issued by this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Get a node by handle.
    pub fn node(&self, id: NodeId) -> HgResult<&Node> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| HgError::invalid_node(id.index()))
    }

    fn node_mut(&mut self, id: NodeId) -> HgResult<&mut Node> {
        self.nodes
            .get_mut(id.index())
            .ok_or_else(|| HgError::invalid_node(id.index()))
    }

    /// Label of a node.
    pub fn label(&self, id: NodeId) -> HgResult<&str> {
        self.node(id).map(Node::label)
    }

    /// Handles of every node, in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Handles of every node without a parent, in creation order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_root())
            .map(|(index, _)| NodeId::new(index))
    }

    /// Replace the display flags of a single node.
    pub fn set_display_flags(&mut self, id: NodeId, flags: DisplayConfig) -> HgResult<()> {
        self.node_mut(id)?.display = flags;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a node without a parent.
    pub fn create_root(&mut self, label: impl Into<Label>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(label, self.display));
        id
    }

    /// Create a node nested inside `parent`, appended to its children.
    pub fn create_child(&mut self, parent: NodeId, label: impl Into<Label>) -> HgResult<NodeId> {
        let display = self.node(parent)?.inherited_display(self.display);
        let id = NodeId::new(self.nodes.len());
        let mut node = Node::new(label, display);
        node.parent = Some(parent);
        self.nodes.push(node);
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Create a sibling of `node` (a new child of its parent) and connect
    /// `node` to it.
    ///
    /// A root has no containing scope to place a peer in, which is reported as
    /// [`HgError::NoRelation`].
    pub fn create_adjacent_child(&mut self, node: NodeId, label: impl Into<Label>) -> HgResult<NodeId> {
        let current = self.node(node)?;
        let Some(parent) = current.parent else {
            return Err(HgError::no_relation(format!(
                "cannot place a neighbour of root node '{}'",
                current.label
            )));
        };
        let created = self.create_child(parent, label)?;
        self.node_mut(node)?.neighbours.push(created);
        Ok(created)
    }

    /// Like [`create_adjacent_child`](Self::create_adjacent_child), also
    /// connecting the new node back to `node`.
    pub fn create_mutual_adjacent_child(
        &mut self,
        node: NodeId,
        label: impl Into<Label>,
    ) -> HgResult<NodeId> {
        let created = self.create_adjacent_child(node, label)?;
        self.node_mut(created)?.neighbours.push(node);
        Ok(created)
    }

    /// Connect a new hyperedge node tying `members` together.
    ///
    /// The hyperedge is created as a child of the members' common container
    /// (see [`common_ancestor_of`](Self::common_ancestor_of)); its trail is
    /// exactly `members` and every member records the membership.
    pub fn connect_hyperedge(&mut self, label: impl Into<Label>, members: &NodeSet) -> HgResult<NodeId> {
        let label = label.into();
        let container = self.common_ancestor_of(members)?.ok_or_else(|| {
            HgError::no_common_container(format!(
                "members of hyperedge '{label}' share no container"
            ))
        })?;

        let hyperedge = self.create_child(container, label)?;
        self.node_mut(hyperedge)?.hyperedge_trail = members.clone();
        for &member in members {
            let memberships = &mut self.node_mut(member)?.hyperedge_memberships;
            if !memberships.contains(hyperedge) {
                memberships.push(hyperedge);
            }
        }
        Ok(hyperedge)
    }

    // ------------------------------------------------------------------
    // Adjacency
    // ------------------------------------------------------------------

    /// Add `b` to the neighbours of `a`.
    ///
    /// Returns `Ok(false)` without changes when `b` already is a neighbour.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> HgResult<bool> {
        self.node(b)?;
        if self.node(a)?.neighbours.contains(b) {
            debug!(
                "{} is already a neighbour of {}",
                self.nodes[b.index()].label,
                self.nodes[a.index()].label
            );
            return Ok(false);
        }
        self.node_mut(a)?.neighbours.push(b);
        Ok(true)
    }

    /// Connect `a` and `b` in both directions.
    ///
    /// The call is atomic: when either direction already exists nothing is
    /// changed and `Ok(false)` is returned. Connecting a node to itself adds a
    /// single self loop.
    pub fn connect_mutual(&mut self, a: NodeId, b: NodeId) -> HgResult<bool> {
        if a == b {
            return self.connect(a, a);
        }
        let forward = self.node(a)?.neighbours.contains(b);
        let backward = self.node(b)?.neighbours.contains(a);
        if forward || backward {
            debug!(
                "{} and {} are already connected",
                self.nodes[a.index()].label,
                self.nodes[b.index()].label
            );
            return Ok(false);
        }
        self.node_mut(a)?.neighbours.push(b);
        self.node_mut(b)?.neighbours.push(a);
        Ok(true)
    }

    /// Remove `b` from the neighbours of `a`.
    ///
    /// Returns `Ok(false)` when there was no such edge.
    pub fn disconnect_adjacency(&mut self, a: NodeId, b: NodeId) -> HgResult<bool> {
        self.node(b)?;
        Ok(self.node_mut(a)?.neighbours.remove_first(b))
    }

    // ------------------------------------------------------------------
    // Containment
    // ------------------------------------------------------------------

    /// Move `node` under `new_parent`, appending it to its children.
    ///
    /// Only `node`, its old parent and `new_parent` change. Moving a node
    /// under itself or one of its descendants is rejected with
    /// [`HgError::ContainmentCycle`].
    pub fn reparent(&mut self, node: NodeId, new_parent: NodeId) -> HgResult<()> {
        self.node(node)?;
        self.node(new_parent)?;
        ensure!(
            node != new_parent && !self.is_ancestor_of(node, new_parent)?,
            ContainmentCycle: "cannot move '{}' under its own descendant '{}'",
            self.nodes[node.index()].label,
            self.nodes[new_parent.index()].label
        );

        self.detach(node)?;
        self.node_mut(node)?.parent = Some(new_parent);
        self.node_mut(new_parent)?.children.push(node);
        Ok(())
    }

    /// Turn `node` into a root, removing it from its parent's children.
    ///
    /// No-op for a root. The subtree below `node` moves with it.
    pub fn detach(&mut self, node: NodeId) -> HgResult<()> {
        let Some(parent) = self.node(node)?.parent else {
            debug!("{} is already a root", self.nodes[node.index()].label);
            return Ok(());
        };
        self.node_mut(parent)?.children.remove_first(node);
        self.node_mut(node)?.parent = None;
        Ok(())
    }

    /// Remove `node` from every collection that references it.
    ///
    /// Afterwards `node` is a root with no neighbours, no hyperedge trail and
    /// no memberships, and no other node lists it as child, neighbour, trail
    /// member or membership. Its own children stay nested inside it and keep
    /// it as their parent.
    pub fn disconnect(&mut self, node: NodeId) -> HgResult<()> {
        self.detach(node)?;

        for other in &mut self.nodes {
            other.neighbours.remove_all(node);
        }

        let current = self.node_mut(node)?;
        current.neighbours.clear();
        let memberships = std::mem::take(&mut current.hyperedge_memberships);
        let trail = std::mem::take(&mut current.hyperedge_trail);

        for hyperedge in memberships {
            self.node_mut(hyperedge)?.hyperedge_trail.remove_all(node);
        }
        for member in trail {
            self.node_mut(member)?.hyperedge_memberships.remove_all(node);
        }
        Ok(())
    }
}
