//! Textual rendering of nodes, node sets and the containment tree.
//!
//! A node renders as its label followed by the non-empty, visible relation
//! groups in a fixed order:
//!
//! ```text
//! label (neighbours) [children] <hyperedge trail> {hyperedge memberships}
//! ```
//!
//! Each group lists member labels joined by `", "`. A node set renders as
//! `[` + the rendering of every member joined by `", "` + `]`.

use std::fmt;

use common_display::{DisplayTree, TreeNode};
use common_error::HgResult;

use super::{Hypergraph, Node, NodeId, NodeSet};

/// Display adapter for a single node.
pub struct NodeDisplay<'a> {
    graph: &'a Hypergraph,
    node: &'a Node,
}

/// Display adapter for a [`NodeSet`].
pub struct NodeSetDisplay<'a> {
    graph: &'a Hypergraph,
    set: &'a NodeSet,
}

/// Containment tree view rooted at one node, drawn by [`DisplayTree`].
pub struct ContainmentTree<'a> {
    graph: &'a Hypergraph,
    id: NodeId,
}

impl Hypergraph {
    /// Textual form of a node.
    pub fn display(&self, id: NodeId) -> HgResult<NodeDisplay<'_>> {
        Ok(NodeDisplay {
            graph: self,
            node: self.node(id)?,
        })
    }

    /// Textual form of a node set.
    pub fn display_set<'a>(&'a self, set: &'a NodeSet) -> HgResult<NodeSetDisplay<'a>> {
        for &member in set {
            self.node(member)?;
        }
        Ok(NodeSetDisplay { graph: self, set })
    }

    /// Containment tree below `root`.
    pub fn containment_tree(&self, root: NodeId) -> HgResult<ContainmentTree<'_>> {
        self.node(root)?;
        Ok(ContainmentTree { graph: self, id: root })
    }

    /// Render the containment tree below `root` with box-drawing connectors.
    pub fn render_containment(&self, root: NodeId) -> HgResult<String> {
        let tree = self.containment_tree(root)?;
        Ok(DisplayTree::new(&tree).to_string())
    }

    fn label_or_empty(&self, id: NodeId) -> &str {
        self.node(id).map_or("", Node::label)
    }
}

impl NodeDisplay<'_> {
    fn write_group(&self, f: &mut fmt::Formatter<'_>, set: &NodeSet, open: char, close: char) -> fmt::Result {
        write!(f, " {open}")?;
        for (i, &member) in set.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(self.graph.label_or_empty(member))?;
        }
        write!(f, "{close}")
    }
}

impl fmt::Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node;
        let flags = node.display;
        f.write_str(&node.label)?;

        let groups = [
            (flags.show_neighbours, &node.neighbours, '(', ')'),
            (flags.show_children, &node.children, '[', ']'),
            (flags.show_hyperedge_trail, &node.hyperedge_trail, '<', '>'),
            (flags.show_hyperedge_memberships, &node.hyperedge_memberships, '{', '}'),
        ];
        for (visible, set, open, close) in groups {
            if visible && !set.is_empty() {
                self.write_group(f, set, open, close)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for NodeSetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, &member) in self.set.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if let Ok(node) = self.graph.display(member) {
                write!(f, "{node}")?;
            }
        }
        f.write_str("]")
    }
}

impl TreeNode for ContainmentTree<'_> {
    fn name(&self) -> String {
        self.graph.label_or_empty(self.id).to_string()
    }

    fn children(&self) -> Vec<Box<dyn TreeNode + '_>> {
        self.graph
            .node(self.id)
            .map(|node| {
                node.children()
                    .iter()
                    .map(|&id| {
                        Box::new(ContainmentTree {
                            graph: self.graph,
                            id,
                        }) as Box<dyn TreeNode + '_>
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn details(&self) -> Option<String> {
        let node = self.graph.node(self.id).ok()?;
        if !node.is_hyperedge() {
            return None;
        }
        let members: Vec<&str> = node
            .hyperedge_trail()
            .iter()
            .map(|&id| self.graph.label_or_empty(id))
            .collect();
        Some(format!("hyperedge: {}", members.join(", ")))
    }
}
