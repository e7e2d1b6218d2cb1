//! Testing utilities and fixtures for hypergraphdb.
//!
//! The fixtures build the small graphs the traversal and ancestry suites keep
//! coming back to, and track their nodes by name so assertions can be written
//! against labels.

use std::collections::HashMap;

use crate::hypergraph::{Hypergraph, NodeId, NodeSet};

/// Test fixture builder for common hypergraph shapes.
#[derive(Debug, Clone, Default)]
pub struct HypergraphFixture {
    hypergraph: Hypergraph,
    nodes: HashMap<String, NodeId>,
}

impl HypergraphFixture {
    /// Create a new empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Root `g`, child `a`, and `b`, `c`, `d` created as mutual adjacent
    /// children of `a`.
    pub fn mutual_star() -> Self {
        let mut fixture = Self::new();
        let g = fixture.root("g");
        let a = fixture.child(g, "a");
        for label in ["b", "c", "d"] {
            fixture.mutual_adjacent_child(a, label);
        }
        fixture
    }

    /// `a -> b -> c -> d`, each node created as the adjacent child of the
    /// previous one, all nested in `g`.
    pub fn adjacency_chain() -> Self {
        let mut fixture = Self::new();
        let g = fixture.root("g");
        let mut previous = fixture.child(g, "a");
        for label in ["b", "c", "d"] {
            previous = fixture.adjacent_child(previous, label);
        }
        fixture
    }

    /// Siblings `a`, `b`, `c` under `g`, every pair connected both ways.
    ///
    /// Neighbour order: `a: [b, c]`, `b: [c, a]`, `c: [a, b]`.
    pub fn triangle() -> Self {
        let mut fixture = Self::new();
        let g = fixture.root("g");
        let a = fixture.child(g, "a");
        let b = fixture.child(g, "b");
        let c = fixture.child(g, "c");
        for (from, to) in [(a, b), (a, c), (b, c), (b, a), (c, a), (c, b)] {
            fixture.connect(from, to);
        }
        fixture
    }

    /// `size` siblings under `g`, each mutually connected to every earlier
    /// one. The last created node is tracked as `last`.
    pub fn fully_connected(size: usize) -> Self {
        let mut fixture = Self::new();
        let g = fixture.root("g");
        let mut previous = NodeSet::new();
        for index in 0..size {
            let node = fixture.child(g, &format!("{index:8}"));
            for &earlier in &previous {
                let _ = fixture.hypergraph.connect_mutual(node, earlier);
            }
            previous.push(node);
            fixture.nodes.insert("last".to_string(), node);
        }
        fixture
    }

    /// Add a root and track it by label.
    pub fn root(&mut self, label: &str) -> NodeId {
        let id = self.hypergraph.create_root(label);
        self.track(label, id)
    }

    /// Add a child and track it by label.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to the fixture graph.
    pub fn child(&mut self, parent: NodeId, label: &str) -> NodeId {
        let id = self
            .hypergraph
            .create_child(parent, label)
            .unwrap_or_else(|e| panic!("fixture child {label}: {e}"));
        self.track(label, id)
    }

    /// Add an adjacent child and track it by label.
    ///
    /// # Panics
    ///
    /// Panics if `node` is a root or does not belong to the fixture graph.
    pub fn adjacent_child(&mut self, node: NodeId, label: &str) -> NodeId {
        let id = self
            .hypergraph
            .create_adjacent_child(node, label)
            .unwrap_or_else(|e| panic!("fixture adjacent child {label}: {e}"));
        self.track(label, id)
    }

    /// Add a mutual adjacent child and track it by label.
    ///
    /// # Panics
    ///
    /// Panics if `node` is a root or does not belong to the fixture graph.
    pub fn mutual_adjacent_child(&mut self, node: NodeId, label: &str) -> NodeId {
        let id = self
            .hypergraph
            .create_mutual_adjacent_child(node, label)
            .unwrap_or_else(|e| panic!("fixture mutual adjacent child {label}: {e}"));
        self.track(label, id)
    }

    /// Connect `from` to `to`, ignoring edges that already exist.
    pub fn connect(&mut self, from: NodeId, to: NodeId) {
        let _ = self.hypergraph.connect(from, to);
    }

    fn track(&mut self, label: &str, id: NodeId) -> NodeId {
        self.nodes.insert(label.to_string(), id);
        id
    }

    /// Handle of a tracked node.
    ///
    /// # Panics
    ///
    /// Panics if no node was tracked under `name`.
    pub fn id(&self, name: &str) -> NodeId {
        self.nodes
            .get(name)
            .copied()
            .unwrap_or_else(|| panic!("fixture has no node named {name}"))
    }

    /// Handles of several tracked nodes, in the given order.
    pub fn ids(&self, names: &[&str]) -> Vec<NodeId> {
        names.iter().map(|name| self.id(name)).collect()
    }

    /// Labels of the given handles, for readable assertions.
    pub fn labels(&self, ids: impl IntoIterator<Item = NodeId>) -> Vec<String> {
        ids.into_iter()
            .map(|id| self.hypergraph.label(id).unwrap_or_default().to_string())
            .collect()
    }

    /// Get the hypergraph.
    pub const fn hypergraph(&self) -> &Hypergraph {
        &self.hypergraph
    }

    /// Get the hypergraph mutably.
    pub const fn hypergraph_mut(&mut self) -> &mut Hypergraph {
        &mut self.hypergraph
    }

    /// Consume the fixture, keeping the hypergraph.
    pub fn into_hypergraph(self) -> Hypergraph {
        self.hypergraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutual_star_shape() {
        let fixture = HypergraphFixture::mutual_star();
        let hg = fixture.hypergraph();
        let a = fixture.id("a");

        assert_eq!(hg.display(a).unwrap().to_string(), "a (b, c, d)");
        assert_eq!(hg.display(fixture.id("g")).unwrap().to_string(), "g [a, b, c, d]");
    }

    #[test]
    fn test_fully_connected_degree() {
        let fixture = HypergraphFixture::fully_connected(5);
        let last = fixture.id("last");
        assert_eq!(fixture.hypergraph().node(last).unwrap().neighbours().len(), 4);
    }
}
