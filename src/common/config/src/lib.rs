//! Configuration management for hypergraphdb.
//!
//! Provides the defaults used when rendering nodes and when walking the
//! adjacency relation.

use serde::{Deserialize, Serialize};

/// Global hypergraphdb configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HgConfig {
    /// Rendering configuration.
    pub display: DisplayConfig,
    /// Traversal configuration.
    pub traversal: TraversalConfig,
}

/// Which relation groups the textual form of a node shows.
///
/// Root nodes take these flags from the graph configuration; children inherit
/// them from their parent at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the adjacency group `( .. )`.
    pub show_neighbours: bool,
    /// Show the containment group `[ .. ]`.
    pub show_children: bool,
    /// Show the hyperedge trail group `< .. >`.
    pub show_hyperedge_trail: bool,
    /// Show the hyperedge membership group `{ .. }`.
    pub show_hyperedge_memberships: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_neighbours: true,
            show_children: true,
            show_hyperedge_trail: true,
            show_hyperedge_memberships: true,
        }
    }
}

impl DisplayConfig {
    /// Flags that hide every relation group, leaving only the label.
    pub const fn label_only() -> Self {
        Self {
            show_neighbours: false,
            show_children: false,
            show_hyperedge_trail: false,
            show_hyperedge_memberships: false,
        }
    }
}

/// Traversal configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// When a node is emitted relative to its neighbours.
    pub order: TraversalOrder,
}

/// Emission order of the depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TraversalOrder {
    /// Emit a node after every neighbour reachable from it has been emitted.
    #[default]
    PostOrder,
    /// Emit a node as soon as the traversal enters it.
    PreOrder,
}
