//! Pull-style depth-first cursor.
//!
//! [`DepthFirst`] turns the recursive depth-first search into an explicit
//! state machine: a stack of `(node, next neighbour)` frames plus the set of
//! nodes already emitted. Every call to [`DepthFirst::next_node`] runs the
//! machine until it can emit one node and then returns, so the caller decides
//! when to resume.
//!
//! Two sets keep the walk finite on cyclic adjacency:
//! - *visited*: nodes already emitted
//! - *path*: nodes currently on the stack
//!
//! A neighbour is only descended into when it is in neither. Self loops and
//! back edges to the path are therefore skipped rather than followed.

use std::collections::HashSet;
use std::fmt;
use std::iter::FusedIterator;

use common_config::{TraversalConfig, TraversalOrder};
use common_error::{HgError, HgResult};
use hgdb_core::{NodeId, NodeSet};
use log::trace;

use crate::context::ContextStack;
use crate::source::AdjacencySource;

/// Depth-first traversal over the adjacency relation of one start node.
///
/// Every node reachable from the start node is emitted exactly once. In the
/// default [`TraversalOrder::PostOrder`] a node is emitted only after all of
/// its explorable neighbours; [`TraversalOrder::PreOrder`] emits a node when
/// the traversal enters it.
///
/// The cursor is single-consumer and cannot be restarted: once it returns
/// `None` it keeps returning `None`. Create a new cursor for a new traversal.
///
/// ## Example
///
/// ```rust
/// use hgdb_core::Hypergraph;
/// use hgdb_traversal::DepthFirst;
///
/// let mut hg = Hypergraph::new();
/// let g = hg.create_root("g");
/// let a = hg.create_child(g, "a").unwrap();
/// let b = hg.create_adjacent_child(a, "b").unwrap();
/// let c = hg.create_adjacent_child(b, "c").unwrap();
///
/// let order: Vec<_> = DepthFirst::new(&hg, a).unwrap().collect();
/// assert_eq!(order, vec![c, b, a]);
/// ```
pub struct DepthFirst<G> {
    graph: G,
    start: NodeId,
    order: TraversalOrder,
    stack: ContextStack,
    visited: HashSet<NodeId>,
    start_pending: bool,
}

impl<G: AdjacencySource> DepthFirst<G> {
    /// Create a post-order traversal starting at `start`.
    pub fn new(graph: G, start: NodeId) -> HgResult<Self> {
        Self::with_order(graph, start, TraversalOrder::PostOrder)
    }

    /// Create a traversal using the configured order.
    pub fn with_config(graph: G, start: NodeId, config: &TraversalConfig) -> HgResult<Self> {
        Self::with_order(graph, start, config.order)
    }

    /// Create a traversal with an explicit emission order.
    pub fn with_order(graph: G, start: NodeId, order: TraversalOrder) -> HgResult<Self> {
        if !graph.has_node(start) {
            return Err(HgError::invalid_node(start.index()));
        }
        let mut stack = ContextStack::default();
        stack.push(start);
        Ok(Self {
            graph,
            start,
            order,
            stack,
            visited: HashSet::new(),
            start_pending: order == TraversalOrder::PreOrder,
        })
    }

    /// Advance the traversal to the next emitted node.
    ///
    /// Returns `None` once every reachable node has been emitted, and on every
    /// call after that.
    pub fn next_node(&mut self) -> Option<NodeId> {
        if self.start_pending {
            self.start_pending = false;
            self.visited.insert(self.start);
            trace!("emit {} (pre-order start)", self.start);
            return Some(self.start);
        }

        loop {
            let top = self.stack.top()?;
            let next = self.graph.next_unexplored(
                top.node,
                top.next_neighbour,
                &[&self.visited, self.stack.path_set()],
            );

            match next {
                Some((position, neighbour)) => {
                    self.stack.advance_top(position + 1);
                    self.stack.push(neighbour);
                    trace!("push {neighbour} from {} (depth {})", top.node, self.stack.depth());
                    if self.order == TraversalOrder::PreOrder {
                        self.visited.insert(neighbour);
                        return Some(neighbour);
                    }
                }
                None => {
                    self.stack.pop();
                    if self.order == TraversalOrder::PostOrder {
                        self.visited.insert(top.node);
                        trace!("emit {}", top.node);
                        return Some(top.node);
                    }
                }
            }
        }
    }

    /// The node the traversal started from.
    pub const fn start(&self) -> NodeId {
        self.start
    }

    /// The emission order of this traversal.
    pub const fn order(&self) -> TraversalOrder {
        self.order
    }

    /// Nodes on the current exploration path, start node first.
    pub fn path(&self) -> NodeSet {
        self.stack.path()
    }

    /// Number of nodes emitted so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Check if every reachable node has been emitted.
    pub fn is_exhausted(&self) -> bool {
        self.stack.is_empty() && !self.start_pending
    }
}

impl<G: AdjacencySource> Iterator for DepthFirst<G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node()
    }
}

impl<G: AdjacencySource> FusedIterator for DepthFirst<G> {}

impl<G> fmt::Debug for DepthFirst<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepthFirst")
            .field("start", &self.start)
            .field("order", &self.order)
            .field("stack", &self.stack)
            .field("visited", &self.visited.len())
            .finish_non_exhaustive()
    }
}
