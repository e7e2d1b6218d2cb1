//! Exploration stack of the depth-first traversal.

use std::collections::HashSet;

use hgdb_core::{NodeId, NodeSet};

/// One level of the explicit depth-first stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    pub(crate) node: NodeId,
    /// Position in `node`'s neighbour list of the next neighbour to try.
    pub(crate) next_neighbour: usize,
}

/// Frames of the current path, with constant-time path membership.
///
/// A node is on the path from the moment it is pushed until it is popped;
/// that is what keeps cycles from being re-entered before the node is
/// emitted and marked visited.
#[derive(Debug, Clone, Default)]
pub(crate) struct ContextStack {
    frames: Vec<Frame>,
    on_path: HashSet<NodeId>,
}

impl ContextStack {
    pub(crate) fn push(&mut self, node: NodeId) {
        self.frames.push(Frame {
            node,
            next_neighbour: 0,
        });
        self.on_path.insert(node);
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        let frame = self.frames.pop()?;
        self.on_path.remove(&frame.node);
        Some(frame.node)
    }

    pub(crate) fn top(&self) -> Option<Frame> {
        self.frames.last().copied()
    }

    /// Move the cursor of the deepest frame.
    pub(crate) fn advance_top(&mut self, next_neighbour: usize) {
        if let Some(frame) = self.frames.last_mut() {
            frame.next_neighbour = next_neighbour;
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    pub(crate) const fn path_set(&self) -> &HashSet<NodeId> {
        &self.on_path
    }

    /// Nodes on the path, from the start node down to the deepest frame.
    pub(crate) fn path(&self) -> NodeSet {
        self.frames.iter().map(|frame| frame.node).collect()
    }
}
