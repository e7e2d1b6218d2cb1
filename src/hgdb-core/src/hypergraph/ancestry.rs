//! Containment ancestry and common-ancestor resolution.
//!
//! Only *strict* ancestors are candidates: a node is never considered its own
//! ancestor, so a parent/child pair resolves to the parent's own parent.

use common_error::HgResult;

use super::{Hypergraph, NodeId, NodeSet};

impl Hypergraph {
    /// Strict ancestors of `node`, from its parent up to the root.
    ///
    /// Empty for a root. Finite because containment is acyclic.
    pub fn ancestors_upward(&self, node: NodeId) -> HgResult<NodeSet> {
        let mut ancestors = NodeSet::new();
        let mut parent = self.node(node)?.parent();
        while let Some(current) = parent {
            ancestors.push(current);
            parent = self.node(current)?.parent();
        }
        Ok(ancestors)
    }

    /// Check if `ancestor` is a strict ancestor of `node`.
    pub fn is_ancestor_of(&self, ancestor: NodeId, node: NodeId) -> HgResult<bool> {
        self.node(ancestor)?;
        let mut parent = self.node(node)?.parent();
        while let Some(current) = parent {
            if current == ancestor {
                return Ok(true);
            }
            parent = self.node(current)?.parent();
        }
        Ok(false)
    }

    /// Nearest strict ancestor shared by `x` and `y`.
    ///
    /// Walks the longer ancestor chain (the chain of `y` when both have the
    /// same length) from the bottom and returns the first entry that the
    /// shorter chain contains. `None` when the nodes live in different trees.
    pub fn common_ancestor(&self, x: NodeId, y: NodeId) -> HgResult<Option<NodeId>> {
        let mut shorter = self.ancestors_upward(x)?;
        let mut longer = self.ancestors_upward(y)?;
        if shorter.len() > longer.len() {
            std::mem::swap(&mut shorter, &mut longer);
        }
        Ok(longer.iter().copied().find(|&node| shorter.contains(node)))
    }

    /// Common container of every node in `set`.
    ///
    /// - empty set: `None`
    /// - single node: that node
    /// - otherwise the candidates start as the strict ancestors of the first
    ///   member; each later member is dropped from the candidates when it is
    ///   one of them, and otherwise narrows the candidates to its own strict
    ///   ancestors. The first remaining candidate wins.
    ///
    /// This is the placement rule used by
    /// [`connect_hyperedge`](Self::connect_hyperedge).
    pub fn common_ancestor_of(&self, set: &NodeSet) -> HgResult<Option<NodeId>> {
        for &member in set {
            self.node(member)?;
        }

        let mut members = set.iter().copied();
        let Some(first) = members.next() else {
            return Ok(None);
        };
        if set.len() == 1 {
            return Ok(Some(first));
        }

        let mut candidates = self.ancestors_upward(first)?;
        for member in members {
            if !candidates.remove_first(member) {
                candidates = candidates.intersect(&self.ancestors_upward(member)?);
            }
        }
        Ok(candidates.first())
    }
}
