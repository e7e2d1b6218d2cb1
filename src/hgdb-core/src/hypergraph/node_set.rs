//! Ordered node collections and their set algebra.

use std::collections::HashSet;
use std::hash::BuildHasher;

use super::NodeId;

/// Identity membership test over a collection of node handles.
///
/// [`NodeSet`] answers in linear time; hash sets answer in constant time and
/// are what the traversal engine keeps its exploration state in.
pub trait Membership {
    /// Check if `node` is part of the collection.
    fn contains_node(&self, node: NodeId) -> bool;
}

/// An ordered sequence of node handles.
///
/// Insertion order is preserved and duplicates are permitted. A `NodeSet` is a
/// value-like view and never owns the nodes it refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeSet(Vec<NodeId>);

impl NodeSet {
    /// Create an empty set.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the handles in order.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.0.iter()
    }

    /// The handles as a slice.
    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }

    /// Handle at `index`.
    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.0.get(index).copied()
    }

    /// First handle, if any.
    pub fn first(&self) -> Option<NodeId> {
        self.0.first().copied()
    }

    /// Append a handle.
    pub fn push(&mut self, node: NodeId) {
        self.0.push(node);
    }

    /// Check if `node` is present.
    pub fn contains(&self, node: NodeId) -> bool {
        self.0.contains(&node)
    }

    /// Position of the first occurrence of `node`.
    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.0.iter().position(|&n| n == node)
    }

    /// Remove the first occurrence of `node`, keeping the order of the rest.
    pub fn remove_first(&mut self, node: NodeId) -> bool {
        match self.position(node) {
            Some(position) => {
                self.0.remove(position);
                true
            }
            None => false,
        }
    }

    /// Remove every occurrence of `node`, returning how many were removed.
    pub fn remove_all(&mut self, node: NodeId) -> usize {
        let before = self.0.len();
        self.0.retain(|&n| n != node);
        before - self.0.len()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Nodes of `self` that are also in `other`.
    ///
    /// Order and duplicates follow `self`.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let present: HashSet<NodeId> = other.iter().copied().collect();
        self.iter().copied().filter(|n| present.contains(n)).collect()
    }

    /// `self` followed by the nodes of `other` that `self` does not contain.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let present: HashSet<NodeId> = self.iter().copied().collect();
        let mut union = self.clone();
        let mut added = HashSet::new();
        for &node in other {
            if !present.contains(&node) && added.insert(node) {
                union.push(node);
            }
        }
        union
    }

    /// Nodes of `self` that are not in `other`, order following `self`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let excluded: HashSet<NodeId> = other.iter().copied().collect();
        self.iter().copied().filter(|n| !excluded.contains(n)).collect()
    }

    /// First node that none of the `excluded` collections contains.
    pub fn first_not_in(&self, excluded: &[&dyn Membership]) -> Option<NodeId> {
        self.first_not_in_from(0, excluded).map(|(_, node)| node)
    }

    /// Like [`first_not_in`](Self::first_not_in), scanning from `start` and
    /// returning the position of the match as well.
    pub fn first_not_in_from(
        &self,
        start: usize,
        excluded: &[&dyn Membership],
    ) -> Option<(usize, NodeId)> {
        self.0
            .iter()
            .copied()
            .enumerate()
            .skip(start)
            .find(|&(_, node)| !excluded.iter().any(|set| set.contains_node(node)))
    }
}

impl Membership for NodeSet {
    fn contains_node(&self, node: NodeId) -> bool {
        self.contains(node)
    }
}

impl<S: BuildHasher> Membership for HashSet<NodeId, S> {
    fn contains_node(&self, node: NodeId) -> bool {
        self.contains(&node)
    }
}

impl From<Vec<NodeId>> for NodeSet {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self(nodes)
    }
}

impl<const N: usize> From<[NodeId; N]> for NodeSet {
    fn from(nodes: [NodeId; N]) -> Self {
        Self(nodes.to_vec())
    }
}

impl FromIterator<NodeId> for NodeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<NodeId> for NodeSet {
    fn extend<I: IntoIterator<Item = NodeId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for NodeSet {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeSet {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::Range<usize>) -> Vec<NodeId> {
        range.map(NodeId::new).collect()
    }

    #[test]
    fn test_first_not_in() {
        let n = ids(0..9);
        let (x, y, z) = (n[0], n[1], n[2]);
        let search = NodeSet::from([x, y, z]);
        let set1 = NodeSet::from([n[3], n[4], n[5]]);
        let set2 = NodeSet::from([n[6], n[7], n[8]]);

        assert_eq!(search.first_not_in(&[&set2, &set1]), Some(x));
    }

    #[test]
    fn test_first_not_in_skips_excluded_head() {
        let n = ids(0..8);
        let (x, y, z) = (n[0], n[1], n[2]);
        let search = NodeSet::from([x, y, z]);
        let set1 = NodeSet::from([n[3], n[4], n[5]]);
        let set2 = NodeSet::from([n[6], n[7], x]);

        assert_eq!(search.first_not_in(&[&set2, &set1]), Some(y));
    }

    #[test]
    fn test_first_not_in_all_excluded() {
        let n = ids(0..6);
        let search = NodeSet::from([n[0], n[4], n[2]]);
        let set1 = NodeSet::from([n[0], n[1], n[2]]);
        let set2 = NodeSet::from([n[3], n[4], n[5]]);

        assert_eq!(search.first_not_in(&[&set2, &set1]), None);
    }

    #[test]
    fn test_first_not_in_from_cursor_with_hash_set() {
        let n = ids(0..4);
        let search = NodeSet::from(n.clone());
        let visited: HashSet<NodeId> = [n[2]].into_iter().collect();

        assert_eq!(search.first_not_in_from(1, &[&visited]), Some((1, n[1])));
        assert_eq!(search.first_not_in_from(2, &[&visited]), Some((3, n[3])));
        assert_eq!(search.first_not_in_from(4, &[&visited]), None);
    }

    #[test]
    fn test_intersect_follows_left_order_and_duplicates() {
        let n = ids(0..4);
        let left = NodeSet::from([n[2], n[0], n[2], n[3]]);
        let right = NodeSet::from([n[3], n[2], n[1]]);

        assert_eq!(left.intersect(&right), NodeSet::from([n[2], n[2], n[3]]));
        assert!(left.intersect(&NodeSet::new()).is_empty());
    }

    #[test]
    fn test_union_and_difference() {
        let n = ids(0..4);
        let left = NodeSet::from([n[0], n[1]]);
        let right = NodeSet::from([n[1], n[2], n[2], n[3]]);

        assert_eq!(left.union(&right), NodeSet::from([n[0], n[1], n[2], n[3]]));
        assert_eq!(right.difference(&left), NodeSet::from([n[2], n[2], n[3]]));
    }

    #[test]
    fn test_removal() {
        let n = ids(0..3);
        let mut set = NodeSet::from([n[0], n[1], n[0], n[2]]);

        assert!(set.remove_first(n[0]));
        assert_eq!(set, NodeSet::from([n[1], n[0], n[2]]));
        assert_eq!(set.remove_all(n[0]), 1);
        assert!(!set.remove_first(n[0]));
        assert_eq!(set.position(n[2]), Some(1));
    }
}
