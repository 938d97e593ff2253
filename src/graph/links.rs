//! Undirected link graph between block identifiers
//!
//! Links are independent of grid geometry: two blocks can sit next to each
//! other with no link between them. Neighbour sets are ordered so traversals
//! visit neighbours by ascending id.

use crate::spatial::grid::{BlockId, EMPTY};
use std::collections::{BTreeSet, HashMap};

/// Adjacency between block ids, symmetric once [`LinkGraph::mirror`] has run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkGraph {
    adjacency: HashMap<BlockId, BTreeSet<BlockId>>,
}

impl Default for LinkGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkGraph {
    /// Create a graph holding only the empty entry for id 0
    ///
    /// The empty entry lets border lookups against vacant cells go through the
    /// same path as lookups against real blocks.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::from([(EMPTY, BTreeSet::new())]),
        }
    }

    /// Register a block with no links yet
    pub fn add_block(&mut self, id: BlockId) {
        self.adjacency.entry(id).or_default();
    }

    /// Check whether a block has an entry
    pub fn contains_block(&self, id: BlockId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Record `from -> to` without the reverse edge
    ///
    /// Used while building a figure; [`LinkGraph::mirror`] restores symmetry.
    pub fn insert_directed(&mut self, from: BlockId, to: BlockId) {
        self.adjacency.entry(from).or_default().insert(to);
    }

    /// Add the reverse of every recorded edge
    pub fn mirror(&mut self) {
        let edges: Vec<(BlockId, BlockId)> = self
            .adjacency
            .iter()
            .flat_map(|(&from, neighbors)| neighbors.iter().map(move |&to| (to, from)))
            .collect();
        for (from, to) in edges {
            self.insert_directed(from, to);
        }
    }

    /// Link two blocks in both directions
    pub fn link(&mut self, a: BlockId, b: BlockId) {
        self.insert_directed(a, b);
        self.insert_directed(b, a);
    }

    /// Remove the link between two blocks in both directions
    ///
    /// Returns true if a link was removed.
    pub fn unlink(&mut self, a: BlockId, b: BlockId) -> bool {
        let forward = self
            .adjacency
            .get_mut(&a)
            .is_some_and(|neighbors| neighbors.remove(&b));
        let backward = self
            .adjacency
            .get_mut(&b)
            .is_some_and(|neighbors| neighbors.remove(&a));
        forward || backward
    }

    /// Check whether `b` is in `a`'s neighbour set
    ///
    /// # Panics
    ///
    /// Panics if `a` has no entry: every block on a figure's grid must have
    /// one, so a missing entry means the figure is corrupted.
    pub fn is_linked(&self, a: BlockId, b: BlockId) -> bool {
        let neighbors = self.adjacency.get(&a);
        assert!(neighbors.is_some(), "block {a} has no link entry");
        neighbors.is_some_and(|set| set.contains(&b))
    }

    /// Neighbours of a block in ascending order
    pub fn neighbors(&self, id: BlockId) -> impl Iterator<Item = BlockId> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Drop the entry of a block
    pub fn remove_block(&mut self, id: BlockId) {
        if id != EMPTY {
            self.adjacency.remove(&id);
        }
    }

    /// Real block ids with an entry, ascending
    pub fn block_ids(&self) -> Vec<BlockId> {
        let mut ids: Vec<BlockId> = self
            .adjacency
            .keys()
            .copied()
            .filter(|&id| id != EMPTY)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Number of undirected links
    pub fn link_count(&self) -> usize {
        let directed: usize = self.adjacency.values().map(BTreeSet::len).sum();
        directed / 2
    }

    /// Check that every edge has its reverse
    pub fn is_symmetric(&self) -> bool {
        self.adjacency.iter().all(|(&from, neighbors)| {
            neighbors.iter().all(|to| {
                self.adjacency
                    .get(to)
                    .is_some_and(|back| back.contains(&from))
            })
        })
    }
}
