use crate::spatial::grid::BlockId;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset for tracking block membership in a component
///
/// Uses 1-based indexing to match block identifiers; the empty id 0 is never
/// a member. Provides O(1) membership testing and cheap set algebra.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockBitset {
    bits: BitVec,
    capacity: BlockId,
}

impl BlockBitset {
    /// Create a bitset with room for ids `1..=capacity` and no members
    pub fn new(capacity: BlockId) -> Self {
        Self {
            bits: bitvec![0; capacity as usize],
            capacity,
        }
    }

    /// Highest id this set can hold
    pub const fn capacity(&self) -> BlockId {
        self.capacity
    }

    /// Insert a block id
    ///
    /// Returns true if the id was not yet present. Ids outside
    /// `1..=capacity` are ignored.
    pub fn insert(&mut self, id: BlockId) -> bool {
        if id == 0 || id > self.capacity {
            return false;
        }
        let index = (id - 1) as usize;
        let was_set = self.bits.get(index).as_deref() == Some(&true);
        self.bits.set(index, true);
        !was_set
    }

    /// Test block membership
    pub fn contains(&self, id: BlockId) -> bool {
        if id > 0 {
            self.bits.get((id - 1) as usize).as_deref() == Some(&true)
        } else {
            false
        }
    }

    /// Test if no blocks are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count blocks in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if the two sets share no block
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let mut shared = self.bits.clone();
        shared &= &other.bits;
        shared.not_any()
    }

    /// Iterate member ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.bits.iter_ones().map(|index| index as BlockId + 1)
    }

    /// Extract all member ids as a vector
    pub fn to_vec(&self) -> Vec<BlockId> {
        self.iter().collect()
    }
}

impl fmt::Display for BlockBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockBitset({} blocks: {:?})", self.count(), self.to_vec())
    }
}
