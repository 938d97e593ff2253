use std::fmt;

/// Identity of a figure, unique per allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FigureId(pub u64);

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of figure identities
///
/// Owned by whatever orchestrates figure creation (a board or a session) and
/// passed to every operation that can create a figure.
#[derive(Debug, Default)]
pub struct FigureIdAllocator {
    next: u64,
}

impl FigureIdAllocator {
    /// Create an allocator whose first id is `#0`
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    /// Create an allocator whose first id is `first`
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Hand out the next id
    pub const fn allocate(&mut self) -> FigureId {
        let id = FigureId(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to `allocate` will return
    pub const fn peek(&self) -> FigureId {
        FigureId(self.next)
    }
}
