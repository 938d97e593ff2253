//! Dense cell-to-block index for a single figure
//!
//! The grid is stored as an `ndarray` matrix indexed `[x, y]` with `y` growing
//! upwards, so "top" of a cell is `y + 1` and "bottom" is `y - 1`. Iteration is
//! column-major: `x` is the outer loop and `y` the inner one.

use ndarray::Array2;
use std::fmt;

/// Identifier of a block within one figure (0 = no block)
pub type BlockId = u32;

/// The "no block" identifier
pub const EMPTY: BlockId = 0;

/// Grid coordinates of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, growing to the right
    pub x: usize,
    /// Row, growing upwards
    pub y: usize,
}

impl Cell {
    /// Create a cell from its coordinates
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Check whether two cells share an edge
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }

    /// Step one cell in a direction, `None` when leaving the non-negative quadrant
    pub fn step(self, direction: Direction) -> Option<Self> {
        let [dx, dy] = direction.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Self { x, y })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The four edge-sharing directions around a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller `x`
    Left,
    /// Towards larger `y`
    Top,
    /// Towards larger `x`
    Right,
    /// Towards smaller `y`
    Bottom,
}

impl Direction {
    /// All directions in border-code order
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// Coordinate delta `[dx, dy]` of one step
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::Left => [-1, 0],
            Self::Top => [0, 1],
            Self::Right => [1, 0],
            Self::Bottom => [0, -1],
        }
    }
}

/// Axis-aligned bounding box over grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: [usize; 2],
    /// Maximum coordinates (inclusive)
    pub max: [usize; 2],
}

impl BoundingBox {
    /// Check if a cell is within the bounds
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min[0]
            && cell.x <= self.max[0]
            && cell.y >= self.min[1]
            && cell.y <= self.max[1]
    }

    /// Number of columns covered
    pub const fn width(&self) -> usize {
        self.max[0] - self.min[0] + 1
    }

    /// Number of rows covered
    pub const fn height(&self) -> usize {
        self.max[1] - self.min[1] + 1
    }

    /// Grow the box so it covers `cell`
    const fn include(&mut self, cell: Cell) {
        if cell.x < self.min[0] {
            self.min[0] = cell.x;
        }
        if cell.x > self.max[0] {
            self.max[0] = cell.x;
        }
        if cell.y < self.min[1] {
            self.min[1] = cell.y;
        }
        if cell.y > self.max[1] {
            self.max[1] = cell.y;
        }
    }
}

/// Dense grid of block identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    cells: Array2<BlockId>,
}

impl BlockGrid {
    /// Create an empty grid of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::zeros((width, height)),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    /// Check if a cell lies inside the grid
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width() && cell.y < self.height()
    }

    /// Block at a cell, `None` when out of bounds
    pub fn get(&self, cell: Cell) -> Option<BlockId> {
        self.cells.get([cell.x, cell.y]).copied()
    }

    /// Block at a cell with out-of-bounds cells reading as [`EMPTY`]
    pub fn id_or_empty(&self, cell: Cell) -> BlockId {
        self.get(cell).unwrap_or(EMPTY)
    }

    /// Block one step away from `cell`, [`EMPTY`] past the grid edge
    pub fn neighbor_id(&self, cell: Cell, direction: Direction) -> BlockId {
        cell.step(direction)
            .map_or(EMPTY, |neighbor| self.id_or_empty(neighbor))
    }

    /// Store a block at a cell
    ///
    /// Returns false if the cell is out of bounds
    pub fn set(&mut self, cell: Cell, id: BlockId) -> bool {
        match self.cells.get_mut([cell.x, cell.y]) {
            Some(slot) => {
                *slot = id;
                true
            }
            None => false,
        }
    }

    /// Lazily enumerate occupied cells in column-major order
    ///
    /// The sequence is side-effect free; calling this again restarts it.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Cell, BlockId)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &id)| id != EMPTY)
            .map(|((x, y), &id)| (Cell::new(x, y), id))
    }

    /// Find the cell holding a block
    pub fn find(&self, id: BlockId) -> Option<Cell> {
        if id == EMPTY {
            return None;
        }
        self.occupied_cells()
            .find(|&(_, candidate)| candidate == id)
            .map(|(cell, _)| cell)
    }

    /// Count occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&id| id != EMPTY).count()
    }

    /// Minimal box covering every occupied cell whose id satisfies `keep`
    pub fn bounding_box<F>(&self, keep: F) -> Option<BoundingBox>
    where
        F: Fn(BlockId) -> bool,
    {
        let mut bounds: Option<BoundingBox> = None;
        for (cell, id) in self.occupied_cells() {
            if !keep(id) {
                continue;
            }
            match bounds.as_mut() {
                Some(existing) => existing.include(cell),
                None => {
                    bounds = Some(BoundingBox {
                        min: [cell.x, cell.y],
                        max: [cell.x, cell.y],
                    });
                }
            }
        }
        bounds
    }

    /// Copy the blocks selected by `keep` inside `bounds` into a new grid
    ///
    /// Coordinates are shifted by `-bounds.min`. Cells whose id is rejected
    /// become [`EMPTY`], even when they lie inside the box.
    pub fn trimmed<F>(&self, bounds: &BoundingBox, keep: F) -> Self
    where
        F: Fn(BlockId) -> bool,
    {
        let mut trimmed = Self::new(bounds.width(), bounds.height());
        for (cell, id) in self.occupied_cells() {
            if bounds.contains(cell) && keep(id) {
                let shifted = Cell::new(cell.x - bounds.min[0], cell.y - bounds.min[1]);
                trimmed.set(shifted, id);
            }
        }
        trimmed
    }
}
