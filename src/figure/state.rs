//! The figure aggregate: grid index, link graph and presentation handles

use crate::figure::allocator::FigureId;
use crate::figure::presenter::Category;
use crate::graph::links::LinkGraph;
use crate::graph::traversal::is_connected;
use crate::io::error::{Result, invalid_cell};
use crate::spatial::grid::{BlockGrid, BlockId, Cell, EMPTY};
use std::collections::HashMap;

/// A grid-shaped collection of linked blocks
///
/// `H` is the presenter's handle type. The grid's dimensions are the figure's
/// current bounding dimensions and shrink when the figure splits.
#[derive(Debug)]
pub struct Figure<H> {
    pub(crate) id: FigureId,
    pub(crate) grid: BlockGrid,
    pub(crate) links: LinkGraph,
    /// Highest block id ever assigned in this figure's numbering
    pub(crate) id_range: BlockId,
    pub(crate) category: Category,
    pub(crate) visuals: HashMap<BlockId, H>,
}

impl<H> Figure<H> {
    /// Identity of this figure
    pub const fn id(&self) -> FigureId {
        self.id
    }

    /// Current bounding width
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Current bounding height
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Display name, e.g. `Figure #3 2x1`
    pub fn name(&self) -> String {
        format!("Figure {} {}x{}", self.id, self.width(), self.height())
    }

    /// Category tag given at generation
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Upper end of the block numbering this figure was carved from
    pub const fn id_range(&self) -> BlockId {
        self.id_range
    }

    /// The cell-to-block grid
    pub const fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    /// The link graph
    pub const fn links(&self) -> &LinkGraph {
        &self.links
    }

    /// Block at a cell, `None` when out of bounds
    pub fn block_at(&self, cell: Cell) -> Option<BlockId> {
        self.grid.get(cell)
    }

    /// Check if a cell holds a block
    pub fn is_filled(&self, cell: Cell) -> bool {
        self.block_at(cell).is_some_and(|id| id != EMPTY)
    }

    /// Lazily enumerate occupied cells in column-major order
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Cell, BlockId)> + '_ {
        self.grid.occupied_cells()
    }

    /// Ids of the blocks on the grid, ascending
    pub fn block_ids(&self) -> Vec<BlockId> {
        let mut ids: Vec<BlockId> = self.occupied_cells().map(|(_, id)| id).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of blocks on the grid
    pub fn block_count(&self) -> usize {
        self.grid.occupied_count()
    }

    /// Cell currently holding `block`
    pub fn cell_of(&self, block: BlockId) -> Option<Cell> {
        self.grid.find(block)
    }

    /// Presentation handle of a block
    pub fn visual(&self, block: BlockId) -> Option<&H> {
        self.visuals.get(&block)
    }

    /// Number of presentation handles owned
    pub fn visual_count(&self) -> usize {
        self.visuals.len()
    }

    /// Check that every block on the grid reaches every other one
    pub fn is_connected(&self) -> bool {
        is_connected(&self.links, &self.block_ids(), self.id_range)
    }

    /// Resolve a cell that must hold a block
    pub(crate) fn occupied_id(&self, cell: Cell) -> Result<BlockId> {
        match self.grid.get(cell) {
            None => Err(invalid_cell(cell, "outside the figure")),
            Some(EMPTY) => Err(invalid_cell(cell, "no block at this cell")),
            Some(id) => Ok(id),
        }
    }
}
