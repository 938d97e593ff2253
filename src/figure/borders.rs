//! Border classification consumed by rendering
//!
//! A side of a block shows a border when there is no link between the block
//! and whatever sits on that side. Vacant and out-of-bounds neighbours read as
//! the empty id, which is never linked, so grid edges always show a border.

use crate::figure::state::Figure;
use crate::io::error::Result;
use crate::spatial::grid::{BlockId, Cell, Direction};

/// Which sides of a block carry a border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BorderFlags {
    /// No link towards smaller `x`
    pub left: bool,
    /// No link towards larger `y`
    pub top: bool,
    /// No link towards larger `x`
    pub right: bool,
    /// No link towards smaller `y`
    pub bottom: bool,
}

impl BorderFlags {
    /// Borders on every side (an isolated block)
    pub const ALL: Self = Self {
        left: true,
        top: true,
        right: true,
        bottom: true,
    };

    /// Flag for one direction
    pub const fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Top => self.top,
            Direction::Right => self.right,
            Direction::Bottom => self.bottom,
        }
    }

    /// Number of bordered sides
    pub fn count(&self) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&direction| self.get(direction))
            .count()
    }

    /// Four-digit code in left, top, right, bottom order (`"1010"`)
    pub fn code(&self) -> String {
        Direction::ALL
            .iter()
            .map(|&direction| if self.get(direction) { '1' } else { '0' })
            .collect()
    }
}

impl<H> Figure<H> {
    /// Border flags of the block at `cell`
    ///
    /// # Errors
    ///
    /// Returns `InvalidCell` if the cell is out of bounds or empty.
    ///
    /// # Panics
    ///
    /// Panics if a block on the grid has no link entry.
    pub fn border_flags(&self, cell: Cell) -> Result<BorderFlags> {
        let id = self.occupied_id(cell)?;
        Ok(self.borders_of(cell, id))
    }

    /// Border flags for a cell already known to hold `id`
    pub(crate) fn borders_of(&self, cell: Cell, id: BlockId) -> BorderFlags {
        let left = self.grid.neighbor_id(cell, Direction::Left);
        let top = self.grid.neighbor_id(cell, Direction::Top);
        let right = self.grid.neighbor_id(cell, Direction::Right);
        let bottom = self.grid.neighbor_id(cell, Direction::Bottom);

        BorderFlags {
            left: !self.links.is_linked(left, id),
            top: !self.links.is_linked(id, top),
            right: !self.links.is_linked(id, right),
            bottom: !self.links.is_linked(bottom, id),
        }
    }
}
