//! Seam between the figure engine and whatever depicts its blocks

use crate::figure::allocator::FigureId;
use crate::figure::borders::BorderFlags;
use crate::spatial::grid::{BlockId, Cell};

/// Presentation-only block category, threaded through to the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Category(pub u16);

/// Receives block lifecycle events from figures
///
/// Handles are cheap references to presentation objects. A figure stores one
/// handle per block; cloning a figure clones the handles, and splitting moves
/// each handle to exactly one of the resulting figures.
pub trait Presenter {
    /// Reference to one presentation object
    type Handle: Clone;

    /// Create the visual for a newly generated block
    fn create_block(
        &mut self,
        figure: FigureId,
        block: BlockId,
        cell: Cell,
        category: Category,
        borders: BorderFlags,
    ) -> Self::Handle;

    /// Move a block's visual under another figure
    fn reparent(&mut self, handle: &Self::Handle, figure: FigureId);

    /// Refresh the border depiction after a link changed
    fn update_borders(&mut self, handle: &Self::Handle, borders: BorderFlags);
}
