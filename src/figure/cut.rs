//! Severing links and splitting disconnected figures

use crate::figure::allocator::FigureIdAllocator;
use crate::figure::presenter::Presenter;
use crate::figure::state::Figure;
use crate::graph::traversal::reachable_from;
use crate::io::error::{FigureError, Result};
use crate::spatial::grid::{BlockId, Cell};

/// Result of cutting between two cells
#[derive(Debug)]
pub enum CutOutcome<H> {
    /// There was no link between the cells; nothing changed
    NoLink,
    /// The link was removed and the figure is still connected
    Cut,
    /// The link was the only path between two halves
    ///
    /// The figure that was cut keeps the half containing the first cell; the
    /// other half is returned as a new figure.
    Split {
        /// Newly created figure holding the second cell's half
        detached: Figure<H>,
        /// Grid offset the cut figure's origin moved by
        kept_offset: [usize; 2],
        /// Grid offset of the detached figure's origin relative to the old origin
        detached_offset: [usize; 2],
    },
}

impl<H> CutOutcome<H> {
    /// Check whether the cut produced a second figure
    pub const fn is_split(&self) -> bool {
        matches!(self, Self::Split { .. })
    }
}

impl<H: Clone> Figure<H> {
    /// Remove the link between two edge-sharing cells
    ///
    /// Cutting an absent link is a no-op. When the removed link disconnects
    /// the figure, this figure is trimmed to the half reachable from `first`
    /// and the half reachable from `second` is returned as a new figure whose
    /// id comes from `allocator`.
    ///
    /// # Errors
    ///
    /// Returns `NotAdjacent` if the cells do not share an edge, and
    /// `InvalidCell` if either cell is out of bounds or empty.
    ///
    /// # Panics
    ///
    /// Panics if a block on the grid has no link entry.
    pub fn cut<P>(
        &mut self,
        first: Cell,
        second: Cell,
        allocator: &mut FigureIdAllocator,
        presenter: &mut P,
    ) -> Result<CutOutcome<H>>
    where
        P: Presenter<Handle = H>,
    {
        if !first.is_adjacent(second) {
            return Err(FigureError::NotAdjacent { first, second });
        }
        let v0 = self.occupied_id(first)?;
        let v1 = self.occupied_id(second)?;

        if !self.links.is_linked(v0, v1) {
            tracing::debug!(figure = %self.id, %first, %second, "no link to cut");
            return Ok(CutOutcome::NoLink);
        }

        self.links.unlink(v0, v1);
        let reached = reachable_from(&self.links, v0, self.id_range);

        self.refresh_borders(first, v0, presenter);
        self.refresh_borders(second, v1, presenter);

        if reached.contains(v1) {
            tracing::debug!(figure = %self.id, %first, %second, "cut the link");
            return Ok(CutOutcome::Cut);
        }

        tracing::debug!(figure = %self.id, %first, %second, "the figure is now split");

        let detached_ids = reachable_from(&self.links, v1, self.id_range);
        debug_assert!(reached.is_disjoint(&detached_ids));

        let mut detached = self.shallow_clone(allocator);
        let kept_offset = self.split_to(&reached, presenter);
        let detached_offset = detached.split_to(&detached_ids, presenter);

        Ok(CutOutcome::Split {
            detached,
            kept_offset,
            detached_offset,
        })
    }

    fn refresh_borders<P>(&self, cell: Cell, id: BlockId, presenter: &mut P)
    where
        P: Presenter<Handle = H>,
    {
        if let Some(handle) = self.visuals.get(&id) {
            presenter.update_borders(handle, self.borders_of(cell, id));
        }
    }
}
