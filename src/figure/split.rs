use crate::figure::allocator::FigureIdAllocator;
use crate::figure::presenter::Presenter;
use crate::figure::state::Figure;
use crate::graph::bitset::BlockBitset;

impl<H> Figure<H> {
    /// Shrink this figure down to one connected component of its link graph
    ///
    /// `keep` must be exactly one component. The grid is trimmed to the
    /// component's bounding box; cells inside the box that belong to other
    /// blocks become empty. Kept blocks have their visuals reparented to this
    /// figure, all other blocks lose their link entry and visual here.
    ///
    /// Returns the offset `[min_x, min_y]` the grid origin moved by, so a
    /// collaborator can keep the blocks in place in world space.
    ///
    /// # Panics
    ///
    /// Panics if no cell of the grid holds a block from `keep`.
    pub fn split_to<P>(&mut self, keep: &BlockBitset, presenter: &mut P) -> [usize; 2]
    where
        P: Presenter<Handle = H>,
    {
        let Some(bounds) = self.grid.bounding_box(|id| keep.contains(id)) else {
            unreachable!("figure {} has no block from the kept component", self.id);
        };

        self.grid = self.grid.trimmed(&bounds, |id| keep.contains(id));

        for id in 1..=self.id_range {
            if keep.contains(id) {
                tracing::debug!(figure = %self.id, block = id, "taking ownership of block");
                if let Some(handle) = self.visuals.get(&id) {
                    presenter.reparent(handle, self.id);
                }
            } else {
                self.links.remove_block(id);
                self.visuals.remove(&id);
            }
        }

        tracing::debug!(figure = %self.id, name = %self.name(), "trimmed figure");
        bounds.min
    }

    /// Copy this figure under a fresh identity
    ///
    /// The grid and every neighbour set are deep-copied; presentation handles
    /// are cloned, so both figures refer to the same visuals until a split
    /// hands each one to its owner.
    pub fn shallow_clone(&self, allocator: &mut FigureIdAllocator) -> Self
    where
        H: Clone,
    {
        Self {
            id: allocator.allocate(),
            grid: self.grid.clone(),
            links: self.links.clone(),
            id_range: self.id_range,
            category: self.category,
            visuals: self.visuals.clone(),
        }
    }
}
