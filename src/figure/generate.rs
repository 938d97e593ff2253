use crate::figure::allocator::FigureIdAllocator;
use crate::figure::presenter::{Category, Presenter};
use crate::figure::state::Figure;
use crate::graph::links::LinkGraph;
use crate::io::configuration::MAX_FIGURE_DIMENSION;
use crate::io::error::{FigureError, Result};
use crate::spatial::grid::{BlockGrid, BlockId, Cell, Direction, EMPTY};
use crate::spatial::shape::ShapeSpec;
use std::collections::{BTreeSet, HashMap};

impl<H: Clone> Figure<H> {
    /// Build a new figure from a shape placed inside a `width`×`height` grid
    ///
    /// Blocks are numbered from 1 in column-major order. Each block is linked
    /// to its already-placed left and below neighbours, then every link is
    /// mirrored. Because shapes are 4-connected, the resulting link graph is
    /// connected. The presenter is asked for one visual per block.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for zero or oversized bounds, and the
    /// shape's error if it cannot be resolved inside those bounds.
    pub fn generate<P>(
        allocator: &mut FigureIdAllocator,
        width: usize,
        height: usize,
        shape: &ShapeSpec,
        category: Category,
        presenter: &mut P,
    ) -> Result<Self>
    where
        P: Presenter<Handle = H>,
    {
        if width == 0
            || height == 0
            || width > MAX_FIGURE_DIMENSION
            || height > MAX_FIGURE_DIMENSION
        {
            return Err(FigureError::InvalidDimensions { width, height });
        }

        let cells: BTreeSet<Cell> = shape.resolve(width, height)?.into_iter().collect();

        let mut grid = BlockGrid::new(width, height);
        let mut links = LinkGraph::new();
        let mut next_id: BlockId = 1;

        for x in 0..width {
            for y in 0..height {
                let cell = Cell::new(x, y);
                if !cells.contains(&cell) {
                    continue;
                }

                let id = next_id;
                next_id += 1;
                grid.set(cell, id);
                links.add_block(id);

                for direction in [Direction::Left, Direction::Bottom] {
                    let previous = grid.neighbor_id(cell, direction);
                    if previous != EMPTY {
                        links.insert_directed(previous, id);
                    }
                }
            }
        }
        links.mirror();

        let mut figure = Self {
            id: allocator.allocate(),
            grid,
            links,
            id_range: next_id - 1,
            category,
            visuals: HashMap::new(),
        };

        let placements: Vec<(Cell, BlockId)> = figure.occupied_cells().collect();
        for (cell, id) in placements {
            let borders = figure.borders_of(cell, id);
            let handle = presenter.create_block(figure.id, id, cell, category, borders);
            figure.visuals.insert(id, handle);
        }

        tracing::debug!(
            figure = %figure.id,
            width,
            height,
            blocks = figure.id_range,
            links = figure.links.link_count(),
            "generated figure"
        );

        Ok(figure)
    }
}
