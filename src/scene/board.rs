//! Board orchestrating figures placed in world space
//!
//! The board owns the figure id allocator, the scene that depicts every
//! block and the placed figures with their world origins. It reacts to splits
//! by registering the detached figure and moving both halves' origins so that
//! no block changes its world position.

use crate::figure::allocator::{FigureId, FigureIdAllocator};
use crate::figure::cut::CutOutcome;
use crate::figure::presenter::Category;
use crate::figure::state::Figure;
use crate::io::error::{FigureError, Result, invalid_cell};
use crate::scene::field::OccupancyField;
use crate::scene::visuals::{Scene, VisualHandle};
use crate::spatial::grid::{Cell, Direction};
use crate::spatial::shape::ShapeSpec;

/// A figure together with the world position of its grid origin
#[derive(Debug)]
pub struct PlacedFigure {
    /// The figure itself
    pub figure: Figure<VisualHandle>,
    /// World coordinates of grid cell (0, 0)
    pub origin: [i64; 2],
}

impl PlacedFigure {
    /// World coordinates of a grid cell of this figure
    pub fn world_position(&self, cell: Cell) -> [i64; 2] {
        [
            self.origin[0] + cell.x as i64,
            self.origin[1] + cell.y as i64,
        ]
    }
}

/// What a cut did on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutReport {
    /// No link existed between the cells
    NoLink,
    /// The link was removed; the figure is still whole
    Cut {
        /// The figure that was cut
        figure: FigureId,
    },
    /// The figure split in two
    Split {
        /// The figure that was cut, now holding the first cell's half
        kept: FigureId,
        /// The new figure holding the second cell's half
        detached: FigureId,
    },
}

/// Owner of every figure, their visuals and the occupancy field
#[derive(Debug)]
pub struct Board {
    allocator: FigureIdAllocator,
    scene: Scene,
    field: OccupancyField,
    figures: Vec<PlacedFigure>,
}

impl Board {
    /// Create an empty board over a field
    pub fn new(field: OccupancyField) -> Self {
        Self {
            allocator: FigureIdAllocator::new(),
            scene: Scene::new(),
            field,
            figures: Vec::new(),
        }
    }

    /// Generate a figure and place its origin at `origin`
    ///
    /// # Errors
    ///
    /// Propagates generation errors for bad dimensions or shapes.
    pub fn spawn(
        &mut self,
        width: usize,
        height: usize,
        shape: &ShapeSpec,
        category: Category,
        origin: [i64; 2],
    ) -> Result<FigureId> {
        let figure = Figure::generate(
            &mut self.allocator,
            width,
            height,
            shape,
            category,
            &mut self.scene,
        )?;
        let id = figure.id();
        self.figures.push(PlacedFigure { figure, origin });
        Ok(id)
    }

    /// All placed figures in creation order
    pub fn figures(&self) -> &[PlacedFigure] {
        &self.figures
    }

    /// Look up a placed figure
    pub fn figure(&self, id: FigureId) -> Option<&PlacedFigure> {
        self.figures.iter().find(|placed| placed.figure.id() == id)
    }

    /// The scene depicting every block
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The occupancy field
    pub const fn field(&self) -> &OccupancyField {
        &self.field
    }

    fn index_of(&self, id: FigureId) -> Result<usize> {
        self.figures
            .iter()
            .position(|placed| placed.figure.id() == id)
            .ok_or(FigureError::UnknownFigure { figure: id })
    }

    /// Cut between two cells of a figure
    ///
    /// On a split the detached figure is placed so every block keeps its
    /// world position.
    ///
    /// # Errors
    ///
    /// Returns `UnknownFigure` for a missing figure and propagates the
    /// figure's cut errors.
    pub fn cut(&mut self, id: FigureId, first: Cell, second: Cell) -> Result<CutReport> {
        let index = self.index_of(id)?;
        let Some(placed) = self.figures.get_mut(index) else {
            return Err(FigureError::UnknownFigure { figure: id });
        };

        let outcome = placed
            .figure
            .cut(first, second, &mut self.allocator, &mut self.scene)?;

        match outcome {
            CutOutcome::NoLink => Ok(CutReport::NoLink),
            CutOutcome::Cut => Ok(CutReport::Cut { figure: id }),
            CutOutcome::Split {
                detached,
                kept_offset,
                detached_offset,
            } => {
                let old_origin = placed.origin;
                placed.origin = shifted(old_origin, kept_offset);
                let detached_id = detached.id();
                self.figures.push(PlacedFigure {
                    figure: detached,
                    origin: shifted(old_origin, detached_offset),
                });
                Ok(CutReport::Split {
                    kept: id,
                    detached: detached_id,
                })
            }
        }
    }

    /// Cut the link to the right of the block a visual depicts
    ///
    /// # Errors
    ///
    /// Returns `UnknownVisual` for an unregistered handle and `InvalidCell`
    /// when the block has no occupied cell to its right.
    pub fn cut_right_of(&mut self, handle: VisualHandle) -> Result<CutReport> {
        let (figure_id, block) = self
            .scene
            .owner_of(handle)
            .ok_or(FigureError::UnknownVisual { handle: handle.0 })?;
        let placed = self
            .figure(figure_id)
            .ok_or(FigureError::UnknownFigure { figure: figure_id })?;
        let Some(cell) = placed.figure.cell_of(block) else {
            return Err(FigureError::UnknownVisual { handle: handle.0 });
        };
        let right = cell
            .step(Direction::Right)
            .ok_or_else(|| invalid_cell(cell, "no cell to the right"))?;

        self.cut(figure_id, cell, right)
    }

    /// Check if a figure's blocks would all be free with its origin at `origin`
    ///
    /// # Errors
    ///
    /// Returns `UnknownFigure` for a missing figure.
    pub fn can_place(&self, id: FigureId, origin: [i64; 2]) -> Result<bool> {
        let placed = self
            .figure(id)
            .ok_or(FigureError::UnknownFigure { figure: id })?;
        Ok(placed.figure.occupied_cells().all(|(cell, _)| {
            self.field
                .is_free(origin[0] + cell.x as i64, origin[1] + cell.y as i64)
        }))
    }

    /// Move a figure by `delta` if the destination is free
    ///
    /// Returns whether the figure moved.
    ///
    /// # Errors
    ///
    /// Returns `UnknownFigure` for a missing figure.
    pub fn try_move(&mut self, id: FigureId, delta: [i64; 2]) -> Result<bool> {
        let index = self.index_of(id)?;
        let Some(current) = self.figures.get(index).map(|placed| placed.origin) else {
            return Err(FigureError::UnknownFigure { figure: id });
        };
        let target = [current[0] + delta[0], current[1] + delta[1]];
        if !self.can_place(id, target)? {
            return Ok(false);
        }
        if let Some(placed) = self.figures.get_mut(index) {
            placed.origin = target;
        }
        Ok(true)
    }
}

const fn shifted(origin: [i64; 2], offset: [usize; 2]) -> [i64; 2] {
    [origin[0] + offset[0] as i64, origin[1] + offset[1] as i64]
}
