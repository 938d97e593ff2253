//! In-memory presentation layer: one record per block visual
//!
//! The scene owns every visual record and the reverse index from a visual
//! back to the figure and block it depicts. Figures only ever hold handles.

use crate::figure::allocator::FigureId;
use crate::figure::borders::BorderFlags;
use crate::figure::presenter::{Category, Presenter};
use crate::spatial::grid::{BlockId, Cell};
use std::fmt;

/// Handle to a visual block record in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualHandle(pub usize);

impl fmt::Display for VisualHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "visual {}", self.0)
    }
}

/// Presentation state of one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualBlock {
    /// Figure currently owning the block
    pub figure: FigureId,
    /// Block id within that figure's numbering
    pub block: BlockId,
    /// Cell the block was created at
    pub origin_cell: Cell,
    /// Category tag for visual selection
    pub category: Category,
    /// Current border depiction
    pub borders: BorderFlags,
    /// Number of times the block changed owner
    pub reparent_count: usize,
}

/// Presenter that records visual blocks and their owners
#[derive(Debug, Default)]
pub struct Scene {
    visuals: Vec<VisualBlock>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a visual record
    pub fn visual(&self, handle: VisualHandle) -> Option<&VisualBlock> {
        self.visuals.get(handle.0)
    }

    /// Figure and block a visual depicts
    pub fn owner_of(&self, handle: VisualHandle) -> Option<(FigureId, BlockId)> {
        self.visual(handle).map(|visual| (visual.figure, visual.block))
    }

    /// Handles of every visual owned by `figure`, in creation order
    pub fn handles_of(&self, figure: FigureId) -> Vec<VisualHandle> {
        self.visuals
            .iter()
            .enumerate()
            .filter(|(_, visual)| visual.figure == figure)
            .map(|(index, _)| VisualHandle(index))
            .collect()
    }

    /// Number of visual records
    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    /// Check if no visual was created yet
    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }
}

impl Presenter for Scene {
    type Handle = VisualHandle;

    fn create_block(
        &mut self,
        figure: FigureId,
        block: BlockId,
        cell: Cell,
        category: Category,
        borders: BorderFlags,
    ) -> VisualHandle {
        self.visuals.push(VisualBlock {
            figure,
            block,
            origin_cell: cell,
            category,
            borders,
            reparent_count: 0,
        });
        VisualHandle(self.visuals.len() - 1)
    }

    fn reparent(&mut self, handle: &VisualHandle, figure: FigureId) {
        if let Some(visual) = self.visuals.get_mut(handle.0)
            && visual.figure != figure
        {
            visual.figure = figure;
            visual.reparent_count += 1;
        }
    }

    fn update_borders(&mut self, handle: &VisualHandle, borders: BorderFlags) {
        if let Some(visual) = self.visuals.get_mut(handle.0) {
            visual.borders = borders;
        }
    }
}
