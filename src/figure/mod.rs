//! Figures: linked blocks on a grid that can be cut and split
//!
//! This module contains the figure aggregate and its operations:
//! - Generation from a shape specification
//! - Cutting links and splitting disconnected figures
//! - Border classification for rendering collaborators

/// Explicitly owned figure identity allocation
pub mod allocator;
/// Border flags per block
pub mod borders;
/// Link cutting and split detection
pub mod cut;
/// Figure construction
pub mod generate;
/// Presentation collaborator interface
pub mod presenter;
/// Trimming to a component and cloning
pub mod split;
/// The figure aggregate and its queries
pub mod state;

pub use allocator::{FigureId, FigureIdAllocator};
pub use borders::BorderFlags;
pub use cut::CutOutcome;
pub use presenter::{Category, Presenter};
pub use state::Figure;
