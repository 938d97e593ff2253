//! Collaborators around figures: visuals, occupancy and the board

/// Board owning placed figures and the id allocator
pub mod board;
/// Read-only occupancy field for legality checks
pub mod field;
/// Visual block records and the reverse index
pub mod visuals;

pub use board::{Board, CutReport, PlacedFigure};
pub use field::OccupancyField;
pub use visuals::{Scene, VisualBlock, VisualHandle};
