//! Spatial data structures for figures
//!
//! This module contains spatial-related functionality including:
//! - The dense cell-to-block grid and bounding boxes
//! - Shape specifications for newly generated figures

/// Grid index, cell coordinates and bounding boxes
pub mod grid;
/// Shape specifications and their validation
pub mod shape;

pub use grid::{BlockGrid, BlockId, BoundingBox, Cell, Direction, EMPTY};
pub use shape::ShapeSpec;
