//! Grid-shaped figures of explicitly linked blocks that can be cut apart
//!
//! A figure tracks which cell holds which block and which blocks are linked.
//! Cutting a link that was the only path between two groups of blocks splits
//! the figure into two trimmed, independently owned figures.

#![forbid(unsafe_code)]

/// Figure generation, cutting, splitting and border queries
pub mod figure;
/// Link graph, block bitsets and reachability
pub mod graph;
/// Command line, configuration, logging, scripts and error handling
pub mod io;
/// Collaborators: visual scene, occupancy field and board
pub mod scene;
/// Grid index and shape specifications
pub mod spatial;

pub use figure::{CutOutcome, Figure, FigureId, FigureIdAllocator};
pub use io::error::{FigureError, Result};
