//! Shape specifications describing which cells a new figure occupies
//!
//! Every shape resolves to a non-empty, duplicate-free, 4-connected set of
//! cells inside the figure's bounding grid. Connectivity here is what makes a
//! freshly generated figure's link graph connected.

use crate::io::error::{FigureError, Result, invalid_parameter};
use crate::spatial::grid::{Cell, Direction};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::{BTreeSet, HashSet};

/// Placement of blocks inside a figure's bounding grid
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeSpec {
    /// A `side`×`side` square anchored at the origin
    Square {
        /// Edge length in cells
        side: usize,
    },
    /// Every cell of the bounding grid
    Full,
    /// Explicit cell list
    Cells(Vec<Cell>),
    /// Randomly grown connected blob covering roughly `fill` of the grid
    Random {
        /// Target share of occupied cells, in `(0, 1]`
        fill: f64,
        /// Seed for reproducible growth
        seed: u64,
    },
}

impl ShapeSpec {
    /// Resolve the shape into concrete cells for a `width`×`height` grid
    ///
    /// Cells are returned in column-major order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShape` if the shape is empty, leaves the grid, repeats a
    /// cell or is not 4-connected, and `InvalidParameter` for a fill ratio
    /// outside `(0, 1]`.
    pub fn resolve(&self, width: usize, height: usize) -> Result<Vec<Cell>> {
        let cells = match self {
            Self::Square { side } => {
                if *side == 0 || *side > width || *side > height {
                    return Err(invalid_shape(format!(
                        "square of side {side} does not fit a {width}x{height} grid"
                    )));
                }
                (0..*side)
                    .flat_map(|x| (0..*side).map(move |y| Cell::new(x, y)))
                    .collect()
            }
            Self::Full => (0..width)
                .flat_map(|x| (0..height).map(move |y| Cell::new(x, y)))
                .collect(),
            Self::Cells(cells) => cells.clone(),
            Self::Random { fill, seed } => grow_random(width, height, *fill, *seed)?,
        };

        validate(cells, width, height)
    }
}

fn invalid_shape(reason: String) -> FigureError {
    FigureError::InvalidShape { reason }
}

fn validate(cells: Vec<Cell>, width: usize, height: usize) -> Result<Vec<Cell>> {
    if cells.is_empty() {
        return Err(invalid_shape("shape has no cells".to_string()));
    }

    let mut unique = BTreeSet::new();
    for cell in cells {
        if cell.x >= width || cell.y >= height {
            return Err(invalid_shape(format!(
                "cell {cell} lies outside the {width}x{height} grid"
            )));
        }
        if !unique.insert(cell) {
            return Err(invalid_shape(format!("cell {cell} appears twice")));
        }
    }

    if !is_connected(&unique) {
        return Err(invalid_shape("shape is not 4-connected".to_string()));
    }

    // BTreeSet orders by (x, y), which is the column-major scan order
    Ok(unique.into_iter().collect())
}

fn is_connected(cells: &BTreeSet<Cell>) -> bool {
    let Some(&start) = cells.iter().next() else {
        return false;
    };

    let mut visited = HashSet::from([start]);
    let mut stack = vec![start];
    while let Some(cell) = stack.pop() {
        for direction in Direction::ALL {
            if let Some(next) = cell.step(direction)
                && cells.contains(&next)
                && visited.insert(next)
            {
                stack.push(next);
            }
        }
    }

    visited.len() == cells.len()
}

/// Grow a connected blob from a random seed cell
///
/// Frontier cells are kept in insertion order so growth is reproducible for a
/// given seed.
fn grow_random(width: usize, height: usize, fill: f64, seed: u64) -> Result<Vec<Cell>> {
    if !(fill > 0.0 && fill <= 1.0) {
        return Err(invalid_parameter("fill", &fill, &"must be in (0, 1]"));
    }
    if width == 0 || height == 0 {
        return Err(FigureError::InvalidDimensions { width, height });
    }

    let total = width * height;
    let target = ((total as f64) * fill).ceil().clamp(1.0, total as f64) as usize;

    let mut rng = StdRng::seed_from_u64(seed);
    let start = Cell::new(rng.random_range(0..width), rng.random_range(0..height));

    let mut placed = vec![start];
    let mut seen = HashSet::from([start]);
    let mut frontier = Vec::new();
    push_neighbors(start, width, height, &mut seen, &mut frontier);

    while placed.len() < target && !frontier.is_empty() {
        let pick = rng.random_range(0..frontier.len());
        let cell = frontier.swap_remove(pick);
        placed.push(cell);
        push_neighbors(cell, width, height, &mut seen, &mut frontier);
    }

    Ok(placed)
}

fn push_neighbors(
    cell: Cell,
    width: usize,
    height: usize,
    seen: &mut HashSet<Cell>,
    frontier: &mut Vec<Cell>,
) {
    for direction in Direction::ALL {
        if let Some(next) = cell.step(direction)
            && next.x < width
            && next.y < height
            && seen.insert(next)
        {
            frontier.push(next);
        }
    }
}
