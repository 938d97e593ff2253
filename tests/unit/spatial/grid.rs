//! Tests for the block grid, cells and bounding boxes

#[cfg(test)]
mod tests {
    use blocksplit::spatial::grid::{BlockGrid, BoundingBox, Cell, Direction, EMPTY};

    fn sample_grid() -> BlockGrid {
        let mut grid = BlockGrid::new(3, 2);
        grid.set(Cell::new(0, 1), 5);
        grid.set(Cell::new(2, 0), 7);
        grid
    }

    // Tests edge-sharing detection including diagonal and identical cells
    #[test]
    fn test_cell_adjacency() {
        let cell = Cell::new(1, 1);
        assert!(cell.is_adjacent(Cell::new(0, 1)));
        assert!(cell.is_adjacent(Cell::new(1, 2)));
        assert!(!cell.is_adjacent(cell));
        assert!(!cell.is_adjacent(Cell::new(2, 2)));
        assert!(!cell.is_adjacent(Cell::new(3, 1)));
    }

    // Tests stepping uses y-up orientation and stops at the quadrant edge
    #[test]
    fn test_cell_step() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Bottom), None);
        assert_eq!(origin.step(Direction::Top), Some(Cell::new(0, 1)));
        assert_eq!(origin.step(Direction::Right), Some(Cell::new(1, 0)));
    }

    // Tests reads past the grid edge yield the empty id
    // Verified by returning the cell's own id for out-of-bounds neighbours
    #[test]
    fn test_neighbor_id_out_of_bounds_is_empty() {
        let grid = sample_grid();
        assert_eq!(grid.neighbor_id(Cell::new(0, 1), Direction::Left), EMPTY);
        assert_eq!(grid.neighbor_id(Cell::new(0, 1), Direction::Top), EMPTY);
        assert_eq!(grid.neighbor_id(Cell::new(0, 0), Direction::Top), 5);
        assert_eq!(grid.neighbor_id(Cell::new(1, 0), Direction::Right), 7);
    }

    #[test]
    fn test_set_out_of_bounds_is_rejected() {
        let mut grid = BlockGrid::new(2, 2);
        assert!(!grid.set(Cell::new(2, 0), 1));
        assert!(grid.set(Cell::new(1, 1), 1));
        assert_eq!(grid.get(Cell::new(1, 1)), Some(1));
        assert_eq!(grid.get(Cell::new(5, 5)), None);
    }

    // Tests occupied cells come out column-major and the sequence restarts
    #[test]
    fn test_occupied_cells_order_and_restart() {
        let grid = sample_grid();
        let first: Vec<_> = grid.occupied_cells().collect();
        let second: Vec<_> = grid.occupied_cells().collect();

        assert_eq!(first, vec![(Cell::new(0, 1), 5), (Cell::new(2, 0), 7)]);
        assert_eq!(first, second);
        assert_eq!(grid.occupied_count(), 2);
        assert_eq!(grid.find(7), Some(Cell::new(2, 0)));
        assert_eq!(grid.find(EMPTY), None);
    }

    // Tests the bounding box only covers blocks accepted by the predicate
    #[test]
    fn test_bounding_box_with_predicate() {
        let grid = sample_grid();

        let all = grid.bounding_box(|_| true);
        assert_eq!(
            all,
            Some(BoundingBox {
                min: [0, 0],
                max: [2, 1]
            })
        );

        let only_seven = grid.bounding_box(|id| id == 7);
        assert_eq!(
            only_seven,
            Some(BoundingBox {
                min: [2, 0],
                max: [2, 0]
            })
        );

        assert_eq!(grid.bounding_box(|id| id == 99), None);
    }

    // Tests trimming shifts coordinates and clears rejected blocks inside the box
    // Verified by copying every block in the box regardless of the predicate
    #[test]
    fn test_trimmed_shifts_and_clears_holes() {
        let mut grid = BlockGrid::new(4, 3);
        grid.set(Cell::new(1, 1), 1);
        grid.set(Cell::new(2, 1), 2);
        grid.set(Cell::new(3, 2), 3);

        let bounds = BoundingBox {
            min: [1, 1],
            max: [3, 2],
        };
        let trimmed = grid.trimmed(&bounds, |id| id != 2);

        assert_eq!(trimmed.width(), 3);
        assert_eq!(trimmed.height(), 2);
        assert_eq!(trimmed.get(Cell::new(0, 0)), Some(1));
        assert_eq!(trimmed.get(Cell::new(1, 0)), Some(EMPTY));
        assert_eq!(trimmed.get(Cell::new(2, 1)), Some(3));
    }

    #[test]
    fn test_bounding_box_dimensions() {
        let bounds = BoundingBox {
            min: [2, 3],
            max: [4, 3],
        };
        assert_eq!(bounds.width(), 3);
        assert_eq!(bounds.height(), 1);
        assert!(bounds.contains(Cell::new(3, 3)));
        assert!(!bounds.contains(Cell::new(3, 4)));
    }
}
