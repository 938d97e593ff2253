use ndarray::Array2;

/// Read-only global occupancy used for movement legality checks
///
/// World coordinates are signed; anything outside the field counts as
/// blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyField {
    blocked: Array2<bool>,
}

impl OccupancyField {
    /// Create a field with every cell free
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            blocked: Array2::from_elem((width, height), false),
        }
    }

    /// Create a field with the given world cells blocked
    ///
    /// Cells outside the field are ignored.
    pub fn with_blocked(width: usize, height: usize, blocked: &[[usize; 2]]) -> Self {
        let mut field = Self::new(width, height);
        for &[x, y] in blocked {
            if let Some(slot) = field.blocked.get_mut([x, y]) {
                *slot = true;
            }
        }
        field
    }

    /// Field width in world cells
    pub fn width(&self) -> usize {
        self.blocked.dim().0
    }

    /// Field height in world cells
    pub fn height(&self) -> usize {
        self.blocked.dim().1
    }

    /// Check whether a world cell can take a block
    pub fn is_free(&self, x: i64, y: i64) -> bool {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return false;
        };
        self.blocked.get([x, y]).is_some_and(|&blocked| !blocked)
    }
}
