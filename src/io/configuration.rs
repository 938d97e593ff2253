//! Figure constants and runtime configuration defaults

// Defaults mirror the classic 2x2 starting figure
/// Default width of a generated figure's bounding grid
pub const DEFAULT_WIDTH: usize = 2;
/// Default height of a generated figure's bounding grid
pub const DEFAULT_HEIGHT: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed figure dimension
pub const MAX_FIGURE_DIMENSION: usize = 4096;

/// Fixed seed for reproducible random shapes
pub const DEFAULT_SEED: u64 = 42;

/// Default share of occupied cells for random shapes
pub const DEFAULT_FILL_RATIO: f64 = 0.6;

/// Category tag given to blocks when none is requested
pub const DEFAULT_CATEGORY: u16 = 0;

// Script parsing
/// Lines starting with this prefix are ignored
pub const SCRIPT_COMMENT_PREFIX: char = '#';
/// Keyword introducing a cut command
pub const SCRIPT_CUT_KEYWORD: &str = "cut";

// Report rendering
/// Placeholder printed for empty cells in id maps
pub const REPORT_EMPTY_CELL: &str = ".";
