//! Error types for figure operations, scripts and the command line

use crate::figure::allocator::FigureId;
use crate::spatial::grid::Cell;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all figure operations
#[derive(Debug)]
pub enum FigureError {
    /// Figure bounds must be positive and within the supported maximum
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// A cell argument is out of bounds or holds no block
    InvalidCell {
        /// The offending cell
        cell: Cell,
        /// Why the cell was rejected
        reason: &'static str,
    },

    /// The two cells of a cut do not share an edge
    NotAdjacent {
        /// First cell of the cut
        first: Cell,
        /// Second cell of the cut
        second: Cell,
    },

    /// A shape specification cannot produce a connected figure
    InvalidShape {
        /// Description of what's wrong with the shape
        reason: String,
    },

    /// No figure with this id is on the board
    UnknownFigure {
        /// The missing figure
        figure: FigureId,
    },

    /// No visual block is registered under this handle
    UnknownVisual {
        /// Raw handle value
        handle: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A cut script line could not be parsed
    Script {
        /// 1-based line number
        line: usize,
        /// Description of the parse failure
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for FigureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid figure dimensions {width}x{height}")
            }
            Self::InvalidCell { cell, reason } => {
                write!(f, "Invalid cell {cell}: {reason}")
            }
            Self::NotAdjacent { first, second } => {
                write!(f, "Cells {first} and {second} are not adjacent")
            }
            Self::InvalidShape { reason } => {
                write!(f, "Invalid shape: {reason}")
            }
            Self::UnknownFigure { figure } => {
                write!(f, "Unknown figure {figure}")
            }
            Self::UnknownVisual { handle } => {
                write!(f, "Unknown visual block handle {handle}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Script { line, reason } => {
                write!(f, "Script error on line {line}: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for FigureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for figure results
pub type Result<T> = std::result::Result<T, FigureError>;

impl From<std::io::Error> for FigureError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FigureError {
    FigureError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid cell error
pub const fn invalid_cell(cell: Cell, reason: &'static str) -> FigureError {
    FigureError::InvalidCell { cell, reason }
}
