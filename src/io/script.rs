//! Cut commands from the command line and from script files
//!
//! Argument form: `FIG:X0,Y0:X1,Y1`, e.g. `0:0,0:1,0`.
//! Script form, one command per line: `cut FIG X0 Y0 X1 Y1`. Blank lines and
//! lines starting with `#` are skipped.

use crate::figure::allocator::FigureId;
use crate::io::configuration::{SCRIPT_COMMENT_PREFIX, SCRIPT_CUT_KEYWORD};
use crate::io::error::{FigureError, Result, invalid_parameter};
use crate::spatial::grid::Cell;
use std::path::Path;
use std::str::FromStr;

/// One cut to apply to a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CutCommand {
    /// Figure to cut
    pub figure: FigureId,
    /// First cell of the link
    pub first: Cell,
    /// Second cell of the link
    pub second: Cell,
}

impl FromStr for CutCommand {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self> {
        let reject = || invalid_parameter("cut", &s, &"expected FIG:X0,Y0:X1,Y1");

        let mut parts = s.trim().split(':');
        let (Some(figure), Some(first), Some(second), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(reject());
        };

        let figure = parse_number(figure).ok_or_else(reject)?;
        let first = parse_cell(first).ok_or_else(reject)?;
        let second = parse_cell(second).ok_or_else(reject)?;

        Ok(Self {
            figure: FigureId(figure),
            first,
            second,
        })
    }
}

fn parse_number<T: FromStr>(text: &str) -> Option<T> {
    text.trim().parse().ok()
}

fn parse_cell(text: &str) -> Option<Cell> {
    let (x, y) = text.split_once(',')?;
    Some(Cell::new(parse_number(x)?, parse_number(y)?))
}

/// Parse a cut script
///
/// # Errors
///
/// Returns a `Script` error naming the first malformed line.
pub fn parse_script(text: &str) -> Result<Vec<CutCommand>> {
    let mut commands = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with(SCRIPT_COMMENT_PREFIX) {
            continue;
        }

        let script_error = |reason: String| FigureError::Script {
            line: index + 1,
            reason,
        };

        let words: Vec<&str> = line.split_whitespace().collect();
        let [keyword, figure, x0, y0, x1, y1] = words.as_slice() else {
            return Err(script_error(format!(
                "expected '{SCRIPT_CUT_KEYWORD} FIG X0 Y0 X1 Y1', found '{line}'"
            )));
        };
        if *keyword != SCRIPT_CUT_KEYWORD {
            return Err(script_error(format!("unknown command '{keyword}'")));
        }

        let numbers = (
            parse_number::<u64>(figure),
            parse_number::<usize>(x0),
            parse_number::<usize>(y0),
            parse_number::<usize>(x1),
            parse_number::<usize>(y1),
        );
        let (Some(figure), Some(x0), Some(y0), Some(x1), Some(y1)) = numbers else {
            return Err(script_error(format!("non-numeric argument in '{line}'")));
        };

        commands.push(CutCommand {
            figure: FigureId(figure),
            first: Cell::new(x0, y0),
            second: Cell::new(x1, y1),
        });
    }

    Ok(commands)
}

/// Read and parse a cut script file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read and `Script` for
/// malformed lines.
pub fn load_script(path: &Path) -> Result<Vec<CutCommand>> {
    let text = std::fs::read_to_string(path).map_err(|source| FigureError::FileSystem {
        path: path.to_path_buf(),
        operation: "read script",
        source,
    })?;
    parse_script(&text)
}
