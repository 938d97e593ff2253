//! Plain-text board reports for the command line

use crate::io::configuration::REPORT_EMPTY_CELL;
use crate::io::error::Result;
use crate::scene::board::{Board, CutReport, PlacedFigure};
use crate::spatial::grid::{Cell, EMPTY};
use std::io::Write;

/// One-line description of a cut
pub fn describe_cut(report: &CutReport) -> String {
    match report {
        CutReport::NoLink => "no link to cut".to_string(),
        CutReport::Cut { figure } => format!("cut the link, figure {figure} remains whole"),
        CutReport::Split { kept, detached } => {
            format!("figure {kept} split, detached figure {detached}")
        }
    }
}

/// Write the id map of a figure, top row first
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_figure<W: Write>(placed: &PlacedFigure, out: &mut W) -> Result<()> {
    let figure = &placed.figure;
    writeln!(
        out,
        "{} at ({}, {}): {} blocks, {} links",
        figure.name(),
        placed.origin[0],
        placed.origin[1],
        figure.block_count(),
        figure.links().link_count()
    )?;

    let cell_width = figure.id_range().to_string().len();
    for y in (0..figure.height()).rev() {
        let row: Vec<String> = (0..figure.width())
            .map(|x| match figure.block_at(Cell::new(x, y)) {
                Some(id) if id != EMPTY => format!("{id:>cell_width$}"),
                _ => format!("{REPORT_EMPTY_CELL:>cell_width$}"),
            })
            .collect();
        writeln!(out, "  {}", row.join(" "))?;
    }

    for (cell, id) in figure.occupied_cells() {
        let borders = figure.border_flags(cell)?;
        writeln!(out, "  block {id} at {cell}: borders {}", borders.code())?;
    }

    Ok(())
}

/// Write every figure on the board
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_board<W: Write>(board: &Board, out: &mut W) -> Result<()> {
    for placed in board.figures() {
        write_figure(placed, out)?;
    }
    Ok(())
}
