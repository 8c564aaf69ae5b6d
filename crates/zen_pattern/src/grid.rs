//! Placement grid laid over the canvas.
//!
//! This module defines [`Grid`] and [`Cell`]. The grid resolution scales with the
//! complexity parameter relative to a 900×700 reference canvas and never drops below
//! [`MIN_CELLS`] along either axis.
use glam::DVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Canvas size the complexity parameter is normalised against.
pub const REFERENCE_CANVAS: DVec2 = DVec2::new(900.0, 700.0);

/// Minimum number of columns and rows.
pub const MIN_CELLS: usize = 4;

/// Largest grid, in cells, a run may visit.
pub const MAX_CELLS: usize = 1 << 22;

/// Fraction of a cell gap the motif centre may be displaced by.
pub const CENTER_JITTER: f64 = 0.6;

/// Grid coordinate of one cell.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column index, left to right.
    pub col: usize,
    /// Row index, top to bottom.
    pub row: usize,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Resolved grid over a canvas.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    /// Number of columns.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
    /// Cell size in canvas units.
    pub gap: DVec2,
}

impl Grid {
    /// Compute the grid for `complexity` over `canvas`.
    pub fn for_canvas(complexity: u32, canvas: DVec2) -> Self {
        let complexity = f64::from(complexity);
        let cols = axis_cells(complexity, canvas.x / REFERENCE_CANVAS.x);
        let rows = axis_cells(complexity, canvas.y / REFERENCE_CANVAS.y);
        Self {
            cols,
            rows,
            gap: DVec2::new(canvas.x / cols as f64, canvas.y / rows as f64),
        }
    }

    /// Total number of cells, saturating at `usize::MAX`.
    pub fn cell_count(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }

    /// Total number of cells, or `None` when it exceeds [`MAX_CELLS`].
    pub fn checked_cell_count(&self) -> Option<usize> {
        self.cols
            .checked_mul(self.rows)
            .filter(|&cells| cells <= MAX_CELLS)
    }

    /// Smaller of the two gaps, the base unit for motif size.
    pub fn min_gap(&self) -> f64 {
        self.gap.x.min(self.gap.y)
    }

    /// Iterate cells row-major: top to bottom, left to right within a row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell { col, row }))
    }

    /// Top-left corner of `cell`.
    pub fn cell_origin(&self, cell: Cell) -> DVec2 {
        DVec2::new(cell.col as f64 * self.gap.x, cell.row as f64 * self.gap.y)
    }

    /// Centre of `cell` displaced by unit draws `u` and `v`.
    ///
    /// A draw of 0.5 leaves the axis at the cell centre; 0 and 1 shift it by
    /// `CENTER_JITTER / 2` of a gap towards either side.
    pub fn jittered_center(&self, cell: Cell, u: f64, v: f64) -> DVec2 {
        DVec2::new(
            (cell.col as f64 + 0.5 + (u - 0.5) * CENTER_JITTER) * self.gap.x,
            (cell.row as f64 + 0.5 + (v - 0.5) * CENTER_JITTER) * self.gap.y,
        )
    }
}

#[inline]
fn axis_cells(complexity: f64, ratio: f64) -> usize {
    let n = (complexity * ratio).floor();
    if n > MIN_CELLS as f64 {
        n as usize
    } else {
        MIN_CELLS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_complexity_floors_to_minimum() {
        for complexity in 0..=4 {
            let grid = Grid::for_canvas(complexity, REFERENCE_CANVAS);
            assert_eq!((grid.cols, grid.rows), (4, 4));
        }
    }

    #[test]
    fn reference_canvas_scales_linearly() {
        let grid = Grid::for_canvas(12, REFERENCE_CANVAS);
        assert_eq!((grid.cols, grid.rows), (12, 12));
        assert_eq!(grid.gap, DVec2::new(75.0, 700.0 / 12.0));
    }

    #[test]
    fn aspect_follows_canvas() {
        let grid = Grid::for_canvas(10, DVec2::new(1800.0, 350.0));
        assert_eq!(grid.cols, 20);
        assert_eq!(grid.rows, 5);
        assert_eq!(grid.cell_count(), 100);
        assert_eq!(grid.min_gap(), 70.0);
    }

    #[test]
    fn oversized_grid_has_no_checked_count() {
        let grid = Grid::for_canvas(u32::MAX, DVec2::new(1800.0, 700.0));
        assert_eq!(grid.checked_cell_count(), None);
        assert_eq!(grid.cell_count(), grid.cols.saturating_mul(grid.rows));

        let side = 1 << 11;
        let at_limit = Grid::for_canvas(side, REFERENCE_CANVAS);
        assert_eq!(at_limit.checked_cell_count(), Some(MAX_CELLS));
        let above = Grid::for_canvas(side + 1, REFERENCE_CANVAS);
        assert_eq!(above.checked_cell_count(), None);
    }

    #[test]
    fn cells_are_row_major() {
        let grid = Grid::for_canvas(0, REFERENCE_CANVAS);
        let cells: Vec<_> = grid.cells().take(6).collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(3, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
            ]
        );
        assert_eq!(grid.cells().count(), 16);
    }

    #[test]
    fn jittered_center_stays_within_cell() {
        let grid = Grid::for_canvas(8, REFERENCE_CANVAS);
        let cell = Cell::new(3, 5);
        let origin = grid.cell_origin(cell);
        assert_eq!(
            grid.jittered_center(cell, 0.5, 0.5),
            origin + grid.gap * 0.5
        );
        for (u, v) in [(0.0, 0.0), (0.999, 0.999), (0.0, 0.999)] {
            let p = grid.jittered_center(cell, u, v);
            assert!(p.x > origin.x && p.x < origin.x + grid.gap.x);
            assert!(p.y > origin.y && p.y < origin.y + grid.gap.y);
        }
    }
}
