// grid.rs - Dense boolean grid and neighbour counting

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LifeError;
use crate::rule::{self, NEIGHBOUR_OFFSETS};

pub const DEFAULT_ROWS: usize = 30;
pub const DEFAULT_COLS: usize = 30;

/// How neighbours past the grid edge are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Cells beyond the edge are permanently dead.
    Clamped,
    /// Edges wrap around (toroidal topology).
    #[default]
    Wrapped,
}

/// Fixed-size, row-major grid of cells. `true` is alive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// All-dead grid. Callers validate that both dimensions are non-zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell state, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.contains(row, col).then(|| self.cells[self.index(row, col)])
    }

    /// Cell state; out-of-range cells read as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, alive: bool) {
        if self.contains(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = alive;
        }
    }

    pub(crate) fn toggle(&mut self, row: usize, col: usize) {
        if self.contains(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = !self.cells[idx];
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = false);
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Rows as slices, top to bottom.
    pub fn row_slices(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// Positions of all live cells in row-major order.
    pub fn live_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| (idx / self.cols, idx % self.cols))
    }

    /// Live cells among the eight Moore neighbours of (row, col).
    ///
    /// Under [`BoundaryMode::Wrapped`] on grids narrower than three cells the
    /// same physical cell can be counted more than once, exactly as modular
    /// indexing implies.
    pub fn live_neighbours(&self, row: usize, col: usize, mode: BoundaryMode) -> u8 {
        let rows = self.rows as isize;
        let cols = self.cols as isize;
        let mut count = 0;

        for &(dr, dc) in &NEIGHBOUR_OFFSETS {
            let r = row as isize + dr;
            let c = col as isize + dc;

            let alive = match mode {
                BoundaryMode::Clamped => {
                    r >= 0 && r < rows && c >= 0 && c < cols
                        && self.cells[self.index(r as usize, c as usize)]
                }
                BoundaryMode::Wrapped => {
                    let r = r.rem_euclid(rows) as usize;
                    let c = c.rem_euclid(cols) as usize;
                    self.cells[self.index(r, c)]
                }
            };
            if alive { count += 1; }
        }
        count
    }

    /// Writes the next generation of `self` into `next`.
    ///
    /// Every cell is computed from `self` only, so all cells update
    /// simultaneously. `next` must have the same dimensions.
    pub fn next_generation_into(&self, mode: BoundaryMode, next: &mut Grid) {
        debug_assert_eq!(self.dimensions(), next.dimensions());

        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(row, col);
                let count = self.live_neighbours(row, col, mode);
                next.cells[idx] = rule::next_state(self.cells[idx], count);
            }
        }
    }

    /// Pure form of [`Grid::next_generation_into`].
    pub fn next_generation(&self, mode: BoundaryMode) -> Grid {
        let mut next = Grid::new(self.rows, self.cols);
        self.next_generation_into(mode, &mut next);
        next
    }
}

/// Renders one line per row, `#` for alive and `.` for dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_slices().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) form. `#`, `O`, `*` and `1` are alive;
/// `.`, `_` and `0` are dead. Lines are trimmed and blank lines skipped.
impl FromStr for Grid {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());
        if rows == 0 || cols == 0 {
            return Err(LifeError::Parse("grid text is empty".to_string()));
        }

        let mut grid = Grid::new(rows, cols);
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(LifeError::Parse(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    cols
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                let alive = match ch {
                    '#' | 'O' | '*' | '1' => true,
                    '.' | '_' | '0' => false,
                    other => {
                        return Err(LifeError::Parse(format!(
                            "unexpected character {:?} at ({}, {})",
                            other, row, col
                        )));
                    }
                };
                grid.set(row, col, alive);
            }
        }
        Ok(grid)
    }
}
