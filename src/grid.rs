//! The grid structure: which cells can hold a letter.

use std::fmt;

use crate::{Error, Result};

/// The character marking a fillable cell in a grid file.
pub const FILLABLE: char = '_';

/// A rectangular grid of fillable and blocked cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Build a grid from rows of cells, `true` marking a fillable cell.
    ///
    /// # Examples
    ///
    /// ```
    /// let grid = crossword_solver::Grid::new(vec![
    ///     vec![true, true, true],
    ///     vec![false, false, true],
    /// ]).unwrap();
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    /// ```
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(Error::MalformedGrid(String::from("grid is empty")));
        }

        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(Error::MalformedGrid(format!(
                "row {} has {} cells, expected {}",
                row,
                rows[row].len(),
                width
            )));
        }

        Ok(Grid {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse a grid from text, one row per line.  `_` marks a fillable
    /// cell; any other character marks a blocked cell.
    ///
    /// # Examples
    ///
    /// ```
    /// let grid = crossword_solver::Grid::parse("___\n##_\n##_\n").unwrap();
    /// assert!(grid.is_fillable(0, 0));
    /// assert!(!grid.is_fillable(1, 0));
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .map(|line| line.chars().map(|c| c == FILLABLE).collect())
            .collect();
        Grid::new(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether a cell can hold a letter.  Cells outside the grid
    /// are blocked.
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && self.cells[row * self.width + col]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let c = if self.is_fillable(row, col) { FILLABLE } else { '#' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
