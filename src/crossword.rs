//! The puzzle model: slots, crossings and words.

use bit_set::BitSet;
use std::collections::HashMap;

use crate::{Assignment, Direction, Grid, Result, VarToken, Variable, Vocabulary, WordId};

/// The puzzle to be solved.  Immutable once built.
#[derive(Debug)]
pub struct Crossword {
    grid: Grid,
    vocabulary: Vocabulary,
    variables: Vec<Variable>,

    // The slots covering each cell, with the letter index of the cell
    // within each slot.
    cell_vars: Vec<Vec<(VarToken, usize)>>,

    // For each crossing pair (x, y), the letter index into x and into y
    // of the shared cell.
    overlaps: HashMap<(VarToken, VarToken), (usize, usize)>,

    // The slots crossing each slot, in token order.
    neighbors: Vec<Vec<VarToken>>,
}

impl Crossword {
    /// Build a puzzle from a grid and a vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_solver::{Crossword, Grid, Vocabulary};
    ///
    /// let grid = Grid::parse("___\n##_\n##_\n").unwrap();
    /// let vocab = Vocabulary::new(["CAT", "TOE"]).unwrap();
    /// let crossword = Crossword::new(grid, vocab);
    /// assert_eq!(crossword.variables().len(), 2);
    /// ```
    pub fn new(grid: Grid, vocabulary: Vocabulary) -> Self {
        let variables = find_variables(&grid);

        let mut cell_vars = vec![Vec::new(); grid.width() * grid.height()];
        for (idx, var) in variables.iter().enumerate() {
            for (k, (row, col)) in var.cells().enumerate() {
                cell_vars[row * grid.width() + col].push((VarToken(idx), k));
            }
        }

        let mut overlaps = HashMap::new();
        let mut crossing = vec![BitSet::new(); variables.len()];
        for covering in cell_vars.iter() {
            for &(x, i) in covering.iter() {
                for &(y, j) in covering.iter() {
                    if x != y {
                        overlaps.insert((x, y), (i, j));
                        crossing[x.0].insert(y.0);
                    }
                }
            }
        }

        // `bit_set::Iter::size_hint` counts blocks, not members, so it must
        // not reach callers.
        let neighbors = crossing
            .iter()
            .map(|set| set.iter().map(VarToken).collect())
            .collect();

        Crossword {
            grid,
            vocabulary,
            variables,
            cell_vars,
            overlaps,
            neighbors,
        }
    }

    /// Parse a puzzle from grid text and word list text.
    pub fn parse(grid: &str, words: &str) -> Result<Self> {
        Ok(Crossword::new(Grid::parse(grid)?, Vocabulary::parse(words)?))
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        self.grid.is_fillable(row, col)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Get the text of a word.
    pub fn word(&self, id: WordId) -> &str {
        self.vocabulary.word(id)
    }

    /// Get the number of slots.
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Get all of the slots, indexed by `VarToken`.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Get the slot for a token.
    pub fn variable(&self, var: VarToken) -> &Variable {
        let VarToken(idx) = var;
        &self.variables[idx]
    }

    /// Iterate over all slot tokens.
    pub fn tokens(&self) -> impl Iterator<Item = VarToken> {
        (0..self.variables.len()).map(VarToken)
    }

    /// Find the token of a slot.
    pub fn token(&self, variable: &Variable) -> Option<VarToken> {
        self.variables
            .iter()
            .position(|v| v == variable)
            .map(VarToken)
    }

    /// Get the cells of a slot, in word order.
    pub fn cells(&self, var: VarToken) -> Vec<(usize, usize)> {
        self.variable(var).cells().collect()
    }

    /// Get the letter indices of the cell shared by two slots, or None
    /// if they do not cross.
    pub fn overlaps(&self, x: VarToken, y: VarToken) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Iterate over the slots crossing a slot.
    pub fn neighbors(&self, var: VarToken) -> impl Iterator<Item = VarToken> + '_ {
        let VarToken(idx) = var;
        self.neighbors[idx].iter().copied()
    }

    /// Get the number of slots crossing a slot.
    pub fn degree(&self, var: VarToken) -> usize {
        let VarToken(idx) = var;
        self.neighbors[idx].len()
    }

    /// Iterate over every ordered pair of crossing slots.
    pub fn arcs(&self) -> impl Iterator<Item = (VarToken, VarToken)> + '_ {
        self.tokens()
            .flat_map(move |x| self.neighbors(x).map(move |y| (x, y)))
    }

    /// Get the letter an assignment puts in a cell, or None if the cell
    /// is blocked or no slot covering it is assigned.
    pub fn letter_at(&self, row: usize, col: usize, assignment: &Assignment) -> Option<char> {
        if !self.is_fillable(row, col) {
            return None;
        }

        self.cell_vars[row * self.width() + col]
            .iter()
            .find_map(|&(var, k)| {
                let word = assignment.get(var)?;
                self.vocabulary.letters(word).get(k).copied()
            })
    }

    /// Get the letters an assignment puts in every cell.
    pub fn letter_grid(&self, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
        (0..self.height())
            .map(|row| {
                (0..self.width())
                    .map(|col| self.letter_at(row, col, assignment))
                    .collect()
            })
            .collect()
    }
}

/// Find the maximal runs of two or more fillable cells, across then down.
fn find_variables(grid: &Grid) -> Vec<Variable> {
    let mut result = Vec::new();

    for row in 0..grid.height() {
        let mut col = 0;
        while col < grid.width() {
            let start = col;
            while grid.is_fillable(row, col) {
                col += 1;
            }
            if col - start >= 2 {
                result.push(Variable {
                    row,
                    col: start,
                    direction: Direction::Across,
                    length: col - start,
                });
            }
            col += 1;
        }
    }

    for col in 0..grid.width() {
        let mut row = 0;
        while row < grid.height() {
            let start = row;
            while grid.is_fillable(row, col) {
                row += 1;
            }
            if row - start >= 2 {
                result.push(Variable {
                    row: start,
                    col,
                    direction: Direction::Down,
                    length: row - start,
                });
            }
            row += 1;
        }
    }

    result
}
