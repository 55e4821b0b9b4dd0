//! This crate fills crossword grids from a word list.
//! Slots are variables, words are candidates, and crossings are
//! constraints; the solver combines AC-3 propagation with
//! backtracking search.

pub mod consistency;
pub mod load;
pub mod render;

mod crossword;
mod domain;
mod error;
mod grid;
mod search;
mod strategy;
mod vocabulary;

use std::ops;

pub use crossword::Crossword;
pub use domain::{Candidates, DomainStore};
pub use error::Error;
pub use grid::Grid;
pub use search::Solver;
pub use strategy::Strategy;
pub use vocabulary::Vocabulary;

/// A puzzle variable token: the index of a slot in `Crossword::variables`.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VarToken(pub usize);

/// A word token: the index of a word in the vocabulary.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WordId(pub usize);

/// The result of a fallible puzzle operation.
pub type Result<T> = std::result::Result<T, Error>;

/// The direction a slot runs in.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Direction {
    Across,
    Down,
}

/// A slot in the grid to be filled by one word.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    /// The cell holding letter `k` of the slot.
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }

    /// Iterate over the cells of the slot, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |k| self.cell(k))
    }
}

/// A partial or complete mapping from puzzle variables to words.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Assignment {
    words: Vec<Option<WordId>>,
    count: usize,
}

impl Assignment {
    /// An empty assignment for a puzzle with `num_vars` variables.
    pub fn new(num_vars: usize) -> Self {
        Assignment {
            words: vec![None; num_vars],
            count: 0,
        }
    }

    /// Get the word assigned to a variable, or None.
    pub fn get(&self, var: VarToken) -> Option<WordId> {
        let VarToken(idx) = var;
        self.words.get(idx).copied().flatten()
    }

    pub fn contains(&self, var: VarToken) -> bool {
        self.get(var).is_some()
    }

    /// Assign a word to a variable, returning the previous word.
    pub fn insert(&mut self, var: VarToken, word: WordId) -> Option<WordId> {
        let VarToken(idx) = var;
        let prev = self.words[idx].replace(word);
        if prev.is_none() {
            self.count += 1;
        }
        prev
    }

    /// Unassign a variable, returning its word.
    pub fn remove(&mut self, var: VarToken) -> Option<WordId> {
        let VarToken(idx) = var;
        let prev = self.words.get_mut(idx).and_then(Option::take);
        if prev.is_some() {
            self.count -= 1;
        }
        prev
    }

    /// Check whether some variable other than `except` holds `word`.
    pub fn uses(&self, word: WordId, except: Option<VarToken>) -> bool {
        self.iter()
            .any(|(var, w)| w == word && Some(var) != except)
    }

    /// The number of assigned variables.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The number of variables, assigned or not.
    pub fn num_vars(&self) -> usize {
        self.words.len()
    }

    /// Check whether every variable has a word.
    pub fn is_complete(&self) -> bool {
        self.count == self.words.len()
    }

    /// Iterate over the assigned variables and their words.
    pub fn iter(&self) -> impl Iterator<Item = (VarToken, WordId)> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(idx, w)| w.map(|w| (VarToken(idx), w)))
    }
}

impl ops::Index<VarToken> for Assignment {
    type Output = WordId;

    /// Get the word assigned to a variable.
    ///
    /// # Panics
    ///
    /// Panics if the variable has not been assigned.
    fn index(&self, var: VarToken) -> &WordId {
        let VarToken(idx) = var;
        self.words[idx].as_ref().expect("unassigned")
    }
}
