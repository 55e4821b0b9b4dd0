//! The candidate words of each slot.

use bit_set::BitSet;
use std::fmt;

use crate::{Crossword, VarToken, WordId};

/// The list of candidate words for each variable.
///
/// Cloning is the snapshot mechanism: a search frame clones the store
/// before trying a value and restores the clone if the value fails.
#[derive(Clone, Eq, PartialEq)]
pub struct DomainStore {
    domains: Vec<BitSet>,
}

impl DomainStore {
    /// Allocate domains holding the full vocabulary for every variable.
    pub fn new(crossword: &Crossword) -> Self {
        let full: BitSet = crossword.vocabulary().ids().map(|WordId(idx)| idx).collect();
        DomainStore {
            domains: vec![full; crossword.num_vars()],
        }
    }

    /// Remove every candidate whose length differs from its slot's.
    pub fn enforce_node_consistency(&mut self, crossword: &Crossword) {
        let vocab = crossword.vocabulary();
        for (var, domain) in crossword.variables().iter().zip(self.domains.iter_mut()) {
            let inconsistent: Vec<usize> = domain
                .iter()
                .filter(|&idx| vocab.word_len(WordId(idx)) != var.length)
                .collect();

            for idx in inconsistent {
                domain.remove(idx);
            }
        }
    }

    /// Count the number of candidates for a variable.
    pub fn len(&self, var: VarToken) -> usize {
        self.domains[var.0].len()
    }

    pub fn is_empty(&self, var: VarToken) -> bool {
        self.domains[var.0].is_empty()
    }

    pub fn contains(&self, var: VarToken, word: WordId) -> bool {
        self.domains[var.0].contains(word.0)
    }

    /// Get an iterator over the candidates of a variable.
    pub fn iter(&self, var: VarToken) -> Candidates<'_> {
        Candidates(self.domains[var.0].iter())
    }

    /// Get the only candidate of a variable, or None if it has zero or
    /// several.
    pub fn single(&self, var: VarToken) -> Option<WordId> {
        let mut iter = self.iter(var);
        match (iter.next(), iter.next()) {
            (Some(word), None) => Some(word),
            _ => None,
        }
    }

    /// Remove a single candidate from a variable.  Returns true if it
    /// was present.
    pub fn remove(&mut self, var: VarToken, word: WordId) -> bool {
        self.domains[var.0].remove(word.0)
    }

    /// Reduce a variable's candidates to the single given word.
    pub fn restrict(&mut self, var: VarToken, word: WordId) {
        let domain = &mut self.domains[var.0];
        domain.clear();
        domain.insert(word.0);
    }

    /// Get the number of variables.
    pub fn num_vars(&self) -> usize {
        self.domains.len()
    }
}

/// An iterator over the candidates of a variable, in word order.
pub struct Candidates<'a>(bit_set::Iter<'a, u32>);

impl Iterator for Candidates<'_> {
    type Item = WordId;

    // The size hint of `bit_set::Iter` counts blocks, not members, so the
    // default `(0, None)` is kept.
    fn next(&mut self) -> Option<WordId> {
        self.0.next().map(WordId)
    }
}

impl fmt::Debug for DomainStore {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "DomainStore={{")?;
        for (idx, domain) in self.domains.iter().enumerate() {
            writeln!(f)?;
            write!(f, "  var {}:", idx)?;
            for word in domain.iter() {
                write!(f, " {}", word)?;
            }
        }
        write!(f, "}}")?;
        Ok(())
    }
}
