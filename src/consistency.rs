//! Arc consistency.
//!
//! An arc `(x, y)` is consistent when every candidate of `x` has, at
//! the cell `x` shares with `y`, a letter that some candidate of `y`
//! also has there.  `ac3` revises arcs until every arc is consistent
//! or some domain is wiped out.  Propagation only ever removes words
//! that cannot take part in any solution.

use bit_set::BitSet;
use log::trace;
use std::collections::{HashSet, VecDeque};

use crate::{Crossword, DomainStore, Strategy, VarToken, WordId};

/// A queue of arcs still to be revised, holding each arc at most once.
#[derive(Clone, Debug)]
pub struct ArcQueue {
    num_vars: usize,
    arcs: VecDeque<(VarToken, VarToken)>,
    queued: BitSet,
}

impl ArcQueue {
    /// Allocate an empty queue for the arcs of a puzzle.
    pub fn new(crossword: &Crossword) -> Self {
        let num_vars = crossword.num_vars();
        ArcQueue {
            num_vars,
            arcs: VecDeque::new(),
            queued: BitSet::with_capacity(num_vars * num_vars),
        }
    }

    /// Queue every ordered pair of crossing slots.
    pub fn all(crossword: &Crossword) -> Self {
        let mut queue = ArcQueue::new(crossword);
        queue.extend(crossword.arcs());
        queue
    }

    /// Add an arc unless it is already queued.  Returns true if added.
    ///
    /// # Panics
    ///
    /// Panics if either slot is not a variable of the queue's puzzle.
    pub fn push(&mut self, x: VarToken, y: VarToken) -> bool {
        let key = self.key(x, y);
        if self.queued.insert(key) {
            self.arcs.push_back((x, y));
            true
        } else {
            false
        }
    }

    /// Remove an arc, chosen by the strategy: the oldest when
    /// deterministic, any when random.
    pub fn pop(&mut self, strategy: &mut Strategy) -> Option<(VarToken, VarToken)> {
        if self.arcs.is_empty() {
            return None;
        }

        let idx = strategy.pick(self.arcs.len());
        let (x, y) = if idx == 0 {
            self.arcs.pop_front()?
        } else {
            self.arcs.swap_remove_back(idx)?
        };
        let key = self.key(x, y);
        self.queued.remove(key);
        Some((x, y))
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    fn key(&self, x: VarToken, y: VarToken) -> usize {
        assert!(
            x.0 < self.num_vars && y.0 < self.num_vars,
            "arc ({}, {}) outside a queue for {} variables",
            x.0,
            y.0,
            self.num_vars
        );
        x.0 * self.num_vars + y.0
    }
}

impl Extend<(VarToken, VarToken)> for ArcQueue {
    fn extend<I: IntoIterator<Item = (VarToken, VarToken)>>(&mut self, iter: I) {
        for (x, y) in iter {
            self.push(x, y);
        }
    }
}

/// Make `x` arc consistent with `y` by removing every candidate of `x`
/// that no candidate of `y` agrees with at their shared cell.
///
/// Returns true if the domain of `x` changed.  Slots that do not cross
/// are never revised.
pub fn revise(crossword: &Crossword, domains: &mut DomainStore, x: VarToken, y: VarToken) -> bool {
    let Some((i, j)) = crossword.overlaps(x, y) else {
        return false;
    };

    let vocab = crossword.vocabulary();
    let supported: HashSet<char> = domains
        .iter(y)
        .filter_map(|word| vocab.letters(word).get(j).copied())
        .collect();

    let inconsistent: Vec<WordId> = domains
        .iter(x)
        .filter(|&word| {
            vocab
                .letters(word)
                .get(i)
                .map_or(true, |c| !supported.contains(c))
        })
        .collect();

    for &word in inconsistent.iter() {
        domains.remove(x, word);
    }

    !inconsistent.is_empty()
}

/// Enforce arc consistency, starting from `arcs` or, if None, from
/// every arc in the puzzle.
///
/// Returns false as soon as some domain becomes empty, in which case no
/// assignment can satisfy the crossings from this domain state.  The
/// order in which arcs are revised comes from the strategy; it affects
/// the running time, not the result.
pub fn ac3(
    crossword: &Crossword,
    domains: &mut DomainStore,
    arcs: Option<ArcQueue>,
    strategy: &mut Strategy,
) -> bool {
    let mut queue = arcs.unwrap_or_else(|| ArcQueue::all(crossword));
    let mut revisions = 0;

    while let Some((x, y)) = queue.pop(strategy) {
        if !revise(crossword, domains, x, y) {
            continue;
        }

        revisions += 1;
        trace!("ac3: revised var {} against var {}, {} left", x.0, y.0, domains.len(x));

        if domains.is_empty(x) {
            trace!("ac3: var {} wiped out after {} revisions", x.0, revisions);
            return false;
        }

        queue.extend(crossword.neighbors(x).filter(|&z| z != y).map(|z| (z, x)));
    }

    true
}
