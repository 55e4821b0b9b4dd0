//! The solution search.

use log::{debug, trace};
use std::collections::HashSet;

use crate::consistency::{self, ArcQueue};
use crate::{Assignment, Crossword, DomainStore, Strategy, VarToken, WordId};

/// Backtracking search over a puzzle's domains.
///
/// The solver owns the domains it narrows.  Every value tried during
/// the search works on a snapshot of the domains, so a failed value
/// leaves the domains exactly as it found them.
#[derive(Clone, Debug)]
pub struct Solver<'a> {
    crossword: &'a Crossword,
    domains: DomainStore,
    strategy: Strategy,

    // Counters for the last search.
    num_guesses: u32,
    num_backtracks: u32,
}

impl<'a> Solver<'a> {
    /// Allocate a solver whose domains hold the full vocabulary.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_solver::{Crossword, Solver};
    ///
    /// let crossword = Crossword::parse("___\n##_\n##_\n", "cat\ntoe").unwrap();
    /// let assignment = Solver::new(&crossword).solve().expect("solution");
    /// assert!(assignment.is_complete());
    /// ```
    pub fn new(crossword: &'a Crossword) -> Self {
        Solver {
            crossword,
            domains: DomainStore::new(crossword),
            strategy: Strategy::default(),
            num_guesses: 0,
            num_backtracks: 0,
        }
    }

    /// Use the given strategy to break ties and order arcs.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_solver::{Crossword, Solver, Strategy};
    ///
    /// let crossword = Crossword::parse("____\n", "word\nmind").unwrap();
    /// let mut solver = Solver::new(&crossword).with_strategy(Strategy::seeded(3));
    /// assert!(solver.solve().is_some());
    /// ```
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn crossword(&self) -> &'a Crossword {
        self.crossword
    }

    /// Get the current domains.
    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    /// Get the number of values tried by the last search.
    pub fn num_guesses(&self) -> u32 {
        self.num_guesses
    }

    /// Get the number of values undone by the last search.
    pub fn num_backtracks(&self) -> u32 {
        self.num_backtracks
    }

    /// Find any solution to the puzzle, or None if there is none.
    ///
    /// Afterwards the domains are those left by node and arc
    /// consistency, whatever the search committed.
    pub fn solve(&mut self) -> Option<Assignment> {
        self.num_guesses = 0;
        self.num_backtracks = 0;

        self.step()?;
        let settled = self.domains.clone();

        let assignment = Assignment::new(self.crossword.num_vars());
        let result = self.backtrack(assignment);
        self.domains = settled;
        debug!(
            "search {} after {} guesses, {} backtracks",
            if result.is_some() { "succeeded" } else { "failed" },
            self.num_guesses,
            self.num_backtracks
        );
        result
    }

    /// Enforce node and arc consistency without guessing.  Primarily
    /// for testing.
    ///
    /// Returns the reduced domains, or None if a contradiction was
    /// found.
    pub fn step(&mut self) -> Option<&DomainStore> {
        self.enforce_node_consistency();
        if !self.ac3(None) {
            debug!("arc consistency emptied a domain, no solution");
            return None;
        }

        Some(&self.domains)
    }

    /// Remove candidates whose length differs from their slot's.
    pub fn enforce_node_consistency(&mut self) {
        self.domains.enforce_node_consistency(self.crossword);
    }

    /// Make `x` arc consistent with `y`.  See `consistency::revise`.
    pub fn revise(&mut self, x: VarToken, y: VarToken) -> bool {
        consistency::revise(self.crossword, &mut self.domains, x, y)
    }

    /// Enforce arc consistency.  See `consistency::ac3`.
    pub fn ac3(&mut self, arcs: Option<ArcQueue>) -> bool {
        consistency::ac3(self.crossword, &mut self.domains, arcs, &mut self.strategy)
    }

    /// Choose the next variable to assign: the one with the fewest
    /// candidates, then the one crossing the most slots, then by the
    /// strategy.  Returns None if every variable is assigned.
    pub fn select_unassigned_variable(&mut self, assignment: &Assignment) -> Option<VarToken> {
        let unassigned: Vec<VarToken> = self
            .crossword
            .tokens()
            .filter(|&var| !assignment.contains(var))
            .collect();

        let min_len = unassigned.iter().map(|&var| self.domains.len(var)).min()?;
        let remaining: Vec<VarToken> = unassigned
            .into_iter()
            .filter(|&var| self.domains.len(var) == min_len)
            .collect();

        let max_degree = remaining.iter().map(|&var| self.crossword.degree(var)).max()?;
        let tied: Vec<VarToken> = remaining
            .into_iter()
            .filter(|&var| self.crossword.degree(var) == max_degree)
            .collect();

        let idx = self.strategy.pick(tied.len());
        Some(tied[idx])
    }

    /// List the candidates of `var` not used elsewhere in the
    /// assignment, least constraining first: ascending by the number of
    /// unassigned crossing slots that still hold the word.
    pub fn order_domain_values(&self, var: VarToken, assignment: &Assignment) -> Vec<WordId> {
        let mut values: Vec<(usize, WordId)> = self
            .domains
            .iter(var)
            .filter(|&word| !assignment.uses(word, Some(var)))
            .map(|word| {
                let ruled_out = self
                    .crossword
                    .neighbors(var)
                    .filter(|&n| !assignment.contains(n) && self.domains.contains(n, word))
                    .count();
                (ruled_out, word)
            })
            .collect();

        values.sort_by_key(|&(ruled_out, _)| ruled_out);
        values.into_iter().map(|(_, word)| word).collect()
    }

    /// Check that every assigned word fits its slot, agrees with its
    /// assigned crossings, and is used only once.
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        let vocab = self.crossword.vocabulary();
        let mut used = HashSet::new();

        for (var, word) in assignment.iter() {
            if vocab.word_len(word) != self.crossword.variable(var).length {
                return false;
            }

            if !used.insert(word) {
                return false;
            }

            for other in self.crossword.neighbors(var) {
                let Some(other_word) = assignment.get(other) else {
                    continue;
                };
                let Some((i, j)) = self.crossword.overlaps(var, other) else {
                    continue;
                };
                if vocab.letters(word).get(i) != vocab.letters(other_word).get(j) {
                    return false;
                }
            }
        }

        true
    }

    /// Propagate the value just given to `var`, then commit every
    /// unassigned variable left with a single candidate.
    ///
    /// Returns the variables committed this way, or None if
    /// propagation emptied a domain (nothing is committed then).
    pub fn inference(&mut self, assignment: &mut Assignment, var: VarToken) -> Option<Vec<VarToken>> {
        let mut arcs = ArcQueue::new(self.crossword);
        arcs.extend(self.crossword.neighbors(var).map(|n| (n, var)));
        if !self.ac3(Some(arcs)) {
            return None;
        }

        let mut inferred = Vec::new();
        for other in self.crossword.tokens() {
            if assignment.contains(other) {
                continue;
            }
            if let Some(word) = self.domains.single(other) {
                assignment.insert(other, word);
                inferred.push(other);
            }
        }

        if !inferred.is_empty() {
            trace!("inferred {} variables after var {}", inferred.len(), var.0);
        }
        Some(inferred)
    }

    /// Extend the assignment to a complete, consistent one.
    ///
    /// Returns None if no extension exists.  Failure is not an error:
    /// it means no value works for some variable along this path.
    ///
    /// # Panics
    ///
    /// Panics if the assignment was not made for this puzzle's
    /// variables.
    pub fn backtrack(&mut self, mut assignment: Assignment) -> Option<Assignment> {
        assert_eq!(
            assignment.num_vars(),
            self.crossword.num_vars(),
            "assignment sized for a different puzzle"
        );

        if self.extend(&mut assignment) {
            Some(assignment)
        } else {
            None
        }
    }

    /// Recursive step of `backtrack`.  On failure the assignment and
    /// the domains are left as they were on entry.
    fn extend(&mut self, assignment: &mut Assignment) -> bool {
        if assignment.is_complete() {
            return true;
        }

        let Some(var) = self.select_unassigned_variable(assignment) else {
            return true;
        };

        for value in self.order_domain_values(var, assignment) {
            self.num_guesses += 1;
            trace!(
                "var {} = {} (depth {})",
                var.0,
                self.crossword.word(value),
                assignment.len()
            );

            let snapshot = self.domains.clone();
            let mut inferred = Vec::new();
            assignment.insert(var, value);

            if self.consistent(assignment) {
                self.domains.restrict(var, value);
                if let Some(vars) = self.inference(assignment, var) {
                    inferred = vars;
                    if self.consistent(assignment) && self.extend(assignment) {
                        return true;
                    }
                }
            }

            assignment.remove(var);
            for other in inferred {
                assignment.remove(other);
            }
            self.domains = snapshot;
            self.num_backtracks += 1;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::Solver;
    use crate::{Assignment, Crossword, Strategy, VarToken};

    const CORNER: &str = "___\n##_\n##_\n";

    fn assign(crossword: &Crossword, words: &[(usize, &str)]) -> Assignment {
        let mut assignment = Assignment::new(crossword.num_vars());
        for &(var, word) in words {
            let word = crossword.vocabulary().find(word).expect("word");
            assignment.insert(VarToken(var), word);
        }
        assignment
    }

    #[test]
    fn test_no_vars() {
        let crossword = Crossword::parse("#_#\n", "cat").unwrap();
        let mut solver = Solver::new(&crossword);
        let assignment = solver.solve().expect("solution");
        assert!(assignment.is_empty());
        assert!(assignment.is_complete());
        assert_eq!(solver.num_guesses(), 0);
    }

    #[test]
    fn solve_keeps_settled_domains() {
        let crossword = Crossword::parse(CORNER, "cat\ncar\ntoe\nrye\ndog").unwrap();
        let mut solver = Solver::new(&crossword);
        let settled = solver.step().expect("consistent").clone();
        assert_eq!(settled.len(VarToken(0)), 2);

        let mut solver = Solver::new(&crossword);
        assert!(solver.solve().is_some());
        assert!(solver.num_guesses() > 0);
        assert_eq!(solver.domains(), &settled);

        // A second search starts from the same domains.
        assert!(solver.solve().is_some());
        assert_eq!(solver.domains(), &settled);
    }

    #[test]
    #[should_panic(expected = "different puzzle")]
    fn backtrack_rejects_foreign_assignment() {
        let crossword = Crossword::parse(CORNER, "cat\ntoe").unwrap();
        let mut solver = Solver::new(&crossword);
        solver.backtrack(Assignment::new(crossword.num_vars() + 1));
    }

    #[test]
    fn consistent_checks_crossings() {
        let crossword = Crossword::parse(CORNER, "cat\ntoe\ndog").unwrap();
        let solver = Solver::new(&crossword);
        assert!(solver.consistent(&assign(&crossword, &[(0, "CAT"), (1, "TOE")])));
        assert!(solver.consistent(&assign(&crossword, &[(0, "DOG")])));
        assert!(!solver.consistent(&assign(&crossword, &[(0, "DOG"), (1, "TOE")])));
    }

    #[test]
    fn consistent_rejects_repeats() {
        let crossword = Crossword::parse("___\n###\n___\n", "cat\ndog").unwrap();
        let solver = Solver::new(&crossword);
        assert!(solver.consistent(&assign(&crossword, &[(0, "CAT"), (1, "DOG")])));
        assert!(!solver.consistent(&assign(&crossword, &[(0, "CAT"), (1, "CAT")])));
    }

    #[test]
    fn consistent_rejects_wrong_length() {
        let crossword = Crossword::parse("___\n", "cat\nword").unwrap();
        let solver = Solver::new(&crossword);
        assert!(!solver.consistent(&assign(&crossword, &[(0, "WORD")])));
    }

    #[test]
    fn select_prefers_fewest_candidates() {
        // Across slots of length 3 and 4; only one 4-letter word.
        let crossword = Crossword::parse("___#____\n", "cat\ndog\nowl\nmind").unwrap();
        let mut solver = Solver::new(&crossword);
        solver.enforce_node_consistency();
        let empty = Assignment::new(crossword.num_vars());
        assert_eq!(solver.select_unassigned_variable(&empty), Some(VarToken(1)));

        let partial = assign(&crossword, &[(1, "MIND")]);
        assert_eq!(solver.select_unassigned_variable(&partial), Some(VarToken(0)));

        let full = assign(&crossword, &[(0, "CAT"), (1, "MIND")]);
        assert_eq!(solver.select_unassigned_variable(&full), None);
    }

    #[test]
    fn select_breaks_ties_by_degree() {
        // The down slot crosses both across slots.
        let crossword = Crossword::parse("___\n_##\n___\n", "cat\ncot\ntan\ntic").unwrap();
        let mut solver = Solver::new(&crossword);
        solver.enforce_node_consistency();
        let down = crossword.tokens().find(|&v| crossword.degree(v) == 2).unwrap();
        let empty = Assignment::new(crossword.num_vars());
        for seed in 0..10 {
            let mut solver = solver.clone().with_strategy(Strategy::seeded(seed));
            assert_eq!(solver.select_unassigned_variable(&empty), Some(down));
        }
    }

    #[test]
    fn order_skips_used_words() {
        let crossword = Crossword::parse("___\n###\n___\n", "cat\ndog\nowl").unwrap();
        let mut solver = Solver::new(&crossword);
        solver.enforce_node_consistency();
        let partial = assign(&crossword, &[(0, "DOG")]);
        let values: Vec<&str> = solver
            .order_domain_values(VarToken(1), &partial)
            .into_iter()
            .map(|w| crossword.word(w))
            .collect();
        assert_eq!(values, vec!["CAT", "OWL"]);
    }

    #[test]
    fn order_least_constraining_first() {
        // CAT also fits the unassigned down slot; TOE does not.
        let crossword = Crossword::parse("___\n_##\n_##\n", "cat\ntoe").unwrap();
        let mut solver = Solver::new(&crossword);
        solver.enforce_node_consistency();
        let across = VarToken(0);
        let down = VarToken(1);
        solver.domains.remove(down, crossword.vocabulary().find("TOE").unwrap());

        let empty = Assignment::new(crossword.num_vars());
        let values: Vec<&str> = solver
            .order_domain_values(across, &empty)
            .into_iter()
            .map(|w| crossword.word(w))
            .collect();
        assert_eq!(values, vec!["TOE", "CAT"]);
    }

    #[test]
    fn order_counts_every_crossing() {
        // Each slot crosses three others.
        let crossword = Crossword::parse("___\n___\n___\n", "abc\nbca\ncab\naaa").unwrap();
        assert_eq!(crossword.num_vars(), 6);
        for var in crossword.tokens() {
            assert_eq!(crossword.degree(var), 3);
            assert_eq!(crossword.neighbors(var).count(), 3);
        }

        let mut solver = Solver::new(&crossword);
        solver.enforce_node_consistency();
        let empty = Assignment::new(crossword.num_vars());
        let values = solver.order_domain_values(VarToken(0), &empty);
        assert_eq!(values.len(), 4);

        // Every word is held by all three crossings, so the order is the
        // vocabulary order.
        let words: Vec<&str> = values.into_iter().map(|w| crossword.word(w)).collect();
        assert_eq!(words, vec!["AAA", "ABC", "BCA", "CAB"]);

        for seed in 0..4 {
            let mut solver = Solver::new(&crossword).with_strategy(Strategy::seeded(seed));
            assert!(solver.solve().is_none());
        }
    }

    #[test]
    fn inference_commits_forced_variables() {
        let crossword = Crossword::parse(CORNER, "cat\ncar\ntoe\nrye\ndog").unwrap();
        let mut solver = Solver::new(&crossword);
        solver.enforce_node_consistency();

        let mut assignment = assign(&crossword, &[(0, "CAT")]);
        solver.domains.restrict(VarToken(0), assignment[VarToken(0)]);
        let inferred = solver.inference(&mut assignment, VarToken(0)).expect("consistent");
        assert_eq!(inferred, vec![VarToken(1)]);
        assert_eq!(crossword.word(assignment[VarToken(1)]), "TOE");
    }

    #[test]
    fn inference_reports_wipeout() {
        let crossword = Crossword::parse(CORNER, "cat\ndog\nowl").unwrap();
        let mut solver = Solver::new(&crossword);
        solver.enforce_node_consistency();

        let mut assignment = assign(&crossword, &[(0, "CAT")]);
        solver.domains.restrict(VarToken(0), assignment[VarToken(0)]);
        assert_eq!(solver.inference(&mut assignment, VarToken(0)), None);
        assert_eq!(assignment.len(), 1);
    }

    #[test]
    fn failed_search_restores_domains() {
        let crossword = Crossword::parse("___\n_#_\n___\n", "cab\ntab\ntic\nbat").unwrap();
        let mut solver = Solver::new(&crossword);
        solver.enforce_node_consistency();
        let before = solver.domains().clone();

        let result = solver.backtrack(Assignment::new(crossword.num_vars()));
        assert!(result.is_none());
        assert_eq!(solver.domains(), &before);
    }
}
