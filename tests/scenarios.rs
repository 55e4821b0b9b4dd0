//! Small crosswords with known outcomes.

use crossword_solver::{Assignment, Crossword, Solver, Strategy, VarToken};

/// One across slot crossing the first letter of one down slot at the
/// across slot's last letter.
const CORNER: &str = "___\n##_\n##_\n";

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn words(crossword: &Crossword, assignment: &Assignment) -> Vec<String> {
    crossword
        .tokens()
        .map(|var| crossword.word(assignment[var]).to_string())
        .collect()
}

fn verify(crossword: &Crossword, assignment: &Assignment) {
    assert!(assignment.is_complete());
    assert!(Solver::new(crossword).consistent(assignment));
    for var in crossword.tokens() {
        let word = crossword.word(assignment[var]);
        for (k, (row, col)) in crossword.cells(var).into_iter().enumerate() {
            assert_eq!(
                crossword.letter_at(row, col, assignment),
                word.chars().nth(k)
            );
        }
    }
}

#[test]
fn corner_crossing() {
    init_logging();
    let crossword = Crossword::parse(CORNER, "cat\ncar\ndog\nace\ntoe").unwrap();
    let (across, down) = (VarToken(0), VarToken(1));

    for seed in 0..8 {
        let mut solver = Solver::new(&crossword).with_strategy(Strategy::seeded(seed));
        let assignment = solver.solve().expect("solution");
        verify(&crossword, &assignment);

        let across_word = crossword.word(assignment[across]);
        let down_word = crossword.word(assignment[down]);
        assert_eq!(across_word.len(), 3);
        assert_eq!(down_word.len(), 3);
        assert_eq!(across_word.chars().nth(2), down_word.chars().next());
        assert_eq!((across_word, down_word), ("CAT", "TOE"));
    }
}

#[test]
fn corner_without_compatible_pair() {
    init_logging();

    // No word starts with the last letter of another.
    let crossword = Crossword::parse(CORNER, "cat\ncar\ndog\nace").unwrap();
    assert!(Solver::new(&crossword).solve().is_none());

    let crossword = Crossword::parse(CORNER, "cat\ndog").unwrap();
    let mut solver = Solver::new(&crossword);
    assert!(solver.solve().is_none());

    let mut solver = Solver::new(&crossword);
    solver.enforce_node_consistency();
    let assignment = Assignment::new(crossword.num_vars());
    assert!(solver.backtrack(assignment).is_none());
}

#[test]
fn isolated_slot() {
    init_logging();
    let crossword = Crossword::parse("____\n", "word\nmind").unwrap();
    for seed in 0..8 {
        let mut solver = Solver::new(&crossword).with_strategy(Strategy::seeded(seed));
        let assignment = solver.solve().expect("solution");
        let word = crossword.word(assignment[VarToken(0)]);
        assert!(word == "WORD" || word == "MIND");
    }
}

#[test]
fn all_cells_blocked() {
    let crossword = Crossword::parse("###\n###\n", "cat").unwrap();
    assert_eq!(crossword.num_vars(), 0);

    let mut solver = Solver::new(&crossword);
    let assignment = solver
        .backtrack(Assignment::new(0))
        .expect("empty assignment");
    assert!(assignment.is_empty());
    assert!(solver.solve().expect("empty assignment").is_complete());
}

#[test]
fn unused_lengths_leave_domains() {
    let crossword = Crossword::parse(CORNER, "cat\ntoe\nhouse\na").unwrap();
    let mut solver = Solver::new(&crossword);
    let domains = solver.step().expect("consistent");

    for word in ["HOUSE", "A"] {
        let id = crossword.vocabulary().find(word).unwrap();
        for var in crossword.tokens() {
            assert!(!domains.contains(var, id));
        }
    }
    for var in crossword.tokens() {
        for id in domains.iter(var) {
            assert_eq!(crossword.word(id).len(), crossword.variable(var).length);
        }
    }
}

#[test]
fn words_are_not_repeated() {
    // Two parallel slots and a single word that fits both.
    let crossword = Crossword::parse("___\n###\n___\n", "cat").unwrap();
    assert!(Solver::new(&crossword).solve().is_none());

    let crossword = Crossword::parse("___\n###\n___\n", "cat\ndog").unwrap();
    let assignment = Solver::new(&crossword).solve().expect("solution");
    let mut found = words(&crossword, &assignment);
    found.sort();
    assert_eq!(found, vec!["CAT", "DOG"]);
}

#[test]
fn ring_of_slots() {
    init_logging();
    let crossword = Crossword::parse("___\n_#_\n___\n", "cat\ncab\ntab\ntic\nbat").unwrap();
    for seed in 0..8 {
        let mut solver = Solver::new(&crossword).with_strategy(Strategy::seeded(seed));
        let assignment = solver.solve().expect("solution");
        verify(&crossword, &assignment);
        let mut found = words(&crossword, &assignment);
        found.sort();
        assert_eq!(found, vec!["BAT", "CAT", "TAB", "TIC"]);
    }
}
