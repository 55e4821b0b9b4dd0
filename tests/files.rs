//! Puzzles read from files.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use crossword_solver::{load, render, Error, Solver, Strategy};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn structure0() {
    let _ = env_logger::builder().is_test(true).try_init();
    let crossword = load::read_crossword(data("structure0.txt"), data("words0.txt")).unwrap();
    assert_eq!(crossword.width(), 5);
    assert_eq!(crossword.height(), 5);
    assert_eq!(crossword.num_vars(), 4);

    for strategy in [Strategy::Deterministic, Strategy::seeded(1), Strategy::seeded(2)] {
        let mut solver = Solver::new(&crossword).with_strategy(strategy);
        let assignment = solver.solve().expect("solution");
        assert_eq!(
            render::render(&crossword, &assignment),
            "█SIX█\n█E██F\n█V██I\n█E██V\n█NINE\n"
        );
        println!("structure0: {} guesses", solver.num_guesses());
    }
}

#[test]
fn structure0_image() {
    let crossword = load::read_crossword(data("structure0.txt"), data("words0.txt")).unwrap();
    let assignment = Solver::new(&crossword).solve().expect("solution");

    let path = env::temp_dir().join(format!("structure0-{}.png", process::id()));
    render::save_png(&crossword, &assignment, &path).unwrap();
    let saved = image::open(&path).unwrap().to_rgb8();
    fs::remove_file(&path).unwrap();

    assert_eq!(saved.dimensions(), (5 * render::CELL_SIZE, 5 * render::CELL_SIZE));
    assert_eq!(saved, render::image(&crossword, &assignment));

    let missing = data("missing").join("structure0.png");
    assert!(matches!(
        render::save_png(&crossword, &assignment, missing),
        Err(Error::Image { .. })
    ));
}

#[test]
fn ring_without_solution() {
    let crossword = load::read_crossword(data("ring.txt"), data("ring_unsolvable.txt")).unwrap();
    let mut solver = Solver::new(&crossword);
    assert!(solver.solve().is_none());
}

#[test]
fn malformed_inputs() {
    assert!(matches!(
        load::read_grid(data("ragged.txt")),
        Err(Error::MalformedGrid(_))
    ));
    assert!(matches!(
        load::read_vocabulary(data("empty_words.txt")),
        Err(Error::EmptyVocabulary)
    ));
    assert!(matches!(
        load::read_grid(data("missing.txt")),
        Err(Error::Io { .. })
    ));
}
