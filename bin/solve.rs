use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::{value_parser, Arg, ArgAction, Command};
use log::info;

use crossword_solver::{load, render, Solver, Strategy};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = Command::new("solve")
        .about("Fill a crossword grid from a word list")
        .arg(
            Arg::new("structure")
                .value_name("GRID")
                .help("Grid file: `_` marks a fillable cell")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("words")
                .value_name("WORDS")
                .help("Word list, one word per line")
                .value_parser(value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .help("Write the filled grid to this file as a PNG image")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Seed for tie-breaking and arc order")
                .value_parser(value_parser!(u64))
                .conflicts_with("deterministic"),
        )
        .arg(
            Arg::new("deterministic")
                .short('d')
                .long("deterministic")
                .help("Break ties by taking the first option")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let structure = matches
        .get_one::<PathBuf>("structure")
        .ok_or("grid file not given")?;
    let words = matches
        .get_one::<PathBuf>("words")
        .ok_or("word list not given")?;
    let crossword = load::read_crossword(structure, words)?;

    let strategy = if matches.get_flag("deterministic") {
        Strategy::Deterministic
    } else if let Some(&seed) = matches.get_one::<u64>("seed") {
        Strategy::seeded(seed)
    } else {
        let (strategy, seed) = Strategy::random();
        info!("using seed {}", seed);
        strategy
    };

    let mut solver = Solver::new(&crossword).with_strategy(strategy);

    let start = Instant::now();
    let assignment = solver.solve();
    println!("--- solved in {:.5} seconds ---", start.elapsed().as_secs_f64());
    info!(
        "{} slots, {} guesses, {} backtracks",
        crossword.num_vars(),
        solver.num_guesses(),
        solver.num_backtracks()
    );

    match assignment {
        Some(assignment) => {
            print!("{}", render::render(&crossword, &assignment));
            if let Some(output) = matches.get_one::<PathBuf>("output") {
                render::save_png(&crossword, &assignment, output)?;
                info!("wrote {}", output.display());
            }
        }
        None => println!("No solution."),
    }

    Ok(())
}
