//! Reading puzzles from files.

use log::debug;
use std::fs;
use std::path::Path;

use crate::{Crossword, Error, Grid, Result, Vocabulary};

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a grid file.  See `Grid::parse` for the format.
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let grid = Grid::parse(&read(path)?)?;
    debug!("read {}x{} grid from {}", grid.width(), grid.height(), path.display());
    Ok(grid)
}

/// Read a word list file.  See `Vocabulary::parse` for the format.
pub fn read_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vocabulary> {
    let path = path.as_ref();
    let vocabulary = Vocabulary::parse(&read(path)?)?;
    debug!("read {} words from {}", vocabulary.len(), path.display());
    Ok(vocabulary)
}

/// Read a grid file and a word list file into a puzzle.
pub fn read_crossword<P: AsRef<Path>, Q: AsRef<Path>>(grid: P, words: Q) -> Result<Crossword> {
    Ok(Crossword::new(read_grid(grid)?, read_vocabulary(words)?))
}
