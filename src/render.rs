//! Text and bitmap rendering of a filled grid.

use std::path::Path;

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{ImageFormat, Rgb, RgbImage};
use log::debug;

use crate::{Assignment, Crossword, Error, Result};

/// The character drawn for a blocked cell.
pub const BLOCK: char = '█';

/// The side of a cell in the bitmap, in pixels.
pub const CELL_SIZE: u32 = 100;

/// The dark margin around each fillable cell, in pixels.
pub const CELL_BORDER: u32 = 2;

// Each 8x8 glyph pixel is drawn as a GLYPH_SCALE square, centred in the cell.
const GLYPH_SCALE: u32 = 10;
const GLYPH_OFFSET: u32 = (CELL_SIZE - 8 * GLYPH_SCALE) / 2;

const DARK: Rgb<u8> = Rgb([0, 0, 0]);
const LIGHT: Rgb<u8> = Rgb([255, 255, 255]);

/// Render an assignment, one grid row per line.  Blocked cells are
/// drawn as `█` and fillable cells without a letter as a space.
///
/// # Examples
///
/// ```
/// use crossword_solver::{render, Crossword, Solver};
///
/// let crossword = Crossword::parse("___\n##_\n##_\n", "cat\ntoe").unwrap();
/// let assignment = Solver::new(&crossword).solve().unwrap();
/// assert_eq!(render::render(&crossword, &assignment), "CAT\n██O\n██E\n");
/// ```
pub fn render(crossword: &Crossword, assignment: &Assignment) -> String {
    let mut out = String::with_capacity((crossword.width() + 1) * crossword.height());
    for (row, letters) in crossword.letter_grid(assignment).into_iter().enumerate() {
        for (col, letter) in letters.into_iter().enumerate() {
            out.push(match letter {
                Some(c) => c,
                None if crossword.is_fillable(row, col) => ' ',
                None => BLOCK,
            });
        }
        out.push('\n');
    }
    out
}

/// Draw an assignment as a bitmap of `CELL_SIZE` square cells.
///
/// Blocked cells and cell borders are dark, fillable cells light, and
/// each letter is drawn dark in the middle of its cell.  Letters with no
/// glyph in the built-in font leave their cell blank.
///
/// # Examples
///
/// ```
/// use crossword_solver::{render, Crossword, Solver};
///
/// let crossword = Crossword::parse("___\n##_\n##_\n", "cat\ntoe").unwrap();
/// let assignment = Solver::new(&crossword).solve().unwrap();
/// let image = render::image(&crossword, &assignment);
/// assert_eq!(image.dimensions(), (300, 300));
/// ```
pub fn image(crossword: &Crossword, assignment: &Assignment) -> RgbImage {
    let width = crossword.width() as u32 * CELL_SIZE;
    let height = crossword.height() as u32 * CELL_SIZE;
    let mut image = RgbImage::from_pixel(width, height, DARK);

    for (row, letters) in crossword.letter_grid(assignment).into_iter().enumerate() {
        for (col, letter) in letters.into_iter().enumerate() {
            if !crossword.is_fillable(row, col) {
                continue;
            }

            let left = col as u32 * CELL_SIZE;
            let top = row as u32 * CELL_SIZE;
            for y in top + CELL_BORDER..top + CELL_SIZE - CELL_BORDER {
                for x in left + CELL_BORDER..left + CELL_SIZE - CELL_BORDER {
                    image.put_pixel(x, y, LIGHT);
                }
            }

            if let Some(rows) = letter.and_then(glyph) {
                draw_glyph(&mut image, &rows, left + GLYPH_OFFSET, top + GLYPH_OFFSET);
            }
        }
    }

    image
}

/// Write the bitmap of an assignment to `path` as a PNG file.
pub fn save_png<P: AsRef<Path>>(crossword: &Crossword, assignment: &Assignment, path: P) -> Result<()> {
    let path = path.as_ref();
    let image = image(crossword, assignment);
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Image {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("wrote {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// The 8x8 bitmap of a letter: one byte per row, least significant bit
/// leftmost.
fn glyph(c: char) -> Option<[u8; 8]> {
    BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c))
}

fn draw_glyph(image: &mut RgbImage, rows: &[u8; 8], left: u32, top: u32) {
    for (dy, &bits) in rows.iter().enumerate() {
        for dx in 0..8 {
            if bits & (1 << dx) == 0 {
                continue;
            }

            let x0 = left + dx * GLYPH_SCALE;
            let y0 = top + dy as u32 * GLYPH_SCALE;
            for y in y0..y0 + GLYPH_SCALE {
                for x in x0..x0 + GLYPH_SCALE {
                    image.put_pixel(x, y, DARK);
                }
            }
        }
    }
}
