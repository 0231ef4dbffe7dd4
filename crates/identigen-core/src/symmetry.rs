// crates/identigen-core/src/symmetry.rs
//
// Base grid construction. One draw per iterated cell, written to every mirror
// of that cell before the next draw. Iteration is row-major ascending; the
// draw order fixes the image for a given seed.

use crate::color::Hsv;
use crate::error::Result;
use crate::grid::Grid;
use crate::params::{Symmetry, BASE_WIDTH};
use crate::prng::Prng;
use crate::validate::validate_color_count;

const LAST: usize = BASE_WIDTH - 1;
const HALF: usize = BASE_WIDTH / 2;

/// Fill a 16x16 grid from `palette` under `symmetry`. Unwritten cells stay at
/// `Hsv::default()`; every policy writes all 256 cells.
///
/// An empty or oversized palette is rejected before any draw.
pub fn build_base_grid(prng: &mut Prng, palette: &[Hsv], symmetry: Symmetry) -> Result<Grid<Hsv>> {
    validate_color_count(palette.len())?;

    let mut grid = Grid::new(BASE_WIDTH);
    let last_index = (palette.len() - 1) as u32;

    match symmetry {
        Symmetry::Horizontal => {
            for row in 0..BASE_WIDTH {
                for col in 0..HALF {
                    let c = palette[prng.next_in_range(0, last_index) as usize];
                    grid.set(row, col, c);
                    grid.set(row, LAST - col, c);
                }
            }
        }
        Symmetry::Vertical => {
            for row in 0..HALF {
                for col in 0..BASE_WIDTH {
                    let c = palette[prng.next_in_range(0, last_index) as usize];
                    grid.set(row, col, c);
                    grid.set(LAST - row, col, c);
                }
            }
        }
        Symmetry::Quarter => {
            for row in 0..HALF {
                for col in 0..HALF {
                    let c = palette[prng.next_in_range(0, last_index) as usize];
                    grid.set(row, col, c);
                    grid.set(row, LAST - col, c);
                    grid.set(LAST - row, col, c);
                    grid.set(LAST - row, LAST - col, c);
                }
            }
        }
    }

    Ok(grid)
}

/// Draws consumed by [`build_base_grid`] for `symmetry`.
pub fn draws_for(symmetry: Symmetry) -> u64 {
    match symmetry {
        Symmetry::Horizontal | Symmetry::Vertical => (BASE_WIDTH * HALF) as u64,
        Symmetry::Quarter => (HALF * HALF) as u64,
    }
}
