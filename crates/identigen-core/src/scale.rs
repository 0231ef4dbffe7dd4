// crates/identigen-core/src/scale.rs

use crate::error::{InvalidArgument, Result};
use crate::grid::Grid;
use crate::params::BASE_WIDTH;
use crate::validate::validate_width;

/// Replicate every base cell into a `factor x factor` block,
/// `factor = target_width / 16`.
///
/// `target_width == 16` returns the base grid as is. Both widths are checked
/// before any work.
pub fn upscale<T: Copy + Default>(base: Grid<T>, target_width: u32) -> Result<Grid<T>> {
    validate_width(target_width)?;
    if base.width() != BASE_WIDTH {
        return Err(InvalidArgument::BaseWidth(base.width()).into());
    }

    let target = target_width as usize;
    if target == base.width() {
        return Ok(base);
    }
    let factor = target / BASE_WIDTH;

    let mut out = Grid::new(target);
    for src_row in 0..base.width() {
        for src_col in 0..base.width() {
            let c = base.get(src_row, src_col);
            for row in src_row * factor..(src_row + 1) * factor {
                for col in src_col * factor..(src_col + 1) * factor {
                    out.set(row, col, c);
                }
            }
        }
    }
    Ok(out)
}
