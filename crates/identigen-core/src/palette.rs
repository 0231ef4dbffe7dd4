// crates/identigen-core/src/palette.rs

use crate::color::Hsv;
use crate::error::Result;
use crate::params::HsvRange;
use crate::prng::Prng;
use crate::validate::{validate_color_count, validate_range};

/// Ordered palette. The grid builder indexes into it with PRNG draws, so the
/// order is part of the output.
pub type Palette = Vec<Hsv>;

/// Draw `count` colors, each as h then s then v, within `range`.
///
/// Fails before touching `prng` if `count == 0` or a channel range is inverted.
pub fn build_palette(prng: &mut Prng, count: usize, range: &HsvRange) -> Result<Palette> {
    validate_color_count(count)?;
    validate_range(range)?;

    let mut colors = Vec::with_capacity(count);
    for _ in 0..count {
        let h = prng.next_in_range(u32::from(range.h.min), u32::from(range.h.max));
        let s = prng.next_in_range(u32::from(range.s.min), u32::from(range.s.max));
        let v = prng.next_in_range(u32::from(range.v.min), u32::from(range.v.max));
        // Bounds are u8, so the draws are too.
        colors.push(Hsv::new(h as u8, s as u8, v as u8));
    }
    Ok(colors)
}
