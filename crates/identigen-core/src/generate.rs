// crates/identigen-core/src/generate.rs
//
// text -> seed -> prng -> palette -> base grid -> upscale -> RGB

use log::{debug, trace};

use crate::color::{Hsv, Rgb};
use crate::error::Result;
use crate::grid::Grid;
use crate::palette::{build_palette, Palette};
use crate::params::IdenticonParams;
use crate::prng::Prng;
use crate::scale::upscale;
use crate::seed::Seed;
use crate::symmetry::build_base_grid;
use crate::validate::validate_params;

/// A generated identicon plus the intermediate stages that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identicon {
    pub seed: Seed,
    pub palette: Palette,
    /// 16x16 HSV cells before upscaling.
    pub base: Grid<Hsv>,
    /// Final `img_width x img_width` RGB pixels.
    pub image: Grid<Rgb>,
}

impl Identicon {
    pub fn width(&self) -> u32 {
        self.image.width() as u32
    }

    /// Packed row-major RGB, 3 bytes per pixel.
    pub fn rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.image.cells().len() * 3);
        for px in self.image.cells() {
            out.extend_from_slice(&px.to_bytes());
        }
        out
    }

    pub fn rgb_palette(&self) -> Vec<Rgb> {
        self.palette.iter().map(|c| c.to_rgb()).collect()
    }
}

/// Build the identicon for `text`.
///
/// Every parameter is validated before the seed is derived; a rejected call
/// does no PRNG or grid work. The PRNG context lives only for this call.
pub fn generate(text: &str, params: &IdenticonParams) -> Result<Identicon> {
    validate_params(params)?;

    let seed = Seed::derive(text);
    let mut prng = Prng::new(&seed);

    let range = params.hsv_range();
    trace!("scaled hsv range: {range:?}");

    let palette = build_palette(&mut prng, params.color_count, &range)?;
    let base = build_base_grid(&mut prng, &palette, params.symmetry)?;

    debug!(
        "identicon seed={:?} symmetry={} colors={} draws={}",
        seed,
        params.symmetry.name(),
        palette.len(),
        prng.draws()
    );

    let scaled = upscale(base.clone(), params.img_width)?;
    let image = scaled.map(Hsv::to_rgb);

    Ok(Identicon {
        seed,
        palette,
        base,
        image,
    })
}

/// [`generate`] with [`IdenticonParams::default`].
pub fn generate_default(text: &str) -> Result<Identicon> {
    generate(text, &IdenticonParams::default())
}
