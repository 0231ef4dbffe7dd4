// crates/identigen-cli/src/io/png.rs

use std::path::Path;

use anyhow::Context;
use identigen_core::Identicon;
use image::RgbImage;

/// Encode the identicon's RGB pixels as an 8-bit RGB PNG at `path`.
pub fn write_identicon(path: &Path, id: &Identicon) -> anyhow::Result<()> {
    let w = id.width();
    let img = RgbImage::from_raw(w, w, id.rgb_bytes())
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not fit {w}x{w}"))?;
    img.save(path)
        .with_context(|| format!("write png: {}", path.display()))?;
    Ok(())
}
