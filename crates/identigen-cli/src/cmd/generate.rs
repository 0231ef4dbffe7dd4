use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use identigen_core::{generate, HsvPercent, IdenticonParams, Symmetry};
use log::{debug, info};

use crate::io::png;

#[derive(Args)]
pub struct GenerateArgs {
    /// A string from which to generate an identicon; also the output file
    /// name, so it must be non-empty, not `.` or `..`, and contain no path
    /// separator
    pub text: String,

    /// Directory to write `<text>.png` into (created if missing)
    pub directory: PathBuf,

    /// Symmetry: 1 = horizontal, 2 = vertical, 3 = quarter
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub symmetry: i64,

    /// Pixel width of the identicon; a positive multiple of 16
    #[arg(short, long, default_value_t = 16)]
    pub width: u32,

    /// Number of colors to build the identicon from
    #[arg(short, long, default_value_t = 3)]
    pub colors: usize,

    /// Minimum hue, saturation and value as fractions in [0, 1]
    #[arg(
        long,
        num_args = 3,
        value_names = ["H", "S", "V"],
        allow_negative_numbers = true,
        default_values_t = vec![0.0, 0.2, 0.2]
    )]
    pub hsvmin: Vec<f64>,

    /// Maximum hue, saturation and value as fractions in [0, 1]
    #[arg(
        long,
        num_args = 3,
        value_names = ["H", "S", "V"],
        allow_negative_numbers = true,
        default_values_t = vec![1.0, 0.8, 0.8]
    )]
    pub hsvmax: Vec<f64>,

    /// Print the palette (HSV and RGB) to stderr after generating
    #[arg(long)]
    pub dump_palette: bool,
}

fn triple(name: &str, vals: &[f64]) -> anyhow::Result<HsvPercent> {
    match vals {
        [h, s, v] => Ok(HsvPercent::new(*h, *s, *v)),
        _ => anyhow::bail!("--{name} takes exactly three values (h s v), got {}", vals.len()),
    }
}

/// `<dir>/<text>.png`, refusing texts that would not stay a single file name.
pub fn output_path(dir: &Path, text: &str) -> anyhow::Result<PathBuf> {
    let plain = !text.is_empty()
        && text != "."
        && text != ".."
        && !text.contains('/')
        && !text.contains(std::path::MAIN_SEPARATOR);
    if !plain {
        anyhow::bail!("text {text:?} cannot be used as an output file name");
    }
    Ok(dir.join(format!("{text}.png")))
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let symmetry = Symmetry::from_selector(args.symmetry)?;
    let params = IdenticonParams::default()
        .with_symmetry(symmetry)
        .with_width(args.width)
        .with_colors(args.colors)
        .with_hsv_bounds(triple("hsvmin", &args.hsvmin)?, triple("hsvmax", &args.hsvmax)?);

    let path = output_path(&args.directory, &args.text)?;
    let id = generate(&args.text, &params)?;
    debug!("seed {}", id.seed.to_hex());

    if args.dump_palette {
        for (i, (hsv, rgb)) in id.palette.iter().zip(id.rgb_palette()).enumerate() {
            eprintln!(
                "color[{i}] hsv=({}, {}, {}) rgb={}",
                hsv.h,
                hsv.s,
                hsv.v,
                rgb.to_hex()
            );
        }
    }

    if !args.directory.is_dir() {
        std::fs::create_dir_all(&args.directory)
            .with_context(|| format!("create output directory: {}", args.directory.display()))?;
        info!("created {}", args.directory.display());
    }

    png::write_identicon(&path, &id)?;

    println!(
        "wrote {} ({}x{}, {} symmetry, {} colors)",
        path.display(),
        id.width(),
        id.width(),
        symmetry.name(),
        id.palette.len()
    );
    Ok(())
}
