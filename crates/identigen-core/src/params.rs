// crates/identigen-core/src/params.rs

use crate::color::{HUE_MAX, SV_MAX};
use crate::error::{InvalidArgument, Result};

/// Side of the base grid every identicon is drawn on before upscaling.
pub const BASE_WIDTH: usize = 16;

/// Largest accepted palette size.
pub const MAX_COLOR_COUNT: usize = 1 << 16;

/// Mirror policy for the base grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Left-right mirror: column `c` equals column `15 - c`.
    #[default]
    Horizontal,
    /// Top-bottom mirror: row `r` equals row `15 - r`.
    Vertical,
    /// Both mirrors at once; four cells per draw.
    Quarter,
}

impl Symmetry {
    pub const ALL: [Symmetry; 3] = [Symmetry::Horizontal, Symmetry::Vertical, Symmetry::Quarter];

    /// Numeric selector used on the command line: 1, 2 or 3.
    pub fn from_selector(sel: i64) -> Result<Self> {
        match sel {
            1 => Ok(Symmetry::Horizontal),
            2 => Ok(Symmetry::Vertical),
            3 => Ok(Symmetry::Quarter),
            other => Err(InvalidArgument::Symmetry(other).into()),
        }
    }

    pub fn selector(self) -> u8 {
        match self {
            Symmetry::Horizontal => 1,
            Symmetry::Vertical => 2,
            Symmetry::Quarter => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Symmetry::Horizontal => "horizontal",
            Symmetry::Vertical => "vertical",
            Symmetry::Quarter => "quarter",
        }
    }
}

/// Hue / saturation / value as fractions in `[0.0, 1.0]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HsvPercent {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl HsvPercent {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn channels(self) -> [(&'static str, f64); 3] {
        [("hue", self.h), ("saturation", self.s), ("value", self.v)]
    }
}

/// Inclusive integer bounds for one channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChannelRange {
    pub min: u8,
    pub max: u8,
}

/// Palette bounds after scaling percentages into 8-bit HSV.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HsvRange {
    pub h: ChannelRange,
    pub s: ChannelRange,
    pub v: ChannelRange,
}

impl HsvRange {
    /// `floor(percent * max)` per channel: hue against 179, the rest against 255.
    /// Inputs are expected to be validated already.
    pub fn scale(min: HsvPercent, max: HsvPercent) -> Self {
        Self {
            h: ChannelRange {
                min: scale_percent(min.h, HUE_MAX),
                max: scale_percent(max.h, HUE_MAX),
            },
            s: ChannelRange {
                min: scale_percent(min.s, SV_MAX),
                max: scale_percent(max.s, SV_MAX),
            },
            v: ChannelRange {
                min: scale_percent(min.v, SV_MAX),
                max: scale_percent(max.v, SV_MAX),
            },
        }
    }

    pub fn channels(&self) -> [(&'static str, ChannelRange); 3] {
        [("hue", self.h), ("saturation", self.s), ("value", self.v)]
    }
}

fn scale_percent(p: f64, max: u8) -> u8 {
    (p * f64::from(max)).floor().clamp(0.0, f64::from(max)) as u8
}

/// Everything `generate` needs besides the input text.
#[derive(Clone, Debug, PartialEq)]
pub struct IdenticonParams {
    pub symmetry: Symmetry,
    /// Output side in pixels; a positive multiple of [`BASE_WIDTH`].
    pub img_width: u32,
    pub color_count: usize,
    pub hsv_min: HsvPercent,
    pub hsv_max: HsvPercent,
}

impl Default for IdenticonParams {
    fn default() -> Self {
        Self {
            symmetry: Symmetry::Horizontal,
            img_width: BASE_WIDTH as u32,
            color_count: 3,
            hsv_min: HsvPercent::new(0.0, 0.2, 0.2),
            hsv_max: HsvPercent::new(1.0, 0.8, 0.8),
        }
    }
}

impl IdenticonParams {
    pub fn with_symmetry(mut self, symmetry: Symmetry) -> Self {
        self.symmetry = symmetry;
        self
    }

    pub fn with_width(mut self, img_width: u32) -> Self {
        self.img_width = img_width;
        self
    }

    pub fn with_colors(mut self, color_count: usize) -> Self {
        self.color_count = color_count;
        self
    }

    pub fn with_hsv_bounds(mut self, min: HsvPercent, max: HsvPercent) -> Self {
        self.hsv_min = min;
        self.hsv_max = max;
        self
    }

    pub fn hsv_range(&self) -> HsvRange {
        HsvRange::scale(self.hsv_min, self.hsv_max)
    }

    /// Upscale factor from the base grid to the output.
    pub fn scale_factor(&self) -> usize {
        self.img_width as usize / BASE_WIDTH
    }
}
