use thiserror::Error;

pub type Result<T> = std::result::Result<T, IdentError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IdentError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// One variant per rejected precondition. All of them are raised before any
/// PRNG draw or grid write happens.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidArgument {
    #[error("img_width must be a positive multiple of 16, got {0}")]
    Width(u32),

    #[error("symmetry selector must be 1 (horizontal), 2 (vertical) or 3 (quarter), got {0}")]
    Symmetry(i64),

    #[error("color_count must be between 1 and 65536, got {0}")]
    ColorCount(usize),

    #[error("grid of width {width} cannot be split into {factor}x{factor} blocks")]
    BlockFactor { width: usize, factor: usize },

    #[error("base grid must be 16 wide, got {0}")]
    BaseWidth(usize),

    #[error("hsv percent bounds for {channel} must satisfy 0.0 <= min <= max <= 1.0, got min={min} max={max}")]
    PercentBounds {
        channel: &'static str,
        min: f64,
        max: f64,
    },

    #[error("scaled {channel} range is inverted: min={min} max={max}")]
    ScaledRange {
        channel: &'static str,
        min: u8,
        max: u8,
    },
}
