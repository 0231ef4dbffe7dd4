pub mod error;
pub mod validate;

pub mod color;
pub mod generate;
pub mod grid;
pub mod palette;
pub mod params;
pub mod prng;
pub mod scale;
pub mod seed;
pub mod symmetry;

pub use crate::color::{Hsv, Rgb};
pub use crate::error::{IdentError, InvalidArgument, Result};
pub use crate::generate::{generate, generate_default, Identicon};
pub use crate::grid::Grid;
pub use crate::params::{HsvPercent, IdenticonParams, Symmetry, BASE_WIDTH, MAX_COLOR_COUNT};
pub use crate::seed::Seed;
