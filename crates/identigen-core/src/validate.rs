use crate::error::{InvalidArgument, Result};
use crate::params::{HsvRange, IdenticonParams, BASE_WIDTH, MAX_COLOR_COUNT};

pub fn validate_width(img_width: u32) -> Result<()> {
    if img_width == 0 || img_width as usize % BASE_WIDTH != 0 {
        return Err(InvalidArgument::Width(img_width).into());
    }
    Ok(())
}

pub fn validate_color_count(count: usize) -> Result<()> {
    if !(1..=MAX_COLOR_COUNT).contains(&count) {
        return Err(InvalidArgument::ColorCount(count).into());
    }
    Ok(())
}

/// Scaled bounds must not be inverted on any channel.
pub fn validate_range(range: &HsvRange) -> Result<()> {
    for (channel, r) in range.channels() {
        if r.min > r.max {
            return Err(InvalidArgument::ScaledRange {
                channel,
                min: r.min,
                max: r.max,
            }
            .into());
        }
    }
    Ok(())
}

pub fn validate_params(p: &IdenticonParams) -> Result<()> {
    validate_width(p.img_width)?;
    validate_color_count(p.color_count)?;

    // Percent bounds: in [0, 1] and min <= max per channel. NaN fails both.
    let mins = p.hsv_min.channels();
    let maxs = p.hsv_max.channels();
    for ((channel, min), (_, max)) in mins.into_iter().zip(maxs) {
        let in_unit = (0.0..=1.0).contains(&min) && (0.0..=1.0).contains(&max);
        if !in_unit || min > max {
            return Err(InvalidArgument::PercentBounds { channel, min, max }.into());
        }
    }

    validate_range(&p.hsv_range())
}
