// crates/identigen-core/src/color.rs
//
// 8-bit HSV cells and the full-range HSV -> RGB conversion.
//
// Generation uses hue 0..=179 and saturation/value 0..=255, while conversion
// reads hue over a 0..=255 domain (OpenCV's HSV2RGB_FULL, hrange 255).
// Generated hues therefore span about 0..253 degrees. Kept as-is: changing
// either side changes every image.

/// Largest generated hue.
pub const HUE_MAX: u8 = 179;
/// Largest saturation / value.
pub const SV_MAX: u8 = 255;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    /// Full-range conversion; see [`hsv_to_rgb_full`].
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb_full(self)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Hue domain of the conversion: 255 maps back to 360 degrees.
const HUE_DOMAIN: f32 = 255.0;

/// Which of `[v, p, q, t]` feeds (b, g, r) in each hue sector.
const SECTOR_TABLE: [[usize; 3]; 6] = [
    [1, 3, 0],
    [1, 0, 2],
    [3, 0, 1],
    [0, 2, 1],
    [0, 1, 3],
    [2, 1, 0],
];

/// Single-precision sector conversion, rounding half to even on the way back
/// to 8 bits. Bit-for-bit with OpenCV's `COLOR_HSV2RGB_FULL` on `CV_8UC3`.
pub fn hsv_to_rgb_full(c: Hsv) -> Rgb {
    let s = f32::from(c.s) * (1.0 / 255.0);
    let v = f32::from(c.v) * (1.0 / 255.0);

    let (b, g, r) = if s == 0.0 {
        (v, v, v)
    } else {
        let mut h = f32::from(c.h) * (6.0 / HUE_DOMAIN);
        h %= 6.0;
        if h < 0.0 {
            h += 6.0;
        }
        let mut sector = h.floor() as usize;
        h -= sector as f32;
        if sector >= 6 {
            sector = 0;
            h = 0.0;
        }

        let tab = [
            v,
            v * (1.0 - s),
            v * (1.0 - s * h),
            v * (1.0 - s * (1.0 - h)),
        ];
        let idx = SECTOR_TABLE[sector];
        (tab[idx[0]], tab[idx[1]], tab[idx[2]])
    };

    Rgb::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
}

#[inline]
fn unit_to_u8(x: f32) -> u8 {
    (x * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_saturation_is_gray() {
        assert_eq!(hsv_to_rgb_full(Hsv::new(10, 0, 77)), Rgb::new(77, 77, 77));
        assert_eq!(hsv_to_rgb_full(Hsv::default()), Rgb::new(0, 0, 0));
    }

    #[test]
    fn primaries_on_the_full_hue_circle() {
        assert_eq!(hsv_to_rgb_full(Hsv::new(0, 255, 255)), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb_full(Hsv::new(85, 255, 255)), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb_full(Hsv::new(170, 255, 255)), Rgb::new(0, 0, 255));
    }

    #[test]
    fn hue_domain_is_255_not_256() {
        // 128/255 of the circle lands just past cyan.
        assert_eq!(hsv_to_rgb_full(Hsv::new(128, 255, 255)), Rgb::new(0, 252, 255));
        assert_eq!(hsv_to_rgb_full(Hsv::new(64, 255, 255)), Rgb::new(126, 255, 0));
        assert_eq!(hsv_to_rgb_full(Hsv::new(42, 255, 255)), Rgb::new(255, 252, 0));
    }

    #[test]
    fn alice_palette_reference_colors() {
        assert_eq!(Hsv::new(48, 136, 156).to_rgb(), Rgb::new(145, 156, 73));
        assert_eq!(Hsv::new(68, 126, 114).to_rgb(), Rgb::new(80, 114, 58));
        assert_eq!(Hsv::new(75, 116, 147).to_rgb(), Rgb::new(96, 147, 80));
    }

    #[test]
    fn hex_format() {
        assert_eq!(Rgb::new(145, 156, 73).to_hex(), "#919c49");
    }
}
