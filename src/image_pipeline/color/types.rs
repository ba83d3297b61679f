//! Color attribute types

use image::Rgb;

/// Luma weights applied to the 0-255 channel values.
const LUMA_WEIGHTS: [f64; 3] = [0.3, 0.59, 0.11];

/// Representative color of one image and the attributes derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorInfo {
    /// Averaged color the attributes were computed from
    pub rgb: Rgb<u8>,
    /// Hue in whole degrees, 0-360
    pub hue: u16,
    /// Saturation in percent, one decimal
    pub saturation: f64,
    /// Lightness in percent, one decimal
    pub value: f64,
    /// Weighted RGB sum, unrounded
    pub luma: f64,
}

impl ColorInfo {
    /// Derives every attribute from an 8-bit RGB triple.
    ///
    /// Hue follows the usual piecewise formula on the channel holding the
    /// maximum, rounded half up to whole degrees, so it always lands in
    /// 0-359. `value` is the HSL lightness `(max + min) / 2` and saturation
    /// is relative to it, so achromatic input yields hue 0 and saturation 0.
    pub fn from_rgb(rgb: Rgb<u8>) -> Self {
        let [r8, g8, b8] = rgb.0;
        let r = f64::from(r8) / 255.0;
        let g = f64::from(g8) / 255.0;
        let b = f64::from(b8) / 255.0;

        let cmin = r.min(g).min(b);
        let cmax = r.max(g).max(b);
        let delta = cmax - cmin;

        // Hue is a ratio of channel differences, so the 8-bit values give the
        // same result without the rounding noise of the normalized ones.
        let (ri, gi, bi) = (i32::from(r8), i32::from(g8), i32::from(b8));
        let max8 = ri.max(gi).max(bi);
        let delta8 = max8 - ri.min(gi).min(bi);
        let degrees = if delta8 == 0 {
            0.0
        } else if max8 == ri {
            f64::from(60 * (gi - bi)) / f64::from(delta8) % 360.0
        } else if max8 == gi {
            f64::from(60 * (bi - ri) + 120 * delta8) / f64::from(delta8)
        } else {
            f64::from(60 * (ri - gi) + 240 * delta8) / f64::from(delta8)
        };

        let mut hue = round_half_up(degrees);
        if hue < 0.0 {
            hue += 360.0;
        }

        let lightness = (cmax + cmin) / 2.0;
        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        let luma = LUMA_WEIGHTS[0] * f64::from(r8)
            + LUMA_WEIGHTS[1] * f64::from(g8)
            + LUMA_WEIGHTS[2] * f64::from(b8);

        Self {
            rgb,
            hue: hue as u16,
            saturation: round_percent(saturation),
            value: round_percent(lightness),
            luma,
        }
    }

    /// Six lowercase hex digits, zero padded, without a leading `#`.
    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb.0;
        format!("{r:02x}{g:02x}{b:02x}")
    }
}

/// Nearest integer, with ties going towards positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Fraction to percent, rounded to one decimal.
fn round_percent(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}
