//! Colourspace conversions.
//!
//! Pure functions between the two stored representations. Channel values
//! arrive raw (unclamped) and leave raw; normalisation happens in the
//! getters, not here.

use crate::colour::{Hsl, Rgb};

/// Converts HSL to RGB.
///
/// Algorithm from the CSS3 spec: <http://www.w3.org/TR/css3-color/#hsl-color>
pub(crate) fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = (hsl.h % 360.0) / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let m1 = l * 2.0 - m2;

    Rgb {
        r: hue_to_channel(m1, m2, h + 1.0 / 3.0),
        g: hue_to_channel(m1, m2, h),
        b: hue_to_channel(m1, m2, h - 1.0 / 3.0),
    }
}

/// Resolves one hue fraction to a channel value in 0..=255.
fn hue_to_channel(m1: f64, m2: f64, h: f64) -> f64 {
    let h = if h < 0.0 {
        h + 1.0
    } else if h > 1.0 {
        h - 1.0
    } else {
        h
    };

    let c = if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    };
    c * 255.0
}

/// Converts RGB to HSL.
///
/// Hue lands in [0,360), saturation and lightness in [0,100] for channel
/// values within the nominal 0..=255 range.
pub(crate) fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r / 255.0;
    let g = rgb.g / 255.0;
    let b = rgb.b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let c = max - min;

    let l = (max + min) / 2.0;

    let s = if c == 0.0 {
        0.0
    } else if l <= 0.5 {
        c / (2.0 * l)
    } else {
        c / (2.0 - 2.0 * l)
    };

    // `%` keeps the dividend's sign, which is the wrap the red branch needs
    // when green < blue.
    let h = if c == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / c) % 6.0
    } else if max == g {
        (b - r) / c + 2.0
    } else {
        (r - g) / c + 4.0
    };

    Hsl {
        h: (360.0 + h * 60.0) % 360.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Normalises a raw channel value for reading.
///
/// Rounds, takes the absolute value, and reduces `% 255` only when the
/// rounded magnitude exceeds 255. This is not a full wraparound: 256 maps
/// to 1 and 510 to 0, while 255 is untouched.
pub(crate) fn normalise_channel(value: f64) -> u8 {
    let c = value.abs().round();
    if c > 255.0 {
        ((c as i64) % 255) as u8
    } else {
        c as u8
    }
}
