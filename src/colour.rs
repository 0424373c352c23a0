//! The colour value type.

use std::cell::OnceCell;
use std::str::FromStr;

use crate::channel::{Channel, ColourInput};
use crate::convert;
use crate::error::{Result, TintError};
use crate::named;

/// Raw RGB channels. Nominal range 0..=255, never clamped in storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Raw HSL channels. Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// The spatial representation of a colour.
///
/// One representation is native (whatever the colour was constructed with);
/// the other is converted on first read and cached. Conversion always fills
/// all three channels of the derived representation at once.
#[derive(Debug, Clone)]
enum Repr {
    Rgb { rgb: Rgb, hsl: OnceCell<Hsl> },
    Hsl { hsl: Hsl, rgb: OnceCell<Rgb> },
}

impl Repr {
    fn from_rgb(rgb: Rgb) -> Self {
        Repr::Rgb {
            rgb,
            hsl: OnceCell::new(),
        }
    }

    fn from_hsl(hsl: Hsl) -> Self {
        Repr::Hsl {
            hsl,
            rgb: OnceCell::new(),
        }
    }

    fn rgb(&self) -> Rgb {
        match self {
            Repr::Rgb { rgb, .. } => *rgb,
            Repr::Hsl { hsl, rgb } => *rgb.get_or_init(|| convert::hsl_to_rgb(*hsl)),
        }
    }

    fn hsl(&self) -> Hsl {
        match self {
            Repr::Hsl { hsl, .. } => *hsl,
            Repr::Rgb { rgb, hsl } => *hsl.get_or_init(|| convert::rgb_to_hsl(*rgb)),
        }
    }
}

/// A CSS colour.
///
/// A colour is represented internally as RGBA, HSLA, or both. It starts as
/// whatever its input was; once a channel of the other representation is
/// read, that representation is computed and cached. The alpha channel is
/// independent of the spatial representation and is always stored, as 1 if
/// nothing else is specified.
///
/// Channel storage is not clamped: arithmetic can push RGB channels outside
/// 0..=255, and only the getters normalise (round, absolute value, and
/// `% 255` for magnitudes beyond 255).
///
/// All operations produce new values; nothing mutates a `Colour` in place.
#[derive(Debug, Clone)]
pub struct Colour {
    repr: Repr,
    a: f64,
}

impl Colour {
    /// Construct a colour from any accepted input shape.
    ///
    /// See [`ColourInput`] for the shapes. Strings may be an SVG/CSS3 colour
    /// name, `"transparent"`, `#rgb`, or `#rrggbb`.
    pub fn new<'a>(input: impl Into<ColourInput<'a>>) -> Result<Self> {
        match input.into() {
            ColourInput::Text(text) => text.parse(),
            ColourInput::Channels(channels) => Self::from_channels(channels),
            ColourInput::Components(components) => Self::from_components(components),
        }
    }

    /// An opaque colour from RGB channels. Values are stored as given.
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// A colour from RGB channels and an alpha in 0..=1.
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Colour {
            repr: Repr::from_rgb(Rgb { r, g, b }),
            a,
        }
    }

    /// An opaque colour from hue (degrees), saturation, and lightness (percent).
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        Self::from_hsla(h, s, l, 1.0)
    }

    /// A colour from HSL channels and an alpha in 0..=1.
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Colour {
            repr: Repr::from_hsl(Hsl { h, s, l }),
            a,
        }
    }

    /// A colour from channel/value pairs.
    ///
    /// The pairs must name exactly one colour space: all of red/green/blue
    /// or all of hue/saturation/lightness, optionally with alpha. When a
    /// channel is listed more than once the last value wins.
    pub fn from_channels(channels: &[(Channel, f64)]) -> Result<Self> {
        let has_rgb = channels.iter().any(|(c, _)| c.is_rgb());
        let has_hsl = channels.iter().any(|(c, _)| c.is_hsl());
        if has_rgb && has_hsl {
            return Err(TintError::MixedColourSpace);
        }

        let find = |channel: Channel| {
            channels
                .iter()
                .rev()
                .find(|(c, _)| *c == channel)
                .map(|&(_, v)| v)
        };
        let alpha = find(Channel::Alpha).unwrap_or(1.0);

        if has_rgb {
            match (find(Channel::Red), find(Channel::Green), find(Channel::Blue)) {
                (Some(r), Some(g), Some(b)) => Ok(Self::from_rgba(r, g, b, alpha)),
                _ => Err(TintError::IncompleteColourSpace { space: "RGB" }),
            }
        } else if has_hsl {
            match (
                find(Channel::Hue),
                find(Channel::Saturation),
                find(Channel::Lightness),
            ) {
                (Some(h), Some(s), Some(l)) => Ok(Self::from_hsla(h, s, l, alpha)),
                _ => Err(TintError::IncompleteColourSpace { space: "HSL" }),
            }
        } else {
            Err(TintError::TooFewComponents {
                count: channels.len(),
            })
        }
    }

    /// A colour from positional red, green, blue, and optional alpha.
    pub fn from_components(components: &[f64]) -> Result<Self> {
        if components.len() < 3 {
            return Err(TintError::TooFewComponents {
                count: components.len(),
            });
        }
        let a = components.get(3).copied().unwrap_or(1.0);
        Ok(Self::from_rgba(components[0], components[1], components[2], a))
    }

    /// The red channel, normalised for reading.
    pub fn red(&self) -> u8 {
        convert::normalise_channel(self.repr.rgb().r)
    }

    /// The green channel, normalised for reading.
    pub fn green(&self) -> u8 {
        convert::normalise_channel(self.repr.rgb().g)
    }

    /// The blue channel, normalised for reading.
    pub fn blue(&self) -> u8 {
        convert::normalise_channel(self.repr.rgb().b)
    }

    /// The hue in degrees, wrapped into [0, 360).
    pub fn hue(&self) -> f64 {
        self.repr.hsl().h.rem_euclid(360.0)
    }

    /// The saturation as a percentage.
    pub fn saturation(&self) -> f64 {
        self.repr.hsl().s
    }

    /// The lightness as a percentage.
    pub fn lightness(&self) -> f64 {
        self.repr.hsl().l
    }

    /// The alpha (opacity) in 0..=1.
    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// The normalised RGB channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// The normalised RGB channels plus alpha.
    pub fn rgba(&self) -> (u8, u8, u8, f64) {
        (self.red(), self.green(), self.blue(), self.a)
    }

    /// Hue, saturation, and lightness.
    pub fn hsl(&self) -> (f64, f64, f64) {
        (self.hue(), self.saturation(), self.lightness())
    }

    /// Hue, saturation, and lightness plus alpha.
    pub fn hsla(&self) -> (f64, f64, f64, f64) {
        (self.hue(), self.saturation(), self.lightness(), self.a)
    }

    /// Whether the alpha channel is below 1.
    pub fn is_translucent(&self) -> bool {
        self.a < 1.0
    }

    /// Returns a copy of this colour with one or more channels changed.
    ///
    /// Overrides naming any HSL channel merge onto the current HSLA values;
    /// overrides naming any RGB channel merge onto the current (normalised)
    /// RGBA values. Naming channels from both spaces fails with
    /// [`TintError::MixedColourSpace`]. Alpha-only overrides keep both
    /// cached representations and replace just the alpha.
    pub fn with(&self, overrides: &[(Channel, f64)]) -> Result<Colour> {
        let has_rgb = overrides.iter().any(|(c, _)| c.is_rgb());
        let has_hsl = overrides.iter().any(|(c, _)| c.is_hsl());
        if has_rgb && has_hsl {
            return Err(TintError::MixedColourSpace);
        }

        if has_hsl {
            let (mut h, mut s, mut l, mut a) = self.hsla();
            for &(c, v) in overrides {
                match c {
                    Channel::Hue => h = v,
                    Channel::Saturation => s = v,
                    Channel::Lightness => l = v,
                    Channel::Alpha => a = v,
                    _ => {}
                }
            }
            Ok(Self::from_hsla(h, s, l, a))
        } else if has_rgb {
            let (r, g, b, mut a) = self.rgba();
            let (mut r, mut g, mut b) = (f64::from(r), f64::from(g), f64::from(b));
            for &(c, v) in overrides {
                match c {
                    Channel::Red => r = v,
                    Channel::Green => g = v,
                    Channel::Blue => b = v,
                    Channel::Alpha => a = v,
                    _ => {}
                }
            }
            Ok(Self::from_rgba(r, g, b, a))
        } else {
            let mut colour = self.clone();
            for &(c, v) in overrides {
                if c == Channel::Alpha {
                    colour.a = v;
                }
            }
            Ok(colour)
        }
    }

    /// Single-channel copy-with; the non-destructive path behind every
    /// adjustment.
    pub(crate) fn with_channel(&self, channel: Channel, value: f64) -> Colour {
        if channel == Channel::Alpha {
            return Colour {
                repr: self.repr.clone(),
                a: value,
            };
        }
        if channel.is_hsl() {
            let (mut h, mut s, mut l) = self.hsl();
            match channel {
                Channel::Hue => h = value,
                Channel::Saturation => s = value,
                _ => l = value,
            }
            Self::from_hsla(h, s, l, self.a)
        } else {
            let (r, g, b) = self.rgb();
            let (mut r, mut g, mut b) = (f64::from(r), f64::from(g), f64::from(b));
            match channel {
                Channel::Red => r = value,
                Channel::Green => g = value,
                _ => b = value,
            }
            Self::from_rgba(r, g, b, self.a)
        }
    }

    /// A new RGB-native colour derived from this one, keeping alpha.
    /// Channel values are stored raw.
    pub(crate) fn derive_rgb(&self, r: f64, g: f64, b: f64) -> Colour {
        Colour {
            repr: Repr::from_rgb(Rgb { r, g, b }),
            a: self.a,
        }
    }
}

impl FromStr for Colour {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        if lower == "transparent" {
            return Ok(Self::from_rgba(0.0, 0.0, 0.0, 0.0));
        }

        let hex = named::svg_name_to_hex(&lower).unwrap_or(&lower);
        parse_hex(hex)
            .map(|(r, g, b)| Self::from_rgb(r, g, b))
            .ok_or_else(|| TintError::InvalidColour {
                input: s.to_string(),
            })
    }
}

/// Equality compares the normalised RGBA view, so an HSL-native colour
/// equals its RGB projection.
impl PartialEq for Colour {
    fn eq(&self, other: &Self) -> bool {
        self.rgba() == other.rgba()
    }
}

/// Parse `#rgb` or `#rrggbb` (already lower-cased) into channel values.
fn parse_hex(hex: &str) -> Option<(f64, f64, f64)> {
    let digits = hex.strip_prefix('#')?;
    match digits.len() {
        3 => {
            let mut out = [0.0; 3];
            for (i, c) in digits.chars().enumerate() {
                let d = c.to_digit(16)? as f64;
                out[i] = d * 16.0 + d;
            }
            Some((out[0], out[1], out[2]))
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((f64::from(r), f64::from(g), f64::from(b)))
        }
        _ => None,
    }
}
