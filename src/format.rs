//! Colour output formats.

use std::fmt;
use std::str::FromStr;

use crate::colour::Colour;
use crate::error::TintError;
use crate::named;

/// An output syntax for [`Colour::to_css`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)` with alpha to two decimal places
    Rgba,
    /// `hsl(h, s, l)`
    Hsl,
    /// `hsla(h, s, l, a)` with alpha to two decimal places
    Hsla,
    /// `#rrggbb`, or `#rgb` when shortening is requested and possible
    Hex,
    /// A colour name when the exact triplet is named, hex otherwise
    Named,
}

impl FromStr for Format {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self, TintError> {
        match s {
            "rgb" => Ok(Format::Rgb),
            "rgba" => Ok(Format::Rgba),
            "hsl" => Ok(Format::Hsl),
            "hsla" => Ok(Format::Hsla),
            "hex" => Ok(Format::Hex),
            "named" => Ok(Format::Named),
            _ => Err(TintError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl Colour {
    /// Render the colour in the given format.
    ///
    /// For [`Format::Named`], `css3_names` selects the SVG/CSS3 table over
    /// the HTML4 table; unnamed triplets fall back to hex. `short_hex`
    /// collapses `#rrggbb` to `#rgb` when every byte has identical nibbles.
    pub fn to_css(&self, format: Format, css3_names: bool, short_hex: bool) -> String {
        match format {
            Format::Rgb => {
                let (r, g, b) = self.rgb();
                format!("rgb({}, {}, {})", r, g, b)
            }
            Format::Rgba => {
                let (r, g, b, a) = self.rgba();
                format!("rgba({}, {}, {}, {:.2})", r, g, b, a)
            }
            Format::Hsl => {
                let (h, s, l) = self.hsl();
                format!("hsl({}, {}, {})", h as i64, s as i64, l as i64)
            }
            Format::Hsla => {
                let (h, s, l, a) = self.hsla();
                format!("hsla({}, {}, {}, {:.2})", h as i64, s as i64, l as i64, a)
            }
            Format::Hex => self.hex(short_hex),
            Format::Named => {
                let hex = self.hex(false);
                let name = if css3_names {
                    named::svg_hex_to_name(&hex)
                } else {
                    named::html4_hex_to_name(&hex)
                };
                match name {
                    Some(name) => name.to_string(),
                    None => self.hex(short_hex),
                }
            }
        }
    }

    /// The hex triplet, shortened to `#rgb` when requested and possible.
    fn hex(&self, short: bool) -> String {
        let (r, g, b) = self.rgb();
        let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
        let bytes = hex.as_bytes();
        if short && bytes[1] == bytes[2] && bytes[3] == bytes[4] && bytes[5] == bytes[6] {
            format!(
                "#{}{}{}",
                bytes[1] as char, bytes[3] as char, bytes[5] as char
            )
        } else {
            hex
        }
    }
}

/// Renders the `rgba(...)` form.
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css(Format::Rgba, true, true))
    }
}
