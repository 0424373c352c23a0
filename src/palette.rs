//! Palette generation.
//!
//! A palette expands one base colour into a set of related colours by
//! rotating the hue and stepping the lightness; saturation is never
//! changed.

use std::fmt;
use std::str::FromStr;

use crate::colour::Colour;
use crate::error::{Result, TintError};
use crate::format::Format;

/// The strategy used to derive palette colours from the base colour.
///
/// Each strategy fixes a set of base hues and with it the maximum number of
/// colours the palette can hold: nine per hue (the base lightness plus up
/// to four darker and four lighter steps), except `Mono` (21) and `Custom`
/// (the size of the given set).
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteMode {
    /// The base hue only; lightness stepped by 5%.
    Mono,
    /// The base colour and the hues 30 degrees either side.
    Analogous,
    /// The base colour and its complement.
    Complements,
    /// The base colour and the hues 150 degrees either side.
    SplitComplements,
    /// Three hues at 120 degree intervals.
    Triads,
    /// Four hues at 90 degree intervals.
    Tetrads,
    /// Twelve hues at 30 degree intervals.
    Wheel,
    /// Equally spaced hues; the count must be a factor of 360.
    Hues(i64),
    /// An explicit base set; used as given, with no lightness expansion.
    Custom(Vec<Colour>),
}

impl fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteMode::Mono => write!(f, "mono"),
            PaletteMode::Analogous => write!(f, "analogous"),
            PaletteMode::Complements => write!(f, "complements"),
            PaletteMode::SplitComplements => write!(f, "split-complements"),
            PaletteMode::Triads => write!(f, "triads"),
            PaletteMode::Tetrads => write!(f, "tetrads"),
            PaletteMode::Wheel => write!(f, "wheel"),
            PaletteMode::Hues(count) => write!(f, "{}", count),
            PaletteMode::Custom(_) => write!(f, "custom"),
        }
    }
}

impl FromStr for PaletteMode {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mono" => Ok(PaletteMode::Mono),
            "analogous" => Ok(PaletteMode::Analogous),
            "complements" => Ok(PaletteMode::Complements),
            "split-complements" => Ok(PaletteMode::SplitComplements),
            "triads" => Ok(PaletteMode::Triads),
            "tetrads" => Ok(PaletteMode::Tetrads),
            "wheel" => Ok(PaletteMode::Wheel),
            other => other
                .parse::<i64>()
                .map(PaletteMode::Hues)
                .map_err(|_| TintError::InvalidMode {
                    mode: s.to_string(),
                }),
        }
    }
}

impl Colour {
    /// Generate a palette of `n` colours based on this colour, rendered in
    /// the given format.
    ///
    /// Hue and lightness of the base colour are adjusted to produce new
    /// colours; saturation is unchanged. Requesting more colours than the
    /// mode can provide fails with [`TintError::TooManyColours`].
    pub fn palette(&self, n: usize, mode: PaletteMode, format: Format) -> Result<Vec<String>> {
        let colours = match &mode {
            PaletteMode::Mono => self.mono_series(n)?,
            PaletteMode::Custom(set) => {
                if n > set.len() {
                    return Err(TintError::TooManyColours {
                        mode: mode.to_string(),
                        max: set.len(),
                        requested: n,
                    });
                }
                set.clone()
            }
            PaletteMode::Analogous => {
                self.expanded_hues(n, self.adjust_hue(-30.0), 30.0, 3, &mode)?
            }
            PaletteMode::Complements => self.expanded_hues(n, self.clone(), 180.0, 2, &mode)?,
            PaletteMode::SplitComplements => {
                self.expanded_hues(n, self.adjust_hue(-150.0), 150.0, 3, &mode)?
            }
            PaletteMode::Triads => self.expanded_hues(n, self.clone(), 120.0, 3, &mode)?,
            PaletteMode::Tetrads => self.expanded_hues(n, self.clone(), 90.0, 4, &mode)?,
            PaletteMode::Wheel => self.expanded_hues(n, self.clone(), 30.0, 12, &mode)?,
            PaletteMode::Hues(count) => {
                if *count <= 0 || 360 % *count != 0 {
                    return Err(TintError::InvalidMode {
                        mode: mode.to_string(),
                    });
                }
                let step = 360.0 / *count as f64;
                self.expanded_hues(n, self.clone(), step, *count as usize, &mode)?
            }
        };

        Ok(colours
            .iter()
            .take(n)
            .map(|colour| colour.to_css(format, true, true))
            .collect())
    }

    /// The mono series: the base colour flanked by 5%-lightness steps,
    /// ordered darkest to lightest.
    fn mono_series(&self, n: usize) -> Result<Vec<Colour>> {
        const MAX: usize = 21;
        if n > MAX {
            return Err(TintError::TooManyColours {
                mode: PaletteMode::Mono.to_string(),
                max: MAX,
                requested: n,
            });
        }

        let mut darker = Vec::new();
        let mut lighter = Vec::new();
        let mut count = 1usize;
        let mut step = 1u32;
        while count < n {
            let amount = f64::from(step) * 5.0;
            let mut advanced = false;
            if self.lightness() - amount >= 0.0 {
                darker.push(self.darken(amount, false)?);
                count += 1;
                advanced = true;
            }
            if self.lightness() + amount <= 100.0 {
                lighter.push(self.lighten(amount, false)?);
                count += 1;
                advanced = true;
            }
            // Both boundaries clipped: no further colours are available.
            if !advanced {
                break;
            }
            step += 1;
        }

        let mut colours: Vec<Colour> = darker.into_iter().rev().collect();
        colours.push(self.clone());
        colours.extend(lighter);
        Ok(colours)
    }

    /// Base hues at `step`-degree intervals from `start`, expanded with
    /// 10%-lightness steps across all hues when `n` exceeds the hue count.
    fn expanded_hues(
        &self,
        n: usize,
        start: Colour,
        step: f64,
        size: usize,
        mode: &PaletteMode,
    ) -> Result<Vec<Colour>> {
        let mut colours: Vec<Colour> = (0..size.min(n))
            .map(|i| start.adjust_hue(i as f64 * step))
            .collect();

        let hues = colours.len();
        let max = hues * 9;
        if n > max {
            return Err(TintError::TooManyColours {
                mode: mode.to_string(),
                max,
                requested: n,
            });
        }
        if n <= hues || hues == 0 {
            return Ok(colours);
        }

        let base_lightness = colours[0].lightness();
        let mut count = hues;
        for i in 0..9u32 {
            if count >= n {
                break;
            }
            let adjustment = f64::from(i + 1) * 10.0;

            let mut step_darker = Vec::new();
            for colour in colours.iter().take(hues) {
                if count >= n {
                    break;
                }
                if base_lightness - adjustment > 0.0 {
                    step_darker.push(colour.darken(adjustment, false)?);
                    count += 1;
                }
            }
            let mut step_lighter = Vec::new();
            for colour in colours.iter().take(hues) {
                if count >= n {
                    break;
                }
                if base_lightness + adjustment < 100.0 {
                    step_lighter.push(colour.lighten(adjustment, false)?);
                    count += 1;
                }
            }
            colours.extend(step_darker);
            colours.extend(step_lighter);
        }

        Ok(colours)
    }
}
