//! Colour channels and constructor input.

/// A single colour channel.
///
/// `Red`, `Green`, and `Blue` form the RGB family; `Hue`, `Saturation`, and
/// `Lightness` form the HSL family. `Alpha` belongs to neither family and may
/// accompany either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Hue,
    Saturation,
    Lightness,
    Alpha,
}

impl Channel {
    /// Whether this channel belongs to the RGB family.
    pub fn is_rgb(self) -> bool {
        matches!(self, Channel::Red | Channel::Green | Channel::Blue)
    }

    /// Whether this channel belongs to the HSL family.
    pub fn is_hsl(self) -> bool {
        matches!(self, Channel::Hue | Channel::Saturation | Channel::Lightness)
    }
}

/// Constructor input for [`Colour`](crate::Colour).
///
/// The accepted shapes, resolved once by the constructor:
/// - `Text`: a colour name, `"transparent"`, `#rgb`, or `#rrggbb`
/// - `Channels`: channel/value pairs drawn from exactly one colour space,
///   optionally with alpha
/// - `Components`: positional red, green, blue, and optional alpha
#[derive(Debug, Clone, Copy)]
pub enum ColourInput<'a> {
    Text(&'a str),
    Channels(&'a [(Channel, f64)]),
    Components(&'a [f64]),
}

impl<'a> From<&'a str> for ColourInput<'a> {
    fn from(text: &'a str) -> Self {
        ColourInput::Text(text)
    }
}

impl<'a> From<&'a [(Channel, f64)]> for ColourInput<'a> {
    fn from(channels: &'a [(Channel, f64)]) -> Self {
        ColourInput::Channels(channels)
    }
}

impl<'a, const N: usize> From<&'a [(Channel, f64); N]> for ColourInput<'a> {
    fn from(channels: &'a [(Channel, f64); N]) -> Self {
        ColourInput::Channels(channels)
    }
}

impl<'a> From<&'a [f64]> for ColourInput<'a> {
    fn from(components: &'a [f64]) -> Self {
        ColourInput::Components(components)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for ColourInput<'a> {
    fn from(components: &'a [f64; N]) -> Self {
        ColourInput::Components(components)
    }
}
