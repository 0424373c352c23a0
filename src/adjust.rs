//! Colour adjustments and mixing.
//!
//! Every adjustment funnels through one parametrized routine and produces a
//! new colour via the single-channel copy-with path; the receiver is never
//! modified.

use crate::channel::Channel;
use crate::colour::Colour;
use crate::error::{Result, TintError};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Direction {
    Increase,
    Decrease,
}

impl Colour {
    /// Makes a colour lighter.
    ///
    /// `amount` is a whole-number percentage. With `of_current` false (the
    /// usual case) the amount is a proportion of the total range: lightness
    /// 40 lightened by 50 gives 90. With `of_current` true it is a
    /// proportion of the current value: lightness 40 lightened by 50 gives
    /// 60.
    pub fn lighten(&self, amount: f64, of_current: bool) -> Result<Colour> {
        self.adjust(
            amount,
            of_current,
            Channel::Lightness,
            Direction::Increase,
            0.0,
            100.0,
        )
    }

    /// Makes a colour darker. The counterpart of [`Colour::lighten`].
    pub fn darken(&self, amount: f64, of_current: bool) -> Result<Colour> {
        self.adjust(
            amount,
            of_current,
            Channel::Lightness,
            Direction::Decrease,
            0.0,
            100.0,
        )
    }

    /// Makes a colour more saturated.
    pub fn saturate(&self, amount: f64, of_current: bool) -> Result<Colour> {
        self.adjust(
            amount,
            of_current,
            Channel::Saturation,
            Direction::Increase,
            0.0,
            100.0,
        )
    }

    /// Makes a colour less saturated.
    pub fn desaturate(&self, amount: f64, of_current: bool) -> Result<Colour> {
        self.adjust(
            amount,
            of_current,
            Channel::Saturation,
            Direction::Decrease,
            0.0,
            100.0,
        )
    }

    /// Makes a colour more opaque.
    ///
    /// An amount of at most 1 adjusts the alpha channel on its 0..=1 scale;
    /// a larger amount is a percentage. With `of_current` true and an
    /// amount of at most 1, the amount is rescaled to a percentage of the
    /// current alpha: alpha 0.4 opacified by 50 (percent, proportional)
    /// gives 0.6.
    pub fn opacify(&self, amount: f64, of_current: bool) -> Result<Colour> {
        let max = if amount > 1.0 { 100.0 } else { 1.0 };
        self.adjust(
            amount,
            of_current,
            Channel::Alpha,
            Direction::Increase,
            0.0,
            max,
        )
    }

    /// Makes a colour more transparent. The counterpart of
    /// [`Colour::opacify`].
    pub fn transparentise(&self, amount: f64, of_current: bool) -> Result<Colour> {
        let max = if amount > 1.0 { 100.0 } else { 1.0 };
        self.adjust(
            amount,
            of_current,
            Channel::Alpha,
            Direction::Decrease,
            0.0,
            max,
        )
    }

    /// Makes a colour more transparent. Alias for
    /// [`Colour::transparentise`].
    pub fn transparentize(&self, amount: f64, of_current: bool) -> Result<Colour> {
        self.transparentise(amount, of_current)
    }

    /// Makes a colour more opaque. Alias for [`Colour::opacify`].
    pub fn fade_in(&self, amount: f64, of_current: bool) -> Result<Colour> {
        self.opacify(amount, of_current)
    }

    /// Makes a colour more transparent. Alias for
    /// [`Colour::transparentise`].
    pub fn fade_out(&self, amount: f64, of_current: bool) -> Result<Colour> {
        self.transparentise(amount, of_current)
    }

    /// Changes the hue while retaining lightness and saturation. The new
    /// hue is taken `% 360`; no range validation applies.
    pub fn adjust_hue(&self, degrees: f64) -> Colour {
        self.with_channel(Channel::Hue, (self.hue() + degrees) % 360.0)
    }

    /// The complement: the hue rotated by 180 degrees.
    pub fn complement(&self) -> Colour {
        self.adjust_hue(180.0)
    }

    /// Reduces the saturation to zero, leaving hue, lightness, and alpha
    /// unchanged.
    pub fn greyscale(&self) -> Result<Colour> {
        self.desaturate(100.0, false)
    }

    /// Greyscale for American speakers. Alias for [`Colour::greyscale`].
    pub fn grayscale(&self) -> Result<Colour> {
        self.desaturate(100.0, false)
    }

    /// Mixes two colours.
    ///
    /// `weight` is the whole-number percentage of this colour in the
    /// result; 50 is the even mix, 25 keeps a quarter of this colour and
    /// three quarters of `other`. The alpha difference between the colours
    /// also weighs in: both the weight and the difference are normalised to
    /// [-1, 1] and combined as `(w + a) / (1 + w * a)`, which degenerates
    /// to `w` when the alphas agree and to whichever input is saturated at
    /// plus or minus one otherwise (the `w * a == -1` pole is handled as a
    /// special case). The result's alpha is the plain weighted average.
    ///
    /// For example:
    /// - `mix(#f00, #00f, 50)` gives `#7f007f`
    /// - `mix(#f00, #00f, 25)` gives `#3f00bf`
    /// - `mix(rgba(255, 0, 0, 0.5), #00f, 50)` gives `rgba(63, 0, 191, 0.75)`
    pub fn mix(&self, other: &Colour, weight: f64) -> Result<Colour> {
        if weight.fract() != 0.0 {
            return Err(TintError::InvalidAmount { amount: weight });
        }
        if !(0.0..=100.0).contains(&weight) {
            return Err(TintError::AmountOutOfRange {
                amount: weight,
                min: 0.0,
                max: 100.0,
            });
        }

        let p = weight / 100.0;
        let w = p * 2.0 - 1.0;
        let a = self.alpha() - other.alpha();

        let combined = if w * a == -1.0 {
            w
        } else {
            (w + a) / (1.0 + w * a)
        };
        let w1 = (combined + 1.0) / 2.0;
        let w2 = 1.0 - w1;

        let (r1, g1, b1) = self.rgb();
        let (r2, g2, b2) = other.rgb();

        let blend = |c1: u8, c2: u8| (f64::from(c1) * w1 + f64::from(c2) * w2).trunc();
        let alpha = self.alpha() * p + other.alpha() * (1.0 - p);

        Ok(Colour::from_rgba(
            blend(r1, r2),
            blend(g1, g2),
            blend(b1, b2),
            alpha,
        ))
    }

    /// Adjusts one channel of the colour.
    ///
    /// The amount must be a whole number within [min, max]. The new value
    /// is `current * (1 +/- amount/100)` when proportional, `current +/-
    /// amount` otherwise, clipped back into [min, max]. Alpha amounts of at
    /// most 1 are rescaled to a percentage for the proportional branch.
    fn adjust(
        &self,
        amount: f64,
        of_current: bool,
        channel: Channel,
        direction: Direction,
        min: f64,
        max: f64,
    ) -> Result<Colour> {
        if amount.fract() != 0.0 {
            return Err(TintError::InvalidAmount { amount });
        }
        if amount < min || amount > max {
            return Err(TintError::AmountOutOfRange { amount, min, max });
        }

        let amount = if channel == Channel::Alpha && of_current && amount <= 1.0 {
            amount * 100.0
        } else {
            amount
        };
        let signed = match direction {
            Direction::Increase => amount,
            Direction::Decrease => -amount,
        };

        let current = self.channel_value(channel);
        let value = if of_current {
            current * (1.0 + signed / 100.0)
        } else {
            current + signed
        };

        Ok(self.with_channel(channel, value.clamp(min, max)))
    }

    fn channel_value(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => f64::from(self.red()),
            Channel::Green => f64::from(self.green()),
            Channel::Blue => f64::from(self.blue()),
            Channel::Hue => self.hue(),
            Channel::Saturation => self.saturation(),
            Channel::Lightness => self.lightness(),
            Channel::Alpha => self.alpha(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lighten_of_range_and_of_current() {
        let c = Colour::from_hsl(0.0, 100.0, 40.0);
        assert_eq!(c.lighten(50.0, false).unwrap().lightness(), 90.0);
        assert_eq!(c.lighten(50.0, true).unwrap().lightness(), 60.0);
    }

    #[test]
    fn test_darken() {
        let c = Colour::from_hsl(0.0, 100.0, 80.0);
        assert_eq!(c.darken(50.0, false).unwrap().lightness(), 30.0);
        assert_eq!(c.darken(50.0, true).unwrap().lightness(), 40.0);
    }

    #[test]
    fn test_adjust_clips_at_range() {
        let c = Colour::from_hsl(0.0, 100.0, 80.0);
        assert_eq!(c.lighten(50.0, false).unwrap().lightness(), 100.0);
        assert_eq!(c.darken(90.0, false).unwrap().lightness(), 0.0);
    }

    #[test]
    fn test_saturate_desaturate() {
        let c = Colour::from_hsl(0.0, 40.0, 50.0);
        assert_eq!(c.saturate(30.0, false).unwrap().saturation(), 70.0);
        assert_eq!(c.desaturate(30.0, false).unwrap().saturation(), 10.0);
    }

    #[test]
    fn test_amount_must_be_whole() {
        let c = Colour::from_hsl(0.0, 100.0, 50.0);
        assert!(matches!(
            c.lighten(10.5, false),
            Err(TintError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_amount_out_of_range() {
        let c = Colour::from_hsl(0.0, 100.0, 50.0);
        assert!(matches!(
            c.lighten(101.0, false),
            Err(TintError::AmountOutOfRange { .. })
        ));
        assert!(matches!(
            c.darken(-5.0, false),
            Err(TintError::AmountOutOfRange { .. })
        ));
    }

    #[test]
    fn test_opacify_percentage_of_current() {
        let c = Colour::from_rgba(0.0, 0.0, 0.0, 0.4);
        let opaque = c.opacify(50.0, true).unwrap();
        assert!((opaque.alpha() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_transparentise_percentage_of_current() {
        let c = Colour::from_rgba(0.0, 0.0, 0.0, 0.8);
        let faded = c.transparentise(50.0, true).unwrap();
        assert!((faded.alpha() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_opacify_unit_amount_rescales_when_proportional() {
        let c = Colour::from_rgba(0.0, 0.0, 0.0, 0.4);
        // Amount 1 proportional becomes 100 percent: alpha doubles.
        let opaque = c.opacify(1.0, true).unwrap();
        assert!((opaque.alpha() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_opacify_absolute_unit_amount() {
        let c = Colour::from_rgba(0.0, 0.0, 0.0, 0.4);
        let opaque = c.opacify(1.0, false).unwrap();
        assert_eq!(opaque.alpha(), 1.0);
    }

    #[test]
    fn test_adjustments_keep_other_channels() {
        let c = Colour::from_hsla(210.0, 60.0, 40.0, 0.5);
        let lighter = c.lighten(20.0, false).unwrap();
        assert_eq!(lighter.hue(), 210.0);
        assert_eq!(lighter.saturation(), 60.0);
        assert_eq!(lighter.alpha(), 0.5);
    }

    #[test]
    fn test_adjust_hue_wraps() {
        let c = Colour::from_hsl(350.0, 100.0, 50.0);
        assert_eq!(c.adjust_hue(20.0).hue(), 10.0);
        assert_eq!(c.adjust_hue(360.0).hue(), 350.0);
        assert_eq!(c.adjust_hue(-30.0).hue(), 320.0);
    }

    #[test]
    fn test_complement_twice_is_identity() {
        let c = Colour::from_hsl(40.0, 100.0, 50.0);
        assert_eq!(c.complement().hue(), 220.0);
        assert_eq!(c.complement().complement().hue(), 40.0);
    }

    #[test]
    fn test_greyscale() {
        let c = Colour::from_hsla(120.0, 80.0, 60.0, 0.7);
        let grey = c.greyscale().unwrap();
        assert_eq!(grey.saturation(), 0.0);
        assert_eq!(grey.hue(), 120.0);
        assert_eq!(grey.lightness(), 60.0);
        assert_eq!(grey.alpha(), 0.7);
        assert_eq!(c.grayscale().unwrap(), grey);
    }

    #[test]
    fn test_mix_even() {
        let red: Colour = "#ff0000".parse().unwrap();
        let blue: Colour = "#0000ff".parse().unwrap();
        let mixed = red.mix(&blue, 50.0).unwrap();
        assert_eq!(mixed.rgb(), (0x7f, 0x00, 0x7f));
    }

    #[test]
    fn test_mix_weighted() {
        let red: Colour = "#ff0000".parse().unwrap();
        let blue: Colour = "#0000ff".parse().unwrap();
        let mixed = red.mix(&blue, 25.0).unwrap();
        assert_eq!(mixed.rgb(), (0x3f, 0x00, 0xbf));
    }

    #[test]
    fn test_mix_translucent() {
        let red = Colour::from_rgba(255.0, 0.0, 0.0, 0.5);
        let blue: Colour = "#0000ff".parse().unwrap();
        let mixed = red.mix(&blue, 50.0).unwrap();
        assert_eq!(mixed.rgb(), (63, 0, 191));
        assert!((mixed.alpha() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_mix_identity_within_rounding() {
        let c = Colour::from_rgb(200.0, 100.0, 30.0);
        for weight in [0.0, 25.0, 50.0, 75.0, 100.0] {
            let mixed = c.mix(&c, weight).unwrap();
            let (r, g, b) = mixed.rgb();
            assert!((i32::from(r) - 200).abs() <= 1);
            assert!((i32::from(g) - 100).abs() <= 1);
            assert!((i32::from(b) - 30).abs() <= 1);
        }
    }

    #[test]
    fn test_mix_validates_weight() {
        let c = Colour::from_rgb(0.0, 0.0, 0.0);
        assert!(matches!(
            c.mix(&c, 50.5),
            Err(TintError::InvalidAmount { .. })
        ));
        assert!(matches!(
            c.mix(&c, 101.0),
            Err(TintError::AmountOutOfRange { .. })
        ));
    }
}
