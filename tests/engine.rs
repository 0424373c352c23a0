//! End-to-end tests for the colour engine.

use pretty_assertions::assert_eq;

use tint::{Channel, Colour, Format, PaletteMode, TintError};

#[test]
fn hex_hsl_round_trip() {
    let samples = [
        "#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff", "#808080", "#6495ed", "#f4a460",
        "#123456", "#0a141e",
    ];
    for hex in samples {
        let colour: Colour = hex.parse().unwrap();
        let (h, s, l) = colour.hsl();
        let back = Colour::from_hsl(h, s, l);
        assert_eq!(back.to_css(Format::Hex, true, false), hex, "via hsl {:?}", (h, s, l));
    }
}

#[test]
fn short_hex_parses_like_long_hex() {
    let short: Colour = "#abc".parse().unwrap();
    let long: Colour = "#aabbcc".parse().unwrap();
    assert_eq!(short.rgba(), long.rgba());
}

#[test]
fn transparent_is_fully_zero() {
    let c: Colour = "transparent".parse().unwrap();
    assert_eq!(c.rgba(), (0, 0, 0, 0.0));
}

#[test]
fn mix_identity() {
    let c = Colour::from_rgb(120.0, 45.0, 210.0);
    for weight in [0.0, 10.0, 50.0, 90.0, 100.0] {
        let mixed = c.mix(&c, weight).unwrap();
        let (r, g, b) = mixed.rgb();
        assert!((i32::from(r) - 120).abs() <= 1);
        assert!((i32::from(g) - 45).abs() <= 1);
        assert!((i32::from(b) - 210).abs() <= 1);
    }
}

#[test]
fn mix_pinned_vectors() {
    let red: Colour = "#ff0000".parse().unwrap();
    let blue: Colour = "#0000ff".parse().unwrap();

    let even = red.mix(&blue, 50.0).unwrap();
    assert_eq!(even.to_css(Format::Hex, true, false), "#7f007f");

    let quarter = red.mix(&blue, 25.0).unwrap();
    assert_eq!(quarter.to_css(Format::Hex, true, false), "#3f00bf");
}

#[test]
fn adjust_hue_full_turn_is_identity() {
    let c = Colour::from_hsl(123.0, 45.0, 67.0);
    assert_eq!(c.adjust_hue(360.0).hue(), 123.0);
}

#[test]
fn complement_twice_restores_hue() {
    let c = Colour::from_hsl(321.0, 45.0, 67.0);
    assert_eq!(c.complement().complement().hue(), 321.0);
}

#[test]
fn grayscale_only_zeroes_saturation() {
    let c = Colour::from_hsla(200.0, 80.0, 40.0, 0.6);
    let grey = c.grayscale().unwrap();
    assert_eq!(grey.hsla(), (200.0, 0.0, 40.0, 0.6));
}

#[test]
fn wheel_palette_steps_by_30_degrees() {
    let base = Colour::from_hsl(15.0, 100.0, 50.0);
    let palette = base.palette(12, PaletteMode::Wheel, Format::Hex).unwrap();
    assert_eq!(palette.len(), 12);

    let mut unique = palette.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 12);

    for (i, hex) in palette.iter().enumerate() {
        let colour: Colour = hex.as_str().parse().unwrap();
        let expected = 15.0 + 30.0 * i as f64;
        let diff = (colour.hue() - expected).rem_euclid(360.0);
        let diff = diff.min(360.0 - diff);
        assert!(diff < 1.5, "colour {} has hue {}, expected {}", i, colour.hue(), expected);
    }
}

#[test]
fn complements_palette_of_one_is_the_base() {
    let base = Colour::from_hsl(15.0, 100.0, 50.0);
    let palette = base
        .palette(1, PaletteMode::Complements, Format::Hex)
        .unwrap();
    assert_eq!(palette, vec![base.to_css(Format::Hex, true, true)]);
}

#[test]
fn addition_is_componentwise() {
    let a = Colour::from_rgb(10.0, 20.0, 30.0);
    let b = Colour::from_rgb(5.0, 5.0, 5.0);
    assert_eq!(a.add(&b).unwrap().rgb(), (15, 25, 35));
}

#[test]
fn out_of_range_construction_collapses_on_read() {
    let c = Colour::from_channels(&[
        (Channel::Red, 300.0),
        (Channel::Green, 0.0),
        (Channel::Blue, 0.0),
    ])
    .unwrap();
    assert_eq!(c.red(), 45);
}

#[test]
fn mixed_channel_families_fail_specifically() {
    let result = Colour::from_channels(&[
        (Channel::Red, 1.0),
        (Channel::Green, 1.0),
        (Channel::Blue, 1.0),
        (Channel::Lightness, 50.0),
    ]);
    assert!(matches!(result, Err(TintError::MixedColourSpace)));
}

#[test]
fn unknown_format_fails_specifically() {
    let result = "oklch".parse::<Format>();
    assert!(matches!(result, Err(TintError::UnsupportedFormat { .. })));
}

#[test]
fn named_formatting_round_trips_the_named_table() {
    for name in ["red", "cornflowerblue", "papayawhip", "teal"] {
        let colour: Colour = name.parse().unwrap();
        assert_eq!(colour.to_css(Format::Named, true, true), name);
    }
}

#[test]
fn chained_adjustments_stay_value_oriented() {
    let base = Colour::from_hsl(10.0, 80.0, 50.0);
    let styled = base
        .lighten(10.0, false)
        .unwrap()
        .saturate(10.0, false)
        .unwrap()
        .adjust_hue(20.0);
    assert_eq!(styled.hsl(), (30.0, 90.0, 60.0));
    // The base colour never moved.
    assert_eq!(base.hsl(), (10.0, 80.0, 50.0));
}
