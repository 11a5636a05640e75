use color_convert_css::{AlphaMode, Color, SerializeOptions, parse_color};
use pretty_assertions::assert_eq;

fn options() -> SerializeOptions {
    SerializeOptions::default()
}

#[test]
fn test_hex_rendering() {
    let red = Color::new(1.0, 0.0, 0.0, 1.0);
    assert_eq!(red.to_hex_string(&options()), "#ff0000");

    let upper = SerializeOptions {
        uppercase_hex: true,
        ..options()
    };
    assert_eq!(
        Color::new(0.2, 0.4, 0.6, 0.5).to_hex_string(&upper),
        "#33669980"
    );

    let never = SerializeOptions {
        alpha: AlphaMode::Never,
        ..options()
    };
    assert_eq!(
        Color::new(0.2, 0.4, 0.6, 0.5).to_hex_string(&never),
        "#336699"
    );

    let always = SerializeOptions {
        alpha: AlphaMode::Always,
        ..options()
    };
    assert_eq!(red.to_hex_string(&always), "#ff0000ff");
}

#[test]
fn test_rgb_rendering() {
    let color = Color::new(0.0, 128.0 / 255.0, 1.0, 1.0);
    assert_eq!(color.to_rgb_string(&options()), "rgb(0, 128, 255)");
    assert_eq!(
        color.with_alpha(0.5).to_rgb_string(&options()),
        "rgba(0, 128, 255, 0.5)"
    );

    let modern = SerializeOptions {
        legacy: false,
        ..options()
    };
    assert_eq!(color.to_rgb_string(&modern), "rgb(0 128 255)");
    assert_eq!(
        color.with_alpha(0.5).to_rgb_string(&modern),
        "rgb(0 128 255 / 0.5)"
    );
}

#[test]
fn test_hsl_rendering() {
    let red = Color::new(1.0, 0.0, 0.0, 1.0);
    assert_eq!(red.to_hsl_string(&options()), "hsl(0, 100%, 50%)");

    let azure = Color::new(0.0, 128.0 / 255.0, 1.0, 1.0);
    assert_eq!(azure.to_hsl_string(&options()), "hsl(209.882, 100%, 50%)");

    let gray = Color::new(0.5, 0.5, 0.5, 0.25);
    let modern = SerializeOptions {
        legacy: false,
        ..options()
    };
    assert_eq!(gray.to_hsl_string(&modern), "hsl(0 0% 50% / 0.25)");
    assert_eq!(gray.to_hsl_string(&options()), "hsla(0, 0%, 50%, 0.25)");
}

#[test]
fn test_oklch_rendering() {
    assert_eq!(
        Color::new(1.0, 0.0, 0.0, 1.0).to_oklch_string(&options()),
        "oklch(0.628 0.258 29.234)"
    );
    assert_eq!(
        Color::new(1.0, 1.0, 1.0, 1.0).to_oklch_string(&options()),
        "oklch(1 0 0)"
    );
    assert_eq!(
        Color::new(0.0, 0.0, 0.0, 0.5).to_oklch_string(&options()),
        "oklch(0 0 0 / 0.5)"
    );
}

#[test]
fn test_oklch_to_hex_clamps_out_of_gamut() {
    let color = parse_color("oklch(0.7 0.35 150)").unwrap();
    let hex = color.to_hex_string(&options());
    assert_eq!(hex.len(), 7);
    assert!(hex.starts_with("#00"), "{hex}");
}

#[test]
fn test_oklch_out_of_gamut_survives_oklch_round_trip() {
    let color = parse_color("oklch(0.7 0.35 150)").unwrap();
    assert_eq!(color.to_oklch_string(&options()), "oklch(0.7 0.35 150)");
}
