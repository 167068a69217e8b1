use approx::assert_abs_diff_eq;
use toerings::color::{Color, ColorModel};
use toerings::error::RingsError;
use toerings::sparkline::{fill_for, stroke_for};

fn assert_color(actual: Color, expected: Color) {
    assert_abs_diff_eq!(actual.red, expected.red, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.green, expected.green, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.blue, expected.blue, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.alpha, expected.alpha, epsilon = 1e-9);
}

#[test]
fn parses_hex_notations() {
    assert_color(Color::parse_css("#fff").expect("short hex"), Color::WHITE);
    assert_color(
        Color::parse_css("#FF00FF").expect("long hex"),
        Color::rgb(1.0, 0.0, 1.0),
    );
    assert_color(
        Color::parse_css("#00ff0080").expect("hex with alpha"),
        Color::rgba(0.0, 1.0, 0.0, 128.0 / 255.0),
    );
}

#[test]
fn parses_functional_notations() {
    assert_color(
        Color::parse_css("rgba(0, 0, 0, 0.5)").expect("rgba"),
        Color::rgba(0.0, 0.0, 0.0, 0.5),
    );
    assert_color(
        Color::parse_css("rgb(255 255 255 / 20%)").expect("space separated rgb"),
        Color::rgba(1.0, 1.0, 1.0, 0.2),
    );
    assert_color(
        Color::parse_css("hsl(120, 100%, 50%)").expect("hsl"),
        Color::rgb(0.0, 1.0, 0.0),
    );
    assert_color(
        Color::parse_css("hsla(0, 0%, 100%, 0.7)").expect("hsla"),
        Color::rgba(1.0, 1.0, 1.0, 0.7),
    );
}

#[test]
fn rejects_unsupported_input() {
    for input in ["", "white", "#12345", "#ggg", "rgb(1, 2)", "rgb(a, b, c)"] {
        let err = Color::parse_css(input).expect_err("should reject");
        assert!(matches!(err, RingsError::InvalidColor(_)), "{input}");
    }
}

#[test]
fn hsl_string_uses_hsla_only_when_translucent() {
    assert_eq!(Color::WHITE.to_hsl_string(), "hsl(0, 0%, 100%)");
    assert_eq!(
        Color::rgb(1.0, 0.0, 1.0).to_hsl_string(),
        "hsl(300, 100%, 50%)"
    );
    assert_eq!(
        Color::rgba(0.0, 0.0, 0.0, 0.5).to_hsl_string(),
        "hsla(0, 0%, 0%, 0.5)"
    );
}

#[test]
fn lighten_raises_lightness_and_clamps() {
    let magenta = Color::rgb(1.0, 0.0, 1.0);
    assert_color(magenta.lighten(0.2), Color::rgb(1.0, 0.4, 1.0));
    assert_color(Color::WHITE.lighten(0.2), Color::WHITE);
    assert_color(Color::BLACK.lighten(-0.5), Color::BLACK);
}

#[test]
fn with_alpha_replaces_and_clamps_alpha() {
    assert_abs_diff_eq!(Color::WHITE.with_alpha(0.7).alpha, 0.7);
    assert_abs_diff_eq!(Color::WHITE.with_alpha(3.0).alpha, 1.0);
    assert_abs_diff_eq!(Color::WHITE.with_alpha(-1.0).alpha, 0.0);
}

#[test]
fn sparkline_paint_transform_matches_expected_strings() {
    assert_eq!(stroke_for(&Color::neutral()), "hsla(0, 0%, 100%, 0.7)");
    assert_eq!(fill_for(&Color::neutral()), "hsla(0, 0%, 100%, 0.5)");

    let magenta = Color::rgb(1.0, 0.0, 1.0);
    assert_eq!(stroke_for(&magenta), "hsla(300, 100%, 70%, 0.7)");
    assert_eq!(fill_for(&magenta), "hsla(300, 100%, 70%, 0.5)");

    let black_overlay = Color::rgba(0.0, 0.0, 0.0, 0.5);
    assert_eq!(stroke_for(&black_overlay), "hsla(0, 0%, 20%, 0.7)");
}

#[test]
fn serde_round_trips_through_css_string() {
    let color = Color::rgba(1.0, 1.0, 1.0, 0.2);
    let json = serde_json::to_string(&color).expect("serialize");
    assert_eq!(json, "\"rgba(255, 255, 255, 0.2)\"");

    let parsed: Color = serde_json::from_str(&json).expect("deserialize");
    assert_color(parsed, color);
    assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
}
