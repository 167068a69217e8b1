use crate::error::{RingsError, RingsResult};

use super::{Color, Hsla};

pub(super) fn parse(input: &str) -> RingsResult<Color> {
    let trimmed = input.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| invalid(input));
    }

    let lowered = trimmed.to_ascii_lowercase();
    let (name, body) = lowered
        .strip_suffix(')')
        .and_then(|rest| rest.split_once('('))
        .ok_or_else(|| invalid(input))?;
    let args: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    let color = match (name.trim(), args.as_slice()) {
        ("rgb" | "rgba", [red, green, blue]) => rgb_args(red, green, blue, None),
        ("rgb" | "rgba", [red, green, blue, alpha]) => rgb_args(red, green, blue, Some(alpha)),
        ("hsl" | "hsla", [hue, saturation, lightness]) => {
            hsl_args(hue, saturation, lightness, None)
        }
        ("hsl" | "hsla", [hue, saturation, lightness, alpha]) => {
            hsl_args(hue, saturation, lightness, Some(alpha))
        }
        _ => None,
    };
    color.ok_or_else(|| invalid(input))
}

fn invalid(input: &str) -> RingsError {
    RingsError::InvalidColor(format!("unsupported css color `{input}`"))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_owned(),
        _ => return None,
    };
    let byte = |index: usize| u8::from_str_radix(&expanded[index * 2..index * 2 + 2], 16).ok();

    let alpha = if expanded.len() == 8 {
        f64::from(byte(3)?) / 255.0
    } else {
        1.0
    };
    Some(Color::from_rgba8(byte(0)?, byte(1)?, byte(2)?, alpha))
}

fn rgb_args(red: &str, green: &str, blue: &str, alpha: Option<&&str>) -> Option<Color> {
    let channel = |raw: &str| -> Option<f64> {
        let value = match raw.strip_suffix('%') {
            Some(percent) => percent.parse::<f64>().ok()? / 100.0,
            None => raw.parse::<f64>().ok()? / 255.0,
        };
        value.is_finite().then(|| value.clamp(0.0, 1.0))
    };

    Some(Color::rgba(
        channel(red)?,
        channel(green)?,
        channel(blue)?,
        alpha_arg(alpha)?,
    ))
}

fn hsl_args(hue: &str, saturation: &str, lightness: &str, alpha: Option<&&str>) -> Option<Color> {
    let hue = hue.strip_suffix("deg").unwrap_or(hue).parse::<f64>().ok()?;
    let percent = |raw: &str| -> Option<f64> {
        let value = raw.strip_suffix('%').unwrap_or(raw).parse::<f64>().ok()? / 100.0;
        value.is_finite().then(|| value.clamp(0.0, 1.0))
    };
    if !hue.is_finite() {
        return None;
    }

    Some(
        Hsla {
            hue: hue.rem_euclid(360.0),
            saturation: percent(saturation)?,
            lightness: percent(lightness)?,
            alpha: alpha_arg(alpha)?,
        }
        .to_color(),
    )
}

fn alpha_arg(alpha: Option<&&str>) -> Option<f64> {
    let Some(raw) = alpha else {
        return Some(1.0);
    };
    let value = match raw.strip_suffix('%') {
        Some(percent) => percent.parse::<f64>().ok()? / 100.0,
        None => raw.parse::<f64>().ok()?,
    };
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}
