use super::{Color, round_alpha};

/// Hue/saturation/lightness view of a [`Color`].
///
/// `hue` is in degrees `[0, 360)`; `saturation`, `lightness` and `alpha` are
/// normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        let Color {
            red,
            green,
            blue,
            alpha,
        } = color;
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;
        let lightness = (max + min) / 2.0;

        if delta <= f64::EPSILON {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                lightness,
                alpha,
            };
        }

        let denominator = 1.0 - (2.0 * lightness - 1.0).abs();
        let saturation = if denominator <= f64::EPSILON {
            0.0
        } else {
            (delta / denominator).min(1.0)
        };

        let sector = if max == red {
            ((green - blue) / delta).rem_euclid(6.0)
        } else if max == green {
            (blue - red) / delta + 2.0
        } else {
            (red - green) / delta + 4.0
        };

        Self {
            hue: sector * 60.0,
            saturation,
            lightness,
            alpha,
        }
    }

    #[must_use]
    pub fn to_color(self) -> Color {
        let hue = self.hue.rem_euclid(360.0) / 60.0;
        let chroma = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let secondary = chroma * (1.0 - (hue.rem_euclid(2.0) - 1.0).abs());
        let offset = self.lightness - chroma / 2.0;

        let (red, green, blue) = match hue as u8 {
            0 => (chroma, secondary, 0.0),
            1 => (secondary, chroma, 0.0),
            2 => (0.0, chroma, secondary),
            3 => (0.0, secondary, chroma),
            4 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };

        Color::rgba(
            (red + offset).clamp(0.0, 1.0),
            (green + offset).clamp(0.0, 1.0),
            (blue + offset).clamp(0.0, 1.0),
            self.alpha,
        )
    }

    /// CSS rendering with integer hue/percentages and alpha rounded to three
    /// decimals; the `hsla` form is used only when that rounded alpha is
    /// below one.
    #[must_use]
    pub fn to_css_string(self) -> String {
        // `+ 0.0` folds a negative zero so it never prints as "-0".
        let hue = self.hue.round() + 0.0;
        let saturation = (self.saturation * 100.0).round() + 0.0;
        let lightness = (self.lightness * 100.0).round() + 0.0;
        let alpha = round_alpha(self.alpha);
        if alpha < 1.0 {
            format!("hsla({hue}, {saturation}%, {lightness}%, {alpha})")
        } else {
            format!("hsl({hue}, {saturation}%, {lightness}%)")
        }
    }
}
