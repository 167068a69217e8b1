//! Color capability consumed by the binders.
//!
//! Binders only need four operations from a color: a neutral fallback, an
//! alpha override, an HSL lightness adjustment and an HSL string rendering.
//! [`ColorModel`] names exactly that surface so hosts can plug in their own
//! color library; [`Color`] is the bundled adapter.

mod css;
mod hsl;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RingsError, RingsResult};

pub use hsl::Hsla;

/// Minimal color surface used to derive sparkline paint strings.
pub trait ColorModel: Clone + PartialEq + 'static {
    /// Color used when a sample carries no color (solid white).
    fn neutral() -> Self;

    /// Returns a copy with alpha replaced by `alpha` (clamped to `[0, 1]`).
    fn with_alpha(&self, alpha: f64) -> Self;

    /// Returns a copy with HSL lightness raised by `amount` (clamped to `[0, 1]`).
    fn lighten(&self, amount: f64) -> Self;

    /// Renders `hsl(H, S%, L%)`, or `hsla(H, S%, L%, A)` when translucent.
    fn to_hsl_string(&self) -> String;
}

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels and a normalized alpha.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            alpha.clamp(0.0, 1.0),
        )
    }

    /// Parses hex, `rgb()`/`rgba()` and `hsl()`/`hsla()` CSS notations.
    pub fn parse_css(input: &str) -> RingsResult<Self> {
        css::parse(input)
    }

    #[must_use]
    pub fn to_hsla(self) -> Hsla {
        Hsla::from_color(self)
    }

    /// Renders `rgb(R, G, B)`, or `rgba(R, G, B, A)` when translucent.
    #[must_use]
    pub fn to_rgb_string(self) -> String {
        let [red, green, blue] = [self.red, self.green, self.blue]
            .map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8);
        let alpha = round_alpha(self.alpha);
        if alpha < 1.0 {
            format!("rgba({red}, {green}, {blue}, {alpha})")
        } else {
            format!("rgb({red}, {green}, {blue})")
        }
    }

    pub fn validate(self) -> RingsResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RingsError::InvalidColor(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl ColorModel for Color {
    fn neutral() -> Self {
        Self::WHITE
    }

    fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    fn lighten(&self, amount: f64) -> Self {
        let mut hsla = self.to_hsla();
        hsla.lightness = (hsla.lightness + amount).clamp(0.0, 1.0);
        hsla.to_color()
    }

    fn to_hsl_string(&self) -> String {
        self.to_hsla().to_css_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgb_string())
    }
}

impl TryFrom<String> for Color {
    type Error = RingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_css(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_rgb_string()
    }
}

pub(crate) fn round_alpha(alpha: f64) -> f64 {
    (alpha * 1000.0).round() / 1000.0
}
