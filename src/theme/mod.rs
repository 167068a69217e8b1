//! Dashboard theme state.
//!
//! Each color and the font family is an independent [`ThemeCell`], so a
//! widget subscribes only to the values it actually paints with and a change
//! to one color never disturbs the others.

mod cell;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::Color;
use crate::error::{RingsError, RingsResult};
use crate::style::StyleMap;

pub use cell::{Subscription, ThemeCell};

pub const DEFAULT_FONT_FAMILY: &str = "Inter, Avenir, Helvetica, Arial, sans-serif";

/// Named colors a widget can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeColorName {
    Foreground,
    Background,
    Title,
    Accent,
    ArcTrack,
    ArcCap,
}

impl ThemeColorName {
    pub const ALL: [Self; 6] = [
        Self::Foreground,
        Self::Background,
        Self::Title,
        Self::Accent,
        Self::ArcTrack,
        Self::ArcCap,
    ];

    /// Custom-property key (without the `--` prefix) this color is exposed as.
    #[must_use]
    pub const fn style_key(self) -> &'static str {
        match self {
            Self::Foreground => "foreground-color",
            Self::Background => "background-color",
            Self::Title => "title-color",
            Self::Accent => "accent-color",
            Self::ArcTrack => "arc-track-color",
            Self::ArcCap => "arc-cap-color",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub foreground: ThemeCell<Color>,
    pub background: ThemeCell<Color>,
    pub title: ThemeCell<Color>,
    pub accent: ThemeCell<Color>,
    pub arc_track: ThemeCell<Color>,
    pub arc_cap: ThemeCell<Color>,
    pub font_family: ThemeCell<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: ThemeCell::new(Color::WHITE),
            background: ThemeCell::new(Color::rgba(0.0, 0.0, 0.0, 0.5)),
            title: ThemeCell::new(Color::rgb(0.0, 1.0, 0.0)),
            accent: ThemeCell::new(Color::rgb(1.0, 0.0, 1.0)),
            arc_track: ThemeCell::new(Color::rgba(1.0, 1.0, 1.0, 0.2)),
            arc_cap: ThemeCell::new(Color::WHITE),
            font_family: ThemeCell::new(DEFAULT_FONT_FAMILY.to_owned()),
        }
    }
}

impl Theme {
    #[must_use]
    pub fn color(&self, name: ThemeColorName) -> &ThemeCell<Color> {
        match name {
            ThemeColorName::Foreground => &self.foreground,
            ThemeColorName::Background => &self.background,
            ThemeColorName::Title => &self.title,
            ThemeColorName::Accent => &self.accent,
            ThemeColorName::ArcTrack => &self.arc_track,
            ThemeColorName::ArcCap => &self.arc_cap,
        }
    }

    /// Applies every field present in `config`.
    ///
    /// All colors are parsed before any cell changes, so an invalid entry
    /// leaves the theme untouched.
    pub fn apply(&self, config: &ThemeConfig) -> RingsResult<()> {
        let mut parsed = Vec::with_capacity(ThemeColorName::ALL.len());
        for name in ThemeColorName::ALL {
            if let Some(raw) = config.color(name) {
                let color = Color::parse_css(raw).map_err(|err| {
                    RingsError::InvalidColor(format!("theme color `{name:?}`: {err}"))
                })?;
                parsed.push((name, color));
            }
        }

        for (name, color) in parsed {
            debug!(?name, %color, "apply theme color");
            self.color(name).set(color);
        }
        if let Some(font_family) = &config.font_family {
            debug!(font_family = %font_family, "apply theme font family");
            self.font_family.set(font_family.clone());
        }
        Ok(())
    }

    /// Current theme as custom properties for the style binder.
    #[must_use]
    pub fn style_vars(&self) -> StyleMap {
        let mut vars = StyleMap::new();
        for name in ThemeColorName::ALL {
            vars.insert(name.style_key(), self.color(name).get());
        }
        vars.insert("font-family", self.font_family.get());
        vars
    }
}

/// Serialized theme overrides; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub foreground: Option<String>,
    pub background: Option<String>,
    pub title: Option<String>,
    pub accent: Option<String>,
    pub arc_track: Option<String>,
    pub arc_cap: Option<String>,
    pub font_family: Option<String>,
}

impl ThemeConfig {
    pub fn from_json_str(input: &str) -> RingsResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| RingsError::InvalidData(format!("failed to parse theme config: {e}")))
    }

    pub fn to_json_pretty(&self) -> RingsResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RingsError::InvalidData(format!("failed to serialize theme config: {e}")))
    }

    #[must_use]
    pub fn color(&self, name: ThemeColorName) -> Option<&str> {
        match name {
            ThemeColorName::Foreground => self.foreground.as_deref(),
            ThemeColorName::Background => self.background.as_deref(),
            ThemeColorName::Title => self.title.as_deref(),
            ThemeColorName::Accent => self.accent.as_deref(),
            ThemeColorName::ArcTrack => self.arc_track.as_deref(),
            ThemeColorName::ArcCap => self.arc_cap.as_deref(),
        }
    }
}
