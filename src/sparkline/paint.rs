use std::cell::OnceCell;
use std::fmt;

use crate::color::ColorModel;

/// Alpha applied to the foreground stroke.
pub const STROKE_ALPHA: f64 = 0.7;
/// Alpha applied to the foreground fill.
pub const FILL_ALPHA: f64 = 0.5;
/// HSL lightness added to both stroke and fill.
pub const LIGHTEN_AMOUNT: f64 = 0.2;

#[must_use]
pub fn stroke_for<C: ColorModel>(color: &C) -> String {
    color
        .with_alpha(STROKE_ALPHA)
        .lighten(LIGHTEN_AMOUNT)
        .to_hsl_string()
}

#[must_use]
pub fn fill_for<C: ColorModel>(color: &C) -> String {
    color
        .with_alpha(FILL_ALPHA)
        .lighten(LIGHTEN_AMOUNT)
        .to_hsl_string()
}

/// A paint string that may be produced late.
///
/// Lazy sources hold a producer that runs on the first `resolve` (normally
/// the next redraw) and is cached afterwards.
pub struct PaintSource {
    producer: Option<Box<dyn Fn() -> String>>,
    resolved: OnceCell<String>,
}

impl PaintSource {
    #[must_use]
    pub fn fixed(value: impl Into<String>) -> Self {
        Self {
            producer: None,
            resolved: OnceCell::from(value.into()),
        }
    }

    #[must_use]
    pub fn lazy(producer: impl Fn() -> String + 'static) -> Self {
        Self {
            producer: Some(Box::new(producer)),
            resolved: OnceCell::new(),
        }
    }

    pub fn resolve(&self) -> &str {
        self.resolved.get_or_init(|| {
            self.producer
                .as_ref()
                .map_or_else(String::new, |producer| producer())
        })
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

impl fmt::Debug for PaintSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolved.get() {
            Some(value) => f.debug_tuple("PaintSource").field(value).finish(),
            None => f.write_str("PaintSource(<pending>)"),
        }
    }
}

/// Stroke and fill of one series; `None` leaves that part unpainted.
#[derive(Debug, Default)]
pub struct SeriesPaint {
    pub stroke: Option<PaintSource>,
    pub fill: Option<PaintSource>,
}

impl SeriesPaint {
    /// Unpainted series.
    #[must_use]
    pub fn bare() -> Self {
        Self::default()
    }

    /// Stroke and fill derived now from `color`.
    #[must_use]
    pub fn eager<C: ColorModel>(color: &C) -> Self {
        Self {
            stroke: Some(PaintSource::fixed(stroke_for(color))),
            fill: Some(PaintSource::fixed(fill_for(color))),
        }
    }

    /// Stroke and fill derived from `color` when first drawn.
    #[must_use]
    pub fn deferred<C: ColorModel>(color: C) -> Self {
        let fill_color = color.clone();
        Self {
            stroke: Some(PaintSource::lazy(move || stroke_for(&color))),
            fill: Some(PaintSource::lazy(move || fill_for(&fill_color))),
        }
    }

    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.stroke.is_none() && self.fill.is_none()
    }
}
