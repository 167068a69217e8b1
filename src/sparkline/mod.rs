//! Sparkline chart binder.
//!
//! A [`SparklineBinding`] constructs one plot on attach and afterwards only
//! swaps its data arrays and foreground paint. Paint strings are captured as
//! producers that run when the plot next redraws, so ticks where the color
//! did not change never re-derive them.

mod binding;
mod engine;
mod frame_plot;
mod options;
mod paint;

use serde::{Deserialize, Serialize};

use crate::color::Color;

pub use binding::SparklineBinding;
pub use engine::{PlotData, PlotEngine, PlotHandle, PlotId};
pub use frame_plot::{FramePlot, FramePlotEngine, PLOT_ATTRIBUTE, STROKE_WIDTH};
pub use options::{
    AxisOptions, BACKDROP_SERIES, FOREGROUND_SERIES, SPARKLINE_HEIGHT, SPARKLINE_WIDTH, ScaleKind,
    SparklineOptions,
};
pub use paint::{
    FILL_ALPHA, LIGHTEN_AMOUNT, PaintSource, STROKE_ALPHA, SeriesPaint, fill_for, stroke_for,
};

/// Input delivered to a sparkline on every update.
///
/// `x` and `y` must have the same length; a mismatch has no defined visual
/// result. A missing `color` paints with the neutral color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSample<C = Color> {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Option<C>,
}

impl<C> PlotSample<C> {
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y, color: None }
    }

    #[must_use]
    pub fn with_color(mut self, color: C) -> Self {
        self.color = Some(color);
        self
    }

    /// Uses `0..len` as x positions.
    #[must_use]
    pub fn indexed(y: Vec<f64>) -> Self {
        let x = (0..y.len()).map(|index| index as f64).collect();
        Self::new(x, y)
    }
}
