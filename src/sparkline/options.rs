use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::color::ColorModel;
use crate::core::Viewport;

use super::SeriesPaint;

pub const SPARKLINE_WIDTH: u32 = 180;
pub const SPARKLINE_HEIGHT: u32 = 15;

/// Index of the unpainted reference series.
pub const BACKDROP_SERIES: usize = 0;
/// Index of the colored series carrying the samples.
pub const FOREGROUND_SERIES: usize = 1;

/// How the x scale interprets sample positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleKind {
    /// Plain numeric positions (sample indices).
    #[default]
    Linear,
    /// Unix timestamps.
    Time,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub show: bool,
}

/// Construction options for an inline sparkline.
#[derive(Debug)]
pub struct SparklineOptions {
    pub width: u32,
    pub height: u32,
    /// Snap vertices to whole pixels.
    pub px_align: bool,
    pub show_cursor: bool,
    pub show_selection: bool,
    pub show_legend: bool,
    pub x_scale: ScaleKind,
    pub axes: [AxisOptions; 2],
    pub series: SmallVec<[SeriesPaint; 2]>,
}

impl SparklineOptions {
    /// Read-only, axis-less sparkline whose foreground series is painted
    /// from `color`.
    #[must_use]
    pub fn for_color<C: ColorModel>(color: &C) -> Self {
        Self {
            width: SPARKLINE_WIDTH,
            height: SPARKLINE_HEIGHT,
            px_align: false,
            show_cursor: false,
            show_selection: false,
            show_legend: false,
            x_scale: ScaleKind::Linear,
            axes: [AxisOptions { show: false }; 2],
            series: smallvec![SeriesPaint::bare(), SeriesPaint::eager(color)],
        }
    }

    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_px_align(mut self, px_align: bool) -> Self {
        self.px_align = px_align;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.show_cursor || self.show_selection || self.show_legend
    }
}
