use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::RingsResult;

use super::{SeriesPaint, SparklineOptions};

static NEXT_PLOT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one constructed plot instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlotId(u64);

impl PlotId {
    /// Allocates a process-unique id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_PLOT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plot-{}", self.0)
    }
}

/// Plotted arrays: `x` positions and index-aligned `y` values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl PlotData {
    #[must_use]
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A constructed chart instance, mutated in place across updates.
pub trait PlotHandle {
    fn id(&self) -> PlotId;

    /// Replaces the plotted arrays without rebuilding the instance.
    fn set_data(&mut self, data: PlotData);

    /// Replaces the paint of series `series`; producers run at the next redraw.
    fn set_series_paint(&mut self, series: usize, paint: SeriesPaint);

    /// Releases surfaces, timers and listeners owned by the instance.
    fn destroy(&mut self);
}

/// Factory for plot instances mounted into a host element.
pub trait PlotEngine {
    type Host: ?Sized;
    type Plot: PlotHandle;

    fn create(
        &mut self,
        options: SparklineOptions,
        data: PlotData,
        host: &mut Self::Host,
    ) -> RingsResult<Self::Plot>;
}
