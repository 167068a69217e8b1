use tracing::{debug, trace};

use crate::color::{Color, ColorModel};
use crate::error::RingsResult;

use super::{
    FOREGROUND_SERIES, PlotData, PlotEngine, PlotHandle, PlotSample, SeriesPaint,
    SparklineOptions,
};

/// Sparkline bound to one host element.
///
/// Owns the plot for its whole life: the plot is built once in
/// [`attach`](Self::attach) and released by [`detach`](Self::detach) or when
/// the binding is dropped.
#[derive(Debug)]
pub struct SparklineBinding<P: PlotHandle, C: ColorModel = Color> {
    plot: P,
    color: C,
    released: bool,
}

impl<P: PlotHandle, C: ColorModel> SparklineBinding<P, C> {
    pub fn attach<E>(engine: &mut E, host: &mut E::Host, sample: PlotSample<C>) -> RingsResult<Self>
    where
        E: PlotEngine<Plot = P>,
    {
        let PlotSample { x, y, color } = sample;
        let color = color.unwrap_or_else(C::neutral);
        let samples = x.len();

        let plot = engine.create(
            SparklineOptions::for_color(&color),
            PlotData::new(x, y),
            host,
        )?;
        debug!(plot = %plot.id(), samples, "attach sparkline");

        Ok(Self {
            plot,
            color,
            released: false,
        })
    }

    /// Swaps in the new arrays and, when the color changed, a deferred
    /// foreground paint. The plot instance is never rebuilt.
    pub fn update(&mut self, sample: PlotSample<C>) {
        let PlotSample { x, y, color } = sample;
        trace!(plot = %self.plot.id(), samples = x.len(), "update sparkline");
        self.plot.set_data(PlotData::new(x, y));
        self.recolor(color.unwrap_or_else(C::neutral));
    }

    /// Re-derives the foreground paint from `color` without touching data.
    pub fn recolor(&mut self, color: C) {
        if color == self.color {
            return;
        }
        trace!(plot = %self.plot.id(), "recolor sparkline");
        self.plot
            .set_series_paint(FOREGROUND_SERIES, SeriesPaint::deferred(color.clone()));
        self.color = color;
    }

    /// Color the foreground paint is currently derived from.
    #[must_use]
    pub fn color(&self) -> &C {
        &self.color
    }

    #[must_use]
    pub fn plot(&self) -> &P {
        &self.plot
    }

    pub fn plot_mut(&mut self) -> &mut P {
        &mut self.plot
    }

    /// Releases the plot's resources.
    pub fn detach(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.plot.destroy();
        debug!(plot = %self.plot.id(), "detach sparkline");
    }
}

impl<P: PlotHandle, C: ColorModel> Drop for SparklineBinding<P, C> {
    fn drop(&mut self) {
        self.release();
    }
}
