use tracing::{debug, trace, warn};

use crate::color::Color;
use crate::core::project_sparkline;
use crate::element::Element;
use crate::error::{RingsError, RingsResult};
use crate::render::{LinePrimitive, NullRenderer, PolygonPrimitive, RenderFrame, Renderer};

use super::{
    PaintSource, PlotData, PlotEngine, PlotHandle, PlotId, SeriesPaint, SparklineOptions,
};

/// Host attribute naming the plot mounted into an element.
pub const PLOT_ATTRIBUTE: &str = "data-plot";

/// Stroke width of painted series, in pixels.
pub const STROKE_WIDTH: f64 = 1.0;

/// Headless engine building [`FramePlot`]s that paint into `R`.
#[derive(Debug)]
pub struct FramePlotEngine<R = NullRenderer> {
    plots_created: usize,
    _renderer: std::marker::PhantomData<fn() -> R>,
}

impl<R> FramePlotEngine<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            plots_created: 0,
            _renderer: std::marker::PhantomData,
        }
    }

    /// Number of plot instances constructed so far.
    #[must_use]
    pub fn plots_created(&self) -> usize {
        self.plots_created
    }
}

impl<R> Default for FramePlotEngine<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Renderer + Default> PlotEngine for FramePlotEngine<R> {
    type Host = Element;
    type Plot = FramePlot<R>;

    fn create(
        &mut self,
        options: SparklineOptions,
        data: PlotData,
        host: &mut Element,
    ) -> RingsResult<FramePlot<R>> {
        if !options.viewport().is_valid() {
            return Err(RingsError::InvalidViewport {
                width: options.width,
                height: options.height,
            });
        }

        let id = PlotId::next();
        host.set_attribute(PLOT_ATTRIBUTE, id.to_string());
        self.plots_created += 1;
        debug!(plot = %id, host = %host.id(), "create frame plot");

        Ok(FramePlot {
            id,
            options,
            data,
            renderer: R::default(),
            redraws: 0,
            destroyed: false,
        })
    }
}

/// Sparkline instance that projects its painted series into a
/// [`RenderFrame`] and hands it to a [`Renderer`] on each redraw.
#[derive(Debug)]
pub struct FramePlot<R = NullRenderer> {
    id: PlotId,
    options: SparklineOptions,
    data: PlotData,
    renderer: R,
    redraws: usize,
    destroyed: bool,
}

impl<R: Renderer> FramePlot<R> {
    /// Paints the current data, resolving any deferred series paint.
    pub fn redraw(&mut self) -> RingsResult<()> {
        if self.destroyed {
            return Err(RingsError::InvalidData(format!(
                "{} was destroyed and cannot redraw",
                self.id
            )));
        }

        let viewport = self.options.viewport();
        let geometry =
            project_sparkline(&self.data.x, &self.data.y, viewport, self.options.px_align)?;

        let mut frame = RenderFrame::new(viewport);
        if !geometry.is_empty() {
            for (index, paint) in self.options.series.iter().enumerate() {
                if let Some(color) = paint_color(self.id, index, paint.fill.as_ref()) {
                    let points = geometry.fill_polygon.iter().map(|v| (v.x, v.y)).collect();
                    frame = frame.with_polygon(PolygonPrimitive::new(points, color));
                }
                if let Some(color) = paint_color(self.id, index, paint.stroke.as_ref()) {
                    for (from, to) in geometry.segments() {
                        frame = frame.with_line(LinePrimitive::new(
                            from.x,
                            from.y,
                            to.x,
                            to.y,
                            STROKE_WIDTH,
                            color,
                        ));
                    }
                }
            }
        }

        self.renderer.render(&frame)?;
        self.redraws += 1;
        trace!(
            plot = %self.id,
            lines = frame.lines.len(),
            polygons = frame.polygons.len(),
            "redraw frame plot"
        );
        Ok(())
    }

    #[must_use]
    pub fn options(&self) -> &SparklineOptions {
        &self.options
    }

    #[must_use]
    pub fn data(&self) -> &PlotData {
        &self.data
    }

    #[must_use]
    pub fn series_paint(&self, series: usize) -> Option<&SeriesPaint> {
        self.options.series.get(series)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl<R> PlotHandle for FramePlot<R> {
    fn id(&self) -> PlotId {
        self.id
    }

    fn set_data(&mut self, data: PlotData) {
        self.data = data;
    }

    fn set_series_paint(&mut self, series: usize, paint: SeriesPaint) {
        match self.options.series.get_mut(series) {
            Some(slot) => *slot = paint,
            None => warn!(plot = %self.id, series, "ignoring paint for unknown series"),
        }
    }

    fn destroy(&mut self) {
        self.destroyed = true;
        self.data = PlotData::default();
    }
}

fn paint_color(id: PlotId, series: usize, source: Option<&PaintSource>) -> Option<Color> {
    let raw = source?.resolve();
    match Color::parse_css(raw) {
        Ok(color) => Some(color),
        Err(err) => {
            warn!(plot = %id, series, error = %err, "skipping unparsable series paint");
            None
        }
    }
}
