//! Widgets wiring theme cells into the binders.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::color::Color;
use crate::error::RingsResult;
use crate::format::stroke_width_for;
use crate::sparkline::{PlotEngine, PlotHandle, PlotSample, SparklineBinding};
use crate::style::StyleMap;
use crate::theme::{Subscription, Theme, ThemeCell};

/// Sparkline whose foreground color follows one theme cell.
///
/// A theme change recolors the live plot right away (lazily, at its next
/// redraw); data updates always paint with the cell's current value.
pub struct ThemedSparkline<P: PlotHandle + 'static> {
    _subscription: Subscription,
    binding: Rc<RefCell<SparklineBinding<P, Color>>>,
    color: ThemeCell<Color>,
}

impl<P: PlotHandle + 'static> ThemedSparkline<P> {
    pub fn attach<E>(
        engine: &mut E,
        host: &mut E::Host,
        color: &ThemeCell<Color>,
        sample: PlotSample<Color>,
    ) -> RingsResult<Self>
    where
        E: PlotEngine<Plot = P>,
    {
        let sample = PlotSample {
            color: Some(color.get()),
            ..sample
        };
        let binding = Rc::new(RefCell::new(SparklineBinding::attach(engine, host, sample)?));

        let weak = Rc::downgrade(&binding);
        let subscription = color.subscribe(move |next: &Color| {
            let Some(binding) = weak.upgrade() else {
                return;
            };
            match binding.try_borrow_mut() {
                Ok(mut binding) => binding.recolor(*next),
                // Mid-update; that update already reads the cell's value.
                Err(_) => trace!("deferring theme recolor until next update"),
            }
        });

        Ok(Self {
            _subscription: subscription,
            binding,
            color: color.clone(),
        })
    }

    /// Pushes new samples painted with the theme's current color; any color
    /// carried by `sample` is ignored.
    pub fn update(&self, sample: PlotSample<Color>) {
        let sample = PlotSample {
            color: Some(self.color.get()),
            ..sample
        };
        self.binding.borrow_mut().update(sample);
    }

    /// Runs `f` against the underlying plot, e.g. to trigger a redraw.
    pub fn with_plot<T>(&self, f: impl FnOnce(&mut P) -> T) -> T {
        f(self.binding.borrow_mut().plot_mut())
    }

    #[must_use]
    pub fn color(&self) -> Color {
        *self.binding.borrow().color()
    }
}

/// Custom properties for a ring gauge drawing `arc_count` concentric arcs.
///
/// Starts from the theme variables and adds the stroke width and arc count
/// the gauge's stylesheet reads.
#[must_use]
pub fn ring_gauge_vars(theme: &Theme, arc_count: u32) -> StyleMap {
    let mut vars = theme.style_vars();
    vars.insert("stroke-width", format!("{}px", stroke_width_for(arc_count)));
    vars.insert("arc-count", arc_count);
    vars
}
