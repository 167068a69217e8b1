use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Viewport};
use crate::error::{RingsError, RingsResult};

/// Vertex in pixel coordinates, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotVertex {
    pub x: f64,
    pub y: f64,
}

/// Deterministic geometry for one sparkline series.
///
/// `line_points` follows the mapped samples.
/// `fill_polygon` is an explicitly closed polygon against the bottom edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparklineGeometry {
    pub line_points: Vec<PlotVertex>,
    pub fill_polygon: Vec<PlotVertex>,
}

impl SparklineGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_points.is_empty()
    }

    /// Adjacent point pairs forming the stroked line.
    pub fn segments(&self) -> impl Iterator<Item = (PlotVertex, PlotVertex)> + '_ {
        self.line_points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Projects index-aligned `xs`/`ys` samples into sparkline geometry.
///
/// Both scales are fitted to the data. Pairs with a non-finite coordinate are
/// skipped; samples past the shorter of the two slices are ignored. With
/// `px_align` the vertices are snapped to whole pixels.
pub fn project_sparkline(
    xs: &[f64],
    ys: &[f64],
    viewport: Viewport,
    px_align: bool,
) -> RingsResult<SparklineGeometry> {
    if !viewport.is_valid() {
        return Err(RingsError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let samples: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (*x, *y))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if samples.is_empty() {
        return Ok(SparklineGeometry::empty());
    }

    let x_scale = LinearScale::fit(samples.iter().map(|(x, _)| *x), 1.0);
    let y_scale = LinearScale::fit(samples.iter().map(|(_, y)| *y), 1.0);
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let snap = |value: f64| if px_align { value.round() } else { value };

    let mut line_points = Vec::with_capacity(samples.len());
    for (x, y) in samples {
        let px = x_scale.domain_to_pixel(x, width)?;
        let py = height - y_scale.domain_to_pixel(y, height)?;
        line_points.push(PlotVertex {
            x: snap(px),
            y: snap(py),
        });
    }

    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(PlotVertex {
        x: first_x,
        y: height,
    });
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(PlotVertex {
        x: last_x,
        y: height,
    });
    fill_polygon.push(PlotVertex {
        x: first_x,
        y: height,
    });

    Ok(SparklineGeometry {
        line_points,
        fill_polygon,
    })
}
