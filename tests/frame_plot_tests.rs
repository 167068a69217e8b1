use approx::assert_relative_eq;
use toerings::color::Color;
use toerings::core::{LinearScale, Viewport, project_sparkline};
use toerings::element::Element;
use toerings::error::RingsError;
use toerings::render::RenderFrame;
use toerings::sparkline::{
    FramePlot, FramePlotEngine, PlotData, PlotEngine, PlotHandle, STROKE_WIDTH, SparklineOptions,
};

fn plot(options: SparklineOptions, x: Vec<f64>, y: Vec<f64>) -> FramePlot {
    let mut engine: FramePlotEngine = FramePlotEngine::new();
    let mut host = Element::new("div");
    engine
        .create(options, PlotData::new(x, y), &mut host)
        .expect("create plot")
}

fn draw(plot: &mut FramePlot) -> RenderFrame {
    plot.redraw().expect("redraw");
    plot.renderer().last_frame.clone().expect("frame")
}

fn line_points(frame: &RenderFrame) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = frame.lines.iter().map(|line| (line.x1, line.y1)).collect();
    if let Some(last) = frame.lines.last() {
        points.push((last.x2, last.y2));
    }
    points
}

#[test]
fn redraw_maps_samples_into_the_sparkline_box() {
    let magenta = Color::rgb(1.0, 0.0, 1.0);
    let mut plot = plot(
        SparklineOptions::for_color(&magenta),
        vec![0.0, 1.0, 2.0],
        vec![0.0, 50.0, 100.0],
    );
    let frame = draw(&mut plot);

    assert_eq!(frame.viewport, Viewport::new(180, 15));
    assert_eq!(frame.lines.len(), 2);
    assert_eq!(line_points(&frame), vec![(0.0, 15.0), (90.0, 7.5), (180.0, 0.0)]);
    assert!(frame.lines.iter().all(|line| line.stroke_width == STROKE_WIDTH));

    assert_eq!(frame.polygons.len(), 1);
    let polygon = &frame.polygons[0];
    assert_eq!(polygon.points.len(), 6);
    assert_eq!(polygon.points.first(), polygon.points.last());
    assert_eq!(polygon.points[0], (0.0, 15.0));
    assert_eq!(polygon.points[4], (180.0, 15.0));

    let stroke = frame.lines[0].color;
    assert_relative_eq!(stroke.alpha, 0.7);
    assert_relative_eq!(polygon.color.alpha, 0.5);
    assert_eq!(plot.redraw_count(), 1);
}

#[test]
fn px_align_snaps_vertices() {
    let mut plot = plot(
        SparklineOptions::for_color(&Color::WHITE).with_px_align(true),
        vec![0.0, 1.0, 2.0],
        vec![0.0, 50.0, 100.0],
    );
    let frame = draw(&mut plot);
    assert_eq!(line_points(&frame), vec![(0.0, 15.0), (90.0, 8.0), (180.0, 0.0)]);
}

#[test]
fn flat_series_sits_mid_height() {
    let mut plot = plot(
        SparklineOptions::for_color(&Color::WHITE),
        vec![0.0, 1.0],
        vec![5.0, 5.0],
    );
    let frame = draw(&mut plot);
    assert_eq!(line_points(&frame), vec![(0.0, 7.5), (180.0, 7.5)]);
}

#[test]
fn single_sample_draws_fill_but_no_line() {
    let mut plot = plot(SparklineOptions::for_color(&Color::WHITE), vec![3.0], vec![1.0]);
    let frame = draw(&mut plot);

    assert!(frame.lines.is_empty());
    assert_eq!(frame.polygons.len(), 1);
    assert_eq!(frame.polygons[0].points[1], (90.0, 7.5));
}

#[test]
fn non_finite_samples_are_skipped() {
    let geometry = project_sparkline(
        &[0.0, 1.0, 2.0],
        &[0.0, f64::NAN, 100.0],
        Viewport::new(180, 15),
        false,
    )
    .expect("geometry");

    let points: Vec<(f64, f64)> = geometry.line_points.iter().map(|v| (v.x, v.y)).collect();
    assert_eq!(points, vec![(0.0, 15.0), (180.0, 0.0)]);
}

#[test]
fn mismatched_lengths_use_the_shorter_slice() {
    let geometry = project_sparkline(&[0.0, 1.0, 2.0], &[1.0, 2.0], Viewport::new(10, 10), false)
        .expect("geometry");
    assert_eq!(geometry.line_points.len(), 2);
    assert_eq!(geometry.segments().count(), 1);
}

#[test]
fn zero_sized_plot_is_rejected() {
    let mut engine: FramePlotEngine = FramePlotEngine::new();
    let mut host = Element::new("div");
    let result = engine.create(
        SparklineOptions::for_color(&Color::WHITE).with_size(0, 15),
        PlotData::default(),
        &mut host,
    );

    assert!(matches!(
        result,
        Err(RingsError::InvalidViewport {
            width: 0,
            height: 15
        })
    ));
    assert_eq!(engine.plots_created(), 0);
}

#[test]
fn destroyed_plot_refuses_to_redraw() {
    let mut plot = plot(SparklineOptions::for_color(&Color::WHITE), vec![0.0], vec![0.0]);
    plot.destroy();

    assert!(plot.is_destroyed());
    assert!(plot.data().is_empty());
    assert!(matches!(plot.redraw(), Err(RingsError::InvalidData(_))));
}

#[test]
fn paint_for_unknown_series_is_ignored() {
    let mut plot = plot(SparklineOptions::for_color(&Color::WHITE), vec![0.0], vec![0.0]);
    plot.set_series_paint(7, toerings::sparkline::SeriesPaint::eager(&Color::BLACK));
    assert_eq!(plot.options().series.len(), 2);
}

#[test]
fn linear_scale_round_trips_pixels() {
    let scale = LinearScale::new(10.0, 20.0).expect("scale");
    let pixel = scale.domain_to_pixel(15.0, 180.0).expect("pixel");
    assert_relative_eq!(pixel, 90.0);
    assert_relative_eq!(scale.pixel_to_domain(pixel, 180.0).expect("domain"), 15.0);

    assert!(LinearScale::new(1.0, 1.0).is_err());
    assert_eq!(LinearScale::fit(Vec::new(), 1.0).domain(), (0.0, 1.0));
    assert_eq!(LinearScale::fit([4.0, f64::NAN], 0.5).domain(), (3.5, 4.5));
}
