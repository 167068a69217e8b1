use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use toerings::color::Color;
use toerings::element::{Element, InlineStyle};
use toerings::format::human_bytes;
use toerings::sparkline::{FramePlot, FramePlotEngine, PlotSample, SparklineBinding};
use toerings::style::{StyleMap, StyleVars};
use toerings::theme::Theme;
use toerings::widget::ring_gauge_vars;

fn bench_style_vars_update(c: &mut Criterion) {
    let theme = Theme::default();
    let mut vars = StyleVars::attach(InlineStyle::new(), ring_gauge_vars(&theme, 3));
    let alternate = ring_gauge_vars(&theme, 5);
    let base = ring_gauge_vars(&theme, 3);

    c.bench_function("style_vars_update_alternating", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let next: StyleMap = if flip { alternate.clone() } else { base.clone() };
            vars.update(black_box(next));
        })
    });
}

fn bench_sparkline_update_redraw_60(c: &mut Criterion) {
    let mut engine: FramePlotEngine = FramePlotEngine::new();
    let mut host = Element::new("div");
    let y: Vec<f64> = (0..60_u32).map(|i| (f64::from(i) * 0.3).sin() * 50.0 + 50.0).collect();
    let mut binding: SparklineBinding<FramePlot> =
        SparklineBinding::attach(&mut engine, &mut host, PlotSample::indexed(y.clone()))
            .expect("attach sparkline");
    let colors = [Color::rgb(1.0, 0.0, 1.0), Color::rgb(0.0, 1.0, 0.0)];

    c.bench_function("sparkline_update_redraw_60", |b| {
        let mut tick = 0usize;
        b.iter(|| {
            tick += 1;
            let sample = PlotSample::indexed(black_box(y.clone())).with_color(colors[tick % 2]);
            binding.update(sample);
            binding.plot_mut().redraw().expect("redraw");
        })
    });
}

fn bench_human_bytes(c: &mut Criterion) {
    c.bench_function("human_bytes_mixed", |b| {
        b.iter(|| {
            for value in [0_u64, 999, 1_536, 10_485_760, u64::MAX] {
                let _ = human_bytes(black_box(value));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_style_vars_update,
    bench_sparkline_update_redraw_60,
    bench_human_bytes
);
criterion_main!(benches);
