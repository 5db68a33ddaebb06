use chart_cursor::core::{PlotFrame, Point, Size};
use chart_cursor::interaction::{PointerDispatcher, PointerEvent};
use chart_cursor::render::path::{ArcOptions, arc, arc_to};
use chart_cursor::render::{Basis, Smoothing, Tension, WaveSpec, WavedLineCache};
use chart_cursor::{CursorBehavior, CursorConfig, XyCursor};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn zigzag(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 4.0;
            Point::new(x, if i % 2 == 0 { 0.0 } else { 25.0 + (x * 0.1).sin() * 10.0 })
        })
        .collect()
}

fn bench_arc_paths(c: &mut Criterion) {
    c.bench_function("arc_to_720deg", |b| {
        b.iter(|| arc_to(black_box(-90.0), black_box(720.0), black_box(180.0), None))
    });

    let options = ArcOptions::default()
        .with_inner_radius(60.0)
        .with_corner_radius(8.0);
    c.bench_function("rounded_sector", |b| {
        b.iter(|| arc(black_box(10.0), black_box(75.0), black_box(200.0), options))
    });
}

fn bench_smoothing_1k(c: &mut Criterion) {
    let points = zigzag(1_000);
    let tension = Tension::new(0.3, 0.3);
    let basis = Basis::new(false);

    c.bench_function("tension_smoothing_1k", |b| {
        b.iter(|| tension.smooth(black_box(&points)))
    });
    c.bench_function("basis_smoothing_1k", |b| {
        b.iter(|| basis.smooth(black_box(&points)))
    });
}

fn bench_waved_line_cache(c: &mut Criterion) {
    let spec = WaveSpec::new(Point::new(0.0, 0.0), Point::new(800.0, 120.0), 16.0, 6.0, 0.8);

    c.bench_function("waved_line_uncached", |b| {
        b.iter(|| {
            let mut cache = WavedLineCache::new(1);
            cache.waved_line(black_box(spec))
        })
    });

    let mut cache = WavedLineCache::default();
    let _ = cache.waved_line(spec);
    c.bench_function("waved_line_cached", |b| {
        b.iter(|| cache.waved_line(black_box(spec)))
    });
}

fn bench_cursor_drag(c: &mut Criterion) {
    let dispatcher = PointerDispatcher::new();
    let frame = PlotFrame::new(Point::ORIGIN, Size::new(1600.0, 900.0));
    let _cursor = XyCursor::new(CursorConfig::new(CursorBehavior::ZoomXY), 1, frame)
        .expect("valid cursor")
        .into_shared(&dispatcher);

    c.bench_function("cursor_zoom_drag_100_moves", |b| {
        b.iter(|| {
            dispatcher.dispatch(&PointerEvent::moved(100.0, 100.0).over(1));
            dispatcher.dispatch(&PointerEvent::down(100.0, 100.0).over(1));
            for step in 0..100 {
                let offset = f64::from(step) * 10.0;
                dispatcher.dispatch(&PointerEvent::moved(100.0 + offset, 100.0 + offset * 0.5).over(1));
            }
            black_box(dispatcher.dispatch(&PointerEvent::up(1_090.0, 595.0).over(1)))
        })
    });
}

criterion_group!(
    benches,
    bench_arc_paths,
    bench_smoothing_1k,
    bench_waved_line_cache,
    bench_cursor_drag
);
criterion_main!(benches);
